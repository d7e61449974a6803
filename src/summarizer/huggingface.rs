// Hugging Face Inference API summarizer.
//
// Sends the transcript to a hosted summarization model (facebook/bart-large-cnn
// by default) and returns the generated abstractive summary. Requires an API
// token. Cold models can take a while to load, so the request asks the API to
// wait for the model instead of failing fast with 503.
//
// API docs: https://huggingface.co/docs/inference-providers/tasks/summarization

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::{SummaryParams, Summarizer};

/// Default Inference API base URL.
pub const DEFAULT_API_URL: &str = "https://router.huggingface.co/hf-inference";

/// Default summarization model.
pub const DEFAULT_MODEL: &str = "facebook/bart-large-cnn";

/// Summarizer backed by a hosted Hugging Face model.
pub struct HuggingFaceSummarizer {
    client: Client,
    endpoint: String,
    api_token: String,
    model: String,
    params: SummaryParams,
}

impl HuggingFaceSummarizer {
    pub fn new(
        base_url: &str,
        model: &str,
        api_token: String,
        params: SummaryParams,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: format!("{}/models/{}", base_url.trim_end_matches('/'), model),
            api_token,
            model: model.to_string(),
            params,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Summarizer for HuggingFaceSummarizer {
    async fn summarize(&self, text: &str) -> Result<String> {
        let request = InferenceRequest {
            inputs: text,
            parameters: self.params,
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_token)
            .json(&request)
            .send()
            .await
            .context("Failed to call Hugging Face Inference API")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read Hugging Face Inference API response")?;

        let summary = parse_response(status, &body)?;

        debug!(
            model = %self.model,
            input_chars = text.chars().count(),
            summary_chars = summary.chars().count(),
            "Generated summary"
        );

        Ok(summary)
    }

    fn name(&self) -> &str {
        "huggingface"
    }
}

/// Turn a raw Inference API response into the summary text.
fn parse_response(status: StatusCode, body: &str) -> Result<String> {
    let parsed: Option<InferenceResponse> = serde_json::from_str(body).ok();

    if !status.is_success() {
        let message = match parsed {
            Some(InferenceResponse::Error { error }) => error,
            _ => crate::output::truncate_chars(body, 200),
        };
        anyhow::bail!("Hugging Face Inference API returned {}: {}", status, message);
    }

    match parsed {
        Some(InferenceResponse::Summaries(outputs)) => {
            let first = outputs
                .into_iter()
                .next()
                .context("Hugging Face Inference API returned no summaries")?;
            Ok(first.summary_text.trim().to_string())
        }
        Some(InferenceResponse::Error { error }) => {
            anyhow::bail!("Hugging Face Inference API error: {}", error)
        }
        None => anyhow::bail!(
            "Failed to parse Hugging Face Inference API response: {}",
            crate::output::truncate_chars(body, 200)
        ),
    }
}

// --- Inference API request/response types ---

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: SummaryParams,
    options: InferenceOptions,
}

#[derive(Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Summaries(Vec<SummaryOutput>),
    Error { error: String },
}

#[derive(Deserialize)]
struct SummaryOutput {
    summary_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_summary_list() {
        let body = r#"[{"summary_text": "  Both sides agreed on funding.  "}]"#;
        let summary = parse_response(StatusCode::OK, body).unwrap();
        assert_eq!(summary, "Both sides agreed on funding.");
    }

    #[test]
    fn test_parse_empty_list_is_error() {
        let err = parse_response(StatusCode::OK, "[]").unwrap_err();
        assert!(err.to_string().contains("no summaries"));
    }

    #[test]
    fn test_parse_error_body_with_failure_status() {
        let body = r#"{"error": "Model facebook/bart-large-cnn is currently loading"}"#;
        let err = parse_response(StatusCode::SERVICE_UNAVAILABLE, body).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("503"), "got: {msg}");
        assert!(msg.contains("currently loading"), "got: {msg}");
    }

    #[test]
    fn test_parse_error_body_with_ok_status() {
        let body = r#"{"error": "Input is too long"}"#;
        let err = parse_response(StatusCode::OK, body).unwrap_err();
        assert!(err.to_string().contains("Input is too long"));
    }

    #[test]
    fn test_parse_non_json_failure() {
        let err = parse_response(StatusCode::UNAUTHORIZED, "Unauthorized").unwrap_err();
        assert!(err.to_string().contains("401"));
    }

    #[test]
    fn test_request_body_shape() {
        let request = InferenceRequest {
            inputs: "transcript",
            parameters: SummaryParams::default(),
            options: InferenceOptions {
                wait_for_model: true,
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["inputs"], "transcript");
        assert_eq!(json["parameters"]["max_length"], 130);
        assert_eq!(json["parameters"]["min_length"], 30);
        assert_eq!(json["parameters"]["do_sample"], false);
        assert_eq!(json["options"]["wait_for_model"], true);
    }

    #[test]
    fn test_endpoint_joins_base_and_model() {
        let s = HuggingFaceSummarizer::new(
            "http://localhost:9999/",
            DEFAULT_MODEL,
            "token".into(),
            SummaryParams::default(),
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(
            s.endpoint(),
            "http://localhost:9999/models/facebook/bart-large-cnn"
        );
    }
}
