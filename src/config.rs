use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::summarizer::huggingface::{DEFAULT_API_URL, DEFAULT_MODEL};
use crate::summarizer::traits::SummaryParams;

/// Which summarization backend to use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SummarizerBackend {
    /// Hosted pretrained model via the Hugging Face Inference API (default)
    HuggingFace,
    /// Local TF-IDF sentence extraction: no API token, no network
    Extractive,
}

impl SummarizerBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummarizerBackend::HuggingFace => "huggingface",
            SummarizerBackend::Extractive => "extractive",
        }
    }
}

/// Central configuration loaded from environment variables.
///
/// Secrets come from env vars only. The .env file is loaded automatically
/// at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    pub summarizer_backend: SummarizerBackend,
    /// Hugging Face API token (HF_API_TOKEN)
    pub hf_api_token: String,
    /// Inference API base URL
    pub hf_api_url: String,
    /// Summarization model id on the Inference API
    pub summary_model: String,
    pub summary_params: SummaryParams,
    /// HTTP timeout for a single summarization request
    pub summary_timeout: Duration,
    /// Extra lexicon file merged over the built-in one, if any
    pub lexicon_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            summarizer_backend: SummarizerBackend::HuggingFace,
            hf_api_token: String::new(),
            hf_api_url: DEFAULT_API_URL.to_string(),
            summary_model: DEFAULT_MODEL.to_string(),
            summary_params: SummaryParams::default(),
            summary_timeout: Duration::from_secs(120),
            lexicon_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Unset variables fall back to defaults; set-but-invalid numbers are
    /// errors naming the variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let summarizer_backend = match lookup("DEBATE_SUMMARIZER").as_deref() {
            None | Some("") | Some("huggingface") => SummarizerBackend::HuggingFace,
            Some("extractive") => SummarizerBackend::Extractive,
            Some(other) => anyhow::bail!(
                "Unknown DEBATE_SUMMARIZER value {other:?} (expected \"huggingface\" or \"extractive\")"
            ),
        };

        let summary_params = SummaryParams {
            max_length: parse_var(&lookup, "SUMMARY_MAX_LENGTH")?
                .unwrap_or(defaults.summary_params.max_length),
            min_length: parse_var(&lookup, "SUMMARY_MIN_LENGTH")?
                .unwrap_or(defaults.summary_params.min_length),
            do_sample: false,
        };

        let summary_timeout = parse_var::<u64, _>(&lookup, "SUMMARY_TIMEOUT_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.summary_timeout);

        let lexicon_path = match lookup("DEBATE_LEXICON_PATH").filter(|p| !p.is_empty()) {
            Some(path) => Some(PathBuf::from(path)),
            None => Some(default_lexicon_path()).filter(|p| p.exists()),
        };

        Ok(Self {
            summarizer_backend,
            hf_api_token: lookup("HF_API_TOKEN").unwrap_or_default(),
            hf_api_url: lookup("HF_API_URL")
                .filter(|u| !u.is_empty())
                .unwrap_or(defaults.hf_api_url),
            summary_model: lookup("SUMMARY_MODEL")
                .filter(|m| !m.is_empty())
                .unwrap_or(defaults.summary_model),
            summary_params,
            summary_timeout,
            lexicon_path,
        })
    }

    /// Validate that the chosen summarizer backend has what it needs.
    /// For Hugging Face: the API token must be set.
    pub fn require_summarizer(&self) -> Result<()> {
        if self.summary_params.min_length > self.summary_params.max_length {
            anyhow::bail!(
                "SUMMARY_MIN_LENGTH ({}) is greater than SUMMARY_MAX_LENGTH ({})",
                self.summary_params.min_length,
                self.summary_params.max_length
            );
        }
        if self.summary_params.max_length == 0 {
            anyhow::bail!("SUMMARY_MAX_LENGTH must be greater than zero");
        }
        match self.summarizer_backend {
            SummarizerBackend::HuggingFace => {
                if self.hf_api_token.is_empty() {
                    anyhow::bail!(
                        "HF_API_TOKEN not set. Add it to your .env file.\n\
                         Or set DEBATE_SUMMARIZER=extractive to summarize offline."
                    );
                }
                Ok(())
            }
            SummarizerBackend::Extractive => Ok(()),
        }
    }
}

/// Returns the default location of the user lexicon:
/// ~/.local/share/debate-summarizer/lexicon.tsv on Linux.
pub fn default_lexicon_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("debate-summarizer")
        .join("lexicon.tsv")
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Invalid value for {key}: {raw:?}")),
        None => Ok(None),
    }
}
