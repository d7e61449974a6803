// Summarizer trait: the swap-ready abstraction.
//
// The default implementation calls a pretrained BART model through the
// Hugging Face Inference API. An offline extractive summarizer implements
// the same trait for use without network access or an API token.

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

/// Generation parameters passed to the summarization model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryParams {
    /// Upper bound on summary length (model tokens; words for the extractive backend)
    pub max_length: u32,
    /// Lower bound on summary length
    pub min_length: u32,
    /// Greedy decoding when false, so the same transcript yields the same summary
    pub do_sample: bool,
}

impl Default for SummaryParams {
    fn default() -> Self {
        Self {
            max_length: 130,
            min_length: 30,
            do_sample: false,
        }
    }
}

/// Trait for producing a summary of a transcript.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize a single (non-empty) text.
    async fn summarize(&self, text: &str) -> Result<String>;

    /// Short backend name shown in status output and reports.
    fn name(&self) -> &str;
}
