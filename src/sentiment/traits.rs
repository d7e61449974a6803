// Sentiment scorer trait: the swap-ready abstraction.
//
// The default implementation is a local lexicon-based polarity analyzer.
// A remote classifier could implement the same trait without touching the
// analysis pipeline.

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

/// The result of scoring a transcript for sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentResult {
    /// Overall polarity from -1.0 (negative) to 1.0 (positive)
    pub polarity: f64,
    /// How opinionated the text is, from 0.0 (factual) to 1.0 (subjective)
    pub subjectivity: f64,
}

impl SentimentResult {
    pub fn neutral() -> Self {
        Self {
            polarity: 0.0,
            subjectivity: 0.0,
        }
    }
}

/// Trait for scoring the sentiment polarity of a text.
#[async_trait]
pub trait SentimentScorer: Send + Sync {
    /// Score a single text.
    async fn score_text(&self, text: &str) -> Result<SentimentResult>;

    /// Short backend name shown in status output.
    fn name(&self) -> &str;
}
