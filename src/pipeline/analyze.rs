// Transcript analysis pipeline.
//
// Takes raw transcript text and produces a DebateReport: summary from the
// Summarizer, polarity from the SentimentScorer, then label, consensus and
// chart values derived from the rounded polarity. The two backend calls are
// independent, so they run concurrently.
//
// Empty input never reaches either backend; it comes back as a warning.

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::scoring::{chart_distribution, round_score, Consensus, Distribution, SentimentLabel};
use crate::sentiment::traits::{SentimentResult, SentimentScorer};
use crate::summarizer::traits::Summarizer;

/// Shown instead of a result when the transcript is blank.
pub const EMPTY_INPUT_WARNING: &str = "Please enter some text before summarizing.";

/// Everything the dashboard shows for one transcript.
#[derive(Debug, Clone, Serialize)]
pub struct DebateReport {
    pub summary: String,
    pub sentiment_label: SentimentLabel,
    /// Polarity rounded to two decimals, in [-1, 1]
    pub sentiment_score: f64,
    /// Subjectivity rounded to two decimals, in [0, 1]
    pub subjectivity: f64,
    pub consensus: Consensus,
    pub distribution: Distribution,
    /// Words in the submitted transcript
    pub word_count: usize,
    /// Which summarizer backend produced the summary
    pub summarizer: String,
    pub generated_at: String,
}

impl DebateReport {
    /// Assemble a report from backend outputs. All derived fields come from
    /// the rounded polarity.
    pub fn build(
        summary: String,
        sentiment: SentimentResult,
        word_count: usize,
        summarizer: &str,
    ) -> Self {
        let score = round_score(sentiment.polarity);
        Self {
            summary,
            sentiment_label: SentimentLabel::from_score(score),
            sentiment_score: score,
            subjectivity: round_score(sentiment.subjectivity),
            consensus: Consensus::from_score(score),
            distribution: chart_distribution(score),
            word_count,
            summarizer: summarizer.to_string(),
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Result of submitting a transcript.
#[derive(Debug, Clone)]
pub enum AnalysisOutcome {
    /// Input was blank; nothing was analyzed.
    NeedsInput { warning: &'static str },
    Complete(DebateReport),
}

impl AnalysisOutcome {
    pub fn report(&self) -> Option<&DebateReport> {
        match self {
            AnalysisOutcome::Complete(report) => Some(report),
            AnalysisOutcome::NeedsInput { .. } => None,
        }
    }
}

/// Trimmed transcript, or None if it is empty or whitespace-only.
pub fn validate_transcript(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Run the full analysis for one transcript.
pub async fn analyze_transcript(
    text: &str,
    summarizer: &dyn Summarizer,
    scorer: &dyn SentimentScorer,
) -> Result<AnalysisOutcome> {
    let Some(transcript) = validate_transcript(text) else {
        return Ok(AnalysisOutcome::NeedsInput {
            warning: EMPTY_INPUT_WARNING,
        });
    };

    let word_count = transcript.split_whitespace().count();
    info!(
        words = word_count,
        summarizer = summarizer.name(),
        scorer = scorer.name(),
        "Analyzing transcript"
    );

    let summary_fut = async {
        summarizer
            .summarize(transcript)
            .await
            .with_context(|| format!("Summarization failed ({})", summarizer.name()))
    };
    let sentiment_fut = async {
        scorer
            .score_text(transcript)
            .await
            .with_context(|| format!("Sentiment scoring failed ({})", scorer.name()))
    };
    let (summary, sentiment) = futures::try_join!(summary_fut, sentiment_fut)?;

    let report = DebateReport::build(summary, sentiment, word_count, summarizer.name());

    info!(
        sentiment = %report.sentiment_label,
        score = report.sentiment_score,
        consensus = %report.consensus,
        summary_words = report.summary.split_whitespace().count(),
        "Analysis complete"
    );

    Ok(AnalysisOutcome::Complete(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_transcript() {
        assert_eq!(validate_transcript("  hello \n"), Some("hello"));
        assert_eq!(validate_transcript(""), None);
        assert_eq!(validate_transcript(" \t\n "), None);
    }

    #[test]
    fn test_build_uses_rounded_score() {
        let report = DebateReport::build(
            "s".into(),
            SentimentResult {
                polarity: 0.004,
                subjectivity: 0.333,
            },
            10,
            "test",
        );
        assert_eq!(report.sentiment_score, 0.0);
        assert_eq!(report.sentiment_label, SentimentLabel::Neutral);
        assert_eq!(report.consensus, Consensus::MixedOpinions);
        assert_eq!(report.subjectivity, 0.33);
        assert_eq!(report.distribution.get(SentimentLabel::Neutral), 1.0);
    }

    #[test]
    fn test_build_rounding_crosses_consensus_boundary() {
        // 0.404 rounds to 0.40, which is not above the agreement threshold
        let report = DebateReport::build(
            "s".into(),
            SentimentResult {
                polarity: 0.404,
                subjectivity: 0.5,
            },
            10,
            "test",
        );
        assert_eq!(report.sentiment_score, 0.4);
        assert_eq!(report.consensus, Consensus::MixedOpinions);
    }
}
