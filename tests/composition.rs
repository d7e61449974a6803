// Composition tests: the analysis pipeline with real and stub backends.
//
// Verifies that blank transcripts never reach a backend, that backend
// errors propagate with context, and that real lexicon scoring flows
// through to the consensus label and chart.

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use async_trait::async_trait;

use debate_summarizer::pipeline::analyze::EMPTY_INPUT_WARNING;
use debate_summarizer::pipeline::{analyze_transcript, AnalysisOutcome};
use debate_summarizer::scoring::{Consensus, SentimentLabel};
use debate_summarizer::sentiment::lexicon::Lexicon;
use debate_summarizer::sentiment::polarity::LexiconScorer;
use debate_summarizer::sentiment::traits::{SentimentResult, SentimentScorer};
use debate_summarizer::summarizer::extractive::{split_sentences, ExtractiveSummarizer};
use debate_summarizer::summarizer::traits::{Summarizer, SummaryParams};

// ============================================================
// Stub backends
// ============================================================

/// Returns a fixed summary and counts calls.
#[derive(Default)]
struct FixedSummarizer {
    calls: AtomicUsize,
}

#[async_trait]
impl Summarizer for FixedSummarizer {
    async fn summarize(&self, _text: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok("Speakers debated the transit budget.".to_string())
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

struct FailingSummarizer;

#[async_trait]
impl Summarizer for FailingSummarizer {
    async fn summarize(&self, _text: &str) -> Result<String> {
        anyhow::bail!("model unavailable")
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Returns a fixed polarity and counts calls.
struct FixedScorer {
    polarity: f64,
    calls: AtomicUsize,
}

impl FixedScorer {
    fn new(polarity: f64) -> Self {
        Self {
            polarity,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl SentimentScorer for FixedScorer {
    async fn score_text(&self, _text: &str) -> Result<SentimentResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(SentimentResult {
            polarity: self.polarity,
            subjectivity: 0.5,
        })
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

fn lexicon_scorer() -> LexiconScorer {
    LexiconScorer::new(Lexicon::builtin().unwrap())
}

// ============================================================
// Empty-input short circuit
// ============================================================

#[tokio::test]
async fn blank_transcript_never_calls_backends() {
    let summarizer = FixedSummarizer::default();
    let scorer = FixedScorer::new(0.5);

    for input in ["", "   ", "\n\t  \n"] {
        let outcome = analyze_transcript(input, &summarizer, &scorer).await.unwrap();
        match outcome {
            AnalysisOutcome::NeedsInput { warning } => {
                assert_eq!(warning, EMPTY_INPUT_WARNING);
            }
            AnalysisOutcome::Complete(_) => panic!("blank input {input:?} produced a report"),
        }
    }

    assert_eq!(summarizer.calls.load(Ordering::SeqCst), 0);
    assert_eq!(scorer.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn blank_transcript_short_circuits_even_with_failing_backend() {
    let scorer = FixedScorer::new(0.0);
    let outcome = analyze_transcript(" ", &FailingSummarizer, &scorer).await.unwrap();
    assert!(outcome.report().is_none());
}

#[test]
fn warning_text() {
    assert_eq!(EMPTY_INPUT_WARNING, "Please enter some text before summarizing.");
}

// ============================================================
// Stub backends: derivation from a known polarity
// ============================================================

#[tokio::test]
async fn each_backend_called_once() {
    let summarizer = FixedSummarizer::default();
    let scorer = FixedScorer::new(0.1);
    let outcome = analyze_transcript("Some debate.", &summarizer, &scorer).await.unwrap();
    assert!(outcome.report().is_some());
    assert_eq!(summarizer.calls.load(Ordering::SeqCst), 1);
    assert_eq!(scorer.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn report_fields_follow_rounded_polarity() {
    let summarizer = FixedSummarizer::default();
    let scorer = FixedScorer::new(-0.3333);
    let outcome = analyze_transcript("  We disagree on everything.  ", &summarizer, &scorer)
        .await
        .unwrap();
    let report = outcome.report().expect("report");

    assert_eq!(report.summary, "Speakers debated the transit budget.");
    assert_eq!(report.sentiment_score, -0.33);
    assert_eq!(report.sentiment_label, SentimentLabel::Negative);
    assert_eq!(report.consensus, Consensus::ConflictDetected);
    assert_eq!(report.distribution.get(SentimentLabel::Negative), 0.33);
    assert_eq!(report.word_count, 4);
    assert_eq!(report.summarizer, "fixed");
}

#[tokio::test]
async fn summarizer_failure_propagates_with_context() {
    let scorer = FixedScorer::new(0.2);
    let err = analyze_transcript("A real transcript.", &FailingSummarizer, &scorer)
        .await
        .unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("Summarization failed (failing)"), "got: {msg}");
    assert!(msg.contains("model unavailable"), "got: {msg}");
}

#[tokio::test]
async fn report_serializes_for_dashboard() {
    let summarizer = FixedSummarizer::default();
    let scorer = FixedScorer::new(0.45);
    let outcome = analyze_transcript("Great debate.", &summarizer, &scorer).await.unwrap();
    let json = serde_json::to_value(outcome.report().unwrap()).unwrap();

    assert_eq!(json["sentiment_label"], "Positive");
    assert_eq!(json["sentiment_score"], 0.45);
    assert_eq!(json["consensus"], "Strong Agreement");
    assert_eq!(json["distribution"][0]["category"], "Positive");
    assert_eq!(json["distribution"][0]["score"], 0.45);
    assert_eq!(json["distribution"][1]["category"], "Negative");
    assert_eq!(json["distribution"][2]["category"], "Neutral");
    assert!(json["generated_at"].is_string());
}

// ============================================================
// Real lexicon scoring through the pipeline
// ============================================================

#[tokio::test]
async fn agreeable_debate_is_strong_agreement() {
    let summarizer = FixedSummarizer::default();
    let transcript = "Moderator: Thank you both. \
        Speaker A: This is a great plan and an excellent use of funds. \
        Speaker B: I agree, it is a wonderful idea.";
    let outcome = analyze_transcript(transcript, &summarizer, &lexicon_scorer())
        .await
        .unwrap();
    let report = outcome.report().unwrap();
    assert_eq!(report.sentiment_label, SentimentLabel::Positive);
    assert_eq!(report.consensus, Consensus::StrongAgreement);
}

#[tokio::test]
async fn hostile_debate_is_conflict() {
    let summarizer = FixedSummarizer::default();
    let transcript = "Speaker A: Your proposal is ridiculous and dishonest. \
        Speaker B: That claim is wrong, and frankly your plan is dangerous.";
    let outcome = analyze_transcript(transcript, &summarizer, &lexicon_scorer())
        .await
        .unwrap();
    let report = outcome.report().unwrap();
    assert_eq!(report.sentiment_label, SentimentLabel::Negative);
    assert_eq!(report.consensus, Consensus::ConflictDetected);
}

#[tokio::test]
async fn factual_transcript_is_neutral_mixed() {
    let summarizer = FixedSummarizer::default();
    let transcript = "The session opened at nine. Each speaker had four minutes.";
    let outcome = analyze_transcript(transcript, &summarizer, &lexicon_scorer())
        .await
        .unwrap();
    let report = outcome.report().unwrap();
    assert_eq!(report.sentiment_score, 0.0);
    assert_eq!(report.sentiment_label, SentimentLabel::Neutral);
    assert_eq!(report.consensus, Consensus::MixedOpinions);
    assert_eq!(report.distribution.get(SentimentLabel::Neutral), 1.0);
}

#[tokio::test]
async fn offline_pipeline_end_to_end() {
    let summarizer = ExtractiveSummarizer::new(SummaryParams {
        max_length: 20,
        min_length: 5,
        do_sample: false,
    });
    let transcript = "Speaker A opened by arguing that congestion pricing would cut traffic downtown. \
        Speaker B said the toll is unfair to commuters from outer neighborhoods. \
        Speaker A replied that revenue could fund more buses. \
        Both agreed that transit service needs better funding.";
    let outcome = analyze_transcript(transcript, &summarizer, &lexicon_scorer())
        .await
        .unwrap();
    let report = outcome.report().unwrap();

    assert!(!report.summary.is_empty());
    assert!(report.summary.split_whitespace().count() <= 20);
    for sentence in split_sentences(&report.summary) {
        assert!(transcript.contains(&sentence), "{sentence:?} not in transcript");
    }
    assert_eq!(report.summarizer, "extractive");
    // "unfair", "agreed", "better" average out slightly positive
    assert_eq!(report.sentiment_label, SentimentLabel::Positive);
    assert_eq!(report.consensus, Consensus::MixedOpinions);
}
