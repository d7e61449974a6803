// Extractive summarizer: offline fallback for the hosted model.
//
// Uses the `keyword_extraction` crate to weight words by TF-IDF, treating
// each sentence of the transcript as its own document. Sentences whose
// content words are distinctive score highest. The top sentences are kept
// within the word budget and returned in their original order, so the
// summary still reads as a condensed transcript.

use std::collections::HashMap;
use std::sync::OnceLock;

use anyhow::Result;
use async_trait::async_trait;
use keyword_extraction::tf_idf::{TfIdf, TfIdfParams};
use regex_lite::Regex;
use stop_words::{get, LANGUAGE};
use tracing::debug;

use super::traits::{SummaryParams, Summarizer};

/// Cap on how many weighted words we pull back from TF-IDF.
const MAX_WEIGHTED_WORDS: usize = 2000;

fn sentence_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^.!?]+(?:[.!?]+|$)").expect("sentence pattern is valid"))
}

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[a-z0-9]+(?:'[a-z]+)*").expect("word pattern is valid"))
}

/// Split text into trimmed, non-empty sentences.
pub fn split_sentences(text: &str) -> Vec<String> {
    sentence_pattern()
        .find_iter(text)
        .map(|m| m.as_str().split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|s| s.chars().any(|c| c.is_alphanumeric()))
        .collect()
}

/// TF-IDF sentence-selection summarizer. No API calls, no model files.
pub struct ExtractiveSummarizer {
    params: SummaryParams,
}

impl ExtractiveSummarizer {
    pub fn new(params: SummaryParams) -> Self {
        Self { params }
    }

    /// Summarize synchronously.
    ///
    /// Text with no word characters has nothing to rank, so it comes back
    /// trimmed as its own summary.
    pub fn extract(&self, text: &str) -> Result<String> {
        let sentences = split_sentences(text);
        if sentences.is_empty() {
            return Ok(text.trim().to_string());
        }
        if sentences.len() == 1 {
            return Ok(sentences.into_iter().next().unwrap_or_default());
        }

        let stop_words: Vec<String> = get(LANGUAGE::English);
        let weights = word_weights(&sentences, &stop_words);

        let scores: Vec<f64> = sentences
            .iter()
            .map(|s| sentence_score(s, &weights, &stop_words))
            .collect();

        let chosen = select_sentences(&sentences, &scores, &self.params);

        debug!(
            sentences = sentences.len(),
            selected = chosen.len(),
            weighted_words = weights.len(),
            "Extracted summary sentences"
        );

        Ok(chosen
            .into_iter()
            .map(|i| sentences[i].as_str())
            .collect::<Vec<_>>()
            .join(" "))
    }
}

impl Default for ExtractiveSummarizer {
    fn default() -> Self {
        Self::new(SummaryParams::default())
    }
}

#[async_trait]
impl Summarizer for ExtractiveSummarizer {
    async fn summarize(&self, text: &str) -> Result<String> {
        self.extract(text)
    }

    fn name(&self) -> &str {
        "extractive"
    }
}

/// TF-IDF weight per word, with each sentence as a separate document.
fn word_weights(sentences: &[String], stop_words: &[String]) -> HashMap<String, f64> {
    let params = TfIdfParams::UnprocessedDocuments(sentences, stop_words, None);
    let tfidf = TfIdf::new(params);
    tfidf
        .get_ranked_word_scores(MAX_WEIGHTED_WORDS)
        .into_iter()
        .map(|(word, score)| (word.to_lowercase(), score as f64))
        .collect()
}

/// Mean weight of a sentence's content words.
fn sentence_score(sentence: &str, weights: &HashMap<String, f64>, stop_words: &[String]) -> f64 {
    let lower = sentence.to_lowercase();
    let content: Vec<&str> = word_pattern()
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|w| !stop_words.iter().any(|s| s == w))
        .collect();

    if content.is_empty() {
        return 0.0;
    }
    let total: f64 = content
        .iter()
        .map(|w| weights.get(*w).copied().unwrap_or(0.0))
        .sum();
    total / content.len() as f64
}

/// Pick sentence indices by descending score within the word budget.
///
/// Always keeps at least one sentence. Keeps adding sentences while under
/// `min_length` words even if that overshoots `max_length`. Returns indices
/// in document order.
fn select_sentences(sentences: &[String], scores: &[f64], params: &SummaryParams) -> Vec<usize> {
    let max = params.max_length as usize;
    let min = params.min_length as usize;

    let mut ranked: Vec<usize> = (0..sentences.len()).collect();
    ranked.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));

    let mut chosen = Vec::new();
    let mut total_words = 0usize;
    for idx in ranked {
        if total_words >= max {
            break;
        }
        let words = sentences[idx].split_whitespace().count();
        let fits = total_words + words <= max;
        if chosen.is_empty() || fits || total_words < min {
            chosen.push(idx);
            total_words += words;
        }
    }

    chosen.sort_unstable();
    chosen
}
