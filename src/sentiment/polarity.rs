// Lexicon-based polarity scorer.
//
// Walks the lowercased token stream and produces one assessment per
// sentiment word found in the lexicon:
//
// - a preceding modifier ("very", "slightly") scales polarity and
//   subjectivity by its intensity
// - a negation ("not", "never", "don't") up to three tokens earlier flips
//   the polarity and halves it
// - punctuation ends both the modifier and the negation scope
//
// The document score is the mean of all assessments, or neutral when the
// text contains no sentiment words at all.

use std::sync::OnceLock;

use anyhow::Result;
use async_trait::async_trait;
use regex_lite::Regex;
use tracing::debug;

use super::lexicon::Lexicon;
use super::traits::{SentimentResult, SentimentScorer};

/// Polarity multiplier for negated sentiment words.
pub const NEGATION_FACTOR: f64 = -0.5;

/// A negation reaches at most this many tokens forward.
const NEGATION_WINDOW: usize = 3;

const NEGATIONS: [&str; 6] = ["not", "no", "never", "neither", "nor", "cannot"];

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // Words with inner apostrophes stay whole so "don't" is one token.
        Regex::new(r"[a-z]+(?:'[a-z]+)*|[.!?;:,]").expect("token pattern is valid")
    })
}

fn tokenize(text: &str) -> Vec<String> {
    let normalized = text.to_lowercase().replace(['\u{2019}', '\u{2018}'], "'");
    token_pattern()
        .find_iter(&normalized)
        .map(|m| m.as_str().to_string())
        .collect()
}

fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(&token) || token.ends_with("n't")
}

fn is_punctuation(token: &str) -> bool {
    token.len() == 1 && !token.as_bytes()[0].is_ascii_alphabetic()
}

/// Local lexicon-based sentiment scorer. No network, no model files.
pub struct LexiconScorer {
    lexicon: Lexicon,
}

impl LexiconScorer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score a text synchronously.
    pub fn assess(&self, text: &str) -> SentimentResult {
        let mut assessments: Vec<(f64, f64)> = Vec::new();
        let mut modifier: Option<f64> = None;
        // Tokens seen since the last negation, if one is in scope
        let mut negation: Option<usize> = None;

        for token in tokenize(text) {
            if is_punctuation(&token) {
                modifier = None;
                negation = None;
                continue;
            }
            if is_negation(&token) {
                modifier = None;
                negation = Some(0);
                continue;
            }

            match self.lexicon.get(&token) {
                Some(entry) if entry.is_modifier() => {
                    modifier = Some(modifier.unwrap_or(1.0) * entry.intensity);
                }
                Some(entry) => {
                    let mut polarity = entry.polarity;
                    let mut subjectivity = entry.subjectivity;
                    if let Some(intensity) = modifier.take() {
                        polarity *= intensity;
                        subjectivity *= intensity;
                    }
                    if negation.take().is_some() {
                        polarity *= NEGATION_FACTOR;
                    }
                    assessments.push((polarity.clamp(-1.0, 1.0), subjectivity.clamp(0.0, 1.0)));
                }
                None => {
                    modifier = None;
                    if let Some(distance) = negation.as_mut() {
                        *distance += 1;
                        if *distance >= NEGATION_WINDOW {
                            negation = None;
                        }
                    }
                }
            }
        }

        if assessments.is_empty() {
            return SentimentResult::neutral();
        }

        let n = assessments.len() as f64;
        let polarity = assessments.iter().map(|(p, _)| p).sum::<f64>() / n;
        let subjectivity = assessments.iter().map(|(_, s)| s).sum::<f64>() / n;

        SentimentResult {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }
}

#[async_trait]
impl SentimentScorer for LexiconScorer {
    async fn score_text(&self, text: &str) -> Result<SentimentResult> {
        let result = self.assess(text);
        debug!(
            polarity = result.polarity,
            subjectivity = result.subjectivity,
            text_preview = %crate::output::truncate_chars(text, 50),
            "Lexicon scored text"
        );
        Ok(result)
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}
