// Sentiment and consensus labels derived from the rounded polarity score.
//
// Both mappings are pure threshold comparisons. Callers must round the raw
// polarity with `round_score` first so the label always matches the score
// shown next to it.

use serde::Serialize;

/// Consensus threshold: strictly above this is agreement.
pub const AGREEMENT_THRESHOLD: f64 = 0.4;

/// Consensus threshold: at or below this is conflict.
pub const CONFLICT_THRESHOLD: f64 = -0.2;

/// Round a raw polarity to two decimal places.
///
/// Rounds the exact binary value, so a true tie like 0.125 goes to the even
/// digit (0.12) rather than away from zero. Non-finite values (NaN from a
/// degenerate scorer) collapse to 0.0 so the downstream labels stay total.
pub fn round_score(raw: f64) -> f64 {
    if !raw.is_finite() {
        return 0.0;
    }
    let rounded = format!("{raw:.2}").parse::<f64>().unwrap_or(0.0);
    // -0.0 would render as "-0" in some front ends
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Overall sentiment direction of a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            SentimentLabel::Positive
        } else if score < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coarse read on how much the debate participants agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Consensus {
    #[serde(rename = "Strong Agreement")]
    StrongAgreement,
    #[serde(rename = "Mixed Opinions")]
    MixedOpinions,
    #[serde(rename = "Conflict Detected")]
    ConflictDetected,
}

impl Consensus {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s > AGREEMENT_THRESHOLD => Consensus::StrongAgreement,
            s if s > CONFLICT_THRESHOLD => Consensus::MixedOpinions,
            _ => Consensus::ConflictDetected,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Consensus::StrongAgreement => "Strong Agreement",
            Consensus::MixedOpinions => "Mixed Opinions",
            Consensus::ConflictDetected => "Conflict Detected",
        }
    }
}

impl std::fmt::Display for Consensus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
