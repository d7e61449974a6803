// Scoring: label, consensus, and chart derivation from a polarity score.

pub mod distribution;
pub mod labels;

pub use distribution::{chart_distribution, CategoryScore, Distribution};
pub use labels::{round_score, Consensus, SentimentLabel};
