// Sentiment scoring: trait-based abstraction for swappable analyzers.
//
// SentimentScorer defines the interface. LexiconScorer implements it with a
// local polarity lexicon, so sentiment works offline and costs nothing.

pub mod lexicon;
pub mod polarity;
pub mod traits;
