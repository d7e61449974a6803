// Summarization: trait-based abstraction for swappable backends.
//
// The Summarizer trait defines the interface. HuggingFaceSummarizer calls a
// hosted pretrained model; ExtractiveSummarizer picks sentences locally when
// no API token is available.

pub mod extractive;
pub mod huggingface;
pub mod traits;
