// Debate summarizer: transcript summaries with a sentiment and consensus dashboard
//
// This is the library root. Each module corresponds to one stage of the
// analysis: backends (summarizer, sentiment), derivation (scoring), the
// pipeline that ties them together, and the surfaces (output, web).

pub mod config;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod sentiment;
pub mod summarizer;

#[cfg(feature = "web")]
pub mod web;
