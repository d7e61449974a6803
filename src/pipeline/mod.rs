// Analysis pipeline: input validation, backend calls, report assembly.

pub mod analyze;

pub use analyze::{analyze_transcript, validate_transcript, AnalysisOutcome, DebateReport};
