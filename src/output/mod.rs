// Output formatting: terminal display and summary export.

pub mod terminal;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// File name offered for the downloadable summary.
pub const SUMMARY_FILE_NAME: &str = "debate_summary.txt";

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..120]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters like emoji or accented letters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Contents of the exported summary file.
pub fn summary_file_contents(summary: &str) -> String {
    format!("{}\n", summary.trim_end())
}

/// Write the summary to `path` as plain text.
pub fn write_summary(path: &Path, summary: &str) -> Result<()> {
    std::fs::write(path, summary_file_contents(summary))
        .with_context(|| format!("Failed to write summary to {}", path.display()))?;
    info!(path = %path.display(), "Summary exported");
    Ok(())
}
