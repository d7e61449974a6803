// Colored terminal output for analysis reports.
//
// Mirrors the dashboard layout: summary, sentiment metrics, consensus, and
// the category distribution drawn as horizontal bars.

use colored::Colorize;

use crate::pipeline::DebateReport;
use crate::scoring::{Consensus, SentimentLabel};

/// Width of a full (1.0) distribution bar, in characters.
const BAR_WIDTH: usize = 30;

/// Display a full analysis report in the terminal.
pub fn display_report(report: &DebateReport) {
    println!("\n{}", "=== AI Summary ===".bold());
    println!();
    for line in wrap(&report.summary, 76) {
        println!("  {}", line.green());
    }

    println!("\n{}", "=== Sentiment Overview ===".bold());
    println!(
        "  {:<16} {}",
        "Sentiment Type".dimmed(),
        colorize_label(report.sentiment_label)
    );
    println!(
        "  {:<16} {:.2}",
        "Sentiment Score".dimmed(),
        report.sentiment_score
    );
    println!(
        "  {:<16} {:.2}",
        "Subjectivity".dimmed(),
        report.subjectivity
    );

    println!("\n{}", "=== Consensus Analysis ===".bold());
    println!("  {}", colorize_consensus(report.consensus));

    println!("\n{}", "=== Sentiment Distribution ===".bold());
    for entry in report.distribution.iter() {
        println!(
            "  {:<9} {} {:.2}",
            entry.category.as_str(),
            render_bar(entry.score, BAR_WIDTH),
            entry.score
        );
    }

    println!(
        "\n  {}",
        format!(
            "{} words analyzed · summary by {} · {}",
            report.word_count, report.summarizer, report.generated_at
        )
        .dimmed()
    );
}

/// Display the empty-input warning.
pub fn display_warning(message: &str) {
    println!("{} {}", "!".yellow().bold(), message.yellow());
}

/// Draw a horizontal bar for a value in [0, 1].
pub fn render_bar(value: f64, width: usize) -> String {
    let filled = (value.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn colorize_label(label: SentimentLabel) -> String {
    match label {
        SentimentLabel::Positive => label.as_str().green().bold().to_string(),
        SentimentLabel::Negative => label.as_str().red().bold().to_string(),
        SentimentLabel::Neutral => label.as_str().normal().to_string(),
    }
}

fn colorize_consensus(consensus: Consensus) -> String {
    match consensus {
        Consensus::StrongAgreement => consensus.as_str().green().to_string(),
        Consensus::MixedOpinions => consensus.as_str().yellow().to_string(),
        Consensus::ConflictDetected => consensus.as_str().red().bold().to_string(),
    }
}

/// Greedy word wrap at `width` characters.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_bar_proportions() {
        assert_eq!(render_bar(0.0, 4), "░░░░");
        assert_eq!(render_bar(0.5, 4), "██░░");
        assert_eq!(render_bar(1.0, 4), "████");
    }

    #[test]
    fn test_render_bar_clamps() {
        assert_eq!(render_bar(1.7, 3), "███");
        assert_eq!(render_bar(-0.2, 3), "░░░");
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("aa bb cc", 5), vec!["aa bb", "cc"]);
        assert!(wrap("", 5).is_empty());
        assert_eq!(wrap("toolongword x", 4), vec!["toolongword", "x"]);
    }
}
