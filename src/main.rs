use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use debate_summarizer::config::{Config, SummarizerBackend};
use debate_summarizer::output::{terminal, write_summary, SUMMARY_FILE_NAME};
use debate_summarizer::pipeline::analyze::EMPTY_INPUT_WARNING;
use debate_summarizer::pipeline::{analyze_transcript, validate_transcript, AnalysisOutcome};
use debate_summarizer::sentiment::lexicon::Lexicon;
use debate_summarizer::sentiment::polarity::LexiconScorer;
use debate_summarizer::summarizer::extractive::ExtractiveSummarizer;
use debate_summarizer::summarizer::huggingface::HuggingFaceSummarizer;
use debate_summarizer::summarizer::traits::Summarizer;

/// Debate summarizer: AI summaries with sentiment and consensus insights.
///
/// Paste or pipe in a debate transcript to get an abstractive summary,
/// a polarity score, and a rough read on whether the participants agree.
#[derive(Parser)]
#[command(name = "debate-summarizer", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web dashboard
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
    },

    /// Summarize a transcript file (or stdin) in the terminal
    Analyze {
        /// Transcript file to read. Reads stdin when omitted.
        file: Option<PathBuf>,

        /// Also write the summary to this file (e.g. debate_summary.txt)
        #[arg(long)]
        export: Option<PathBuf>,

        /// Print the report as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show the active configuration
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debate_summarizer=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            config.require_summarizer()?;

            let summarizer = create_summarizer(&config)?;
            let scorer = create_scorer(&config)?;
            let lexicon_entries = scorer.lexicon().len();

            let state = debate_summarizer::web::AppState {
                config: std::sync::Arc::new(config),
                summarizer: std::sync::Arc::from(summarizer),
                scorer: std::sync::Arc::new(scorer),
                lexicon_entries,
            };
            debate_summarizer::web::run_server(state, port, &bind).await?;
        }

        Commands::Analyze { file, export, json } => {
            let text = read_transcript(file.as_ref())?;
            if validate_transcript(&text).is_none() {
                terminal::display_warning(EMPTY_INPUT_WARNING);
                return Ok(());
            }

            let config = Config::load()?;
            config.require_summarizer()?;
            let summarizer = create_summarizer(&config)?;
            let scorer = create_scorer(&config)?;

            let spinner = (!json).then(generating_spinner);
            let outcome = analyze_transcript(&text, summarizer.as_ref(), &scorer).await;
            if let Some(pb) = spinner {
                pb.finish_and_clear();
            }

            match outcome? {
                AnalysisOutcome::NeedsInput { warning } => {
                    terminal::display_warning(warning);
                }
                AnalysisOutcome::Complete(report) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&report)?);
                    } else {
                        terminal::display_report(&report);
                    }
                    if let Some(path) = export {
                        write_summary(&path, &report.summary)?;
                        if !json {
                            println!("\n{} {}", "Summary saved to".bold(), path.display());
                        }
                    } else if !json {
                        println!(
                            "\n{}",
                            format!("To save the summary, rerun with --export {SUMMARY_FILE_NAME}")
                                .dimmed()
                        );
                    }
                }
            }
        }

        Commands::Status => {
            let config = Config::load()?;
            show_status(&config)?;
        }
    }

    Ok(())
}

/// Read the transcript from a file, or from stdin when no file is given.
fn read_transcript(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read transcript {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read transcript from stdin")?;
            Ok(buf)
        }
    }
}

/// Create a summarizer based on the configured backend.
fn create_summarizer(config: &Config) -> Result<Box<dyn Summarizer>> {
    match config.summarizer_backend {
        SummarizerBackend::HuggingFace => {
            info!(model = %config.summary_model, "Using Hugging Face Inference API summarizer");
            let summarizer = HuggingFaceSummarizer::new(
                &config.hf_api_url,
                &config.summary_model,
                config.hf_api_token.clone(),
                config.summary_params,
                config.summary_timeout,
            )?;
            Ok(Box::new(summarizer))
        }
        SummarizerBackend::Extractive => {
            info!("Using local extractive summarizer");
            Ok(Box::new(ExtractiveSummarizer::new(config.summary_params)))
        }
    }
}

/// Create the lexicon sentiment scorer, merging in the user lexicon if configured.
fn create_scorer(config: &Config) -> Result<LexiconScorer> {
    let lexicon = Lexicon::load(config.lexicon_path.as_deref())?;
    info!(entries = lexicon.len(), "Loaded sentiment lexicon");
    Ok(LexiconScorer::new(lexicon))
}

fn generating_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("Generating summary...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn show_status(config: &Config) -> Result<()> {
    println!("\n{}", "=== Debate Summarizer Status ===".bold());

    println!("  Summarizer:     {}", config.summarizer_backend.as_str());
    if config.summarizer_backend == SummarizerBackend::HuggingFace {
        println!("  Model:          {}", config.summary_model);
        println!("  API URL:        {}", config.hf_api_url);
        let token = if config.hf_api_token.is_empty() {
            "not set".red().to_string()
        } else {
            "set".green().to_string()
        };
        println!("  HF_API_TOKEN:   {token}");
    }
    println!(
        "  Summary length: {}-{}",
        config.summary_params.min_length, config.summary_params.max_length
    );
    println!("  Timeout:        {}s", config.summary_timeout.as_secs());

    let lexicon = Lexicon::load(config.lexicon_path.as_deref())?;
    match &config.lexicon_path {
        Some(path) => println!(
            "  Lexicon:        {} words (built-in + {})",
            lexicon.len(),
            path.display()
        ),
        None => println!("  Lexicon:        {} words (built-in)", lexicon.len()),
    }

    if let Err(e) = config.require_summarizer() {
        println!("\n  {} {}", "!".yellow().bold(), e.to_string().yellow());
    }
    Ok(())
}
