//! AI-Verify - checklist risk scorer for AI-generated clinical text
//!
//! Tick the criteria an AI answer meets, optionally pass the answer itself,
//! and get a Green/Amber/Red rating with remediation actions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use ai_verify::config::Config;
use ai_verify::report::OutputFormat;

mod cli;

/// AI-Verify - clinical AI output risk checklist
#[derive(Parser)]
#[command(name = "ai-verify")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score the checklist and text
    Score {
        #[command(flatten)]
        input: cli::input::InputArgs,

        /// Output format: text or json
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Print a one-line summary for sharing
    Summary {
        #[command(flatten)]
        input: cli::input::InputArgs,

        /// Output format: text or json
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Also write the summary to this file
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List checklist items, weights and actions
    Items {
        /// Show the remediation action for each item
        #[arg(short, long)]
        actions: bool,
    },

    /// Clear the checklist and text in the state file
    Reset {
        /// State file to clear
        #[arg(short, long)]
        state: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::load()?;

    match cli.command {
        Commands::Score { input, format } => {
            cli::score::run(&input, format, &config)?;
        }
        Commands::Summary { input, format, out } => {
            cli::summary::run(&input, format, out.as_deref(), &config)?;
        }
        Commands::Items { actions } => {
            cli::items::run(actions)?;
        }
        Commands::Reset { state } => {
            cli::reset::run(state, &config)?;
        }
    }

    Ok(())
}
