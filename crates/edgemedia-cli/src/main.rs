//! Edge Media CLI - render media analytics payloads
//!
//! Features:
//! - Render edge events from tracker fact files
//! - Inspect the media collection for an event
//! - Produce session-created correlation events
//! - List event types and request paths

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod output;

/// Edge Media CLI - media analytics payload toolkit
#[derive(Parser)]
#[command(name = "edgemedia")]
#[command(version)]
#[command(about = "Render media analytics edge events from tracker facts", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Output format (text, json, compact)
    #[arg(short, long, default_value = "text")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the edge event for a media event input file
    Render {
        /// JSON file with the media event input
        input: PathBuf,

        /// Event timestamp in epoch seconds (defaults to now)
        #[arg(short, long)]
        timestamp: Option<f64>,

        /// JSON configuration file with edgemedia.* keys
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Render only the media collection for an input file
    Collection {
        /// JSON file with the media event input
        input: PathBuf,
    },

    /// Render the session-created correlation event
    Correlate {
        /// Tracker-local session id
        tracker_session_id: String,

        /// Session id issued by the collection service
        backend_session_id: String,
    },

    /// List event types with their edge names and request paths
    EventTypes,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so rendered JSON can be piped
    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_writer(std::io::stderr)
        .init();

    edgemedia_core::init();

    match cli.command {
        Commands::Render { input, timestamp, config } => {
            commands::render(&input, timestamp, config.as_deref(), &cli.format)?;
        }
        Commands::Collection { input } => {
            commands::collection(&input, &cli.format)?;
        }
        Commands::Correlate { tracker_session_id, backend_session_id } => {
            commands::correlate(&tracker_session_id, &backend_session_id, &cli.format)?;
        }
        Commands::EventTypes => {
            commands::event_types(&cli.format)?;
        }
    }

    Ok(())
}
