//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Storyreel - watch stories in the terminal
#[derive(Parser, Debug)]
#[command(name = "storyreel")]
#[command(about = "Story player with timed auto-advance and tap navigation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file layered over the defaults
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the terminal user interface
    Tui {
        /// Stories JSON file or URL, overriding the configured one
        #[arg(long)]
        stories: Option<String>,

        /// Posts JSON file or URL, overriding the configured one
        #[arg(long)]
        posts: Option<String>,
    },

    /// List the stories the configured source provides
    List {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Play stories without a terminal UI, printing each transition
    Autoplay {
        /// Story to open (defaults to the first story)
        #[arg(long)]
        story: Option<u64>,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
