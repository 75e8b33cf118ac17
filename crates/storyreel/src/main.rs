//! Storyreel CLI binary.
//!
//! This binary provides command-line access to storyreel:
//! - Browse and watch stories in the terminal UI
//! - List the stories a source provides
//! - Auto-play a story headlessly, printing each transition

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, launch_tui, list_stories, run_autoplay};

    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();
    let config = storyreel::StoryreelConfig::load(cli.config.as_deref())?;

    // Execute the requested command
    match cli.command {
        Commands::Tui { stories, posts } => {
            let log_file = config
                .tui()
                .log_file()
                .clone()
                .unwrap_or_else(storyreel::default_log_file);
            let _guard = storyreel::init_file_telemetry(&log_file, cli.verbose)?;
            launch_tui(config, stories, posts).await?;
        }

        Commands::List { format } => {
            storyreel::init_console_telemetry(cli.verbose)?;
            list_stories(&config, format).await?;
        }

        Commands::Autoplay { story } => {
            storyreel::init_console_telemetry(cli.verbose)?;
            run_autoplay(&config, story).await?;
        }
    }

    Ok(())
}
