//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the storyreel binary.

mod autoplay;
mod commands;
mod list;
mod tui_handler;

pub use autoplay::run_autoplay;
pub use commands::{Cli, Commands};
pub use list::list_stories;
pub use tui_handler::launch_tui;
