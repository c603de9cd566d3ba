//! Command line interface for the release publisher.
//!
//! Parses settings from flags and the environment, runs the publish
//! workflow and reports progress on the terminal.

mod args;
pub mod commands;
mod observer;
mod output;

pub use args::{Args, RuntimeConfig};
pub use commands::execute_command;
pub use observer::ConsoleObserver;
pub use output::OutputManager;

use crate::error::Result;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute_command(args).await
}
