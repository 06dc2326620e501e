//! CLI module
//!
//! Provides the `serve` subcommand that runs the HTTP service.

pub mod serve;

use clap::{Parser, Subcommand};

/// Grounded support answering service
#[derive(Parser)]
#[command(name = "support-rag")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,
}
