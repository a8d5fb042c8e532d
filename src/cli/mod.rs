//! CLI module for the QA gateway

pub mod serve;

use clap::{Parser, Subcommand};

/// Question-answering gateway with similarity caching
#[derive(Parser)]
#[command(name = "qa-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(serve::ServeArgs),
}
