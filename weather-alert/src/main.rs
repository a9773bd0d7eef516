//! Binary crate for the `weather-alert` MCP server.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and interactive configuration
//! - Logging setup
//! - Exposing the alert tool over stdio, streamable HTTP and SSE sessions

use clap::Parser;

mod cli;
mod logging;
mod server;
mod transport;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
