//! Binary crate for the weather lookup proxy.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and interactive configuration
//! - Serving the HTTP surface consumed by the front-end
//! - Translating lookup failures into HTTP status codes

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
