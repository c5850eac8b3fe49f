use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, Text};
use weather_core::{Config, provider_from_config};

use crate::web::{self, AppState};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "Weather lookup proxy for the front-end")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server.
    Serve {
        /// Address to bind; overrides the config file.
        #[arg(long)]
        host: Option<String>,

        /// Port to bind; overrides the config file.
        #[arg(long)]
        port: Option<u16>,
    },

    /// Store the weather provider API key in the config file.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Serve { host, port } => serve(host, port).await,
            Command::Configure => configure(),
        }
    }
}

async fn serve(host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    let mut config = Config::load()?;
    config.apply_env_overrides();
    config.require_api_key()?;

    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let provider = provider_from_config(&config.provider)
        .context("Failed to initialise weather provider client")?;

    tracing::info!(
        base_url = %config.provider.base_url,
        timeout_secs = config.provider.timeout_secs,
        "weather provider configured"
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    web::run(&addr, AppState { provider }).await
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("WeatherAPI.com API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    config.set_api_key(api_key.trim().to_string());

    let base_url = Text::new("Provider base URL:")
        .with_default(&config.provider.base_url)
        .prompt()
        .context("Failed to read base URL")?;
    config.provider.base_url = base_url.trim().to_string();

    config.save()?;
    println!("Configuration saved to {}", Config::config_file_path()?.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_serve_overrides() {
        let cli = Cli::try_parse_from(["weather-server", "serve", "--port", "9000"]).unwrap();

        match cli.command {
            Command::Serve { host, port } => {
                assert_eq!(host, None);
                assert_eq!(port, Some(9000));
            }
            other => panic!("expected serve, got {other:?}"),
        }
    }

    #[test]
    fn rejects_invalid_port() {
        assert!(Cli::try_parse_from(["weather-server", "serve", "--port", "http"]).is_err());
    }
}
