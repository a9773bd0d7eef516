use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use weather_alert_core::{Config, TemperatureAlertService, provider_from_config};

use crate::{
    logging,
    server::AlertServer,
    transport::{self, Transport},
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-alert", version, about = "Temperature alert MCP server")]
pub struct Cli {
    /// Debug-level logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the `get_temperature_alert` tool over MCP.
    Serve {
        #[arg(long, value_enum, default_value_t = Transport::Stdio)]
        transport: Transport,

        /// Bind host for http/sse; defaults to the configured host.
        #[arg(long)]
        host: Option<String>,

        /// Bind port for http/sse; defaults to the configured port.
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the temperature alert for a city and exit.
    Alert {
        /// City name, e.g. "Delhi".
        city: String,
    },

    /// Store the OpenWeather API key and user agent in the config file.
    Configure,

    /// Print the config file location.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        logging::init(self.verbose)?;

        match self.command {
            Command::Serve {
                transport,
                host,
                port,
            } => {
                let config = Config::load()?;
                let service = build_service(&config)?;
                let host = host.unwrap_or_else(|| config.server.host.clone());
                let port = port.unwrap_or(config.server.port);

                transport::serve(AlertServer::new(service), transport, &host, port).await?;
            }
            Command::Alert { city } => {
                let config = Config::load()?;
                let service = build_service(&config)?;
                println!("{}", service.get_temperature_alert(&city).await);
            }
            Command::Configure => configure()?,
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
            }
        }

        Ok(())
    }
}

fn build_service(config: &Config) -> anyhow::Result<Arc<TemperatureAlertService>> {
    let provider = provider_from_config(config)?;
    Ok(Arc::new(TemperatureAlertService::new(provider)))
}

fn configure() -> anyhow::Result<()> {
    let path = Config::config_file_path()?;
    let mut config = Config::load_from(&path)?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()
        .context("Failed to read API key")?;

    let current_agent = config.user_agent.clone();
    let user_agent = Text::new("User-Agent for upstream requests:")
        .with_default(&current_agent)
        .prompt()
        .context("Failed to read user agent")?;

    config.set_api_key(api_key.trim().to_string());
    config.user_agent = user_agent;
    config.save_to(&path)?;

    println!("Saved configuration to {}", path.display());
    Ok(())
}
