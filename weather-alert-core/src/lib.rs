//! Core library for the `weather-alert` MCP server.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The upstream weather provider abstraction and its OpenWeather client
//! - Temperature classification and alert formatting
//!
//! It knows nothing about MCP or transports; `weather-alert` wraps it.

pub mod alert;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use alert::{Alert, TemperatureAlertService, UNAVAILABLE_MESSAGE};
pub use config::Config;
pub use error::UpstreamError;
pub use model::WeatherReading;
pub use provider::{WeatherProvider, provider_from_config};
