use crate::{Config, UpstreamError, WeatherReading, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of current conditions for a named city.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, city: &str) -> Result<WeatherReading, UpstreamError>;
}

/// Construct the OpenWeather provider from config.
///
/// Fails when no API key is configured or the HTTP client cannot be built.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key()?;

    let provider = OpenWeatherProvider::new(
        api_key.to_owned(),
        config.openweather.base_url.clone(),
        &config.user_agent,
    )?;

    Ok(Box::new(provider))
}
