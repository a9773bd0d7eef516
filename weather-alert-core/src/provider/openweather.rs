use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use std::time::Duration;

use crate::{UpstreamError, WeatherReading};

use super::WeatherProvider;

/// Upper bound on one upstream round trip; after this the call counts as failed.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, base_url: String, user_agent: &str) -> anyhow::Result<Self> {
        Self::with_timeout(api_key, base_url, user_agent, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(
        api_key: String,
        base_url: String,
        user_agent: &str,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let http = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client for OpenWeather")?;

        Ok(Self {
            api_key,
            base_url,
            http,
        })
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherReading, UpstreamError> {
        tracing::debug!(city, url = %self.base_url, "requesting current weather");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(UpstreamError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;
        let main = parsed.main.ok_or(UpstreamError::MissingMain)?;

        let condition = parsed
            .weather
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|w| w.description)
            .unwrap_or_else(|| "Unknown".to_string());

        Ok(WeatherReading {
            temperature_c: main.temp,
            feels_like_c: main.feels_like,
            humidity_pct: main.humidity,
            condition,
        })
    }
}

// Only `main.temp` is mandatory. Everything else goes through `lenient`, so a
// null or oddly typed value drops that one field instead of the whole reading.
#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    #[serde(default, deserialize_with = "lenient")]
    feels_like: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    humidity: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    #[serde(default, deserialize_with = "lenient")]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: Option<OwMain>,
    #[serde(default, deserialize_with = "lenient")]
    weather: Option<Vec<OwWeather>>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<WeatherReading, UpstreamError> {
        self.fetch_current(city).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
