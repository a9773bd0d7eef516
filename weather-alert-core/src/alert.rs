//! Temperature classification and the alert text returned to tool callers.

use std::fmt;

use crate::{WeatherProvider, WeatherReading};

/// At or above this temperature (°C) a heat alert is raised.
pub const HEAT_THRESHOLD_C: f64 = 40.0;
/// At or below this temperature (°C) a cold alert is raised.
pub const COLD_THRESHOLD_C: f64 = 5.0;

/// Returned verbatim whenever the upstream provider cannot give us a reading.
pub const UNAVAILABLE_MESSAGE: &str = "Unable to fetch weather data.";

const MISSING: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    Heat,
    Cold,
    Normal,
}

impl Alert {
    pub fn classify(temperature_c: f64) -> Self {
        if temperature_c >= HEAT_THRESHOLD_C {
            Alert::Heat
        } else if temperature_c <= COLD_THRESHOLD_C {
            Alert::Cold
        } else {
            Alert::Normal
        }
    }

    /// Leading marker of the alert line.
    pub fn marker(&self) -> &'static str {
        match self {
            Alert::Heat => "🔥 Heat Alert",
            Alert::Cold => "❄️ Cold Alert",
            Alert::Normal => "✅ Temperature",
        }
    }

    pub fn headline(&self, city: &str) -> String {
        match self {
            Alert::Heat | Alert::Cold => format!("{} in {city}!", self.marker()),
            Alert::Normal => format!("{} in {city} is within a normal range.", self.marker()),
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Alert::Heat => "heat",
            Alert::Cold => "cold",
            Alert::Normal => "normal",
        })
    }
}

/// Render the multi-line alert for `city`; `alert` is the classification of
/// `reading.temperature_c`.
pub fn format_alert(city: &str, alert: Alert, reading: &WeatherReading) -> String {
    let feels_like = reading
        .feels_like_c
        .map(|t| format!("{t}°C"))
        .unwrap_or_else(|| MISSING.to_string());
    let humidity = reading
        .humidity_pct
        .map(|h| format!("{h}%"))
        .unwrap_or_else(|| MISSING.to_string());

    format!(
        "{}\nCurrent Temp: {}°C\nFeels Like: {}\nHumidity: {}\nCondition: {}",
        alert.headline(city),
        reading.temperature_c,
        feels_like,
        humidity,
        capitalize(&reading.condition),
    )
}

/// Upper-case the first character and lower-case the rest ("clear SKY" -> "Clear sky").
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Fetch, classify, format. Every upstream failure degrades to
/// [`UNAVAILABLE_MESSAGE`]; callers never see an error.
#[derive(Debug)]
pub struct TemperatureAlertService {
    provider: Box<dyn WeatherProvider>,
}

impl TemperatureAlertService {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    pub async fn get_temperature_alert(&self, city: &str) -> String {
        match self.provider.current_weather(city).await {
            Ok(reading) => {
                let alert = Alert::classify(reading.temperature_c);
                tracing::debug!(city, temp = reading.temperature_c, %alert, "classified reading");
                format_alert(city, alert, &reading)
            }
            Err(err) => {
                tracing::warn!(city, error = %err, timeout = err.is_timeout(), "weather lookup failed");
                UNAVAILABLE_MESSAGE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UpstreamError;
    use async_trait::async_trait;

    #[derive(Debug)]
    struct StubProvider {
        reading: Option<WeatherReading>,
    }

    #[async_trait]
    impl WeatherProvider for StubProvider {
        async fn current_weather(&self, _city: &str) -> Result<WeatherReading, UpstreamError> {
            self.reading.clone().ok_or(UpstreamError::MissingMain)
        }
    }

    fn reading(temp: f64) -> WeatherReading {
        WeatherReading {
            temperature_c: temp,
            feels_like_c: Some(temp + 1.0),
            humidity_pct: Some(50.0),
            condition: "few clouds".to_string(),
        }
    }

    fn service(reading: Option<WeatherReading>) -> TemperatureAlertService {
        TemperatureAlertService::new(Box::new(StubProvider { reading }))
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(Alert::classify(40.0), Alert::Heat);
        assert_eq!(Alert::classify(39.99), Alert::Normal);
        assert_eq!(Alert::classify(5.0), Alert::Cold);
        assert_eq!(Alert::classify(5.01), Alert::Normal);
        assert_eq!(Alert::classify(-12.0), Alert::Cold);
        assert_eq!(Alert::classify(48.5), Alert::Heat);
    }

    #[test]
    fn formats_heat_alert_example() {
        let reading = WeatherReading {
            temperature_c: 42.0,
            feels_like_c: Some(45.0),
            humidity_pct: Some(20.0),
            condition: "clear sky".to_string(),
        };

        let text = format_alert("Delhi", Alert::Heat, &reading);

        assert_eq!(
            text,
            "🔥 Heat Alert in Delhi!\n\
             Current Temp: 42°C\n\
             Feels Like: 45°C\n\
             Humidity: 20%\n\
             Condition: Clear sky"
        );
    }

    #[test]
    fn formats_cold_and_normal_headlines() {
        assert!(
            format_alert("Leh", Alert::Cold, &reading(-3.0)).starts_with("❄️ Cold Alert in Leh!")
        );
        assert!(
            format_alert("Mumbai", Alert::Normal, &reading(29.0))
                .starts_with("✅ Temperature in Mumbai is within a normal range.")
        );
    }

    #[test]
    fn fractional_values_keep_their_precision() {
        let mut r = reading(31.5);
        r.humidity_pct = Some(64.5);

        let text = format_alert("Chennai", Alert::Normal, &r);
        assert!(text.contains("Current Temp: 31.5°C"));
        assert!(text.contains("Feels Like: 32.5°C"));
        assert!(text.contains("Humidity: 64.5%"));
    }

    #[test]
    fn missing_optional_fields_become_placeholders() {
        let reading = WeatherReading {
            temperature_c: 20.0,
            feels_like_c: None,
            humidity_pct: None,
            condition: "mist".to_string(),
        };

        let text = format_alert("Shimla", Alert::Normal, &reading);

        assert!(text.contains("Feels Like: N/A"));
        assert!(text.contains("Humidity: N/A"));
        assert!(text.contains("Condition: Mist"));
    }

    #[test]
    fn capitalize_matches_sentence_case() {
        assert_eq!(capitalize("clear sky"), "Clear sky");
        assert_eq!(capitalize("HEAVY Rain"), "Heavy rain");
        assert_eq!(capitalize(""), "");
    }

    #[tokio::test]
    async fn service_formats_successful_reading() {
        let text = service(Some(reading(41.0))).get_temperature_alert("Jaipur").await;
        assert!(text.starts_with("🔥 Heat Alert in Jaipur!"));
    }

    #[tokio::test]
    async fn service_degrades_upstream_failure_to_fixed_message() {
        let text = service(None).get_temperature_alert("Jaipur").await;
        assert_eq!(text, UNAVAILABLE_MESSAGE);
    }
}
