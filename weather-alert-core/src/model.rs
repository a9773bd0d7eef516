/// Current conditions for one city, as reported by the upstream provider.
///
/// Built per request and dropped once the alert text is formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub temperature_c: f64,
    pub feels_like_c: Option<f64>,
    /// Upstream sends an integer, but anything numeric is accepted and shown as-is.
    pub humidity_pct: Option<f64>,
    /// Upstream description, verbatim (not yet capitalized).
    pub condition: String,
}
