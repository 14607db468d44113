//! Startup configuration loaded from environment variables.
//!
//! - `WEATHER_API_KEY` - access credential for the upstream provider
//! - `WEATHER_API_URL` - upstream endpoint (default: WeatherStack `current`)
//! - `WEATHER_ALLOWED_ORIGIN` - the single origin allowed by CORS

/// Default upstream endpoint for current conditions.
const DEFAULT_UPSTREAM_URL: &str = "https://api.weatherstack.com/current";

/// Default browser origin allowed to call the API.
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Gateway configuration, read once at process start and passed down
/// explicitly. Nothing reads the environment after startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Access credential substituted into every upstream call.
    pub api_key: String,
    /// Base URL of the upstream provider's current-conditions endpoint.
    pub upstream_url: String,
    /// The one origin cross-origin requests are accepted from.
    pub allowed_origin: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A missing `WEATHER_API_KEY` is not fatal: the server starts and every
    /// create request fails against the upstream instead. A warning is logged
    /// so the misconfiguration is visible at startup.
    pub fn from_env() -> Self {
        let api_key = std::env::var("WEATHER_API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            tracing::warn!("WEATHER_API_KEY is not set; upstream requests will be rejected");
        }

        let upstream_url = std::env::var("WEATHER_API_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());

        let allowed_origin = std::env::var("WEATHER_ALLOWED_ORIGIN")
            .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string());

        Self {
            api_key,
            upstream_url,
            allowed_origin,
        }
    }
}
