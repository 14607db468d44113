use serde::{Deserialize, Serialize};

/// Input for creating a weather record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherRequest {
    /// Location to query, e.g. a city name. Must be non-empty.
    pub location: String,
    /// Free-text notes from the caller, echoed back inside the stored record.
    #[serde(default)]
    pub notes: String,
}

/// Response for a successful create: just the generated identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWeatherResponse {
    pub id: String,
}
