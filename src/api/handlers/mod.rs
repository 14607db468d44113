use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};

use crate::api::AppState;
use crate::models::{CreateWeatherResponse, WeatherRequest};
use crate::upstream::UpstreamError;

// ============================================================
// Error Handling
// ============================================================

/// Map an upstream failure to the outward response.
///
/// A logical rejection (200 body with an embedded error) is the caller's
/// fault and surfaces as 400 with the provider's message verbatim. Status
/// and transport failures mean the provider is unreachable or erroring and
/// surface as a generic 502; the detail is logged server-side only.
fn upstream_error(e: UpstreamError) -> (StatusCode, String) {
    match e {
        UpstreamError::Logical(message) => {
            tracing::warn!("Upstream rejected query: {}", message);
            (StatusCode::BAD_REQUEST, message)
        }
        UpstreamError::Status(status) => {
            tracing::warn!("Upstream returned status {}", status);
            (
                StatusCode::BAD_GATEWAY,
                "Weather provider error".to_string(),
            )
        }
        UpstreamError::Transport(e) => {
            tracing::error!("Upstream request failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                "Weather provider unreachable".to_string(),
            )
        }
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

// ============================================================
// Weather
// ============================================================

/// Create flow: validate, fetch from the upstream provider, inject the
/// caller's notes into the payload's request echo, store, return the id.
///
/// The store is only touched after the upstream call completes, so no lock
/// is ever held across the network suspend.
pub async fn create_weather(
    State(state): State<AppState>,
    Json(input): Json<WeatherRequest>,
) -> Result<Json<CreateWeatherResponse>, (StatusCode, String)> {
    if input.location.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "location must not be empty".to_string(),
        ));
    }

    let mut payload = state
        .client
        .fetch(&input.location)
        .await
        .map_err(upstream_error)?;

    inject_notes(&mut payload, &input.notes);

    let id = state.store.create(payload);
    tracing::debug!("Stored weather record {}", id);

    Ok(Json(CreateWeatherResponse { id }))
}

pub async fn get_weather(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, (StatusCode, String)> {
    state
        .store
        .get(&id)
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Weather data not found".to_string()))
}

/// Write the caller's notes into the payload's `request` echo object,
/// creating the object if the provider omitted it.
fn inject_notes(payload: &mut Value, notes: &str) {
    if let Some(root) = payload.as_object_mut() {
        let echo = root
            .entry("request")
            .or_insert_with(|| json!({}));
        if let Some(echo) = echo.as_object_mut() {
            echo.insert("notes".to_string(), Value::String(notes.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inject_notes_merges_into_existing_request_echo() {
        let mut payload = json!({"current": {"temperature": 18}, "request": {"query": "Paris"}});
        inject_notes(&mut payload, "vacation");

        assert_eq!(payload["request"]["notes"], "vacation");
        assert_eq!(payload["request"]["query"], "Paris");
    }

    #[test]
    fn inject_notes_creates_request_echo_when_missing() {
        let mut payload = json!({"current": {"temperature": 18}});
        inject_notes(&mut payload, "");

        assert_eq!(payload["request"]["notes"], "");
    }
}
