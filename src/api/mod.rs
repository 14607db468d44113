mod handlers;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::store::RecordStore;
use crate::upstream::WeatherClient;

/// Shared state handed to every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: RecordStore,
    pub client: WeatherClient,
}

/// Build the gateway router.
///
/// Cross-origin access is restricted to the single `allowed_origin`; all
/// methods and headers are otherwise permitted from it.
pub fn create_router(state: AppState, allowed_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/weather", post(handlers::create_weather))
        .route("/weather/{id}", get(handlers::get_weather))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
