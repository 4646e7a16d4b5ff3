use crate::handlers::{self, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Adapter routes. They answer 200 whatever happens, so they stay outside
/// the body limit layer and the rate limiter; `handlers::predict` enforces
/// the size bound itself.
pub fn prediction_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/predict", post(handlers::predict))
        // Path the Next.js front end posts to
        .route("/api/predict", post(handlers::predict))
}

/// Simulation and validation routes.
///
/// `main` puts the rate limiter on these.
pub fn api_routes(max_body_bytes: usize) -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/v1/simulation", post(handlers::simulate))
        .route("/api/v1/validate", post(handlers::validate_application))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
}

/// Attach health, the adapter routes, shared state and the outer layers.
pub fn finish(api: Router<Arc<AppState>>, state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .merge(prediction_routes())
        .merge(api)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Full router without rate limiting.
pub fn build_router(state: Arc<AppState>) -> Router {
    let api = api_routes(state.config.max_body_bytes);
    finish(api, state)
}
