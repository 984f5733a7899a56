use axum::{routing::post, Router};
use tower_http::trace::TraceLayer;

use crate::proxy::relay_push;

use super::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::new()
        // The one proxied route, mirroring the gateway's own path shape
        .route("/3/device/{device_token}", post(relay_push))
        // Add middleware
        .layer(TraceLayer::new_for_http())
        // Add state
        .with_state(state)
}
