pub mod event_handlers;
pub mod metadata;
pub mod state;
pub mod static_handlers;
pub mod utils;
pub mod video_handlers;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use state::SharedState;

/// Builds the full application router over the shared state.
pub fn app(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(video_handlers::get_video_routes()) // Upload and listing
        .merge(event_handlers::get_event_routes()) // Real-time new-video feed
        .merge(static_handlers::get_static_routes()) // Public directory, uploads included
        .layer(DefaultBodyLimit::disable()) // Uploads carry whole video files
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
