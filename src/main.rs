use std::path::PathBuf;

use video_upload_server::metadata::MetadataStore;
use video_upload_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // A metadata file that exists but does not parse is fatal.
    let library = MetadataStore::load(PathBuf::from("videos.json"))
        .expect("Failed to load video metadata");
    let shared_state = AppState::shared(library, PathBuf::from("public")); // Global state
    let app = video_upload_server::app(shared_state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("listening on {}", addr);
    axum::serve(listener, app).await.unwrap();
}
