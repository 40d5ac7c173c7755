use std::path::PathBuf;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{Response, StatusCode};
use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub fn get_static_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(index))
        .route("/*path", get(serve_public))
}

async fn index(State(shared): State<SharedState>) -> Response<Body> {
    serve(shared, "index.html".to_string()).await
}

// Serves files straight out of the public directory, uploaded videos
// included.
async fn serve_public(
    State(shared): State<SharedState>,
    Path(path): Path<String>,
) -> Response<Body> {
    serve(shared, path).await
}

async fn serve(shared: SharedState, path: String) -> Response<Body> {
    let public_dir = { shared.read().unwrap().public_dir.clone() }; // Lock is only held in this block

    let relative = match sanitize(&path) {
        Some(relative) => relative,
        None => {
            tracing::warn!("Path traversal attempt blocked: {}", path);
            return status_response(StatusCode::BAD_REQUEST);
        }
    };

    let full_path = public_dir.join(relative);
    match tokio::fs::read(&full_path).await {
        Ok(contents) => Response::builder()
            .status(StatusCode::OK)
            .header(CONTENT_TYPE, guess_content_type(&path))
            .body(Body::from(contents))
            .unwrap(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            status_response(StatusCode::NOT_FOUND)
        }
        Err(e) => {
            tracing::error!("Failed to read static file {}: {}", full_path.display(), e);
            status_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

fn status_response(status: StatusCode) -> Response<Body> {
    Response::builder().status(status).body(Body::empty()).unwrap()
}

// Keeps lookups inside the public directory; any `..` component rejects the
// whole path.
fn sanitize(path: &str) -> Option<PathBuf> {
    let mut clean = PathBuf::new();
    for part in path.split('/') {
        match part {
            "" | "." => continue,
            ".." => return None,
            part => clean.push(part),
        }
    }
    Some(clean)
}

fn guess_content_type(path: &str) -> &'static str {
    match path.rsplit_once('.').map(|(_, ext)| ext) {
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mov") => "video/quicktime",
        _ => "application/octet-stream",
    }
}
