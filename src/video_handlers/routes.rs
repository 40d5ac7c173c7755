use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde_json::json;

use crate::state::{SharedState, VideoRecord};
use crate::utils::{self, LogErr};

pub fn get_video_routes() -> Router<SharedState> {
    Router::new()
        .route("/upload", post(upload_video))
        .route("/videos", get(list_videos))
}

// Accepts a multipart upload with fields `video`, `title` and `category`,
// stores the file, appends the record and broadcasts it to subscribers.
async fn upload_video(
    State(shared): State<SharedState>,
    mut multipart: Multipart,
) -> Result<Response, StatusCode> {
    let upload_dir = { shared.read().unwrap().public_dir.join("uploads") };

    let mut stored: Option<String> = None;
    let mut title = String::new();
    let mut category = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .log_status("Multipart field error", StatusCode::BAD_REQUEST)?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "video" => {
                let original = field.file_name().unwrap_or("video.mp4").to_string();
                let data = field
                    .bytes()
                    .await
                    .log_status("Failed to read video field", StatusCode::BAD_REQUEST)?;
                // The file lands on disk while the body is still being
                // drained; a later 400 does not roll it back.
                let file_name = utils::save_upload(&upload_dir, &original, &data)
                    .await
                    .log_500("Failed to store upload")?;
                tracing::info!("Stored upload {} ({} bytes)", file_name, data.len());
                stored = Some(file_name);
            }
            "title" => {
                title = field
                    .text()
                    .await
                    .log_status("Failed to read title field", StatusCode::BAD_REQUEST)?;
            }
            "category" => {
                category = field
                    .text()
                    .await
                    .log_status("Failed to read category field", StatusCode::BAD_REQUEST)?;
            }
            _ => {}
        }
    }

    let file_name = match stored {
        Some(file_name) if !title.is_empty() && !category.is_empty() => file_name,
        _ => {
            return Ok((
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "success": false,
                    "message": "Upload failed. Missing title or category."
                })),
            )
                .into_response());
        }
    };

    let record = VideoRecord {
        id: Utc::now().timestamp_millis(),
        title,
        category,
        url: format!("/uploads/{}", file_name),
    };

    let (snapshot, metadata_path) = {
        let mut state = shared.write().unwrap(); // Lock is only held in this block
        let snapshot = state.library.append(record.clone());
        (snapshot, state.library.path().to_path_buf())
    };
    // Whole-file rewrite outside the lock; concurrent uploads race on this
    // write and the last one wins.
    tokio::fs::write(&metadata_path, snapshot)
        .await
        .log_500("Failed to rewrite metadata file")?;

    {
        let state = shared.read().unwrap();
        if state.events.receiver_count() > 0 {
            if let Err(e) = state.events.send(record.clone()) {
                tracing::error!("Failed to broadcast new video: {:?}", e);
            }
        }
    }

    Ok(Json(json!({ "success": true, "video": record })).into_response())
}

// Returns every known video in upload order.
async fn list_videos(State(shared): State<SharedState>) -> Json<Vec<VideoRecord>> {
    let videos = shared.read().unwrap().library.all().to_vec();
    Json(videos)
}
