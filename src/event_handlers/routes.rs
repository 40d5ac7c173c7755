use async_stream::stream;
use axum::body::Body;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Response, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Error, Router};
use bytes::Bytes;
use serde_json::json;
use tokio::sync::broadcast::error::RecvError;

use crate::state::SharedState;

pub fn get_event_routes() -> Router<SharedState> {
    Router::new().route("/events", get(subscribe_events))
}

// Streams one JSON line per newly uploaded video to the connected client.
// Best-effort only: videos uploaded before the subscription are never
// replayed.
async fn subscribe_events(State(shared): State<SharedState>) -> impl IntoResponse {
    let mut receiver = { shared.read().unwrap().events.subscribe() }; // Lock is only held in this block

    let s = stream! {
        loop {
            let received = receiver.recv().await;
            match received {
                Ok(video) => {
                    let mut line = json!({ "event": "newVideo", "video": video }).to_string();
                    line.push('\n');
                    yield Ok::<Bytes, Error>(Bytes::from(line));
                }
                Err(e) => match e {
                    // The subscriber fell behind the backlog; it has to
                    // reconnect with another call
                    RecvError::Lagged(_missed) => {
                        tracing::error!("Missed events");
                        yield Err(Error::new("Missed events from channel"));
                        break;
                    },
                    RecvError::Closed => {
                        tracing::info!("Event channel closed");
                        break;
                    },
                }
            }
        }
        tracing::info!("Finished event stream");
    };

    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "application/x-ndjson")
        .body(Body::from_stream(s))
        .unwrap()
}
