use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast::{self, Sender};

use crate::metadata::MetadataStore;

pub type SharedState = Arc<RwLock<AppState>>;

// Subscribers that fall further behind than this miss events.
const EVENT_BACKLOG: usize = 64;

// Global app state for axum
pub struct AppState {
    pub library: MetadataStore,
    pub public_dir: PathBuf,
    pub events: Sender<VideoRecord>, // Will be subscribed by each connected client.
}

impl AppState {
    pub fn shared(library: MetadataStore, public_dir: PathBuf) -> SharedState {
        let (tx, _rx) = broadcast::channel(EVENT_BACKLOG);
        drop(_rx); // Subscribers create their own receivers.
        Arc::new(RwLock::new(AppState {
            library,
            public_dir,
            events: tx,
        }))
    }
}

// One uploaded video's metadata, as persisted and as sent on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub url: String,
}
