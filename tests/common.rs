//! Shared helper for the HTTP integration tests: starts the real router on
//! an ephemeral port inside a temporary directory.

use std::net::SocketAddr;

use tempfile::TempDir;
use video_upload_server::metadata::MetadataStore;
use video_upload_server::state::AppState;

pub struct TestServer {
    pub addr: SocketAddr,
    pub dir: TempDir,
    pub client: reqwest::Client,
}

impl TestServer {
    pub async fn start() -> TestServer {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        Self::start_in(dir).await
    }

    /// Starts a server over an existing directory, as a process restart
    /// would.
    pub async fn start_in(dir: TempDir) -> TestServer {
        let library = MetadataStore::load(dir.path().join("videos.json"))
            .expect("Failed to load video metadata");
        let state = AppState::shared(library, dir.path().join("public"));
        let app = video_upload_server::app(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("No local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });

        TestServer {
            addr,
            dir,
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Builds an upload form; any missing part reproduces the matching
    /// client mistake.
    pub fn upload_form(
        title: Option<&str>,
        category: Option<&str>,
        file: Option<(&str, &[u8])>,
    ) -> reqwest::multipart::Form {
        let mut form = reqwest::multipart::Form::new();
        if let Some(title) = title {
            form = form.text("title", title.to_string());
        }
        if let Some(category) = category {
            form = form.text("category", category.to_string());
        }
        if let Some((name, data)) = file {
            form = form.part(
                "video",
                reqwest::multipart::Part::bytes(data.to_vec())
                    .file_name(name.to_string())
                    .mime_str("video/mp4")
                    .expect("Invalid mime"),
            );
        }
        form
    }
}
