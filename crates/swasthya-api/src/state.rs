use std::sync::Arc;

use swasthya_assistant::{ChatRelay, GeminiClient};
use swasthya_facilities::overpass::OverpassClient;
use swasthya_history::{ChatHistory, FileStore, SystemClock};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::error::ApiError;

pub type SharedHistory = Arc<Mutex<ChatHistory<FileStore, SystemClock>>>;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<ChatRelay>,
    pub overpass: Option<Arc<OverpassClient>>,
    pub history: SharedHistory,
}

impl AppState {
    pub fn from_config(config: &Config) -> eyre::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        let gemini = config.gemini_api_key.as_ref().map(|key| {
            GeminiClient::new(
                http.clone(),
                key.clone(),
                config.gemini_model.clone(),
                config.gemini_base_url.clone(),
            )
        });
        if gemini.is_none() {
            tracing::warn!("GEMINI_API_KEY not set, chat will answer with fallback text");
        }

        let overpass = config
            .overpass_url
            .as_ref()
            .map(|url| Arc::new(OverpassClient::new(http.clone(), url.clone())));

        let history = ChatHistory::open(FileStore::new(&config.data_dir), SystemClock)?;

        Ok(Self {
            relay: Arc::new(ChatRelay::new(gemini)),
            overpass,
            history: Arc::new(Mutex::new(history)),
        })
    }

    /// Run `f` against the chat history on the blocking pool. The store
    /// writes to disk, which must not block the async workers.
    pub async fn with_history<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&mut ChatHistory<FileStore, SystemClock>) -> T + Send + 'static,
        T: Send + 'static,
    {
        let history = Arc::clone(&self.history);
        tokio::task::spawn_blocking(move || {
            let mut guard = history.blocking_lock();
            f(&mut guard)
        })
        .await
        .map_err(|e| ApiError::Internal(format!("history task failed: {e}")))
    }
}
