use crate::errors::{NetworkError, ReadError, TranscriptResult};
use async_trait::async_trait;
use log::info;
use reqwest::Client;
use std::time::Duration;

const WATCH_BASE: &str = "https://www.youtube.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Network seam for the transcript pipeline: one fetch for the watch
/// page, one for the caption feed it references
#[async_trait]
pub trait CaptionSource {
    async fn fetch_page(&self, video_id: &str) -> TranscriptResult<String>;
    async fn fetch_captions(&self, url: &str) -> TranscriptResult<String>;
}

/// HTTP-backed source targeting the public watch pages
pub struct HttpCaptionSource {
    client: Client,
    watch_base: String,
}

impl HttpCaptionSource {
    pub fn new() -> TranscriptResult<Self> {
        Self::with_watch_base(WATCH_BASE)
    }

    /// Same client against a different watch-page host. The caption feed
    /// URL always comes out of the page body, so only the first hop moves.
    pub fn with_watch_base(watch_base: impl Into<String>) -> TranscriptResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| NetworkError::new(e.to_string()))?;

        Ok(Self {
            client,
            watch_base: watch_base.into(),
        })
    }

    async fn get_text(&self, url: &str) -> TranscriptResult<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| NetworkError::new(e.to_string()))?;

        if !response.status().is_success() {
            return Err(NetworkError::new(format!("HTTP error: {}", response.status())).into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| ReadError::new(e.to_string()))?;

        Ok(body)
    }
}

#[async_trait]
impl CaptionSource for HttpCaptionSource {
    async fn fetch_page(&self, video_id: &str) -> TranscriptResult<String> {
        let url = format!("{}/watch?v={}", self.watch_base, video_id);
        info!("Fetching watch page: {}", url);
        self.get_text(&url).await
    }

    async fn fetch_captions(&self, url: &str) -> TranscriptResult<String> {
        info!("Fetching caption feed: {}", url);
        self.get_text(url).await
    }
}
