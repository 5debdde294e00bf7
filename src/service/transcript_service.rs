use crate::captions::extract_caption_url;
use crate::errors::TranscriptResult;
use crate::fetch::{CaptionSource, HttpCaptionSource};
use crate::transcript::{parse_transcript, CaptionEntry, TranscriptCollection};
use log::{info, warn};
use std::collections::HashMap;

/// Runs the per-video pipeline: watch page, caption URL, caption feed,
/// parsed entries. Identifiers are processed sequentially; each stage
/// completes before the next begins.
pub struct TranscriptService<S: CaptionSource> {
    source: S,
}

impl TranscriptService<HttpCaptionSource> {
    /// Service over the public site with the default HTTP source
    pub fn new() -> TranscriptResult<Self> {
        Ok(Self::with_source(HttpCaptionSource::new()?))
    }
}

impl<S: CaptionSource> TranscriptService<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Fetch transcripts for the given identifiers.
    ///
    /// An identifier whose pipeline fails at any stage is logged and left
    /// out of the returned collection; the batch itself never fails and no
    /// stage is retried. Callers that need to distinguish "no captions"
    /// from a transport failure should use
    /// [`get_detailed`](Self::get_detailed) instead.
    pub async fn get(&self, video_ids: &[&str]) -> TranscriptCollection {
        let mut collection = TranscriptCollection::new();

        for &video_id in video_ids {
            info!("Fetching transcript for video ID: {}", video_id);
            match self.fetch(video_id).await {
                Ok(entries) => {
                    info!("Transcript fetched successfully for video ID: {}", video_id);
                    collection.insert(video_id.to_string(), entries);
                }
                Err(err) => {
                    warn!(
                        "Could not get the transcript for the video {}: {}",
                        video_id, err
                    );
                }
            }
        }

        collection
    }

    /// Like [`get`](Self::get), but every identifier stays present,
    /// mapped to its entries or to the error that stopped its pipeline.
    pub async fn get_detailed(
        &self,
        video_ids: &[&str],
    ) -> HashMap<String, TranscriptResult<Vec<CaptionEntry>>> {
        let mut results = HashMap::new();

        for &video_id in video_ids {
            info!("Fetching transcript for video ID: {}", video_id);
            results.insert(video_id.to_string(), self.fetch(video_id).await);
        }

        results
    }

    /// Run the full pipeline for a single identifier, propagating the
    /// first failing stage.
    pub async fn fetch(&self, video_id: &str) -> TranscriptResult<Vec<CaptionEntry>> {
        let page = self.source.fetch_page(video_id).await?;
        let caption_url = extract_caption_url(&page)?;
        let feed = self.source.fetch_captions(&caption_url).await?;
        parse_transcript(&feed)
    }
}
