pub mod errors;
pub use errors::{
    CaptionsNotFoundError, MalformedTranscriptError, NetworkError, ReadError, TranscriptError,
    TranscriptResult,
};

pub mod fetch;
pub use fetch::{CaptionSource, HttpCaptionSource};

pub mod captions;
pub use captions::extract_caption_url;

pub mod transcript;
pub use transcript::{parse_transcript, CaptionEntry, TranscriptCollection};

pub mod service;
pub use service::TranscriptService;

/// Fetch transcripts for the given video identifiers from the public
/// site. Identifiers whose extraction fails are absent from the result.
pub async fn fetch_transcripts(video_ids: &[&str]) -> TranscriptResult<TranscriptCollection> {
    let service = TranscriptService::new()?;
    Ok(service.get(video_ids).await)
}

/// Fetch the transcript for a single video identifier, propagating the
/// first failing stage.
pub async fn fetch_transcript(video_id: &str) -> TranscriptResult<Vec<CaptionEntry>> {
    let service = TranscriptService::new()?;
    service.fetch(video_id).await
}
