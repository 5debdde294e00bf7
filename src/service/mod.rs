mod transcript_service;

pub use transcript_service::TranscriptService;
