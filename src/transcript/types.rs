use serde::Serialize;
use std::collections::HashMap;

/// Single timed caption segment, in feed order
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CaptionEntry {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Map from video identifier to its ordered caption entries. Identifiers
/// whose extraction failed are absent.
pub type TranscriptCollection = HashMap<String, Vec<CaptionEntry>>;
