use super::types::CaptionEntry;
use crate::errors::{MalformedTranscriptError, TranscriptResult};
use log::info;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct TranscriptDocument {
    #[serde(rename = "text", default)]
    nodes: Vec<CaptionNode>,
}

#[derive(Debug, Deserialize)]
struct CaptionNode {
    start: f64,
    dur: f64,
    #[serde(rename = "$value", default)]
    text: String,
}

/// Parse a timed-text feed into caption entries.
///
/// The feed is expected to be `<transcript>` with repeated `<text>`
/// children carrying `start`/`dur` attributes in fractional seconds.
/// Entries come back in document order; XML entities in the caption text
/// are already decoded. Timing attributes must be non-negative.
pub fn parse_transcript(feed: &str) -> TranscriptResult<Vec<CaptionEntry>> {
    info!("Parsing transcript data");

    let document: TranscriptDocument = serde_xml_rs::from_str(feed).map_err(|e| {
        MalformedTranscriptError::new(format!("not a timed-text document: {}", e))
    })?;

    let mut entries = Vec::with_capacity(document.nodes.len());
    for node in document.nodes {
        if node.start < 0.0 || node.dur < 0.0 {
            return Err(MalformedTranscriptError::new(format!(
                "negative timing on caption node: start={}, dur={}",
                node.start, node.dur
            ))
            .into());
        }

        entries.push(CaptionEntry {
            text: node.text,
            start: node.start,
            duration: node.dur,
        });
    }

    Ok(entries)
}
