mod parser;
mod types;

pub use parser::parse_transcript;
pub use types::{CaptionEntry, TranscriptCollection};

#[cfg(test)]
pub mod unit_test;
