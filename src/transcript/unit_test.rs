use crate::errors::TranscriptError;
use crate::transcript::{parse_transcript, CaptionEntry};
use proptest::prelude::*;

mod test_helpers {
    use crate::transcript::CaptionEntry;

    pub const TWO_ENTRY_FEED: &str = r#"<transcript><text start="0.0" dur="1.5">Hello</text><text start="1.5" dur="2.0">World</text></transcript>"#;

    /// Encode entries back into the feed shape, escaping the markup
    /// characters the feed itself escapes.
    pub fn encode_feed(entries: &[CaptionEntry]) -> String {
        let mut feed = String::from("<transcript>");
        for entry in entries {
            let text = entry
                .text
                .replace('&', "&amp;")
                .replace('<', "&lt;")
                .replace('>', "&gt;");
            feed.push_str(&format!(
                r#"<text start="{}" dur="{}">{}</text>"#,
                entry.start, entry.duration, text
            ));
        }
        feed.push_str("</transcript>");
        feed
    }
}

#[test]
fn test_parse_two_entry_feed() {
    let entries = parse_transcript(test_helpers::TWO_ENTRY_FEED).unwrap();
    assert_eq!(
        entries,
        vec![
            CaptionEntry {
                text: "Hello".to_string(),
                start: 0.0,
                duration: 1.5,
            },
            CaptionEntry {
                text: "World".to_string(),
                start: 1.5,
                duration: 2.0,
            },
        ]
    );
}

#[test]
fn test_parse_preserves_document_order() {
    let feed = r#"<transcript><text start="9.0" dur="1.0">third</text><text start="4.0" dur="1.0">first</text><text start="7.0" dur="1.0">second</text></transcript>"#;
    let entries = parse_transcript(feed).unwrap();

    let texts: Vec<&str> = entries.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["third", "first", "second"]);
}

#[test]
fn test_parse_decodes_xml_entities() {
    let feed = r#"<transcript><text start="31.62" dur="1.08">and that&amp;#39;s where it gets scary</text><text start="32.7" dur="4.47">Q &amp; A &lt;live&gt;</text></transcript>"#;
    let entries = parse_transcript(feed).unwrap();

    assert_eq!(entries[0].text, "and that&#39;s where it gets scary");
    assert_eq!(entries[1].text, "Q & A <live>");
}

#[test]
fn test_parse_empty_text_node() {
    let feed = r#"<transcript><text start="1.0" dur="2.0"></text></transcript>"#;
    let entries = parse_transcript(feed).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "");
}

#[test]
fn test_parse_empty_transcript() {
    let entries = parse_transcript("<transcript></transcript>").unwrap();
    assert!(entries.is_empty());
}

#[test]
fn test_parse_rejects_malformed_xml() {
    let truncated = r#"<transcript><text start="0.0" dur="1.5">Hello"#;
    let result = parse_transcript(truncated);
    assert!(matches!(result, Err(TranscriptError::Malformed(_))));

    let not_xml = "503 Service Unavailable";
    let result = parse_transcript(not_xml);
    assert!(matches!(result, Err(TranscriptError::Malformed(_))));
}

#[test]
fn test_parse_rejects_non_numeric_timing() {
    let feed = r#"<transcript><text start="soon" dur="1.5">Hello</text></transcript>"#;
    let result = parse_transcript(feed);
    assert!(matches!(result, Err(TranscriptError::Malformed(_))));
}

#[test]
fn test_parse_rejects_negative_timing() {
    let feed = r#"<transcript><text start="-1.0" dur="1.5">Hello</text></transcript>"#;
    let result = parse_transcript(feed);
    assert!(matches!(result, Err(TranscriptError::Malformed(_))));
}

prop_compose! {
    fn caption_entry()(
        text in "[A-Za-z0-9]([A-Za-z0-9 '&<>]{0,28}[A-Za-z0-9])?",
        start in 0.0f64..86400.0,
        duration in 0.0f64..30.0,
    ) -> CaptionEntry {
        CaptionEntry { text, start, duration }
    }
}

proptest! {
    #[test]
    fn test_feed_round_trip(entries in proptest::collection::vec(caption_entry(), 0..20)) {
        let feed = test_helpers::encode_feed(&entries);
        let parsed = parse_transcript(&feed).unwrap();

        prop_assert_eq!(parsed.len(), entries.len());
        for (parsed_entry, entry) in parsed.iter().zip(entries.iter()) {
            prop_assert_eq!(&parsed_entry.text, &entry.text);
            prop_assert!((parsed_entry.start - entry.start).abs() < 1e-6);
            prop_assert!((parsed_entry.duration - entry.duration).abs() < 1e-6);
        }
    }
}
