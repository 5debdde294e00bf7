use crate::errors::{CaptionsNotFoundError, TranscriptResult};
use log::info;
use regex::Regex;
use std::sync::OnceLock;

const TIMEDTEXT_API_BASE: &str = "https://www.youtube.com/api/";
const TIMEDTEXT_MARKER: &str = "timedtext";

// Undocumented page convention: the player response JSON embedded in the
// watch page carries the track list under this exact key chain.
fn caption_tracks_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#""captions":\{"playerCaptionsTracklistRenderer":\{"captionTracks":\[\{"baseUrl":"(.*?)""#,
        )
        .unwrap()
    })
}

/// Extract the caption-track URL embedded in a watch page.
///
/// Tries the structured player-response fragment first; when that key
/// chain is absent, falls back to locating the bare `timedtext` marker
/// and taking the quoted window after it. Either way the fragment is
/// unescaped into a fetchable absolute URL. Fails with
/// `CaptionsNotFoundError` when neither strategy matches, which is the
/// normal outcome for videos without captions.
pub fn extract_caption_url(page: &str) -> TranscriptResult<String> {
    if let Some(captures) = caption_tracks_re().captures(page) {
        info!("Caption track found via player response");
        return Ok(unescape_caption_url(&captures[1]));
    }

    if let Some(position) = page.find(TIMEDTEXT_MARKER) {
        info!("Caption track found via timedtext marker");
        let window = &page[position..];
        let fragment = match window.find('"') {
            Some(end) => &window[..end],
            None => window,
        };
        return Ok(unescape_caption_url(&format!(
            "{}{}",
            TIMEDTEXT_API_BASE, fragment
        )));
    }

    Err(CaptionsNotFoundError::new("no caption track reference in page text").into())
}

/// Normalize an extracted URL fragment: encoded ampersand sequences
/// become literal `&` and remaining backslashes are stripped.
pub fn unescape_caption_url(fragment: &str) -> String {
    fragment.replace("\\u0026", "&").replace('\\', "")
}
