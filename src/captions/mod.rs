mod url_extractor;

pub use url_extractor::{extract_caption_url, unescape_caption_url};
