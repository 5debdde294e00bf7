mod caption_source;

pub use caption_source::{CaptionSource, HttpCaptionSource};
