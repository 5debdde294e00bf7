use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all possible errors that can occur while fetching a transcript
#[derive(Debug)]
pub enum TranscriptError {
    Network(NetworkError),
    Read(ReadError),
    CaptionsNotFound(CaptionsNotFoundError),
    Malformed(MalformedTranscriptError),
    Other(io::Error),
}

/// Connection or transport level failures, including timeouts and
/// non-success HTTP statuses
#[derive(Debug)]
pub struct NetworkError {
    pub message: String,
}

impl NetworkError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body could not be fully drained
#[derive(Debug)]
pub struct ReadError {
    pub message: String,
}

impl ReadError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// No caption-track marker present in the page text. Expected when
/// captions are disabled or the video is unavailable.
#[derive(Debug)]
pub struct CaptionsNotFoundError {
    pub message: String,
}

impl CaptionsNotFoundError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Caption feed was not decodable as the expected timed-text XML shape
#[derive(Debug)]
pub struct MalformedTranscriptError {
    pub message: String,
}

impl MalformedTranscriptError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TranscriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptError::Network(err) => write!(f, "Network error: {}", err),
            TranscriptError::Read(err) => write!(f, "Read error: {}", err),
            TranscriptError::CaptionsNotFound(err) => write!(f, "Captions not found: {}", err),
            TranscriptError::Malformed(err) => write!(f, "Malformed transcript: {}", err),
            TranscriptError::Other(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for CaptionsNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for MalformedTranscriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for TranscriptError {}
impl Error for NetworkError {}
impl Error for ReadError {}
impl Error for CaptionsNotFoundError {}
impl Error for MalformedTranscriptError {}

// Conversion implementations
impl From<io::Error> for TranscriptError {
    fn from(err: io::Error) -> Self {
        TranscriptError::Other(err)
    }
}

impl From<NetworkError> for TranscriptError {
    fn from(err: NetworkError) -> Self {
        TranscriptError::Network(err)
    }
}

impl From<ReadError> for TranscriptError {
    fn from(err: ReadError) -> Self {
        TranscriptError::Read(err)
    }
}

impl From<CaptionsNotFoundError> for TranscriptError {
    fn from(err: CaptionsNotFoundError) -> Self {
        TranscriptError::CaptionsNotFound(err)
    }
}

impl From<MalformedTranscriptError> for TranscriptError {
    fn from(err: MalformedTranscriptError) -> Self {
        TranscriptError::Malformed(err)
    }
}

// Conversion to io::Error for callers that work in io::Result
impl From<TranscriptError> for io::Error {
    fn from(err: TranscriptError) -> Self {
        io::Error::other(err)
    }
}

impl From<NetworkError> for io::Error {
    fn from(err: NetworkError) -> Self {
        io::Error::other(err)
    }
}

impl From<ReadError> for io::Error {
    fn from(err: ReadError) -> Self {
        io::Error::other(err)
    }
}

impl From<CaptionsNotFoundError> for io::Error {
    fn from(err: CaptionsNotFoundError) -> Self {
        io::Error::other(err)
    }
}

impl From<MalformedTranscriptError> for io::Error {
    fn from(err: MalformedTranscriptError) -> Self {
        io::Error::other(err)
    }
}

// Type alias for Result with TranscriptError
pub type TranscriptResult<T> = Result<T, TranscriptError>;
