//! Data source error types.

/// Kinds of data source errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SourceErrorKind {
    /// Failed to read a local file
    #[display("Failed to read file: {}", _0)]
    FileRead(String),
    /// Resource does not exist at the given location
    #[display("Not found: {}", _0)]
    NotFound(String),
    /// Server answered with a non-success status
    #[display("{} (status {})", message, status)]
    Status {
        /// Human readable summary, e.g. "Failed to fetch stories"
        message: String,
        /// HTTP status code
        status: u16,
    },
    /// Transport-level request failure
    #[display("Request failed: {}", _0)]
    Request(String),
    /// Payload could not be decoded
    #[display("Failed to decode: {}", _0)]
    Decode(String),
    /// Payload decoded but violates collection rules
    #[display("Invalid data: {}", _0)]
    InvalidData(String),
}

impl SourceErrorKind {
    /// Whether retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request(_) => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// Data source error with location tracking.
///
/// # Examples
///
/// ```
/// use storyreel_error::{SourceError, SourceErrorKind};
///
/// let err = SourceError::new(SourceErrorKind::NotFound("stories.json".to_string()));
/// assert!(format!("{}", err).contains("Not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Source Error: {} at line {} in {}", kind, line, file)]
pub struct SourceError {
    /// The kind of error that occurred
    pub kind: SourceErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SourceError {
    /// Create a new source error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SourceErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// The message shown to a user, without location details.
    pub fn user_message(&self) -> String {
        self.kind.to_string()
    }
}

/// Result type for data source operations.
pub type SourceResult<T> = Result<T, SourceError>;
