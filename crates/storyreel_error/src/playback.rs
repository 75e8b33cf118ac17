//! Playback engine error types.

/// Playback error kind variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PlaybackErrorKind {
    /// Every sender of the event channel has been dropped
    #[display("Playback event channel closed")]
    EventChannelClosed,
    /// Timing configuration cannot drive playback
    #[display("Invalid playback configuration: {}", _0)]
    InvalidConfig(String),
}

/// Playback error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Playback Error: {} at line {} in {}", kind, line, file)]
pub struct PlaybackError {
    /// Error kind
    pub kind: PlaybackErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl PlaybackError {
    /// Create a new PlaybackError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PlaybackErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for playback operations.
pub type PlaybackResult<T> = Result<T, PlaybackError>;
