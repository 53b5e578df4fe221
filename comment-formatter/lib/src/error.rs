use thiserror::Error;

/// Errors emitted by comment formatting operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommentFormatError {
    #[error("Cursor line {cursor} is out of bounds for {len} lines")]
    CursorOutOfBounds { cursor: usize, len: usize },

    #[error("Comment prefix must not be empty")]
    EmptyPrefix,
}
