use std::path::PathBuf;

use comment_formatter_lib::CommentFormatError;
use thiserror::Error;

/// Errors reported by the `cfmt` binary. Every variant exits with status 1.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write `{path}`: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line number {line} is out of bounds (file has {total} lines)")]
    LineOutOfBounds { line: i64, total: usize },

    #[error("Line {line} is not part of a `{prefix}` comment block")]
    NotInCommentBlock { line: usize, prefix: String },

    #[error(transparent)]
    Format(#[from] CommentFormatError),

    #[error("Failed to serialize edit summary: {0}")]
    Json(#[from] serde_json::Error),
}
