//! Reflowing the comment block under a cursor.
//!
//! [`format_block`] computes the edit for the block around a cursor line and
//! [`format`] applies it, returning a new line sequence. Neither mutates its
//! input.
//!
//! ## Examples
//!
//! ```rust
//! use comment_formatter_lib::format;
//!
//! let lines = vec![
//!     "fn main() {".to_string(),
//!     "    // short".to_string(),
//!     "    // lines here".to_string(),
//!     "}".to_string(),
//! ];
//! let formatted = format("//", &lines, 1, 80).unwrap();
//! assert_eq!(formatted, vec!["fn main() {", "    // short lines here", "}"]);
//! ```

use serde::Serialize;
use tracing::{debug, instrument};

use crate::block::{
    BlockRange, is_comment_line, leading_indentation, locate_block, split_paragraphs,
};
use crate::error::CommentFormatError;
use crate::line_seq::flatten;
use crate::wrap::{paragraph_words, wrap_words};

/// A replacement of the lines in `range` by `replacement`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockEdit {
    /// Inclusive, 0-based line range being replaced.
    pub range: BlockRange,
    /// The lines currently in `range`.
    pub original: Vec<String>,
    /// The reflowed lines that take their place.
    pub replacement: Vec<String>,
}

impl BlockEdit {
    /// Returns true when applying the edit would leave the lines unchanged.
    pub fn is_noop(&self) -> bool {
        self.original == self.replacement
    }

    /// Splices the replacement into `lines`, returning the new sequence.
    ///
    /// `lines` must be the sequence the edit was computed from.
    pub fn apply<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        let head = lines[..self.range.start].iter();
        let tail = lines[self.range.end + 1..].iter();

        head.map(|l| l.as_ref().to_string())
            .chain(self.replacement.iter().cloned())
            .chain(tail.map(|l| l.as_ref().to_string()))
            .collect()
    }
}

/// Reflows the comment block around `cursor` to `max_width` characters.
///
/// Returns the full line sequence with the block replaced. An empty `lines`
/// is returned unchanged whatever the cursor; a cursor on a non-comment line
/// leaves the sequence unchanged.
pub fn format<S: AsRef<str>>(
    comment_prefix: &str,
    lines: &[S],
    cursor: usize,
    max_width: usize,
) -> Result<Vec<String>, CommentFormatError> {
    if lines.is_empty() {
        return Ok(Vec::new());
    }

    let edit = format_block(comment_prefix, lines, cursor, max_width)?;
    Ok(edit.apply(lines))
}

/// Computes the edit that reflows the comment block around `cursor`.
///
/// Paragraphs are separated by a single blank comment line in the output and
/// every line carries the cursor line's indentation. A block that was present
/// but reflows to nothing (only blank comment lines) collapses to a single
/// blank comment line.
#[instrument(level = "debug", skip(lines), fields(lines = lines.len()))]
pub fn format_block<S: AsRef<str>>(
    comment_prefix: &str,
    lines: &[S],
    cursor: usize,
    max_width: usize,
) -> Result<BlockEdit, CommentFormatError> {
    if comment_prefix.is_empty() {
        return Err(CommentFormatError::EmptyPrefix);
    }
    let cursor_line: &str = lines
        .get(cursor)
        .ok_or(CommentFormatError::CursorOutOfBounds {
            cursor,
            len: lines.len(),
        })?
        .as_ref();

    let found_comment = is_comment_line(comment_prefix, cursor_line);
    let indent = leading_indentation(cursor_line);
    let range = locate_block(comment_prefix, lines, cursor);
    let block: Vec<&str> = lines[range.start..=range.end]
        .iter()
        .map(|l| l.as_ref())
        .collect();
    let original: Vec<String> = block.iter().map(|l| l.to_string()).collect();

    if !found_comment {
        debug!(cursor, "cursor is not on a comment line, nothing to do");
        return Ok(BlockEdit {
            range,
            replacement: original.clone(),
            original,
        });
    }

    let paragraphs = split_paragraphs(comment_prefix, &block);
    debug!(
        start = range.start,
        end = range.end,
        paragraphs = paragraphs.len(),
        "reflowing comment block"
    );

    let wrapped = paragraphs
        .iter()
        .map(|paragraph| {
            let words = paragraph_words(comment_prefix, paragraph);
            wrap_words(indent, comment_prefix, &words, max_width)
        })
        .collect();
    let mut replacement = join_paragraphs(indent, comment_prefix, wrapped);

    if replacement.is_empty() {
        replacement.push(format!("{indent}{comment_prefix}"));
    }

    Ok(BlockEdit {
        range,
        original,
        replacement,
    })
}

/// Flattens reflowed paragraphs with one blank comment line between each pair.
fn join_paragraphs(indent: &str, prefix: &str, paragraphs: Vec<Vec<String>>) -> Vec<String> {
    let separator = format!("{indent}{prefix}");
    let last = paragraphs.len().saturating_sub(1);

    let mut groups = Vec::with_capacity(paragraphs.len() * 2);
    for (i, paragraph) in paragraphs.into_iter().enumerate() {
        groups.push(paragraph);
        if i != last {
            groups.push(vec![separator.clone()]);
        }
    }

    flatten(groups)
}
