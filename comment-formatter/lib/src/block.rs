//! Locating a comment block around a cursor and cutting it into paragraphs.
//!
//! A line belongs to a comment block when its trimmed content starts with the
//! comment prefix. A *blank comment line* is one whose trimmed content is the
//! prefix and nothing else; it separates paragraphs.

use serde::Serialize;
use tracing::trace;

use crate::line_seq::{split_on_by, trim_empty_ends};

/// Inclusive range `[start, end]` of line indices covered by a comment block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockRange {
    pub start: usize,
    pub end: usize,
}

impl BlockRange {
    /// Number of lines covered by the range.
    pub fn line_count(&self) -> usize {
        self.end - self.start + 1
    }

    /// Returns true when `index` falls inside the range.
    pub fn contains(&self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }
}

/// Returns true when the trimmed `line` starts with `prefix`.
pub fn is_comment_line(prefix: &str, line: &str) -> bool {
    line.trim().starts_with(prefix)
}

/// Returns true when the trimmed `line` is exactly `prefix`.
pub fn is_blank_comment_line(prefix: &str, line: &str) -> bool {
    line.trim() == prefix
}

/// Returns the run of leading spaces and tabs on `line`.
///
/// The indentation width is the character count of the returned slice.
pub fn leading_indentation(line: &str) -> &str {
    let end = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    &line[..end]
}

/// Finds the maximal run of comment lines that contains `cursor`.
///
/// A cursor on a non-comment line yields the degenerate range
/// `[cursor, cursor]`, even when its neighbours are comments.
///
/// The caller guarantees `cursor < lines.len()`.
pub fn locate_block<S: AsRef<str>>(prefix: &str, lines: &[S], cursor: usize) -> BlockRange {
    let is_comment = |i: usize| is_comment_line(prefix, lines[i].as_ref());

    if !is_comment(cursor) {
        return BlockRange {
            start: cursor,
            end: cursor,
        };
    }

    let mut start = cursor;
    while start > 0 && is_comment(start - 1) {
        start -= 1;
    }

    let mut end = cursor;
    while end + 1 < lines.len() && is_comment(end + 1) {
        end += 1;
    }

    trace!(start, end, cursor, "located comment block");
    BlockRange { start, end }
}

/// Cuts a block into paragraphs at every blank comment line.
///
/// Blank comment lines at the start or end of the block do not produce empty
/// paragraphs; a block made only of blank comment lines yields none.
pub fn split_paragraphs<S>(prefix: &str, block: &[S]) -> Vec<Vec<S>>
where
    S: AsRef<str> + Clone,
{
    trim_empty_ends(split_on_by(block, |line| {
        is_blank_comment_line(prefix, line.as_ref())
    }))
}
