use std::path::Path;

use comment_formatter_lib::BlockEdit;
use serde::Serialize;

/// JSON view of a single reflow, with 1-based inclusive line numbers.
#[derive(Debug, Serialize)]
pub struct EditSummary<'a> {
    pub file: &'a Path,
    pub start_line: usize,
    pub end_line: usize,
    pub changed: bool,
    pub written: bool,
    pub original: &'a [String],
    pub replacement: &'a [String],
}

impl<'a> EditSummary<'a> {
    pub fn new(file: &'a Path, edit: &'a BlockEdit, written: bool) -> Self {
        Self {
            file,
            start_line: edit.range.start + 1,
            end_line: edit.range.end + 1,
            changed: !edit.is_noop(),
            written,
            original: &edit.original,
            replacement: &edit.replacement,
        }
    }
}
