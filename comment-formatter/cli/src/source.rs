//! Reading a file into lines and writing an edit back with its original layout.

use std::fs;
use std::path::Path;

use comment_formatter_lib::BlockEdit;
use tracing::debug;

use crate::error::CliError;

/// File content split into lines, each remembering its own terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    pub lines: Vec<String>,
    /// `"\r\n"`, `"\n"`, or `""` for a final line with no terminator.
    endings: Vec<&'static str>,
}

impl SourceText {
    /// Splits `content` on `\n`, recording whether each line ended in `\r\n`.
    pub fn parse(content: &str) -> Self {
        let (lines, endings) = content
            .split_inclusive('\n')
            .map(|piece| {
                if let Some(text) = piece.strip_suffix("\r\n") {
                    (text.to_string(), "\r\n")
                } else if let Some(text) = piece.strip_suffix('\n') {
                    (text.to_string(), "\n")
                } else {
                    (piece.to_string(), "")
                }
            })
            .unzip();

        Self { lines, endings }
    }

    pub fn read(path: &Path) -> Result<Self, CliError> {
        let content = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let text = Self::parse(&content);
        debug!(
            path = %path.display(),
            lines = text.lines.len(),
            crlf = text.endings.iter().filter(|e| **e == "\r\n").count(),
            "read source file"
        );
        Ok(text)
    }

    /// Renders the file with `edit` applied.
    ///
    /// Lines outside the edited range are emitted byte for byte. Replacement
    /// lines take the terminator of the block's first line, and the last one
    /// keeps the terminator of the block's last line, so a missing final
    /// newline stays missing.
    pub fn render(&self, edit: &BlockEdit) -> String {
        let range = edit.range;
        let mut out = String::new();

        for (line, ending) in self.lines[..range.start]
            .iter()
            .zip(&self.endings[..range.start])
        {
            out.push_str(line);
            out.push_str(ending);
        }

        let block_ending = match self.endings[range.start] {
            "" => self.fallback_ending(),
            ending => ending,
        };
        let last = edit.replacement.len().saturating_sub(1);
        for (i, line) in edit.replacement.iter().enumerate() {
            out.push_str(line);
            out.push_str(if i == last {
                self.endings[range.end]
            } else {
                block_ending
            });
        }

        for (line, ending) in self.lines[range.end + 1..]
            .iter()
            .zip(&self.endings[range.end + 1..])
        {
            out.push_str(line);
            out.push_str(ending);
        }

        out
    }

    pub fn write(&self, path: &Path, edit: &BlockEdit) -> Result<(), CliError> {
        fs::write(path, self.render(edit)).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// First terminator used anywhere in the file, `\n` if there is none.
    fn fallback_ending(&self) -> &'static str {
        self.endings
            .iter()
            .copied()
            .find(|e| !e.is_empty())
            .unwrap_or("\n")
    }
}
