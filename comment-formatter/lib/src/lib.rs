//! Reflow blocks of line comments to a target width.
//!
//! Given the lines of a file, a cursor line and a comment prefix such as `//`
//! or `#`, the formatter finds the contiguous run of comment lines around the
//! cursor, splits it into paragraphs at blank comment lines, and greedily
//! re-wraps each paragraph while keeping the cursor line's indentation.
//!
//! The comment prefix is an opaque token; no host-language syntax is parsed.
//!
//! ```rust
//! use comment_formatter_lib::format;
//!
//! let lines = [
//!     "// This is a comment block.",
//!     "// It has multiple lines.",
//!     "//",
//!     "// There is an empty line above.",
//! ];
//! let formatted = format("//", &lines, 0, 40).unwrap();
//! assert_eq!(
//!     formatted,
//!     vec![
//!         "// This is a comment block. It has",
//!         "// multiple lines.",
//!         "//",
//!         "// There is an empty line above.",
//!     ]
//! );
//! ```

pub mod block;
pub mod error;
pub mod formatter;
pub mod line_seq;
pub mod wrap;

pub use block::{BlockRange, is_comment_line};
pub use error::CommentFormatError;
pub use formatter::{BlockEdit, format, format_block};
