//! Greedy word wrapping for a single comment paragraph.
//!
//! Widths are measured in characters, not display columns. Words are never
//! split: a word longer than the limit sits alone on an over-long line.

/// Strips the comment prefix from every line and returns the words in order.
///
/// Only the first occurrence of `prefix` is removed from each trimmed line, so
/// `/// doc` under prefix `//` keeps a leading `/` on its first word.
pub fn paragraph_words<'a, S: AsRef<str>>(prefix: &str, paragraph: &'a [S]) -> Vec<&'a str> {
    paragraph
        .iter()
        .flat_map(|line| {
            let trimmed = line.as_ref().trim();
            trimmed
                .strip_prefix(prefix)
                .unwrap_or(trimmed)
                .split_whitespace()
        })
        .collect()
}

/// Packs `words` into lines of the form `indent + prefix + " " + words...`.
///
/// Each word is appended to the current line unless doing so would push the
/// line past `max_width`, in which case the current line is emitted and a new
/// one started with that word. No words produces no lines.
///
/// A line is only emitted once it holds at least one word. An over-long first
/// word therefore starts the paragraph on its own line instead of being
/// preceded by a bare `indent + prefix` line, which would read back as a
/// paragraph break and make a second pass split the paragraph.
pub fn wrap_words(indent: &str, prefix: &str, words: &[&str], max_width: usize) -> Vec<String> {
    let bare = format!("{indent}{prefix}");
    let bare_width = bare.chars().count();

    let mut wrapped = Vec::new();
    let mut line = bare.clone();
    let mut width = bare_width;

    for word in words {
        let word_width = word.chars().count();
        if width > bare_width && width + 1 + word_width > max_width {
            wrapped.push(std::mem::replace(&mut line, bare.clone()));
            width = bare_width;
        }
        line.push(' ');
        line.push_str(word);
        width += 1 + word_width;
    }

    if width > bare_width {
        wrapped.push(line);
    }

    wrapped
}
