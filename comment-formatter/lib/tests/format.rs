use comment_formatter_lib::{BlockRange, CommentFormatError, format, format_block};

fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|l| l.to_string()).collect()
}

// ============================================================================
// Worked examples
// ============================================================================

#[test]
fn reflows_paragraphs_and_drops_trailing_blank_line() {
    let input = lines(&[
        "// This is a comment block.",
        "// It has multiple lines.",
        "//",
        "// There is an empty line above.",
        "//",
        "// This is another comment block.",
        "// It also has multiple lines.",
        "// ",
    ]);

    let got = format("//", &input, 0, 40).unwrap();

    assert_eq!(
        got,
        vec![
            "// This is a comment block. It has",
            "// multiple lines.",
            "//",
            "// There is an empty line above.",
            "//",
            "// This is another comment block. It",
            "// also has multiple lines.",
        ]
    );
}

#[test]
fn drops_leading_blank_line() {
    let input = lines(&[
        "//",
        "// This is a comment block.",
        "// It has multiple lines.",
        "//",
        "// There is an empty line above.",
        "//",
        "// This is another comment block.",
        "// It also has multiple lines.",
    ]);

    let got = format("//", &input, 0, 40).unwrap();

    assert_eq!(
        got,
        vec![
            "// This is a comment block. It has",
            "// multiple lines.",
            "//",
            "// There is an empty line above.",
            "//",
            "// This is another comment block. It",
            "// also has multiple lines.",
        ]
    );
}

#[test]
fn reflows_indented_hash_comments() {
    let input = lines(&[
        "    # Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod",
        "    # tempor incididunt ut labore et dolore magna aliqua.",
        "    #",
        "    # Ut enim ad",
        "    # minim veniam, quis nostrud exercitation ullamco laboris nisi ut",
        "    # aliquip ex ea commodo consequat.",
        "    # ",
        "    # Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur.",
        "    # Excepteur sint occaecat",
        "    # cupidatat non proident, sunt in culpa qui officia deserunt mollit",
        "    # anim id est laborum.",
    ]);

    let got = format("#", &input, 0, 80).unwrap();

    assert_eq!(
        got,
        vec![
            "    # Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod",
            "    # tempor incididunt ut labore et dolore magna aliqua.",
            "    #",
            "    # Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut",
            "    # aliquip ex ea commodo consequat.",
            "    #",
            "    # Duis aute irure dolor in reprehenderit in voluptate velit esse cillum",
            "    # dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non",
            "    # proident, sunt in culpa qui officia deserunt mollit anim id est laborum.",
        ]
    );
}

#[test]
fn wrong_prefix_leaves_lines_unchanged() {
    let input = lines(&["    # foo ", "    # bar", "    #"]);
    assert_eq!(format("//", &input, 0, 80).unwrap(), input);
}

#[test]
fn empty_input_returns_empty() {
    let input: Vec<String> = Vec::new();
    assert!(format("//", &input, 0, 40).unwrap().is_empty());
}

#[test]
fn single_blank_comment_line_survives() {
    let input = lines(&["//"]);
    assert_eq!(format("//", &input, 0, 40).unwrap(), vec!["//"]);
}

#[test]
fn only_the_block_under_the_cursor_changes() {
    let input = lines(&[
        "// first block",
        "// stays as is",
        "fn main() {",
        "    // second",
        "    // block",
        "}",
    ]);

    let got = format("//", &input, 4, 80).unwrap();

    assert_eq!(
        got,
        vec![
            "// first block",
            "// stays as is",
            "fn main() {",
            "    // second block",
            "}",
        ]
    );
}

#[test]
fn consecutive_blank_lines_inside_block_are_kept() {
    let input = lines(&["// a", "//", "//", "// b"]);

    let once = format("//", &input, 0, 40).unwrap();
    assert_eq!(once, vec!["// a", "//", "//", "// b"]);

    let twice = format("//", &once, 0, 40).unwrap();
    assert_eq!(twice, once);
}

#[test]
fn over_long_first_word_is_stable() {
    let input = lines(&["// https://example.com/a/very/long/path/that/never/fits here"]);

    let once = format("//", &input, 0, 20).unwrap();
    assert_eq!(
        once,
        vec![
            "// https://example.com/a/very/long/path/that/never/fits",
            "// here",
        ]
    );
    assert_eq!(format("//", &once, 0, 20).unwrap(), once);
}

#[test]
fn cursor_indentation_applies_to_whole_block() {
    let input = lines(&["  // alpha", "    // beta", "//", "      // gamma"]);

    let got = format("//", &input, 1, 80).unwrap();

    assert_eq!(got, vec!["    // alpha beta", "    //", "    // gamma"]);
}

#[test]
fn edit_reports_replaced_range() {
    let input = lines(&["code", "// a", "// b", "more code"]);

    let edit = format_block("//", &input, 1, 80).unwrap();

    assert_eq!(edit.range, BlockRange { start: 1, end: 2 });
    assert_eq!(edit.original, vec!["// a", "// b"]);
    assert_eq!(edit.replacement, vec!["// a b"]);
}

#[test]
fn out_of_range_cursor_is_rejected() {
    let input = lines(&["// a", "// b"]);
    assert_eq!(
        format("//", &input, 5, 80),
        Err(CommentFormatError::CursorOutOfBounds { cursor: 5, len: 2 })
    );
}

// ============================================================================
// Properties
// ============================================================================

mod properties {
    use super::*;
    use proptest::prelude::*;

    const PREFIX: &str = "//";

    /// Renders paragraphs of words as an indented `//` block, three words a line.
    fn render(indent: &str, paragraphs: &[Vec<String>]) -> Vec<String> {
        let mut out = Vec::new();
        for (i, paragraph) in paragraphs.iter().enumerate() {
            if i > 0 {
                out.push(format!("{indent}{PREFIX}"));
            }
            for chunk in paragraph.chunks(3) {
                out.push(format!("{indent}{PREFIX} {}", chunk.join(" ")));
            }
        }
        out
    }

    /// Words of each paragraph in `block`, split on blank comment lines.
    fn paragraphs_of(block: &[String]) -> Vec<Vec<String>> {
        let mut paragraphs = vec![Vec::new()];
        for line in block {
            let trimmed = line.trim();
            if trimmed == PREFIX {
                paragraphs.push(Vec::new());
                continue;
            }
            let words = trimmed
                .strip_prefix(PREFIX)
                .unwrap_or(trimmed)
                .split_whitespace()
                .map(str::to_string);
            if let Some(last) = paragraphs.last_mut() {
                last.extend(words);
            }
        }
        paragraphs.retain(|p| !p.is_empty());
        paragraphs
    }

    fn block_strategy() -> impl Strategy<Value = (String, Vec<Vec<String>>, usize)> {
        (
            0usize..8,
            prop::collection::vec(prop::collection::vec("[a-z]{1,12}", 1..20), 1..4),
            20usize..80,
        )
            .prop_map(|(indent, paragraphs, width)| (" ".repeat(indent), paragraphs, width))
    }

    proptest! {
        #[test]
        fn formatting_is_idempotent((indent, paragraphs, width) in block_strategy()) {
            let input = render(&indent, &paragraphs);
            let once = format(PREFIX, &input, 0, width).unwrap();
            let twice = format(PREFIX, &once, 0, width).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn lines_fit_unless_single_word((indent, paragraphs, width) in block_strategy()) {
            let input = render(&indent, &paragraphs);
            let output = format(PREFIX, &input, 0, width).unwrap();
            for line in &output {
                let words = line.trim().trim_start_matches(PREFIX).split_whitespace().count();
                prop_assert!(
                    line.chars().count() <= width || words == 1,
                    "line {:?} exceeds width {}",
                    line,
                    width
                );
            }
        }

        #[test]
        fn words_and_paragraphs_are_preserved((indent, paragraphs, width) in block_strategy()) {
            let input = render(&indent, &paragraphs);
            let output = format(PREFIX, &input, 0, width).unwrap();
            prop_assert_eq!(paragraphs_of(&output), paragraphs);
        }

        #[test]
        fn every_line_keeps_indentation((indent, paragraphs, width) in block_strategy()) {
            let input = render(&indent, &paragraphs);
            let output = format(PREFIX, &input, 0, width).unwrap();
            let bare = format!("{indent}{PREFIX}");
            for line in &output {
                prop_assert!(line.starts_with(&bare));
            }
        }

        #[test]
        fn wrong_prefix_is_noop((indent, paragraphs, width) in block_strategy()) {
            let input = render(&indent, &paragraphs);
            let output = format("#", &input, 0, width).unwrap();
            prop_assert_eq!(output, input);
        }
    }
}
