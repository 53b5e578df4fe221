//! Whole-element operations over sequences of lines.
//!
//! These mirror the familiar substring helpers on `str` (`find`, `matches`,
//! `split`) but treat each element of a slice as an indivisible token: a
//! separator must equal an entire line, never part of one.
//!
//! ## Examples
//!
//! ```rust
//! use comment_formatter_lib::line_seq::{flatten, split_on, trim_empty_ends};
//!
//! let lines = ["//", "// foo", "//", "// bar", "//"];
//! let groups = trim_empty_ends(split_on(&lines, "//"));
//! assert_eq!(groups, vec![vec!["// foo"], vec!["// bar"]]);
//! assert_eq!(flatten(groups), vec!["// foo", "// bar"]);
//! ```

/// Returns the index of the first element exactly equal to `target`.
pub fn index_of<S: AsRef<str>>(seq: &[S], target: &str) -> Option<usize> {
    seq.iter().position(|line| line.as_ref() == target)
}

/// Counts non-overlapping elements equal to `target`, scanning left to right.
///
/// An empty `target` yields `seq.len() + 1`, the same convention `str::matches`
/// follows for the empty pattern.
pub fn count<S: AsRef<str>>(seq: &[S], target: &str) -> usize {
    if target.is_empty() {
        return seq.len() + 1;
    }

    let mut n = 0;
    let mut rest = seq;
    while let Some(i) = index_of(rest, target) {
        n += 1;
        rest = &rest[i + 1..];
    }
    n
}

/// Splits `seq` at every element equal to `sep`, dropping the separators.
///
/// The result always has `count(seq, sep) + 1` groups for a non-empty `sep`;
/// leading, trailing and adjacent separators produce empty groups.
pub fn split_on<S>(seq: &[S], sep: &str) -> Vec<Vec<S>>
where
    S: AsRef<str> + Clone,
{
    split_on_by(seq, |line| line.as_ref() == sep)
}

/// Splits `seq` at every element for which `is_sep` returns true.
///
/// Each separator consumes exactly one element and is not retained in either
/// neighbouring group. Elements after the last separator form the final group,
/// which may be empty.
pub fn split_on_by<T, F>(seq: &[T], mut is_sep: F) -> Vec<Vec<T>>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut groups = Vec::new();
    let mut current = Vec::new();

    for item in seq {
        if is_sep(item) {
            groups.push(std::mem::take(&mut current));
        } else {
            current.push(item.clone());
        }
    }
    groups.push(current);

    groups
}

/// Drops empty groups from the front, then from the back.
///
/// Interior empty groups are left untouched. Input made only of empty groups
/// trims down to an empty outer vector.
pub fn trim_empty_ends<T>(mut groups: Vec<Vec<T>>) -> Vec<Vec<T>> {
    let leading = groups.iter().take_while(|g| g.is_empty()).count();
    groups.drain(..leading);

    while groups.last().is_some_and(|g| g.is_empty()) {
        groups.pop();
    }

    groups
}

/// Concatenates every group, in order, into one sequence.
pub fn flatten<T>(groups: Vec<Vec<T>>) -> Vec<T> {
    groups.into_iter().flatten().collect()
}
