//! Literal substring search.
//!
//! Searches a UTF-8 `&str` and reports matches as **character offsets**
//! (not byte offsets). The needle is always treated as raw text: it is
//! escaped before being compiled into a regex, so metacharacters have no
//! effect. Matches are produced left to right, non-overlapping — scanning
//! resumes at the end of each match, never before.
//!
//! Empty needles are rejected with [`Error::EmptyNeedle`]: an empty needle
//! matches at every position and a caller passing one has a bug upstream.

use regex::Regex;

use crate::error::Error;

/// A match expressed as a half-open character range `[start, end)` in the
/// searched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    /// Inclusive start character offset.
    pub start: usize,
    /// Exclusive end character offset.
    pub end: usize,
}

impl Occurrence {
    /// Returns the length of the match in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the match is empty.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Ascending byte offsets of char boundaries, for byte→char conversion.
struct CharIndex {
    char_to_byte: Vec<usize>,
}

impl CharIndex {
    fn new(text: &str) -> Self {
        let mut char_to_byte: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        char_to_byte.push(text.len());
        Self { char_to_byte }
    }

    fn byte_to_char(&self, byte_offset: usize) -> usize {
        // Regex match boundaries always fall on char boundaries, so the
        // exact offset is present in the table.
        match self.char_to_byte.binary_search(&byte_offset) {
            Ok(idx) => idx,
            Err(idx) => idx,
        }
    }
}

fn compile_needle(needle: &str) -> Result<Regex, Error> {
    if needle.is_empty() {
        return Err(Error::EmptyNeedle);
    }
    Regex::new(&regex::escape(needle)).map_err(Error::BadNeedle)
}

/// Finds all non-overlapping occurrences of `needle` in `text`.
///
/// Occurrences are returned in ascending `start` order. A needle that does
/// not occur yields an empty list; an empty needle is an error.
pub fn find_all(text: &str, needle: &str) -> Result<Vec<Occurrence>, Error> {
    let re = compile_needle(needle)?;
    let index = CharIndex::new(text);

    Ok(re
        .find_iter(text)
        .map(|m| Occurrence {
            start: index.byte_to_char(m.start()),
            end: index.byte_to_char(m.end()),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occ(start: usize, end: usize) -> Occurrence {
        Occurrence { start, end }
    }

    #[test]
    fn test_find_single() {
        let matches = find_all("Hello, world!", "Hello").unwrap();
        assert_eq!(matches, vec![occ(0, 5)]);
    }

    #[test]
    fn test_find_multiple_ascending() {
        let matches = find_all("Hello, world, Hello!", "Hello").unwrap();
        assert_eq!(matches, vec![occ(0, 5), occ(14, 19)]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let matches = find_all("Hello, world!", "absent").unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_empty_needle_is_rejected() {
        assert!(matches!(find_all("text", ""), Err(Error::EmptyNeedle)));
    }

    #[test]
    fn test_needle_is_literal_not_a_pattern() {
        let matches = find_all("cost: $5.00 (net)", "$5.00 (net)").unwrap();
        assert_eq!(matches, vec![occ(6, 17)]);
    }

    #[test]
    fn test_non_overlapping_resumes_at_match_end() {
        // "aaaa" contains "aa" at 0 and 2, not at 1.
        let matches = find_all("aaaa", "aa").unwrap();
        assert_eq!(matches, vec![occ(0, 2), occ(2, 4)]);
    }

    #[test]
    fn test_offsets_are_characters_not_bytes() {
        let matches = find_all("日本語 world 日本語", "world").unwrap();
        assert_eq!(matches, vec![occ(4, 9)]);

        let matches = find_all("日本語 world 日本語", "日本語").unwrap();
        assert_eq!(matches, vec![occ(0, 3), occ(10, 13)]);
    }
}
