//! Crate-wide error type.
//!
//! Every failure reported here is a caller bug (bad index, mismatched
//! argument lengths, cross-paragraph comparison) rather than a transient
//! condition; there is nothing to retry. "Needle not found" is never an
//! error — lookups return empty collections instead.

/// Errors raised by locate, splice, and formatting operations.
#[derive(Debug)]
pub enum Error {
    /// A locate or replace operation was given an empty needle.
    EmptyNeedle,
    /// Two match records from different paragraphs were compared, or a
    /// splice was applied to a paragraph that does not own the match.
    ParagraphMismatch,
    /// A paragraph insertion index exceeds the valid range.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of paragraphs currently in the collection.
        len: usize,
    },
    /// The styled-run builder received text and format slices of unequal
    /// length.
    LengthMismatch {
        /// Number of text entries.
        texts: usize,
        /// Number of format entries.
        formats: usize,
    },
    /// The escaped needle failed to compile as a search pattern. Only
    /// reachable for needles that exceed the compiled-pattern size limit.
    BadNeedle(regex::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyNeedle => {
                write!(f, "needle must not be empty")
            }
            Error::ParagraphMismatch => {
                write!(f, "matches belong to different paragraphs")
            }
            Error::IndexOutOfRange { index, len } => {
                write!(f, "index {} is out of range (len {})", index, len)
            }
            Error::LengthMismatch { texts, formats } => {
                write!(
                    f,
                    "expected one format per text: {} texts, {} formats",
                    texts, formats
                )
            }
            Error::BadNeedle(err) => {
                write!(f, "needle could not be compiled: {}", err)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::BadNeedle(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(Error::EmptyNeedle.to_string(), "needle must not be empty");
        assert_eq!(
            Error::IndexOutOfRange { index: 7, len: 3 }.to_string(),
            "index 7 is out of range (len 3)"
        );
        assert_eq!(
            Error::LengthMismatch {
                texts: 2,
                formats: 3
            }
            .to_string(),
            "expected one format per text: 2 texts, 3 formats"
        );
    }
}
