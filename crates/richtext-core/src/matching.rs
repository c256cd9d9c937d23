//! Match records and the offset mapper.
//!
//! The locator reports occurrences against a paragraph's aggregate text.
//! This module translates those aggregate character spans into run indices
//! plus intra-run character offsets, using binary search over the
//! paragraph's cumulative length table.
//!
//! Match records are transient query results: they are recomputed from the
//! live paragraph state on every call and become stale the instant any run
//! in the paragraph is edited, including by another match's replace.

use std::cmp::Ordering;

use crate::error::Error;
use crate::paragraph::{Paragraph, ParagraphId};
use crate::search::{self, Occurrence};

/// The occurrences of a needle in one paragraph's aggregate text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphMatch {
    /// Identity of the paragraph containing the occurrences.
    pub paragraph: ParagraphId,
    /// Matching spans, ascending and non-overlapping. May be empty.
    pub occurrences: Vec<Occurrence>,
}

/// An occurrence translated into run indices plus intra-run offsets.
///
/// Invariants: `run_span.0 <= run_span.1`; `char_span.0` is a valid char
/// offset into the start run and `char_span.1` into the end run.
///
/// Run matches are totally ordered by `(run_span.0, char_span.0)` within
/// one paragraph only; comparing matches from different paragraphs yields
/// `None` (or an error from [`RunMatch::try_cmp`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunMatch {
    /// Identity of the owning paragraph.
    pub paragraph: ParagraphId,
    /// `(start_run_index, end_run_index)`, both inclusive.
    pub run_span: (usize, usize),
    /// `(offset_in_start_run, offset_in_end_run)` in characters.
    pub char_span: (usize, usize),
}

impl RunMatch {
    /// Compares two matches by document position.
    ///
    /// Fails with [`Error::ParagraphMismatch`] when the matches belong to
    /// different paragraphs; position ordering is only meaningful within
    /// one paragraph.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, Error> {
        self.partial_cmp(other).ok_or(Error::ParagraphMismatch)
    }

    fn sort_key(&self) -> (usize, usize, usize, usize) {
        (
            self.run_span.0,
            self.char_span.0,
            self.run_span.1,
            self.char_span.1,
        )
    }
}

impl PartialOrd for RunMatch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.paragraph != other.paragraph {
            return None;
        }
        Some(self.sort_key().cmp(&other.sort_key()))
    }
}

/// Finds all occurrences of `needle` in the paragraph's aggregate text.
pub fn find_in_paragraph(paragraph: &Paragraph, needle: &str) -> Result<ParagraphMatch, Error> {
    Ok(ParagraphMatch {
        paragraph: paragraph.id(),
        occurrences: search::find_all(&paragraph.text(), needle)?,
    })
}

/// Finds all occurrences of `needle` and maps each to run-relative offsets.
pub fn find_in_runs(paragraph: &Paragraph, needle: &str) -> Result<Vec<RunMatch>, Error> {
    let found = find_in_paragraph(paragraph, needle)?;
    let cumulative = paragraph.cumulative_lengths();

    Ok(found
        .occurrences
        .into_iter()
        .map(|occurrence| map_occurrence(paragraph.id(), &cumulative, occurrence))
        .collect())
}

/// Maps an aggregate-text occurrence to run indices and intra-run offsets.
///
/// `cumulative` is the paragraph's cumulative length table (entry `i` =
/// chars in runs `0..=i`). Both lookups are binary searches, O(log R):
///
/// - the start run is the first whose cumulative length exceeds
///   `occurrence.start`;
/// - the end run is the first at or after the start run whose cumulative
///   length reaches `occurrence.end`. A match ending exactly on a run
///   boundary therefore resolves to the earlier run (end-exclusive), never
///   to an empty leading slice of the next run.
pub fn map_occurrence(
    paragraph: ParagraphId,
    cumulative: &[usize],
    occurrence: Occurrence,
) -> RunMatch {
    let start_run = cumulative.partition_point(|&c| c <= occurrence.start);
    let end_run = start_run + cumulative[start_run..].partition_point(|&c| c < occurrence.end);

    let start_offset = if start_run > 0 {
        occurrence.start - cumulative[start_run - 1]
    } else {
        occurrence.start
    };
    let end_offset = if end_run > 0 {
        occurrence.end - cumulative[end_run - 1]
    } else {
        occurrence.end
    };

    RunMatch {
        paragraph,
        run_span: (start_run, end_run),
        char_span: (start_offset, end_offset),
    }
}
