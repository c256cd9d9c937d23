//! The run splicer and the batch replace driver.
//!
//! A splice rewrites only the runs a match touches: the start run keeps its
//! text before the match (plus the replacement), interior runs are cleared,
//! and the end run keeps its text after the match. Styles are never
//! altered — the replacement inherits the start run's formatting.
//!
//! Batches are applied **rightmost-first**: a splice only mutates runs at or
//! after its own start run, so applying matches in descending
//! `(start_run, offset_in_start_run)` order keeps every not-yet-applied
//! match's indices and offsets valid. Left-to-right application would
//! invalidate later offsets whenever a replacement changes text length.

use crate::error::Error;
use crate::matching::{self, RunMatch};
use crate::paragraph::Paragraph;

/// Byte position of the `char_offset`-th character, or the text's end.
fn byte_at(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}

/// Replaces the span covered by `m` with `replacement`.
///
/// After the splice, the paragraph's aggregate text equals the pre-splice
/// aggregate text with the matched span replaced; runs outside the match
/// are untouched. Fails with [`Error::ParagraphMismatch`] when `m` belongs
/// to a different paragraph, or [`Error::IndexOutOfRange`] when the match
/// is stale and its run indices no longer exist.
pub fn splice(paragraph: &mut Paragraph, m: &RunMatch, replacement: &str) -> Result<(), Error> {
    if m.paragraph != paragraph.id() {
        return Err(Error::ParagraphMismatch);
    }

    let (start_run, end_run) = m.run_span;
    if end_run >= paragraph.runs.len() {
        return Err(Error::IndexOutOfRange {
            index: end_run,
            len: paragraph.runs.len(),
        });
    }

    let start_text = &paragraph.runs[start_run].text;
    let prefix = start_text[..byte_at(start_text, m.char_span.0)].to_string();
    let end_text = &paragraph.runs[end_run].text;
    let suffix = end_text[byte_at(end_text, m.char_span.1)..].to_string();

    if start_run == end_run {
        let mut text = prefix;
        text.push_str(replacement);
        text.push_str(&suffix);
        paragraph.runs[start_run].text = text;
    } else {
        let mut text = prefix;
        text.push_str(replacement);
        paragraph.runs[start_run].text = text;
        // Interior runs are emptied, not removed: removal would shift the
        // run indices of matches not yet applied in the same batch.
        for run in &mut paragraph.runs[start_run + 1..end_run] {
            run.text.clear();
        }
        paragraph.runs[end_run].text = suffix;
    }

    Ok(())
}

/// Applies `replacement` to every match, rightmost-first.
///
/// This is the reusable sort-then-apply routine for a batch of
/// non-overlapping edits against one shifting run sequence. All matches
/// must belong to `paragraph`; the whole batch is rejected before any
/// mutation otherwise. Returns the number of splices applied.
pub fn splice_all(
    paragraph: &mut Paragraph,
    mut matches: Vec<RunMatch>,
    replacement: &str,
) -> Result<usize, Error> {
    if matches.iter().any(|m| m.paragraph != paragraph.id()) {
        return Err(Error::ParagraphMismatch);
    }

    matches.sort_by(|a, b| {
        (b.run_span.0, b.char_span.0).cmp(&(a.run_span.0, a.char_span.0))
    });

    for m in &matches {
        splice(paragraph, m, replacement)?;
    }
    Ok(matches.len())
}

/// Replaces every occurrence of `needle` in the paragraph with
/// `replacement`, returning the number of replacements.
pub fn replace_all(
    paragraph: &mut Paragraph,
    needle: &str,
    replacement: &str,
) -> Result<usize, Error> {
    let matches = matching::find_in_runs(paragraph, needle)?;
    splice_all(paragraph, matches, replacement)
}
