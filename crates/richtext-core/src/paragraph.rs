//! Paragraphs and the aggregate text view.
//!
//! A paragraph owns an ordered sequence of runs. Search operates on the
//! paragraph's *aggregate* text (the concatenation of its run texts); the
//! cumulative length table built here is what the offset mapper uses to
//! translate aggregate character offsets back into run-relative offsets.
//! Neither the aggregate text nor the table is cached: callers may mutate
//! runs between calls, so both are recomputed on demand.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::Error;
use crate::format::{Alignment, ParagraphFormat, RunFormat};
use crate::run::Run;

static NEXT_PARAGRAPH_ID: AtomicU64 = AtomicU64::new(1);

/// An opaque identity handle for a paragraph.
///
/// Equality is identity: two structurally identical paragraphs have
/// different ids. Match records carry this handle so that operations can
/// verify they are applied to the paragraph that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParagraphId(u64);

impl ParagraphId {
    fn next() -> Self {
        Self(NEXT_PARAGRAPH_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// An ordered sequence of runs forming one block of text.
#[derive(Debug)]
pub struct Paragraph {
    id: ParagraphId,
    /// The runs of this paragraph, in document order.
    pub runs: Vec<Run>,
    /// Paragraph alignment.
    pub alignment: Option<Alignment>,
    /// Line spacing multiplier.
    pub line_spacing: Option<f32>,
    /// Spacing before the paragraph, in points.
    pub space_before: Option<f32>,
    /// Spacing after the paragraph, in points.
    pub space_after: Option<f32>,
}

impl Paragraph {
    /// Creates an empty paragraph with no runs.
    pub fn new() -> Self {
        Self {
            id: ParagraphId::next(),
            runs: Vec::new(),
            alignment: None,
            line_spacing: None,
            space_before: None,
            space_after: None,
        }
    }

    /// Creates a paragraph containing a single unstyled run with `text`.
    ///
    /// An empty `text` produces a paragraph with no runs.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut paragraph = Self::new();
        let text = text.into();
        if !text.is_empty() {
            paragraph.runs.push(Run::new(text));
        }
        paragraph
    }

    /// Returns this paragraph's identity handle.
    pub fn id(&self) -> ParagraphId {
        self.id
    }

    /// Returns the aggregate text: the concatenation of all run texts.
    pub fn text(&self) -> String {
        let mut out = String::with_capacity(self.runs.iter().map(|r| r.text.len()).sum());
        for run in &self.runs {
            out.push_str(&run.text);
        }
        out
    }

    /// Returns the length of the aggregate text in characters.
    pub fn char_len(&self) -> usize {
        self.runs.iter().map(Run::char_len).sum()
    }

    /// Returns the cumulative run length table.
    ///
    /// Entry `i` is the total character count of runs `0..=i`, so the table
    /// is sorted ascending and suitable for binary search. One entry per
    /// run; an empty paragraph yields an empty table.
    pub fn cumulative_lengths(&self) -> Vec<usize> {
        let mut total = 0;
        self.runs
            .iter()
            .map(|run| {
                total += run.char_len();
                total
            })
            .collect()
    }

    /// Appends a run to this paragraph.
    pub fn push_run(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Appends a new unstyled run with `text` and returns it.
    pub fn add_run(&mut self, text: impl Into<String>) -> &mut Run {
        self.runs.push(Run::new(text));
        self.runs.last_mut().unwrap()
    }

    /// Appends one styled run per `(text, format)` pair, in order.
    ///
    /// Fails with [`Error::LengthMismatch`] when the two slices differ in
    /// length; no run is appended in that case.
    pub fn add_styled_runs(&mut self, texts: &[&str], formats: &[RunFormat]) -> Result<(), Error> {
        if texts.len() != formats.len() {
            return Err(Error::LengthMismatch {
                texts: texts.len(),
                formats: formats.len(),
            });
        }

        for (text, format) in texts.iter().zip(formats) {
            self.runs.push(Run::with_format(*text, format));
        }
        Ok(())
    }

    /// Applies `format` to this paragraph.
    ///
    /// Layout attributes (line spacing, spacing before/after, alignment) are
    /// applied directly to the paragraph when set. The character subset
    /// (bold, italic, font size, font color) is applied uniformly to every
    /// run currently in the paragraph.
    pub fn format(&mut self, format: &ParagraphFormat) {
        if let Some(line_spacing) = format.line_spacing {
            self.line_spacing = Some(line_spacing);
        }
        if let Some(space_before) = format.space_before {
            self.space_before = Some(space_before);
        }
        if let Some(space_after) = format.space_after {
            self.space_after = Some(space_after);
        }
        if let Some(alignment) = format.alignment {
            self.alignment = Some(alignment);
        }

        let run_format = format.run_format();
        for run in &mut self.runs {
            run.format(&run_format);
        }
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}
