//! Table cells.
//!
//! A cell is a thin consumer of the paragraph formatter: cell formatting
//! dispatches the paragraph options to every paragraph in the cell and sets
//! the cell's background shading. Nothing here adds requirements on the
//! core engine.

use crate::format::{CellFormat, Rgb};
use crate::paragraph::Paragraph;

/// A table cell: paragraphs plus an optional background shading.
#[derive(Debug, Default)]
pub struct Cell {
    /// The paragraphs inside this cell.
    pub paragraphs: Vec<Paragraph>,
    /// Background shading color.
    pub shading: Option<Rgb>,
}

impl Cell {
    /// Creates an empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cell containing one paragraph with `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            paragraphs: vec![Paragraph::with_text(text)],
            shading: None,
        }
    }

    /// Applies `format` to this cell.
    ///
    /// The paragraph options, when set, are applied to every paragraph in
    /// the cell; the background color, when set, becomes the cell shading.
    pub fn format(&mut self, format: &CellFormat) {
        if let Some(paragraph_format) = &format.paragraph {
            for paragraph in &mut self.paragraphs {
                paragraph.format(paragraph_format);
            }
        }

        if let Some(background) = format.background {
            self.shading = Some(background);
        }
    }
}
