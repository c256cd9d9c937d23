//! In-memory document provider.
//!
//! A document owns its body paragraphs plus the header and footer
//! paragraphs. Document-wide find and replace simply fan out over every
//! paragraph; matches never span paragraph boundaries, so each paragraph is
//! processed independently. Persistence is out of scope — this is purely
//! the in-memory paragraph collection the core operates on.

use crate::error::Error;
use crate::matching::{self, ParagraphMatch, RunMatch};
use crate::paragraph::Paragraph;
use crate::replace;

/// A document: body paragraphs plus header and footer paragraphs.
#[derive(Debug, Default)]
pub struct Document {
    /// Body paragraphs, in document order.
    pub body: Vec<Paragraph>,
    /// Header paragraphs.
    pub headers: Vec<Paragraph>,
    /// Footer paragraphs.
    pub footers: Vec<Paragraph>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a body paragraph containing `text` and returns it.
    pub fn add_paragraph(&mut self, text: impl Into<String>) -> &mut Paragraph {
        self.body.push(Paragraph::with_text(text));
        self.body.last_mut().unwrap()
    }

    /// Appends a header paragraph containing `text` and returns it.
    pub fn add_header_paragraph(&mut self, text: impl Into<String>) -> &mut Paragraph {
        self.headers.push(Paragraph::with_text(text));
        self.headers.last_mut().unwrap()
    }

    /// Appends a footer paragraph containing `text` and returns it.
    pub fn add_footer_paragraph(&mut self, text: impl Into<String>) -> &mut Paragraph {
        self.footers.push(Paragraph::with_text(text));
        self.footers.last_mut().unwrap()
    }

    /// Inserts `paragraph` into the body at `index`.
    ///
    /// `index == body.len()` appends; anything larger fails with
    /// [`Error::IndexOutOfRange`].
    pub fn insert_paragraph(&mut self, index: usize, paragraph: Paragraph) -> Result<(), Error> {
        if index > self.body.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.body.len(),
            });
        }
        self.body.insert(index, paragraph);
        Ok(())
    }

    /// Iterates every paragraph in the document: body, then footers, then
    /// headers.
    pub fn all_paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.body
            .iter()
            .chain(self.footers.iter())
            .chain(self.headers.iter())
    }

    fn all_paragraphs_mut(&mut self) -> impl Iterator<Item = &mut Paragraph> {
        self.body
            .iter_mut()
            .chain(self.footers.iter_mut())
            .chain(self.headers.iter_mut())
    }

    /// Finds `needle` in every paragraph's aggregate text.
    ///
    /// One entry per paragraph, in [`Document::all_paragraphs`] order;
    /// paragraphs without a match contribute an entry with no occurrences.
    pub fn find_in_paragraphs(&self, needle: &str) -> Result<Vec<ParagraphMatch>, Error> {
        self.all_paragraphs()
            .map(|paragraph| matching::find_in_paragraph(paragraph, needle))
            .collect()
    }

    /// Finds `needle` in every paragraph and maps each occurrence to
    /// run-relative offsets.
    pub fn find_in_runs(&self, needle: &str) -> Result<Vec<RunMatch>, Error> {
        let mut matches = Vec::new();
        for paragraph in self.all_paragraphs() {
            matches.extend(matching::find_in_runs(paragraph, needle)?);
        }
        Ok(matches)
    }

    /// Replaces every occurrence of `needle` across the whole document,
    /// headers and footers included. Returns the total replacement count.
    pub fn replace(&mut self, needle: &str, replacement: &str) -> Result<usize, Error> {
        let mut count = 0;
        for paragraph in self.all_paragraphs_mut() {
            count += replace::replace_all(paragraph, needle, replacement)?;
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_in_paragraphs_per_paragraph() {
        let mut document = Document::new();
        document.add_paragraph("Hello, world!");
        document.add_paragraph("Hello, world, Hello!");

        let found = document.find_in_paragraphs("Hello").unwrap();

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].occurrences.len(), 1);
        assert_eq!((found[0].occurrences[0].start, found[0].occurrences[0].end), (0, 5));
        assert_eq!(found[1].occurrences.len(), 2);
        assert_eq!((found[1].occurrences[1].start, found[1].occurrences[1].end), (14, 19));
    }

    #[test]
    fn test_find_in_runs_collects_across_paragraphs() {
        let mut document = Document::new();
        document.add_paragraph("Hello, world!");
        document.add_paragraph("Hello, world, Hello!");

        let matches = document.find_in_runs("Hello").unwrap();

        assert_eq!(matches.len(), 3);
        assert_ne!(matches[0].paragraph, matches[1].paragraph);
        assert_eq!(matches[1].paragraph, matches[2].paragraph);
    }

    #[test]
    fn test_replace_touches_headers_and_footers() {
        let mut document = Document::new();
        document.add_paragraph("body old text");
        document.add_header_paragraph("header old text");
        document.add_footer_paragraph("footer old text");

        let count = document.replace("old", "new").unwrap();

        assert_eq!(count, 3);
        assert_eq!(document.body[0].text(), "body new text");
        assert_eq!(document.headers[0].text(), "header new text");
        assert_eq!(document.footers[0].text(), "footer new text");
    }

    #[test]
    fn test_all_paragraphs_order() {
        let mut document = Document::new();
        document.add_paragraph("body");
        document.add_header_paragraph("header");
        document.add_footer_paragraph("footer");

        let texts: Vec<String> = document.all_paragraphs().map(|p| p.text()).collect();
        assert_eq!(texts, vec!["body", "footer", "header"]);
    }

    #[test]
    fn test_insert_paragraph_bounds() {
        let mut document = Document::new();
        document.add_paragraph("first");
        document.add_paragraph("third");

        document
            .insert_paragraph(1, Paragraph::with_text("second"))
            .unwrap();
        assert_eq!(document.body[1].text(), "second");

        // At len: appends.
        document
            .insert_paragraph(3, Paragraph::with_text("fourth"))
            .unwrap();
        assert_eq!(document.body[3].text(), "fourth");

        let result = document.insert_paragraph(9, Paragraph::new());
        assert!(matches!(
            result,
            Err(Error::IndexOutOfRange { index: 9, len: 4 })
        ));
    }

    #[test]
    fn test_replace_returns_total_count() {
        let mut document = Document::new();
        document.add_paragraph("a a a");
        document.add_paragraph("a");

        let count = document.replace("a", "b").unwrap();

        assert_eq!(count, 4);
        assert_eq!(document.body[0].text(), "b b b");
        assert_eq!(document.body[1].text(), "b");
    }
}
