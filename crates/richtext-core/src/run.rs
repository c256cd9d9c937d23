//! Text runs.
//!
//! A run is the smallest unit of homogeneously styled text inside a
//! paragraph. Its attributes are tri-state: `None` means the attribute is
//! inherited from the surrounding style machinery, `Some(_)` is an explicit
//! override on this run.

use unicode_segmentation::UnicodeSegmentation;

use crate::format::{Rgb, RunFormat};

/// A contiguous span of text with consistent formatting.
///
/// Splicing may leave a run's text empty; the run object persists and simply
/// contributes nothing to the paragraph's aggregate text.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    /// The text content of this run.
    pub text: String,
    /// Bold override.
    pub bold: Option<bool>,
    /// Italic override.
    pub italic: Option<bool>,
    /// Underline override.
    pub underline: Option<bool>,
    /// Strikethrough override.
    pub strike: Option<bool>,
    /// Superscript override.
    pub superscript: Option<bool>,
    /// Font size in points.
    pub font_size: Option<f32>,
    /// Font color.
    pub font_color: Option<Rgb>,
}

impl Run {
    /// Creates a run with text content and no style overrides.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: None,
            italic: None,
            underline: None,
            strike: None,
            superscript: None,
            font_size: None,
            font_color: None,
        }
    }

    /// Creates a run with text content and an initial format applied.
    pub fn with_format(text: impl Into<String>, format: &RunFormat) -> Self {
        let mut run = Self::new(text);
        run.format(format);
        run
    }

    /// Applies `format` to this run.
    ///
    /// Only options that are set are applied; `None` options leave the
    /// corresponding attribute unchanged. `Some(false)` explicitly clears a
    /// boolean attribute.
    pub fn format(&mut self, format: &RunFormat) {
        if let Some(bold) = format.bold {
            self.bold = Some(bold);
        }
        if let Some(italic) = format.italic {
            self.italic = Some(italic);
        }
        if let Some(underline) = format.underline {
            self.underline = Some(underline);
        }
        if let Some(strike) = format.strike {
            self.strike = Some(strike);
        }
        if let Some(superscript) = format.superscript {
            self.superscript = Some(superscript);
        }
        if let Some(font_size) = format.font_size {
            self.font_size = Some(font_size);
        }
        if let Some(font_color) = format.font_color {
            self.font_color = Some(font_color);
        }
    }

    /// Returns the length of the text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns `true` if this run's text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the number of grapheme clusters in this run.
    pub fn grapheme_count(&self) -> usize {
        self.text.graphemes(true).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_applies_only_set_options() {
        let mut run = Run::new("Hello, world!");
        run.format(
            &RunFormat::new()
                .bold(true)
                .italic(true)
                .underline(true)
                .strike(true)
                .superscript(true)
                .font_color(Rgb(1, 0, 0)),
        );

        assert_eq!(run.bold, Some(true));
        assert_eq!(run.italic, Some(true));
        assert_eq!(run.underline, Some(true));
        assert_eq!(run.strike, Some(true));
        assert_eq!(run.superscript, Some(true));
        assert_eq!(run.font_color, Some(Rgb(1, 0, 0)));
        // Not provided, so untouched.
        assert_eq!(run.font_size, None);
    }

    #[test]
    fn test_empty_format_is_noop() {
        let mut run = Run::new("text");
        run.bold = Some(true);
        run.font_size = Some(10.0);

        run.format(&RunFormat::new());

        assert_eq!(run.bold, Some(true));
        assert_eq!(run.font_size, Some(10.0));
    }

    #[test]
    fn test_explicit_false_clears_attribute() {
        let mut run = Run::new("text");
        run.bold = Some(true);

        run.format(&RunFormat::new().bold(false));

        assert_eq!(run.bold, Some(false));
    }

    #[test]
    fn test_char_len_is_character_based() {
        assert_eq!(Run::new("héllo").char_len(), 5);
        assert_eq!(Run::new("你好").char_len(), 2);
        assert_eq!(Run::new("").char_len(), 0);
    }

    #[test]
    fn test_grapheme_count() {
        // Family emoji: one grapheme cluster, many chars.
        let run = Run::new("a👨‍👩‍👧b");
        assert_eq!(run.grapheme_count(), 3);
        assert!(run.char_len() > 3);
    }
}
