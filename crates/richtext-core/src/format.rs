//! Formatting option model.
//!
//! Every option is tri-state: `None` leaves the corresponding attribute
//! unchanged, `Some(true)`/`Some(false)` set it explicitly. This matters for
//! booleans — `Some(false)` turns an attribute off, it is not the same as
//! "not provided".

/// An RGB color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Formats the color as an uppercase `#RRGGBB` hex code.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Flush left.
    Left,
    /// Centered.
    Center,
    /// Flush right.
    Right,
    /// Justified to both margins.
    Justified,
}

/// Character-level formatting options for a single run.
///
/// Options left as `None` do not touch the run's current attribute.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RunFormat {
    /// Bold on/off.
    pub bold: Option<bool>,
    /// Italic on/off.
    pub italic: Option<bool>,
    /// Underline on/off.
    pub underline: Option<bool>,
    /// Strikethrough on/off.
    pub strike: Option<bool>,
    /// Superscript on/off.
    pub superscript: Option<bool>,
    /// Font size in points.
    pub font_size: Option<f32>,
    /// Font color.
    pub font_color: Option<Rgb>,
}

impl RunFormat {
    /// Creates a format with no options set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bold option.
    pub fn bold(mut self, value: bool) -> Self {
        self.bold = Some(value);
        self
    }

    /// Sets the italic option.
    pub fn italic(mut self, value: bool) -> Self {
        self.italic = Some(value);
        self
    }

    /// Sets the underline option.
    pub fn underline(mut self, value: bool) -> Self {
        self.underline = Some(value);
        self
    }

    /// Sets the strikethrough option.
    pub fn strike(mut self, value: bool) -> Self {
        self.strike = Some(value);
        self
    }

    /// Sets the superscript option.
    pub fn superscript(mut self, value: bool) -> Self {
        self.superscript = Some(value);
        self
    }

    /// Sets the font size in points.
    pub fn font_size(mut self, points: f32) -> Self {
        self.font_size = Some(points);
        self
    }

    /// Sets the font color.
    pub fn font_color(mut self, color: Rgb) -> Self {
        self.font_color = Some(color);
        self
    }

    /// Returns `true` if no option is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Paragraph-level formatting options.
///
/// Layout attributes apply to the paragraph itself; the character subset
/// (`bold`, `italic`, `font_size`, `font_color`) is applied uniformly to
/// every run currently in the paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParagraphFormat {
    /// Line spacing multiplier.
    pub line_spacing: Option<f32>,
    /// Spacing before the paragraph, in points.
    pub space_before: Option<f32>,
    /// Spacing after the paragraph, in points.
    pub space_after: Option<f32>,
    /// Paragraph alignment.
    pub alignment: Option<Alignment>,
    /// Bold on/off, applied to every run.
    pub bold: Option<bool>,
    /// Italic on/off, applied to every run.
    pub italic: Option<bool>,
    /// Font size in points, applied to every run.
    pub font_size: Option<f32>,
    /// Font color, applied to every run.
    pub font_color: Option<Rgb>,
}

impl ParagraphFormat {
    /// Creates a format with no options set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the line spacing multiplier.
    pub fn line_spacing(mut self, value: f32) -> Self {
        self.line_spacing = Some(value);
        self
    }

    /// Sets the spacing before the paragraph.
    pub fn space_before(mut self, points: f32) -> Self {
        self.space_before = Some(points);
        self
    }

    /// Sets the spacing after the paragraph.
    pub fn space_after(mut self, points: f32) -> Self {
        self.space_after = Some(points);
        self
    }

    /// Sets the alignment.
    pub fn alignment(mut self, value: Alignment) -> Self {
        self.alignment = Some(value);
        self
    }

    /// Sets the bold option for every run.
    pub fn bold(mut self, value: bool) -> Self {
        self.bold = Some(value);
        self
    }

    /// Sets the italic option for every run.
    pub fn italic(mut self, value: bool) -> Self {
        self.italic = Some(value);
        self
    }

    /// Sets the font size for every run.
    pub fn font_size(mut self, points: f32) -> Self {
        self.font_size = Some(points);
        self
    }

    /// Sets the font color for every run.
    pub fn font_color(mut self, color: Rgb) -> Self {
        self.font_color = Some(color);
        self
    }

    /// Projects the character subset into a [`RunFormat`].
    pub fn run_format(&self) -> RunFormat {
        RunFormat {
            bold: self.bold,
            italic: self.italic,
            font_size: self.font_size,
            font_color: self.font_color,
            ..RunFormat::default()
        }
    }
}

/// Formatting options for a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CellFormat {
    /// Paragraph formatting applied to every paragraph in the cell.
    pub paragraph: Option<ParagraphFormat>,
    /// Background shading color.
    pub background: Option<Rgb>,
}

impl CellFormat {
    /// Creates a format with no options set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the paragraph formatting.
    pub fn paragraph(mut self, format: ParagraphFormat) -> Self {
        self.paragraph = Some(format);
        self
    }

    /// Sets the background shading color.
    pub fn background(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(Rgb(255, 0, 0).to_hex(), "#FF0000");
        assert_eq!(Rgb(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Rgb(18, 52, 86).to_hex(), "#123456");
    }

    #[test]
    fn test_run_format_builder() {
        let format = RunFormat::new().bold(true).strike(false).font_size(12.0);

        assert_eq!(format.bold, Some(true));
        assert_eq!(format.strike, Some(false));
        assert_eq!(format.font_size, Some(12.0));
        assert_eq!(format.italic, None);
        assert!(!format.is_empty());
        assert!(RunFormat::new().is_empty());
    }

    #[test]
    fn test_paragraph_format_run_subset() {
        let format = ParagraphFormat::new()
            .alignment(Alignment::Center)
            .line_spacing(2.0)
            .bold(true)
            .font_color(Rgb(0, 255, 0));

        let run_format = format.run_format();
        assert_eq!(run_format.bold, Some(true));
        assert_eq!(run_format.font_color, Some(Rgb(0, 255, 0)));
        // Layout attributes and the non-subset character options never
        // leak into the run projection.
        assert_eq!(run_format.underline, None);
        assert_eq!(run_format.strike, None);
        assert_eq!(run_format.superscript, None);
    }
}
