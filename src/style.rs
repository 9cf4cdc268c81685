//! Style types handed to the renderer
//!
//! A resolved token becomes a `Span` naming an attribute id; the
//! highlighting configuration turns that id into a `Style`.

use crossterm::style::{Attribute, ContentStyle};

use crate::resolver::AttributeId;
use crate::token::Category;

/// Terminal colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    fn to_crossterm(self) -> Option<crossterm::style::Color> {
        use crossterm::style::Color as C;
        let color = match self {
            Color::Default => return None,
            Color::Black => C::Black,
            Color::Red => C::DarkRed,
            Color::Green => C::DarkGreen,
            Color::Yellow => C::DarkYellow,
            Color::Blue => C::DarkBlue,
            Color::Magenta => C::DarkMagenta,
            Color::Cyan => C::DarkCyan,
            Color::White => C::Grey,
            Color::BrightBlack => C::DarkGrey,
            Color::BrightRed => C::Red,
            Color::BrightGreen => C::Green,
            Color::BrightYellow => C::Yellow,
            Color::BrightBlue => C::Blue,
            Color::BrightMagenta => C::Magenta,
            Color::BrightCyan => C::Cyan,
            Color::BrightWhite => C::White,
        };
        Some(color)
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Underlined text
    pub underline: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Builder: set background color
    pub fn with_bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Builder: set underline
    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl From<Style> for ContentStyle {
    fn from(style: Style) -> Self {
        let mut content = ContentStyle::new();
        content.foreground_color = style.fg.to_crossterm();
        content.background_color = style.bg.to_crossterm();
        if style.bold {
            content.attributes.set(Attribute::Bold);
        }
        if style.italic {
            content.attributes.set(Attribute::Italic);
        }
        if style.underline {
            content.attributes.set(Attribute::Underlined);
        }
        content
    }
}

/// A highlighted range of source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Byte offset where this span starts (inclusive)
    pub start: usize,
    /// Byte offset where this span ends (exclusive)
    pub end: usize,
    /// Category the token was classified as
    pub category: Category,
    /// Attribute the renderer should apply
    pub attribute: AttributeId,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize, category: Category, attribute: AttributeId) -> Self {
        Self {
            start,
            end,
            category,
            attribute,
        }
    }

    /// Check if this span contains a byte position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Get the length of this span in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if span is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_default() {
        let style = Style::default();
        assert!(style.is_default());
        assert_eq!(style.fg, Color::Default);
        assert!(!style.bold);
    }

    #[test]
    fn test_style_builders() {
        let style = Style::fg(Color::Red).with_bold().with_italic().with_bg(Color::Blue);
        assert_eq!(style.fg, Color::Red);
        assert_eq!(style.bg, Color::Blue);
        assert!(style.bold);
        assert!(style.italic);
        assert!(!style.underline);
        assert!(!style.is_default());
    }

    #[test]
    fn test_content_style_conversion() {
        let content: ContentStyle = Style::fg(Color::BrightMagenta).with_bold().into();
        assert_eq!(content.foreground_color, Some(crossterm::style::Color::Magenta));
        assert_eq!(content.background_color, None);
        assert!(content.attributes.has(Attribute::Bold));
        assert!(!content.attributes.has(Attribute::Italic));

        let underlined: ContentStyle = Style::fg(Color::Yellow).with_underline().into();
        assert_eq!(underlined.foreground_color, Some(crossterm::style::Color::DarkYellow));
        assert!(underlined.attributes.has(Attribute::Underlined));
        assert!(!underlined.attributes.has(Attribute::Bold));

        let plain: ContentStyle = Style::default().into();
        assert_eq!(plain.foreground_color, None);
        assert!(plain.attributes.is_empty());
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(5, 10, Category::Default, AttributeId::new("default"));
        assert!(!span.contains(4));
        assert!(span.contains(5));
        assert!(span.contains(9));
        assert!(!span.contains(10));
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
    }
}
