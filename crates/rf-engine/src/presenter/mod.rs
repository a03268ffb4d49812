//! The presentation layer contract.
//!
//! Scenes never touch the terminal directly. They describe what to show
//! through a [`Presenter`], which a frontend implements. Choice resolution
//! and text validation are built on the [`Presenter::select`] and
//! [`Presenter::read_text`] primitives.

mod scripted;

use std::time::Duration;

use crate::error::EngineResult;

pub use scripted::{Event, ScriptedPresenter};

/// Terminal colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Black.
    Black,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Blue.
    Blue,
    /// Magenta.
    Magenta,
    /// Cyan.
    Cyan,
    /// White.
    White,
}

/// Text style applied to a passage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    /// Foreground colour.
    pub fg: Option<Color>,
    /// Background colour.
    pub bg: Option<Color>,
    /// Bold weight.
    pub bold: bool,
    /// Italic slant.
    pub italic: bool,
}

impl Style {
    /// The unstyled default.
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: false,
            italic: false,
        }
    }

    /// Set the foreground colour.
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background colour.
    pub const fn on(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Make the text bold.
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Make the text italic.
    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Whether this style changes nothing.
    pub fn is_plain(&self) -> bool {
        *self == Self::new()
    }

    /// Layer `other` on top of this style.
    pub fn merge(self, other: Style) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            bold: self.bold || other.bold,
            italic: self.italic || other.italic,
        }
    }
}

/// Horizontal alignment of a passage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    /// Flush left.
    #[default]
    Left,
    /// Centred.
    Center,
    /// Flush right.
    Right,
    /// Stretched to fill the line, except the last one.
    Full,
}

/// Options for [`Presenter::display`] and [`Presenter::display_items`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Prepended to the first line.
    pub prefix: String,
    /// Prepended to every following line.
    pub indent: String,
    /// Style of the passage.
    pub style: Style,
    /// Alignment of the passage.
    pub justify: Justify,
    /// Prefix each item with a bullet.
    pub bulleted: bool,
    /// Prefix each item with its 1-based number.
    pub numbered: bool,
    /// Draw a box around the passage.
    pub boxed: bool,
}

impl DisplayOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first-line prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the continuation indent.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Set the style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the alignment.
    pub fn with_justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    /// Render items as a bulleted list.
    pub fn bulleted(mut self) -> Self {
        self.bulleted = true;
        self
    }

    /// Render items as a numbered list.
    pub fn numbered(mut self) -> Self {
        self.numbered = true;
        self
    }

    /// Draw a box around the passage.
    pub fn boxed(mut self) -> Self {
        self.boxed = true;
        self
    }

    /// Prefix and indent for the item at `position` (0-based).
    ///
    /// `numbered` wins over `bulleted`, which wins over explicit values.
    pub fn margins(&self, position: usize) -> (String, String) {
        if self.numbered {
            (format!("{:>2} ", position + 1), "   ".to_string())
        } else if self.bulleted {
            (" • ".to_string(), "   ".to_string())
        } else {
            (self.prefix.clone(), self.indent.clone())
        }
    }
}

/// Options for [`Presenter::display_formatted`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormattedOptions {
    /// Base style of the passage.
    pub style: Style,
    /// Draw a box around the passage.
    pub boxed: bool,
}

impl FormattedOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Draw a box around the passage.
    pub fn boxed(mut self) -> Self {
        self.boxed = true;
        self
    }
}

/// Options for [`Presenter::pause`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PauseOptions {
    /// Style of the message.
    pub style: Style,
    /// Alignment of the message.
    pub justify: Justify,
}

/// Animation shown while waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spinner {
    /// Braille dots.
    Dots,
    /// Rotating line.
    Line,
    /// Rotating arc.
    Arc,
    /// Clock faces.
    Clock,
    /// Moon phases.
    Moon,
    /// Rotating globe.
    Earth,
    /// Growing dots.
    SimpleDots,
}

impl Spinner {
    /// Every kind, in declaration order.
    pub const ALL: [Spinner; 7] = [
        Self::Dots,
        Self::Line,
        Self::Arc,
        Self::Clock,
        Self::Moon,
        Self::Earth,
        Self::SimpleDots,
    ];
}

/// A frontend capable of showing a story to a player.
///
/// Every blocking call returns [`crate::EngineError::UserInterrupt`] when the
/// player interrupts it.
pub trait Presenter {
    /// Show a passage of plain text, wrapped to the line width.
    fn display(&mut self, text: &str, options: &DisplayOptions) -> EngineResult<()>;

    /// Show a list of passages, one per item.
    fn display_items(&mut self, items: &[&str], options: &DisplayOptions) -> EngineResult<()>;

    /// Show a passage of Markdown.
    fn display_formatted(
        &mut self,
        markdown: &str,
        options: &FormattedOptions,
    ) -> EngineResult<()>;

    /// Let the player pick one label and return its position in `labels`.
    fn select(&mut self, labels: &[&str]) -> EngineResult<usize>;

    /// Read one line of free text.
    fn read_text(&mut self, prompt: &str) -> EngineResult<String>;

    /// Clear the screen.
    fn clear(&mut self) -> EngineResult<()>;

    /// Show a message and wait for the player to continue.
    fn pause(&mut self, message: &str, options: &PauseOptions) -> EngineResult<()>;

    /// Wait for a fixed time, optionally with a message and animation.
    fn spin(
        &mut self,
        duration: Duration,
        message: &str,
        spinner: Option<Spinner>,
    ) -> EngineResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_builder() {
        let style = Style::new().bold().fg(Color::White).on(Color::Red);
        assert_eq!(style.fg, Some(Color::White));
        assert_eq!(style.bg, Some(Color::Red));
        assert!(style.bold);
        assert!(!style.italic);
        assert!(!style.is_plain());
        assert!(Style::default().is_plain());
    }

    #[test]
    fn style_merge_layers_on_top() {
        let base = Style::new().fg(Color::Green).italic();
        let merged = base.merge(Style::new().bold().fg(Color::Red));
        assert_eq!(merged.fg, Some(Color::Red));
        assert!(merged.bold);
        assert!(merged.italic);

        let kept = base.merge(Style::new());
        assert_eq!(kept.fg, Some(Color::Green));
    }

    #[test]
    fn margins_for_lists() {
        let plain = DisplayOptions::new().with_prefix(" - ").with_indent("   ");
        assert_eq!(plain.margins(0), (" - ".to_string(), "   ".to_string()));

        let bulleted = DisplayOptions::new().bulleted();
        assert_eq!(bulleted.margins(3).0, " • ");

        let numbered = DisplayOptions::new().numbered();
        assert_eq!(numbered.margins(0).0, " 1 ");
        assert_eq!(numbered.margins(11).0, "12 ");
        assert_eq!(numbered.margins(11).1, "   ");
    }
}
