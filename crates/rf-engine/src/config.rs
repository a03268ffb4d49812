//! Configuration for the engine and its presenters.

/// Default upper bound on the line width.
pub const DEFAULT_MAX_WIDTH: usize = 120;

/// Narrowest line width a presenter lays text out at.
pub const MIN_WIDTH: usize = 20;

/// Configuration shared by the driver, scenes, and presenters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum line width in columns. `0` means no limit beyond the terminal.
    pub max_width: usize,
    /// Message shown by a pause that doesn't supply its own.
    pub pause_message: String,
    /// Echo the selected option back to the player.
    pub echo_choice: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            pause_message: "Press any key to continue...".to_string(),
            echo_choice: true,
        }
    }
}

impl EngineConfig {
    /// Set the maximum line width (`0` for unlimited, otherwise at least 20).
    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = if width == 0 { 0 } else { width.max(MIN_WIDTH) };
        self
    }

    /// Set the default pause message.
    pub fn with_pause_message(mut self, message: impl Into<String>) -> Self {
        self.pause_message = message.into();
        self
    }

    /// Enable or disable the choice echo.
    pub fn with_echo_choice(mut self, echo: bool) -> Self {
        self.echo_choice = echo;
        self
    }

    /// Line width for a terminal of the given size.
    ///
    /// Falls back to the configured maximum when the size is unknown.
    pub fn line_width(&self, terminal_columns: Option<usize>) -> usize {
        let width = match (self.max_width, terminal_columns) {
            (0, Some(columns)) => columns,
            (0, None) => DEFAULT_MAX_WIDTH,
            (max, Some(columns)) => max.min(columns),
            (max, None) => max,
        };
        width.max(MIN_WIDTH)
    }
}
