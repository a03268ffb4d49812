//! Validated free-text prompts.

use crate::error::EngineResult;
use crate::presenter::{Color, DisplayOptions, Presenter, Style};

/// Notice shown before re-asking after invalid input.
pub const INVALID_INPUT_NOTICE: &str = "INVALID INPUT | TRY AGAIN";

/// A free-text question, optionally restricted to a list of answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPrompt {
    prompt: String,
    choices: Vec<String>,
    show_choices: bool,
    min_length: usize,
}

impl Default for TextPrompt {
    fn default() -> Self {
        Self::new("Enter Choice")
    }
}

impl TextPrompt {
    /// Create a prompt that accepts any text.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            choices: Vec::new(),
            show_choices: true,
            min_length: 0,
        }
    }

    /// Accept only these answers, compared case-insensitively.
    pub fn with_choices<S: Into<String>>(mut self, choices: impl IntoIterator<Item = S>) -> Self {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }

    /// Don't list the accepted answers in the prompt.
    pub fn hide_choices(mut self) -> Self {
        self.show_choices = false;
        self
    }

    /// Require at least this many characters when no choices are set.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// The prompt as shown to the player.
    pub fn label(&self) -> String {
        if self.show_choices && !self.choices.is_empty() {
            format!("{} [{}]", self.prompt, self.choices.join(","))
        } else {
            self.prompt.clone()
        }
    }

    /// Check an already trimmed answer.
    pub fn accepts(&self, input: &str) -> bool {
        if self.choices.is_empty() {
            input.chars().count() >= self.min_length
        } else {
            let input = input.to_lowercase();
            self.choices.iter().any(|c| c.to_lowercase() == input)
        }
    }

    /// Ask until the player gives a valid answer, then echo it.
    pub fn ask(&self, ui: &mut dyn Presenter) -> EngineResult<String> {
        let label = self.label();
        loop {
            let input = ui.read_text(&label)?;
            let input = input.trim();
            if self.accepts(input) {
                ui.display(&format!("{label}: {input}"), &DisplayOptions::default())?;
                return Ok(input.to_string());
            }
            let alert = Style::new().bold().fg(Color::White).on(Color::Red);
            ui.display(INVALID_INPUT_NOTICE, &DisplayOptions::new().with_style(alert))?;
        }
    }
}
