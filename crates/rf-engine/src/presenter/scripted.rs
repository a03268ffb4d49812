//! A presenter that replays a fixed script of player input.

use std::collections::VecDeque;
use std::time::Duration;

use super::{DisplayOptions, FormattedOptions, PauseOptions, Presenter, Spinner};
use crate::error::{EngineError, EngineResult};

/// Something a [`ScriptedPresenter`] was asked to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The screen was cleared.
    Clear,
    /// Plain text was displayed.
    Text(String),
    /// A list of items was displayed.
    Items(Vec<String>),
    /// Markdown was displayed.
    Formatted(String),
    /// A menu was offered with these visible labels.
    Menu(Vec<String>),
    /// A text prompt was shown.
    Prompt(String),
    /// A pause with this message.
    Pause(String),
    /// A timed wait with this message.
    Spin(String),
}

/// Deterministic presenter for tests and replays.
///
/// Menu selections and text lines are consumed from queues. Running out of
/// input behaves like the player interrupting the game.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPresenter {
    selections: VecDeque<usize>,
    lines: VecDeque<String>,
    events: Vec<Event>,
}

impl ScriptedPresenter {
    /// Create a presenter with no scripted input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue menu selections, in visible-space indices.
    pub fn with_selections(mut self, selections: impl IntoIterator<Item = usize>) -> Self {
        self.selections.extend(selections);
        self
    }

    /// Queue lines of free text.
    pub fn with_lines<S: Into<String>>(mut self, lines: impl IntoIterator<Item = S>) -> Self {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Queue one more menu selection.
    pub fn push_selection(&mut self, selection: usize) {
        self.selections.push_back(selection);
    }

    /// Everything shown so far.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Visible labels of every menu offered so far.
    pub fn menus(&self) -> Vec<Vec<String>> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Menu(labels) => Some(labels.clone()),
                _ => None,
            })
            .collect()
    }

    /// All displayed text joined by newlines.
    pub fn transcript(&self) -> String {
        let mut out = String::new();
        for event in &self.events {
            let text = match event {
                Event::Text(t) | Event::Formatted(t) | Event::Pause(t) | Event::Spin(t) => {
                    t.clone()
                }
                Event::Items(items) => items.join("\n"),
                Event::Prompt(p) => p.clone(),
                Event::Clear | Event::Menu(_) => continue,
            };
            out.push_str(&text);
            out.push('\n');
        }
        out
    }

    /// Selections not consumed yet.
    pub fn remaining_selections(&self) -> usize {
        self.selections.len()
    }

    /// Forget everything shown so far.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl Presenter for ScriptedPresenter {
    fn display(&mut self, text: &str, _options: &DisplayOptions) -> EngineResult<()> {
        self.events.push(Event::Text(text.to_string()));
        Ok(())
    }

    fn display_items(&mut self, items: &[&str], _options: &DisplayOptions) -> EngineResult<()> {
        self.events
            .push(Event::Items(items.iter().map(|s| s.to_string()).collect()));
        Ok(())
    }

    fn display_formatted(
        &mut self,
        markdown: &str,
        _options: &FormattedOptions,
    ) -> EngineResult<()> {
        self.events.push(Event::Formatted(markdown.to_string()));
        Ok(())
    }

    fn select(&mut self, labels: &[&str]) -> EngineResult<usize> {
        self.events
            .push(Event::Menu(labels.iter().map(|s| s.to_string()).collect()));
        let selection = self.selections.pop_front().ok_or(EngineError::UserInterrupt)?;
        if selection >= labels.len() {
            return Err(EngineError::InvalidArgument(format!(
                "scripted selection {selection} is out of range of {} options",
                labels.len()
            )));
        }
        Ok(selection)
    }

    fn read_text(&mut self, prompt: &str) -> EngineResult<String> {
        self.events.push(Event::Prompt(prompt.to_string()));
        self.lines.pop_front().ok_or(EngineError::UserInterrupt)
    }

    fn clear(&mut self) -> EngineResult<()> {
        self.events.push(Event::Clear);
        Ok(())
    }

    fn pause(&mut self, message: &str, _options: &PauseOptions) -> EngineResult<()> {
        self.events.push(Event::Pause(message.to_string()));
        Ok(())
    }

    fn spin(
        &mut self,
        _duration: Duration,
        message: &str,
        _spinner: Option<Spinner>,
    ) -> EngineResult<()> {
        self.events.push(Event::Spin(message.to_string()));
        Ok(())
    }
}
