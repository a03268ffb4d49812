//! Choice presentation with hidden options.
//!
//! A scene authors one fixed list of options and hides some of them
//! depending on the story so far. The player only sees the visible subset,
//! so the index the presenter returns has to be mapped back to the
//! authored list before the scene can act on it.

mod prompt;

use log::{trace, warn};

use crate::error::{EngineError, EngineResult};
use crate::presenter::{FormattedOptions, Presenter};

pub use prompt::{INVALID_INPUT_NOTICE, TextPrompt};

/// One prompt: the authored options and the indices hidden from the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice<'a> {
    options: &'a [&'a str],
    /// Sorted and deduplicated.
    hidden: Vec<usize>,
}

impl<'a> Choice<'a> {
    /// Validate a prompt.
    ///
    /// Fails with [`EngineError::InvalidArgument`] if there are no options,
    /// if a hidden index is out of range, or if every option is hidden.
    pub fn new(options: &'a [&'a str], hidden: &[usize]) -> EngineResult<Self> {
        if options.is_empty() {
            return Err(invalid("there are no options to choose from".to_string()));
        }
        if let Some(&index) = hidden.iter().find(|&&i| i >= options.len()) {
            return Err(invalid(format!(
                "hidden choice {index} is out of range of {} options",
                options.len()
            )));
        }

        let mut hidden = hidden.to_vec();
        hidden.sort_unstable();
        hidden.dedup();

        if hidden.len() == options.len() {
            return Err(invalid(format!(
                "all {} options are hidden",
                options.len()
            )));
        }

        Ok(Self { options, hidden })
    }

    /// The authored options.
    pub fn options(&self) -> &'a [&'a str] {
        self.options
    }

    /// Hidden indices in ascending order.
    pub fn hidden(&self) -> &[usize] {
        &self.hidden
    }

    /// Check if an authored option is hidden.
    pub fn is_hidden(&self, index: usize) -> bool {
        self.hidden.binary_search(&index).is_ok()
    }

    /// The options the player gets to see, in authored order.
    pub fn visible(&self) -> Vec<&'a str> {
        self.options
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.is_hidden(*i))
            .map(|(_, label)| *label)
            .collect()
    }

    /// Map a position in [`Choice::visible`] back to the authored list.
    pub fn to_original(&self, visible_index: usize) -> usize {
        let mut index = visible_index;
        for &hidden in &self.hidden {
            if hidden <= index {
                index += 1;
            }
        }
        index
    }

    /// Ask the player and return the chosen index in the authored list.
    ///
    /// With `echo` set, the chosen label is shown back to the player.
    pub fn resolve(&self, ui: &mut dyn Presenter, echo: bool) -> EngineResult<usize> {
        let visible = self.visible();
        let picked = ui.select(&visible)?;
        if picked >= visible.len() {
            return Err(invalid(format!(
                "selection {picked} is out of range of {} visible options",
                visible.len()
            )));
        }

        let index = self.to_original(picked);
        trace!("visible choice {picked} resolved to option {index}");

        if echo {
            ui.display_formatted(
                &format!("*choice:* **{}**", self.options[index]),
                &FormattedOptions::default(),
            )?;
        }
        Ok(index)
    }
}

/// Offer `options` minus `hidden` and return the chosen authored index.
pub fn resolve(
    ui: &mut dyn Presenter,
    options: &[&str],
    hidden: &[usize],
    echo: bool,
) -> EngineResult<usize> {
    Choice::new(options, hidden)?.resolve(ui, echo)
}

fn invalid(message: String) -> EngineError {
    warn!("rejected choice: {message}");
    EngineError::InvalidArgument(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::{Event, ScriptedPresenter};
    use proptest::prelude::*;

    fn pick(options: &[&str], hidden: &[usize], selection: usize) -> EngineResult<usize> {
        let mut ui = ScriptedPresenter::new().with_selections([selection]);
        resolve(&mut ui, options, hidden, false)
    }

    #[test]
    fn nothing_hidden_is_identity() {
        let options = ["A", "B", "C"];
        for i in 0..3 {
            assert_eq!(pick(&options, &[], i).unwrap(), i);
        }
    }

    #[test]
    fn one_hidden_skips_it() {
        let options = ["A", "B", "C", "D"];
        assert_eq!(pick(&options, &[1], 0).unwrap(), 0);
        assert_eq!(pick(&options, &[1], 1).unwrap(), 2);
        assert_eq!(pick(&options, &[1], 2).unwrap(), 3);
    }

    #[test]
    fn several_hidden() {
        let options = ["A", "B", "C", "D", "E"];
        let choice = Choice::new(&options, &[0, 2]).unwrap();
        assert_eq!(choice.visible(), vec!["B", "D", "E"]);
        assert_eq!(pick(&options, &[0, 2], 0).unwrap(), 1);
        assert_eq!(pick(&options, &[0, 2], 1).unwrap(), 3);
        assert_eq!(pick(&options, &[0, 2], 2).unwrap(), 4);
    }

    #[test]
    fn hidden_order_and_duplicates_do_not_matter() {
        let options = ["A", "B", "C", "D", "E"];
        let choice = Choice::new(&options, &[3, 0, 3]).unwrap();
        assert_eq!(choice.hidden(), &[0, 3]);
        assert_eq!(choice.visible(), vec!["B", "C", "E"]);
        assert_eq!(choice.to_original(2), 4);
    }

    #[test]
    fn trailing_hidden() {
        let options = ["A", "B", "C"];
        assert_eq!(pick(&options, &[2], 1).unwrap(), 1);
    }

    #[test]
    fn out_of_range_hidden_is_rejected() {
        let options = ["A", "B", "C"];
        let err = pick(&options, &[3], 0).unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn all_hidden_is_rejected() {
        let options = ["A", "B"];
        let err = Choice::new(&options, &[1, 0]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
    }

    #[test]
    fn empty_options_are_rejected() {
        let err = Choice::new(&[], &[]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
    }

    #[test]
    fn only_visible_labels_are_offered() {
        let mut ui = ScriptedPresenter::new().with_selections([1]);
        let index = resolve(&mut ui, &["A", "B", "C"], &[0], true).unwrap();
        assert_eq!(index, 2);
        assert_eq!(ui.menus(), vec![vec!["B".to_string(), "C".to_string()]]);
        assert_eq!(
            ui.events().last(),
            Some(&Event::Formatted("*choice:* **C**".to_string()))
        );
    }

    #[test]
    fn echo_can_be_disabled() {
        let mut ui = ScriptedPresenter::new().with_selections([0]);
        resolve(&mut ui, &["A"], &[], false).unwrap();
        assert_eq!(ui.events().len(), 1);
    }

    fn prompt_strategy() -> impl Strategy<Value = (Vec<bool>, prop::sample::Index)> {
        (1usize..12)
            .prop_flat_map(|n| {
                (
                    prop::collection::vec(any::<bool>(), n),
                    any::<prop::sample::Index>(),
                )
            })
            .prop_filter("at least one option visible", |(mask, _)| {
                mask.iter().any(|hidden| !hidden)
            })
    }

    proptest! {
        #[test]
        fn resolved_index_is_never_hidden((mask, at) in prompt_strategy()) {
            let labels: Vec<String> = (0..mask.len()).map(|i| format!("option {i}")).collect();
            let options: Vec<&str> = labels.iter().map(String::as_str).collect();
            let hidden: Vec<usize> = mask
                .iter()
                .enumerate()
                .filter(|(_, h)| **h)
                .map(|(i, _)| i)
                .collect();

            let choice = Choice::new(&options, &hidden).unwrap();
            let visible = choice.visible();
            let selection = at.index(visible.len());

            let mut ui = ScriptedPresenter::new().with_selections([selection]);
            let index = choice.resolve(&mut ui, false).unwrap();

            prop_assert!(index < options.len());
            prop_assert!(!hidden.contains(&index));
            prop_assert_eq!(options[index], visible[selection]);
        }
    }
}
