//! Scenes and the transitions between them.

use std::fmt;
use std::time::Duration;

use crate::choice::Choice;
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::presenter::{
    DisplayOptions, FormattedOptions, PauseOptions, Presenter, Spinner,
};
use crate::state::{GameState, Inventory, Session};

/// A reference to a scene. Scenes are stateless, so identity is the reference.
pub type SceneRef = &'static dyn Scene;

/// What happens after a scene finishes.
#[derive(Clone, Copy)]
pub enum Transition {
    /// Run this scene next. It may be the scene that just ran.
    Continue(SceneRef),
    /// End the game.
    Terminate,
}

impl Transition {
    /// Continue to `scene`.
    pub fn to(scene: SceneRef) -> Self {
        Self::Continue(scene)
    }

    /// The next scene, if the game goes on.
    pub fn next_scene(&self) -> Option<SceneRef> {
        match self {
            Self::Continue(scene) => Some(*scene),
            Self::Terminate => None,
        }
    }

    /// Id of the next scene, if the game goes on.
    pub fn target_id(&self) -> Option<&'static str> {
        self.next_scene().map(|scene| scene.id())
    }

    /// Whether the game ends here.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminate)
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continue(scene) => f.debug_tuple("Continue").field(&scene.id()).finish(),
            Self::Terminate => write!(f, "Terminate"),
        }
    }
}

impl PartialEq for Transition {
    fn eq(&self, other: &Self) -> bool {
        self.target_id() == other.target_id()
    }
}

/// A node in the story graph.
///
/// Every call to [`Scene::run`] must end in a [`Transition`]; a scene has no
/// fall-through branch.
pub trait Scene {
    /// Stable identifier, unique within a story.
    fn id(&self) -> &'static str;

    /// Render the scene, apply the player's choice, and pick what comes next.
    fn run(&self, ctx: &mut SceneContext<'_>) -> EngineResult<Transition>;
}

/// Everything a scene may read or change while it runs.
pub struct SceneContext<'a> {
    session: &'a mut Session,
    ui: &'a mut dyn Presenter,
    config: &'a EngineConfig,
}

impl<'a> SceneContext<'a> {
    /// Bundle a session, a presenter, and a configuration.
    pub fn new(
        session: &'a mut Session,
        ui: &'a mut dyn Presenter,
        config: &'a EngineConfig,
    ) -> Self {
        Self {
            session,
            ui,
            config,
        }
    }

    /// Story flags.
    pub fn state(&self) -> &GameState {
        &self.session.state
    }

    /// Story flags, mutably.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.session.state
    }

    /// Carried items.
    pub fn inventory(&self) -> &Inventory {
        &self.session.inventory
    }

    /// Carried items, mutably.
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.session.inventory
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        self.config
    }

    /// The presenter, for calls the helpers below don't cover.
    pub fn ui(&mut self) -> &mut dyn Presenter {
        &mut *self.ui
    }

    /// Clear the screen.
    pub fn clear(&mut self) -> EngineResult<()> {
        self.ui.clear()
    }

    /// Show a plain passage.
    pub fn say(&mut self, text: &str) -> EngineResult<()> {
        self.ui.display(text, &DisplayOptions::default())
    }

    /// Show an empty line.
    pub fn blank(&mut self) -> EngineResult<()> {
        self.say("")
    }

    /// Show a Markdown passage.
    pub fn narrate(&mut self, markdown: &str) -> EngineResult<()> {
        self.ui.display_formatted(markdown, &FormattedOptions::default())
    }

    /// Show a list of passages.
    pub fn list(&mut self, items: &[&str], options: &DisplayOptions) -> EngineResult<()> {
        self.ui.display_items(items, options)
    }

    /// Pause with the configured default message.
    pub fn pause(&mut self) -> EngineResult<()> {
        let message = self.config.pause_message.clone();
        self.pause_with(&message)
    }

    /// Pause with a custom message.
    pub fn pause_with(&mut self, message: &str) -> EngineResult<()> {
        self.ui.pause(message, &PauseOptions::default())
    }

    /// Wait for a fixed time with a message and animation.
    pub fn spin(
        &mut self,
        duration: Duration,
        message: &str,
        spinner: Spinner,
    ) -> EngineResult<()> {
        self.ui.spin(duration, message, Some(spinner))
    }

    /// Offer `options` minus `hidden` and return the chosen authored index.
    pub fn choose(&mut self, options: &[&str], hidden: &[usize]) -> EngineResult<usize> {
        let echo = self.config.echo_choice;
        Choice::new(options, hidden)?.resolve(&mut *self.ui, echo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::ScriptedPresenter;

    struct Lamp;

    static LAMP: Lamp = Lamp;

    impl Scene for Lamp {
        fn id(&self) -> &'static str {
            "lamp"
        }

        fn run(&self, ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
            let hidden: Vec<usize> = if ctx.state().has("lit") { vec![0] } else { vec![] };
            match ctx.choose(&["Light the lamp", "Leave"], &hidden)? {
                0 => {
                    ctx.state_mut().set("lit");
                    Ok(Transition::to(&LAMP))
                }
                _ => Ok(Transition::Terminate),
            }
        }
    }

    #[test]
    fn transition_helpers() {
        let next = Transition::to(&LAMP);
        assert_eq!(next.target_id(), Some("lamp"));
        assert!(!next.is_terminal());
        assert!(Transition::Terminate.is_terminal());
        assert_eq!(Transition::Terminate.target_id(), None);
        assert_eq!(format!("{next:?}"), "Continue(\"lamp\")");
        assert_eq!(next, Transition::Continue(&LAMP));
        assert_ne!(next, Transition::Terminate);
    }

    #[test]
    fn context_exposes_session() {
        let mut session = Session::new();
        let mut ui = ScriptedPresenter::new().with_selections([0]);
        let config = EngineConfig::default();

        let transition = {
            let mut ctx = SceneContext::new(&mut session, &mut ui, &config);
            LAMP.run(&mut ctx).unwrap()
        };

        assert_eq!(transition.target_id(), Some("lamp"));
        assert!(session.state.has("lit"));
    }

    #[test]
    fn context_helpers_reach_presenter() {
        let mut session = Session::new();
        let mut ui = ScriptedPresenter::new();
        let config = EngineConfig::default().with_pause_message("Onward.");

        {
            let mut ctx = SceneContext::new(&mut session, &mut ui, &config);
            ctx.clear().unwrap();
            ctx.say("hello").unwrap();
            ctx.narrate("# Title").unwrap();
            ctx.pause().unwrap();
            ctx.inventory_mut().add("Lamp Oil");
            assert!(ctx.inventory().has("Lamp Oil"));
        }

        assert_eq!(ui.transcript(), "hello\n# Title\nOnward.\n");
    }
}
