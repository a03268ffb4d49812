//! The scene driver: a trampoline over the story graph.

use log::{debug, info};

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::presenter::Presenter;
use crate::scene::{SceneContext, SceneRef, Transition};
use crate::state::Session;

/// Record of one finished playthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playthrough {
    /// Ids of every scene run, in order, repeats included.
    pub path: Vec<&'static str>,
}

impl Playthrough {
    /// Number of scenes run.
    pub fn steps(&self) -> usize {
        self.path.len()
    }

    /// The scene that ended the game.
    pub fn last_scene(&self) -> Option<&'static str> {
        self.path.last().copied()
    }

    /// Check if a scene was run at least once.
    pub fn visited(&self, id: &str) -> bool {
        self.path.contains(&id)
    }
}

/// Runs scenes one after another until one of them terminates.
///
/// There is no iteration limit and no cycle detection. A scene returning
/// itself is just another loop turn.
pub struct SceneDriver<'a> {
    ui: &'a mut dyn Presenter,
    config: EngineConfig,
    session: Session,
}

impl<'a> SceneDriver<'a> {
    /// Create a driver with a fresh session and default configuration.
    pub fn new(ui: &'a mut dyn Presenter) -> Self {
        Self {
            ui,
            config: EngineConfig::default(),
            session: Session::new(),
        }
    }

    /// Use a custom configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Start from an existing session instead of a fresh one.
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// The current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The current session, mutably.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Consume the driver and return its session.
    pub fn into_session(self) -> Session {
        self.session
    }

    /// Run a single scene and return its transition.
    pub fn step(&mut self, scene: SceneRef) -> EngineResult<Transition> {
        debug!("entering scene {}", scene.id());
        let mut ctx = SceneContext::new(&mut self.session, &mut *self.ui, &self.config);
        scene.run(&mut ctx)
    }

    /// Run from `start` until a scene terminates.
    ///
    /// Errors, including a player interrupt, stop the loop immediately.
    pub fn run(&mut self, start: SceneRef) -> EngineResult<Playthrough> {
        info!("starting game at scene {}", start.id());
        let mut path = Vec::new();
        let mut current = start;
        loop {
            path.push(current.id());
            match self.step(current)? {
                Transition::Continue(next) => current = next,
                Transition::Terminate => break,
            }
        }
        info!(
            "game ended at scene {} after {} scenes",
            current.id(),
            path.len()
        );
        Ok(Playthrough { path })
    }
}
