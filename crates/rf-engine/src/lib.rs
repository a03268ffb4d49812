//! Scene graph engine for Outbreak: Red Facility.
//!
//! A story is a directed graph of scenes. Each scene renders through a
//! [`Presenter`], reads and mutates the shared [`Session`], and returns a
//! [`Transition`] naming the next scene or ending the game. The
//! [`SceneDriver`] runs that loop until a scene terminates.

/// Choice presentation and text prompts.
pub mod choice;
/// Engine configuration.
pub mod config;
/// Scene driver loop.
pub mod driver;
/// Error types for the engine.
pub mod error;
/// Presentation layer contract.
pub mod presenter;
/// Scene trait and transitions.
pub mod scene;
/// Story flags and inventory.
pub mod state;

pub use choice::{Choice, TextPrompt, resolve};
pub use config::EngineConfig;
pub use driver::{Playthrough, SceneDriver};
pub use error::{EngineError, EngineResult};
pub use presenter::{Presenter, ScriptedPresenter};
pub use scene::{Scene, SceneContext, SceneRef, Transition};
pub use state::{GameState, Inventory, Session};
