//! The scene graph of Outbreak: Red Facility.
//!
//! The player wakes in a quarantine cell, fights through the bunker to
//! subject B-0B, and escapes to a ruined surface where one of several
//! endings waits. Scene logic lives here; rendering is left to whichever
//! presenter drives the game.

/// Scenes inside the facility.
pub mod bunker;
/// Scenes that end the game.
pub mod endings;
/// Scenes on the surface.
pub mod surface;

mod common;

use rf_engine::SceneRef;

/// Story milestone flags.
pub mod flags {
    /// The flashlight in the holding cell is on.
    pub const FLASHLIGHT_ON: &str = "flashlight_on";
    /// The security door to B-0B's nest has been unlocked.
    pub const B0B_DOOR_OPEN: &str = "b0b_door_open";
}

/// Names of items the player can carry.
pub mod items {
    /// Opens the security door in the main corridor.
    pub const KEYCARD: &str = "Level-1 Keycard";
    /// The only weapon that can bring down B-0B.
    pub const PIPE_SPEAR: &str = "Pipe Spear";
    /// Opens the exit gate.
    pub const ACCESS_MODULE: &str = "Exit Gate Access Module";
    /// Found on the ruined street.
    pub const RESPIRATOR: &str = "Respirator Mask";
    /// A memory of the flare seen from the radio tower.
    pub const SAW_THE_FLARE: &str = "Saw the Flare";
    /// Marks the pharmacy creature as dealt with.
    pub const ADRENALINE_SHOT: &str = "Adrenaline Shot";
}

/// The scene a new game starts in.
pub fn start() -> SceneRef {
    &bunker::INTRO
}
