//! Scenes that end the game.

use log::info;
use rf_engine::{EngineResult, Scene, SceneContext, Transition};

/// A closing passage followed by a final pause.
pub struct Ending {
    id: &'static str,
    text: &'static str,
    epilogue: Option<Epilogue>,
    farewell: &'static str,
}

/// A passage shown after the player continues past a pause.
struct Epilogue {
    pause: &'static str,
    text: &'static str,
}

impl Ending {
    /// Whether this ending kills the player.
    pub fn is_death(&self) -> bool {
        self.text.contains("YOU DIED")
    }
}

impl Scene for Ending {
    fn id(&self) -> &'static str {
        self.id
    }

    fn run(&self, ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
        info!(
            "reached {} ({})",
            self.id,
            if self.is_death() { "death" } else { "survival" }
        );
        ctx.clear()?;
        ctx.narrate(self.text)?;
        ctx.blank()?;
        if let Some(epilogue) = &self.epilogue {
            ctx.pause_with(epilogue.pause)?;
            ctx.blank()?;
            ctx.narrate(epilogue.text)?;
            ctx.blank()?;
        }
        ctx.pause_with(self.farewell)?;
        Ok(Transition::Terminate)
    }
}

/// Out through the exit gate under the lair.
pub static ESCAPED_GATE: Ending = Ending {
    id: "escaped_gate",
    text: "\
# ENDING: THE GATE

The huge gate whines open. A stairwell leads up into smoke and the dawn.",
    epilogue: Some(Epilogue {
        pause: "Press any key to climb out to the surface",
        text: "\
You heave yourself up the stairwell and emerge into a world that is burning,
smoking, and very much not safe. You survived... for now.",
    }),
    farewell: "Press any key to end.",
};

/// Attacking B-0B without a weapon.
pub static DIED_BARE_HANDS: Ending = Ending {
    id: "died_bare_hands",
    text: "\
Desperate, you lunge with bare hands. It's a terrible idea.

B-0B's head snaps toward you with impossible speed. Its maw clamps down
around your shoulder and arm like a steel trap. You scream as pain flares,
bone crunches under its jaw. You try to pull free, but the weight and
strength are too much.

Hot, acidic blood pours into your face. The world tilts. You lose the
sensation in your limbs as the monster tightens its grip.

Everything goes dark.

*** YOU DIED ***",
    epilogue: None,
    farewell: "Press any key to accept the end.",
};

/// Freezing in front of the pharmacy creature.
pub static DIED_FROZEN: Ending = Ending {
    id: "died_frozen",
    text: "\
You freeze. Total stillness.

The creature tilts its head, then rushes you in a blur. There is no time.
Maybe next time.

*** YOU DIED ***",
    epilogue: None,
    farewell: "Press any key...",
};

/// Running to the flare.
pub static ENDING_SIGNAL: Ending = Ending {
    id: "ending_signal",
    text: "\
# ENDING: THE SIGNAL

You run toward the flare. Figures step out of the smoke. They hold weapons
but lower them when they see you are alive and breathing.

They pull you onto a truck and drive into the wasteland. You made it out.",
    epilogue: None,
    farewell: "Press any key to end.",
};

/// Turning away from the flare.
pub static ENDING_LONELY_ROAD: Ending = Ending {
    id: "ending_lonely_road",
    text: "\
# ENDING: THE LONELY ROAD

You ignore the flare and vanish into the ruins alone. The silence follows
close behind you.

Somewhere, humanity might still exist. You will find it in your own time.
Instead, you turn, your back facing salvation or death. You'll never find
out anyway.",
    epilogue: None,
    farewell: "Press any key to end.",
};

/// Hiding from the flare.
pub static ENDING_WATCHERS: Ending = Ending {
    id: "ending_watchers",
    text: "\
# ENDING: THE WATCHERS

You wait and observe. The figures drift farther without footsteps. When you
finally move, they are already behind you.

The world fades under pale hands.",
    epilogue: None,
    farewell: "Press any key to end.",
};

#[cfg(test)]
mod tests {
    use super::*;
    use rf_engine::presenter::Event;
    use rf_engine::{SceneDriver, ScriptedPresenter};

    #[test]
    fn every_ending_terminates() {
        for ending in [
            &ESCAPED_GATE,
            &DIED_BARE_HANDS,
            &DIED_FROZEN,
            &ENDING_SIGNAL,
            &ENDING_LONELY_ROAD,
            &ENDING_WATCHERS,
        ] {
            let mut ui = ScriptedPresenter::new();
            let next = SceneDriver::new(&mut ui).step(ending).unwrap();
            assert!(next.is_terminal(), "{} did not terminate", ending.id());
            assert!(ui.transcript().contains(ending.farewell));
        }
    }

    #[test]
    fn gate_escape_pauses_before_the_climb() {
        let mut ui = ScriptedPresenter::new();
        SceneDriver::new(&mut ui).step(&ESCAPED_GATE).unwrap();
        let pauses: Vec<String> = ui
            .events()
            .iter()
            .filter_map(|e| match e {
                Event::Pause(message) => Some(message.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(
            pauses,
            vec!["Press any key to climb out to the surface", "Press any key to end."]
        );

        let transcript = ui.transcript();
        let gate = transcript.find("whines open").unwrap();
        let climb = transcript.find("You heave yourself").unwrap();
        assert!(gate < climb);
    }

    #[test]
    fn deaths_are_marked() {
        assert!(DIED_BARE_HANDS.is_death());
        assert!(DIED_FROZEN.is_death());
        assert!(!ENDING_SIGNAL.is_death());
    }
}
