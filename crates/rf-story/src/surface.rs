//! The ruined city above the bunker.

use rf_engine::presenter::DisplayOptions;
use rf_engine::{EngineResult, Scene, SceneContext, Transition};

use crate::common::take_once;
use crate::endings::{DIED_FROZEN, ENDING_LONELY_ROAD, ENDING_SIGNAL, ENDING_WATCHERS};
use crate::items::{ADRENALINE_SHOT, RESPIRATOR, SAW_THE_FLARE};

/// First steps outside.
pub struct Surface;
/// The crossroads outside the bunker.
pub struct Hub;
/// A street of melted cars.
pub struct Street;
/// A collapsed pharmacy with something behind the counter.
pub struct Pharmacy;
/// The thing in the pharmacy.
pub struct Creature;
/// The radio tower on the hill.
pub struct Tower;
/// Shouting at the figures in the smoke.
pub struct CallOut;
/// The flare and the last decision.
pub struct FinalSignal;

/// Leaving the bunker.
pub static SURFACE: Surface = Surface;
/// The surface crossroads.
pub static HUB: Hub = Hub;
/// The ruined street.
pub static STREET: Street = Street;
/// The collapsed pharmacy.
pub static PHARMACY: Pharmacy = Pharmacy;
/// The pharmacy creature encounter.
pub static CREATURE: Creature = Creature;
/// Radio tower hill.
pub static TOWER: Tower = Tower;
/// Calling out to the watchers.
pub static CALL_OUT: CallOut = CallOut;
/// The last choice.
pub static FINAL_SIGNAL: FinalSignal = FinalSignal;

const SURFACE_TEXT: &str = "\
# THE SURFACE

The locks disengage and the gate rises. A long streak of white light cuts
across the bunker floor. You step outside for the first time since the
collapse.

The sky is gray and swollen with smoke. Buildings stand like broken ribs.
Not a sound moves except the dry wind.

You walk forward. The ground cracks under your boots. Something soft
squishes beneath your heel. You do not look down.

A corpse in the distance twitches once. Not a natural twitch. A sudden
sharp jerk as if yanked by an invisible string.

Far ahead, three figures stand in the smoke. Still. Unmoving. Their faces
are hidden. Their heads tilt toward you in the exact same second.

You blink. They are closer.
Your pulse starts to pound.
You cannot stay here.";

impl Scene for Surface {
    fn id(&self) -> &'static str {
        "surface"
    }

    fn run(&self, ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
        ctx.clear()?;
        ctx.narrate(SURFACE_TEXT)?;
        ctx.pause_with("Press any key to flee the area...")?;
        Ok(Transition::to(&HUB))
    }
}

const HUB_TEXT: &str = "\
# OUTSIDE THE BUNKER

The air outside is thick and gritty. Ash falls like slow snow.
The world feels completely wrong.

You take a step into the ruins, trying to steady your breath.";

impl Scene for Hub {
    fn id(&self) -> &'static str {
        "hub"
    }

    fn run(&self, ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
        ctx.clear()?;
        ctx.narrate(HUB_TEXT)?;
        ctx.blank()?;
        ctx.list(
            &[
                "Explore the ruined street",
                "Approach the collapsed pharmacy",
                "Climb the hill toward the radio tower",
                "Return inside the bunker (not recommended)",
                "Call out to the figures in the smoke",
            ],
            &DisplayOptions::new().numbered(),
        )?;

        let choices = ["Street", "Pharmacy", "Tower", "Bunker", "Call out"];
        match ctx.choose(&choices, &[])? {
            0 => Ok(Transition::to(&STREET)),
            1 => Ok(Transition::to(&PHARMACY)),
            2 => Ok(Transition::to(&TOWER)),
            3 => {
                ctx.say("Something slams the bunker door shut behind you.")?;
                ctx.say("You are not alone in the dark.")?;
                ctx.pause_with("Press any key...")?;
                Ok(Transition::to(&HUB))
            }
            _ => Ok(Transition::to(&CALL_OUT)),
        }
    }
}

const STREET_TEXT: &str = "\
# RUINED STREET

Cars stand melted into the asphalt. Faces are fused into broken windows.
One corpse whispers as you pass even though its throat is torn open.

You search the area.";

impl Scene for Street {
    fn id(&self) -> &'static str {
        "street"
    }

    fn run(&self, ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
        ctx.clear()?;
        ctx.narrate(STREET_TEXT)?;
        if take_once(ctx, RESPIRATOR) {
            ctx.say("You find a damaged but functional respirator mask on a skeleton.")?;
        } else {
            ctx.say("The skeleton you took the respirator from grins up at you.")?;
        }
        ctx.pause_with("Press any key to return.")?;
        Ok(Transition::to(&HUB))
    }
}

const PHARMACY_TEXT: &str = "\
# COLLAPSED PHARMACY

Shelves have collapsed under rubble. Bottles leak into sticky puddles.
A sound comes from behind the counter. Something wet drags itself across
the tiles.";

impl Scene for Pharmacy {
    fn id(&self) -> &'static str {
        "pharmacy"
    }

    fn run(&self, ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
        ctx.clear()?;
        ctx.narrate(PHARMACY_TEXT)?;
        if !ctx.inventory().has(ADRENALINE_SHOT) {
            return Ok(Transition::to(&CREATURE));
        }
        ctx.say("The creature here has already been dealt with.")?;
        ctx.pause_with("Press any key to return.")?;
        Ok(Transition::to(&HUB))
    }
}

const CREATURE_TEXT: &str = "\
The creature rises out of the rubble, its shape wrong in every way.
It does not breathe. It only watches.

You have seconds to react.";

impl Scene for Creature {
    fn id(&self) -> &'static str {
        "creature"
    }

    fn run(&self, ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
        ctx.clear()?;
        ctx.narrate(CREATURE_TEXT)?;
        ctx.list(
            &[
                "Run back to the street",
                "Hide behind the fallen shelves",
                "Freeze completely",
            ],
            &DisplayOptions::new().numbered(),
        )?;

        match ctx.choose(&["Run", "Hide", "Freeze"], &[])? {
            0 => {
                ctx.say(
                    "You bolt for the doorway. The creature lunges but slips on glass. You escape.",
                )?;
                ctx.pause()?;
                Ok(Transition::to(&STREET))
            }
            1 => {
                ctx.say(
                    "You crouch behind a collapsed shelf. The creature sniffs the air and \
                     slowly drifts away. There is an opening to leave now.",
                )?;
                ctx.pause()?;
                Ok(Transition::to(&STREET))
            }
            _ => Ok(Transition::to(&DIED_FROZEN)),
        }
    }
}

const TOWER_TEXT: &str = "\
# RADIO TOWER HILL

You climb the cracked slope. The city stretches below you like a dead sea.

The tower at the peak hums even though its wires are torn. When you touch
the metal, a voice crackles through the dead speakers.

It whispers your name.
A recently used flare lies at the base. You can see it shimmering and lighting
the sky, it seems close. Too close, you can taste the warmth.";

impl Scene for Tower {
    fn id(&self) -> &'static str {
        "tower"
    }

    fn run(&self, ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
        ctx.clear()?;
        ctx.narrate(TOWER_TEXT)?;
        take_once(ctx, SAW_THE_FLARE);
        ctx.pause_with("Press any key to continue.")?;
        Ok(Transition::to(&FINAL_SIGNAL))
    }
}

const CALL_OUT_TEXT: &str = "\
# THE WATCHERS

You shout into the smoke. The figures freeze. One takes a slow step toward
you. Another mirrors it.

They do not answer.

You feel eyes on your back even when you turn.";

impl Scene for CallOut {
    fn id(&self) -> &'static str {
        "call_out"
    }

    fn run(&self, ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
        ctx.clear()?;
        ctx.narrate(CALL_OUT_TEXT)?;
        ctx.pause_with("Press any key to return.")?;
        Ok(Transition::to(&FINAL_SIGNAL))
    }
}

const FINAL_SIGNAL_TEXT: &str = "\
# THE LAST CHOICE

A bright orange flare rises from the far street. Someone is calling for you,
they know you're here. Or something wants you to come closer.

You must decide.";

impl Scene for FinalSignal {
    fn id(&self) -> &'static str {
        "final_signal"
    }

    fn run(&self, ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
        ctx.clear()?;
        ctx.narrate(FINAL_SIGNAL_TEXT)?;

        let choices = [
            "Run toward the flare",
            "Avoid it and search for another route",
            "Hide and observe",
        ];
        match ctx.choose(&choices, &[])? {
            0 => Ok(Transition::to(&ENDING_SIGNAL)),
            1 => Ok(Transition::to(&ENDING_LONELY_ROAD)),
            _ => Ok(Transition::to(&ENDING_WATCHERS)),
        }
    }
}
