//! The quarantine facility: from the holding cell to B-0B's nest.

use std::time::Duration;

use rf_engine::presenter::Spinner;
use rf_engine::{EngineResult, Scene, SceneContext, Transition};

use crate::common::{take_once, view_inventory};
use crate::endings::{DIED_BARE_HANDS, ESCAPED_GATE};
use crate::flags::{B0B_DOOR_OPEN, FLASHLIGHT_ON};
use crate::items::{ACCESS_MODULE, KEYCARD, PIPE_SPEAR};
use crate::surface::SURFACE;

/// Title card and premise.
pub struct Intro;
/// Holding cell RF-13, where the player wakes up.
pub struct Cell;
/// The security wing corridor.
pub struct Hall;
/// B-0B's nest, the hub of the lower facility.
pub struct Lair;
/// A ransacked storage room off the nest.
pub struct Armory;
/// The fight with B-0B.
pub struct Assault;

/// The opening scene.
pub static INTRO: Intro = Intro;
/// The holding cell.
pub static CELL: Cell = Cell;
/// The main corridor.
pub static HALL: Hall = Hall;
/// B-0B's nest.
pub static LAIR: Lair = Lair;
/// The armory.
pub static ARMORY: Armory = Armory;
/// The assault on B-0B.
pub static ASSAULT: Assault = Assault;

const INTRO_TEXT: &str = "\
# OUTBREAK: RED FACILITY

You wake to the taste of metal in your mouth and a ceiling that hums with
emergency power. Fluorescent lights above flicker between sickly green and
dark. You're on a cold metal slab inside a quarantine holding cell marked
**RF-13**.

A faint, wet shuffling echoes in the distance. The smell of antiseptic is
overwhelmed by something far worse.. rot, blood, and old smoke.

At your side a battered **flashlight** rests, its button scuffed but functional.
You have minutes (maybe hours) to get out before whatever's in the vents finds
you. Somewhere deeper in the facility, a hulking infected subject known as
**B-0B** holds the module that will open the exit gate.

Pull yourself together. Survive long enough to get it back.";

impl Scene for Intro {
    fn id(&self) -> &'static str {
        "intro"
    }

    fn run(&self, ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
        ctx.clear()?;
        ctx.narrate(INTRO_TEXT)?;
        ctx.blank()?;
        ctx.pause_with("Press any key to find your feet and stand up.")?;
        Ok(Transition::to(&CELL))
    }
}

const CELL_TEXT: &str = "\
# HOLDING CELL -RF-13

You are inside a cramped metal cell. The walls are scored with shallow claw
marks and a smear of dried blood leads to the door. The air tastes stale.";

const CELL_DARK: &str = "\
The flashlight beside you is mostly dead but could be enough to see for a
short time. The cell door is slightly ajar, obvious that whoever or whatever
left last didn't care to shut it.

What do you do?";

const CELL_LIT: &str = "\
The corridor beyond your cell yawns darkly. The door to the SOUTH sits
slightly open. The flashlight casts a narrow cone; beyond it the hallway
is a dim, rotting tunnel lined with ruined cells.";

impl Scene for Cell {
    fn id(&self) -> &'static str {
        "cell"
    }

    fn run(&self, ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
        ctx.clear()?;
        ctx.narrate(CELL_TEXT)?;
        ctx.blank()?;

        if !ctx.state().has(FLASHLIGHT_ON) {
            ctx.narrate(CELL_DARK)?;
            ctx.blank()?;
            let choices = [
                "Turn on the flashlight",
                "Call out to see if anyone is alive",
                "Examine your inventory",
            ];
            match ctx.choose(&choices, &[])? {
                0 => {
                    ctx.state_mut().set(FLASHLIGHT_ON);
                    ctx.blank()?;
                    ctx.say("The flashlight sputters to life with a weak, jittery beam.")?;
                    ctx.say("Shadows dance. In the beam you can see the corridor beyond.")?;
                    ctx.blank()?;
                    ctx.pause()?;
                }
                1 => {
                    ctx.blank()?;
                    ctx.say(
                        "You shout. Your voice sounds small. Wet scratching replies from \
                         somewhere beyond the door. Probably nothing friendly.",
                    )?;
                    ctx.blank()?;
                    ctx.pause()?;
                }
                _ => view_inventory(ctx)?,
            }
            return Ok(Transition::to(&CELL));
        }

        ctx.narrate(CELL_LIT)?;
        ctx.blank()?;
        ctx.say("What will you do?")?;
        let choices = ["Go South through the cell door", "Examine your inventory"];
        match ctx.choose(&choices, &[])? {
            0 => Ok(Transition::to(&HALL)),
            _ => {
                view_inventory(ctx)?;
                Ok(Transition::to(&CELL))
            }
        }
    }
}

const GUARD_TEXT: &str = "\
A security guard lies slumped against the wall. He is long dead, flies crowding
around his chest where it is torn open, but you notice a Level-1 security
keycard still clipped to his chest rig.";

impl Scene for Hall {
    fn id(&self) -> &'static str {
        "hall"
    }

    fn run(&self, ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
        ctx.clear()?;

        let door_open = ctx.state().has(B0B_DOOR_OPEN);
        let has_keycard = ctx.inventory().has(KEYCARD);
        let door_state = if door_open { "open" } else { "sealed" };

        ctx.narrate(&format!(
            "\
# MAIN CORRIDOR -SECURITY WING

You step into a long corridor of cells. The glass is spiderwebbed, and the
doors are ajar or torn off their frames. A faint red emergency strip light
pulses somewhere in the distance.

To the EAST a heavy security door is {door_state}.
To the NORTH is the way back to your cell."
        ))?;
        ctx.blank()?;

        if !has_keycard {
            ctx.narrate(GUARD_TEXT)?;
        }
        ctx.blank()?;

        let choices = [
            "Go North (back to cell)",
            "Go East (toward the big door)",
            "Take the Level-1 Keycard",
            "View Inventory",
        ];
        let hidden: &[usize] = if has_keycard { &[2] } else { &[] };

        match ctx.choose(&choices, hidden)? {
            0 => Ok(Transition::to(&CELL)),
            1 if door_open => Ok(Transition::to(&LAIR)),
            1 if has_keycard => {
                ctx.state_mut().set(B0B_DOOR_OPEN);
                ctx.blank()?;
                ctx.spin(
                    Duration::from_millis(1200),
                    "The keypad chirps as it reads the card...",
                    Spinner::Dots,
                )?;
                ctx.say("You swipe the Level-1 Keycard. The heavy door grinds and unlocks.")?;
                ctx.blank()?;
                ctx.pause_with("Press any key to push through the now-open door")?;
                Ok(Transition::to(&LAIR))
            }
            1 => {
                ctx.blank()?;
                ctx.say("The door is sealed tight. The keypad reads: LEVEL-1 REQUIRED.")?;
                ctx.blank()?;
                ctx.pause()?;
                Ok(Transition::to(&HALL))
            }
            2 => {
                take_once(ctx, KEYCARD);
                ctx.blank()?;
                ctx.say(
                    "You carefully remove the Level-1 Keycard from the guard's rig. \
                     It's sticky with gore, but it looks functional.",
                )?;
                ctx.blank()?;
                ctx.pause()?;
                Ok(Transition::to(&HALL))
            }
            _ => {
                view_inventory(ctx)?;
                Ok(Transition::to(&HALL))
            }
        }
    }
}

const LAIR_TEXT: &str = "\
# B-0B'S NEST -SUBJECT CONTAINMENT

The chamber beyond the heavy door is vast and battered. Twisted metal and torn
lab coats have been fashioned into a nest around a single massive shape.
Every inch of the floor is caked in dark, congealed blood.

At the center of the nest lies **B-0B**, a hulking mass of corrupted flesh and
bone. The creature is breathing, deep and wet, a low rumble like a dying engine.

Something glows on a cord around its neck: an **Exit Gate Access Module**.
To the EAST is a ransacked armory. To the WEST is the hallway you came from.
To the SOUTH is a sealed exit gate.. the final way out (locked).";

impl Scene for Lair {
    fn id(&self) -> &'static str {
        "lair"
    }

    fn run(&self, ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
        ctx.clear()?;
        ctx.narrate(LAIR_TEXT)?;
        ctx.blank()?;

        let choices = [
            "Go West (back to hallway)",
            "Go East (search the armory)",
            "Go South (toward the exit gate)",
            "Attack B-0B",
            "View Inventory",
        ];
        match ctx.choose(&choices, &[])? {
            0 => Ok(Transition::to(&HALL)),
            1 => Ok(Transition::to(&ARMORY)),
            2 if ctx.inventory().has(ACCESS_MODULE) => {
                ctx.blank()?;
                ctx.say(
                    "With the Access Module in hand, you step to the exit gate and insert it.",
                )?;
                ctx.blank()?;
                ctx.pause_with("Press any key to use the module and open the gate")?;
                Ok(Transition::to(&ESCAPED_GATE))
            }
            2 => {
                ctx.blank()?;
                ctx.say(
                    "The exit gate is locked and sealed shut. The module around B-0B's \
                     neck is the only thing that will operate it.",
                )?;
                ctx.blank()?;
                ctx.pause()?;
                Ok(Transition::to(&LAIR))
            }
            3 => Ok(Transition::to(&ASSAULT)),
            _ => {
                view_inventory(ctx)?;
                Ok(Transition::to(&LAIR))
            }
        }
    }
}

const ARMORY_TEXT: &str = "\
# ARMORY -BROKEN STORAGE ROOM

Lockers lie open and equipment is strewn across the room. A few lockers
have been smashed beyond recognition. Blood prints lead out toward the lair.";

impl Scene for Armory {
    fn id(&self) -> &'static str {
        "armory"
    }

    fn run(&self, ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
        ctx.clear()?;

        let has_spear = ctx.inventory().has(PIPE_SPEAR);

        ctx.narrate(ARMORY_TEXT)?;
        ctx.blank()?;
        if has_spear {
            ctx.say(
                "The locker you pried the pipe from hangs open, its hinges bent and \
                 flecked with rust.",
            )?;
        } else {
            ctx.say(
                "Propped among the wreckage is a long reinforced metal pipe sharpened to a point.",
            )?;
        }
        ctx.blank()?;
        ctx.say("What do you want to do?")?;

        let choices = [
            "Go West back to B-0B's lair",
            "Pick up the Pipe Spear",
            "View Inventory",
        ];
        let hidden: &[usize] = if has_spear { &[1] } else { &[] };

        match ctx.choose(&choices, hidden)? {
            0 => Ok(Transition::to(&LAIR)),
            1 => {
                take_once(ctx, PIPE_SPEAR);
                ctx.blank()?;
                ctx.say(
                    "You pry the pipe from a locker. It feels heavy and solid -brutal but \
                     effective. You test the balance. The tip is sharp enough to pierce \
                     flesh and bone.",
                )?;
                ctx.blank()?;
                ctx.pause()?;
                Ok(Transition::to(&ARMORY))
            }
            _ => {
                view_inventory(ctx)?;
                Ok(Transition::to(&ARMORY))
            }
        }
    }
}

const ASSAULT_TEXT: &str = "\
# ASSAULT ON B-0B

You creep into the center of the nest. The beast's breath fogs the air.
Every second you hesitate risks it turning and noticing you.

Make your attack count.";

const ASSAULT_WIN: &str = "\
You plant your feet and jab the Pipe Spear with everything you have directly
into one of B-0B's eyes. The shaft punches through flesh and bone. The creature
howls -a wet, ungodly sound. It lashes out wildly, sweeping an arm and smashing
metal tables. The nest collapses into a storm of scrap metal and cloth.

You keep driving the spear, again and again, targeting its neck and exposed
gaps where bone shows through the rotted skin. Finally, with a grinding
rattle, B-0B's legs give out. It collapses with an earthquake-sized thud,
claws scrabbling uselessly at the floor.

The module around its neck, cracked and sparking, hangs within reach.";

const PURGE_TEXT: &str = "\
A blaring alarm shrieks somewhere in the facility: **FACILITY PURGE INITIATED**.
Red lights strobe. Somewhere above, mechanisms begin the process of
sealing and sterilizing entire wings.

You have only moments before automatic systems lock down the exit or worse.";

impl Scene for Assault {
    fn id(&self) -> &'static str {
        "assault"
    }

    fn run(&self, ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
        ctx.clear()?;
        ctx.narrate(ASSAULT_TEXT)?;
        ctx.blank()?;

        if !ctx.inventory().has(PIPE_SPEAR) {
            return Ok(Transition::to(&DIED_BARE_HANDS));
        }

        ctx.narrate(ASSAULT_WIN)?;
        ctx.blank()?;
        take_once(ctx, ACCESS_MODULE);
        ctx.say("You tear the glowing Access Module free from the cord around its neck.")?;
        ctx.blank()?;
        ctx.pause_with("Press any key to catch your breath as alarms flare back to life.")?;

        ctx.blank()?;
        ctx.narrate(PURGE_TEXT)?;
        ctx.blank()?;
        ctx.pause_with("Press any key to run for the exit gate")?;
        Ok(Transition::to(&SURFACE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rf_engine::{SceneDriver, ScriptedPresenter, Session};

    fn step(
        scene: &'static dyn Scene,
        session: Session,
        selections: &[usize],
    ) -> (Transition, Session, ScriptedPresenter) {
        let mut ui = ScriptedPresenter::new().with_selections(selections.iter().copied());
        let mut driver = SceneDriver::new(&mut ui).with_session(session);
        let transition = driver.step(scene).unwrap();
        let session = driver.into_session();
        (transition, session, ui)
    }

    #[test]
    fn intro_leads_to_cell() {
        let (next, _, ui) = step(&INTRO, Session::new(), &[]);
        assert_eq!(next.target_id(), Some("cell"));
        assert!(ui.transcript().contains("OUTBREAK: RED FACILITY"));
    }

    #[test]
    fn calling_out_changes_nothing() {
        let (next, session, ui) = step(&CELL, Session::new(), &[1]);
        assert_eq!(next.target_id(), Some("cell"));
        assert!(session.state.is_empty());
        assert!(ui.transcript().contains("Wet scratching"));
    }

    #[test]
    fn empty_inventory_is_reported() {
        let (next, _, ui) = step(&CELL, Session::new(), &[2]);
        assert_eq!(next.target_id(), Some("cell"));
        assert!(ui.transcript().contains("PLAYER INVENTORY"));
        assert!(ui.transcript().contains("*** EMPTY ***"));
    }

    #[test]
    fn sealed_door_without_keycard() {
        let (next, session, ui) = step(&HALL, Session::new(), &[1]);
        assert_eq!(next.target_id(), Some("hall"));
        assert!(!session.state.has(B0B_DOOR_OPEN));
        assert!(ui.transcript().contains("LEVEL-1 REQUIRED"));
    }

    #[test]
    fn keycard_opens_the_door_once() {
        let mut session = Session::new();
        session.inventory.add(KEYCARD);

        // The take option is hidden, so East is still visible index 1.
        let (next, session, ui) = step(&HALL, session, &[1]);
        assert_eq!(next.target_id(), Some("lair"));
        assert!(session.state.has(B0B_DOOR_OPEN));
        assert!(ui.transcript().contains("grinds and unlocks"));

        let (next, _, ui) = step(&HALL, session, &[1]);
        assert_eq!(next.target_id(), Some("lair"));
        assert!(!ui.transcript().contains("grinds and unlocks"));
        assert!(ui.transcript().contains("security door is open"));
    }

    #[test]
    fn hall_inventory_maps_past_hidden_keycard() {
        let mut session = Session::new();
        session.inventory.add(KEYCARD);

        let (next, session, ui) = step(&HALL, session, &[2]);
        assert_eq!(next.target_id(), Some("hall"));
        assert_eq!(session.inventory.len(), 1);
        assert!(ui.transcript().contains("PLAYER INVENTORY"));
    }

    #[test]
    fn lair_exits() {
        let cases = [(0, "hall"), (1, "armory"), (2, "lair"), (3, "assault"), (4, "lair")];
        for (selection, target) in cases {
            let (next, _, _) = step(&LAIR, Session::new(), &[selection]);
            assert_eq!(next.target_id(), Some(target), "selection {selection}");
        }
    }

    #[test]
    fn module_opens_the_gate() {
        let mut session = Session::new();
        session.inventory.add(ACCESS_MODULE);
        let (next, _, _) = step(&LAIR, session, &[2]);
        assert_eq!(next.target_id(), Some("escaped_gate"));
    }

    #[test]
    fn victory_takes_the_module() {
        let mut session = Session::new();
        session.inventory.add(PIPE_SPEAR);
        let (next, session, ui) = step(&ASSAULT, session, &[]);
        assert_eq!(next.target_id(), Some("surface"));
        assert_eq!(session.inventory.list(), [PIPE_SPEAR, ACCESS_MODULE]);
        assert!(ui.transcript().contains("FACILITY PURGE INITIATED"));
    }
}
