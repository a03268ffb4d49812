//! Behaviour shared by several scenes.

use rf_engine::presenter::DisplayOptions;
use rf_engine::{EngineResult, SceneContext};

/// Print the player's inventory as a hyphenated list.
pub(crate) fn show_inventory(ctx: &mut SceneContext<'_>) -> EngineResult<()> {
    ctx.blank()?;
    ctx.say("PLAYER INVENTORY")?;
    ctx.blank()?;
    if ctx.inventory().is_empty() {
        ctx.say("*** EMPTY ***")?;
    } else {
        let items: Vec<String> = ctx.inventory().list().to_vec();
        let items: Vec<&str> = items.iter().map(String::as_str).collect();
        ctx.list(&items, &DisplayOptions::new().with_prefix(" - ").with_indent("   "))?;
    }
    ctx.blank()
}

/// Show the inventory and wait for the player.
pub(crate) fn view_inventory(ctx: &mut SceneContext<'_>) -> EngineResult<()> {
    ctx.blank()?;
    show_inventory(ctx)?;
    ctx.blank()?;
    ctx.pause()
}

/// Give the player an item unless they already carry it.
///
/// Returns whether the item was added.
pub(crate) fn take_once(ctx: &mut SceneContext<'_>, item: &str) -> bool {
    if ctx.inventory().has(item) {
        return false;
    }
    ctx.inventory_mut().add(item);
    log::debug!("picked up {item}");
    true
}
