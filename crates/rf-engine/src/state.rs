//! Story flags and inventory shared by every scene.

/// One-time story milestones.
///
/// Flags are only ever added; there is no way to clear one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    /// Flags in the order they were first set.
    flags: Vec<String>,
}

impl GameState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a flag has been set.
    pub fn has(&self, flag: &str) -> bool {
        self.flags.iter().any(|f| f == flag)
    }

    /// Set a flag. Setting it again has no effect.
    pub fn set(&mut self, flag: impl Into<String>) {
        let flag = flag.into();
        if !self.has(&flag) {
            self.flags.push(flag);
        }
    }

    /// Iterate over flags in the order they were set.
    pub fn flags(&self) -> impl Iterator<Item = &str> {
        self.flags.iter().map(String::as_str)
    }

    /// Number of flags set.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether no flag has been set yet.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

/// Items the player carries, in acquisition order.
///
/// `add` does not deduplicate. Scenes check [`Inventory::has`] before
/// handing out an item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<String>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the player carries an item.
    pub fn has(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// Append an item.
    pub fn add(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// All items in acquisition order.
    pub fn list(&self) -> &[String] {
        &self.items
    }

    /// Number of carried items, duplicates included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the player carries nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The mutable state of one playthrough.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Story flags.
    pub state: GameState,
    /// Carried items.
    pub inventory: Inventory,
}

impl Session {
    /// Create a fresh session with no flags and an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }
}
