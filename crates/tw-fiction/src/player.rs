//! Player state management.

use std::collections::HashMap;

use tw_core::{Item, LocationId};

/// The player's mutable state: where they stand, what they carry, and
/// which narrative flags are set.
///
/// Mutated only by the session, one command at a time. Item-derived
/// conditions (holding the token, holding the dagger) are computed on
/// demand with [`holds`](PlayerState::holds) rather than cached, so
/// they can never drift out of sync with the inventory.
#[derive(Debug, Clone)]
pub struct PlayerState {
    /// The player's current location. Always valid for the session's
    /// world: ids are only ever taken from it.
    pub location: LocationId,
    /// Held items, in the order they were taken.
    pub inventory: Vec<Item>,
    flags: HashMap<String, bool>,
}

impl PlayerState {
    /// Create a player at the given location with nothing held.
    pub fn new(location: LocationId) -> Self {
        Self {
            location,
            inventory: Vec::new(),
            flags: HashMap::new(),
        }
    }

    /// True if a narrative flag is set.
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    /// Set or clear a narrative flag.
    pub fn set_flag(&mut self, key: impl Into<String>, value: bool) {
        self.flags.insert(key.into(), value);
    }

    /// True if the inventory holds an item with this name,
    /// case-insensitively.
    pub fn holds(&self, name: &str) -> bool {
        self.inventory.iter().any(|item| item.matches(name))
    }

    /// Find a held item by name, case-insensitively.
    pub fn held(&self, name: &str) -> Option<&Item> {
        self.inventory.iter().find(|item| item.matches(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> PlayerState {
        PlayerState::new(LocationId::default())
    }

    #[test]
    fn starts_empty() {
        let state = player();
        assert!(state.inventory.is_empty());
        assert!(!state.has_flag("wearing amulet"));
    }

    #[test]
    fn flags_set_and_clear() {
        let mut state = player();
        state.set_flag("wearing amulet", true);
        assert!(state.has_flag("wearing amulet"));
        state.set_flag("wearing amulet", false);
        assert!(!state.has_flag("wearing amulet"));
    }

    #[test]
    fn holds_is_derived_and_case_insensitive() {
        let mut state = player();
        assert!(!state.holds("faerie token"));

        state.inventory.push(Item::new("Faerie Token"));
        assert!(state.holds("faerie token"));
        assert!(state.holds("FAERIE TOKEN"));
        assert_eq!(state.held("faerie token").map(|i| i.name.as_str()), Some("Faerie Token"));

        state.inventory.clear();
        assert!(!state.holds("faerie token"));
    }
}
