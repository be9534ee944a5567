use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionKind};
use crate::item::Item;

/// Index of a location in its owning [`World`](crate::World).
///
/// Ids are issued by [`WorldBuilder::build`](crate::WorldBuilder::build)
/// and stay valid for the lifetime of the world that produced them. The
/// default id addresses the first-authored location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationId(pub(crate) usize);

/// A named transition to another location, resolved at build time.
#[derive(Debug, Clone)]
pub struct Exit {
    /// The verb that triggers this exit ("north", "cross", ...).
    pub verb: String,
    /// The destination.
    pub to: LocationId,
}

/// A node in the navigable graph.
///
/// Topology is immutable once the world is built; only the item set
/// changes, and only through [`World::take_item`](crate::World::take_item).
#[derive(Debug, Clone)]
pub struct Location {
    /// Unique display name, also the lookup key.
    pub name: String,
    /// Prose shown when the player arrives here.
    pub description: String,
    pub(crate) exits: Vec<Exit>,
    pub(crate) actions: Vec<Action>,
    pub(crate) items: Vec<Item>,
}

impl Location {
    /// Find the exit triggered by `verb`, case-insensitively.
    pub fn exit(&self, verb: &str) -> Option<LocationId> {
        self.exits
            .iter()
            .find(|e| e.verb.eq_ignore_ascii_case(verb))
            .map(|e| e.to)
    }

    /// Exits in authoring order.
    pub fn exits(&self) -> &[Exit] {
        &self.exits
    }

    /// The first action of the given kind, if any.
    ///
    /// Duplicate kinds are tolerated; the first definition wins.
    pub fn action(&self, kind: ActionKind) -> Option<&Action> {
        self.actions.iter().find(|a| a.kind == kind)
    }

    /// Actions in authoring order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Items currently present, in authoring order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub(crate) fn take_item(&mut self, name: &str) -> Option<Item> {
        let index = self.items.iter().position(|i| i.matches(name))?;
        Some(self.items.remove(index))
    }
}

/// The authoring form of a [`Location`]: exits still reference their
/// destinations by name. Drafts are assembled in code or deserialized
/// from JSON, then validated by [`WorldBuilder`](crate::WorldBuilder).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDraft {
    /// Unique display name.
    pub name: String,
    /// Prose shown on arrival.
    pub description: String,
    /// (verb, destination name) pairs, in authoring order.
    #[serde(default)]
    pub exits: Vec<(String, String)>,
    /// Contextual actions.
    #[serde(default)]
    pub actions: Vec<Action>,
    /// Items initially present.
    #[serde(default)]
    pub items: Vec<Item>,
}

impl LocationDraft {
    /// Start a draft with a name and arrival description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            exits: Vec::new(),
            actions: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Add an exit leading to the named location.
    pub fn exit(mut self, verb: impl Into<String>, to: impl Into<String>) -> Self {
        self.exits.push((verb.into(), to.into()));
        self
    }

    /// Add a contextual action.
    pub fn action(mut self, kind: ActionKind, message: impl Into<String>) -> Self {
        self.actions.push(Action::new(kind, message));
        self
    }

    /// Place an item here.
    pub fn item(mut self, name: impl Into<String>) -> Self {
        self.items.push(Item::new(name));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clearing() -> Location {
        Location {
            name: "Clearing".to_string(),
            description: "A quiet clearing.".to_string(),
            exits: vec![
                Exit {
                    verb: "north".to_string(),
                    to: LocationId(1),
                },
                Exit {
                    verb: "cross".to_string(),
                    to: LocationId(2),
                },
            ],
            actions: vec![
                Action::new(ActionKind::Listen, "Leaves rustle."),
                Action::new(ActionKind::Listen, "A second listen, never heard."),
                Action::new(ActionKind::Feel, "The air is cool."),
            ],
            items: vec![Item::new("iron dagger")],
        }
    }

    #[test]
    fn exit_lookup_is_case_insensitive() {
        let loc = clearing();
        assert_eq!(loc.exit("north"), Some(LocationId(1)));
        assert_eq!(loc.exit("NORTH"), Some(LocationId(1)));
        assert_eq!(loc.exit("Cross"), Some(LocationId(2)));
        assert_eq!(loc.exit("south"), None);
    }

    #[test]
    fn first_action_of_a_kind_wins() {
        let loc = clearing();
        let action = loc.action(ActionKind::Listen).unwrap();
        assert_eq!(action.message, "Leaves rustle.");
        assert!(loc.action(ActionKind::Look).is_none());
    }

    #[test]
    fn take_item_removes_first_match() {
        let mut loc = clearing();
        let item = loc.take_item("Iron Dagger").unwrap();
        assert_eq!(item.name, "iron dagger");
        assert!(loc.items().is_empty());
        assert!(loc.take_item("iron dagger").is_none());
    }

    #[test]
    fn draft_builder_accumulates() {
        let draft = LocationDraft::new("Gate", "A tall gate.")
            .exit("cross", "Haven")
            .action(ActionKind::Look, "Iron bars, rusted.")
            .item("bone token");

        assert_eq!(draft.name, "Gate");
        assert_eq!(draft.exits, vec![("cross".to_string(), "Haven".to_string())]);
        assert_eq!(draft.actions.len(), 1);
        assert_eq!(draft.items, vec![Item::new("bone token")]);
    }
}
