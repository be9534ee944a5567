use std::collections::HashMap;

use crate::error::{WorldError, WorldResult};
use crate::item::Item;
use crate::location::{Exit, Location, LocationDraft, LocationId};

/// The central world model. Owns every location in an arena addressed by
/// [`LocationId`] and indexed by lowercased name.
///
/// Topology is fixed at build time; the only mutation is removing an item
/// when the player takes it.
#[derive(Debug, Clone)]
pub struct World {
    locations: Vec<Location>,
    by_name: HashMap<String, LocationId>,
}

impl World {
    /// Start building a world.
    pub fn builder() -> WorldBuilder {
        WorldBuilder::default()
    }

    /// Look up a location id by name, case-insensitively.
    pub fn find(&self, name: &str) -> Option<LocationId> {
        self.by_name.get(&name.to_lowercase()).copied()
    }

    /// Get a location by id.
    pub fn get(&self, id: LocationId) -> &Location {
        &self.locations[id.0]
    }

    /// Iterate locations in authoring order.
    pub fn locations(&self) -> impl Iterator<Item = (LocationId, &Location)> {
        self.locations
            .iter()
            .enumerate()
            .map(|(index, location)| (LocationId(index), location))
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// True if the world holds no locations. Never true for a built
    /// world; the builder rejects empty worlds.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Remove an item from a location by name, case-insensitively.
    ///
    /// Returns the removed item, or `None` if no such item is present.
    pub fn take_item(&mut self, id: LocationId, name: &str) -> Option<Item> {
        self.locations[id.0].take_item(name)
    }
}

/// Accumulates location drafts and validates them into a [`World`].
#[derive(Debug, Default)]
pub struct WorldBuilder {
    drafts: Vec<LocationDraft>,
}

impl WorldBuilder {
    /// Add one location draft.
    pub fn location(mut self, draft: LocationDraft) -> Self {
        self.drafts.push(draft);
        self
    }

    /// Add every draft from an iterator (e.g. deserialized from JSON).
    pub fn locations(mut self, drafts: impl IntoIterator<Item = LocationDraft>) -> Self {
        self.drafts.extend(drafts);
        self
    }

    /// Validate the drafts and build the world.
    ///
    /// Fails on an empty world, duplicate location names, or exits whose
    /// destination names do not resolve. These are authoring bugs and
    /// should abort startup.
    pub fn build(self) -> WorldResult<World> {
        if self.drafts.is_empty() {
            return Err(WorldError::Empty);
        }

        let mut by_name = HashMap::new();
        for (index, draft) in self.drafts.iter().enumerate() {
            let previous = by_name.insert(draft.name.to_lowercase(), LocationId(index));
            if previous.is_some() {
                return Err(WorldError::DuplicateLocation(draft.name.clone()));
            }
        }

        let mut locations = Vec::with_capacity(self.drafts.len());
        for draft in self.drafts {
            let mut exits = Vec::with_capacity(draft.exits.len());
            for (verb, to) in draft.exits {
                let target = by_name.get(&to.to_lowercase()).copied().ok_or_else(|| {
                    WorldError::DanglingExit {
                        from: draft.name.clone(),
                        verb: verb.clone(),
                        to: to.clone(),
                    }
                })?;
                exits.push(Exit { verb, to: target });
            }
            locations.push(Location {
                name: draft.name,
                description: draft.description,
                exits,
                actions: draft.actions,
                items: draft.items,
            });
        }

        Ok(World { locations, by_name })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::action::ActionKind;

    fn two_room_world() -> World {
        World::builder()
            .location(
                LocationDraft::new("Gatehouse", "A cold stone gatehouse.")
                    .exit("north", "Courtyard")
                    .item("brass key"),
            )
            .location(
                LocationDraft::new("Courtyard", "An open courtyard.")
                    .exit("south", "Gatehouse")
                    .action(ActionKind::Listen, "Banners snap in the wind."),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn find_is_case_insensitive() {
        let world = two_room_world();
        let id = world.find("gatehouse").unwrap();
        assert_eq!(world.find("GATEHOUSE"), Some(id));
        assert_eq!(world.get(id).name, "Gatehouse");
        assert!(world.find("Keep").is_none());
    }

    #[test]
    fn exits_resolve_to_valid_ids() {
        let world = two_room_world();
        let gatehouse = world.find("Gatehouse").unwrap();
        let courtyard = world.find("Courtyard").unwrap();
        assert_eq!(world.get(gatehouse).exit("north"), Some(courtyard));
        assert_eq!(world.get(courtyard).exit("south"), Some(gatehouse));
    }

    #[test]
    fn take_item_moves_exactly_once() {
        let mut world = two_room_world();
        let gatehouse = world.find("Gatehouse").unwrap();

        let item = world.take_item(gatehouse, "Brass Key").unwrap();
        assert_eq!(item.name, "brass key");
        assert!(world.get(gatehouse).items().is_empty());
        assert!(world.take_item(gatehouse, "brass key").is_none());
    }

    #[test]
    fn empty_world_is_rejected() {
        assert!(matches!(World::builder().build(), Err(WorldError::Empty)));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let result = World::builder()
            .location(LocationDraft::new("Keep", "One keep."))
            .location(LocationDraft::new("keep", "Another keep."))
            .build();
        assert!(matches!(result, Err(WorldError::DuplicateLocation(name)) if name == "keep"));
    }

    #[test]
    fn dangling_exits_are_rejected() {
        let result = World::builder()
            .location(LocationDraft::new("Keep", "A keep.").exit("north", "Nowhere"))
            .build();
        match result {
            Err(WorldError::DanglingExit { from, verb, to }) => {
                assert_eq!(from, "Keep");
                assert_eq!(verb, "north");
                assert_eq!(to, "Nowhere");
            }
            other => panic!("expected dangling exit error, got {other:?}"),
        }
    }

    #[test]
    fn drafts_load_from_json() {
        let json = r#"[
            {
                "name": "Gatehouse",
                "description": "A cold stone gatehouse.",
                "exits": [["north", "Courtyard"]],
                "items": [{ "name": "brass key" }]
            },
            {
                "name": "Courtyard",
                "description": "An open courtyard.",
                "actions": [{ "kind": "listen", "message": "Banners snap." }]
            }
        ]"#;

        let drafts: Vec<LocationDraft> = serde_json::from_str(json).unwrap();
        let world = World::builder().locations(drafts).build().unwrap();

        assert_eq!(world.len(), 2);
        let courtyard = world.find("Courtyard").unwrap();
        let action = world.get(courtyard).action(ActionKind::Listen).unwrap();
        assert_eq!(action.message, "Banners snap.");
    }

    proptest! {
        #[test]
        fn internally_consistent_exits_always_build(
            names in proptest::collection::hash_set("[a-z]{1,12}", 1..8),
        ) {
            let names: Vec<String> = names.into_iter().collect();
            let mut builder = World::builder();
            for (index, name) in names.iter().enumerate() {
                // Ring topology: every exit targets a member name.
                let next = &names[(index + 1) % names.len()];
                builder = builder.location(
                    LocationDraft::new(name, "Somewhere.").exit("onward", next),
                );
            }
            let world = builder.build().unwrap();
            prop_assert_eq!(world.len(), names.len());
        }

        #[test]
        fn an_unresolved_exit_never_builds(
            names in proptest::collection::hash_set("[a-z]{1,12}", 1..8),
        ) {
            let mut builder = World::builder();
            for name in &names {
                // "-absent" cannot collide with the [a-z]+ member names.
                builder = builder.location(
                    LocationDraft::new(name, "Somewhere.").exit("out", format!("{name}-absent")),
                );
            }
            let is_dangling = matches!(
                builder.build(),
                Err(WorldError::DanglingExit { .. })
            );
            prop_assert!(is_dangling);
        }
    }
}
