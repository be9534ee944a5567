//! Core types for Thornwall: locations, items, actions, and the world model.
//!
//! This crate defines the static graph that the fiction engine explores.
//! Worlds are authored as [`LocationDraft`]s — in code or deserialized from
//! JSON — and validated into an arena-backed [`World`] whose exits are
//! resolved to [`LocationId`]s up front, so a built world cannot contain a
//! dangling exit.

/// Contextual flavor actions attached to locations.
pub mod action;
/// Error types for world construction.
pub mod error;
/// Items placed in locations and carried by the player.
pub mod item;
/// Location nodes, exits, and the draft authoring form.
pub mod location;
/// The world model and its builder.
pub mod world;

pub use action::{Action, ActionKind};
pub use error::{WorldError, WorldResult};
pub use item::Item;
pub use location::{Exit, Location, LocationDraft, LocationId};
pub use world::{World, WorldBuilder};
