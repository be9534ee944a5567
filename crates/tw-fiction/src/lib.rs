//! Interactive fiction engine for Thornwall.
//!
//! Wires the world model from `tw-core` to a command parser, a player
//! state, and the session state machine that turns raw input into
//! narration and win/lose outcomes. All text flows through the
//! [`Narrator`] contract; the engine itself never prints.

/// Error types for the fiction engine.
pub mod error;
/// The narrator contract and the bundled recording implementation.
pub mod narrator;
/// Command parsing for player input.
pub mod parser;
/// Player state management.
pub mod player;
/// Scenario rules: designated locations and their prose.
pub mod scenario;
/// The session dispatcher and game state machine.
pub mod session;
/// The bundled "A Court of Thorns and Roses" adventure.
pub mod story;

pub use error::{FictionError, FictionResult};
pub use narrator::{Line, Narrator, Tint, Transcript};
pub use parser::{Command, parse};
pub use player::PlayerState;
pub use scenario::{BargainRule, BeastRule, CrossingRule, Scenario, WardRule};
pub use session::{Ending, Outcome, Session};
