//! Command parsing for player input.
//!
//! The parser is deliberately thin: it tokenizes on whitespace,
//! lowercases the first token into a verb, and rejoins the rest into a
//! single argument. It never consults the world — whether a verb is
//! legal depends on where the player is standing, so that judgement
//! belongs to the dispatcher.

mod command;

pub use command::{Command, parse};
