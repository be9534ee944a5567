//! Scenario rules: the designated locations and prose that turn a world
//! graph into a playable adventure.
//!
//! Everything here is data. The session validates every location name
//! and trigger verb against the world it is wired to, so a scenario
//! that disagrees with its world fails at startup rather than mid-game.

use crate::narrator::Line;

/// One complete adventure: where it starts, how it can be won or lost,
/// and the prose for every special outcome.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Display title.
    pub title: String,
    /// Starting location name.
    pub start: String,
    /// The goal location; reaching it wins the game.
    pub goal: String,
    /// Narrated by `start()`, before the first command.
    pub opening: Vec<Line>,
    /// Narrated when the player wins.
    pub victory: Vec<Line>,
    /// The bargain rule.
    pub bargain: BargainRule,
    /// The token-gated crossing rule.
    pub crossing: CrossingRule,
    /// The beast-encounter rule.
    pub beast: BeastRule,
    /// The ward rule consulted by the `wear` verb.
    pub ward: WardRule,
}

/// Sealing a bargain: warded players pass through, unprotected players
/// are lost.
#[derive(Debug, Clone)]
pub struct BargainRule {
    /// Where the bargain can be struck.
    pub location: String,
    /// The exit verb that seals it.
    pub trigger: String,
    /// Narrated when the ward flag is set; the player then wins.
    pub success: Vec<Line>,
    /// Narrated when unprotected; the game is lost.
    pub failure: Vec<Line>,
}

/// Crossing a gate that only opens for a token holder.
#[derive(Debug, Clone)]
pub struct CrossingRule {
    /// The gate location.
    pub location: String,
    /// The exit verb that attempts the crossing.
    pub trigger: String,
    /// The item that opens the way, matched case-insensitively.
    pub token: String,
    /// Narrated when the token is held; the player then wins.
    pub success: Line,
    /// Narrated otherwise; the player stays put and may try again.
    pub failure: Line,
}

/// A guarded destination: entering it unarmed is fatal.
#[derive(Debug, Clone)]
pub struct BeastRule {
    /// The guarded location.
    pub location: String,
    /// The weapon that wins the fight, matched case-insensitively.
    pub weapon: String,
    /// Narrated on arrival, before the fight resolves.
    pub ambush: Line,
    /// Narrated when armed; the player steps in and play continues.
    pub victory: Line,
    /// Narrated when unarmed; the game is lost.
    pub defeat: Vec<Line>,
}

/// Which item the `wear` verb accepts and what wearing it sets.
#[derive(Debug, Clone)]
pub struct WardRule {
    /// The wearable item, matched case-insensitively.
    pub item: String,
    /// The flag set once the item is worn.
    pub flag: String,
    /// Narrated when the item is put on.
    pub donned: Line,
}
