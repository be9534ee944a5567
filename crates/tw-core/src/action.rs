use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a contextual action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Ambient behavior; never reachable from player input.
    Idle,
    /// Triggered by "listen".
    Listen,
    /// Triggered by "look".
    Look,
    /// Triggered by "investigate".
    Investigate,
    /// Triggered by "feel".
    Feel,
}

impl ActionKind {
    /// Parse a kind from a verb string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "idle" => Some(Self::Idle),
            "listen" => Some(Self::Listen),
            "look" => Some(Self::Look),
            "investigate" => Some(Self::Investigate),
            "feel" => Some(Self::Feel),
            _ => None,
        }
    }

    /// The player-facing verb for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Listen => "listen",
            Self::Look => "look",
            Self::Investigate => "investigate",
            Self::Feel => "feel",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A flavor-text response to a contextual verb at a location.
///
/// Actions are immutable once the world is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Which verb triggers this action.
    pub kind: ActionKind,
    /// The narration emitted when triggered.
    pub message: String,
}

impl Action {
    /// Create an action.
    pub fn new(kind: ActionKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(ActionKind::parse("listen"), Some(ActionKind::Listen));
        assert_eq!(ActionKind::parse("LISTEN"), Some(ActionKind::Listen));
        assert_eq!(ActionKind::parse("Feel"), Some(ActionKind::Feel));
        assert_eq!(ActionKind::parse("dance"), None);
    }

    #[test]
    fn name_round_trips() {
        for kind in [
            ActionKind::Idle,
            ActionKind::Listen,
            ActionKind::Look,
            ActionKind::Investigate,
            ActionKind::Feel,
        ] {
            assert_eq!(ActionKind::parse(kind.name()), Some(kind));
        }
    }
}
