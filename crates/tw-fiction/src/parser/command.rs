/// A parsed player command.
///
/// Parsing never fails. Verbs outside the fixed vocabulary come back as
/// [`Command::Other`] so the dispatcher can try them against the current
/// location's exit table first — the movement grammar is partly
/// data-driven.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Empty or all-whitespace input.
    Empty,
    /// One of the fixed movement verbs.
    Move {
        /// The lowercased movement verb.
        direction: String,
    },
    /// A contextual action verb (listen, look, investigate, feel).
    Act {
        /// The lowercased verb as typed.
        verb: String,
    },
    /// Pick up an item.
    Take {
        /// The item name, or `None` when no argument was given.
        item: Option<String>,
    },
    /// Put on an item.
    Wear {
        /// The item name, or `None` when no argument was given.
        item: Option<String>,
    },
    /// List held items.
    Inventory,
    /// Diagnostic: report the current location name verbatim.
    Lost,
    /// Show exits, actions, and general commands.
    Help,
    /// Anything else. May still name an exit of the current location.
    Other {
        /// The lowercased verb.
        verb: String,
    },
}

/// The fixed movement vocabulary. Exit tables may extend it.
const MOVE_VERBS: &[&str] = &[
    "north", "south", "east", "west", "approach", "retreat", "bargain", "accept", "reject",
    "cross",
];

/// Contextual action verbs the dispatcher maps onto action kinds.
const ACTION_VERBS: &[&str] = &["listen", "look", "investigate", "feel"];

/// Parse raw player input into a [`Command`].
///
/// The first whitespace token, lowercased, is the verb; the remaining
/// tokens are rejoined with single spaces as the argument, preserving
/// their case (item matching is case-insensitive downstream).
pub fn parse(input: &str) -> Command {
    let mut words = input.split_whitespace();
    let Some(first) = words.next() else {
        return Command::Empty;
    };
    let verb = first.to_lowercase();
    let rest = words.collect::<Vec<_>>().join(" ");
    let argument = if rest.is_empty() { None } else { Some(rest) };

    if MOVE_VERBS.contains(&verb.as_str()) {
        return Command::Move { direction: verb };
    }
    if ACTION_VERBS.contains(&verb.as_str()) {
        return Command::Act { verb };
    }

    match verb.as_str() {
        "take" => Command::Take { item: argument },
        "wear" => Command::Wear { item: argument },
        "inventory" => Command::Inventory,
        "lost" => Command::Lost,
        "help" => Command::Help,
        _ => Command::Other { verb },
    }
}
