use std::fmt;

use serde::{Deserialize, Serialize};

/// A carryable object. Its identity is its name, compared
/// case-insensitively; an item taken from a location and the same-named
/// item in the inventory are the same item, moved rather than copied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name, e.g. "iron dagger".
    pub name: String,
}

impl Item {
    /// Create an item.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Case-insensitive name comparison.
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_ignores_case() {
        let dagger = Item::new("iron dagger");
        assert!(dagger.matches("iron dagger"));
        assert!(dagger.matches("Iron Dagger"));
        assert!(dagger.matches("IRON DAGGER"));
        assert!(!dagger.matches("iron sword"));
    }
}
