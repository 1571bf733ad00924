//! Identity newtypes for cards, prompts, and players.
//!
//! Ids are assigned by whatever backs the lookup collaborators (a database,
//! a fixture file, a `MemoryStore`). The engine never interprets them - they
//! are opaque identifiers used for equality and lookup.

use serde::{Deserialize, Serialize};

/// Identifier for a response card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u64);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PromptId(pub u64);

impl PromptId {
    /// Create a new prompt ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PromptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_basics() {
        let card = CardId::new(7);
        assert_eq!(card.raw(), 7);
        assert_eq!(format!("{}", card), "7");

        let player = PlayerId::new(3);
        assert_eq!(player.raw(), 3);
        assert_ne!(PlayerId::new(3), PlayerId::new(4));
    }

    #[test]
    fn test_id_serde() {
        let id = PromptId::new(12);
        let json = serde_json::to_string(&id).unwrap();
        let back: PromptId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
