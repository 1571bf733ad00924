//! Response cards.

use serde::{Deserialize, Serialize};

use crate::core::ids::{CardId, PlayerId};

/// A response card.
///
/// Immutable once created. Owned by the deck until dealt, then by a player's
/// hand. Custom, player-submitted cards carry the submitting player in
/// `owner`; standard deck cards have `owner: None`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique identity within a card source.
    pub id: CardId,

    /// The response text shown when the card is played.
    pub text: String,

    /// The player who submitted this card, if it is a custom card.
    pub owner: Option<PlayerId>,
}

impl Card {
    /// Create a standard deck card.
    #[must_use]
    pub fn new(id: CardId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            owner: None,
        }
    }

    /// Create a custom card submitted by a player.
    #[must_use]
    pub fn custom(id: CardId, text: impl Into<String>, owner: PlayerId) -> Self {
        Self {
            id,
            text: text.into(),
            owner: Some(owner),
        }
    }

    /// Check whether this is a custom (player-submitted) card.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.owner.is_some()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
