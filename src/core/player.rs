//! Players and their session-scoped state.
//!
//! A `Player` is a durable identity (id, name) plus transient per-session
//! state: the hand and the score. The hand lives only for the duration of a
//! session - `reset` clears both before a new session starts.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::DEFAULT_HAND_CAPACITY;
use super::ids::PlayerId;
use crate::cards::Card;

/// A player's hand: cards in draw order, capped at the session's capacity.
///
/// Inline storage covers the default capacity, so filling a hand does not
/// allocate.
pub type Hand = SmallVec<[Card; DEFAULT_HAND_CAPACITY]>;

/// A participant in a game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Durable identity, assigned by the player directory.
    pub id: PlayerId,

    /// Display name.
    pub name: String,

    /// Cards held this session, in draw order.
    #[serde(default)]
    pub hand: Hand,

    /// Rounds won this session.
    #[serde(default)]
    pub score: u32,
}

impl Player {
    /// Create a player with an empty hand and zero score.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Hand::new(),
            score: 0,
        }
    }

    /// Clear the transient session state (hand and score).
    ///
    /// Called by session setup so a player carried over from an earlier
    /// session starts fresh.
    pub fn reset(&mut self) {
        self.hand.clear();
        self.score = 0;
    }
}
