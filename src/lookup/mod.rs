//! External lookup collaborators.
//!
//! The engine never owns durable players, cards, or prompts; it fetches them
//! through these three traits at session start. An embedding application
//! backs them with its storage layer; tests and small embeddings can use the
//! bundled [`MemoryStore`].

pub mod memory;

pub use memory::MemoryStore;

use crate::cards::{Card, Prompt};
use crate::core::ids::PlayerId;
use crate::core::player::Player;

/// Existence lookup for players.
pub trait PlayerDirectory {
    /// Resolve a player id, returning the player's durable record.
    ///
    /// Returns `None` for unknown ids; the engine turns that into
    /// [`GameError::UnknownPlayer`](crate::GameError::UnknownPlayer) and
    /// aborts setup.
    fn find_player_by_id(&self, id: PlayerId) -> Option<Player>;
}

/// Bulk source of response cards.
pub trait CardSource {
    /// Load every card available to a new session, custom cards included.
    fn load_all_cards(&self) -> Vec<Card>;
}

/// Bulk source of prompts.
pub trait PromptSource {
    /// Load every prompt available to a new session.
    fn load_all_prompts(&self) -> Vec<Prompt>;
}
