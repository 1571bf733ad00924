//! In-memory backing store for the lookup traits.

use rustc_hash::FxHashMap;

use super::{CardSource, PlayerDirectory, PromptSource};
use crate::cards::{Card, Prompt};
use crate::core::ids::{CardId, PlayerId, PromptId};
use crate::core::player::Player;

/// An in-memory player directory, card source, and prompt source.
///
/// Ids are assigned sequentially at registration, standing in for a storage
/// layer's generated keys. Nothing is persisted.
///
/// ## Example
///
/// ```
/// use prompt_party::lookup::{MemoryStore, PlayerDirectory};
///
/// let mut store = MemoryStore::new();
/// let ada = store.add_player("Ada");
///
/// let found = store.find_player_by_id(ada).unwrap();
/// assert_eq!(found.name, "Ada");
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    players: FxHashMap<PlayerId, Player>,
    cards: Vec<Card>,
    prompts: Vec<Prompt>,
    next_player: u64,
    next_card: u64,
    next_prompt: u64,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a player and return the assigned id.
    pub fn add_player(&mut self, name: impl Into<String>) -> PlayerId {
        self.next_player += 1;
        let id = PlayerId::new(self.next_player);
        self.players.insert(id, Player::new(id, name));
        id
    }

    /// Register a standard response card and return the assigned id.
    pub fn add_card(&mut self, text: impl Into<String>) -> CardId {
        self.next_card += 1;
        let id = CardId::new(self.next_card);
        self.cards.push(Card::new(id, text));
        id
    }

    /// Register a custom, player-submitted card and return the assigned id.
    ///
    /// Custom cards enter the same deck as standard cards.
    pub fn add_custom_card(&mut self, text: impl Into<String>, owner: PlayerId) -> CardId {
        self.next_card += 1;
        let id = CardId::new(self.next_card);
        self.cards.push(Card::custom(id, text, owner));
        id
    }

    /// Register a prompt and return the assigned id.
    pub fn add_prompt(&mut self, text: impl Into<String>) -> PromptId {
        self.next_prompt += 1;
        let id = PromptId::new(self.next_prompt);
        self.prompts.push(Prompt::new(id, text));
        id
    }

    /// Number of registered cards.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Number of registered prompts.
    #[must_use]
    pub fn prompt_count(&self) -> usize {
        self.prompts.len()
    }
}

impl PlayerDirectory for MemoryStore {
    fn find_player_by_id(&self, id: PlayerId) -> Option<Player> {
        self.players.get(&id).cloned()
    }
}

impl CardSource for MemoryStore {
    fn load_all_cards(&self) -> Vec<Card> {
        self.cards.clone()
    }
}

impl PromptSource for MemoryStore {
    fn load_all_prompts(&self) -> Vec<Prompt> {
        self.prompts.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential_and_distinct() {
        let mut store = MemoryStore::new();
        let a = store.add_player("Ada");
        let b = store.add_player("Grace");
        assert_ne!(a, b);
    }

    #[test]
    fn test_unknown_player_is_none() {
        let store = MemoryStore::new();
        assert!(store.find_player_by_id(PlayerId::new(99)).is_none());
    }

    #[test]
    fn test_custom_cards_join_the_deck() {
        let mut store = MemoryStore::new();
        let ada = store.add_player("Ada");
        store.add_card("a standard card");
        store.add_custom_card("an inside joke", ada);

        let cards = store.load_all_cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards.iter().filter(|c| c.is_custom()).count(), 1);
    }
}
