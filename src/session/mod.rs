//! Game sessions and the operations that run inside them.
//!
//! A [`Session`] owns every piece of mutable game state: the participating
//! players (with their transient hands and scores), the card deck, the
//! prompt pool, the current judge, the round counter, the running top score,
//! and the RNG. Nothing is shared between sessions - two sessions running in
//! the same process cannot interfere with each other's draws or scores.

pub mod hand;
pub mod round;
pub mod score;

pub use hand::fill_hand;
pub use round::{play_round, select_winner, Round};
pub use score::{apply_score, next_judge};

use crate::cards::{Card, Prompt};
use crate::core::config::GameConfig;
use crate::core::ids::PlayerId;
use crate::core::player::Player;
use crate::core::rng::GameRng;
use crate::pool::Pool;

/// One game session's complete in-memory state.
///
/// Built by [`GameEngine::new_session`](crate::GameEngine::new_session) and
/// driven to completion by
/// [`GameEngine::run_session`](crate::GameEngine::run_session).
#[derive(Clone, Debug)]
pub struct Session {
    pub(crate) config: GameConfig,
    pub(crate) players: Vec<Player>,
    pub(crate) deck: Pool<Card>,
    pub(crate) prompts: Pool<Prompt>,
    /// Current judge. `None` until the game loop picks the first judge.
    pub(crate) judge: Option<PlayerId>,
    /// Current round number, starting at 1.
    pub(crate) round: u32,
    /// Highest score among the players.
    pub(crate) top_score: u32,
    pub(crate) rng: GameRng,
}

impl Session {
    pub(crate) fn new(
        config: GameConfig,
        players: Vec<Player>,
        deck: Pool<Card>,
        prompts: Pool<Prompt>,
        rng: GameRng,
    ) -> Self {
        Self {
            config,
            players,
            deck,
            prompts,
            judge: None,
            round: 1,
            top_score: 0,
            rng,
        }
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The participating players, in join order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The current judge, once the game loop has picked one.
    #[must_use]
    pub fn judge(&self) -> Option<PlayerId> {
        self.judge
    }

    /// The current round number (1-based).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// The highest score among the players.
    #[must_use]
    pub fn top_score(&self) -> u32 {
        self.top_score
    }

    /// The undealt card deck.
    #[must_use]
    pub fn deck(&self) -> &Pool<Card> {
        &self.deck
    }

    /// The undrawn prompt pool.
    #[must_use]
    pub fn prompts(&self) -> &Pool<Prompt> {
        &self.prompts
    }
}
