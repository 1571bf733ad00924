//! # prompt-party
//!
//! A prompt-and-response party card game engine: players hold hands of
//! response cards, a rotating judge draws a prompt, every other player
//! submits a response, a winner is picked, and the first player to reach the
//! winning score ends the game.
//!
//! ## Design Principles
//!
//! 1. **Session-owned state**: every mutable piece of a game - deck, prompt
//!    pool, hands, scores, judge, RNG - lives inside one [`Session`] value.
//!    No globals, so independent sessions never interfere.
//!
//! 2. **Deterministic**: all randomness (draws, response picks, winner
//!    picks, the first judge) flows through a seeded [`GameRng`]. The same
//!    seed and sources replay the same game.
//!
//! 3. **Storage-agnostic**: players, cards, and prompts come in through the
//!    [`lookup`] traits. The engine never talks to a database or the
//!    network; errors propagate to the caller untranslated.
//!
//! ## Modules
//!
//! - `core`: identities, players, configuration, RNG
//! - `cards`: response cards and prompts
//! - `pool`: uniform draw-without-replacement pools
//! - `lookup`: external lookup traits and the in-memory store
//! - `session`: session state, hand fill, rounds, scoring, judge rotation
//! - `engine`: session setup and the game loop
//! - `error`: the failure taxonomy

pub mod cards;
pub mod core;
pub mod engine;
pub mod error;
pub mod lookup;
pub mod pool;
pub mod session;

// Re-export commonly used types
pub use crate::cards::{Card, Prompt};
pub use crate::core::{
    CardId, GameConfig, GameRng, Hand, Player, PlayerId, PromptId,
    DEFAULT_HAND_CAPACITY, DEFAULT_WIN_THRESHOLD,
};
pub use crate::engine::{GameEngine, GameResult};
pub use crate::error::GameError;
pub use crate::lookup::{CardSource, MemoryStore, PlayerDirectory, PromptSource};
pub use crate::pool::Pool;
pub use crate::session::{
    apply_score, fill_hand, next_judge, play_round, select_winner, Round, Session,
};
