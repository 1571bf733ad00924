//! Core engine types: identities, players, configuration, RNG.

pub mod config;
pub mod ids;
pub mod player;
pub mod rng;

pub use config::{GameConfig, DEFAULT_HAND_CAPACITY, DEFAULT_WIN_THRESHOLD};
pub use ids::{CardId, PlayerId, PromptId};
pub use player::{Hand, Player};
pub use rng::GameRng;
