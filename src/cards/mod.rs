//! Cards and prompts: the immutable content the game is played with.

pub mod card;
pub mod prompt;

pub use card::Card;
pub use prompt::Prompt;
