//! Session configuration.
//!
//! The two fixed numbers of the game - how many cards a hand holds and the
//! score that ends the game - are configuration, not magic constants baked
//! into the round logic.

use serde::{Deserialize, Serialize};

/// Default hand capacity.
pub const DEFAULT_HAND_CAPACITY: usize = 10;

/// Default score at which the game ends.
pub const DEFAULT_WIN_THRESHOLD: u32 = 10;

/// Configuration for a game session.
///
/// ## Example
///
/// ```
/// use prompt_party::GameConfig;
///
/// let config = GameConfig::new().with_hand_capacity(7).with_win_threshold(5);
/// assert_eq!(config.hand_capacity, 7);
/// assert_eq!(config.win_threshold, 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of cards each player's hand is topped up to every round.
    pub hand_capacity: usize,

    /// Score a player must reach to win the session.
    pub win_threshold: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_capacity: DEFAULT_HAND_CAPACITY,
            win_threshold: DEFAULT_WIN_THRESHOLD,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the default capacity and threshold.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hand capacity.
    #[must_use]
    pub fn with_hand_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Hand capacity must be at least 1");
        self.hand_capacity = capacity;
        self
    }

    /// Set the winning score.
    #[must_use]
    pub fn with_win_threshold(mut self, threshold: u32) -> Self {
        assert!(threshold > 0, "Win threshold must be at least 1");
        self.win_threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.hand_capacity, 10);
        assert_eq!(config.win_threshold, 10);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new().with_hand_capacity(5).with_win_threshold(3);
        assert_eq!(config.hand_capacity, 5);
        assert_eq!(config.win_threshold, 3);
    }

    #[test]
    #[should_panic(expected = "Hand capacity must be at least 1")]
    fn test_zero_capacity_rejected() {
        let _ = GameConfig::new().with_hand_capacity(0);
    }
}
