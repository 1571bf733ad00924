//! Draw pools: shrinking collections sampled uniformly without replacement.
//!
//! Each session owns two pools - the deck of response cards and the pool of
//! prompts. Pools are plain session-local values; there is no shared or
//! global pool state, so independent sessions can never interfere with each
//! other's draws.

use crate::core::rng::GameRng;
use crate::error::GameError;

/// A pool of undealt items.
///
/// `draw` removes and returns one element chosen uniformly at random; after
/// `len()` draws the pool is empty and further draws fail.
///
/// ## Example
///
/// ```
/// use prompt_party::{GameRng, Pool};
///
/// let mut pool = Pool::from_items("card", vec![1, 2, 3]).unwrap();
/// let mut rng = GameRng::new(42);
///
/// let first = pool.draw(&mut rng).unwrap();
/// assert!((1..=3).contains(&first));
/// assert_eq!(pool.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Pool<T> {
    /// Label used in error values ("card", "prompt").
    label: &'static str,
    items: Vec<T>,
}

impl<T> Pool<T> {
    /// Build a pool from a source collection.
    ///
    /// Fails with [`GameError::NoItems`] if the source is empty, surfacing
    /// an unpopulated backing store at session start rather than mid-game.
    pub fn from_items(label: &'static str, items: Vec<T>) -> Result<Self, GameError> {
        if items.is_empty() {
            return Err(GameError::NoItems { pool: label });
        }
        Ok(Self { label, items })
    }

    /// Remove and return one element chosen uniformly at random.
    ///
    /// Each remaining element has probability `1/len()` of being chosen.
    /// Fails with [`GameError::PoolExhausted`] on an empty pool.
    pub fn draw(&mut self, rng: &mut GameRng) -> Result<T, GameError> {
        if self.items.is_empty() {
            return Err(GameError::PoolExhausted { pool: self.label });
        }
        let n = rng.gen_range_usize(0..self.items.len());
        Ok(self.items.swap_remove(n))
    }

    /// Number of items remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the pool has been exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The label this pool reports in errors.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_empty_source_rejected() {
        let items: Vec<u32> = vec![];
        assert_eq!(
            Pool::from_items("card", items).unwrap_err(),
            GameError::NoItems { pool: "card" }
        );
    }

    #[test]
    fn test_draw_shrinks_pool() {
        let mut pool = Pool::from_items("card", vec![10, 20, 30]).unwrap();
        let mut rng = GameRng::new(1);

        assert_eq!(pool.len(), 3);
        pool.draw(&mut rng).unwrap();
        assert_eq!(pool.len(), 2);
        assert!(!pool.is_empty());
    }

    #[test]
    fn test_exhausted_pool_fails() {
        let mut pool = Pool::from_items("prompt", vec![1]).unwrap();
        let mut rng = GameRng::new(1);

        pool.draw(&mut rng).unwrap();
        assert!(pool.is_empty());
        assert_eq!(
            pool.draw(&mut rng).unwrap_err(),
            GameError::PoolExhausted { pool: "prompt" }
        );
    }

    proptest! {
        /// For any pool of size N, N draws return N distinct elements, the
        /// pool is then empty, and draw N+1 fails.
        #[test]
        fn prop_draws_are_without_replacement(n in 1usize..60, seed in any::<u64>()) {
            let items: Vec<u32> = (0..n as u32).collect();
            let mut pool = Pool::from_items("card", items).unwrap();
            let mut rng = GameRng::new(seed);

            let mut seen = HashSet::new();
            for remaining in (1..=n).rev() {
                prop_assert_eq!(pool.len(), remaining);
                let drawn = pool.draw(&mut rng).unwrap();
                prop_assert!(seen.insert(drawn), "element drawn twice");
            }

            prop_assert!(pool.is_empty());
            prop_assert_eq!(
                pool.draw(&mut rng).unwrap_err(),
                GameError::PoolExhausted { pool: "card" }
            );
        }
    }
}
