//! Hand replenishment.

use crate::cards::Card;
use crate::core::player::Player;
use crate::core::rng::GameRng;
use crate::error::GameError;
use crate::pool::Pool;

/// Top up a player's hand to `capacity` by drawing from the deck.
///
/// Cards are appended in draw order. A hand already at (or above) capacity
/// is left untouched. Returns the number of cards drawn.
///
/// If the deck empties before the hand is full the draw fails with
/// [`GameError::PoolExhausted`]. That is fatal for the session: it means the
/// deck was too small for the player count, and there is no reshuffle to
/// recover from mid-round. Size the card source accordingly.
pub fn fill_hand(
    player: &mut Player,
    deck: &mut Pool<Card>,
    capacity: usize,
    rng: &mut GameRng,
) -> Result<usize, GameError> {
    let mut drawn = 0;
    while player.hand.len() < capacity {
        player.hand.push(deck.draw(rng)?);
        drawn += 1;
    }
    Ok(drawn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ids::{CardId, PlayerId};

    fn deck_of(n: u64) -> Pool<Card> {
        let cards = (1..=n)
            .map(|i| Card::new(CardId::new(i), format!("card {i}")))
            .collect();
        Pool::from_items("card", cards).unwrap()
    }

    #[test]
    fn test_fills_to_capacity() {
        let mut player = Player::new(PlayerId::new(1), "Ada");
        let mut deck = deck_of(20);
        let mut rng = GameRng::new(42);

        let drawn = fill_hand(&mut player, &mut deck, 10, &mut rng).unwrap();

        assert_eq!(drawn, 10);
        assert_eq!(player.hand.len(), 10);
        assert_eq!(deck.len(), 10);
    }

    #[test]
    fn test_noop_when_full() {
        let mut player = Player::new(PlayerId::new(1), "Ada");
        let mut deck = deck_of(20);
        let mut rng = GameRng::new(42);

        fill_hand(&mut player, &mut deck, 10, &mut rng).unwrap();
        let drawn = fill_hand(&mut player, &mut deck, 10, &mut rng).unwrap();

        assert_eq!(drawn, 0);
        assert_eq!(player.hand.len(), 10);
        assert_eq!(deck.len(), 10);
    }

    #[test]
    fn test_partial_refill_draws_the_difference() {
        let mut player = Player::new(PlayerId::new(1), "Ada");
        let mut deck = deck_of(20);
        let mut rng = GameRng::new(42);

        fill_hand(&mut player, &mut deck, 10, &mut rng).unwrap();
        player.hand.truncate(7);

        let drawn = fill_hand(&mut player, &mut deck, 10, &mut rng).unwrap();
        assert_eq!(drawn, 3);
        assert_eq!(player.hand.len(), 10);
        assert_eq!(deck.len(), 7);
    }

    #[test]
    fn test_underprovisioned_deck_fails() {
        let mut player = Player::new(PlayerId::new(1), "Ada");
        let mut deck = deck_of(4);
        let mut rng = GameRng::new(42);

        let err = fill_hand(&mut player, &mut deck, 10, &mut rng).unwrap_err();
        assert_eq!(err, GameError::PoolExhausted { pool: "card" });
        // Everything that was available got dealt before the failure.
        assert_eq!(player.hand.len(), 4);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_hand_cards_left_the_deck() {
        let mut player = Player::new(PlayerId::new(1), "Ada");
        let mut deck = deck_of(15);
        let mut rng = GameRng::new(7);

        fill_hand(&mut player, &mut deck, 10, &mut rng).unwrap();

        // Partition: dealt cards are in exactly one place.
        let hand_ids: Vec<_> = player.hand.iter().map(|c| c.id).collect();
        let mut unique = hand_ids.clone();
        unique.sort_by_key(|id| id.raw());
        unique.dedup();
        assert_eq!(unique.len(), hand_ids.len());
    }
}
