//! Round orchestration: prompt draw, response collection, winner selection.

use tracing::debug;

use super::hand::fill_hand;
use super::Session;
use crate::cards::{Card, Prompt};
use crate::core::ids::PlayerId;
use crate::core::rng::GameRng;
use crate::error::GameError;

/// One round of play.
///
/// Responses are recorded in player-iteration order, one card per non-judge
/// player; card identities are unique within a round since every player
/// contributes at most one card from their own hand. The winning card is
/// filled in by [`select_winner`].
#[derive(Clone, Debug)]
pub struct Round {
    /// Round number within the session (1-based).
    pub number: u32,

    /// The prompt drawn for this round.
    pub prompt: Prompt,

    /// Played cards and who played them, in play order.
    pub responses: Vec<(Card, PlayerId)>,

    /// The card the judge picked, once the round has been judged.
    pub winning_card: Option<Card>,
}

impl Round {
    /// Number of responses collected.
    #[must_use]
    pub fn response_count(&self) -> usize {
        self.responses.len()
    }
}

/// Play one round in `session` with `judge` sitting out.
///
/// Draws a prompt (failing with [`GameError::PoolExhausted`] when the
/// prompts run out - the natural end-of-content condition, fatal to the
/// session), tops up every player's hand (judge included), then collects a
/// uniformly random response card from each non-judge player's full hand.
///
/// A played card stays in the player's hand; the round records it without
/// taking ownership away, so hands remain at capacity between rounds and
/// only the prompt pool shrinks as the session progresses.
pub fn play_round(session: &mut Session, judge: PlayerId) -> Result<Round, GameError> {
    let Session {
        config,
        players,
        deck,
        prompts,
        rng,
        round,
        ..
    } = session;

    let prompt = prompts.draw(rng)?;
    debug!(round = *round, prompt = %prompt, "prompt drawn");

    let mut responses = Vec::with_capacity(players.len().saturating_sub(1));
    for player in players.iter_mut() {
        fill_hand(player, deck, config.hand_capacity, rng)?;
        if player.id == judge {
            continue;
        }

        // The hand is exactly at capacity here: fill_hand either topped it
        // up or already failed the round.
        debug_assert_eq!(player.hand.len(), config.hand_capacity);
        let pick = rng.gen_range_usize(0..config.hand_capacity);
        let card = player.hand[pick].clone();
        debug!(player = %player.name, card = %card, "response played");
        responses.push((card, player.id));
    }

    Ok(Round {
        number: *round,
        prompt,
        responses,
        winning_card: None,
    })
}

/// Pick the round winner uniformly at random among the responses.
///
/// Records the winning card on the round and returns the player who played
/// it. Fails with [`GameError::NoResponses`] on an empty response list,
/// which cannot happen with two or more players but is checked defensively.
///
/// This models the judge's decision as an automatic pick. It is isolated
/// here so an input-driven implementation (the judge's actual choice) can
/// replace it without touching the game loop.
pub fn select_winner(round: &mut Round, rng: &mut GameRng) -> Result<PlayerId, GameError> {
    if round.responses.is_empty() {
        return Err(GameError::NoResponses);
    }

    let n = rng.gen_range_usize(0..round.responses.len());
    let (card, player) = round.responses[n].clone();
    debug!(round = round.number, card = %card, "winning response picked");
    round.winning_card = Some(card);
    Ok(player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ids::CardId;

    fn round_with_responses(entries: &[(u64, u64)]) -> Round {
        Round {
            number: 1,
            prompt: Prompt::new(crate::core::ids::PromptId::new(1), "a prompt"),
            responses: entries
                .iter()
                .map(|&(c, p)| (Card::new(CardId::new(c), format!("card {c}")), PlayerId::new(p)))
                .collect(),
            winning_card: None,
        }
    }

    #[test]
    fn test_select_winner_records_card() {
        let mut round = round_with_responses(&[(1, 10), (2, 20)]);
        let mut rng = GameRng::new(42);

        let winner = select_winner(&mut round, &mut rng).unwrap();

        let card = round.winning_card.as_ref().unwrap();
        let expected = round
            .responses
            .iter()
            .find(|(c, _)| c.id == card.id)
            .map(|(_, p)| *p)
            .unwrap();
        assert_eq!(winner, expected);
    }

    #[test]
    fn test_select_winner_no_responses() {
        let mut round = round_with_responses(&[]);
        let mut rng = GameRng::new(42);

        assert_eq!(
            select_winner(&mut round, &mut rng).unwrap_err(),
            GameError::NoResponses
        );
    }

    #[test]
    fn test_select_winner_is_deterministic() {
        let entries = [(1, 10), (2, 20), (3, 30)];
        let mut round1 = round_with_responses(&entries);
        let mut round2 = round_with_responses(&entries);

        let w1 = select_winner(&mut round1, &mut GameRng::new(9)).unwrap();
        let w2 = select_winner(&mut round2, &mut GameRng::new(9)).unwrap();

        assert_eq!(w1, w2);
    }
}
