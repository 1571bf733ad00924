//! Scoring and judge rotation.

use crate::core::ids::PlayerId;
use crate::core::player::Player;
use crate::error::GameError;

/// Award the round to `winner` and return the new top score.
///
/// Increments the winner's score by one; the returned value is
/// `max(top_score, winner.score)`, so it never decreases.
pub fn apply_score(winner: &mut Player, top_score: u32) -> u32 {
    winner.score += 1;
    top_score.max(winner.score)
}

/// The player immediately after `current` in session order, wrapping from
/// the last player back to the first.
///
/// Fails with [`GameError::PlayerNotInSession`] if `current` is not among
/// `players`; given the session invariants that never happens, so a failure
/// here is a logic error in the caller.
pub fn next_judge(current: PlayerId, players: &[Player]) -> Result<PlayerId, GameError> {
    let idx = players
        .iter()
        .position(|p| p.id == current)
        .ok_or(GameError::PlayerNotInSession(current))?;
    Ok(players[(idx + 1) % players.len()].id)
}
