//! Failure taxonomy for the game engine.
//!
//! Every failure propagates unchanged to the caller of the engine's entry
//! points; the engine never retries and never produces a partially set up
//! session. Mapping errors to user-visible responses (HTTP status codes,
//! messages) is the embedding application's concern.

use thiserror::Error;

use crate::core::ids::PlayerId;

/// Errors surfaced by session setup and the game loop.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A requested player id did not resolve. Setup aborts with no partial
    /// session.
    #[error("unknown player id {0}; only registered players can join a session")]
    UnknownPlayer(PlayerId),

    /// A backing source (cards or prompts) had nothing loaded at session
    /// start. A content/configuration error, fatal to setup.
    #[error("the {pool} source has nothing loaded")]
    NoItems {
        /// Which pool the empty source was feeding.
        pool: &'static str,
    },

    /// A pool ran dry mid-session. Fatal to the running session; there is no
    /// recovery path such as reshuffling a discard pile.
    #[error("the {pool} pool is exhausted")]
    PoolExhausted {
        /// Which pool ran dry.
        pool: &'static str,
    },

    /// A round ended up with no responses to judge. Cannot happen with two
    /// or more players; checked defensively.
    #[error("round has no responses to judge")]
    NoResponses,

    /// A player referenced by the loop is not part of the session. An
    /// invariant violation, not a user-facing condition.
    #[error("player {0} is not part of this session")]
    PlayerNotInSession(PlayerId),
}
