//! The engine's entry points: session setup and the game loop.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::config::GameConfig;
use crate::core::ids::PlayerId;
use crate::core::player::Player;
use crate::core::rng::GameRng;
use crate::error::GameError;
use crate::lookup::{CardSource, PlayerDirectory, PromptSource};
use crate::pool::Pool;
use crate::session::{apply_score, next_judge, play_round, select_winner, Session};

/// Outcome of a completed session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// The player who reached the winning score, with their final hand and
    /// score.
    pub winner: Player,

    /// How many rounds were played.
    pub rounds: u32,
}

/// Game loop phases.
///
/// The loop is strictly sequential: each phase fully resolves before the
/// next begins, and no phase is ever skipped.
#[derive(Clone, Debug)]
enum Phase {
    /// Pick the first judge.
    Initializing,
    /// Play a round and judge it.
    RoundInProgress { judge: PlayerId },
    /// Apply the round result and decide whether to continue.
    Scoring { judge: PlayerId, winner: PlayerId },
    /// Terminal.
    Finished { winner: PlayerId },
}

/// The game engine: lookup collaborators plus configuration.
///
/// The engine itself is stateless across sessions; every piece of game
/// state lives in the [`Session`] values it hands out.
///
/// ## Example
///
/// ```
/// use prompt_party::{GameEngine, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// let ids = vec![
///     store.add_player("Ada"),
///     store.add_player("Grace"),
///     store.add_player("Alan"),
/// ];
/// for i in 0..40 {
///     store.add_card(format!("response {i}"));
///     store.add_prompt(format!("prompt {i}?"));
/// }
///
/// let engine = GameEngine::new(store.clone(), store.clone(), store);
/// let mut session = engine.new_session(&ids, 42).unwrap();
/// let result = engine.run_session(&mut session).unwrap();
///
/// assert_eq!(result.winner.score, 10);
/// assert!(result.rounds >= 10);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine<D, C, P> {
    directory: D,
    cards: C,
    prompts: P,
    config: GameConfig,
}

impl<D, C, P> GameEngine<D, C, P>
where
    D: PlayerDirectory,
    C: CardSource,
    P: PromptSource,
{
    /// Create an engine over the three lookup collaborators, with the
    /// default configuration.
    #[must_use]
    pub fn new(directory: D, cards: C, prompts: P) -> Self {
        Self {
            directory,
            cards,
            prompts,
            config: GameConfig::default(),
        }
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Set up a new session for the given players.
    ///
    /// All-or-nothing: every id must resolve through the player directory or
    /// setup fails with [`GameError::UnknownPlayer`] and no session is
    /// produced. Resolved players start with an empty hand and a zero score.
    /// The deck and prompt pool are loaded fresh from their sources, each
    /// failing with [`GameError::NoItems`] if the source is empty.
    ///
    /// Callers provide a non-empty, duplicate-free id list; a session needs
    /// at least two players to produce judgeable rounds. `seed` fixes every
    /// random decision of the session, so replaying with the same seed and
    /// the same sources reproduces the same game.
    pub fn new_session(
        &self,
        player_ids: &[PlayerId],
        seed: u64,
    ) -> Result<Session, GameError> {
        let mut players = Vec::with_capacity(player_ids.len());
        for &id in player_ids {
            let mut player = self
                .directory
                .find_player_by_id(id)
                .ok_or(GameError::UnknownPlayer(id))?;
            player.reset();
            debug!(player = %player.name, id = %player.id, "player joined the session");
            players.push(player);
        }

        let deck = Pool::from_items("card", self.cards.load_all_cards())?;
        let prompts = Pool::from_items("prompt", self.prompts.load_all_prompts())?;
        info!(
            players = players.len(),
            cards = deck.len(),
            prompts = prompts.len(),
            seed,
            "session created"
        );

        Ok(Session::new(
            self.config,
            players,
            deck,
            prompts,
            GameRng::new(seed),
        ))
    }

    /// Run the game loop until a player reaches the winning score.
    ///
    /// Returns the winner and the number of rounds played. Fails with
    /// [`GameError::PoolExhausted`] if the cards or prompts run out first;
    /// the session is not recoverable after that.
    pub fn run_session(&self, session: &mut Session) -> Result<GameResult, GameError> {
        run(session)
    }
}

fn run(session: &mut Session) -> Result<GameResult, GameError> {
    debug_assert!(
        session.players.len() >= 2,
        "a session needs at least two players"
    );

    let mut phase = Phase::Initializing;
    loop {
        phase = match phase {
            Phase::Initializing => {
                let idx = session.rng.gen_range_usize(0..session.players.len());
                let judge = session.players[idx].id;
                session.judge = Some(judge);
                info!(judge = %session.players[idx].name, "first judge picked");
                Phase::RoundInProgress { judge }
            }

            Phase::RoundInProgress { judge } => {
                let mut round = play_round(session, judge)?;
                let winner = select_winner(&mut round, &mut session.rng)?;
                Phase::Scoring { judge, winner }
            }

            Phase::Scoring { judge, winner } => {
                let top = session.top_score;
                let player = session
                    .players
                    .iter_mut()
                    .find(|p| p.id == winner)
                    .ok_or(GameError::PlayerNotInSession(winner))?;
                let new_top = apply_score(player, top);
                info!(
                    round = session.round,
                    winner = %player.name,
                    score = player.score,
                    "round won"
                );
                session.top_score = new_top;

                if new_top >= session.config.win_threshold {
                    Phase::Finished { winner }
                } else {
                    let judge = next_judge(judge, &session.players)?;
                    session.judge = Some(judge);
                    session.round += 1;
                    Phase::RoundInProgress { judge }
                }
            }

            Phase::Finished { winner } => {
                let rounds = session.round;
                let player = session
                    .players
                    .iter()
                    .find(|p| p.id == winner)
                    .cloned()
                    .ok_or(GameError::PlayerNotInSession(winner))?;
                info!(winner = %player.name, rounds, "game over");
                return Ok(GameResult {
                    winner: player,
                    rounds,
                });
            }
        };
    }
}
