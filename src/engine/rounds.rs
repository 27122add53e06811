//! Simultaneous round-based matches (the lowest-unique numeric game).

use super::solicit;
use crate::config::MatchConfig;
use crate::error::EngineError;
use crate::games::lowest_unique::{self, History};
use crate::players::Player;
use derive_getters::Getters;
use futures::future;
use tracing::{info, instrument};

/// A boxed player for the numeric game.
pub type BoxedChooser = Box<dyn Player<View = History, Move = u32>>;

/// Factory building one numeric-game player from the table size.
pub type ChooserFactory = Box<dyn FnOnce(usize) -> BoxedChooser>;

/// A reusable numeric-game factory, for series of matches.
pub type SharedChooserFactory = std::sync::Arc<dyn Fn(usize) -> BoxedChooser + Send + Sync>;

/// Everything a finished numeric match leaves behind.
#[derive(Debug, Clone, Getters)]
pub struct RoundReport {
    /// Index of the sole player with the highest cumulative score.
    winner: usize,
    /// Final cumulative scores, by player index.
    scores: Vec<u64>,
    /// Every round's choices; `None` marks a forfeited round entry.
    history: History,
}

/// One run of the numeric game among `N` players.
///
/// Each round every player is solicited concurrently for one value in
/// `1..=N`; the round resolves only after all of them have answered or
/// forfeited. After the base rounds, extra rounds are appended until a
/// single player holds the highest cumulative score.
pub struct RoundMatch {
    players: Vec<BoxedChooser>,
    history: History,
    winner: Option<usize>,
    config: MatchConfig,
}

impl std::fmt::Debug for RoundMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoundMatch")
            .field("players", &self.players.len())
            .field("rounds", &self.history.len())
            .field("winner", &self.winner)
            .finish_non_exhaustive()
    }
}

impl RoundMatch {
    /// Creates a match from one factory per seat.
    ///
    /// Every factory receives the player count, which is also the upper
    /// bound of the value range.
    pub fn new(factories: Vec<ChooserFactory>, config: MatchConfig) -> Self {
        let count = factories.len();
        Self {
            players: factories.into_iter().map(|make| make(count)).collect(),
            history: History::new(),
            winner: None,
            config,
        }
    }

    /// Read-only view of the round history so far.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Runs the match to completion.
    ///
    /// # Errors
    ///
    /// Only resource-level failures abort a match.
    #[instrument(skip(self), fields(players = self.players.len()))]
    pub async fn play(&mut self) -> Result<RoundReport, EngineError> {
        let base = *self.config.base_rounds();
        while (self.history.len() as u32) < base {
            self.play_round().await?;
        }

        loop {
            let scores = lowest_unique::scores(&self.history, self.players.len());
            if let Some(winner) = lowest_unique::sole_leader(&scores) {
                self.winner = Some(winner);
                info!(
                    winner = self.players[winner].name(),
                    score = scores[winner],
                    rounds = self.history.len(),
                    "match over"
                );
                return Ok(RoundReport {
                    winner,
                    scores,
                    history: self.history.clone(),
                });
            }
            info!("top score shared, playing a tie-break round");
            self.play_round().await?;
        }
    }

    /// Solicits every player for the current round, concurrently, and
    /// appends the resolved round to the history.
    async fn play_round(&mut self) -> Result<(), EngineError> {
        let round_number = self.history.len() + 1;
        let player_count = self.players.len() as u32;
        let attempts = *self.config.attempts();
        info!(round = round_number, "playing round");

        let snapshot = self.history.clone();
        let seat_count = self.players.len();
        let mut pending = Vec::with_capacity(seat_count);
        for player in self.players.iter_mut() {
            let view = snapshot.clone();
            pending.push(async move {
                solicit(player.as_mut(), attempts, view, |choice| {
                    lowest_unique::validate_choice(choice, player_count).map(|()| choice)
                })
                .await
            });
        }

        let mut round = Vec::with_capacity(seat_count);
        for outcome in future::join_all(pending).await {
            // A forfeit scores the round as a loss for that player
            // without ending the match.
            round.push(outcome?);
        }

        if let Some((winner, value)) = lowest_unique::round_winner(&round) {
            info!(
                round = round_number,
                winner = self.players[winner].name(),
                value,
                "round scored"
            );
        } else {
            info!(round = round_number, "no unique value, nobody scores");
        }

        self.history.push_round(round);
        Ok(())
    }
}
