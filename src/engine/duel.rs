//! Alternating two-player matches (tic-tac-toe, reversi).

use super::{Outcome, Side, solicit};
use crate::config::MatchConfig;
use crate::error::{EngineError, MoveError};
use crate::players::Player;
use derive_getters::Getters;
use std::fmt;
use tracing::{debug, info, instrument};

/// Rule engine contract for the alternating games.
///
/// `apply` is all-or-nothing: on any rejection the board is left
/// untouched. `outcome` doubles as the terminal check; `None` means
/// the game goes on.
pub trait DuelRules: Send + Sync + 'static {
    /// The board type this game plays on.
    type Board: Clone + fmt::Display + fmt::Debug + Send + Sync + 'static;
    /// The move value players submit.
    type Move: Copy + fmt::Debug + Send + 'static;

    /// Starting position.
    fn initial(&self) -> Self::Board;

    /// Validates `mv` for `mover` and applies it atomically.
    ///
    /// # Errors
    ///
    /// Returns the first failing check, in order: coordinate range,
    /// target vacancy, game-specific legality.
    fn apply(&self, board: &mut Self::Board, mover: Side, mv: Self::Move)
    -> Result<(), MoveError>;

    /// Whether `mover` has at least one legal move anywhere.
    fn can_move(&self, board: &Self::Board, mover: Side) -> bool;

    /// Terminal check and winner in one: `None` while the game runs.
    fn outcome(&self, board: &Self::Board) -> Option<Outcome>;

    /// Human-readable label for a side ("X", "black", ...).
    fn side_label(&self, side: Side) -> &'static str;
}

/// A boxed player for a duel game over rules `R`.
pub type BoxedDuelist<R> =
    Box<dyn Player<View = <R as DuelRules>::Board, Move = <R as DuelRules>::Move>>;

/// A reusable factory building one duel player for an assigned side.
pub type DuelFactory<R> = std::sync::Arc<dyn Fn(Side) -> BoxedDuelist<R> + Send + Sync>;

/// Everything a finished duel match leaves behind.
#[derive(Debug, Clone, Getters)]
pub struct DuelReport<M> {
    /// Who won, or a draw.
    outcome: Outcome,
    /// Applied moves in order; passes and rejected proposals are not
    /// recorded.
    moves: Vec<(Side, M)>,
}

/// One run of an alternating game between two players.
///
/// Created fresh per match; the board is owned exclusively by the match
/// and mutated only through the rule engine. Terminal state is
/// absorbing: once the outcome is set no further moves are solicited.
pub struct DuelMatch<R: DuelRules> {
    rules: R,
    board: R::Board,
    players: [BoxedDuelist<R>; 2],
    to_move: Side,
    history: Vec<(Side, R::Move)>,
    outcome: Option<Outcome>,
    config: MatchConfig,
}

impl<R: DuelRules> fmt::Debug for DuelMatch<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DuelMatch")
            .field("board", &self.board)
            .field("to_move", &self.to_move)
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}

impl<R: DuelRules> DuelMatch<R> {
    /// Creates a match from two player factories.
    ///
    /// Each factory receives the side it will play; a fresh player is
    /// built per match so no state leaks between matches.
    pub fn new(
        rules: R,
        make_first: impl FnOnce(Side) -> BoxedDuelist<R>,
        make_second: impl FnOnce(Side) -> BoxedDuelist<R>,
        config: MatchConfig,
    ) -> Self {
        let board = rules.initial();
        Self::with_position(rules, board, Side::First, make_first, make_second, config)
    }

    /// Creates a match resuming from an arbitrary position.
    pub fn with_position(
        rules: R,
        board: R::Board,
        to_move: Side,
        make_first: impl FnOnce(Side) -> BoxedDuelist<R>,
        make_second: impl FnOnce(Side) -> BoxedDuelist<R>,
        config: MatchConfig,
    ) -> Self {
        Self {
            rules,
            board,
            players: [make_first(Side::First), make_second(Side::Second)],
            to_move,
            history: Vec::new(),
            outcome: None,
            config,
        }
    }

    /// Read-only view of the current board.
    pub fn board(&self) -> &R::Board {
        &self.board
    }

    /// The outcome, once the match is terminal.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Runs the match to completion.
    ///
    /// # Errors
    ///
    /// Only resource-level failures abort a match; every agent fault is
    /// absorbed by the retry/forfeit policy.
    #[instrument(skip(self))]
    pub async fn play(&mut self) -> Result<DuelReport<R::Move>, EngineError> {
        while self.outcome.is_none() {
            self.step().await?;
        }

        let outcome = self.outcome.unwrap_or(Outcome::Draw);
        match outcome {
            Outcome::Won(side) => info!(
                winner = self.players[side.index()].name(),
                side = self.rules.side_label(side),
                "match over"
            ),
            Outcome::Draw => info!("match over: draw"),
        }

        Ok(DuelReport {
            outcome,
            moves: self.history.clone(),
        })
    }

    /// Plays one half-move: terminal check, pass rule, then one
    /// solicit/validate/apply cycle for the side to move.
    async fn step(&mut self) -> Result<(), EngineError> {
        let Self {
            rules,
            board,
            players,
            to_move,
            history,
            outcome,
            config,
        } = self;

        if let Some(decided) = rules.outcome(board) {
            *outcome = Some(decided);
            return Ok(());
        }

        let side = *to_move;
        if !rules.can_move(board, side) {
            // Reversi: no legal move passes the turn without costing
            // an attempt.
            info!(side = rules.side_label(side), "no legal move, passing");
            *to_move = side.opponent();
            return Ok(());
        }

        let player = players[side.index()].as_mut();
        let snapshot = board.clone();
        info!(
            player = player.name(),
            side = rules.side_label(side),
            turn = history.len() + 1,
            "soliciting move"
        );

        let admitted = solicit(player, *config.attempts(), snapshot, |mv| {
            rules.apply(board, side, mv).map(|()| mv)
        })
        .await?;

        match admitted {
            Some(mv) => {
                history.push((side, mv));
                debug!(board = %board, "move applied");
                *to_move = side.opponent();
            }
            None => {
                // Forfeit: the offending side loses the whole match.
                let winner = side.opponent();
                info!(
                    forfeiting = players[side.index()].name(),
                    winner = players[winner.index()].name(),
                    "forfeit"
                );
                *outcome = Some(Outcome::Won(winner));
            }
        }
        Ok(())
    }
}
