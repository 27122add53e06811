//! The 3×3 game: three in a row wins.

use super::{Cell, Coord, Grid};
use crate::engine::duel::DuelRules;
use crate::engine::{Outcome, Side};
use crate::error::MoveError;

/// Tic-tac-toe board.
pub type Board = Grid<3>;

/// Tic-tac-toe rule engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct TicTacToe;

/// Every winning line, scanned rows first, then columns, then the main
/// and anti diagonals. The first uniform owned line decides the winner;
/// only one side can complete a line per turn, so the order is safe.
const LINES: [[(u8, u8); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Returns the owner of the first uniform non-empty line, if any.
pub fn line_owner(board: &Board) -> Option<Side> {
    for line in LINES {
        let [a, b, c] = line.map(|(row, col)| board.get(Coord::new(row, col)));
        if let Some(Cell::Owned(side)) = a
            && a == b
            && b == c
        {
            return Some(side);
        }
    }
    None
}

impl DuelRules for TicTacToe {
    type Board = Board;
    type Move = Coord;

    fn initial(&self) -> Board {
        Board::new()
    }

    fn apply(&self, board: &mut Board, mover: Side, mv: Coord) -> Result<(), MoveError> {
        match board.get(mv) {
            None => Err(MoveError::OutOfBounds {
                coord: mv,
                size: board.size(),
            }),
            Some(Cell::Owned(_)) => Err(MoveError::Occupied(mv)),
            Some(Cell::Empty) => board.set(mv, Cell::Owned(mover)),
        }
    }

    fn can_move(&self, board: &Board, _mover: Side) -> bool {
        !board.is_full()
    }

    fn outcome(&self, board: &Board) -> Option<Outcome> {
        if let Some(side) = line_owner(board) {
            return Some(Outcome::Won(side));
        }
        if board.is_full() {
            return Some(Outcome::Draw);
        }
        None
    }

    fn side_label(&self, side: Side) -> &'static str {
        match side {
            Side::First => "X",
            Side::Second => "O",
        }
    }
}
