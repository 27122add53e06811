//! The 8×8 reversible-capture game.
//!
//! A placement is legal only if it flips at least one opposing run; the
//! game ends when neither side can move anywhere, and the larger disc
//! count wins.

use super::{Cell, Coord, Grid};
use crate::engine::duel::DuelRules;
use crate::engine::{Outcome, Side};
use crate::error::MoveError;

/// Reversi board.
pub type Board = Grid<8>;

/// Reversi rule engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reversi;

const DIRECTIONS: [(i16, i16); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// All discs a placement at `origin` by `mover` would flip.
///
/// A direction contributes only when it starts with at least one
/// opposing disc and is terminated by one of `mover`'s discs before an
/// empty cell or the board edge; everything in between flips.
pub fn captures(board: &Board, origin: Coord, mover: Side) -> Vec<Coord> {
    let mut captured = Vec::new();
    for (dr, dc) in DIRECTIONS {
        let mut run = Vec::new();
        let mut row = i16::from(origin.row) + dr;
        let mut col = i16::from(origin.col) + dc;
        while let Some(cell) = board.at_signed(row, col) {
            match cell {
                Cell::Empty => break,
                Cell::Owned(owner) if owner == mover => {
                    captured.append(&mut run);
                    break;
                }
                Cell::Owned(_) => run.push(Coord::new(row as u8, col as u8)),
            }
            row += dr;
            col += dc;
        }
    }
    captured
}

/// Every legal placement for `mover`, in row-major order.
pub fn legal_moves(board: &Board, mover: Side) -> Vec<Coord> {
    board
        .empties()
        .filter(|&at| !captures(board, at, mover).is_empty())
        .collect()
}

/// Whether `mover` can place a disc anywhere.
///
/// Exhaustively probes every empty cell; this full-board scan is the
/// most expensive operation in the engine.
pub fn has_any_move(board: &Board, mover: Side) -> bool {
    board
        .empties()
        .any(|at| !captures(board, at, mover).is_empty())
}

impl Reversi {
    /// The standard opening position: two discs per side in the centre.
    pub fn starting_board() -> Board {
        let mut board = Board::new();
        for (row, col, side) in [
            (3, 4, Side::First),
            (4, 3, Side::First),
            (3, 3, Side::Second),
            (4, 4, Side::Second),
        ] {
            board
                .set(Coord::new(row, col), Cell::Owned(side))
                .unwrap_or_else(|_| unreachable!("centre cells are on the board"));
        }
        board
    }
}

impl DuelRules for Reversi {
    type Board = Board;
    type Move = Coord;

    fn initial(&self) -> Board {
        Self::starting_board()
    }

    fn apply(&self, board: &mut Board, mover: Side, mv: Coord) -> Result<(), MoveError> {
        match board.get(mv) {
            None => {
                return Err(MoveError::OutOfBounds {
                    coord: mv,
                    size: board.size(),
                });
            }
            Some(Cell::Owned(_)) => return Err(MoveError::Occupied(mv)),
            Some(Cell::Empty) => {}
        }

        // Compute the full flip set before touching the board so a
        // rejected move leaves it untouched.
        let flipped = captures(board, mv, mover);
        if flipped.is_empty() {
            return Err(MoveError::NoCaptures(mv));
        }

        board.set(mv, Cell::Owned(mover))?;
        for at in flipped {
            board.set(at, Cell::Owned(mover))?;
        }
        Ok(())
    }

    fn can_move(&self, board: &Board, mover: Side) -> bool {
        has_any_move(board, mover)
    }

    fn outcome(&self, board: &Board) -> Option<Outcome> {
        if has_any_move(board, Side::First) || has_any_move(board, Side::Second) {
            return None;
        }

        let first = board.count(Side::First);
        let second = board.count(Side::Second);
        Some(match first.cmp(&second) {
            std::cmp::Ordering::Greater => Outcome::Won(Side::First),
            std::cmp::Ordering::Less => Outcome::Won(Side::Second),
            std::cmp::Ordering::Equal => Outcome::Draw,
        })
    }

    fn side_label(&self, side: Side) -> &'static str {
        match side {
            Side::First => "black",
            Side::Second => "white",
        }
    }
}
