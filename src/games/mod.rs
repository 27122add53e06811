//! Game rule engines and the board model they share.
//!
//! The two grid games (tic-tac-toe and reversi) play on a square
//! [`Grid`] of [`Cell`]s and move by [`Coord`]; the numeric game keeps a
//! round [`History`](lowest_unique::History) instead of a board.

pub mod lowest_unique;
pub mod reversi;
pub mod tictactoe;

use crate::engine::Side;
use crate::error::MoveError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A board coordinate: row and column, both zero-based.
///
/// Equality is structural; a coordinate carries no game identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, counted from the top.
    pub row: u8,
    /// Column index, counted from the left.
    pub col: u8,
}

impl Coord {
    /// Creates a coordinate.
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One cell of a grid board.
///
/// A cell transitions from `Empty` to `Owned` at most once per game,
/// except in reversi where captures flip ownership between sides.
/// No cell ever returns to `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has claimed this cell.
    Empty,
    /// The cell belongs to a side.
    Owned(Side),
}

/// Square board of `N`×`N` cells, owned by exactly one in-progress match.
///
/// All mutation goes through a rule engine's `apply`; players only ever
/// see clones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<const N: usize> {
    cells: [[Cell; N]; N],
}

impl<const N: usize> Grid<N> {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; N]; N],
        }
    }

    /// Board side length.
    pub fn size(&self) -> u8 {
        N as u8
    }

    /// Returns the cell at `at`, or `None` when `at` is off the board.
    pub fn get(&self, at: Coord) -> Option<Cell> {
        self.cells
            .get(at.row as usize)
            .and_then(|row| row.get(at.col as usize))
            .copied()
    }

    /// Sets the cell at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] when `at` is off the board.
    pub fn set(&mut self, at: Coord, cell: Cell) -> Result<(), MoveError> {
        let size = self.size();
        let slot = self
            .cells
            .get_mut(at.row as usize)
            .and_then(|row| row.get_mut(at.col as usize))
            .ok_or(MoveError::OutOfBounds { coord: at, size })?;
        *slot = cell;
        Ok(())
    }

    /// Cell lookup with signed coordinates, for directional walks that
    /// may step off the board.
    pub(crate) fn at_signed(&self, row: i16, col: i16) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        self.get(Coord::new(row as u8, col as u8))
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| *cell != Cell::Empty)
    }

    /// Number of cells owned by `side`.
    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Owned(side))
            .count()
    }

    /// Iterates every empty coordinate in row-major order.
    pub fn empties(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..N).flat_map(move |row| {
            (0..N).filter_map(move |col| {
                let at = Coord::new(row as u8, col as u8);
                (self.get(at) == Some(Cell::Empty)).then_some(at)
            })
        })
    }
}

impl<const N: usize> Default for Grid<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Display for Grid<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 0..N {
            write!(f, " {col}")?;
        }
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "\n{row}")?;
            for cell in cells {
                let glyph = match cell {
                    Cell::Empty => '.',
                    Cell::Owned(Side::First) => 'X',
                    Cell::Owned(Side::Second) => 'O',
                };
                write!(f, " {glyph}")?;
            }
        }
        Ok(())
    }
}
