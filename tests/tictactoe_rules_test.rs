use bot_arena::engine::duel::DuelRules;
use bot_arena::engine::{Outcome, Side};
use bot_arena::error::MoveError;
use bot_arena::games::tictactoe::{Board, TicTacToe, line_owner};
use bot_arena::games::{Cell, Coord};

fn filled(cells: &[(u8, u8, Side)]) -> Board {
    let mut board = Board::new();
    for &(row, col, side) in cells {
        board.set(Coord::new(row, col), Cell::Owned(side)).unwrap();
    }
    board
}

#[test]
fn top_row_wins() {
    let rules = TicTacToe;
    let mut board = Board::new();
    for (side, at) in [
        (Side::First, Coord::new(0, 0)),
        (Side::Second, Coord::new(1, 0)),
        (Side::First, Coord::new(0, 1)),
        (Side::Second, Coord::new(1, 1)),
    ] {
        rules.apply(&mut board, side, at).unwrap();
        assert_eq!(rules.outcome(&board), None);
    }
    rules.apply(&mut board, Side::First, Coord::new(0, 2)).unwrap();
    assert_eq!(line_owner(&board), Some(Side::First));
    assert_eq!(rules.outcome(&board), Some(Outcome::Won(Side::First)));
}

#[test]
fn completed_line_on_full_board_still_wins() {
    // X X X / O O X / X O O: full, with a line across the top.
    let board = filled(&[
        (0, 0, Side::First),
        (0, 1, Side::First),
        (0, 2, Side::First),
        (1, 0, Side::Second),
        (1, 1, Side::Second),
        (1, 2, Side::First),
        (2, 0, Side::First),
        (2, 1, Side::Second),
        (2, 2, Side::Second),
    ]);
    assert!(board.is_full());
    assert_eq!(TicTacToe.outcome(&board), Some(Outcome::Won(Side::First)));
}

#[test]
fn full_board_without_line_is_a_draw() {
    // X O X / X O O / O X X: full, no line anywhere.
    let board = filled(&[
        (0, 0, Side::First),
        (0, 1, Side::Second),
        (0, 2, Side::First),
        (1, 0, Side::First),
        (1, 1, Side::Second),
        (1, 2, Side::Second),
        (2, 0, Side::Second),
        (2, 1, Side::First),
        (2, 2, Side::First),
    ]);
    assert_eq!(line_owner(&board), None);
    assert_eq!(TicTacToe.outcome(&board), Some(Outcome::Draw));
}

#[test]
fn occupied_cell_is_rejected_without_touching_the_board() {
    let rules = TicTacToe;
    let mut board = Board::new();
    let centre = Coord::new(1, 1);
    rules.apply(&mut board, Side::First, centre).unwrap();

    let before = board.clone();
    let first_try = rules.apply(&mut board, Side::Second, centre);
    assert_eq!(first_try, Err(MoveError::Occupied(centre)));
    assert_eq!(board, before);

    // Validation is pure: the same move fails the same way again.
    let second_try = rules.apply(&mut board, Side::Second, centre);
    assert_eq!(second_try, first_try);
    assert_eq!(board, before);
}

#[test]
fn out_of_bounds_is_rejected() {
    let rules = TicTacToe;
    let mut board = Board::new();
    let outside = Coord::new(3, 0);
    assert_eq!(
        rules.apply(&mut board, Side::First, outside),
        Err(MoveError::OutOfBounds {
            coord: outside,
            size: 3
        })
    );
    assert_eq!(board, Board::new());
}
