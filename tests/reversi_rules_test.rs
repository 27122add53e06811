use bot_arena::engine::duel::DuelRules;
use bot_arena::engine::{Outcome, Side};
use bot_arena::error::MoveError;
use bot_arena::games::reversi::{Board, Reversi, captures, legal_moves};
use bot_arena::games::{Cell, Coord};

fn board_with(cells: &[(u8, u8, Side)]) -> Board {
    let mut board = Board::new();
    for &(row, col, side) in cells {
        board.set(Coord::new(row, col), Cell::Owned(side)).unwrap();
    }
    board
}

#[test]
fn opening_position_has_four_moves_per_side() {
    let board = Reversi::starting_board();
    assert_eq!(
        legal_moves(&board, Side::First),
        vec![
            Coord::new(2, 3),
            Coord::new(3, 2),
            Coord::new(4, 5),
            Coord::new(5, 4),
        ]
    );
    assert_eq!(legal_moves(&board, Side::Second).len(), 4);
}

#[test]
fn applying_a_move_flips_the_captured_run() {
    let rules = Reversi;
    let mut board = Reversi::starting_board();
    let mv = Coord::new(2, 3);
    assert_eq!(captures(&board, mv, Side::First), vec![Coord::new(3, 3)]);

    rules.apply(&mut board, Side::First, mv).unwrap();
    assert_eq!(board.get(mv), Some(Cell::Owned(Side::First)));
    assert_eq!(board.get(Coord::new(3, 3)), Some(Cell::Owned(Side::First)));
    assert_eq!(board.count(Side::First), 4);
    assert_eq!(board.count(Side::Second), 1);
}

#[test]
fn captureless_placement_is_rejected_without_touching_the_board() {
    let rules = Reversi;
    let mut board = Reversi::starting_board();
    let corner = Coord::new(0, 0);
    assert_eq!(
        rules.apply(&mut board, Side::First, corner),
        Err(MoveError::NoCaptures(corner))
    );
    assert_eq!(board, Reversi::starting_board());
}

#[test]
fn occupied_cell_is_rejected_before_capture_check() {
    let rules = Reversi;
    let mut board = Reversi::starting_board();
    let taken = Coord::new(3, 3);
    assert_eq!(
        rules.apply(&mut board, Side::First, taken),
        Err(MoveError::Occupied(taken))
    );
}

#[test]
fn equal_counts_with_no_moves_is_a_draw() {
    // Two isolated discs: neither side can capture anything.
    let board = board_with(&[(0, 0, Side::First), (7, 7, Side::Second)]);
    let rules = Reversi;
    assert!(!rules.can_move(&board, Side::First));
    assert!(!rules.can_move(&board, Side::Second));
    assert_eq!(rules.outcome(&board), Some(Outcome::Draw));
}

#[test]
fn majority_wins_when_nobody_can_move() {
    let board = board_with(&[
        (0, 0, Side::First),
        (0, 1, Side::First),
        (7, 7, Side::Second),
    ]);
    let rules = Reversi;
    assert!(!rules.can_move(&board, Side::First));
    assert!(!rules.can_move(&board, Side::Second));
    assert_eq!(rules.outcome(&board), Some(Outcome::Won(Side::First)));
}

#[test]
fn game_continues_while_either_side_can_move() {
    assert_eq!(Reversi.outcome(&Reversi::starting_board()), None);
}
