//! Built-in demonstration strategies.
//!
//! The arena has no dynamic loading of agent code; these deterministic
//! bots stand in as the default roster for the CLI and for exercising
//! the engine end to end. None of them plays well on purpose.

use super::Agent;
use crate::engine::Side;
use crate::engine::duel::{BoxedDuelist, DuelFactory};
use crate::engine::rounds::{BoxedChooser, SharedChooserFactory};
use crate::games::lowest_unique::History;
use crate::games::reversi::{self, Reversi};
use crate::games::tictactoe::TicTacToe;
use crate::games::{Cell, Coord, Grid};
use anyhow::anyhow;
use std::sync::Arc;
use std::time::Duration;

const AUTHOR: &str = "house";

/// Named factories for the 3×3 game.
pub fn tictactoe_roster(budget: Duration) -> Vec<(String, DuelFactory<TicTacToe>)> {
    vec![
        duel_entry::<TicTacToe, _>("Scanner", budget, |board: Grid<3>, _side| {
            board
                .empties()
                .next()
                .ok_or_else(|| anyhow!("no empty cell left"))
        }),
        duel_entry::<TicTacToe, _>("Middler", budget, |board: Grid<3>, _side| {
            // Centre, then corners, then whatever is left.
            let preferred = [(1, 1), (0, 0), (0, 2), (2, 0), (2, 2)];
            preferred
                .into_iter()
                .map(|(row, col)| Coord::new(row, col))
                .find(|&at| board.get(at) == Some(Cell::Empty))
                .or_else(|| board.empties().next())
                .ok_or_else(|| anyhow!("no empty cell left"))
        }),
    ]
}

/// Named factories for the 8×8 game.
pub fn reversi_roster(budget: Duration) -> Vec<(String, DuelFactory<Reversi>)> {
    vec![
        duel_entry::<Reversi, _>("Scanner", budget, |board: Grid<8>, side| {
            reversi::legal_moves(&board, side)
                .into_iter()
                .next()
                .ok_or_else(|| anyhow!("no legal move"))
        }),
        duel_entry::<Reversi, _>("Glutton", budget, |board: Grid<8>, side| {
            reversi::legal_moves(&board, side)
                .into_iter()
                .max_by_key(|&at| reversi::captures(&board, at, side).len())
                .ok_or_else(|| anyhow!("no legal move"))
        }),
    ]
}

/// Named factories for the numeric game.
pub fn lowest_unique_roster(budget: Duration) -> Vec<(String, SharedChooserFactory)> {
    vec![
        chooser_entry("Penny", budget, |_history, _count| Ok(1)),
        chooser_entry("Cycler", budget, |history: &History, count| {
            Ok((history.len() as u32 % count) + 1)
        }),
        chooser_entry("Second Fiddle", budget, |_history, count| Ok(count.min(2))),
    ]
}

fn duel_entry<R, F>(name: &str, budget: Duration, choose: F) -> (String, DuelFactory<R>)
where
    R: crate::engine::duel::DuelRules<Move = Coord>,
    F: Fn(R::Board, Side) -> anyhow::Result<Coord> + Copy + Send + Sync + 'static,
{
    let name = name.to_string();
    let factory_name = name.clone();
    let factory: DuelFactory<R> = Arc::new(move |side| {
        let strategy = move |board: R::Board| choose(board, side);
        Box::new(Agent::new(factory_name.clone(), AUTHOR, budget, strategy)) as BoxedDuelist<R>
    });
    (name, factory)
}

fn chooser_entry<F>(name: &str, budget: Duration, choose: F) -> (String, SharedChooserFactory)
where
    F: Fn(&History, u32) -> anyhow::Result<u32> + Copy + Send + Sync + 'static,
{
    let name = name.to_string();
    let factory_name = name.clone();
    let factory: SharedChooserFactory = Arc::new(move |count| {
        let strategy = move |history: History| choose(&history, count as u32);
        Box::new(Agent::new(factory_name.clone(), AUTHOR, budget, strategy)) as BoxedChooser
    });
    (name, factory)
}
