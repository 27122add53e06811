use anyhow::anyhow;
use bot_arena::arena::{Arena, run_lowest_unique_series};
use bot_arena::config::MatchConfig;
use bot_arena::engine::duel::{BoxedDuelist, DuelFactory};
use bot_arena::engine::rounds::{BoxedChooser, SharedChooserFactory};
use bot_arena::games::lowest_unique::History;
use bot_arena::games::tictactoe::{Board, TicTacToe};
use bot_arena::players::Agent;
use std::sync::Arc;
use std::time::Duration;

fn scanner_factory(name: &'static str) -> DuelFactory<TicTacToe> {
    Arc::new(move |_side| {
        Box::new(Agent::new(
            name,
            "test",
            Duration::from_millis(500),
            |board: Board| {
                board
                    .empties()
                    .next()
                    .ok_or_else(|| anyhow!("no empty cell left"))
            },
        )) as BoxedDuelist<TicTacToe>
    })
}

#[tokio::test]
async fn round_robin_plays_both_seatings() {
    let mut arena = Arena::new(TicTacToe, MatchConfig::default());
    arena.register("alpha", scanner_factory("alpha"));
    arena.register("beta", scanner_factory("beta"));

    // Identical first-empty strategies: whoever moves first wins, so
    // one round of both seatings splits the points evenly.
    let standings = arena.run(1).await.unwrap();
    assert_eq!(standings.len(), 2);
    assert_eq!(standings[0].1, 2);
    assert_eq!(standings[1].1, 2);
    assert_eq!(standings[0].0, "alpha");
}

#[tokio::test]
async fn numeric_series_accumulates_match_scores() {
    let constant = |name: &'static str, value: u32| -> (String, SharedChooserFactory) {
        (
            name.to_string(),
            Arc::new(move |_count| {
                Box::new(Agent::new(
                    name,
                    "test",
                    Duration::from_millis(500),
                    move |_history: History| Ok(value),
                )) as BoxedChooser
            }),
        )
    };
    let entries = vec![constant("one", 1), constant("two", 2)];
    let config = MatchConfig::default().with_base_rounds(2).with_attempts(2);

    let standings = run_lowest_unique_series(&entries, 3, &config).await.unwrap();
    // "one" takes every round of every match: 2 rounds x 1 point x 3 matches.
    assert_eq!(standings[0], ("one".to_string(), 6));
    assert_eq!(standings[1], ("two".to_string(), 0));
}
