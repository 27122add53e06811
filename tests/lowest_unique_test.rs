use bot_arena::config::MatchConfig;
use bot_arena::engine::rounds::{BoxedChooser, ChooserFactory, RoundMatch};
use bot_arena::error::MoveError;
use bot_arena::games::lowest_unique::{History, round_winner, validate_choice};
use bot_arena::players::Agent;
use std::time::Duration;

fn chooser(
    name: &str,
    pick: impl Fn(&History, u32) -> u32 + Send + Sync + Copy + 'static,
) -> ChooserFactory {
    let name = name.to_string();
    Box::new(move |count| {
        Box::new(Agent::new(
            name,
            "test",
            Duration::from_millis(500),
            move |history: History| Ok(pick(&history, count as u32)),
        )) as BoxedChooser
    })
}

fn test_config(base_rounds: u32) -> MatchConfig {
    MatchConfig::default()
        .with_base_rounds(base_rounds)
        .with_attempts(2)
}

#[test]
fn lowest_unique_value_scores() {
    assert_eq!(round_winner(&[Some(3), Some(3), Some(5)]), Some((2, 5)));
    assert_eq!(
        round_winner(&[Some(2), Some(1), Some(2), Some(3)]),
        Some((1, 1))
    );
}

#[test]
fn round_without_a_unique_value_scores_nobody() {
    assert_eq!(round_winner(&[Some(1), Some(1), Some(2), Some(2)]), None);
    assert_eq!(round_winner(&[None, Some(2), Some(2)]), None);
}

#[test]
fn forfeited_entries_are_excluded_from_the_tally() {
    // The forfeit neither scores nor breaks anyone else's uniqueness.
    assert_eq!(round_winner(&[None, Some(1), Some(2)]), Some((1, 1)));
    assert_eq!(round_winner(&[None, None, None]), None);
}

#[test]
fn choices_outside_the_player_count_are_rejected() {
    assert!(validate_choice(1, 3).is_ok());
    assert!(validate_choice(3, 3).is_ok());
    assert_eq!(
        validate_choice(0, 3),
        Err(MoveError::ChoiceOutOfRange { value: 0, max: 3 })
    );
    assert_eq!(
        validate_choice(4, 3),
        Err(MoveError::ChoiceOutOfRange { value: 4, max: 3 })
    );
}

#[tokio::test]
async fn distinct_constant_choices_give_the_lowest_every_round() {
    let factories = vec![
        chooser("one", |_, _| 1),
        chooser("two", |_, _| 2),
        chooser("three", |_, _| 3),
    ];
    let mut game = RoundMatch::new(factories, test_config(2));
    let report = game.play().await.unwrap();

    assert_eq!(*report.winner(), 0);
    assert_eq!(report.scores(), &vec![2, 0, 0]);
    assert_eq!(report.history().len(), 2);
}

#[tokio::test]
async fn shared_top_score_forces_tie_break_rounds() {
    // Both pick 1 in the base round, so nobody scores and the match
    // must continue; the second player then switches to 2.
    let factories = vec![
        chooser("steady", |_, _| 1),
        chooser("switcher", |history, _| {
            if history.is_empty() { 1 } else { 2 }
        }),
    ];
    let mut game = RoundMatch::new(factories, test_config(1));
    let report = game.play().await.unwrap();

    assert_eq!(report.history().len(), 2);
    assert_eq!(*report.winner(), 0);
    assert_eq!(report.scores(), &vec![1, 0]);
}

#[tokio::test]
async fn forfeit_loses_the_round_but_not_the_match() {
    let broken: ChooserFactory = Box::new(|_count| {
        Box::new(Agent::new(
            "broken",
            "test",
            Duration::from_millis(500),
            |_history: History| anyhow::bail!("refusing to choose"),
        )) as BoxedChooser
    });
    let factories = vec![broken, chooser("one", |_, _| 1)];
    let mut game = RoundMatch::new(factories, test_config(1));
    let report = game.play().await.unwrap();

    assert_eq!(report.history().rounds(), &[vec![None, Some(1)]]);
    assert_eq!(*report.winner(), 1);
    assert_eq!(report.scores(), &vec![0, 1]);
}
