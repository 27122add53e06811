//! Command line entry point.

use anyhow::anyhow;
use bot_arena::arena::{Arena, Standings, run_lowest_unique_series};
use bot_arena::cli::{Cli, Command, GameKind};
use bot_arena::config::MatchConfig;
use bot_arena::engine::duel::{BoxedDuelist, DuelFactory, DuelMatch, DuelRules};
use bot_arena::engine::rounds::{BoxedChooser, ChooserFactory, RoundMatch};
use bot_arena::engine::Outcome;
use bot_arena::games::reversi::Reversi;
use bot_arena::games::tictactoe::TicTacToe;
use bot_arena::games::Coord;
use bot_arena::players::roster;
use bot_arena::players::{ConsoleChooser, ConsolePlayer};
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Play {
            game,
            human,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let budget = config.agent_budget();
            match game {
                GameKind::Tictactoe => {
                    play_duel(TicTacToe, roster::tictactoe_roster(budget), human, config).await
                }
                GameKind::Reversi => {
                    play_duel(Reversi, roster::reversi_roster(budget), human, config).await
                }
                GameKind::LowestUnique => play_lowest_unique(human, config).await,
            }
        }
        Command::Arena {
            game,
            rounds,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let budget = config.agent_budget();
            match game {
                GameKind::Tictactoe => {
                    run_duel_arena(TicTacToe, roster::tictactoe_roster(budget), rounds, config)
                        .await
                }
                GameKind::Reversi => {
                    run_duel_arena(Reversi, roster::reversi_roster(budget), rounds, config).await
                }
                GameKind::LowestUnique => {
                    let entries = roster::lowest_unique_roster(budget);
                    let standings = run_lowest_unique_series(&entries, rounds, &config).await?;
                    print_standings(&standings);
                    Ok(())
                }
            }
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<MatchConfig> {
    match path {
        Some(path) => Ok(MatchConfig::from_file(path)?),
        None => Ok(MatchConfig::default()),
    }
}

/// Plays one duel match; with `--human` the first seat reads moves from
/// the terminal and meets the first bundled player.
async fn play_duel<R>(
    rules: R,
    roster: Vec<(String, DuelFactory<R>)>,
    human: bool,
    config: MatchConfig,
) -> anyhow::Result<()>
where
    R: DuelRules<Move = Coord> + Copy,
{
    let mut entries = roster.into_iter();
    let (name_a, make_a) = entries.next().ok_or_else(|| anyhow!("empty roster"))?;
    let (name_b, make_b) = entries
        .next()
        .ok_or_else(|| anyhow!("roster needs two players"))?;

    let mut game = if human {
        println!("You play {} against {name_a}.", rules.side_label(bot_arena::Side::First));
        DuelMatch::new(
            rules,
            |_side| Box::new(ConsolePlayer::<R::Board>::new("you")) as BoxedDuelist<R>,
            move |side| make_a(side),
            config,
        )
    } else {
        println!("{name_a} versus {name_b}.");
        DuelMatch::new(
            rules,
            move |side| make_a(side),
            move |side| make_b(side),
            config,
        )
    };

    let report = game.play().await?;
    println!("{}", game.board());
    match report.outcome() {
        Outcome::Won(side) => println!("{} wins.", rules.side_label(*side)),
        Outcome::Draw => println!("Draw."),
    }
    Ok(())
}

/// Plays one numeric match; with `--human` an extra terminal seat joins
/// the bundled players.
async fn play_lowest_unique(human: bool, config: MatchConfig) -> anyhow::Result<()> {
    let mut names = Vec::new();
    let mut factories: Vec<ChooserFactory> = Vec::new();
    if human {
        names.push("you".to_string());
        factories.push(Box::new(|count| {
            Box::new(ConsoleChooser::new("you", count)) as BoxedChooser
        }));
    }
    for (name, factory) in roster::lowest_unique_roster(config.agent_budget()) {
        names.push(name);
        factories.push(Box::new(move |count| factory(count)));
    }

    let mut game = RoundMatch::new(factories, config);
    let report = game.play().await?;
    println!("Final scores after {} rounds:", report.history().len());
    for (name, score) in names.iter().zip(report.scores()) {
        println!("  {name}: {score}");
    }
    println!("Winner: {}", names[*report.winner()]);
    Ok(())
}

async fn run_duel_arena<R>(
    rules: R,
    roster: Vec<(String, DuelFactory<R>)>,
    rounds: u32,
    config: MatchConfig,
) -> anyhow::Result<()>
where
    R: DuelRules + Copy,
{
    let mut arena = Arena::new(rules, config);
    for (name, factory) in roster {
        arena.register(name, factory);
    }
    let standings = arena.run(rounds).await?;
    print_standings(&standings);
    Ok(())
}

fn print_standings(standings: &Standings) {
    println!("Standings:");
    for (rank, (name, score)) in standings.iter().enumerate() {
        println!("  {}. {name}: {score}", rank + 1);
    }
}
