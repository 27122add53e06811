//! Interactive players reading moves from the terminal.
//!
//! Console players have no move budget by design: a human may think as
//! long as they like. Malformed input re-prompts locally; out-of-range
//! or illegal moves still go through the engine's validation and cost
//! an attempt, exactly like a bot's.

use super::Player;
use crate::error::PlayerError;
use crate::games::Coord;
use crate::games::lowest_unique::History;
use async_trait::async_trait;
use std::fmt;
use std::marker::PhantomData;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

fn stdin_lines() -> Lines<BufReader<Stdin>> {
    BufReader::new(tokio::io::stdin()).lines()
}

/// A human player for the grid games, submitting `row col` pairs.
pub struct ConsolePlayer<B> {
    name: String,
    input: Lines<BufReader<Stdin>>,
    _view: PhantomData<fn() -> B>,
}

impl<B> ConsolePlayer<B> {
    /// Creates a console player reading from stdin.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input: stdin_lines(),
            _view: PhantomData,
        }
    }
}

impl<B> fmt::Debug for ConsolePlayer<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsolePlayer")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<B> Player for ConsolePlayer<B>
where
    B: fmt::Display + Clone + Send + Sync + 'static,
{
    type View = B;
    type Move = Coord;

    async fn propose(&mut self, view: B) -> Result<Coord, PlayerError> {
        println!("Current board:\n{view}");
        loop {
            println!("Your move? Enter row and column, separated by a space.");
            let line = read_line(&mut self.input).await?;
            let mut numbers = line.split_whitespace().map(str::parse::<u8>);
            match (numbers.next(), numbers.next(), numbers.next()) {
                (Some(Ok(row)), Some(Ok(col)), None) => return Ok(Coord::new(row, col)),
                _ => println!("Bad format. Enter two numbers, row first."),
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A human player for the numeric game, submitting a single value.
pub struct ConsoleChooser {
    name: String,
    player_count: usize,
    input: Lines<BufReader<Stdin>>,
}

impl ConsoleChooser {
    /// Creates a console player for a table of `player_count` seats.
    pub fn new(name: impl Into<String>, player_count: usize) -> Self {
        Self {
            name: name.into(),
            player_count,
            input: stdin_lines(),
        }
    }
}

impl fmt::Debug for ConsoleChooser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleChooser")
            .field("name", &self.name)
            .field("player_count", &self.player_count)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Player for ConsoleChooser {
    type View = History;
    type Move = u32;

    async fn propose(&mut self, view: History) -> Result<u32, PlayerError> {
        if !view.is_empty() {
            println!("Rounds so far:");
            for (number, round) in view.rounds().iter().enumerate() {
                let choices: Vec<String> = round
                    .iter()
                    .map(|c| c.map_or_else(|| "-".to_string(), |v| v.to_string()))
                    .collect();
                println!("  round {}: {}", number + 1, choices.join(" "));
            }
        }
        loop {
            println!(
                "Round {}. Your value? Enter one number from 1 to {}.",
                view.len() + 1,
                self.player_count
            );
            let line = read_line(&mut self.input).await?;
            match line.trim().parse::<u32>() {
                Ok(value) => return Ok(value),
                Err(_) => println!("Bad format. Enter a single number."),
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

async fn read_line(input: &mut Lines<BufReader<Stdin>>) -> Result<String, PlayerError> {
    match input.next_line().await {
        Ok(Some(line)) => Ok(line),
        Ok(None) => Err(PlayerError::InputClosed("end of input".to_string())),
        Err(err) => Err(PlayerError::InputClosed(err.to_string())),
    }
}
