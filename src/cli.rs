//! Command line surface.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Turn-based game engine for untrusted computer players.
#[derive(Debug, Parser)]
#[command(name = "bot_arena", version, about)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Which game to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GameKind {
    /// 3x3 noughts and crosses.
    Tictactoe,
    /// 8x8 reversi.
    Reversi,
    /// Simultaneous lowest-unique number game.
    LowestUnique,
}

/// What to run.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Play a single match between bundled players.
    Play {
        /// Game to play.
        #[arg(value_enum)]
        game: GameKind,
        /// Take the first seat yourself at the terminal.
        #[arg(long)]
        human: bool,
        /// Path to a TOML match configuration.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Run a round-robin series between the bundled players.
    Arena {
        /// Game to play.
        #[arg(value_enum)]
        game: GameKind,
        /// Number of rounds (full round-robins, or numeric matches).
        #[arg(long, default_value_t = 10)]
        rounds: u32,
        /// Path to a TOML match configuration.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
