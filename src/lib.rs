//! Engine for turn-based games between untrusted computer players.
//!
//! The engine drives three bundled games: 3x3 noughts and crosses,
//! 8x8 reversi, and a simultaneous lowest-unique number game. Players
//! plug in behind the [`players::Player`] trait; pure-function bots
//! are wrapped by [`players::Agent`], which runs each move on a
//! blocking worker under a wall-clock budget so a stuck or crashed bot
//! cannot stall a match.
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod games;
pub mod players;
pub mod sandbox;

pub use arena::{Arena, Standings};
pub use config::MatchConfig;
pub use engine::duel::{DuelMatch, DuelReport, DuelRules};
pub use engine::rounds::{RoundMatch, RoundReport};
pub use engine::{Outcome, Side};
pub use error::{EngineError, MoveError, PlayerError};
pub use players::{Agent, Player, Strategy};
