//! Player capability: anything that can be asked for a move.
//!
//! The engine is polymorphic over [`Player`] and treats every
//! implementation identically; timeout policy lives inside the
//! implementation (agents sandbox themselves under a budget, console
//! players wait forever).

mod agent;
mod console;
pub mod roster;

pub use agent::{Agent, Strategy};
pub use console::{ConsoleChooser, ConsolePlayer};

use crate::error::PlayerError;
use async_trait::async_trait;
use std::fmt;

/// A participant in a match.
///
/// `View` is the immutable snapshot handed to the player each attempt:
/// an independent copy, never the engine's live state. `Move` is the
/// raw proposal fed back to the rule engine, which alone decides
/// legality.
#[async_trait]
pub trait Player: Send {
    /// Snapshot of game state visible to this player.
    type View: Clone + Send + 'static;
    /// The move value this player produces.
    type Move: Send + fmt::Debug + 'static;

    /// Proposes a move for the current turn.
    ///
    /// # Errors
    ///
    /// Any [`PlayerError`] other than a fatal one costs the player a
    /// solicitation attempt and is retried by the engine.
    async fn propose(&mut self, view: Self::View) -> Result<Self::Move, PlayerError>;

    /// Display name, used in logs and standings.
    fn name(&self) -> &str;
}
