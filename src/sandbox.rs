//! Bounded execution of untrusted decision functions.
//!
//! An agent's strategy is an opaque, possibly slow or buggy closure. It
//! runs on a dedicated blocking task so the engine's thread of control
//! is never held hostage: once the budget elapses the engine moves on.
//! The abandoned call keeps its thread until it returns on its own, but
//! its result is dropped unobserved.

use crate::error::PlayerError;
use crate::players::Strategy;
use std::time::Duration;
use tokio::task::{self, JoinError};
use tracing::warn;

/// Runs `strategy(view)` with a wall-clock budget.
///
/// `budget: None` waits indefinitely (interactive players). A strategy
/// error or panic is captured and reported as a [`PlayerError`], never
/// propagated as a crash.
///
/// # Errors
///
/// - [`PlayerError::Timeout`] when the budget elapses first.
/// - [`PlayerError::Strategy`] when the strategy returns an error.
/// - [`PlayerError::Panicked`] when the strategy panics.
/// - [`PlayerError::Scheduling`] when the runtime cannot run the call
///   to completion; callers treat this as fatal.
pub async fn run_with_timeout<V, M>(
    budget: Option<Duration>,
    strategy: Strategy<V, M>,
    view: V,
) -> Result<M, PlayerError>
where
    V: Send + 'static,
    M: Send + 'static,
{
    let handle = task::spawn_blocking(move || strategy(view));

    let joined = match budget {
        Some(limit) => match tokio::time::timeout(limit, handle).await {
            Ok(joined) => joined,
            Err(_elapsed) => {
                // Dropping the handle detaches the still-running call;
                // its eventual result is never observed.
                warn!(budget_ms = limit.as_millis() as u64, "agent call timed out");
                return Err(PlayerError::Timeout(limit));
            }
        },
        None => handle.await,
    };

    match joined {
        Ok(Ok(mv)) => Ok(mv),
        Ok(Err(err)) => Err(PlayerError::Strategy(format!("{err:#}"))),
        Err(join) if join.is_panic() => Err(PlayerError::Panicked(panic_message(join))),
        Err(join) => Err(PlayerError::Scheduling(join.to_string())),
    }
}

fn panic_message(join: JoinError) -> String {
    let payload = join.into_panic();
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
