//! Automated agents: a declared name/author pair around an opaque
//! decision function, sandboxed under a wall-clock budget.

use super::Player;
use crate::error::PlayerError;
use crate::sandbox;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// An agent's decision function: state snapshot in, proposed move out.
///
/// The engine never inspects the closure; whether it blocks, errors,
/// panics or returns an illegal move, the sandbox and the retry policy
/// absorb it.
pub type Strategy<V, M> = Arc<dyn Fn(V) -> anyhow::Result<M> + Send + Sync>;

/// An automated player.
pub struct Agent<V, M> {
    name: String,
    author: String,
    budget: Duration,
    strategy: Strategy<V, M>,
}

impl<V, M> Agent<V, M> {
    /// Wraps a decision function as a player.
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        budget: Duration,
        strategy: impl Fn(V) -> anyhow::Result<M> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            budget,
            strategy: Arc::new(strategy),
        }
    }

    /// Declared author of the strategy.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// "Name, author" as shown in standings and logs.
    pub fn credit(&self) -> String {
        format!("{}, {}", self.name, self.author)
    }
}

impl<V, M> fmt::Debug for Agent<V, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Agent")
            .field("name", &self.name)
            .field("author", &self.author)
            .field("budget", &self.budget)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<V, M> Player for Agent<V, M>
where
    V: Clone + Send + Sync + 'static,
    M: Send + fmt::Debug + 'static,
{
    type View = V;
    type Move = M;

    async fn propose(&mut self, view: V) -> Result<M, PlayerError> {
        debug!(agent = %self.name, "running strategy in sandbox");
        sandbox::run_with_timeout(Some(self.budget), Arc::clone(&self.strategy), view).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}
