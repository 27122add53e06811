//! Match configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Knobs shared by every match kind.
///
/// Defaults mirror the classic arena rules: five total tries per turn,
/// three seconds of thinking time for a bot, one hundred base rounds in
/// the numeric game.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Total solicitation attempts per turn, forfeiting when exhausted.
    #[serde(default = "default_attempts")]
    attempts: u32,

    /// Wall-clock budget for one agent decision, in milliseconds.
    /// Interactive players are never subject to it.
    #[serde(default = "default_agent_budget_ms")]
    agent_budget_ms: u64,

    /// Rounds the numeric game plays before tie-break rounds begin.
    #[serde(default = "default_base_rounds")]
    base_rounds: u32,
}

fn default_attempts() -> u32 {
    5
}

fn default_agent_budget_ms() -> u64 {
    3_000
}

fn default_base_rounds() -> u32 {
    100
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            attempts: default_attempts(),
            agent_budget_ms: default_agent_budget_ms(),
            base_rounds: default_base_rounds(),
        }
    }
}

impl MatchConfig {
    /// The agent budget as a [`Duration`].
    pub fn agent_budget(&self) -> Duration {
        Duration::from_millis(self.agent_budget_ms)
    }

    /// Loads configuration from a TOML file; absent fields take their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!(path = %path.as_ref().display(), "loading match config");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("failed to read config file: {e}")))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("failed to parse config: {e}")))?;

        info!(
            attempts = config.attempts,
            agent_budget_ms = config.agent_budget_ms,
            base_rounds = config.base_rounds,
            "match config loaded"
        );
        Ok(config)
    }

    /// Builder-style override, mostly for tests and the CLI.
    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    /// Builder-style override for the agent budget.
    pub fn with_agent_budget(mut self, budget: Duration) -> Self {
        self.agent_budget_ms = budget.as_millis() as u64;
        self
    }

    /// Builder-style override for the numeric game's base round count.
    pub fn with_base_rounds(mut self, base_rounds: u32) -> Self {
        self.base_rounds = base_rounds;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("config error: {message}")]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn new(message: String) -> Self {
        Self { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_rules() {
        let config = MatchConfig::default();
        assert_eq!(*config.attempts(), 5);
        assert_eq!(config.agent_budget(), Duration::from_secs(3));
        assert_eq!(*config.base_rounds(), 100);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: MatchConfig = toml::from_str("attempts = 2").unwrap();
        assert_eq!(*config.attempts(), 2);
        assert_eq!(*config.base_rounds(), 100);
    }
}
