//! Round-robin series over a roster of players.
//!
//! For the duel games every ordered pair of entries meets once per
//! round (so both play each side), scoring 2 for a win and 1 each for a
//! draw. For the numeric game every match already involves the whole
//! roster, so a series simply accumulates per-match scores.

use crate::config::MatchConfig;
use crate::engine::duel::{DuelFactory, DuelMatch, DuelRules};
use crate::engine::rounds::{ChooserFactory, RoundMatch, SharedChooserFactory};
use crate::engine::{Outcome, Side};
use crate::error::EngineError;
use tracing::{info, instrument};

/// Final (or running) leaderboard: names with cumulative points,
/// sorted from best to worst.
pub type Standings = Vec<(String, u64)>;

struct Entry<R: DuelRules> {
    name: String,
    factory: DuelFactory<R>,
}

/// Round-robin series for one of the duel games.
pub struct Arena<R: DuelRules + Copy> {
    rules: R,
    entries: Vec<Entry<R>>,
    scores: Vec<u64>,
    config: MatchConfig,
}

impl<R: DuelRules + Copy> std::fmt::Debug for Arena<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arena")
            .field("entries", &self.entries.len())
            .field("scores", &self.scores)
            .finish_non_exhaustive()
    }
}

impl<R: DuelRules + Copy> Arena<R> {
    /// Creates an empty arena.
    pub fn new(rules: R, config: MatchConfig) -> Self {
        Self {
            rules,
            entries: Vec::new(),
            scores: Vec::new(),
            config,
        }
    }

    /// Registers a named player factory.
    ///
    /// A fresh player instance is built from the factory for every
    /// match, so nothing carries over between matches.
    pub fn register(&mut self, name: impl Into<String>, factory: DuelFactory<R>) {
        self.entries.push(Entry {
            name: name.into(),
            factory,
        });
        self.scores.push(0);
    }

    /// Plays `rounds` full round-robins.
    ///
    /// # Errors
    ///
    /// Stops at the first fatal engine failure; agent misbehaviour is
    /// already absorbed per match.
    #[instrument(skip(self), fields(entries = self.entries.len()))]
    pub async fn run(&mut self, rounds: u32) -> Result<Standings, EngineError> {
        for round in 1..=rounds {
            info!(round, players = self.entries.len(), "playing arena round");
            for first in 0..self.entries.len() {
                for second in 0..self.entries.len() {
                    if first == second {
                        continue;
                    }
                    self.play_pair(first, second).await?;
                }
            }
            info!(round, "standings so far");
            log_standings(&self.standings());
        }
        Ok(self.standings())
    }

    async fn play_pair(&mut self, first: usize, second: usize) -> Result<(), EngineError> {
        info!(
            first = %self.entries[first].name,
            second = %self.entries[second].name,
            "match"
        );
        let make_first = self.entries[first].factory.clone();
        let make_second = self.entries[second].factory.clone();
        let mut game = DuelMatch::new(
            self.rules,
            move |side| make_first(side),
            move |side| make_second(side),
            self.config.clone(),
        );
        let report = game.play().await?;
        match report.outcome() {
            Outcome::Won(Side::First) => self.scores[first] += 2,
            Outcome::Won(Side::Second) => self.scores[second] += 2,
            Outcome::Draw => {
                self.scores[first] += 1;
                self.scores[second] += 1;
            }
        }
        Ok(())
    }

    /// Current leaderboard.
    pub fn standings(&self) -> Standings {
        sorted_standings(
            self.entries
                .iter()
                .map(|entry| entry.name.clone())
                .zip(self.scores.iter().copied()),
        )
    }
}

/// Plays `games` numeric matches over the whole roster, summing each
/// match's cumulative scores into one leaderboard.
///
/// # Errors
///
/// Stops at the first fatal engine failure.
#[instrument(skip(entries, config), fields(entries = entries.len()))]
pub async fn run_lowest_unique_series(
    entries: &[(String, SharedChooserFactory)],
    games: u32,
    config: &MatchConfig,
) -> Result<Standings, EngineError> {
    let mut totals = vec![0u64; entries.len()];
    for game in 1..=games {
        info!(game, "playing numeric match");
        let factories: Vec<ChooserFactory> = entries
            .iter()
            .map(|(_, factory)| {
                let factory = factory.clone();
                Box::new(move |count: usize| factory(count)) as ChooserFactory
            })
            .collect();
        let mut round_match = RoundMatch::new(factories, config.clone());
        let report = round_match.play().await?;
        for (total, earned) in totals.iter_mut().zip(report.scores()) {
            *total += *earned;
        }
        let standings = sorted_standings(
            entries
                .iter()
                .map(|(name, _)| name.clone())
                .zip(totals.iter().copied()),
        );
        log_standings(&standings);
    }
    Ok(sorted_standings(
        entries.iter().map(|(name, _)| name.clone()).zip(totals),
    ))
}

fn sorted_standings(pairs: impl IntoIterator<Item = (String, u64)>) -> Standings {
    let mut standings: Standings = pairs.into_iter().collect();
    standings.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    standings
}

fn log_standings(standings: &Standings) {
    for (name, score) in standings {
        info!(player = %name, score = *score, "standing");
    }
}
