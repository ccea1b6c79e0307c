//! Batch what-if runner
//!
//! Plays many independent games with a fixed allocation strategy and
//! summarises how often it wins or loses. Each game gets its own seed drawn
//! from a master `SmallRng`, so a batch is reproducible for a given master
//! seed whether it runs in parallel or not.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::{Deserialize, Serialize};

use crate::config::GameRules;
use crate::error::EngineError;
use crate::model::{CategoryAmounts, GameState, Outcome, UserProfile};
use crate::month::{advance_month, process_month_end};
use crate::random::SeededRandom;

/// Fraction of available cash put into each category every month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationStrategy {
    pub fractions: CategoryAmounts,
}

impl AllocationStrategy {
    /// `None` when a fraction is negative or non-finite, or they sum past 1.
    #[must_use]
    pub fn new(fractions: CategoryAmounts) -> Option<Self> {
        let valid = fractions.iter().all(|(_, f)| f.is_finite() && f >= 0.0)
            && fractions.total() <= 1.0 + 1e-9;
        valid.then_some(Self { fractions })
    }

    /// Whole-unit contributions for this month; never more than `cash`.
    #[must_use]
    pub fn contributions(&self, cash: f64) -> CategoryAmounts {
        let available = cash.max(0.0);
        CategoryAmounts::from_fn(|c| (available * self.fractions.get(c)).floor())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    pub iterations: usize,
    pub max_months: u32,
    pub seed: u64,
}

/// One finished (or abandoned) game
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameRun {
    pub seed: u64,
    pub outcome: Option<Outcome>,
    pub months_played: u32,
    pub final_net_worth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub runs: usize,
    pub wins: usize,
    pub losses: usize,
    pub unfinished: usize,
    pub mean_final_net_worth: f64,
    pub p10_final_net_worth: f64,
    pub p50_final_net_worth: f64,
    pub p90_final_net_worth: f64,
    /// Average months taken by winning games
    pub mean_months_to_win: Option<f64>,
}

impl BatchSummary {
    #[must_use]
    pub fn from_runs(runs: &[GameRun]) -> Self {
        let count = runs.len();
        let wins = runs.iter().filter(|r| r.outcome == Some(Outcome::Win)).count();
        let losses = runs.iter().filter(|r| r.outcome == Some(Outcome::Loss)).count();

        let mut net_worths: Vec<f64> = runs.iter().map(|r| r.final_net_worth).collect();
        net_worths.sort_by(f64::total_cmp);

        let mean_final_net_worth = if count == 0 {
            0.0
        } else {
            net_worths.iter().sum::<f64>() / count as f64
        };

        let mean_months_to_win = (wins > 0).then(|| {
            let total: u32 = runs
                .iter()
                .filter(|r| r.outcome == Some(Outcome::Win))
                .map(|r| r.months_played)
                .sum();
            f64::from(total) / wins as f64
        });

        Self {
            runs: count,
            wins,
            losses,
            unfinished: count - wins - losses,
            mean_final_net_worth,
            p10_final_net_worth: percentile(&net_worths, 0.10),
            p50_final_net_worth: percentile(&net_worths, 0.50),
            p90_final_net_worth: percentile(&net_worths, 0.90),
            mean_months_to_win,
        }
    }
}

/// Nearest-rank percentile of sorted values
fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let rank = (p * sorted.len() as f64).ceil() as usize;
    sorted[rank.clamp(1, sorted.len()) - 1]
}

/// Play one game to a terminal state or `max_months`, whichever comes first.
pub fn play_game(
    profile: &UserProfile,
    rules: &GameRules,
    strategy: &AllocationStrategy,
    max_months: u32,
    seed: u64,
) -> Result<GameRun, EngineError> {
    let mut rng = SeededRandom::new(seed);
    let mut state = GameState::new(profile.clone(), rules.start_year);
    let mut months_played = 0;

    while months_played < max_months && !state.is_over() {
        let contributions = strategy.contributions(state.cash);
        let (next, _) = if contributions.total() > 0.0 {
            advance_month(&state, &contributions, rules, &mut rng)?
        } else {
            process_month_end(&state, rules, &mut rng)?
        };
        state = next;
        months_played += 1;
    }

    Ok(GameRun {
        seed,
        outcome: state.phase.outcome(),
        months_played,
        final_net_worth: state.net_worth,
    })
}

/// Play `config.iterations` games and summarise them.
pub fn run_batch(
    profile: &UserProfile,
    rules: &GameRules,
    strategy: &AllocationStrategy,
    config: &BatchConfig,
) -> Result<(Vec<GameRun>, BatchSummary), EngineError> {
    let mut master = SmallRng::seed_from_u64(config.seed);
    let seeds: Vec<u64> = (0..config.iterations).map(|_| master.next_u64()).collect();

    tracing::info!(
        iterations = config.iterations,
        max_months = config.max_months,
        seed = config.seed,
        "starting batch"
    );

    #[cfg(feature = "parallel")]
    let runs = seeds
        .into_par_iter()
        .map(|seed| play_game(profile, rules, strategy, config.max_months, seed))
        .collect::<Result<Vec<_>, _>>()?;

    #[cfg(not(feature = "parallel"))]
    let runs = seeds
        .into_iter()
        .map(|seed| play_game(profile, rules, strategy, config.max_months, seed))
        .collect::<Result<Vec<_>, _>>()?;

    let summary = BatchSummary::from_runs(&runs);
    Ok((runs, summary))
}
