//! Annealing execution loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use super::config::AnnealConfig;
use super::moves::propose;
use super::temperature::temperature;
use super::types::GroupingProblem;
use crate::solution::Assignment;

/// Result of one annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult {
    /// The best assignment found.
    pub best: Assignment,

    /// Score of the best assignment. Zero means evenly sized groups and no
    /// violated exclusions; callers should inspect this to judge quality.
    pub best_score: f64,

    /// Number of move proposals attempted (always the configured step budget).
    pub iterations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Number of steps forfeited to failed move proposals.
    pub skipped_moves: usize,

    /// Temperature at the final step.
    pub final_temperature: f64,
}

/// Executes the annealing search.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs one annealing search over the full step budget.
    ///
    /// The run always completes: a failed move proposal forfeits that step
    /// and the loop continues, so even if every proposal fails the initial
    /// random assignment and its score are returned.
    ///
    /// # Panics
    ///
    /// Panics if `config.validate()` fails.
    pub fn run(problem: &GroupingProblem, config: &AnnealConfig) -> AnnealResult {
        config.validate().expect("invalid AnnealConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        // Initialize
        let mut current = problem.initial_solution(&mut rng);
        let mut current_score = problem.cost(&current);
        let mut best = current.clone();
        let mut best_score = current_score;

        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut skipped_moves = 0usize;
        let mut temp = config.max_temperature;

        for step in 0..config.steps {
            temp = temperature(
                config.max_temperature,
                config.min_temperature,
                config.steps,
                step,
            );

            let candidate = match propose(&current, problem.num_groups(), &mut rng) {
                Ok(candidate) => candidate,
                Err(err) => {
                    debug!(%err, step, "move proposal failed, forfeiting step");
                    skipped_moves += 1;
                    continue;
                }
            };
            let candidate_score = problem.cost(&candidate);

            // Metropolis acceptance criterion
            let accept = if candidate_score < current_score {
                improving_moves += 1;
                true
            } else if temp > 0.0 {
                let probability = ((current_score - candidate_score) / temp).exp();
                rng.random_range(0.0..1.0) < probability
            } else {
                false
            };

            if accept {
                current = candidate;
                current_score = candidate_score;
                accepted_moves += 1;

                if current_score < best_score {
                    best = current.clone();
                    best_score = current_score;
                }
            }
        }

        if best_score > 0.0 {
            warn!(
                best_score,
                "annealing finished without a perfect assignment"
            );
        }

        AnnealResult {
            best,
            best_score,
            iterations: config.steps,
            accepted_moves,
            improving_moves,
            skipped_moves,
            final_temperature: temp,
        }
    }

    /// Runs `restarts` independent searches and returns the best result.
    ///
    /// Restarts share no mutable state, so under the `parallel` feature they
    /// fan out on the rayon pool. A seeded config derives one seed per
    /// restart by offset, keeping the whole ensemble reproducible; an
    /// unseeded config draws every restart from entropy. Zero restarts are
    /// treated as one.
    pub fn run_restarts(
        problem: &GroupingProblem,
        config: &AnnealConfig,
        restarts: usize,
    ) -> AnnealResult {
        let configs: Vec<AnnealConfig> = (0..restarts.max(1) as u64)
            .map(|offset| {
                let mut restart = config.clone();
                restart.seed = config.seed.map(|seed| seed.wrapping_add(offset));
                restart
            })
            .collect();

        #[cfg(feature = "parallel")]
        let results: Vec<AnnealResult> = {
            use rayon::prelude::*;
            configs
                .par_iter()
                .map(|restart| Self::run(problem, restart))
                .collect()
        };

        #[cfg(not(feature = "parallel"))]
        let results: Vec<AnnealResult> = configs
            .iter()
            .map(|restart| Self::run(problem, restart))
            .collect();

        results
            .into_iter()
            .min_by(|a, b| a.best_score.total_cmp(&b.best_score))
            .expect("at least one restart")
    }
}
