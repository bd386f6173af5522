//! Simulated annealing engine for group assignment.
//!
//! A single-solution trajectory search: starting from a uniformly random
//! assignment, the loop proposes one neighboring assignment per step and
//! accepts worsening candidates with a probability that falls as the
//! temperature cools, allowing the walk to escape local optima.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod analysis;
mod config;
mod moves;
mod objective;
mod runner;
mod temperature;
mod types;

pub use analysis::{violations, AnnealOutcome, Violation};
pub use config::AnnealConfig;
pub use moves::{propose, MoveError};
pub use objective::objective;
pub use runner::{AnnealResult, AnnealRunner};
pub use temperature::temperature;
pub use types::{GroupingProblem, ProblemError};
