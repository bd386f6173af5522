//! Constraint-aware group assignment via simulated annealing.
//!
//! Splits a roster of students into a fixed number of groups so that group
//! sizes are as even as possible while keeping "must not be together" pairs
//! apart. Exact partitioning under pairwise exclusions is combinatorially
//! expensive, so the engine runs a randomized local search instead:
//!
//! - **Objective**: population variance of the group sizes plus a weighted
//!   count of co-located exclusion pairs. Lower is better; zero means a
//!   perfectly even, violation-free split.
//! - **Move generator**: swaps members between groups once sizes are as even
//!   as integer division allows, and shifts a member from the largest to the
//!   smallest group until then.
//! - **Annealing loop**: fixed step budget, linear cooling, Metropolis
//!   acceptance, best-so-far tracking.
//!
//! All randomness flows through an injectable, seedable RNG, so runs are
//! reproducible in tests. The engine itself does no I/O; the optional
//! `server` feature adds a thin warp HTTP front end.
//!
//! # Features
//!
//! - `serde`: serde derives on the public data model.
//! - `parallel`: rayon-backed parallel restarts.
//! - `server`: HTTP service layer and the `grouper-server` binary.

pub mod anneal;
pub mod solution;

#[cfg(feature = "server")]
pub mod server;
