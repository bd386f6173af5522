//! Assignment scoring.

use crate::solution::{Assignment, ExclusionPair};

/// Scores an assignment: population variance of the per-group sizes plus
/// `violation_weight` times the number of co-located exclusion pairs.
///
/// Pure function of its inputs; lower is better. A score of exactly 0 means
/// the group sizes are as even as integer division allows and no exclusion
/// pair shares a group. An empty assignment scores 0.
///
/// Every group id in the assignment must lie in `[0, num_groups)` and
/// `num_groups` must be positive; the engine validates both before calling.
pub fn objective(
    assignment: &Assignment,
    num_groups: usize,
    exclusions: &[ExclusionPair],
    violation_weight: f64,
) -> f64 {
    let num_violations = exclusions
        .iter()
        .filter(|pair| {
            match (assignment.group_of(pair.a()), assignment.group_of(pair.b())) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            }
        })
        .count();

    let mut group_sizes = vec![0usize; num_groups];
    for (_, group) in assignment.iter() {
        group_sizes[group.index()] += 1;
    }

    let mean_size = assignment.len() as f64 / num_groups as f64;
    let variance = group_sizes
        .iter()
        .map(|&size| (size as f64 - mean_size).powi(2))
        .sum::<f64>()
        / num_groups as f64;

    variance + violation_weight * num_violations as f64
}
