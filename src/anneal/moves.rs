//! Balance-aware neighborhood moves.
//!
//! Two move kinds, chosen by the current size balance: while some group is
//! oversized, a rebalance move shifts one member from the largest group to
//! the smallest; once sizes are as even as integer division allows, a swap
//! move exchanges members between two random groups, preserving sizes so
//! that only the violation count can still improve.

use rand::Rng;
use thiserror::Error;

use crate::solution::{Assignment, GroupId};

/// Why a move proposal could not produce a candidate.
///
/// None of these are fatal to a run: the annealing loop logs the failure and
/// forfeits the iteration.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The group count must be at least 1.
    #[error("number of groups must be positive")]
    InvalidGroupCount,

    /// The assignment places someone outside `[0, num_groups)`.
    #[error("assignment contains group {group}, outside [0, {num_groups})")]
    GroupIdOutOfRange { group: usize, num_groups: usize },

    /// A group the move needs a member from is empty.
    #[error("no students available in group {group}")]
    EmptyGroup { group: usize },
}

/// Proposes one neighboring assignment.
///
/// The input is never mutated; the candidate is a fresh copy. With a single
/// group no move exists and the assignment is returned unchanged.
pub fn propose<R: Rng>(
    assignment: &Assignment,
    num_groups: usize,
    rng: &mut R,
) -> Result<Assignment, MoveError> {
    if num_groups == 0 {
        return Err(MoveError::InvalidGroupCount);
    }

    let group_sizes = validated_group_sizes(assignment, num_groups)?;

    if num_groups == 1 {
        return Ok(assignment.clone());
    }

    if is_balanced(&group_sizes, assignment.len(), num_groups) {
        swap_between_groups(assignment, num_groups, rng)
    } else {
        rebalance(assignment, &group_sizes, rng)
    }
}

/// Per-group member counts, rejecting out-of-range placements.
fn validated_group_sizes(
    assignment: &Assignment,
    num_groups: usize,
) -> Result<Vec<usize>, MoveError> {
    let mut sizes = vec![0usize; num_groups];
    for (_, group) in assignment.iter() {
        if group.index() >= num_groups {
            return Err(MoveError::GroupIdOutOfRange {
                group: group.index(),
                num_groups,
            });
        }
        sizes[group.index()] += 1;
    }
    Ok(sizes)
}

/// Whether the sizes are as even as integer division allows: every group at
/// `N / num_groups` or one above, with at most `N % num_groups` groups at
/// the larger size.
fn is_balanced(group_sizes: &[usize], num_students: usize, num_groups: usize) -> bool {
    let base = num_students / num_groups;
    let mut extra_allowance = num_students % num_groups;

    for &size in group_sizes {
        if size < base || size > base + 1 {
            return false;
        }
        if size == base + 1 {
            if extra_allowance == 0 {
                return false;
            }
            extra_allowance -= 1;
        }
    }
    true
}

/// Exchanges one random member between two distinct random groups.
///
/// Size-preserving. Balance does not guarantee nonempty groups when there
/// are fewer students than groups, so emptiness is still checked.
fn swap_between_groups<R: Rng>(
    assignment: &Assignment,
    num_groups: usize,
    rng: &mut R,
) -> Result<Assignment, MoveError> {
    let first = GroupId::new(rng.random_range(0..num_groups));
    let mut second = GroupId::new(rng.random_range(0..num_groups));
    while second == first {
        second = GroupId::new(rng.random_range(0..num_groups));
    }

    let first_members = assignment.members_of(first);
    if first_members.is_empty() {
        return Err(MoveError::EmptyGroup {
            group: first.index(),
        });
    }
    let second_members = assignment.members_of(second);
    if second_members.is_empty() {
        return Err(MoveError::EmptyGroup {
            group: second.index(),
        });
    }

    let from_first = first_members[rng.random_range(0..first_members.len())];
    let from_second = second_members[rng.random_range(0..second_members.len())];

    let mut candidate = assignment.clone();
    candidate.assign(from_first, second);
    candidate.assign(from_second, first);
    Ok(candidate)
}

/// Moves one random member of the largest group into the smallest group.
fn rebalance<R: Rng>(
    assignment: &Assignment,
    group_sizes: &[usize],
    rng: &mut R,
) -> Result<Assignment, MoveError> {
    let (largest, smallest) = extreme_groups(group_sizes);

    let members = assignment.members_of(largest);
    if members.is_empty() {
        return Err(MoveError::EmptyGroup {
            group: largest.index(),
        });
    }

    let student = members[rng.random_range(0..members.len())];
    let mut candidate = assignment.clone();
    candidate.assign(student, smallest);
    Ok(candidate)
}

/// Largest and smallest groups by size, ties broken by lowest group id.
fn extreme_groups(group_sizes: &[usize]) -> (GroupId, GroupId) {
    let mut largest = 0;
    let mut smallest = 0;
    for (group, &size) in group_sizes.iter().enumerate() {
        if size > group_sizes[largest] {
            largest = group;
        }
        if size < group_sizes[smallest] {
            smallest = group;
        }
    }
    (GroupId::new(largest), GroupId::new(smallest))
}
