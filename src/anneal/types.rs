//! Problem instance: roster, group count, exclusion constraints.

use rand::Rng;
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::warn;

use super::objective::objective;
use crate::solution::{Assignment, ExclusionPair, GroupId, StudentId};

/// Structural defects in a problem instance, rejected before a run starts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProblemError {
    /// The group count must be at least 1.
    #[error("number of groups must be positive")]
    NoGroups,

    /// An exclusion pair names a student that is not on the roster.
    #[error("exclusion pair ({a}, {b}) names a student not on the roster")]
    UnknownStudent { a: StudentId, b: StudentId },
}

/// One grouping instance: who is being placed, into how many groups, and
/// which pairs must be kept apart.
///
/// Construction validates the instance so the search loop never has to
/// discover a malformed roster mid-run: the group count must be positive and
/// every exclusion pair must name two known students. Self-pairs constrain
/// nothing and are dropped. Duplicate roster entries collapse to one.
///
/// # Examples
///
/// ```
/// use grouper::anneal::GroupingProblem;
/// use grouper::solution::{ExclusionPair, StudentId};
///
/// let students: Vec<StudentId> = (1..=4).map(StudentId::new).collect();
/// let pairs = vec![ExclusionPair::new(1u64, 2u64), ExclusionPair::new(3u64, 4u64)];
/// let problem = GroupingProblem::new(students, 2, pairs).unwrap();
/// assert_eq!(problem.num_groups(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct GroupingProblem {
    students: Vec<StudentId>,
    num_groups: usize,
    exclusions: Vec<ExclusionPair>,
    violation_weight: f64,
}

impl GroupingProblem {
    /// Default weight of one violated exclusion relative to size variance.
    pub const DEFAULT_VIOLATION_WEIGHT: f64 = 2.0;

    pub fn new(
        students: Vec<StudentId>,
        num_groups: usize,
        exclusions: Vec<ExclusionPair>,
    ) -> Result<Self, ProblemError> {
        if num_groups == 0 {
            return Err(ProblemError::NoGroups);
        }

        let mut roster = Vec::with_capacity(students.len());
        let mut seen = BTreeSet::new();
        for student in students {
            if seen.insert(student) {
                roster.push(student);
            }
        }

        let mut kept = Vec::with_capacity(exclusions.len());
        for pair in exclusions {
            if pair.is_self_pair() {
                warn!(%pair, "ignoring self-pair exclusion");
                continue;
            }
            if !seen.contains(&pair.a()) || !seen.contains(&pair.b()) {
                return Err(ProblemError::UnknownStudent {
                    a: pair.a(),
                    b: pair.b(),
                });
            }
            kept.push(pair);
        }

        Ok(GroupingProblem {
            students: roster,
            num_groups,
            exclusions: kept,
            violation_weight: Self::DEFAULT_VIOLATION_WEIGHT,
        })
    }

    /// Sets the cost of one violated exclusion pair.
    ///
    /// A search-dynamics knob, not a correctness requirement: any positive
    /// weight that dominates typical variance swings works.
    ///
    /// # Panics
    ///
    /// Panics if `weight` is not strictly positive.
    pub fn with_violation_weight(mut self, weight: f64) -> Self {
        assert!(
            weight > 0.0,
            "violation weight must be positive, got {weight}"
        );
        self.violation_weight = weight;
        self
    }

    pub fn students(&self) -> &[StudentId] {
        &self.students
    }

    pub fn num_groups(&self) -> usize {
        self.num_groups
    }

    pub fn exclusions(&self) -> &[ExclusionPair] {
        &self.exclusions
    }

    pub fn violation_weight(&self) -> f64 {
        self.violation_weight
    }

    /// Maps every student to a uniformly random group.
    pub fn initial_solution<R: Rng>(&self, rng: &mut R) -> Assignment {
        self.students
            .iter()
            .map(|&student| (student, GroupId::new(rng.random_range(0..self.num_groups))))
            .collect()
    }

    /// Scores an assignment. Lower is better.
    pub fn cost(&self, assignment: &Assignment) -> f64 {
        objective(
            assignment,
            self.num_groups,
            &self.exclusions,
            self.violation_weight,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn students(n: u64) -> Vec<StudentId> {
        (1..=n).map(StudentId::new).collect()
    }

    #[test]
    fn test_zero_groups_rejected() {
        assert_eq!(
            GroupingProblem::new(students(4), 0, vec![]).unwrap_err(),
            ProblemError::NoGroups
        );
    }

    #[test]
    fn test_unknown_student_in_pair_rejected() {
        let result = GroupingProblem::new(students(4), 2, vec![ExclusionPair::new(1u64, 9u64)]);
        assert_eq!(
            result.unwrap_err(),
            ProblemError::UnknownStudent {
                a: StudentId::new(1),
                b: StudentId::new(9),
            }
        );
    }

    #[test]
    fn test_self_pairs_dropped() {
        let problem = GroupingProblem::new(
            students(4),
            2,
            vec![
                ExclusionPair::new(2u64, 2u64),
                ExclusionPair::new(1u64, 3u64),
            ],
        )
        .unwrap();

        assert_eq!(problem.exclusions(), &[ExclusionPair::new(1u64, 3u64)]);
    }

    #[test]
    fn test_duplicate_students_collapse() {
        let problem = GroupingProblem::new(
            vec![StudentId::new(1), StudentId::new(1), StudentId::new(2)],
            2,
            vec![],
        )
        .unwrap();

        assert_eq!(problem.students().len(), 2);
    }

    #[test]
    fn test_initial_solution_is_total_and_in_range() {
        let problem = GroupingProblem::new(students(10), 3, vec![]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let assignment = problem.initial_solution(&mut rng);

        assert_eq!(assignment.len(), 10);
        for (_, group) in assignment.iter() {
            assert!(group.index() < 3);
        }
    }

    #[test]
    #[should_panic(expected = "violation weight must be positive")]
    fn test_non_positive_weight_panics() {
        let _ = GroupingProblem::new(students(2), 2, vec![])
            .unwrap()
            .with_violation_weight(0.0);
    }
}
