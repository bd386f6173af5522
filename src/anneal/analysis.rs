//! Reporting on finished runs: which exclusions remain violated, and a
//! presentation-ready aggregate of the result.

use std::fmt;

use super::runner::AnnealResult;
use super::types::GroupingProblem;
use crate::solution::{Assignment, ExclusionPair, GroupId, StudentId};

/// An exclusion pair left sharing a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Violation {
    /// The pair that should have been separated.
    pub pair: ExclusionPair,
    /// The group holding both students.
    pub group: GroupId,
}

/// Lists every exclusion pair whose students share a group.
pub fn violations(assignment: &Assignment, exclusions: &[ExclusionPair]) -> Vec<Violation> {
    exclusions
        .iter()
        .filter_map(|&pair| {
            match (assignment.group_of(pair.a()), assignment.group_of(pair.b())) {
                (Some(a), Some(b)) if a == b => Some(Violation { pair, group: a }),
                _ => None,
            }
        })
        .collect()
}

/// Presentation-ready view of a finished run: the groups, the exclusions
/// still violated, and the final score.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AnnealOutcome {
    pub groups: Vec<Vec<StudentId>>,
    pub violations: Vec<Violation>,
    pub score: f64,
}

impl AnnealOutcome {
    pub fn new(problem: &GroupingProblem, result: &AnnealResult) -> Self {
        AnnealOutcome {
            groups: result.best.to_groups(problem.num_groups()),
            violations: violations(&result.best, problem.exclusions()),
            score: result.best_score,
        }
    }
}

impl fmt::Display for AnnealOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Score: {}", self.score)?;
        if !self.violations.is_empty() {
            writeln!(f, "Violations:")?;
            for violation in &self.violations {
                writeln!(
                    f,
                    "  students {} and {} share group {}",
                    violation.pair.a(),
                    violation.pair.b(),
                    violation.group
                )?;
            }
        }
        writeln!(f, "Groups:")?;
        for (i, group) in self.groups.iter().enumerate() {
            write!(f, "  group {i}:")?;
            for student in group {
                write!(f, " {student}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
