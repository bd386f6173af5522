//! Data model: student and group identifiers, exclusion pairs, and the
//! assignment value type the search operates on.

use std::collections::BTreeMap;
use std::fmt;

/// Opaque identifier for one student to be placed.
///
/// The engine attaches no meaning to the value; display names and other
/// attributes belong to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StudentId(u64);

impl StudentId {
    pub fn new(id: u64) -> Self {
        StudentId(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for StudentId {
    fn from(id: u64) -> Self {
        StudentId(id)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Destination bucket index in `[0, num_groups)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GroupId(usize);

impl GroupId {
    pub fn new(group: usize) -> Self {
        GroupId(group)
    }

    /// The raw bucket index, usable for slice indexing.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for GroupId {
    fn from(group: usize) -> Self {
        GroupId(group)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An unordered pair of students that must not share a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExclusionPair {
    a: StudentId,
    b: StudentId,
}

impl ExclusionPair {
    pub fn new(a: impl Into<StudentId>, b: impl Into<StudentId>) -> Self {
        ExclusionPair {
            a: a.into(),
            b: b.into(),
        }
    }

    pub fn a(&self) -> StudentId {
        self.a
    }

    pub fn b(&self) -> StudentId {
        self.b
    }

    /// A pair naming the same student twice constrains nothing.
    pub fn is_self_pair(&self) -> bool {
        self.a == self.b
    }

    pub fn involves(&self, student: StudentId) -> bool {
        self.a == student || self.b == student
    }
}

impl fmt::Display for ExclusionPair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

/// A total mapping from every student in the roster to exactly one group.
///
/// Owned and independently cloneable: the annealing loop keeps a "current"
/// and a "best" copy that must never alias. Backed by an ordered map so that
/// member enumeration is deterministic and seeded runs reproduce exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    groups: BTreeMap<StudentId, GroupId>,
}

impl Assignment {
    pub fn new() -> Self {
        Assignment::default()
    }

    /// Number of students placed.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group_of(&self, student: StudentId) -> Option<GroupId> {
        self.groups.get(&student).copied()
    }

    /// Places `student` in `group`, replacing any previous placement.
    pub fn assign(&mut self, student: StudentId, group: GroupId) {
        self.groups.insert(student, group);
    }

    /// Iterates placements in ascending student-id order.
    pub fn iter(&self) -> impl Iterator<Item = (StudentId, GroupId)> + '_ {
        self.groups.iter().map(|(&s, &g)| (s, g))
    }

    /// Members of one group, in ascending id order.
    pub fn members_of(&self, group: GroupId) -> Vec<StudentId> {
        self.groups
            .iter()
            .filter_map(|(&s, &g)| (g == group).then_some(s))
            .collect()
    }

    /// Group-major view of the assignment, members in ascending id order.
    ///
    /// Every group id must lie in `[0, num_groups)`; the engine only produces
    /// assignments for which this holds.
    pub fn to_groups(&self, num_groups: usize) -> Vec<Vec<StudentId>> {
        let mut groups = vec![Vec::new(); num_groups];
        for (student, group) in self.iter() {
            groups[group.index()].push(student);
        }
        groups
    }
}

impl FromIterator<(StudentId, GroupId)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (StudentId, GroupId)>>(iter: I) -> Self {
        Assignment {
            groups: iter.into_iter().collect(),
        }
    }
}
