//! An insertion ordered set of clauses.
//!
//! Order is kept so that a refutation examines pairs of clauses in a fixed order, and so that reports list clauses in the order they were given.

use std::collections::HashSet;

use crate::structures::clause::Clause;

/// An ordered collection of distinct clauses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClauseSet {
    clauses: Vec<Clause>,
    index: HashSet<Clause>,
}

impl ClauseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `clause` to the end of the set, returning false if the clause was already present.
    pub fn insert(&mut self, clause: Clause) -> bool {
        match self.index.insert(clause.clone()) {
            true => {
                self.clauses.push(clause);
                true
            }
            false => false,
        }
    }

    pub fn contains(&self, clause: &Clause) -> bool {
        self.index.contains(clause)
    }

    /// Removes `clause`, returning false if the clause was not present.
    pub fn remove(&mut self, clause: &Clause) -> bool {
        match self.index.remove(clause) {
            true => {
                self.clauses.retain(|c| c != clause);
                true
            }
            false => false,
        }
    }

    /// Keeps only those clauses on which `keep` holds, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&Clause) -> bool) {
        let index = &mut self.index;
        self.clauses.retain(|clause| match keep(clause) {
            true => true,
            false => {
                index.remove(clause);
                false
            }
        });
    }

    /// Whether some clause in the set subsumes `clause`.
    pub fn subsumes(&self, clause: &Clause) -> bool {
        self.index.contains(clause) || self.clauses.iter().any(|c| c.subsumes(clause))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Clause> {
        self.clauses.iter()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn as_slice(&self) -> &[Clause] {
        &self.clauses
    }
}

impl FromIterator<Clause> for ClauseSet {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        let mut set = ClauseSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<Clause> for ClauseSet {
    fn extend<I: IntoIterator<Item = Clause>>(&mut self, iter: I) {
        for clause in iter {
            self.insert(clause);
        }
    }
}

impl IntoIterator for ClauseSet {
    type Item = Clause;
    type IntoIter = std::vec::IntoIter<Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.into_iter()
    }
}

impl<'a> IntoIterator for &'a ClauseSet {
    type Item = &'a Clause;
    type IntoIter = std::slice::Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}
