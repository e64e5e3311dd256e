//! Pure operations on clauses: resolution, tautology, and subsumption.
//!
//! # Resolution
//!
//! Given clauses *c₁* and *c₂* and a literal *l* such that *l* ∈ *c₁* and -*l* ∈ *c₂*, the resolvent of *c₁* and *c₂* on *l* is:
//!
//! ```none
//! (c₁ \ { l }) ∪ (c₂ \ { -l })
//! ```
//!
//! Resolution here is binary: a single complementary pair is resolved on, even if others exist.
//! The pair is the first literal of *c₁* (in atom, then polarity, order) whose complement appears in *c₂*.
//! Any further complementary pair remains in the resolvent, which is then tautological.

use crate::structures::{clause::Clause, literal::Literal};

/// The outcome of resolving two clauses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolvent {
    /// No literal of the first clause has a complement in the second.
    NoComplement,

    /// The resolvent is the empty clause.
    Contradiction,

    /// The resolvent is the (non-empty) clause.
    Derived(Clause),
}

impl Clause {
    /// The literal of `self` resolved on when resolving with `other`, if some such literal exists.
    pub fn pivot<'a>(&'a self, other: &Clause) -> Option<&'a Literal> {
        self.literals
            .iter()
            .find(|literal| other.literals.contains(&literal.negate()))
    }

    /// Resolves `self` with `other`, on the [pivot](Clause::pivot) of `self`.
    ///
    /// ```rust
    /// # use refute::builder::parse_clause;
    /// # use refute::structures::clause::Resolvent;
    /// let c1 = parse_clause("a v b").unwrap();
    /// let c2 = parse_clause("~a v c").unwrap();
    /// assert_eq!(c1.resolve(&c2), Resolvent::Derived(parse_clause("b v c").unwrap()));
    ///
    /// let a = parse_clause("a").unwrap();
    /// let not_a = parse_clause("~a").unwrap();
    /// assert_eq!(a.resolve(&not_a), Resolvent::Contradiction);
    /// ```
    pub fn resolve(&self, other: &Clause) -> Resolvent {
        let Some(pivot) = self.pivot(other) else {
            return Resolvent::NoComplement;
        };
        let complement = pivot.negate();

        let resolvent = self
            .literals
            .iter()
            .filter(|literal| *literal != pivot)
            .chain(other.literals.iter().filter(|literal| **literal != complement))
            .cloned()
            .collect::<Clause>();

        match resolvent.is_empty() {
            true => Resolvent::Contradiction,
            false => Resolvent::Derived(resolvent),
        }
    }

    /// Whether the clause contains both polarities of some atom (and so is true on every valuation).
    pub fn is_tautological(&self) -> bool {
        // Literals are ordered by atom, so both polarities of an atom are adjacent.
        self.literals
            .iter()
            .zip(self.literals.iter().skip(1))
            .any(|(a, b)| a.atom() == b.atom())
    }

    /// Whether the literals of `self` are a subset of the literals of `other`.
    ///
    /// If so, `other` is entailed by `self` and redundant in the presence of `self`.
    pub fn subsumes(&self, other: &Clause) -> bool {
        self.literals.is_subset(&other.literals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::parse_clause;

    fn clause(text: &str) -> Clause {
        parse_clause(text).expect("valid clause")
    }

    #[test]
    fn complementary_units() {
        for atom in ["a", "b_2", "rain"] {
            let positive = Clause::unit(Literal::new(atom, true));
            let negative = Clause::unit(Literal::new(atom, false));
            assert_eq!(positive.resolve(&negative), Resolvent::Contradiction);
            assert_eq!(negative.resolve(&positive), Resolvent::Contradiction);
        }
    }

    #[test]
    fn no_complement() {
        assert_eq!(
            clause("a v b").resolve(&clause("a v ~c")),
            Resolvent::NoComplement
        );
        assert_eq!(clause("a").resolve(&clause("a")), Resolvent::NoComplement);
    }

    #[test]
    fn shared_literals_collapse() {
        assert_eq!(
            clause("a v b").resolve(&clause("~a v b")),
            Resolvent::Derived(clause("b"))
        );
    }

    #[test]
    fn single_pivot() {
        // Both a and b are complementary, only a is resolved on.
        let c1 = clause("a v b");
        let c2 = clause("~a v ~b");
        assert_eq!(c1.pivot(&c2), Some(&Literal::new("a", true)));

        let Resolvent::Derived(resolvent) = c1.resolve(&c2) else {
            panic!("expected a derived clause");
        };
        assert_eq!(resolvent, clause("b v ~b"));
        assert!(resolvent.is_tautological());
    }

    #[test]
    fn pivot_is_lexicographic() {
        let c1 = clause("zeta v alpha v mid");
        let c2 = clause("~mid v ~zeta v ~alpha");
        assert_eq!(c1.pivot(&c2), Some(&Literal::new("alpha", true)));
    }

    #[test]
    fn resolvent_follows_from_parents() {
        let c1 = clause("a v b v ~c");
        let c2 = clause("c v d");
        let Resolvent::Derived(resolvent) = c1.resolve(&c2) else {
            panic!("expected a derived clause");
        };
        assert_eq!(resolvent, clause("a v b v d"));

        let pivot = c1.pivot(&c2).expect("pivot");
        for literal in resolvent.literals() {
            assert!(literal != pivot && *literal != pivot.negate());
            assert!(c1.contains(literal) || c2.contains(literal));
        }
    }

    #[test]
    fn tautology() {
        assert!(clause("a v ~a").is_tautological());
        assert!(clause("b v c v ~b").is_tautological());
        assert!(!clause("a v ~b").is_tautological());
        assert!(!clause("a").is_tautological());
        assert!(!Clause::empty().is_tautological());
    }

    #[test]
    fn subsumption() {
        assert!(clause("a").subsumes(&clause("a v b")));
        assert!(!clause("a v b").subsumes(&clause("a")));
        assert!(clause("a v b").subsumes(&clause("b v a")));
        assert!(!clause("a").subsumes(&clause("~a v b")));
        assert!(Clause::empty().subsumes(&clause("a")));
    }
}
