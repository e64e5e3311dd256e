//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! A clause is a set: duplicate literals collapse and the order in which literals are given is irrelevant.
//!
//! ```rust
//! # use refute::structures::literal::Literal;
//! # use refute::structures::clause::Clause;
//! let clause = Clause::from_iter([
//!     Literal::new("q", true),
//!     Literal::new("p", false),
//!     Literal::new("q", true),
//! ]);
//!
//! assert_eq!(clause.size(), 2);
//! assert_eq!(clause.to_string(), "~p v q");
//! ```
//!
//! - The empty clause is always false (never true), and is written `NIL`.
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).
//! - Clauses are never revised in place, new clauses are only built through [resolution](Clause::resolve).

mod algebra;
pub use algebra::Resolvent;

use std::collections::BTreeSet;

use crate::structures::literal::Literal;

/// The string used for the empty clause.
pub const NIL: &str = "NIL";

/// The string used between literals of a clause.
pub const DISJUNCTION: &str = " v ";

/// A set of literals, ordered by atom and then polarity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Clause {
    literals: BTreeSet<Literal>,
}

impl Clause {
    /// The empty clause.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The clause containing only `literal`.
    pub fn unit(literal: Literal) -> Self {
        Self {
            literals: BTreeSet::from([literal]),
        }
    }

    /// An iterator over all literals in the clause, ordered by atom and then polarity.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    /// An iterator over the atoms of the clause, without repetition.
    pub fn atoms(&self) -> impl Iterator<Item = &str> {
        let mut previous: Option<&str> = None;
        self.literals.iter().filter_map(move |literal| {
            let atom = literal.atom();
            match previous.replace(atom) {
                Some(last) if last == atom => None,
                _ => Some(atom),
            }
        })
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// Whether the clause is empty (and so is unsatisfiable).
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Whether `literal` is part of the clause.
    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    /// The negation of the clause, as a unit clause for each literal.
    ///
    /// The negation of a disjunction is the conjunction of the negated disjuncts, and so the returned clauses are to be read together.
    ///
    /// ```rust
    /// # use refute::builder::parse_clause;
    /// let negation = parse_clause("a v ~b").unwrap().negation();
    /// let texts = negation.iter().map(|c| c.to_string()).collect::<Vec<_>>();
    /// assert_eq!(texts, vec!["~a", "b"]);
    /// ```
    pub fn negation(&self) -> Vec<Clause> {
        self.literals
            .iter()
            .map(|literal| Clause::unit(literal.negate()))
            .collect()
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Self {
            literals: iter.into_iter().collect(),
        }
    }
}

impl From<Literal> for Clause {
    fn from(literal: Literal) -> Self {
        Clause::unit(literal)
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.literals.is_empty() {
            return write!(f, "{NIL}");
        }
        let mut literals = self.literals.iter();
        if let Some(first) = literals.next() {
            write!(f, "{first}")?;
        }
        for literal in literals {
            write!(f, "{DISJUNCTION}{literal}")?;
        }
        Ok(())
    }
}

impl serde::Serialize for Clause {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
