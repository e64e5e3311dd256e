//! Literals are atoms paired with a (boolean) polarity.
//!
//! An example:
//!
//! ```rust
//! # use refute::structures::literal::Literal;
//! let literal = Literal::new("rain", true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), "rain");
//!
//! assert!(!literal.negate().polarity());
//! assert!(literal.is_complement_of(&Literal::new("rain", false)));
//!
//! assert_eq!(literal.negate().to_string(), "~rain");
//! ```
//!
//! Literals are ordered by atom and then polarity, with the (Rust default) ordering of 'false' being (strictly) less than 'true'.
//! This is the order in which the literals of a clause are stored and examined.

use crate::structures::atom::Atom;

/// An atom paired with a polarity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    /// The atom of a literal.
    atom: Atom,

    /// The polarity of a literal.
    polarity: bool,
}

impl Literal {
    /// A fresh literal, specified by pairing an atom with a boolean.
    ///
    /// The atom is taken as given, see [parse_literal](crate::builder::parse_literal) for normalisation.
    pub fn new(atom: impl Into<Atom>, polarity: bool) -> Self {
        Self {
            atom: atom.into(),
            polarity,
        }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Self {
            atom: self.atom.clone(),
            polarity: !self.polarity,
        }
    }

    /// The atom of the literal.
    pub fn atom(&self) -> &str {
        &self.atom
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// Whether the literal and `other` share an atom with opposing polarity.
    pub fn is_complement_of(&self, other: &Literal) -> bool {
        self.atom == other.atom && self.polarity != other.polarity
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Literal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.atom == other.atom {
            self.polarity.cmp(&other.polarity)
        } else {
            self.atom.cmp(&other.atom)
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "~{}", self.atom),
        }
    }
}
