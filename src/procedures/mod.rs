//! Procedures which make up a refutation.
//!
//! # Overview
//!
//! A refutation takes a background formula and a goal clause, and either derives the empty clause from the background together with the negation of the goal, or finds that nothing further can be derived.
//!
//! Roughly, the procedures are arranged as diagrammed:
//!
//! ```none
//!                 +----------+
//!   +------------>| simplify |
//!   |             +----------+
//!   |                  |
//!   |                  ⌄
//!   |             +---------+
//!   |             | resolve |-----+-----> refuted, if the empty clause is derived ---> reconstruct
//!   |             +---------+     |
//!   |                  |          +-----> exhausted, if no genuinely new clause is derived
//!   |                  |
//!   +------------------+ merge the new clauses into the set of support
//! ```
//!
//! - [simplify] removes tautological and subsumed clauses.
//! - [refute] is the set-of-support loop, taking and returning ownership of the background and the set of support on each [step](refute::Refutation::step).
//! - [reconstruct] walks the [derivation graph](crate::db::derivation) back from the empty clause to build a [proof](crate::reports::Proof).

pub mod reconstruct;
pub mod refute;
pub mod simplify;
