//! Databases of clauses kept during a refutation.
//!
//! - [ClauseSet](clause_set::ClauseSet)s hold the background and the set of support.
//! - The [DerivationGraph](derivation::DerivationGraph) records, for each derived clause, the pair of clauses it was resolved from.
//!
//! Both are owned by a single refutation and are discarded once a [report](crate::reports::Report) has been made.

pub mod clause_set;
pub mod derivation;
