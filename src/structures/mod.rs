//! Key structures, such as literals and clauses.
//!
//! # Other structures without an implementation.
//!
//! ## Formulas
//!
//! A formula 𝐅 is set of [clauses](clause), interpreted as the conjunction of those clauses.
//!
//! Within a refutation two formulas are kept apart:
//! - The *background*, given as axioms and never extended.
//! - The *set of support*, seeded with the negation of a goal and extended by every genuinely new resolvent.
//!
//! Both are [ClauseSets](crate::db::clause_set::ClauseSet).
//!
//! ## Languages
//! A *language* 𝓛 is some set of [atoms](atom), closed under the operations of negation, conjunction, and disjunction. \
//! Languages do not have an implementation, and are instead implicit in the atoms of the clauses given to a refutation.
//! As the language of a refutation is finite, so is the collection of (distinct) clauses, and this bounds the length of a refutation.

pub mod atom;
pub mod clause;
pub mod literal;
