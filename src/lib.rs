//! A library for refuting propositional goals from a background of clauses, by resolution.
//!
//! A goal is refuted by deriving the empty clause from the background together with the negation of the goal.
//! If the empty clause is derived the goal follows from the background, and a linear proof of the empty clause is reported.
//! Otherwise, the goal does not follow from the background.
//!
//! # Orientation
//!
//! The library is designed around a [context], built from a [configuration](crate::config).
//! A context is given a background and a goal, and returns a [report](crate::reports::Report).
//!
//! Internally, a refutation:
//! 1. [Simplifies](crate::procedures::simplify) the background and the set of support, by removing tautological and subsumed clauses.
//! 2. [Resolves](crate::structures::clause::Clause::resolve) clauses following the [set-of-support](crate::procedures::refute) strategy, recording the derivation of each resolvent in a [derivation graph](crate::db::derivation).
//! 3. Repeats from 1 until either the empty clause is derived or no new clause is derived.
//! 4. If the empty clause was derived, [reconstructs](crate::procedures::reconstruct) a proof of the empty clause from the derivation graph.
//!
//! Useful starting points, then, may be:
//! - The [refutation loop](crate::procedures::refute), to inspect the dynamics of a refutation.
//! - The [structures], for literals and clauses, and the [algebra](crate::structures::clause::Clause::resolve) of clauses.
//! - The [builder], for reading clauses from text.
//! - The [session], for a sequence of queries against a knowledge base which changes between queries.
//!
//! # Example
//!
//! ```rust
//! # use refute::builder::read_resolution;
//! # use refute::context::Context;
//! # use refute::reports::Report;
//! let text = "
//! #breakfast
//! coffee v tea
//! ~coffee v milk
//! ~tea v milk
//! milk
//! ";
//!
//! let (background, goal) = read_resolution(text.as_bytes()).unwrap();
//! let mut the_context = Context::default();
//!
//! match the_context.refute(&background, &goal).unwrap() {
//!     Report::Refuted { proof, .. } => {
//!         assert!(proof.check().is_ok());
//!         for step in proof.steps {
//!             println!("{}. {}", step.index, step.clause);
//!         }
//!     }
//!
//!     Report::Exhausted { .. } => panic!("milk follows"),
//! }
//! ```
//!
//! # Logs
//!
//! Logs are made through the [log](https://docs.rs/log/latest/log/) crate, with targets listed in [misc::log::targets].
//! No logger is installed by the library.

#![allow(clippy::single_match)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod db;
pub mod reports;
pub mod session;

pub mod misc;
