/*!
The context --- within which refutations take place.

A context owns a [configuration](crate::config) and the [counters](Counters) of the most recent refutation.
Clauses are not kept by a context, instead the background and goal are given to each refutation, and a [knowledge base](crate::session::KnowledgeBase) is used to keep clauses between refutations.

# Example
```rust
# use refute::builder::parse_clause;
# use refute::config::Config;
# use refute::context::Context;
let mut the_context = Context::from_config(Config::default());

let background = vec![parse_clause("a").unwrap(), parse_clause("~a v b").unwrap()];
let goal = parse_clause("b").unwrap();

let report = the_context.refute(&background, &goal).unwrap();
assert!(report.is_refuted());

let proof = report.proof().unwrap();
assert!(proof.check().is_ok());
assert_eq!(proof.derived().len(), 2);
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    misc::log::targets,
    procedures::refute::Refutation,
    reports::Report,
    structures::clause::Clause,
    types::err::{self, ErrorKind},
};

/// A context, to which the background and goal of a refutation are given.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters from the most recent refutation.
    pub counters: Counters,
}

impl Context {
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            counters: Counters::default(),
        }
    }

    /// Determines whether `goal` follows from `background`, by refutation of the negation of `goal`.
    ///
    /// Errors if any clause given is empty.
    pub fn refute(&mut self, background: &[Clause], goal: &Clause) -> Result<Report, ErrorKind> {
        if goal.is_empty() || background.iter().any(|clause| clause.is_empty()) {
            return Err(err::InputError::EmptyClause.into());
        }

        log::info!(target: targets::SEARCH, "Refutation of {goal} from {} clauses", background.len());
        log::debug!(target: targets::SEARCH, "{}", self.config.subsumption);
        log::debug!(target: targets::SEARCH, "{}", self.config.tautology_elimination);
        log::debug!(target: targets::SEARCH, "{}", self.config.derivation_policy);

        let (refutation, step) = Refutation::new(&self.config, background, goal);
        let (report, counters) = refutation.run(step);
        self.counters = counters;

        log::info!(target: targets::SEARCH, "{report}: {}", self.counters);

        Ok(report)
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::from_config(Config::default())
    }
}
