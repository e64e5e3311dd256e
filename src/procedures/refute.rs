//! The set-of-support refutation loop.
//!
//! # Overview
//!
//! A refutation holds a (fixed) collection of axioms, the background clauses followed by the negation of the goal, and iterates over a pair of collections:
//! - The background, which shrinks through [simplification](crate::procedures::simplify).
//! - The set of support, seeded with the negation of the goal, which grows with each genuinely new resolvent.
//!
//! Each [step](Refutation::step) takes ownership of both collections, and returns either the collections for the next step or a terminal state.
//!
//! Within a step, every clause *x* of the background and set of support is resolved with every (distinct) clause *y* of the set of support, in order.
//! Two clauses from the background are never resolved together.
//! - If some resolvent is the empty clause, the refutation is complete and *x* and *y* are recorded as the parents of the empty clause.
//! - Otherwise, each resolvent is recorded in the [derivation graph](crate::db::derivation) and, if genuinely new, kept.
//!
//! A resolvent is genuinely new if it is not tautological and is not subsumed by any clause of the background or set of support.
//! As there are finitely many clauses over the atoms of a refutation, and each step adds some clause which is not subsumed by the clauses before it, the loop always ends.
//! Still, the number of clauses grows exponentially with the number of atoms, and so the loop may take a long time to end.
//!
//! ```rust
//! # use refute::builder::parse_clause;
//! # use refute::config::Config;
//! # use refute::procedures::refute::{Refutation, SearchState};
//! let config = Config::default();
//! let background = vec![parse_clause("a").unwrap(), parse_clause("~a v b").unwrap()];
//! let goal = parse_clause("b").unwrap();
//!
//! let (mut refutation, mut step) = Refutation::new(&config, &background, &goal);
//! while let SearchState::Searching = step.state() {
//!     step = refutation.advance(step);
//! }
//! assert_eq!(step.state(), SearchState::Refuted);
//! ```

use crate::{
    config::Config,
    context::Counters,
    db::{
        clause_set::ClauseSet,
        derivation::{DerivationGraph, Record},
    },
    misc::log::targets,
    procedures::{reconstruct::reconstruct, simplify::simplify},
    reports::Report,
    structures::clause::{Clause, Resolvent},
};

/// The state of a refutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    /// The empty clause has not been derived, and some new clause was derived on the last step.
    Searching,

    /// The empty clause has been derived.
    Refuted,

    /// No new clause was derived on the last step, and so the goal does not follow from the background.
    Exhausted,
}

/// A step of a refutation, with the collections owned by the step.
#[derive(Debug)]
pub enum Step {
    Searching {
        background: ClauseSet,
        support: ClauseSet,
    },

    /// The parents of the empty clause.
    Refuted { first: Clause, second: Clause },

    Exhausted {
        background: ClauseSet,
        support: ClauseSet,
    },
}

impl Step {
    pub fn state(&self) -> SearchState {
        match self {
            Self::Searching { .. } => SearchState::Searching,
            Self::Refuted { .. } => SearchState::Refuted,
            Self::Exhausted { .. } => SearchState::Exhausted,
        }
    }
}

/// A single refutation, owning the derivation graph.
pub struct Refutation<'c> {
    config: &'c Config,
    goal: Clause,
    negated_goal: Vec<Clause>,
    axioms: ClauseSet,
    graph: DerivationGraph,
    pub counters: Counters,
}

impl<'c> Refutation<'c> {
    /// A fresh refutation of `goal` from `background`, and the initial step.
    pub fn new(config: &'c Config, background: &[Clause], goal: &Clause) -> (Self, Step) {
        let negated_goal = goal.negation();

        let axioms = background
            .iter()
            .chain(negated_goal.iter())
            .cloned()
            .collect::<ClauseSet>();

        let refutation = Refutation {
            config,
            goal: goal.clone(),
            negated_goal: negated_goal.clone(),
            axioms,
            graph: DerivationGraph::new(config.derivation_policy.value),
            counters: Counters::default(),
        };

        let step = Step::Searching {
            background: background.iter().cloned().collect(),
            support: negated_goal.into_iter().collect(),
        };

        (refutation, step)
    }

    /// Advances a refutation by one step, if the step is not terminal.
    pub fn advance(&mut self, step: Step) -> Step {
        match step {
            Step::Searching {
                background,
                support,
            } => self.step(background, support),
            terminal => terminal,
        }
    }

    /// Simplifies the collections and resolves every pair permitted by the set-of-support strategy.
    pub fn step(&mut self, background: ClauseSet, support: ClauseSet) -> Step {
        let (background, mut support, simplification) = simplify(background, support, self.config);
        self.counters.iterations += 1;
        self.counters.tautologies += simplification.tautologies;
        self.counters.subsumed += simplification.subsumed;

        let eliminate_tautologies = self.config.tautology_elimination.value;
        let mut fresh = ClauseSet::new();

        for x in background.iter().chain(support.iter()) {
            for y in support.iter() {
                if x == y {
                    continue;
                }
                self.counters.resolutions += 1;

                match x.resolve(y) {
                    Resolvent::NoComplement => {}

                    Resolvent::Contradiction => {
                        log::info!(target: targets::SEARCH, "Contradiction from {x} and {y} on iteration {}", self.counters.iterations);
                        self.graph.record(Clause::empty(), x, y);
                        return Step::Refuted {
                            first: x.clone(),
                            second: y.clone(),
                        };
                    }

                    Resolvent::Derived(resolvent) => {
                        if eliminate_tautologies && resolvent.is_tautological() {
                            continue;
                        }

                        if !self.axioms.contains(&resolvent) {
                            if let Record::Fresh = self.graph.record(resolvent.clone(), x, y) {
                                self.counters.derivations += 1;
                            }
                        }

                        if !background.subsumes(&resolvent) && !support.subsumes(&resolvent) {
                            fresh.insert(resolvent);
                        }
                    }
                }
            }
        }

        log::info!(target: targets::SEARCH, "Iteration {}: {} background, {} support, {} new", self.counters.iterations, background.len(), support.len(), fresh.len());

        match fresh.is_empty() {
            true => Step::Exhausted {
                background,
                support,
            },
            false => {
                support.extend(fresh);
                Step::Searching {
                    background,
                    support,
                }
            }
        }
    }

    /// Runs the refutation from `step` to a terminal state, and reports on the result.
    pub fn run(mut self, mut step: Step) -> (Report, Counters) {
        loop {
            step = match step {
                Step::Searching {
                    background,
                    support,
                } => self.step(background, support),

                Step::Refuted { first, second } => {
                    let proof = reconstruct(&self.axioms, &self.graph, (&first, &second));
                    let report = Report::Refuted {
                        goal: self.goal,
                        proof,
                    };
                    return (report, self.counters);
                }

                Step::Exhausted { background, .. } => {
                    let axioms = background
                        .into_iter()
                        .chain(self.negated_goal)
                        .collect::<ClauseSet>()
                        .into_iter()
                        .collect();
                    let report = Report::Exhausted {
                        goal: self.goal,
                        axioms,
                    };
                    return (report, self.counters);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::parse_clause;

    fn clauses(texts: &[&str]) -> Vec<Clause> {
        texts
            .iter()
            .map(|text| parse_clause(text).expect("valid clause"))
            .collect()
    }

    fn final_state(background: &[&str], goal: &str) -> SearchState {
        let config = Config::default();
        let background = clauses(background);
        let goal = parse_clause(goal).expect("valid goal");
        let (mut refutation, mut step) = Refutation::new(&config, &background, &goal);
        while step.state() == SearchState::Searching {
            step = refutation.advance(step);
        }
        step.state()
    }

    #[test]
    fn first_step_resolves_support_only() {
        let config = Config::default();
        let background = clauses(&["a v b", "~a v c", "~b"]);
        let goal = parse_clause("z").unwrap();
        let (mut refutation, step) = Refutation::new(&config, &background, &goal);

        // Background clauses resolve with one another, but not with ~z.
        let step = refutation.advance(step);
        assert_eq!(step.state(), SearchState::Exhausted);
        assert_eq!(refutation.counters.derivations, 0);
    }

    #[test]
    fn unit_refutation_in_one_step() {
        let config = Config::default();
        let background = clauses(&["c"]);
        let goal = parse_clause("c").unwrap();
        let (mut refutation, step) = Refutation::new(&config, &background, &goal);

        match refutation.advance(step) {
            Step::Refuted { first, second } => {
                assert_eq!(first.to_string(), "c");
                assert_eq!(second.to_string(), "~c");
            }
            other => panic!("expected a refutation, found {:?}", other.state()),
        }
    }

    #[test]
    fn terminal_steps_are_fixed() {
        let config = Config::default();
        let background = clauses(&["a"]);
        let goal = parse_clause("b").unwrap();
        let (mut refutation, step) = Refutation::new(&config, &background, &goal);

        let step = refutation.advance(step);
        assert_eq!(step.state(), SearchState::Exhausted);
        let iterations = refutation.counters.iterations;
        let step = refutation.advance(step);
        assert_eq!(step.state(), SearchState::Exhausted);
        assert_eq!(refutation.counters.iterations, iterations);
    }

    #[test]
    fn subsumed_resolvents_do_not_loop() {
        // ~a v b v d and a v c resolve to b v c v d, which is subsumed by b v c.
        // The resolvent is deleted by each simplification and rederived by each step, and so is not new.
        let config = Config::default();
        let background = clauses(&["a v c v e", "~a v b v d", "b v c"]);
        let goal = parse_clause("e").unwrap();
        let (mut refutation, step) = Refutation::new(&config, &background, &goal);

        let step = refutation.advance(step);
        assert_eq!(step.state(), SearchState::Searching);
        let step = refutation.advance(step);
        assert_eq!(step.state(), SearchState::Exhausted);
    }

    #[test]
    fn tautological_goal() {
        assert_eq!(final_state(&[], "a v ~a"), SearchState::Refuted);
    }

    #[test]
    fn chains() {
        assert_eq!(
            final_state(&["a", "~a v b", "~b v c", "~c v d"], "d"),
            SearchState::Refuted
        );
        assert_eq!(
            final_state(&["a", "~a v b", "~b v c", "~c v d"], "~a"),
            SearchState::Exhausted
        );
    }

    #[test]
    fn inconsistent_background() {
        // The background is inconsistent, but every resolution must involve the negated goal.
        assert_eq!(final_state(&["a", "~a"], "q"), SearchState::Exhausted);
        assert_eq!(final_state(&["a v q", "~a"], "q"), SearchState::Refuted);
    }
}
