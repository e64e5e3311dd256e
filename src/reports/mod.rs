/*!
Reports on a refutation.

A refutation ends in one of two ways:
- [Refuted](Report::Refuted): the empty clause was derived, and a [Proof] of the empty clause is reported.
- [Exhausted](Report::Exhausted): no new clause could be derived, and the (simplified) axioms are reported.

Reports are plain data, and are formatted elsewhere.
*/

use crate::structures::clause::{Clause, Resolvent};

/// An entry of a proof.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ProofStep {
    /// The (1-based) position of the step in the proof.
    pub index: usize,

    pub clause: Clause,

    /// The indices of the clauses resolved to obtain the clause of the step, in the order resolved.
    /// Axioms have no parents.
    pub parents: Option<(usize, usize)>,
}

/// A linear proof of the empty clause.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Proof {
    /// The steps of the proof, with the empty clause last.
    pub steps: Vec<ProofStep>,

    /// The index of the first step which is not an axiom.
    pub boundary: usize,
}

impl Proof {
    /// The axioms of the proof.
    pub fn axioms(&self) -> &[ProofStep] {
        &self.steps[..self.boundary - 1]
    }

    /// The steps derived by resolution, ending with the empty clause.
    pub fn derived(&self) -> &[ProofStep] {
        &self.steps[self.boundary - 1..]
    }

    /// Checks each derived step, by resolving the parents noted.
    ///
    /// Returns the index of the first step which fails to check, if any.
    pub fn check(&self) -> Result<(), usize> {
        for step in self.derived() {
            let Some((p, q)) = step.parents else {
                return Err(step.index);
            };
            if p >= step.index || q >= step.index || p == 0 || q == 0 {
                return Err(step.index);
            }

            let first = &self.steps[p - 1].clause;
            let second = &self.steps[q - 1].clause;
            let follows = match first.resolve(second) {
                Resolvent::NoComplement => false,
                Resolvent::Contradiction => step.clause.is_empty(),
                Resolvent::Derived(resolvent) => resolvent == step.clause,
            };
            if !follows {
                return Err(step.index);
            }
        }
        match self.steps.last() {
            Some(step) if step.clause.is_empty() => Ok(()),
            Some(step) => Err(step.index),
            None => Err(0),
        }
    }
}

/// High-level reports regarding a refutation.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Report {
    /// The empty clause was derived, and so the goal follows from the background.
    Refuted { goal: Clause, proof: Proof },

    /// No new clause could be derived, and so the goal does not follow from the background.
    Exhausted { goal: Clause, axioms: Vec<Clause> },
}

impl Report {
    pub fn goal(&self) -> &Clause {
        match self {
            Self::Refuted { goal, .. } | Self::Exhausted { goal, .. } => goal,
        }
    }

    pub fn is_refuted(&self) -> bool {
        matches!(self, Self::Refuted { .. })
    }

    /// The proof, if refuted.
    pub fn proof(&self) -> Option<&Proof> {
        match self {
            Self::Refuted { proof, .. } => Some(proof),
            Self::Exhausted { .. } => None,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Refuted { .. } => write!(f, "Refuted"),
            Self::Exhausted { .. } => write!(f, "Exhausted"),
        }
    }
}
