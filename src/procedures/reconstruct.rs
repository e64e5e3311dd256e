/*!
Reconstruction of a linear proof from a derivation graph.

A refutation records a derivation for every resolvent, most of which play no part in deriving the empty clause.
Reconstruction recovers those derivations which do, as a [Proof]:

1. From the parents of the empty clause, derivations are followed back until reaching axioms.
   Every clause passed through is *used*.
2. The used axioms are listed first, in the order given to the refutation.
   Then the used derived clauses are listed so that each clause follows both of its parents, and last the empty clause.
3. Each listed clause is given a (1-based) index, and each derived clause notes the indices of its parents, in the order resolved.

The index of the first derived clause is the *boundary* of the proof.

The derivation graph is acyclic, and so every walk back from the empty clause ends at axioms.
*/

use std::collections::{HashMap, HashSet};

use crate::{
    db::{clause_set::ClauseSet, derivation::DerivationGraph},
    misc::log::targets,
    reports::{Proof, ProofStep},
    structures::clause::Clause,
};

/// Reconstructs a proof of the empty clause, given its parents.
pub fn reconstruct<'a>(
    axioms: &'a ClauseSet,
    graph: &'a DerivationGraph,
    nil_parents: (&'a Clause, &'a Clause),
) -> Proof {
    let used = used_clauses(axioms, graph, nil_parents);

    let mut listing = axioms
        .iter()
        .filter(|clause| used.contains(clause))
        .collect::<Vec<_>>();
    let boundary = listing.len() + 1;

    let derived = derived_order(&listing, graph, nil_parents);
    listing.extend(derived);

    let mut indices: HashMap<&Clause, usize> = HashMap::default();
    let mut steps = Vec::with_capacity(listing.len() + 1);

    for (position, clause) in listing.into_iter().enumerate() {
        let index = position + 1;
        let parents = match index < boundary {
            true => None,
            false => graph
                .parents(clause)
                .and_then(|(first, second)| parent_indices(&indices, first, second)),
        };
        indices.insert(clause, index);
        steps.push(ProofStep {
            index,
            clause: clause.clone(),
            parents,
        });
    }

    steps.push(ProofStep {
        index: steps.len() + 1,
        clause: Clause::empty(),
        parents: parent_indices(&indices, nil_parents.0, nil_parents.1),
    });

    log::info!(target: targets::RECONSTRUCTION, "Proof of {} steps, with {} axioms", steps.len(), boundary - 1);

    Proof { steps, boundary }
}

fn parent_indices(
    indices: &HashMap<&Clause, usize>,
    first: &Clause,
    second: &Clause,
) -> Option<(usize, usize)> {
    Some((*indices.get(first)?, *indices.get(second)?))
}

/// Clauses passed through when following derivations back from the parents of the empty clause.
fn used_clauses<'a>(
    axioms: &'a ClauseSet,
    graph: &'a DerivationGraph,
    nil_parents: (&'a Clause, &'a Clause),
) -> HashSet<&'a Clause> {
    let mut used = HashSet::default();
    let mut to_visit = vec![nil_parents.1, nil_parents.0];

    while let Some(clause) = to_visit.pop() {
        if !used.insert(clause) || axioms.contains(clause) {
            continue;
        }
        match graph.parents(clause) {
            Some((first, second)) => {
                to_visit.push(second);
                to_visit.push(first);
            }
            None => {
                log::error!(target: targets::RECONSTRUCTION, "No derivation of {clause}");
            }
        }
    }

    used
}

/// The derived ancestors of the empty clause, with each following its parents.
///
/// A (depth first) post-order walk back from the parents of the empty clause, which does not pass through `axioms`.
fn derived_order<'a>(
    axioms: &[&'a Clause],
    graph: &'a DerivationGraph,
    nil_parents: (&'a Clause, &'a Clause),
) -> Vec<&'a Clause> {
    let mut placed = axioms.iter().copied().collect::<HashSet<_>>();
    let mut order = Vec::default();
    let mut stack = vec![(nil_parents.1, false), (nil_parents.0, false)];

    while let Some((clause, expanded)) = stack.pop() {
        if placed.contains(clause) {
            continue;
        }
        if expanded {
            placed.insert(clause);
            order.push(clause);
            continue;
        }
        stack.push((clause, true));
        if let Some((first, second)) = graph.parents(clause) {
            stack.push((second, false));
            stack.push((first, false));
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::parse_clause, config::DerivationPolicy};

    fn clause(text: &str) -> Clause {
        parse_clause(text).expect("valid clause")
    }

    #[test]
    fn unused_derivations_pruned() {
        let axioms = ["a v b", "~a v c", "~b", "~c"]
            .iter()
            .map(|text| clause(text))
            .collect::<ClauseSet>();

        let mut graph = DerivationGraph::new(DerivationPolicy::LastWrite);
        let (a_b, not_a_c, not_b, not_c) = (
            clause("a v b"),
            clause("~a v c"),
            clause("~b"),
            clause("~c"),
        );
        let a = clause("a");
        let not_a = clause("~a");
        graph.record(a.clone(), &a_b, &not_b);
        graph.record(not_a.clone(), &not_a_c, &not_c);
        // Unused.
        graph.record(clause("b v c"), &a_b, &not_a_c);

        let proof = reconstruct(&axioms, &graph, (&a, &not_a));

        let texts = proof
            .steps
            .iter()
            .map(|step| step.clause.to_string())
            .collect::<Vec<_>>();
        assert_eq!(texts, vec!["a v b", "~a v c", "~b", "~c", "a", "~a", "NIL"]);
        assert_eq!(proof.boundary, 5);
        assert_eq!(proof.steps[4].parents, Some((1, 3)));
        assert_eq!(proof.steps[5].parents, Some((2, 4)));
        assert_eq!(proof.steps[6].parents, Some((5, 6)));
    }

    #[test]
    fn unused_axioms_omitted() {
        let axioms = ["p", "q", "~p"]
            .iter()
            .map(|text| clause(text))
            .collect::<ClauseSet>();
        let graph = DerivationGraph::new(DerivationPolicy::LastWrite);

        let (p, not_p) = (clause("p"), clause("~p"));
        let proof = reconstruct(&axioms, &graph, (&p, &not_p));

        assert_eq!(proof.steps.len(), 3);
        assert_eq!(proof.boundary, 3);
        assert_eq!(proof.steps[2].parents, Some((1, 2)));
    }

    #[test]
    fn shared_ancestors_listed_once() {
        let axioms = ["a v b", "~a v b", "~b v c", "~b v ~c"]
            .iter()
            .map(|text| clause(text))
            .collect::<ClauseSet>();
        let mut graph = DerivationGraph::new(DerivationPolicy::LastWrite);

        let b = clause("b");
        let c = clause("c");
        let not_c = clause("~c");
        graph.record(b.clone(), &clause("a v b"), &clause("~a v b"));
        graph.record(c.clone(), &b, &clause("~b v c"));
        graph.record(not_c.clone(), &b, &clause("~b v ~c"));

        let proof = reconstruct(&axioms, &graph, (&c, &not_c));
        let texts = proof
            .steps
            .iter()
            .map(|step| step.clause.to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            texts,
            vec!["a v b", "~a v b", "~b v c", "~b v ~c", "b", "c", "~c", "NIL"]
        );

        for step in &proof.steps {
            if let Some((p, q)) = step.parents {
                assert!(p < step.index && q < step.index);
            }
        }
    }
}
