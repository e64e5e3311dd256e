/*!
Removal of redundant clauses from the background and the set of support.

Two kinds of clause are redundant:
- Tautological clauses, which are true on every valuation and so never help derive the empty clause.
- Subsumed clauses, as any resolvent of a subsumed clause is subsumed by a resolvent (or one of the parents) of the subsuming clause.

Simplification examines every (unordered) pair of clauses from the union of the background and the set of support, and removes any clause subsumed by some other clause of the pair.
When a clause appears both in the background and in the set of support, the background copy is removed, as the set of support is what keeps a refutation directed at the goal.

Redundancy is settled against the collections as given, and only then are clauses removed.
Subsumption is transitive, so every removed clause is subsumed by some kept clause, and a second simplification removes nothing further.

```rust
# use refute::builder::parse_clause;
# use refute::config::Config;
# use refute::db::clause_set::ClauseSet;
# use refute::procedures::simplify::simplify;
let background = ["a v b", "b v ~b", "a v b v c"]
    .iter()
    .map(|text| parse_clause(text).unwrap())
    .collect::<ClauseSet>();
let support = ClauseSet::from_iter([parse_clause("a").unwrap()]);

let (background, support, simplification) = simplify(background, support, &Config::default());

assert!(background.is_empty());
assert_eq!(support.len(), 1);
assert_eq!(simplification.tautologies, 1);
assert_eq!(simplification.subsumed, 2);
```
*/

use std::collections::HashSet;

use crate::{
    config::Config, db::clause_set::ClauseSet, misc::log::targets,
    structures::clause::Clause,
};

/// Counts of clauses removed by a simplification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Simplification {
    pub tautologies: usize,
    pub subsumed: usize,
}

impl Simplification {
    /// Whether nothing was removed.
    pub fn is_trivial(&self) -> bool {
        self.tautologies == 0 && self.subsumed == 0
    }
}

/// Which collection a clause was drawn from.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Origin {
    Background,
    Support,
}

/// Simplifies the background and the set of support, returning the simplified collections.
pub fn simplify(
    mut background: ClauseSet,
    mut support: ClauseSet,
    config: &Config,
) -> (ClauseSet, ClauseSet, Simplification) {
    let mut simplification = Simplification::default();

    if config.tautology_elimination.value {
        let before = background.len() + support.len();
        background.retain(|clause| !clause.is_tautological());
        support.retain(|clause| !clause.is_tautological());
        simplification.tautologies = before - (background.len() + support.len());
    }

    if config.subsumption.value {
        let (background_redundant, support_redundant) = subsumed(&background, &support);
        simplification.subsumed = background_redundant.len() + support_redundant.len();

        for clause in &background_redundant {
            log::trace!(target: targets::SIMPLIFICATION, "Subsumed background clause: {clause}");
        }
        for clause in &support_redundant {
            log::trace!(target: targets::SIMPLIFICATION, "Subsumed support clause: {clause}");
        }

        background.retain(|clause| !background_redundant.contains(clause));
        support.retain(|clause| !support_redundant.contains(clause));
    }

    if !simplification.is_trivial() {
        log::debug!(target: targets::SIMPLIFICATION, "Removed {} tautological and {} subsumed clauses", simplification.tautologies, simplification.subsumed);
    }

    (background, support, simplification)
}

/// The clauses of the background and of the set of support which are subsumed by some other clause.
fn subsumed(background: &ClauseSet, support: &ClauseSet) -> (HashSet<Clause>, HashSet<Clause>) {
    let clauses = background
        .iter()
        .map(|clause| (Origin::Background, clause))
        .chain(support.iter().map(|clause| (Origin::Support, clause)))
        .collect::<Vec<_>>();

    let mut background_redundant = HashSet::default();
    let mut support_redundant = HashSet::default();

    let mut mark = |origin: Origin, clause: &Clause| {
        match origin {
            Origin::Background => background_redundant.insert(clause.clone()),
            Origin::Support => support_redundant.insert(clause.clone()),
        };
    };

    for (i, (origin_i, clause_i)) in clauses.iter().enumerate() {
        for (origin_j, clause_j) in clauses.iter().skip(i + 1) {
            if clause_i == clause_j {
                // Clauses are distinct within a collection, so one copy is in the background.
                match origin_i {
                    Origin::Background => mark(*origin_i, *clause_i),
                    Origin::Support => mark(*origin_j, *clause_j),
                }
            } else if clause_i.subsumes(clause_j) {
                mark(*origin_j, *clause_j);
            } else if clause_j.subsumes(clause_i) {
                mark(*origin_i, *clause_i);
            }
        }
    }

    (background_redundant, support_redundant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::parse_clause;

    fn set(texts: &[&str]) -> ClauseSet {
        texts
            .iter()
            .map(|text| parse_clause(text).expect("valid clause"))
            .collect()
    }

    #[test]
    fn tautologies_removed() {
        let (background, support, simplification) = simplify(
            set(&["a v ~a", "b"]),
            set(&["c v ~c v d", "~b"]),
            &Config::default(),
        );
        assert_eq!(background, set(&["b"]));
        assert_eq!(support, set(&["~b"]));
        assert_eq!(simplification.tautologies, 2);
    }

    #[test]
    fn subsumption_across_collections() {
        let (background, support, _) = simplify(
            set(&["a v b", "c"]),
            set(&["a", "c v d"]),
            &Config::default(),
        );
        assert_eq!(background, set(&["c"]));
        assert_eq!(support, set(&["a"]));
    }

    #[test]
    fn equal_clauses_keep_support() {
        let (background, support, simplification) =
            simplify(set(&["~a", "b"]), set(&["~a"]), &Config::default());
        assert_eq!(background, set(&["b"]));
        assert_eq!(support, set(&["~a"]));
        assert_eq!(simplification.subsumed, 1);
    }

    #[test]
    fn chains_settle_in_one_pass() {
        let (background, support, _) = simplify(
            set(&["a v b v c", "a v b"]),
            set(&["a"]),
            &Config::default(),
        );
        assert!(background.is_empty());
        assert_eq!(support, set(&["a"]));
    }

    #[test]
    fn idempotent() {
        let samples = [
            (vec!["a v b", "a v ~a", "c v d v e", "c"], vec!["~c", "a v b v d"]),
            (vec!["p", "p v q", "q v ~r", "~r"], vec!["~p", "q v ~r", "r v s"]),
            (vec!["x v y", "y v x v z"], vec!["x v y"]),
        ];

        for (background, support) in samples {
            let (b1, s1, _) = simplify(set(&background), set(&support), &Config::default());
            let (b2, s2, second) = simplify(b1.clone(), s1.clone(), &Config::default());
            assert_eq!(b1, b2);
            assert_eq!(s1, s2);
            assert!(second.is_trivial());
        }
    }

    #[test]
    fn disabled() {
        let mut config = Config::default();
        config.subsumption.value = false;
        config.tautology_elimination.value = false;

        let background = set(&["a v ~a", "a v b"]);
        let support = set(&["a"]);
        let (b, s, simplification) = simplify(background.clone(), support.clone(), &config);
        assert_eq!(b, background);
        assert_eq!(s, support);
        assert!(simplification.is_trivial());
    }
}
