/*!
A record of how clauses were derived.

The derivation graph is a directed graph whose nodes are clauses and whose edges run from a parent to a clause resolved from that parent.
Each derived clause has exactly two incoming edges, labelled by the [Operand] position of the parent when resolved.
Axioms (background clauses and the negation of a goal) are never recorded as derived, and so have no incoming edges.

Nodes are keyed by clause value, so a clause derived a second time (perhaps from different parents) shares a node with its first derivation.
Which derivation survives is fixed by the [DerivationPolicy].
In either case the graph is kept acyclic: a derivation which would make a clause its own ancestor is not recorded.

```rust
# use refute::builder::parse_clause;
# use refute::config::DerivationPolicy;
# use refute::db::derivation::{DerivationGraph, Record};
let mut graph = DerivationGraph::new(DerivationPolicy::LastWrite);

let a_b = parse_clause("a v b").unwrap();
let not_a = parse_clause("~a").unwrap();
let b = parse_clause("b").unwrap();

assert_eq!(graph.record(b.clone(), &a_b, &not_a), Record::Fresh);
assert_eq!(graph.parents(&b), Some((&a_b, &not_a)));
assert_eq!(graph.parents(&a_b), None);
```
*/

use std::collections::HashMap;

use petgraph::{
    algo::has_path_connecting,
    graph::{EdgeIndex, Graph, NodeIndex},
    visit::EdgeRef,
    Direction,
};

use crate::{config::DerivationPolicy, misc::log::targets, structures::clause::Clause};

/// The position of a parent when resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    First,
    Second,
}

/// The result of recording a derivation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Record {
    /// The clause had no previous derivation.
    Fresh,

    /// A previous derivation was replaced.
    Overwritten,

    /// A previous derivation was kept, either as the parents are unchanged or by policy.
    Kept,

    /// The derivation was not recorded, as the clause is an ancestor of one of the parents.
    Cyclic,
}

/// Clauses, and the parents they were derived from.
#[derive(Debug)]
pub struct DerivationGraph {
    graph: Graph<Clause, Operand>,
    nodes: HashMap<Clause, NodeIndex>,
    policy: DerivationPolicy,
    derivations: usize,
}

impl DerivationGraph {
    pub fn new(policy: DerivationPolicy) -> Self {
        DerivationGraph {
            graph: Graph::new(),
            nodes: HashMap::default(),
            policy,
            derivations: 0,
        }
    }

    /// The node of `clause`, added to the graph if required.
    fn node(&mut self, clause: &Clause) -> NodeIndex {
        if let Some(node) = self.nodes.get(clause) {
            return *node;
        }
        let node = self.graph.add_node(clause.clone());
        self.nodes.insert(clause.clone(), node);
        node
    }

    fn parent_nodes(&self, node: NodeIndex) -> Option<(NodeIndex, NodeIndex)> {
        let mut first = None;
        let mut second = None;
        for edge in self.graph.edges_directed(node, Direction::Incoming) {
            match edge.weight() {
                Operand::First => first = Some(edge.source()),
                Operand::Second => second = Some(edge.source()),
            }
        }
        Some((first?, second?))
    }

    /// Records that `clause` was derived by resolving `first` with `second`.
    pub fn record(&mut self, clause: Clause, first: &Clause, second: &Clause) -> Record {
        let child = self.node(&clause);
        let first_node = self.node(first);
        let second_node = self.node(second);

        let previous = self.parent_nodes(child);

        match previous {
            Some((f, s)) if f == first_node && s == second_node => return Record::Kept,
            Some(_) if self.policy == DerivationPolicy::FirstWrite => return Record::Kept,
            _ => {}
        }

        if has_path_connecting(&self.graph, child, first_node, None)
            || has_path_connecting(&self.graph, child, second_node, None)
        {
            log::trace!(target: targets::DERIVATION, "Skipped cyclic derivation of {clause} from {first} and {second}");
            return Record::Cyclic;
        }

        let record = match previous {
            Some(_) => {
                let mut incoming = self
                    .graph
                    .edges_directed(child, Direction::Incoming)
                    .map(|edge| edge.id())
                    .collect::<Vec<EdgeIndex>>();
                // Removal moves the last edge into the removed index, so remove from the back.
                incoming.sort_unstable_by(|a, b| b.cmp(a));
                for edge in incoming {
                    self.graph.remove_edge(edge);
                }
                log::trace!(target: targets::DERIVATION, "Overwrote derivation of {clause}");
                Record::Overwritten
            }
            None => {
                self.derivations += 1;
                Record::Fresh
            }
        };

        self.graph.add_edge(first_node, child, Operand::First);
        self.graph.add_edge(second_node, child, Operand::Second);
        log::trace!(target: targets::DERIVATION, "{clause} from {first} and {second}");

        record
    }

    /// The parents of `clause`, in the order resolved, if `clause` was derived.
    pub fn parents(&self, clause: &Clause) -> Option<(&Clause, &Clause)> {
        let node = self.nodes.get(clause)?;
        let (first, second) = self.parent_nodes(*node)?;
        Some((&self.graph[first], &self.graph[second]))
    }

    /// Whether `clause` has a recorded derivation.
    pub fn is_derived(&self, clause: &Clause) -> bool {
        self.parents(clause).is_some()
    }

    /// A count of clauses with a recorded derivation.
    pub fn derivation_count(&self) -> usize {
        self.derivations
    }
}
