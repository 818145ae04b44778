// SPDX-License-Identifier: PMPL-1.0-or-later

//! Removal strategies.
//!
//! Every strategy works on an independent copy; the baseline graph is
//! never mutated, so repeated trials always start from the same state.

use crate::graph::DiGraph;
use crate::types::{AttackUnit, NodeId};
use rand::rngs::SmallRng;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalStrategy {
    RandomNodes,
    RandomEdges,
    TargetedNodes,
    TargetedEdges,
}

impl RemovalStrategy {
    pub fn select(how: AttackUnit, random: bool) -> Self {
        match (random, how) {
            (true, AttackUnit::Node) => RemovalStrategy::RandomNodes,
            (true, AttackUnit::Edge) => RemovalStrategy::RandomEdges,
            (false, AttackUnit::Node) => RemovalStrategy::TargetedNodes,
            (false, AttackUnit::Edge) => RemovalStrategy::TargetedEdges,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            RemovalStrategy::RandomNodes => "Remove nodes drawn uniformly from the remaining pool",
            RemovalStrategy::RandomEdges => "Remove edges drawn uniformly from the remaining pool",
            RemovalStrategy::TargetedNodes => "Remove nodes ranked by total degree",
            RemovalStrategy::TargetedEdges => "Remove edges ranked by weight",
        }
    }

    /// Produce an attacked copy with `num` elements removed. `reverse`
    /// only affects the targeted variants: true attacks the
    /// highest-ranked elements, false the lowest-ranked.
    pub fn apply(&self, graph: &DiGraph, num: usize, reverse: bool, rng: &mut SmallRng) -> DiGraph {
        let mut attacked = graph.clone();
        match self {
            RemovalStrategy::RandomNodes => remove_random_nodes(&mut attacked, num, rng),
            RemovalStrategy::RandomEdges => remove_random_edges(&mut attacked, num, rng),
            RemovalStrategy::TargetedNodes => {
                let targets = rank_nodes(graph, reverse, num);
                for node in &targets {
                    attacked.remove_node(node);
                }
            }
            RemovalStrategy::TargetedEdges => {
                let targets = rank_edges(graph, reverse, num);
                for (head, tail) in &targets {
                    attacked.remove_edge(head, tail);
                }
            }
        }
        attacked
    }
}

/// Draw one node at a time from the shrinking pool. Sampling without
/// replacement, but with selection probabilities computed incrementally.
fn remove_random_nodes(graph: &mut DiGraph, num: usize, rng: &mut SmallRng) {
    for _ in 0..num {
        let remaining: Vec<NodeId> = graph.nodes().cloned().collect();
        if remaining.is_empty() {
            break;
        }
        let pick = &remaining[rng.gen_range(0..remaining.len())];
        graph.remove_node(pick);
    }
}

fn remove_random_edges(graph: &mut DiGraph, num: usize, rng: &mut SmallRng) {
    for _ in 0..num {
        let remaining = graph.edges();
        if remaining.is_empty() {
            break;
        }
        let (head, tail, _, _) = &remaining[rng.gen_range(0..remaining.len())];
        graph.remove_edge(head, tail);
    }
}

/// Rank nodes by total degree on the original snapshot. Ties break by
/// node insertion sequence, ascending, so the order is reproducible.
fn rank_nodes(graph: &DiGraph, reverse: bool, num: usize) -> Vec<NodeId> {
    let mut ranked: Vec<(NodeId, usize, u64)> = graph
        .nodes()
        .map(|n| {
            (
                n.clone(),
                graph.degree(n),
                graph.node_seq(n).unwrap_or_default(),
            )
        })
        .collect();
    ranked.sort_by(|a, b| {
        let key = if reverse {
            b.1.cmp(&a.1)
        } else {
            a.1.cmp(&b.1)
        };
        key.then(a.2.cmp(&b.2))
    });
    ranked.into_iter().take(num).map(|(n, _, _)| n).collect()
}

/// Rank edges by weight, tie-broken by edge insertion sequence.
fn rank_edges(graph: &DiGraph, reverse: bool, num: usize) -> Vec<(NodeId, NodeId)> {
    let mut ranked = graph.edges();
    ranked.sort_by(|a, b| {
        let key = if reverse {
            b.2.total_cmp(&a.2)
        } else {
            a.2.total_cmp(&b.2)
        };
        key.then(a.3.cmp(&b.3))
    });
    ranked
        .into_iter()
        .take(num)
        .map(|(h, t, _, _)| (h, t))
        .collect()
}
