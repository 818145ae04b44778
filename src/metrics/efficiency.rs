// SPDX-License-Identifier: PMPL-1.0-or-later

//! Directed global efficiency.
//!
//! Mean of reciprocal shortest-path distances over all ordered node
//! pairs. Unreachable pairs contribute zero instead of breaking the
//! metric, so disconnection degrades the score smoothly. Distances are
//! hop counts; edge weights are deliberately ignored here, unlike the
//! weighted path metrics.

use crate::error::Result;
use crate::graph::DiGraph;
use crate::metrics::Metric;
use crate::types::MetricValue;
use rayon::prelude::*;

pub struct GlobalEfficiency;

impl GlobalEfficiency {
    /// Efficiency of a graph with n nodes: sum of 1/d over ordered pairs
    /// with finite distance d > 0, divided by n(n-1). Zero when n <= 1.
    pub fn compute(graph: &DiGraph) -> f64 {
        let n = graph.node_count();
        let denom = (n * n.saturating_sub(1)) as f64;
        if denom == 0.0 {
            return 0.0;
        }
        let sources: Vec<_> = graph.nodes().cloned().collect();
        // One BFS per source; sources are independent, so this fans out
        // across threads. Per-source sums are collected and reduced in
        // source order to keep the floating-point result deterministic.
        let per_source: Vec<f64> = sources
            .par_iter()
            .map(|source| {
                graph
                    .bfs_lengths(source)
                    .values()
                    .filter(|&&d| d > 0)
                    .map(|&d| 1.0 / d as f64)
                    .sum()
            })
            .collect();
        per_source.iter().sum::<f64>() / denom
    }
}

impl Metric for GlobalEfficiency {
    fn name(&self) -> &str {
        "global_efficiency"
    }

    fn evaluate(&self, graph: &DiGraph) -> Result<MetricValue> {
        Ok(MetricValue::Scalar(Self::compute(graph)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivial_graphs_score_zero() {
        let g = DiGraph::new();
        assert_eq!(GlobalEfficiency::compute(&g), 0.0);
        let mut single = DiGraph::new();
        single.add_node("only");
        assert_eq!(GlobalEfficiency::compute(&single), 0.0);
    }

    #[test]
    fn test_complete_digraph_scores_one() {
        let mut g = DiGraph::new();
        for u in ["a", "b", "c"] {
            for v in ["a", "b", "c"] {
                if u != v {
                    g.add_edge(u, v, 1.0);
                }
            }
        }
        assert!((GlobalEfficiency::compute(&g) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_weights_are_ignored() {
        let mut light = DiGraph::new();
        light.add_edge("a", "b", 1.0);
        light.add_edge("b", "c", 1.0);
        let mut heavy = DiGraph::new();
        heavy.add_edge("a", "b", 100.0);
        heavy.add_edge("b", "c", 0.001);
        assert_eq!(
            GlobalEfficiency::compute(&light),
            GlobalEfficiency::compute(&heavy)
        );
    }

    #[test]
    fn test_unreachable_pairs_contribute_zero() {
        // a -> b plus isolated c: only one finite pair, denom = 6.
        let mut g = DiGraph::new();
        g.add_edge("a", "b", 1.0);
        g.add_node("c");
        assert!((GlobalEfficiency::compute(&g) - 1.0 / 6.0).abs() < 1e-12);
    }
}
