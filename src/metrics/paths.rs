// SPDX-License-Identifier: PMPL-1.0-or-later

//! Average shortest path length.
//!
//! Undefined on graphs that are not strongly connected: a single
//! unreachable ordered pair fails the metric, and the failure propagates
//! to the caller instead of being papered over.

use crate::error::{Result, SiegeError};
use crate::graph::DiGraph;
use crate::metrics::Metric;
use crate::types::{MetricValue, NodeId};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// How per-source distances are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathMethod {
    /// Bfs when unweighted, Dijkstra when weighted.
    #[default]
    Auto,
    Bfs,
    Dijkstra,
}

pub struct AvgShortestPathLength {
    weighted: bool,
    method: PathMethod,
}

impl AvgShortestPathLength {
    pub fn new(weighted: bool, method: PathMethod) -> Self {
        Self { weighted, method }
    }

    /// Hop-count variant: every edge counts 1.
    pub fn hops() -> Self {
        Self::new(false, PathMethod::Auto)
    }

    /// Edge-weight variant.
    pub fn weighted() -> Self {
        Self::new(true, PathMethod::Auto)
    }

    fn lengths_from(&self, graph: &DiGraph, source: &NodeId) -> HashMap<NodeId, f64> {
        let use_dijkstra = match self.method {
            PathMethod::Bfs => false,
            PathMethod::Dijkstra => true,
            PathMethod::Auto => self.weighted,
        };
        if use_dijkstra {
            dijkstra_lengths(graph, source, self.weighted)
        } else {
            graph
                .bfs_lengths(source)
                .into_iter()
                .map(|(k, v)| (k, v as f64))
                .collect()
        }
    }

    fn fail(&self, reason: impl Into<String>) -> SiegeError {
        SiegeError::MetricEvaluation {
            metric: self.name().to_string(),
            reason: reason.into(),
        }
    }
}

impl Metric for AvgShortestPathLength {
    fn name(&self) -> &str {
        "avg_shortest_path_length"
    }

    fn evaluate(&self, graph: &DiGraph) -> Result<MetricValue> {
        let n = graph.node_count();
        if n < 2 {
            return Err(self.fail("graph has fewer than two nodes"));
        }
        let mut total = 0.0;
        for source in graph.nodes() {
            let dist = self.lengths_from(graph, source);
            // Every ordered pair must be reachable.
            if dist.len() != n {
                return Err(self.fail(format!(
                    "graph is not strongly connected (node {} cannot reach all others)",
                    source
                )));
            }
            total += dist.values().sum::<f64>();
        }
        Ok(MetricValue::Scalar(total / (n * (n - 1)) as f64))
    }
}

/// Single-source Dijkstra. With `weighted` off every edge costs 1, which
/// makes the method choice orthogonal to the weight choice.
fn dijkstra_lengths(graph: &DiGraph, source: &NodeId, weighted: bool) -> HashMap<NodeId, f64> {
    #[derive(PartialEq)]
    struct Entry(f64, u64);
    impl Eq for Entry {}
    impl PartialOrd for Entry {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Entry {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.total_cmp(&other.0).then(self.1.cmp(&other.1))
        }
    }

    let mut dist: HashMap<NodeId, f64> = HashMap::new();
    if !graph.contains_node(source) {
        return dist;
    }
    // Heap entries carry the node seq; the id is recovered through a side
    // table so the heap stays cheap to reorder.
    let by_seq: HashMap<u64, NodeId> = graph
        .nodes()
        .map(|n| (graph.node_seq(n).unwrap_or_default(), n.clone()))
        .collect();
    let mut heap: BinaryHeap<Reverse<Entry>> = BinaryHeap::new();
    dist.insert(source.clone(), 0.0);
    heap.push(Reverse(Entry(0.0, graph.node_seq(source).unwrap_or_default())));

    while let Some(Reverse(Entry(d, seq))) = heap.pop() {
        let u = &by_seq[&seq];
        if d > dist[u] {
            continue;
        }
        for (v, w) in graph.successors(u) {
            let step = if weighted { w } else { 1.0 };
            let candidate = d + step;
            if dist.get(v).map_or(true, |&cur| candidate < cur) {
                dist.insert(v.clone(), candidate);
                heap.push(Reverse(Entry(
                    candidate,
                    graph.node_seq(v).unwrap_or_default(),
                )));
            }
        }
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle() -> DiGraph {
        let mut g = DiGraph::new();
        g.add_edge("a", "b", 2.0);
        g.add_edge("b", "c", 2.0);
        g.add_edge("c", "a", 2.0);
        g
    }

    #[test]
    fn test_hop_count_on_cycle() {
        // Ordered pairs at hop distances 1 and 2, three of each: mean 1.5.
        let m = AvgShortestPathLength::hops();
        let v = m.evaluate(&cycle()).unwrap();
        assert_eq!(v, MetricValue::Scalar(1.5));
    }

    #[test]
    fn test_weighted_doubles_the_mean() {
        let m = AvgShortestPathLength::weighted();
        let v = m.evaluate(&cycle()).unwrap();
        assert_eq!(v, MetricValue::Scalar(3.0));
    }

    #[test]
    fn test_disconnected_graph_fails() {
        let mut g = DiGraph::new();
        g.add_edge("a", "b", 1.0);
        g.add_node("c");
        let err = AvgShortestPathLength::hops().evaluate(&g).unwrap_err();
        assert!(matches!(err, SiegeError::MetricEvaluation { .. }));
    }

    #[test]
    fn test_too_small_graph_fails() {
        let mut g = DiGraph::new();
        g.add_node("a");
        assert!(AvgShortestPathLength::hops().evaluate(&g).is_err());
    }

    #[test]
    fn test_dijkstra_prefers_cheaper_detour() {
        let mut g = DiGraph::new();
        g.add_edge("a", "b", 10.0);
        g.add_edge("a", "c", 1.0);
        g.add_edge("c", "b", 1.0);
        let dist = dijkstra_lengths(&g, &"a".into(), true);
        assert_eq!(dist[&NodeId::from("b")], 2.0);
    }
}
