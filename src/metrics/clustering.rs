// SPDX-License-Identifier: PMPL-1.0-or-later

//! Average clustering coefficient for directed graphs (Fagiolo 2007).
//!
//! For node i with total degree d and reciprocal degree r, the
//! coefficient is T_i / (d(d-1) - 2r), where T_i counts directed
//! triangles through i. In the weighted variant adjacency terms become
//! cube roots of weights normalized by the maximum weight.

use crate::error::{Result, SiegeError};
use crate::graph::DiGraph;
use crate::metrics::Metric;
use crate::types::{MetricValue, NodeId};
use std::collections::HashSet;

pub struct AvgClustering {
    nodes: Option<Vec<NodeId>>,
    weighted: bool,
    count_zeros: bool,
}

impl AvgClustering {
    pub fn new(nodes: Option<Vec<NodeId>>, weighted: bool, count_zeros: bool) -> Self {
        Self {
            nodes,
            weighted,
            count_zeros,
        }
    }

    pub fn unweighted() -> Self {
        Self::new(None, false, true)
    }

    fn fail(&self, reason: impl Into<String>) -> SiegeError {
        SiegeError::MetricEvaluation {
            metric: self.name().to_string(),
            reason: reason.into(),
        }
    }

    /// Clustering coefficient of one node.
    fn coefficient(&self, graph: &DiGraph, node: &NodeId, max_weight: f64) -> f64 {
        // Symmetrized adjacency term between two nodes.
        let term = |u: &NodeId, v: &NodeId| -> f64 {
            let mut s = 0.0;
            if let Some(w) = graph.weight(u, v) {
                s += if self.weighted {
                    (w / max_weight).cbrt()
                } else {
                    1.0
                };
            }
            if let Some(w) = graph.weight(v, u) {
                s += if self.weighted {
                    (w / max_weight).cbrt()
                } else {
                    1.0
                };
            }
            s
        };

        let d_tot = graph.degree(node);
        let d_rec = graph
            .successors(node)
            .filter(|&(v, _)| graph.weight(v, node).is_some())
            .count();
        let denom = (d_tot * d_tot.saturating_sub(1)) as f64 - 2.0 * d_rec as f64;
        if denom <= 0.0 {
            return 0.0;
        }

        // Restricting j, k to neighbors of i is exact: the k-i term
        // vanishes for any k outside the neighborhood.
        let mut neighborhood: Vec<&NodeId> = Vec::new();
        let mut seen = HashSet::new();
        for (v, _) in graph.successors(node) {
            if seen.insert(v.clone()) {
                neighborhood.push(v);
            }
        }
        for v in graph.predecessors(node) {
            if seen.insert(v.clone()) {
                neighborhood.push(v);
            }
        }

        let mut triangles = 0.0;
        for &j in &neighborhood {
            for &k in &neighborhood {
                if j == k {
                    continue;
                }
                triangles += term(node, j) * term(j, k) * term(k, node);
            }
        }
        (triangles / 2.0) / denom
    }
}

impl Metric for AvgClustering {
    fn name(&self) -> &str {
        "avg_clustering"
    }

    fn evaluate(&self, graph: &DiGraph) -> Result<MetricValue> {
        let selected: Vec<NodeId> = match &self.nodes {
            Some(subset) => {
                for n in subset {
                    if !graph.contains_node(n) {
                        return Err(self.fail(format!("node {} is not in the graph", n)));
                    }
                }
                subset.clone()
            }
            None => graph.nodes().cloned().collect(),
        };
        if selected.is_empty() {
            return Err(self.fail("no nodes to average over"));
        }

        let max_weight = if self.weighted {
            let w = graph
                .edges()
                .iter()
                .map(|(_, _, w, _)| *w)
                .fold(f64::NEG_INFINITY, f64::max);
            if !w.is_finite() || w <= 0.0 {
                return Err(self.fail("weighted clustering needs a positive maximum weight"));
            }
            w
        } else {
            1.0
        };

        let coefficients: Vec<f64> = selected
            .iter()
            .map(|n| self.coefficient(graph, n, max_weight))
            .collect();

        let values: Vec<f64> = if self.count_zeros {
            coefficients
        } else {
            coefficients.into_iter().filter(|&c| c != 0.0).collect()
        };
        if values.is_empty() {
            return Err(self.fail("all coefficients are zero and count_zeros is off"));
        }
        Ok(MetricValue::Scalar(
            values.iter().sum::<f64>() / values.len() as f64,
        ))
    }
}
