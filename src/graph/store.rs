// SPDX-License-Identifier: PMPL-1.0-or-later

//! GraphStore: one graph per group, built once from flat edge records.

use crate::error::{Result, SiegeError};
use crate::graph::DiGraph;
use crate::types::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of input data: an edge plus the group it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub group: String,
    pub head: NodeId,
    pub tail: NodeId,
    pub weight: f64,
}

/// Immutable collection of per-group graphs. Groups are enumerated in
/// first-seen order of the input records.
#[derive(Debug, Clone)]
pub struct GraphStore {
    order: Vec<String>,
    graphs: HashMap<String, DiGraph>,
}

impl GraphStore {
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = EdgeRecord>,
    {
        let mut order = Vec::new();
        let mut graphs: HashMap<String, DiGraph> = HashMap::new();
        for rec in records {
            if !graphs.contains_key(&rec.group) {
                order.push(rec.group.clone());
                graphs.insert(rec.group.clone(), DiGraph::new());
            }
            graphs
                .get_mut(&rec.group)
                .unwrap()
                .add_edge(rec.head, rec.tail, rec.weight);
        }
        if order.is_empty() {
            return Err(SiegeError::Dataset("no edge records provided".to_string()));
        }
        Ok(Self { order, graphs })
    }

    /// Group identifiers in first-seen order.
    pub fn groups(&self) -> &[String] {
        &self.order
    }

    pub fn graph(&self, group: &str) -> Option<&DiGraph> {
        self.graphs.get(group)
    }

    pub fn node_count(&self, group: &str) -> Option<usize> {
        self.graphs.get(group).map(|g| g.node_count())
    }

    pub fn edge_count(&self, group: &str) -> Option<usize> {
        self.graphs.get(group).map(|g| g.edge_count())
    }

    /// Smallest node count across all groups. The global floor for
    /// node-removal amounts.
    pub fn min_node_count(&self) -> usize {
        self.order
            .iter()
            .filter_map(|g| self.node_count(g))
            .min()
            .unwrap_or(0)
    }

    /// Smallest edge count across all groups.
    pub fn min_edge_count(&self) -> usize {
        self.order
            .iter()
            .filter_map(|g| self.edge_count(g))
            .min()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
