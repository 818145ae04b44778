// SPDX-License-Identifier: PMPL-1.0-or-later

//! Directed weighted graph with deterministic iteration order.
//!
//! Nodes and edges carry an insertion sequence number assigned at build
//! time. All iteration follows insertion order and all tie-breaking in
//! the attack strategies uses the sequence number, so a seeded run is
//! reproducible on any platform.

pub mod store;

pub use store::{EdgeRecord, GraphStore};

use crate::types::NodeId;
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct EdgeEntry {
    to: NodeId,
    weight: f64,
    seq: u64,
}

/// Directed weighted graph. At most one edge per ordered pair;
/// re-inserting an edge overwrites its weight (last write wins) but keeps
/// the sequence number from the first insertion.
#[derive(Debug, Clone, Default)]
pub struct DiGraph {
    /// Live nodes in insertion order.
    order: Vec<NodeId>,
    /// Insertion sequence per node, assigned once.
    seq: HashMap<NodeId, u64>,
    /// Successor lists in insertion order.
    out: HashMap<NodeId, Vec<EdgeEntry>>,
    /// Predecessor lists, kept for degree queries and node removal.
    preds: HashMap<NodeId, Vec<NodeId>>,
    next_node_seq: u64,
    next_edge_seq: u64,
    edge_count: usize,
}

impl DiGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node if absent. Isolated nodes are allowed.
    pub fn add_node(&mut self, id: impl Into<NodeId>) {
        let id = id.into();
        if self.seq.contains_key(&id) {
            return;
        }
        self.seq.insert(id.clone(), self.next_node_seq);
        self.next_node_seq += 1;
        self.out.insert(id.clone(), Vec::new());
        self.preds.insert(id.clone(), Vec::new());
        self.order.push(id);
    }

    /// Insert a directed edge, creating endpoints as needed. An existing
    /// (head, tail) edge gets its weight overwritten.
    pub fn add_edge(&mut self, head: impl Into<NodeId>, tail: impl Into<NodeId>, weight: f64) {
        let head = head.into();
        let tail = tail.into();
        self.add_node(head.clone());
        self.add_node(tail.clone());

        let entries = self.out.get_mut(&head).unwrap();
        if let Some(existing) = entries.iter_mut().find(|e| e.to == tail) {
            existing.weight = weight;
            return;
        }
        entries.push(EdgeEntry {
            to: tail.clone(),
            weight,
            seq: self.next_edge_seq,
        });
        self.next_edge_seq += 1;
        self.preds.get_mut(&tail).unwrap().push(head);
        self.edge_count += 1;
    }

    /// Remove a node together with all incident edges. Returns false if
    /// the node was not present.
    pub fn remove_node(&mut self, id: &NodeId) -> bool {
        if !self.seq.contains_key(id) {
            return false;
        }
        let outgoing = self.out.remove(id).unwrap_or_default();
        self.edge_count -= outgoing.len();
        for e in &outgoing {
            if let Some(preds) = self.preds.get_mut(&e.to) {
                preds.retain(|p| p != id);
            }
        }
        let incoming = self.preds.remove(id).unwrap_or_default();
        for p in incoming {
            if let Some(entries) = self.out.get_mut(&p) {
                let before = entries.len();
                entries.retain(|e| &e.to != id);
                self.edge_count -= before - entries.len();
            }
        }
        self.seq.remove(id);
        self.order.retain(|n| n != id);
        true
    }

    /// Remove a single directed edge. Returns false if absent.
    pub fn remove_edge(&mut self, head: &NodeId, tail: &NodeId) -> bool {
        let Some(entries) = self.out.get_mut(head) else {
            return false;
        };
        let before = entries.len();
        entries.retain(|e| &e.to != tail);
        if entries.len() == before {
            return false;
        }
        if let Some(preds) = self.preds.get_mut(tail) {
            preds.retain(|p| p != head);
        }
        self.edge_count -= 1;
        true
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.seq.contains_key(id)
    }

    pub fn weight(&self, head: &NodeId, tail: &NodeId) -> Option<f64> {
        self.out
            .get(head)?
            .iter()
            .find(|e| &e.to == tail)
            .map(|e| e.weight)
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn out_degree(&self, id: &NodeId) -> usize {
        self.out.get(id).map_or(0, |e| e.len())
    }

    pub fn in_degree(&self, id: &NodeId) -> usize {
        self.preds.get(id).map_or(0, |p| p.len())
    }

    /// Total degree: in-degree plus out-degree.
    pub fn degree(&self, id: &NodeId) -> usize {
        self.in_degree(id) + self.out_degree(id)
    }

    /// Insertion sequence number of a node. The deterministic secondary
    /// key for targeted-removal tie-breaking.
    pub fn node_seq(&self, id: &NodeId) -> Option<u64> {
        self.seq.get(id).copied()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.order.iter()
    }

    /// Successors of a node with edge weights, in edge insertion order.
    pub fn successors<'a>(&'a self, id: &NodeId) -> impl Iterator<Item = (&'a NodeId, f64)> + 'a {
        self.out
            .get(id)
            .into_iter()
            .flat_map(|es| es.iter().map(|e| (&e.to, e.weight)))
    }

    /// Predecessors of a node, in edge insertion order.
    pub fn predecessors<'a>(&'a self, id: &NodeId) -> impl Iterator<Item = &'a NodeId> + 'a {
        self.preds.get(id).into_iter().flatten()
    }

    /// All edges as (head, tail, weight, seq), ordered by head insertion
    /// order then per-head edge insertion order.
    pub fn edges(&self) -> Vec<(NodeId, NodeId, f64, u64)> {
        let mut out = Vec::with_capacity(self.edge_count);
        for head in &self.order {
            if let Some(entries) = self.out.get(head) {
                for e in entries {
                    out.push((head.clone(), e.to.clone(), e.weight, e.seq));
                }
            }
        }
        out
    }

    /// Hop-count shortest path lengths from `source` to every reachable
    /// node, by breadth-first search. The source maps to 0.
    pub fn bfs_lengths(&self, source: &NodeId) -> HashMap<NodeId, usize> {
        let mut dist = HashMap::new();
        if !self.contains_node(source) {
            return dist;
        }
        let mut queue = std::collections::VecDeque::new();
        dist.insert(source.clone(), 0usize);
        queue.push_back(source.clone());
        while let Some(u) = queue.pop_front() {
            let d = dist[&u];
            for (v, _) in self.successors(&u) {
                if !dist.contains_key(v) {
                    dist.insert(v.clone(), d + 1);
                    queue.push_back(v.clone());
                }
            }
        }
        dist
    }
}
