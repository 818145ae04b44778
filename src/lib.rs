// SPDX-License-Identifier: PMPL-1.0-or-later

//! netsiege — structural attack simulation for directed weighted networks.
//!
//! Simulates targeted or random removal of nodes and edges across one or
//! more grouped networks and measures how robustness metrics degrade.
//!
//! ENGINE PILLARS:
//! 1. **Graph**: directed weighted adjacency with deterministic
//!    insertion-order iteration, one graph per input group.
//! 2. **Strategies**: four removal variants (random/targeted over
//!    nodes/edges), each working on an independent copy.
//! 3. **Metrics**: pluggable robustness metrics, including directed
//!    global efficiency, which degrades smoothly under disconnection.
//! 4. **Simulator**: per-group, per-trial orchestration with elementwise
//!    mean aggregation.

pub mod attack;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod metrics;
pub mod report;
pub mod types;

pub use attack::{AttackProfile, AttackSimulator, RemovalStrategy};
pub use error::{Result, SiegeError};
pub use graph::{DiGraph, EdgeRecord, GraphStore};
pub use metrics::{
    AvgClustering, AvgShortestPathLength, GlobalEfficiency, Metric, MetricEvaluator, MetricSpec,
    PathMethod,
};
pub use types::{AttackConfig, AttackReport, AttackUnit, GroupResult, MetricValue, NodeId};
