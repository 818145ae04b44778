// SPDX-License-Identifier: PMPL-1.0-or-later

//! Robustness metrics.
//!
//! A metric is anything that maps a graph to a number or a numeric
//! vector. The evaluator runs an ordered list of them; the first failure
//! aborts the whole evaluation rather than substituting a placeholder.

pub mod clustering;
pub mod efficiency;
pub mod paths;

pub use clustering::AvgClustering;
pub use efficiency::GlobalEfficiency;
pub use paths::{AvgShortestPathLength, PathMethod};

use crate::error::Result;
use crate::graph::DiGraph;
use crate::types::{MetricValue, NodeId};
use serde::{Deserialize, Serialize};

/// One robustness metric. Pure: must not mutate the graph.
pub trait Metric {
    fn name(&self) -> &str;
    fn evaluate(&self, graph: &DiGraph) -> Result<MetricValue>;
}

/// Ordered list of metrics, evaluated in registration order.
pub struct MetricEvaluator {
    metrics: Vec<Box<dyn Metric>>,
}

impl MetricEvaluator {
    pub fn new(metrics: Vec<Box<dyn Metric>>) -> Self {
        Self { metrics }
    }

    /// Default metric set, matching the original tool's fallback.
    pub fn default_set() -> Self {
        Self::new(vec![Box::new(AvgShortestPathLength::hops())])
    }

    pub fn from_specs(specs: &[MetricSpec]) -> Self {
        Self::new(specs.iter().map(|s| s.build()).collect())
    }

    pub fn names(&self) -> Vec<String> {
        self.metrics.iter().map(|m| m.name().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Evaluate every metric in order. Failure propagates immediately.
    pub fn evaluate(&self, graph: &DiGraph) -> Result<Vec<MetricValue>> {
        let mut out = Vec::with_capacity(self.metrics.len());
        for m in &self.metrics {
            out.push(m.evaluate(graph)?);
        }
        Ok(out)
    }
}

/// Declarative description of a built-in metric, used by attack profiles
/// and the CLI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum MetricSpec {
    GlobalEfficiency,
    AvgShortestPathLength {
        #[serde(default)]
        weighted: bool,
        #[serde(default)]
        method: PathMethod,
    },
    AvgClustering {
        #[serde(default)]
        nodes: Option<Vec<NodeId>>,
        #[serde(default)]
        weighted: bool,
        #[serde(default = "default_true")]
        count_zeros: bool,
    },
}

fn default_true() -> bool {
    true
}

impl MetricSpec {
    pub fn build(&self) -> Box<dyn Metric> {
        match self {
            MetricSpec::GlobalEfficiency => Box::new(GlobalEfficiency),
            MetricSpec::AvgShortestPathLength { weighted, method } => {
                Box::new(AvgShortestPathLength::new(*weighted, *method))
            }
            MetricSpec::AvgClustering {
                nodes,
                weighted,
                count_zeros,
            } => Box::new(AvgClustering::new(nodes.clone(), *weighted, *count_zeros)),
        }
    }
}
