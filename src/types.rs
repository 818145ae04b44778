// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for netsiege.

use crate::error::{Result, SiegeError};
use serde::{Deserialize, Serialize};

/// Node identifier: numeric or string, matching whatever the input data
/// uses to label its vertices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Int(i64),
    Name(String),
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeId::Int(n) => write!(f, "{}", n),
            NodeId::Name(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for NodeId {
    fn from(n: i64) -> Self {
        NodeId::Int(n)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId::Name(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId::Name(s)
    }
}

/// What a single removal step takes out of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackUnit {
    Node,
    Edge,
}

/// Attack configuration shared by every group and trial of one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackConfig {
    pub how: AttackUnit,
    pub random: bool,
    pub iter_n: usize,
    /// true removes the highest-ranked elements first (hub attack),
    /// false the lowest-ranked.
    pub reverse: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default)]
    pub verbose: bool,
}

impl Default for AttackConfig {
    fn default() -> Self {
        Self {
            how: AttackUnit::Node,
            random: true,
            iter_n: 10,
            reverse: true,
            seed: None,
            verbose: false,
        }
    }
}

impl AttackConfig {
    /// A deterministic strategy has exactly one outcome, so `iter_n` is
    /// forced to 1 whenever `random` is off.
    pub fn effective_trials(&self) -> usize {
        if self.random {
            self.iter_n.max(1)
        } else {
            1
        }
    }
}

/// A metric result: one number, or a vector of numbers for metrics that
/// report per-position values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Scalar(f64),
    Vector(Vec<f64>),
}

impl MetricValue {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            MetricValue::Scalar(v) => Some(*v),
            MetricValue::Vector(_) => None,
        }
    }

    /// Elementwise arithmetic mean over same-shaped values. Vectors are
    /// averaged per position.
    pub fn mean(values: &[MetricValue]) -> Result<MetricValue> {
        let first = values.first().ok_or_else(|| SiegeError::MetricEvaluation {
            metric: "mean".to_string(),
            reason: "cannot average an empty trial set".to_string(),
        })?;
        let n = values.len() as f64;
        match first {
            MetricValue::Scalar(_) => {
                let mut sum = 0.0;
                for v in values {
                    match v {
                        MetricValue::Scalar(x) => sum += x,
                        MetricValue::Vector(_) => return Err(Self::shape_error()),
                    }
                }
                Ok(MetricValue::Scalar(sum / n))
            }
            MetricValue::Vector(head) => {
                let mut sums = vec![0.0; head.len()];
                for v in values {
                    match v {
                        MetricValue::Vector(xs) if xs.len() == sums.len() => {
                            for (acc, x) in sums.iter_mut().zip(xs) {
                                *acc += x;
                            }
                        }
                        _ => return Err(Self::shape_error()),
                    }
                }
                for acc in &mut sums {
                    *acc /= n;
                }
                Ok(MetricValue::Vector(sums))
            }
        }
    }

    fn shape_error() -> SiegeError {
        SiegeError::MetricEvaluation {
            metric: "mean".to_string(),
            reason: "trial vectors have mismatched shapes".to_string(),
        }
    }
}

impl std::fmt::Display for MetricValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricValue::Scalar(v) => write!(f, "{:.4}", v),
            MetricValue::Vector(xs) => {
                write!(f, "[")?;
                for (i, x) in xs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:.4}", x)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Per-group outcome of one attack run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupResult {
    pub group: String,
    /// Baseline metric vector, wrapped as a single-trial sequence for
    /// symmetry with `attacked`.
    pub raw: Vec<Vec<MetricValue>>,
    /// One metric vector per trial.
    pub attacked: Vec<Vec<MetricValue>>,
    /// Elementwise mean across all trial vectors.
    pub squeezed: Vec<MetricValue>,
}

/// Complete result of one attack invocation across all groups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackReport {
    pub created_at: String,
    pub how: AttackUnit,
    pub random: bool,
    pub trials_per_group: usize,
    pub reverse: bool,
    /// Metric names in evaluation order, aligned with every result vector.
    pub metrics: Vec<String>,
    /// Group first-seen order from the input data.
    pub groups: Vec<GroupResult>,
}

impl AttackReport {
    pub fn group(&self, name: &str) -> Option<&GroupResult> {
        self.groups.iter().find(|g| g.group == name)
    }
}
