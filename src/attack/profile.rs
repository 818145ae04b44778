// SPDX-License-Identifier: PMPL-1.0-or-later

//! Attack profile loading: one file describes a full simulation run.

use crate::error::{Result, SiegeError};
use crate::metrics::MetricSpec;
use crate::types::{AttackConfig, AttackUnit};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct AttackProfile {
    #[serde(default = "default_how")]
    pub how: AttackUnit,
    #[serde(default = "default_true")]
    pub random: bool,
    #[serde(default = "default_iter_n")]
    pub iter_n: usize,
    #[serde(default = "default_true")]
    pub reverse: bool,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub num: Option<usize>,
    #[serde(default)]
    pub ratio: Option<f64>,
    #[serde(default)]
    pub metrics: Vec<MetricSpec>,
}

fn default_how() -> AttackUnit {
    AttackUnit::Node
}

fn default_true() -> bool {
    true
}

fn default_iter_n() -> usize {
    10
}

impl AttackProfile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| SiegeError::Dataset(format!("reading profile {}: {}", path.display(), e)))?;
        // Extension-based dispatch is explicit to avoid ambiguous parsing behavior.
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content).map_err(|e| {
                SiegeError::Dataset(format!("parsing json profile {}: {}", path.display(), e))
            }),
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| {
                SiegeError::Dataset(format!("parsing yaml profile {}: {}", path.display(), e))
            }),
            _ => Err(SiegeError::Dataset(format!(
                "unsupported profile extension for {}",
                path.display()
            ))),
        }
    }

    pub fn attack_config(&self) -> AttackConfig {
        AttackConfig {
            how: self.how,
            random: self.random,
            iter_n: self.iter_n,
            reverse: self.reverse,
            seed: self.seed,
            verbose: false,
        }
    }

    /// Metric specs, falling back to hop-count average shortest path
    /// length when the profile names none.
    pub fn metric_specs(&self) -> Vec<MetricSpec> {
        if self.metrics.is_empty() {
            vec![MetricSpec::AvgShortestPathLength {
                weighted: false,
                method: Default::default(),
            }]
        } else {
            self.metrics.clone()
        }
    }
}
