// SPDX-License-Identifier: PMPL-1.0-or-later

//! Attack orchestration engine.

use crate::attack::strategies::RemovalStrategy;
use crate::error::{Result, SiegeError};
use crate::graph::GraphStore;
use crate::metrics::MetricEvaluator;
use crate::types::{AttackConfig, AttackReport, AttackUnit, GroupResult, MetricValue};
use rand::rngs::SmallRng;
use rand::SeedableRng;

pub struct AttackSimulator {
    store: GraphStore,
    config: AttackConfig,
    evaluator: MetricEvaluator,
    /// Most recent (possibly partial) report. A convenience for
    /// inspection; never read back by `attack` itself.
    last_report: Option<AttackReport>,
}

impl AttackSimulator {
    pub fn new(store: GraphStore, config: AttackConfig, evaluator: MetricEvaluator) -> Self {
        Self {
            store,
            config,
            evaluator,
            last_report: None,
        }
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn config(&self) -> &AttackConfig {
        &self.config
    }

    /// Report of the most recent `attack` call. After a metric failure
    /// this still holds the groups that completed before the error.
    pub fn last_report(&self) -> Option<&AttackReport> {
        self.last_report.as_ref()
    }

    /// Run one full simulation. Exactly one of `num` / `ratio` selects
    /// the removal amount; validation happens before any trial runs.
    pub fn attack(&mut self, num: Option<usize>, ratio: Option<f64>) -> Result<AttackReport> {
        let amounts = self.validate(num, ratio)?;
        let strategy = RemovalStrategy::select(self.config.how, self.config.random);
        let trials = self.config.effective_trials();
        let mut rng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        if self.config.verbose {
            println!("Attack starts: {}", strategy.description());
        }

        let mut report = AttackReport {
            created_at: chrono::Utc::now().to_rfc3339(),
            how: self.config.how,
            random: self.config.random,
            trials_per_group: trials,
            reverse: self.config.reverse,
            metrics: self.evaluator.names(),
            groups: Vec::with_capacity(self.store.len()),
        };

        let groups = self.store.groups().to_vec();
        for (group, drop_num) in groups.iter().zip(&amounts) {
            if self.config.verbose {
                println!("  group {} (removing {})", group, drop_num);
            }
            let graph = self
                .store
                .graph(group)
                .expect("store enumerates only its own groups");

            let result = (|| -> Result<GroupResult> {
                let raw = self.evaluator.evaluate(graph)?;
                let mut attacked = Vec::with_capacity(trials);
                for _ in 0..trials {
                    let hit = strategy.apply(graph, *drop_num, self.config.reverse, &mut rng);
                    attacked.push(self.evaluator.evaluate(&hit)?);
                }
                let squeezed = squeeze(&attacked)?;
                Ok(GroupResult {
                    group: group.clone(),
                    raw: vec![raw],
                    attacked,
                    squeezed,
                })
            })();

            match result {
                Ok(group_result) => report.groups.push(group_result),
                Err(err) => {
                    // Completed groups stay retrievable while the error
                    // propagates.
                    self.last_report = Some(report);
                    return Err(err);
                }
            }
        }

        if self.config.verbose {
            println!("Attack ends: {} groups", report.groups.len());
        }
        self.last_report = Some(report.clone());
        Ok(report)
    }

    /// Resolve num/ratio into one removal amount per group and check
    /// every amount against the smallest pool across all groups.
    fn validate(&self, num: Option<usize>, ratio: Option<f64>) -> Result<Vec<usize>> {
        let min_pool = match self.config.how {
            AttackUnit::Node => self.store.min_node_count(),
            AttackUnit::Edge => self.store.min_edge_count(),
        };

        let amounts: Vec<usize> = match (num, ratio) {
            (None, None) => {
                return Err(SiegeError::Configuration(
                    "one of `num` and `ratio` must be given".to_string(),
                ))
            }
            (Some(_), Some(_)) => {
                return Err(SiegeError::Configuration(
                    "`num` and `ratio` cannot both be given".to_string(),
                ))
            }
            (Some(n), None) => vec![n; self.store.len()],
            (None, Some(r)) => {
                if !r.is_finite() || r < 0.0 {
                    return Err(SiegeError::Configuration(format!(
                        "`ratio` must be finite and non-negative, got {}",
                        r
                    )));
                }
                self.store
                    .groups()
                    .iter()
                    .map(|g| {
                        let base = match self.config.how {
                            AttackUnit::Node => self.store.node_count(g).unwrap_or(0),
                            AttackUnit::Edge => self.store.edge_count(g).unwrap_or(0),
                        };
                        (base as f64 * r).floor() as usize
                    })
                    .collect()
            }
        };

        if let Some(&too_big) = amounts.iter().find(|&&n| n > min_pool) {
            return Err(SiegeError::Configuration(format!(
                "removal amount {} exceeds the minimum pool size {} across groups",
                too_big, min_pool
            )));
        }
        Ok(amounts)
    }
}

/// Elementwise mean across trial vectors: per metric position, nested
/// elementwise for vector-valued metrics.
fn squeeze(attacked: &[Vec<MetricValue>]) -> Result<Vec<MetricValue>> {
    let width = attacked.first().map_or(0, |v| v.len());
    let mut out = Vec::with_capacity(width);
    for i in 0..width {
        let column: Vec<MetricValue> = attacked.iter().map(|trial| trial[i].clone()).collect();
        out.push(MetricValue::mean(&column)?);
    }
    Ok(out)
}
