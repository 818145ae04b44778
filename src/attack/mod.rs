// SPDX-License-Identifier: PMPL-1.0-or-later

//! Attack orchestration module

pub mod profile;
pub mod simulator;
pub mod strategies;

use crate::error::Result;
use crate::graph::GraphStore;
use crate::metrics::MetricEvaluator;
use crate::types::{AttackConfig, AttackReport};

pub use profile::AttackProfile;
pub use simulator::AttackSimulator;
pub use strategies::RemovalStrategy;

/// Run one attack simulation end to end.
pub fn execute_attack(
    store: GraphStore,
    config: AttackConfig,
    evaluator: MetricEvaluator,
    num: Option<usize>,
    ratio: Option<f64>,
) -> Result<AttackReport> {
    let mut simulator = AttackSimulator::new(store, config, evaluator);
    simulator.attack(num, ratio)
}

/// Run a simulation described by a profile file.
pub fn execute_profile(store: GraphStore, profile: &AttackProfile) -> Result<AttackReport> {
    let evaluator = MetricEvaluator::from_specs(&profile.metric_specs());
    execute_attack(
        store,
        profile.attack_config(),
        evaluator,
        profile.num,
        profile.ratio,
    )
}
