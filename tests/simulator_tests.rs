// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for attack orchestration: validation, trial counts, aggregation.

use netsiege::{
    AttackConfig, AttackSimulator, AttackUnit, EdgeRecord, GraphStore, Metric, MetricEvaluator,
    MetricSpec, MetricValue, SiegeError,
};

fn rec(group: &str, head: &str, tail: &str, weight: f64) -> EdgeRecord {
    EdgeRecord {
        group: group.to_string(),
        head: head.into(),
        tail: tail.into(),
        weight,
    }
}

/// Degrees in group "A": a=3, b=2, c=2, d=1.
fn star_store() -> GraphStore {
    GraphStore::from_records(vec![
        rec("A", "a", "b", 1.0),
        rec("A", "a", "c", 1.0),
        rec("A", "a", "d", 1.0),
        rec("A", "b", "c", 1.0),
    ])
    .unwrap()
}

fn two_group_store() -> GraphStore {
    GraphStore::from_records(vec![
        rec("small", "1", "2", 1.0),
        rec("small", "2", "1", 1.0),
        rec("big", "1", "2", 1.0),
        rec("big", "2", "3", 1.0),
        rec("big", "3", "4", 1.0),
        rec("big", "4", "1", 1.0),
    ])
    .unwrap()
}

fn efficiency_only() -> MetricEvaluator {
    MetricEvaluator::from_specs(&[MetricSpec::GlobalEfficiency])
}

fn targeted_node_config() -> AttackConfig {
    AttackConfig {
        how: AttackUnit::Node,
        random: false,
        iter_n: 10,
        reverse: true,
        seed: None,
        verbose: false,
    }
}

#[test]
fn test_both_num_and_ratio_rejected() {
    let mut sim = AttackSimulator::new(star_store(), targeted_node_config(), efficiency_only());
    let err = sim.attack(Some(1), Some(0.5)).unwrap_err();
    assert!(matches!(err, SiegeError::Configuration(_)));
}

#[test]
fn test_neither_num_nor_ratio_rejected() {
    let mut sim = AttackSimulator::new(star_store(), targeted_node_config(), efficiency_only());
    let err = sim.attack(None, None).unwrap_err();
    assert!(matches!(err, SiegeError::Configuration(_)));
}

#[test]
fn test_num_above_minimum_pool_rejected_before_any_trial() {
    // small group has 2 nodes; asking for 3 must fail even though big
    // could afford it.
    let mut sim = AttackSimulator::new(two_group_store(), targeted_node_config(), efficiency_only());
    let err = sim.attack(Some(3), None).unwrap_err();
    assert!(matches!(err, SiegeError::Configuration(_)));
    assert!(sim.last_report().is_none(), "no work should have started");
}

#[test]
fn test_ratio_derived_amount_checked_against_global_floor() {
    // ratio 0.75 derives floor(0.75 * 4) = 3 for big, above small's pool
    // of 2 nodes.
    let mut sim = AttackSimulator::new(two_group_store(), targeted_node_config(), efficiency_only());
    let err = sim.attack(None, Some(0.75)).unwrap_err();
    assert!(matches!(err, SiegeError::Configuration(_)));

    // ratio 0.5 derives 1 and 2, both within the floor.
    let mut sim = AttackSimulator::new(two_group_store(), targeted_node_config(), efficiency_only());
    assert!(sim.attack(None, Some(0.5)).is_ok());
}

#[test]
fn test_deterministic_strategy_runs_exactly_one_trial() {
    let mut sim = AttackSimulator::new(star_store(), targeted_node_config(), efficiency_only());
    let report = sim.attack(Some(1), None).unwrap();
    assert_eq!(report.trials_per_group, 1);
    assert_eq!(report.groups[0].attacked.len(), 1);
}

#[test]
fn test_hub_attack_matches_reference_efficiencies() {
    // Baseline: pairs a->b, a->c, a->d, b->c at distance 1, denom 12.
    // Removing hub a leaves only b->c, denom 6.
    let mut sim = AttackSimulator::new(star_store(), targeted_node_config(), efficiency_only());
    let report = sim.attack(Some(1), None).unwrap();
    let group = report.group("A").unwrap();

    let baseline = group.raw[0][0].as_scalar().unwrap();
    assert!((baseline - 4.0 / 12.0).abs() < 1e-12);

    let attacked = group.attacked[0][0].as_scalar().unwrap();
    assert!((attacked - 1.0 / 6.0).abs() < 1e-12);
    assert_eq!(group.squeezed[0].as_scalar().unwrap(), attacked);
}

#[test]
fn test_squeezed_is_mean_of_attacked() {
    let config = AttackConfig {
        how: AttackUnit::Edge,
        random: true,
        iter_n: 5,
        reverse: true,
        seed: Some(1234),
        verbose: false,
    };
    let mut sim = AttackSimulator::new(star_store(), config, efficiency_only());
    let report = sim.attack(Some(2), None).unwrap();
    let group = &report.groups[0];
    assert_eq!(group.attacked.len(), 5);

    let expected: f64 = group
        .attacked
        .iter()
        .map(|trial| trial[0].as_scalar().unwrap())
        .sum::<f64>()
        / 5.0;
    let squeezed = group.squeezed[0].as_scalar().unwrap();
    assert!((squeezed - expected).abs() < 1e-12);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let config = AttackConfig {
        how: AttackUnit::Node,
        random: true,
        iter_n: 4,
        reverse: true,
        seed: Some(42),
        verbose: false,
    };
    let mut sim1 = AttackSimulator::new(two_group_store(), config.clone(), efficiency_only());
    let mut sim2 = AttackSimulator::new(two_group_store(), config, efficiency_only());
    let r1 = sim1.attack(Some(1), None).unwrap();
    let r2 = sim2.attack(Some(1), None).unwrap();
    for (g1, g2) in r1.groups.iter().zip(&r2.groups) {
        assert_eq!(g1.attacked, g2.attacked);
        assert_eq!(g1.squeezed, g2.squeezed);
    }
}

#[test]
fn test_baseline_graphs_survive_every_trial() {
    let config = AttackConfig {
        how: AttackUnit::Node,
        random: true,
        iter_n: 8,
        reverse: true,
        seed: Some(5),
        verbose: false,
    };
    let mut sim = AttackSimulator::new(star_store(), config, efficiency_only());
    sim.attack(Some(2), None).unwrap();
    assert_eq!(sim.store().node_count("A"), Some(4));
    assert_eq!(sim.store().edge_count("A"), Some(4));
}

#[test]
fn test_metric_failure_keeps_completed_groups() {
    // Group order is first-seen: "ok" (complete digraph, still strongly
    // connected after losing one edge) completes, then "broken" fails
    // the path metric on its baseline already.
    let store = GraphStore::from_records(vec![
        rec("ok", "1", "2", 1.0),
        rec("ok", "2", "1", 1.0),
        rec("ok", "2", "3", 1.0),
        rec("ok", "3", "2", 1.0),
        rec("ok", "1", "3", 1.0),
        rec("ok", "3", "1", 1.0),
        rec("broken", "1", "2", 1.0),
        rec("broken", "3", "2", 1.0),
    ])
    .unwrap();
    let evaluator = MetricEvaluator::from_specs(&[MetricSpec::AvgShortestPathLength {
        weighted: false,
        method: Default::default(),
    }]);
    let config = AttackConfig {
        how: AttackUnit::Edge,
        random: false,
        iter_n: 1,
        reverse: true,
        seed: None,
        verbose: false,
    };
    let mut sim = AttackSimulator::new(store, config, evaluator);

    let err = sim.attack(Some(1), None).unwrap_err();
    assert!(matches!(err, SiegeError::MetricEvaluation { .. }));

    let partial = sim.last_report().expect("completed groups are retained");
    assert_eq!(partial.groups.len(), 1);
    assert_eq!(partial.groups[0].group, "ok");
}

struct SizeVector;

impl Metric for SizeVector {
    fn name(&self) -> &str {
        "size_vector"
    }

    fn evaluate(&self, graph: &netsiege::DiGraph) -> netsiege::Result<MetricValue> {
        Ok(MetricValue::Vector(vec![
            graph.node_count() as f64,
            graph.edge_count() as f64,
        ]))
    }
}

#[test]
fn test_vector_metrics_average_elementwise() {
    let config = AttackConfig {
        how: AttackUnit::Edge,
        random: true,
        iter_n: 3,
        reverse: true,
        seed: Some(7),
        verbose: false,
    };
    let evaluator = MetricEvaluator::new(vec![Box::new(SizeVector)]);
    let mut sim = AttackSimulator::new(star_store(), config, evaluator);
    let report = sim.attack(Some(2), None).unwrap();
    let group = &report.groups[0];

    // Node count never changes under edge removal; edge count drops by
    // exactly 2 per trial.
    assert_eq!(
        group.squeezed[0],
        MetricValue::Vector(vec![4.0, 2.0]),
        "4 nodes and 4 - 2 edges expected in every trial"
    );
}
