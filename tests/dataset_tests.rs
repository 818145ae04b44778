// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for dataset and profile loading.

use netsiege::{dataset, AttackProfile, AttackUnit, GraphStore, MetricSpec, NodeId, SiegeError};
use std::fs;
use tempfile::TempDir;

const JSON_RECORDS: &str = r#"[
  {"group": "A", "head": 1, "tail": 2, "weight": 1.5},
  {"group": "A", "head": 2, "tail": "hub", "weight": 0.5},
  {"group": "B", "head": "x", "tail": "y", "weight": 2.0}
]"#;

const YAML_RECORDS: &str = "
- group: A
  head: 1
  tail: 2
  weight: 1.5
- group: B
  head: x
  tail: y
  weight: 2.0
";

#[test]
fn test_load_json_records() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("edges.json");
    fs::write(&path, JSON_RECORDS).unwrap();

    let records = dataset::load_records(&path).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].head, NodeId::Int(1));
    assert_eq!(records[1].tail, NodeId::Name("hub".to_string()));

    let store = GraphStore::from_records(records).unwrap();
    assert_eq!(store.groups(), &["A".to_string(), "B".to_string()]);
    assert_eq!(store.node_count("A"), Some(3));
}

#[test]
fn test_load_yaml_records() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("edges.yaml");
    fs::write(&path, YAML_RECORDS).unwrap();

    let records = dataset::load_records(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].weight, 2.0);
}

#[test]
fn test_unsupported_extension_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("edges.csv");
    fs::write(&path, "group,head,tail,weight\n").unwrap();

    let err = dataset::load_records(&path).unwrap_err();
    assert!(matches!(err, SiegeError::Dataset(_)));
}

#[test]
fn test_missing_field_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("edges.json");
    fs::write(&path, r#"[{"group": "A", "head": 1, "tail": 2}]"#).unwrap();

    let err = dataset::load_records(&path).unwrap_err();
    assert!(matches!(err, SiegeError::Dataset(_)));
}

#[test]
fn test_profile_yaml_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hub-attack.yaml");
    fs::write(
        &path,
        "
how: node
random: false
reverse: true
num: 1
metrics:
  - kind: global-efficiency
  - kind: avg-clustering
    count_zeros: false
",
    )
    .unwrap();

    let profile = AttackProfile::load(&path).unwrap();
    assert_eq!(profile.how, AttackUnit::Node);
    assert!(!profile.random);
    assert_eq!(profile.num, Some(1));
    let specs = profile.metric_specs();
    assert_eq!(specs.len(), 2);
    assert_eq!(specs[0], MetricSpec::GlobalEfficiency);
    assert!(matches!(
        specs[1],
        MetricSpec::AvgClustering {
            count_zeros: false,
            ..
        }
    ));
}

#[test]
fn test_profile_defaults_to_path_length_metric() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("minimal.json");
    fs::write(&path, r#"{"ratio": 0.1}"#).unwrap();

    let profile = AttackProfile::load(&path).unwrap();
    assert!(profile.random, "random defaults to true");
    assert_eq!(profile.iter_n, 10);
    assert_eq!(profile.ratio, Some(0.1));
    let specs = profile.metric_specs();
    assert!(matches!(
        specs.as_slice(),
        [MetricSpec::AvgShortestPathLength { weighted: false, .. }]
    ));
}
