use std::fs;

use apriori_core::config::{ConfigError, MiningConfig, RuleSource};
use apriori_core::pipeline::Apriori;
use apriori_core::types::{Itemset, MiningError};
use tempfile::tempdir;

#[test]
fn defaults_are_explicit() {
    let config = MiningConfig::default();
    assert_eq!(config, MiningConfig::v0());
    assert_eq!(config.min_support_count, 2);
    assert_eq!(config.min_confidence, 0.5);
    assert_eq!(config.rule_source, RuleSource::AllFrequent);
    assert!(config.validate().is_ok());
}

#[test]
fn rule_source_defaults_when_omitted() {
    let config = MiningConfig::from_json_str(r#"{"min_support_count": 3, "min_confidence": 0.8}"#).unwrap();
    assert_eq!(config, MiningConfig::new(3, 0.8));

    let config = MiningConfig::from_json_str(
        r#"{"min_support_count": 3, "min_confidence": 0.8, "rule_source": "last_level"}"#,
    )
    .unwrap();
    assert_eq!(config.rule_source, RuleSource::LastLevel);
}

#[test]
fn invalid_thresholds_fail_fast() {
    let err = MiningConfig::from_json_str(r#"{"min_support_count": 0, "min_confidence": 0.5}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(MiningError::InvalidMinSupport(0))));

    let err = MiningConfig::from_json_str(r#"{"min_support_count": 2, "min_confidence": 1.01}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(MiningError::InvalidMinConfidence(_))));

    // Negative and non-numeric values never reach validation.
    let err = MiningConfig::from_json_str(r#"{"min_support_count": -1, "min_confidence": 0.5}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    let err = MiningConfig::from_json_str(r#"{"min_support_count": "two", "min_confidence": 0.5}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn pipeline_keeps_the_validated_config() {
    let config = MiningConfig::new(3, 0.9).with_rule_source(RuleSource::LastLevel);
    let apriori = Apriori::new(config.clone()).unwrap();
    assert_eq!(apriori.config(), &config);
}

#[test]
fn pipeline_rejects_invalid_config() {
    let err = Apriori::new(MiningConfig::new(2, -0.5)).unwrap_err();
    assert_eq!(err, MiningError::InvalidMinConfidence(-0.5));
    assert!(Apriori::new(MiningConfig::new(0, 0.5)).is_err());
}

#[test]
fn config_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mining.json");

    let config = MiningConfig::new(4, 0.75).with_rule_source(RuleSource::LastLevel);
    fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

    let loaded = MiningConfig::from_json_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn missing_config_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = MiningConfig::from_json_file(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn last_level_config_restricts_rules() {
    let txs = vec![
        Itemset::of(["a", "b", "c"]),
        Itemset::of(["a", "b", "c"]),
        Itemset::of(["a", "b"]),
    ];

    let all = Apriori::new(MiningConfig::new(2, 0.0)).unwrap().run(&txs).unwrap();
    let last = Apriori::new(MiningConfig::new(2, 0.0).with_rule_source(RuleSource::LastLevel))
        .unwrap()
        .run(&txs)
        .unwrap();

    // Pairs contribute 2 rules each, the triple 6.
    assert_eq!(all.rules.len(), 12);
    assert_eq!(last.rules.len(), 6);
    assert_eq!(last.summary.rule_source, RuleSource::LastLevel);
    assert_eq!(all.frequent_itemsets, last.frequent_itemsets);
}
