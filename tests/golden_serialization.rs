use apriori_core::config::{MiningConfig, RuleSource};
use apriori_core::pipeline::Apriori;
use apriori_core::report::{run_digest, FrequentItemsetEntry, MiningReport, MiningSummary, RuleEntry};
use apriori_core::types::{Itemset, Transaction};
use chrono::{TimeZone, Utc};
use tempfile::tempdir;

fn set(items: &[&str]) -> Itemset {
    Itemset::of(items.iter().copied())
}

fn groceries() -> Vec<Transaction> {
    vec![
        set(&["milk", "bread"]),
        set(&["milk", "bread", "butter"]),
        set(&["bread", "butter"]),
        set(&["milk"]),
    ]
}

fn normalize(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[test]
fn golden_report_serialization() {
    let report = MiningReport {
        frequent_itemsets: vec![FrequentItemsetEntry {
            items: vec!["bread".to_string(), "butter".to_string()],
            support_count: 2,
        }],
        rules: vec![RuleEntry {
            antecedent: vec!["butter".to_string()],
            consequent: vec!["bread".to_string()],
            support_count: 2,
            confidence: 1.0,
        }],
        summary: MiningSummary {
            min_support_count: 2,
            min_confidence: 0.5,
            rule_source: RuleSource::AllFrequent,
            transactions: 4,
            levels: 2,
            frequent_itemset_count: 1,
            last_level_count: 1,
            rule_count: 1,
            run_digest: "sha256:mock".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        },
    };

    let json_str = serde_json::to_string_pretty(&report).unwrap();

    let sets_pos = json_str.find("\"frequent_itemsets\":").expect("Missing frequent_itemsets key");
    let rules_pos = json_str.find("\"rules\":").expect("Missing rules key");
    let summary_pos = json_str.find("\"summary\":").expect("Missing summary key");
    assert!(sets_pos < rules_pos);
    assert!(rules_pos < summary_pos);

    const EXPECTED_JSON: &str = r#"{
      "frequent_itemsets": [
        { "items": ["bread", "butter"], "support_count": 2 }
      ],
      "rules": [
        {
          "antecedent": ["butter"],
          "consequent": ["bread"],
          "support_count": 2,
          "confidence": 1.0
        }
      ],
      "summary": {
        "min_support_count": 2,
        "min_confidence": 0.5,
        "rule_source": "all_frequent",
        "transactions": 4,
        "levels": 2,
        "frequent_itemset_count": 1,
        "last_level_count": 1,
        "rule_count": 1,
        "run_digest": "sha256:mock",
        "created_at": "2026-01-01T00:00:00Z"
      }
    }"#;

    assert_eq!(
        normalize(&json_str),
        normalize(EXPECTED_JSON),
        "JSON structure mismatch against golden snapshot"
    );

    let deserialized: MiningReport = serde_json::from_str(&json_str).expect("Deserialization failed");
    assert_eq!(deserialized, report);
}

#[test]
fn golden_groceries_digest() {
    let report = Apriori::new(MiningConfig::v0()).unwrap().run(&groceries()).unwrap();

    assert_eq!(
        report.summary.run_digest,
        "sha256:efdd65d156c877195cc12188044ca9b6ce05ede62910b9f28baaaf574222e124"
    );
    assert_eq!(report.summary.transactions, 4);
    assert_eq!(report.summary.levels, 2);
    assert_eq!(report.summary.frequent_itemset_count, 5);
    assert_eq!(report.summary.last_level_count, 2);
    assert_eq!(report.summary.rule_count, 4);

    let first = &report.frequent_itemsets[0];
    assert_eq!(first.items, vec!["bread"]);
    assert_eq!(first.support_count, 3);
}

#[test]
fn itemset_serializes_as_sorted_array() {
    let json = serde_json::to_string(&set(&["milk", "bread", "milk"])).unwrap();
    assert_eq!(json, r#"["bread","milk"]"#);

    let back: Itemset = serde_json::from_str(r#"["milk","bread","bread"]"#).unwrap();
    assert_eq!(back, set(&["bread", "milk"]));
}

#[test]
fn report_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.json");

    let report = Apriori::new(MiningConfig::v0()).unwrap().run(&groceries()).unwrap();
    report.write_json(&path).unwrap();

    let loaded = MiningReport::read_json(&path).unwrap();
    assert_eq!(loaded.frequent_itemsets, report.frequent_itemsets);
    assert_eq!(loaded.rules.len(), report.rules.len());
    assert_eq!(loaded.summary.run_digest, report.summary.run_digest);
    assert_eq!(loaded.summary.created_at, report.summary.created_at);
}

fn entry(items: &[&str], support_count: usize) -> FrequentItemsetEntry {
    FrequentItemsetEntry {
        items: items.iter().map(|s| s.to_string()).collect(),
        support_count,
    }
}

#[test]
fn digest_separates_items_containing_separators() {
    let config = MiningConfig::v0();

    let joined = run_digest(&config, &[entry(&["a,b"], 2)], &[]).unwrap();
    let split = run_digest(&config, &[entry(&["a", "b"], 2)], &[]).unwrap();
    assert_ne!(joined, split);

    let colon = run_digest(&config, &[entry(&["a:2"], 2)], &[]).unwrap();
    let plain = run_digest(&config, &[entry(&["a"], 2)], &[]).unwrap();
    assert_ne!(colon, plain);

    let rule = |antecedent: &[&str], consequent: &[&str]| RuleEntry {
        antecedent: antecedent.iter().map(|s| s.to_string()).collect(),
        consequent: consequent.iter().map(|s| s.to_string()).collect(),
        support_count: 2,
        confidence: 1.0,
    };
    let arrow_left = run_digest(&config, &[], &[rule(&["a=>b"], &["c"])]).unwrap();
    let arrow_right = run_digest(&config, &[], &[rule(&["a"], &["b=>c"])]).unwrap();
    assert_ne!(arrow_left, arrow_right);
}
