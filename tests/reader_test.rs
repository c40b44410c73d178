//! End-to-end tests: delimited files on disk through to rule tables

use greedy_rules::{
    calculate_decision_rules, read_csv, table_map, Error, InductionConfig, ReaderOptions,
    TableKind, Value,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_degenerate_file_yields_absent_rules() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "sample.csv", "f1,f2,f3\n1,a,x\n2,b,x\n3,a,x\n");

    let raw = read_csv(&path, &ReaderOptions::default()).unwrap();
    let tables = table_map(vec![raw], TableKind::DecisionTable).unwrap();
    let report = calculate_decision_rules(&tables, &InductionConfig::default());

    assert_eq!(report.len(), 1);
    assert_eq!(report.get("f3"), Some(&None));
}

#[test]
fn test_empty_file_yields_absent_rules() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "degenerated.csv", "f1,f2,f3\n");

    let raw = read_csv(&path, &ReaderOptions::default()).unwrap();
    let tables = table_map(vec![raw], TableKind::DecisionTable).unwrap();
    let report = calculate_decision_rules(&tables, &InductionConfig::default());

    assert_eq!(report.len(), 1);
    assert_eq!(report.get("f3"), Some(&None));
    assert!(report.is_ok());
}

#[test]
fn test_file_to_rules() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "loans.csv",
        "income,history,decision\n\
         high,good,approve\n\
         high,bad,review\n\
         low,good,review\n\
         low,bad,reject\n\
         high,good,approve\n",
    );

    let raw = read_csv(&path, &ReaderOptions::default()).unwrap();
    let tables = table_map(vec![raw], TableKind::DecisionTable).unwrap();
    let report = calculate_decision_rules(&tables, &InductionConfig::default());
    let rules = report.rules("decision").unwrap();

    let rendered: Vec<String> = rules.rules.iter().map(|r| r.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "history = good AND income = high => approve",
            "history = good AND income = low => review",
            "income = high AND history = bad => review",
            "history = bad AND income = low => reject",
        ]
    );
    assert_eq!(rules.columns, vec!["income", "history", "decision"]);
    assert_eq!(rules.rules[0].support, 2);
}

#[test]
fn test_missing_cell_is_reported_not_swallowed() {
    let dir = TempDir::new().unwrap();
    let good = write(&dir, "good.csv", "a,label\nx,1\ny,2\n");
    let bad = write(&dir, "bad.csv", "a,class\nx,1\n,2\n");

    let sources = vec![
        read_csv(&good, &ReaderOptions::default()).unwrap(),
        read_csv(&bad, &ReaderOptions::default()).unwrap(),
    ];
    let tables = table_map(sources, TableKind::DecisionTable).unwrap();
    let report = calculate_decision_rules(&tables, &InductionConfig::default());

    assert!(report.rules("label").is_some());
    assert!(matches!(
        report.failure("class"),
        Some(Error::MissingValue { row: 1, attribute }) if attribute == "a"
    ));
}

#[test]
fn test_decision_option_and_delimiter() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "t.tsv", "cls\tcolor\nA\tred\nB\tblue\n");
    let options = ReaderOptions {
        delimiter: '\t',
        decision: Some("cls".into()),
        ..ReaderOptions::default()
    };

    let raw = read_csv(&path, &options).unwrap();
    let tables = table_map(vec![raw], TableKind::DecisionTable).unwrap();
    let report = calculate_decision_rules(&tables, &InductionConfig::default());
    let rules = report.rules("cls").unwrap();
    assert_eq!(rules.cell(0, "color"), Some(&Value::from("red")));
    assert_eq!(rules.cell(0, "cls"), Some(&Value::from("A")));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = read_csv(&dir.path().join("nope.csv"), &ReaderOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_repeated_header_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "twice.csv", "a,a,d\n1,2,y\n2,1,n\n");

    let raw = read_csv(&path, &ReaderOptions::default()).unwrap();
    let tables = table_map(vec![raw], TableKind::DecisionTable).unwrap();
    let report = calculate_decision_rules(&tables, &InductionConfig::default());

    assert_eq!(report.get("d"), None);
    assert!(matches!(
        report.failure("d"),
        Some(Error::DuplicateColumn(column)) if column == "a"
    ));
}

#[test]
fn test_tokens_are_kept_verbatim() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "codes.csv", "code,d\n01,y\n1,n\n");

    let raw = read_csv(&path, &ReaderOptions::default()).unwrap();
    let tables = table_map(vec![raw], TableKind::DecisionTable).unwrap();
    let report = calculate_decision_rules(&tables, &InductionConfig::default());
    let rules = report.rules("d").unwrap();

    let rendered: Vec<String> = rules.rules.iter().map(|r| r.to_string()).collect();
    assert_eq!(rendered, vec!["code = 01 => y", "code = 1 => n"]);
    assert_eq!(rules.cell(0, "code"), Some(&Value::from("01")));
    assert_eq!(rules.cell(1, "code"), Some(&Value::Int(1)));
}
