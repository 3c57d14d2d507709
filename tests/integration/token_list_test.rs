//! Token list generator integration tests

use crate::common::{read_json, write, AGGREGATE};
use hertz_listgen::document::DocumentError;
use hertz_listgen::error::GenerateError;
use hertz_listgen::token_list::{
    generate_token_list, RequestedVersion, TokenListJob, Version, VersionSource,
};
use std::fs;
use tempfile::TempDir;

fn job(dir: &TempDir, requested: RequestedVersion) -> TokenListJob {
    TokenListJob {
        input: dir.path().join("oracle/aggr.testnet.json"),
        output: dir.path().join("all.testnet.json"),
        requested,
    }
}

#[test]
fn test_generates_one_token_per_symbol() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "oracle/aggr.testnet.json", AGGREGATE);

    let report = generate_token_list(&job(&dir, RequestedVersion::default())).unwrap();
    assert_eq!(report.document.tokens.len(), 6);

    let written = read_json(&dir.path().join("all.testnet.json"));
    let tokens = written["tokens"].as_array().unwrap();
    let symbols: Vec<_> = tokens.iter().map(|t| t["symbol"].as_str().unwrap()).collect();
    assert_eq!(
        symbols,
        ["BTC/USD", "ETH/USD", "USDT/USD", "SOL/USD", "WETH/USD", "DOGE/USD"]
    );
    assert!(tokens.iter().all(|t| t["chainId"] == 97));
    assert_eq!(tokens[3]["decimals"], 9);
    assert_eq!(tokens[3]["name"], "SOL/USD synthetic market");
    assert_eq!(written["name"], "HertzFlow");
    assert_eq!(written["keywords"], serde_json::json!(["HertzFlow", "default", "list"]));
}

#[test]
fn test_first_run_uses_default_version() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "oracle/aggr.testnet.json", AGGREGATE);

    let report = generate_token_list(&job(&dir, RequestedVersion::default())).unwrap();
    assert_eq!(report.base.source, VersionSource::Default);
    assert_eq!(report.base.version, Version::new(1, 0, 0));
    assert_eq!(report.document.version, Version::new(1, 1, 0));
}

#[test]
fn test_version_continues_from_prior_output() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "oracle/aggr.testnet.json", AGGREGATE);
    write(
        dir.path(),
        "all.testnet.json",
        r#"{"name": "HertzFlow", "version": {"major": 1, "minor": 2, "patch": 3}, "tokens": []}"#,
    );

    let report = generate_token_list(&job(&dir, RequestedVersion::default())).unwrap();
    assert_eq!(report.base.source, VersionSource::Prior);
    assert_eq!(report.document.version, Version::new(1, 3, 3));

    let written = read_json(&dir.path().join("all.testnet.json"));
    assert_eq!(written["version"], serde_json::json!({"major": 1, "minor": 3, "patch": 3}));
}

#[test]
fn test_consecutive_runs_keep_bumping_minor() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "oracle/aggr.testnet.json", AGGREGATE);

    for expected_minor in 1..=3 {
        let report = generate_token_list(&job(&dir, RequestedVersion::default())).unwrap();
        assert_eq!(report.document.version.minor, expected_minor);
    }
}

#[test]
fn test_explicit_version_overrides_prior() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "oracle/aggr.testnet.json", AGGREGATE);
    write(
        dir.path(),
        "all.testnet.json",
        r#"{"version": {"major": 9, "minor": 9, "patch": 9}}"#,
    );

    let requested = RequestedVersion {
        major: Some(2),
        minor: Some(5),
        patch: Some(1),
    };
    let report = generate_token_list(&job(&dir, requested)).unwrap();
    assert_eq!(report.base.source, VersionSource::Explicit);
    assert_eq!(report.document.version, Version::new(2, 6, 1));
}

#[test]
fn test_output_format_is_stable() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "oracle/aggr.testnet.json",
        r#"{"symbols": [{"symbol": "BTC/USD", "bsc_token_addr": "0xabc", "bsc_precision": 18}]}"#,
    );

    let report = generate_token_list(&job(&dir, RequestedVersion::default())).unwrap();
    let text = fs::read_to_string(dir.path().join("all.testnet.json")).unwrap();

    let expected = format!(
        r#"{{
    "name": "HertzFlow",
    "timestamp": "{}",
    "version": {{
        "major": 1,
        "minor": 1,
        "patch": 0
    }},
    "keywords": [
        "HertzFlow",
        "default",
        "list"
    ],
    "tokens": [
        {{
            "address": "0xabc",
            "chainId": 97,
            "decimals": 18,
            "symbol": "BTC/USD",
            "name": "BTC/USD synthetic market"
        }}
    ]
}}"#,
        report.document.timestamp
    );
    assert_eq!(text, expected);
    assert!(report.document.timestamp.ends_with("+00:00"));
}

#[test]
fn test_missing_input_is_not_found() {
    let dir = TempDir::new().unwrap();

    let err = generate_token_list(&job(&dir, RequestedVersion::default())).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::Document(DocumentError::NotFound(_))
    ));
    assert!(!dir.path().join("all.testnet.json").exists());
}

#[test]
fn test_malformed_input_leaves_output_untouched() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "oracle/aggr.testnet.json", "{\"symbols\": [");
    let prior = r#"{"version": {"major": 1, "minor": 4, "patch": 0}}"#;
    let output = write(dir.path(), "all.testnet.json", prior);

    let err = generate_token_list(&job(&dir, RequestedVersion::default())).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::Document(DocumentError::Parse { .. })
    ));
    assert_eq!(fs::read_to_string(&output).unwrap(), prior);
}

#[test]
fn test_missing_field_aborts_without_writing() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "oracle/aggr.testnet.json",
        r#"{"symbols": [
            {"symbol": "BTC/USD", "bsc_token_addr": "0x01", "bsc_precision": 18},
            {"symbol": "ETH/USD", "bsc_precision": 18}
        ]}"#,
    );
    let prior = r#"{"version": {"major": 1, "minor": 1, "patch": 0}}"#;
    let output = write(dir.path(), "all.testnet.json", prior);

    let err = generate_token_list(&job(&dir, RequestedVersion::default())).unwrap_err();
    match err {
        GenerateError::MissingField(missing) => {
            assert_eq!(missing.index, 1);
            assert_eq!(missing.field, "bsc_token_addr");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(fs::read_to_string(&output).unwrap(), prior);
}

#[test]
fn test_prior_minor_at_max_is_error_and_keeps_output() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "oracle/aggr.testnet.json", AGGREGATE);
    let prior = r#"{"version": {"major": 1, "minor": 18446744073709551615, "patch": 0}}"#;
    let output = write(dir.path(), "all.testnet.json", prior);

    let err = generate_token_list(&job(&dir, RequestedVersion::default())).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::VersionOverflow(v) if v == Version::new(1, u64::MAX, 0)
    ));
    assert_eq!(fs::read_to_string(&output).unwrap(), prior);
}

#[test]
fn test_explicit_minor_at_max_is_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "oracle/aggr.testnet.json", AGGREGATE);

    let requested = RequestedVersion {
        minor: Some(u64::MAX),
        ..Default::default()
    };
    let err = generate_token_list(&job(&dir, requested)).unwrap_err();
    assert!(matches!(err, GenerateError::VersionOverflow(_)));
    assert!(!dir.path().join("all.testnet.json").exists());
}
