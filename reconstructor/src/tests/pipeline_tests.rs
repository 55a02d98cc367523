use super::*;
use config::{Case, Parameters};
use num_bigint::BigInt;
use std::fs;

fn data_file(name: &str) -> String {
    format!("{}/../data/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn temp_document(name: &str, contents: &str) -> String {
    let path = std::env::temp_dir().join(format!("{}_{}.json", name, std::process::id()));
    fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}

fn bundled_parameters(parallel: bool) -> Parameters {
    Parameters {
        cases: vec![
            Case::new("Test Case 1", &data_file("testcase1.json")),
            Case::new("Test Case 2", &data_file("testcase2.json")),
        ],
        strict: true,
        parallel,
    }
}

#[test]
fn first_test_case() {
    let outcome = solve_for_constant(&data_file("testcase1.json")).unwrap();
    assert_eq!(outcome.secret, BigInt::from(3));
    assert!(outcome.exact);
}

#[test]
fn second_test_case() {
    let outcome = solve_for_constant(&data_file("testcase2.json")).unwrap();
    let expected = BigInt::parse_bytes(b"415144290503881778897709356659248505052084502", 10).unwrap();
    assert_eq!(outcome.secret, expected);
    assert!(outcome.exact);
}

#[test]
fn inconsistent_shares_are_truncated() {
    let document = ShareDocument::from_json(
        r#"{
            "keys": { "n": 2, "k": 2 },
            "1": { "base": "10", "value": "3" },
            "3": { "base": "10", "value": "2" }
        }"#,
    )
    .unwrap();
    let outcome = solve_document(&document).unwrap();
    assert_eq!(
        outcome,
        Outcome {
            secret: BigInt::from(3),
            exact: false
        }
    );
}

#[test]
fn strict_case_rejects_truncation() {
    let path = temp_document(
        "inconsistent",
        r#"{ "keys": { "k": 2 }, "1": { "base": "10", "value": "3" }, "3": { "base": "10", "value": "2" } }"#,
    );
    let case = Case::new("Inconsistent", &path);

    assert_eq!(run_case(&case, false).unwrap(), BigInt::from(3));
    let err = run_case(&case, true).unwrap_err();
    assert!(err.to_string().contains("Inconsistent"));

    fs::remove_file(&path).unwrap();
}

#[test]
fn failures_name_the_file() {
    let err = solve_for_constant("/nonexistent/testcase.json").unwrap_err();
    assert!(format!("{:#}", err).contains("/nonexistent/testcase.json"));

    let path = temp_document(
        "short",
        r#"{ "keys": { "k": 3 }, "1": { "base": "10", "value": "3" } }"#,
    );
    let err = solve_for_constant(&path).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains(&path));
    assert!(message.contains("requires 3 shares"));
    fs::remove_file(&path).unwrap();
}

#[test]
fn batch_keeps_configured_order() {
    for parallel in [false, true] {
        let parameters = bundled_parameters(parallel);
        let results = run_batch(&parameters);
        let lines: Vec<String> = results
            .into_iter()
            .map(|(case, result)| format_secret(&case.label, &result.unwrap()))
            .collect();
        assert_eq!(
            lines,
            vec![
                "Secret for Test Case 1: 3".to_string(),
                "Secret for Test Case 2: 415144290503881778897709356659248505052084502".to_string(),
            ]
        );
    }
}

#[test]
fn batch_continues_after_a_failure() {
    let mut parameters = bundled_parameters(false);
    parameters
        .cases
        .insert(0, Case::new("Missing", "/nonexistent/testcase.json"));

    let results = run_batch(&parameters);
    assert_eq!(results.len(), 3);
    assert!(results[0].1.is_err());
    assert!(results[1].1.is_ok());
    assert!(results[2].1.is_ok());
}
