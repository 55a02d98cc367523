use super::*;

#[test]
fn defaults_match_two_file_run() {
    let parameters = Parameters::default();
    assert_eq!(
        parameters.cases,
        vec![
            Case::new("Test Case 1", "data/testcase1.json"),
            Case::new("Test Case 2", "data/testcase2.json"),
        ]
    );
    assert!(!parameters.strict);
    assert!(!parameters.parallel);
    assert_eq!(parameters.validate(), Ok(()));
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let parameters: Parameters = serde_json::from_str(r#"{ "strict": true }"#).unwrap();
    assert!(parameters.strict);
    assert_eq!(parameters.cases.len(), 2);

    let parameters: Parameters = serde_json::from_str(
        r#"{ "cases": [ { "label": "Vault", "file": "vault.json" } ], "parallel": true }"#,
    )
    .unwrap();
    assert_eq!(parameters.cases, vec![Case::new("Vault", "vault.json")]);
    assert!(parameters.parallel);
    assert!(!parameters.strict);
}

#[test]
fn rejects_empty_batch() {
    let parameters = Parameters {
        cases: Vec::new(),
        ..Parameters::default()
    };
    assert_eq!(parameters.validate(), Err(ConfigError::NoCases));
}

#[test]
fn rejects_bad_labels() {
    let parameters = Parameters {
        cases: vec![Case::new("A", "a.json"), Case::new("A", "b.json")],
        ..Parameters::default()
    };
    assert_eq!(
        parameters.validate(),
        Err(ConfigError::DuplicateLabel("A".to_string()))
    );

    let parameters = Parameters {
        cases: vec![Case::new("  ", "a.json")],
        ..Parameters::default()
    };
    assert_eq!(parameters.validate(), Err(ConfigError::EmptyLabel));
}

#[test]
fn import_reads_parameters_file() {
    let path = std::env::temp_dir().join(format!("parameters_{}.json", std::process::id()));
    let path = path.to_str().unwrap();

    let parameters = Parameters {
        cases: vec![Case::new("Vault", "vault.json")],
        strict: true,
        parallel: false,
    };
    parameters.export(path).unwrap();

    let loaded = Parameters::import(path).unwrap();
    assert_eq!(loaded.cases, parameters.cases);
    assert!(loaded.strict);

    std::fs::remove_file(path).unwrap();
}
