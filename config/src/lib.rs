// Copyright(C) Facebook, Inc. and its affiliates.
use log::info;
use model::file_io::{Export, Import};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[cfg(test)]
#[path = "tests/config_tests.rs"]
pub mod config_tests;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No case is configured")]
    NoCases,

    #[error("A case has an empty label")]
    EmptyLabel,

    #[error("Case label '{0}' is used more than once")]
    DuplicateLabel(String),
}

/// A named share document to reconstruct.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    /// Label used in the `Secret for <label>: <value>` output line.
    pub label: String,
    /// Path of the JSON share document.
    pub file: String,
}

impl Case {
    pub fn new(label: &str, file: &str) -> Self {
        Self {
            label: label.to_string(),
            file: file.to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// The share documents processed by a batch run, in output order.
    pub cases: Vec<Case>,
    /// Treat a reconstruction that needed truncation (the interpolated value at zero
    /// is not an integer) as a failure instead of a warning.
    pub strict: bool,
    /// Reconstruct the cases on a thread pool. Output order is unchanged.
    pub parallel: bool,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            cases: vec![
                Case::new("Test Case 1", "data/testcase1.json"),
                Case::new("Test Case 2", "data/testcase2.json"),
            ],
            strict: false,
            parallel: false,
        }
    }
}

impl Import for Parameters {}
impl Export for Parameters {}

impl Parameters {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cases.is_empty() {
            return Err(ConfigError::NoCases);
        }
        let mut labels = HashSet::new();
        for case in &self.cases {
            if case.label.trim().is_empty() {
                return Err(ConfigError::EmptyLabel);
            }
            if !labels.insert(case.label.as_str()) {
                return Err(ConfigError::DuplicateLabel(case.label.clone()));
            }
        }
        Ok(())
    }

    pub fn log(&self) {
        info!("Batch set to {} cases", self.cases.len());
        for case in &self.cases {
            info!("Case '{}' reads {}", case.label, case.file);
        }
        info!("Strict truncation set to {}", self.strict);
        info!("Parallel reconstruction set to {}", self.parallel);
    }
}
