mod case;
mod runner;
mod source;

pub use case::{StepOutcome, TestCase, TestStep, TESTCASE_SCHEMA_V1};
pub use runner::{assert_case, run_case, RunReport};
pub use source::{discover_case_files, read_test_case, CASE_FILE_SUFFIX};

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LpToolError {
    #[error("Failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse testcase {path}: {source}")]
    ParseCase {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid testcase schema version \"{found}\", expected \"{expected}\".")]
    InvalidSchemaVersion { expected: String, found: String },
    #[error("No *.case.json files under {path}.")]
    CasesEmpty { path: PathBuf },
    #[error("Interpreter error: {0}")]
    Interpreter(#[from] lp_core::ListError),
    #[error("Expected step count {expected}, actual {actual}.")]
    StepCountMismatch { expected: usize, actual: usize },
    #[error("Step mismatch at index {index} ({command}). expected={expected} actual={actual}")]
    StepMismatch {
        index: usize,
        command: String,
        expected: String,
        actual: String,
    },
    #[error("Variable \"{name}\" mismatch. expected={expected:?} actual={actual:?}")]
    VariableMismatch {
        name: String,
        expected: String,
        actual: Option<String>,
    },
    #[error("Failed to serialize step outcome for diff: {0}")]
    OutcomeSerialize(serde_json::Error),
}
