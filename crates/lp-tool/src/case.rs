use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const TESTCASE_SCHEMA_V1: &str = "lp-tool-case.v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub schema_version: String,
    #[serde(default)]
    pub description: String,
    /// Initial variables, as list text.
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
    #[serde(default)]
    pub replace_empty_list_ok: bool,
    #[serde(default)]
    pub steps: Vec<TestStep>,
    /// Stored text of these variables once every step has run.
    #[serde(default)]
    pub expected_variables: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestStep {
    pub command: Vec<String>,
    pub expect: StepOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StepOutcome {
    Value { value: String },
    Error { code: String },
}

impl StepOutcome {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Value { .. } => "value",
            Self::Error { .. } => "error",
        }
    }
}
