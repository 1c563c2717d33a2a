use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const VARIABLES_SNAPSHOT_SCHEMA: &str = "listpath-vars.v1";

/// Canonical text of every variable held by an interpreter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariablesSnapshot {
    pub schema_version: String,
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
}

impl VariablesSnapshot {
    pub fn new(variables: BTreeMap<String, String>) -> Self {
        Self {
            schema_version: VARIABLES_SNAPSHOT_SCHEMA.to_string(),
            variables,
        }
    }
}

#[cfg(test)]
mod types_tests {
    use super::*;

    #[test]
    fn snapshot_uses_camel_case_schema_field() {
        let mut variables = BTreeMap::new();
        variables.insert("x".to_string(), "a {b c}".to_string());
        let snapshot = VariablesSnapshot::new(variables);

        let raw = serde_json::to_string(&snapshot).expect("snapshot should serialize");
        assert_eq!(
            raw,
            r#"{"schemaVersion":"listpath-vars.v1","variables":{"x":"a {b c}"}}"#
        );
    }

    #[test]
    fn snapshot_variables_default_to_empty() {
        let parsed: VariablesSnapshot =
            serde_json::from_str(r#"{"schemaVersion":"listpath-vars.v1"}"#)
                .expect("snapshot should deserialize");
        assert!(parsed.variables.is_empty());
    }
}
