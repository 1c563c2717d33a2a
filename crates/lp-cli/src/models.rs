use lp_core::VariablesSnapshot;
use serde::{Deserialize, Serialize};

pub(crate) const VARIABLE_STATE_SCHEMA: &str = "lp-cli-state.v1";
pub(crate) const DEFAULT_STATE_FILE: &str = ".listpath/vars.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VariableState {
    pub(crate) schema_version: String,
    #[serde(default)]
    pub(crate) replace_empty_list_ok: bool,
    pub(crate) snapshot: VariablesSnapshot,
}

impl VariableState {
    pub(crate) fn new(snapshot: VariablesSnapshot, replace_empty_list_ok: bool) -> Self {
        Self {
            schema_version: VARIABLE_STATE_SCHEMA.to_string(),
            replace_empty_list_ok,
            snapshot,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReplCommandAction {
    NotHandled,
    Continue,
    Quit,
}
