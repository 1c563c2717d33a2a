use std::fs;
use std::path::Path;

use lp_core::ListError;

use crate::{
    map_cli_state_invalid, map_cli_state_read, map_cli_state_write, VariableState,
    VARIABLE_STATE_SCHEMA,
};

pub(crate) fn save_variable_state(path: &Path, state: &VariableState) -> Result<(), ListError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(map_cli_state_write)?;

    let payload = serde_json::to_string_pretty(state).map_err(map_cli_state_invalid)?;
    fs::write(path, payload).map_err(map_cli_state_write)
}

pub(crate) fn load_variable_state(path: &Path) -> Result<VariableState, ListError> {
    if !path.exists() {
        return Err(ListError::store(
            "CLI_STATE_NOT_FOUND",
            format!("State file does not exist: {}", path.display()),
        ));
    }

    let raw = fs::read_to_string(path).map_err(map_cli_state_read)?;

    let state: VariableState = serde_json::from_str(&raw).map_err(map_cli_state_invalid)?;

    if state.schema_version != VARIABLE_STATE_SCHEMA {
        return Err(ListError::store(
            "CLI_STATE_SCHEMA",
            format!("Unsupported variable state schema: {}", state.schema_version),
        ));
    }

    Ok(state)
}
