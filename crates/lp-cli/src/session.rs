use std::path::Path;

use lp_api::{
    create_interpreter, resume_interpreter, CreateInterpreterOptions, ResumeInterpreterOptions,
};
use lp_core::ListError;
use lp_runtime::ListInterpreter;
use tracing::debug;

use crate::{load_variable_state, save_variable_state, VariableState};

/// Builds an interpreter from `state_in`, or an empty one when no state is given.
///
/// The replace policy is on when either the flag or the saved state enables it.
pub(crate) fn open_interpreter(
    state_in: Option<&Path>,
    replace_empty_ok: bool,
) -> Result<ListInterpreter, ListError> {
    let Some(path) = state_in else {
        return create_interpreter(CreateInterpreterOptions {
            replace_empty_list_ok: replace_empty_ok,
            ..CreateInterpreterOptions::default()
        });
    };

    let state = load_variable_state(path)?;
    debug!(
        path = %path.display(),
        variables = state.snapshot.variables.len(),
        "loaded variable state"
    );
    resume_interpreter(ResumeInterpreterOptions {
        snapshot: state.snapshot,
        replace_empty_list_ok: replace_empty_ok || state.replace_empty_list_ok,
    })
}

pub(crate) fn save_interpreter_state(
    path: &Path,
    interpreter: &ListInterpreter,
) -> Result<(), ListError> {
    let state = VariableState::new(
        interpreter.snapshot()?,
        interpreter.replace_policy().empty_list_ok,
    );
    save_variable_state(path, &state)
}
