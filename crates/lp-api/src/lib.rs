use std::collections::BTreeMap;

use lp_core::{ListError, VariablesSnapshot};
use lp_runtime::{ListInterpreter, ListInterpreterOptions, VariableStore};
use tracing::debug;

#[derive(Default)]
pub struct CreateInterpreterOptions {
    pub variables: BTreeMap<String, String>,
    pub store: Option<Box<dyn VariableStore>>,
    pub replace_empty_list_ok: bool,
}

#[derive(Clone)]
pub struct ResumeInterpreterOptions {
    pub snapshot: VariablesSnapshot,
    pub replace_empty_list_ok: bool,
}

/// Outcome of running a script: the result of every command, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRun {
    pub results: Vec<String>,
}

impl ScriptRun {
    pub fn last(&self) -> &str {
        self.results.last().map(String::as_str).unwrap_or_default()
    }
}

pub fn create_interpreter(
    options: CreateInterpreterOptions,
) -> Result<ListInterpreter, ListError> {
    ListInterpreter::new(ListInterpreterOptions {
        variables: options.variables,
        store: options.store,
        replace_empty_list_ok: options.replace_empty_list_ok,
    })
}

pub fn resume_interpreter(
    options: ResumeInterpreterOptions,
) -> Result<ListInterpreter, ListError> {
    let mut interpreter = ListInterpreter::new(ListInterpreterOptions {
        replace_empty_list_ok: options.replace_empty_list_ok,
        ..ListInterpreterOptions::default()
    })?;
    interpreter.restore(options.snapshot)?;
    Ok(interpreter)
}

/// Runs `script` one line at a time, skipping blank lines and `#` comments.
///
/// Execution stops at the first failing command; commands before it keep
/// their effect.
pub fn eval_script(
    interpreter: &mut ListInterpreter,
    script: &str,
) -> Result<ScriptRun, ListError> {
    let mut results = Vec::new();
    for (line_no, line) in script.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        debug!(line = line_no + 1, "eval script line");
        results.push(interpreter.eval_line(trimmed)?);
    }
    Ok(ScriptRun { results })
}
