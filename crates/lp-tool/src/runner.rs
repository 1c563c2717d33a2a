use std::collections::BTreeMap;
use std::path::Path;

use lp_api::{create_interpreter, CreateInterpreterOptions};

use crate::source::read_test_case;
use crate::{LpToolError, StepOutcome, TestCase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub observed_outcomes: Vec<StepOutcome>,
    /// Stored text of every variable after the last step.
    pub variables: BTreeMap<String, String>,
}

/// Runs every step of `case` against a fresh interpreter.
///
/// Command failures are recorded as outcomes; only interpreter setup and
/// snapshotting can fail the run itself.
pub fn run_case(case: &TestCase) -> Result<RunReport, LpToolError> {
    let mut interpreter = create_interpreter(CreateInterpreterOptions {
        variables: case.variables.clone(),
        replace_empty_list_ok: case.replace_empty_list_ok,
        ..CreateInterpreterOptions::default()
    })?;

    let observed_outcomes: Vec<StepOutcome> = case
        .steps
        .iter()
        .map(|step| match interpreter.eval_words(&step.command) {
            Ok(value) => StepOutcome::Value { value },
            Err(error) => StepOutcome::Error {
                code: error.code().to_string(),
            },
        })
        .collect();

    Ok(RunReport {
        observed_outcomes,
        variables: interpreter.snapshot()?.variables,
    })
}

pub fn assert_case(case_path: &Path) -> Result<RunReport, LpToolError> {
    let case = read_test_case(case_path)?;
    let report = run_case(&case)?;

    if report.observed_outcomes.len() != case.steps.len() {
        return Err(LpToolError::StepCountMismatch {
            expected: case.steps.len(),
            actual: report.observed_outcomes.len(),
        });
    }

    for (index, (step, actual)) in case
        .steps
        .iter()
        .zip(report.observed_outcomes.iter())
        .enumerate()
    {
        if &step.expect != actual {
            let expected =
                serde_json::to_string(&step.expect).map_err(LpToolError::OutcomeSerialize)?;
            let actual = serde_json::to_string(actual).map_err(LpToolError::OutcomeSerialize)?;
            return Err(LpToolError::StepMismatch {
                index,
                command: step.command.join(" "),
                expected,
                actual,
            });
        }
    }

    for (name, expected) in &case.expected_variables {
        let actual = report.variables.get(name);
        if actual != Some(expected) {
            return Err(LpToolError::VariableMismatch {
                name: name.clone(),
                expected: expected.clone(),
                actual: actual.cloned(),
            });
        }
    }

    Ok(report)
}
