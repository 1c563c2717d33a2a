use std::io::{self, BufRead, Write};
use std::path::Path;

use lp_core::ListError;
use lp_runtime::ListInterpreter;

use crate::{map_repl_io, save_interpreter_state, ReplCommandAction};

const REPL_HELP: &str = "commands: :help :vars :save :quit";

pub(crate) fn run_repl_line_mode(
    state_file: &str,
    interpreter: &mut ListInterpreter,
) -> Result<i32, ListError> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut writer = io::stdout();
    run_repl_line_mode_with_io(state_file, interpreter, &mut reader, &mut writer)
}

pub(crate) fn run_repl_line_mode_with_io(
    state_file: &str,
    interpreter: &mut ListInterpreter,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<i32, ListError> {
    writeln!(writer, "listpath repl").map_err(map_repl_io)?;
    writeln!(writer, "{}", REPL_HELP).map_err(map_repl_io)?;

    while let Some(raw) = prompt_input_from("% ", reader, writer)? {
        let mut lines = Vec::new();
        let action = handle_line_cmd(raw.trim(), state_file, interpreter, &mut |line| {
            lines.push(line)
        })?;
        for line in lines {
            writeln!(writer, "{}", line).map_err(map_repl_io)?;
        }
        match action {
            ReplCommandAction::Continue => continue,
            ReplCommandAction::Quit => return Ok(0),
            ReplCommandAction::NotHandled => {}
        }

        // Command failures are reported and the loop keeps going.
        let written = match interpreter.eval_line(&raw) {
            Ok(value) => writeln!(writer, "{}", value),
            Err(error) => writeln!(writer, "error [{}] {}", error.code(), error),
        };
        written.map_err(map_repl_io)?;
    }
    Ok(0)
}

pub(crate) fn handle_line_cmd(
    raw: &str,
    state_file: &str,
    interpreter: &mut ListInterpreter,
    emit: &mut dyn FnMut(String),
) -> Result<ReplCommandAction, ListError> {
    match raw {
        "" => Ok(ReplCommandAction::Continue),
        ":help" => {
            emit(REPL_HELP.to_string());
            emit(format!(
                "list commands: {}",
                lp_runtime::COMMAND_NAMES.join(" ")
            ));
            Ok(ReplCommandAction::Continue)
        }
        ":vars" => {
            for name in interpreter.variable_names() {
                let text = interpreter.text_of(&name)?;
                emit(format!("{} = {}", name, text));
            }
            Ok(ReplCommandAction::Continue)
        }
        ":save" => {
            save_interpreter_state(Path::new(state_file), interpreter)?;
            emit(format!("saved: {}", state_file));
            Ok(ReplCommandAction::Continue)
        }
        ":quit" => {
            emit("bye".to_string());
            Ok(ReplCommandAction::Quit)
        }
        _ => Ok(ReplCommandAction::NotHandled),
    }
}

/// Reads one line; `None` once the input is exhausted.
pub(crate) fn prompt_input_from(
    prefix: &str,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<Option<String>, ListError> {
    write!(writer, "{}", prefix).map_err(map_repl_io)?;
    writer.flush().map_err(map_repl_io)?;
    let mut input = String::new();
    let read = reader.read_line(&mut input).map_err(map_repl_io)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim_end_matches(&['\r', '\n'][..]).to_string()))
}
