use std::ffi::OsString;
use std::path::Path;

use clap::Parser;
use lp_core::ListError;
use tracing::info;

mod cli_args;
mod error_map;
mod eval;
mod line_repl;
mod logging;
mod models;
mod session;
mod state_store;

pub(crate) use cli_args::{Cli, EvalArgs, Mode, ReplArgs};
pub(crate) use error_map::{
    emit_error, map_cli_state_invalid, map_cli_state_read, map_cli_state_write, map_repl_io,
};
pub(crate) use line_repl::run_repl_line_mode;
#[cfg(test)]
pub(crate) use line_repl::{handle_line_cmd, run_repl_line_mode_with_io};
pub(crate) use models::{
    ReplCommandAction, VariableState, DEFAULT_STATE_FILE, VARIABLE_STATE_SCHEMA,
};
pub(crate) use session::{open_interpreter, save_interpreter_state};
pub(crate) use state_store::{load_variable_state, save_variable_state};

pub fn run_cli_from_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return error.exit_code();
        }
    };
    logging::init_tracing();
    match run(cli) {
        Ok(code) => code,
        Err(error) => emit_error(error),
    }
}

fn run(cli: Cli) -> Result<i32, ListError> {
    match cli.command {
        Mode::Eval(args) => eval::run_eval(args, cli.replace_empty_ok),
        Mode::Repl(args) => run_repl(args, cli.replace_empty_ok),
    }
}

fn run_repl(args: ReplArgs, replace_empty_ok: bool) -> Result<i32, ListError> {
    let state_file = args
        .state_file
        .unwrap_or_else(|| DEFAULT_STATE_FILE.to_string());
    let path = Path::new(&state_file);
    let state_in = path.exists().then_some(path);
    info!(state_file = %state_file, resumed = state_in.is_some(), "starting repl");
    let mut interpreter = open_interpreter(state_in, replace_empty_ok)?;
    run_repl_line_mode(&state_file, &mut interpreter)
}
