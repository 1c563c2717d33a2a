use std::path::Path;

use lp_core::ListError;

use crate::{open_interpreter, save_interpreter_state, EvalArgs};

pub(crate) fn run_eval(args: EvalArgs, replace_empty_ok: bool) -> Result<i32, ListError> {
    let state_in = args.state_in.as_deref().map(Path::new);
    let mut interpreter = open_interpreter(state_in, replace_empty_ok)?;
    let value = interpreter.eval_words(&args.words)?;

    if let Some(state_out) = &args.state_out {
        save_interpreter_state(Path::new(state_out), &interpreter)?;
    }
    emit_value(&value, args.state_out);
    Ok(0)
}

pub(crate) fn emit_value(value: &str, state_out: Option<String>) {
    println!("RESULT:OK");
    println!(
        "VALUE_JSON:{}",
        serde_json::to_string(value).expect("string json")
    );
    println!(
        "STATE_OUT:{}",
        state_out.unwrap_or_else(|| "NONE".to_string())
    );
}
