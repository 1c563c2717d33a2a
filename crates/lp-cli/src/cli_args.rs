use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "lp-cli")]
#[command(about = "Nested list path commands over a variable state file")]
pub(crate) struct Cli {
    /// Let `lreplace` on an empty list succeed instead of reporting a missing element.
    #[arg(
        long = "replace-empty-ok",
        env = "LISTPATH_REPLACE_EMPTY_OK",
        global = true
    )]
    pub(crate) replace_empty_ok: bool,
    #[command(subcommand)]
    pub(crate) command: Mode,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Mode {
    Eval(EvalArgs),
    Repl(ReplArgs),
}

#[derive(Debug, Args)]
pub(crate) struct EvalArgs {
    #[arg(long = "state-in")]
    pub(crate) state_in: Option<String>,
    #[arg(long = "state-out")]
    pub(crate) state_out: Option<String>,
    /// Command name followed by its arguments, e.g. `lset x 1 0 value`.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub(crate) words: Vec<String>,
}

#[derive(Debug, Args)]
pub(crate) struct ReplArgs {
    #[arg(long = "state-file")]
    pub(crate) state_file: Option<String>,
}
