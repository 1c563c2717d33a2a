mod commands;
mod lifecycle;
mod lindex;
mod mutate;
mod navigate;
mod replace;
mod snapshot;

pub use commands::COMMAND_NAMES;
pub use lifecycle::{ListInterpreter, ListInterpreterOptions};
pub use lindex::index_value;
pub use mutate::{read_path, write_path};
pub use navigate::{navigate, ChainLevel, DecodedChain};
pub use replace::{replace_range, ReplacePolicy};
