mod engine;
mod store;

pub use engine::{
    index_value, navigate, read_path, replace_range, write_path, ChainLevel, DecodedChain,
    ListInterpreter, ListInterpreterOptions, ReplacePolicy, COMMAND_NAMES,
};
pub use store::{MemoryStore, VariableStore};
