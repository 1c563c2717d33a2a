pub mod error;
pub mod types;
pub mod value;

pub use error::ListError;
pub use types::*;
pub use value::*;
