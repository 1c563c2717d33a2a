use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("{message}: \"{text}\"")]
    Parse { message: String, text: String },
    #[error("bad index \"{token}\": must be integer?[+-]integer? or end?[+-]integer?")]
    InvalidIndexToken { token: String },
    #[error("list index out of range")]
    IndexOutOfRange,
    #[error("list doesn't contain element {token}")]
    ElementNotFound { token: String },
    #[error("wrong # args: should be \"{usage}\"")]
    WrongArgs { usage: String },
    #[error("can't read \"{name}\": no such variable")]
    VariableNotFound { name: String },
    #[error("invalid command name \"{name}\"")]
    UnknownCommand { name: String },
    #[error("{message}")]
    Store { code: String, message: String },
}

impl ListError {
    pub fn parse(message: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            text: text.into(),
        }
    }

    pub fn invalid_index(token: impl Into<String>) -> Self {
        Self::InvalidIndexToken {
            token: token.into(),
        }
    }

    pub fn element_not_found(token: impl Into<String>) -> Self {
        Self::ElementNotFound {
            token: token.into(),
        }
    }

    pub fn wrong_args(usage: impl Into<String>) -> Self {
        Self::WrongArgs {
            usage: usage.into(),
        }
    }

    pub fn variable_not_found(name: impl Into<String>) -> Self {
        Self::VariableNotFound { name: name.into() }
    }

    pub fn store(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Store {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Stable machine-readable code, used by the CLI and the case runner.
    pub fn code(&self) -> &str {
        match self {
            Self::Parse { .. } => "LIST_PARSE",
            Self::InvalidIndexToken { .. } => "LIST_BAD_INDEX",
            Self::IndexOutOfRange => "LIST_INDEX_RANGE",
            Self::ElementNotFound { .. } => "LIST_ELEMENT_NOT_FOUND",
            Self::WrongArgs { .. } => "CMD_WRONG_ARGS",
            Self::VariableNotFound { .. } => "VAR_NOT_FOUND",
            Self::UnknownCommand { .. } => "CMD_UNKNOWN",
            Self::Store { code, .. } => code.as_str(),
        }
    }
}
