use lp_core::ListError;
use std::fmt::Display;

fn map_error(code: &'static str, error: impl Display) -> ListError {
    ListError::store(code, error.to_string())
}

pub(crate) fn emit_error(error: ListError) -> i32 {
    println!("RESULT:ERROR");
    println!("ERROR_CODE:{}", error.code());
    println!(
        "ERROR_MSG_JSON:{}",
        serde_json::to_string(&error.to_string()).expect("string json")
    );
    1
}

pub(crate) fn map_repl_io(error: std::io::Error) -> ListError {
    map_error("REPL_IO", error)
}

pub(crate) fn map_cli_state_write(error: std::io::Error) -> ListError {
    map_error("CLI_STATE_WRITE", error)
}

pub(crate) fn map_cli_state_read(error: std::io::Error) -> ListError {
    map_error("CLI_STATE_READ", error)
}

pub(crate) fn map_cli_state_invalid(error: serde_json::Error) -> ListError {
    map_error("CLI_STATE_INVALID", error)
}

#[cfg(test)]
mod error_map_tests {
    use super::*;

    #[test]
    fn emit_error_returns_non_zero_exit_code() {
        let code = emit_error(ListError::IndexOutOfRange);
        assert_eq!(code, 1);
    }

    #[test]
    fn mapping_helpers_keep_error_codes() {
        assert_eq!(map_repl_io(std::io::Error::other("io")).code(), "REPL_IO");
        assert_eq!(
            map_cli_state_write(std::io::Error::other("write")).code(),
            "CLI_STATE_WRITE"
        );
        assert_eq!(
            map_cli_state_read(std::io::Error::other("read")).code(),
            "CLI_STATE_READ"
        );

        let invalid = serde_json::from_str::<serde_json::Value>("{").expect_err("invalid json");
        let mapped = map_cli_state_invalid(invalid);
        assert_eq!(mapped.code(), "CLI_STATE_INVALID");
        assert!(!mapped.to_string().is_empty());
    }
}
