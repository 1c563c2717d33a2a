use lp_codec::{decode, encode};
use lp_core::ListError;
use tracing::debug;

use super::lifecycle::ListInterpreter;
use super::lindex::index_value;
use super::replace::replace_range;

const LGET_USAGE: &str = "lget varName ?index ...?";
const LSET_USAGE: &str = "lset varName index ?index...? value";
const LREPLACE_USAGE: &str = "lreplace list first last ?value ...?";
const LINDEX_USAGE: &str = "lindex list ?index ...?";
const SET_USAGE: &str = "set varName ?newValue?";
const UNSET_USAGE: &str = "unset varName";

/// Commands understood by [`ListInterpreter::eval_words`].
pub const COMMAND_NAMES: &[&str] = &["lget", "lindex", "lreplace", "lset", "set", "unset"];

impl ListInterpreter {
    /// Parses `line` as a list of words and runs it as one command.
    pub fn eval_line(&mut self, line: &str) -> Result<String, ListError> {
        let words = decode(line)?;
        if words.is_empty() {
            return Ok(String::new());
        }
        self.eval_words(words.as_slice())
    }

    /// Runs one command given as already-split words, name first.
    pub fn eval_words<S: AsRef<str>>(&mut self, words: &[S]) -> Result<String, ListError> {
        let Some((name, args)) = words.split_first() else {
            return Ok(String::new());
        };
        let name = name.as_ref();
        debug!(command = name, argc = args.len(), "eval");

        match name {
            "lget" => {
                let (var, path) = args
                    .split_first()
                    .ok_or_else(|| ListError::wrong_args(LGET_USAGE))?;
                self.get(var.as_ref(), path)
            }
            "lset" => match args {
                [var, path @ .., value] if !path.is_empty() => {
                    self.set(var.as_ref(), path, value.as_ref())
                }
                _ => Err(ListError::wrong_args(LSET_USAGE)),
            },
            "lreplace" => match args {
                [list, first, last, values @ ..] => {
                    let values = values.iter().map(|v| v.as_ref().to_string()).collect();
                    let list = replace_range(
                        decode(list.as_ref())?,
                        first.as_ref(),
                        last.as_ref(),
                        values,
                        self.replace_policy(),
                    )?;
                    Ok(encode(&list))
                }
                _ => Err(ListError::wrong_args(LREPLACE_USAGE)),
            },
            "lindex" => {
                let (text, tokens) = args
                    .split_first()
                    .ok_or_else(|| ListError::wrong_args(LINDEX_USAGE))?;
                index_value(text.as_ref(), tokens)
            }
            "set" => match args {
                [var] => self.text_of(var.as_ref()),
                [var, value] => {
                    self.set_text(var.as_ref(), value.as_ref())?;
                    Ok(value.as_ref().to_string())
                }
                _ => Err(ListError::wrong_args(SET_USAGE)),
            },
            "unset" => match args {
                [var] => {
                    self.unset(var.as_ref())?;
                    Ok(String::new())
                }
                _ => Err(ListError::wrong_args(UNSET_USAGE)),
            },
            other => Err(ListError::UnknownCommand {
                name: other.to_string(),
            }),
        }
    }
}
