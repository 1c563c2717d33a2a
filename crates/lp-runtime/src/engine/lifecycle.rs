use std::collections::BTreeMap;

use lp_codec::{decode_slot, encode, slot_text};
use lp_core::{ListError, ListSlot};
use tracing::debug;

use super::mutate::{read_path, write_path};
use super::replace::{replace_range, ReplacePolicy};
use crate::store::{MemoryStore, VariableStore};

#[derive(Default)]
pub struct ListInterpreterOptions {
    /// Initial variables, as list text.
    pub variables: BTreeMap<String, String>,
    pub store: Option<Box<dyn VariableStore>>,
    pub replace_empty_list_ok: bool,
}

/// Runs the list commands against one variable store.
///
/// Every mutating operation takes `&mut self`, so a load, mutate, store
/// sequence on a variable can never interleave with another writer.
pub struct ListInterpreter {
    store: Box<dyn VariableStore>,
    replace_policy: ReplacePolicy,
}

impl ListInterpreter {
    pub fn new(options: ListInterpreterOptions) -> Result<Self, ListError> {
        let mut store = options
            .store
            .unwrap_or_else(|| Box::new(MemoryStore::new()));
        for (name, text) in options.variables {
            store.store_list(&name, ListSlot::Text(text))?;
        }

        Ok(Self {
            store,
            replace_policy: ReplacePolicy {
                empty_list_ok: options.replace_empty_list_ok,
            },
        })
    }

    pub fn replace_policy(&self) -> ReplacePolicy {
        self.replace_policy
    }

    pub(super) fn store(&self) -> &dyn VariableStore {
        self.store.as_ref()
    }

    pub(super) fn store_mut(&mut self) -> &mut dyn VariableStore {
        self.store.as_mut()
    }

    /// Reads a variable, following `path` into nested lists when given.
    ///
    /// With an empty path the whole list is returned in canonical form.
    pub fn get<S: AsRef<str>>(&self, name: &str, path: &[S]) -> Result<String, ListError> {
        let root = self.store.load_list(name)?;
        debug!(name, depth = path.len(), cached = root.is_cached(), "lget");
        if path.is_empty() {
            return decode_slot(root).map(|list| encode(&list));
        }
        read_path(root, path)
    }

    /// Writes `value` at `path` inside a variable and returns the new list text.
    pub fn set<S: AsRef<str>>(
        &mut self,
        name: &str,
        path: &[S],
        value: impl Into<String>,
    ) -> Result<String, ListError> {
        let root = self.store.load_list(name)?;
        debug!(name, depth = path.len(), cached = root.is_cached(), "lset");
        let list = write_path(root, path, value.into())?;
        let text = encode(&list);
        self.store.store_list(name, ListSlot::Cached(list))?;
        Ok(text)
    }

    /// Range replace on a variable's top level; the result is stored back.
    pub fn replace(
        &mut self,
        name: &str,
        first: &str,
        last: &str,
        values: Vec<String>,
    ) -> Result<String, ListError> {
        let root = self.store.load_list(name)?;
        let list = replace_range(decode_slot(root)?, first, last, values, self.replace_policy)?;
        let text = encode(&list);
        self.store.store_list(name, ListSlot::Cached(list))?;
        Ok(text)
    }

    /// Stored text of a variable, without normalising it.
    pub fn text_of(&self, name: &str) -> Result<String, ListError> {
        let slot = self.store.load_list(name)?;
        Ok(slot_text(&slot).into_owned())
    }

    pub fn set_text(&mut self, name: &str, text: impl Into<String>) -> Result<(), ListError> {
        self.store.store_list(name, ListSlot::Text(text.into()))
    }

    pub fn unset(&mut self, name: &str) -> Result<(), ListError> {
        self.store.remove(name)
    }

    pub fn variable_names(&self) -> Vec<String> {
        self.store.names()
    }
}

#[cfg(test)]
mod lifecycle_tests {
    use super::*;

    fn interpreter(entries: &[(&str, &str)]) -> ListInterpreter {
        ListInterpreter::new(ListInterpreterOptions {
            variables: entries
                .iter()
                .map(|(name, text)| ((*name).to_string(), (*text).to_string()))
                .collect(),
            ..ListInterpreterOptions::default()
        })
        .expect("interpreter should build")
    }

    #[test]
    fn get_without_path_returns_canonical_list() {
        let interp = interpreter(&[("x", "  a   {b}  {c d} ")]);
        assert_eq!(interp.get::<&str>("x", &[]), Ok("a b {c d}".to_string()));
        assert_eq!(interp.get::<&str>("x", &[]), Ok("a b {c d}".to_string()));
        assert_eq!(interp.text_of("x"), Ok("  a   {b}  {c d} ".to_string()));
    }

    #[test]
    fn set_then_get_returns_written_value() {
        let mut interp = interpreter(&[("x", "a {b c} d")]);
        let root = interp.set("x", &["1", "1"], "X").expect("set should pass");
        assert_eq!(root, "a {b X} d");
        assert_eq!(interp.get("x", &["1", "1"]), Ok("X".to_string()));
        assert_eq!(interp.text_of("x"), Ok("a {b X} d".to_string()));
    }

    #[test]
    fn failed_set_leaves_variable_untouched() {
        let mut interp = interpreter(&[("x", "a {b c} d")]);
        let error = interp
            .set("x", &["1", "9"], "X")
            .expect_err("deep out of range should fail");
        assert_eq!(error, ListError::IndexOutOfRange);
        assert_eq!(interp.text_of("x"), Ok("a {b c} d".to_string()));
    }

    #[test]
    fn replace_stores_new_list() {
        let mut interp = interpreter(&[("x", "a b c d")]);
        let text = interp
            .replace("x", "1", "2", vec!["X".to_string(), "Y".to_string()])
            .expect("replace should pass");
        assert_eq!(text, "a X Y d");
        assert_eq!(interp.get("x", &["2"]), Ok("Y".to_string()));
    }

    #[test]
    fn replace_empty_list_follows_interpreter_policy() {
        let mut strict = interpreter(&[("x", "")]);
        assert_eq!(
            strict.replace("x", "0", "0", Vec::new()),
            Err(ListError::element_not_found("0"))
        );

        let mut lenient = ListInterpreter::new(ListInterpreterOptions {
            variables: [("x".to_string(), String::new())].into_iter().collect(),
            replace_empty_list_ok: true,
            ..ListInterpreterOptions::default()
        })
        .expect("interpreter should build");
        assert!(lenient.replace_policy().empty_list_ok);
        assert_eq!(lenient.replace("x", "0", "0", Vec::new()), Ok(String::new()));
    }

    #[test]
    fn missing_variable_is_reported() {
        let mut interp = interpreter(&[]);
        assert_eq!(
            interp.get::<&str>("nope", &[]),
            Err(ListError::variable_not_found("nope"))
        );
        assert_eq!(
            interp.set("nope", &["0"], "v"),
            Err(ListError::variable_not_found("nope"))
        );
    }

    #[test]
    fn set_text_and_unset_manage_variables() {
        let mut interp = interpreter(&[]);
        interp.set_text("y", "p q").expect("set_text should pass");
        assert_eq!(interp.variable_names(), vec!["y".to_string()]);
        interp.unset("y").expect("unset should pass");
        assert!(interp.variable_names().is_empty());
    }
}
