use std::collections::BTreeMap;

use lp_core::{ListError, ListSlot};

/// Named-variable storage the list commands read from and write back to.
pub trait VariableStore: Send {
    fn load_list(&self, name: &str) -> Result<ListSlot, ListError>;
    fn store_list(&mut self, name: &str, slot: ListSlot) -> Result<(), ListError>;
    fn remove(&mut self, name: &str) -> Result<(), ListError>;
    fn names(&self) -> Vec<String>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, ListSlot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(variables: BTreeMap<String, String>) -> Self {
        Self {
            values: variables
                .into_iter()
                .map(|(name, text)| (name, ListSlot::Text(text)))
                .collect(),
        }
    }
}

impl VariableStore for MemoryStore {
    fn load_list(&self, name: &str) -> Result<ListSlot, ListError> {
        self.values
            .get(name)
            .cloned()
            .ok_or_else(|| ListError::variable_not_found(name))
    }

    fn store_list(&mut self, name: &str, slot: ListSlot) -> Result<(), ListError> {
        self.values.insert(name.to_string(), slot);
        Ok(())
    }

    fn remove(&mut self, name: &str) -> Result<(), ListError> {
        self.values
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| ListError::variable_not_found(name))
    }

    fn names(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }
}
