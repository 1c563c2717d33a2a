use std::collections::BTreeMap;

use lp_codec::slot_text;
use lp_core::{ListError, ListSlot, VariablesSnapshot, VARIABLES_SNAPSHOT_SCHEMA};

use super::lifecycle::ListInterpreter;

impl ListInterpreter {
    pub fn snapshot(&self) -> Result<VariablesSnapshot, ListError> {
        let store = self.store();
        let mut variables = BTreeMap::new();
        for name in store.names() {
            let slot = store.load_list(&name)?;
            variables.insert(name, slot_text(&slot).into_owned());
        }
        Ok(VariablesSnapshot::new(variables))
    }

    /// Loads every variable of `snapshot` into the store, replacing existing ones.
    pub fn restore(&mut self, snapshot: VariablesSnapshot) -> Result<(), ListError> {
        if snapshot.schema_version != VARIABLES_SNAPSHOT_SCHEMA {
            return Err(ListError::store(
                "SNAPSHOT_SCHEMA",
                format!(
                    "Unsupported variables snapshot schema: {}",
                    snapshot.schema_version
                ),
            ));
        }

        let store = self.store_mut();
        for (name, text) in snapshot.variables {
            store.store_list(&name, ListSlot::Text(text))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod snapshot_tests {
    use super::*;
    use crate::ListInterpreterOptions;

    #[test]
    fn snapshot_captures_cached_and_text_variables() {
        let mut interp = ListInterpreter::new(ListInterpreterOptions {
            variables: [
                ("a".to_string(), "x  {y z}".to_string()),
                ("b".to_string(), "1 2".to_string()),
            ]
            .into_iter()
            .collect(),
            ..ListInterpreterOptions::default()
        })
        .expect("interpreter should build");
        interp.set("b", &["0"], "one two").expect("set should pass");

        let snapshot = interp.snapshot().expect("snapshot should pass");
        assert_eq!(snapshot.schema_version, VARIABLES_SNAPSHOT_SCHEMA);
        assert_eq!(snapshot.variables["a"], "x  {y z}");
        assert_eq!(snapshot.variables["b"], "{one two} 2");
    }

    #[test]
    fn restore_round_trips_through_snapshot() {
        let mut source = ListInterpreter::new(ListInterpreterOptions::default())
            .expect("interpreter should build");
        source.set_text("v", "p {q r}").expect("set_text");
        let snapshot = source.snapshot().expect("snapshot");

        let mut target = ListInterpreter::new(ListInterpreterOptions::default())
            .expect("interpreter should build");
        target.restore(snapshot).expect("restore should pass");
        assert_eq!(target.get("v", &["1", "0"]), Ok("q".to_string()));
    }

    #[test]
    fn restore_rejects_unknown_schema() {
        let mut interp = ListInterpreter::new(ListInterpreterOptions::default())
            .expect("interpreter should build");
        let error = interp
            .restore(VariablesSnapshot {
                schema_version: "v0".to_string(),
                variables: BTreeMap::new(),
            })
            .expect_err("schema should fail");
        assert_eq!(error.code(), "SNAPSHOT_SCHEMA");
    }
}
