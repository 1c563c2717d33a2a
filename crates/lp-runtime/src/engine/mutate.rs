use lp_codec::encode;
use lp_core::{ListError, ListSlot, ListValue};
use tracing::debug;

use super::navigate::{navigate, DecodedChain};

/// Returns the element addressed by `path`.
pub fn read_path<S: AsRef<str>>(root: ListSlot, path: &[S]) -> Result<String, ListError> {
    navigate(root, path).map(DecodedChain::into_leaf)
}

/// Replaces the element addressed by `path` with `value` and returns the
/// rebuilt root list. Nothing is modified unless every level resolves.
pub fn write_path<S: AsRef<str>>(
    root: ListSlot,
    path: &[S],
    value: String,
) -> Result<ListValue, ListError> {
    let chain = navigate(root, path)?;
    Ok(chain.write_back(value))
}

impl DecodedChain {
    /// Stores `value` at the leaf, then re-encodes each level into its parent,
    /// deepest first, and returns the root level.
    pub fn write_back(self, value: String) -> ListValue {
        let (mut levels, _previous) = self.into_parts();
        let mut carried = value;

        while let Some(mut level) = levels.pop() {
            level.list.replace_at(level.index, carried);
            if levels.is_empty() {
                debug!(index = level.index, length = level.list.len(), "write-back reached root");
                return level.list;
            }
            carried = encode(&level.list);
            debug!(depth = levels.len(), index = level.index, "write-back level");
        }

        ListValue::new()
    }
}
