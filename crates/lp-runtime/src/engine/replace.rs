use lp_codec::resolve_index;
use lp_core::{ListError, ListValue};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplacePolicy {
    /// Return an empty list unchanged instead of reporting the missing element.
    pub empty_list_ok: bool,
}

/// Deletes the inclusive range `first..=last` and splices `values` in at `first`.
pub fn replace_range(
    mut list: ListValue,
    first: &str,
    last: &str,
    values: Vec<String>,
    policy: ReplacePolicy,
) -> Result<ListValue, ListError> {
    let length = list.len();
    let first_index = resolve_index(first, length)?.max(0);
    let last_index = resolve_index(last, length)?;

    if length == 0 {
        if policy.empty_list_ok {
            return Ok(list);
        }
        return Err(ListError::element_not_found(first));
    }

    // `first_index` is non-negative here, so the conversion cannot fail.
    let start = usize::try_from(first_index).unwrap_or(usize::MAX);
    if start >= length {
        return Err(ListError::element_not_found(first));
    }

    let last_index = last_index.min(length as i64 - 1);
    let delete = if first_index <= last_index {
        (last_index - first_index + 1) as usize
    } else {
        0
    };
    debug!(start, delete, insert = values.len(), length, "replace range");

    list.splice(start, delete, values);
    Ok(list)
}
