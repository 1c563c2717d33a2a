use lp_codec::{decode, encode, resolve_index, IndexBound};
use lp_core::{ListError, ListValue};

/// Value-form indexing: walks `tokens` through `text`, yielding an empty string
/// for positions outside a level instead of failing.
///
/// A token that is not an index but is a list of index tokens selects several
/// elements of the same level at once.
pub fn index_value<S: AsRef<str>>(text: &str, tokens: &[S]) -> Result<String, ListError> {
    let mut current = text.to_string();

    for token in tokens {
        let token = token.as_ref();
        let list = decode(&current)?;
        current = match resolve_index(token, list.len()) {
            Ok(position) => element_or_empty(&list, position),
            Err(error) => {
                let Ok(selectors) = decode(token) else {
                    return Err(error);
                };
                if selectors.is_empty() {
                    continue;
                }
                select_each(&list, &selectors).ok_or(error)?
            }
        };
    }

    Ok(current)
}

fn element_or_empty(list: &ListValue, position: i64) -> String {
    IndexBound::Element
        .check(position, list.len())
        .and_then(|index| list.get(index))
        .unwrap_or_default()
        .to_string()
}

fn select_each(list: &ListValue, selectors: &ListValue) -> Option<String> {
    let selected = selectors
        .iter()
        .map(|selector| {
            resolve_index(selector, list.len())
                .ok()
                .map(|position| element_or_empty(list, position))
        })
        .collect::<Option<ListValue>>()?;
    Some(encode(&selected))
}
