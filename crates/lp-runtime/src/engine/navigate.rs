use lp_codec::{decode_slot, encode, resolve_index, IndexBound};
use lp_core::{ListError, ListSlot, ListValue};
use tracing::trace;

/// One decoded level of a path walk.
///
/// The element at `index` has been moved down into the next level (or the
/// leaf), so it reads as empty until the chain is written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainLevel {
    pub list: ListValue,
    pub index: usize,
}

/// Every level visited by one path walk, root first, plus the leaf value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedChain {
    levels: Vec<ChainLevel>,
    leaf: String,
}

impl DecodedChain {
    pub fn levels(&self) -> &[ChainLevel] {
        &self.levels
    }

    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn leaf(&self) -> &str {
        &self.leaf
    }

    pub fn into_leaf(self) -> String {
        self.leaf
    }

    pub(super) fn into_parts(self) -> (Vec<ChainLevel>, String) {
        (self.levels, self.leaf)
    }
}

/// Walks `path` down from `root`, decoding each level only when needed.
///
/// Every token is resolved against the length of the level it indexes. An
/// empty path is rejected: there is no level to address.
pub fn navigate<S: AsRef<str>>(root: ListSlot, path: &[S]) -> Result<DecodedChain, ListError> {
    if path.is_empty() {
        return Err(ListError::IndexOutOfRange);
    }

    let mut levels = Vec::with_capacity(path.len());
    let mut current = root;

    for (depth, token) in path.iter().enumerate() {
        let token = token.as_ref();
        let cached = current.is_cached();
        let mut list = decode_slot(current)?;
        let position = resolve_index(token, list.len())?;
        let index = IndexBound::Element
            .check(position, list.len())
            .ok_or(ListError::IndexOutOfRange)?;
        trace!(depth, token, position, length = list.len(), cached, "navigate level");

        let element = list.take(index).ok_or(ListError::IndexOutOfRange)?;
        levels.push(ChainLevel { list, index });
        current = ListSlot::Text(element);
    }

    let leaf = match current {
        ListSlot::Text(leaf) => leaf,
        ListSlot::Cached(list) => encode(&list),
    };
    Ok(DecodedChain { levels, leaf })
}

#[cfg(test)]
mod navigate_tests {
    use super::*;
    use lp_codec::decode;

    #[test]
    fn navigate_collects_one_level_per_token() {
        let chain = navigate(ListSlot::from("a {b {c d}} e"), &["1", "1", "end"])
            .expect("navigate should pass");
        assert_eq!(chain.depth(), 3);
        assert_eq!(chain.leaf(), "d");
        let indexes = chain
            .levels()
            .iter()
            .map(|level| level.index)
            .collect::<Vec<_>>();
        assert_eq!(indexes, [1, 1, 1]);
        assert_eq!(chain.levels()[0].list.get(0), Some("a"));
    }

    #[test]
    fn navigate_resolves_end_against_each_level_length() {
        let chain = navigate(ListSlot::from("x y {p q r s}"), &["end", "end-1"])
            .expect("navigate should pass");
        assert_eq!(chain.leaf(), "r");
    }

    #[test]
    fn navigate_reuses_cached_root_without_parsing() {
        let mut cached = decode("{inner list} other").expect("root should decode");
        cached.push("{unbalanced");
        let chain =
            navigate(ListSlot::Cached(cached), &["2"]).expect("cached root should not reparse");
        assert_eq!(chain.into_leaf(), "{unbalanced");
    }

    #[test]
    fn navigate_reports_out_of_range_and_bad_tokens() {
        for token in ["3", "-1", "end+1", "end-3"] {
            let error = navigate(ListSlot::from("a b c"), &[token]).expect_err("should fail");
            assert_eq!(error, ListError::IndexOutOfRange, "token {}", token);
        }
        let error = navigate(ListSlot::from("a b c"), &["first"]).expect_err("should fail");
        assert_eq!(error, ListError::invalid_index("first"));
        let error = navigate(ListSlot::from("a b"), &[] as &[&str]).expect_err("empty path");
        assert_eq!(error, ListError::IndexOutOfRange);
    }

    #[test]
    fn navigate_surfaces_parse_errors_from_deeper_levels() {
        let error = navigate(ListSlot::from(r"a \{b c"), &["1", "0"])
            .expect_err("inner level should fail to parse");
        assert_eq!(error.code(), "LIST_PARSE");
    }

    #[test]
    fn navigate_treats_empty_element_as_empty_list() {
        let error = navigate(ListSlot::from("a {} c"), &["1", "0"]).expect_err("should fail");
        assert_eq!(error, ListError::IndexOutOfRange);
    }
}
