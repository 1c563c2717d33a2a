use serde::{Deserialize, Serialize};

/// Decoded form of one list level: its elements in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListValue(Vec<String>);

impl ListValue {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Replaces the element at `index`, returning the previous value.
    pub fn replace_at(&mut self, index: usize, value: String) -> Option<String> {
        let slot = self.0.get_mut(index)?;
        Some(std::mem::replace(slot, value))
    }

    pub fn take(&mut self, index: usize) -> Option<String> {
        self.0.get_mut(index).map(std::mem::take)
    }

    pub fn push(&mut self, value: impl Into<String>) {
        self.0.push(value.into());
    }

    /// Removes `count` elements starting at `at` and inserts `values` in their place.
    pub fn splice<I>(&mut self, at: usize, count: usize, values: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.0.splice(at..at + count, values);
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for ListValue {
    fn from(elements: Vec<String>) -> Self {
        Self(elements)
    }
}

impl<S: Into<String>> FromIterator<S> for ListValue {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for ListValue {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ListValue {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A list level as held by a caller: either already decoded or still text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListSlot {
    Cached(ListValue),
    Text(String),
}

impl ListSlot {
    pub fn is_cached(&self) -> bool {
        matches!(self, Self::Cached(_))
    }
}

impl From<ListValue> for ListSlot {
    fn from(value: ListValue) -> Self {
        Self::Cached(value)
    }
}

impl From<String> for ListSlot {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for ListSlot {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}
