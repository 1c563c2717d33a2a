use std::sync::OnceLock;

use lp_core::ListError;
use regex::Regex;

fn index_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?:(end)|([+-]?[0-9]+))(?:([+-])([0-9]+))?$")
            .expect("index pattern should compile")
    })
}

/// Resolves an index token against a list of `length` elements.
///
/// The result may lie outside the list; callers check it with [`IndexBound`]
/// because existing elements and insertion points have different valid ranges.
pub fn resolve_index(token: &str, length: usize) -> Result<i64, ListError> {
    let captures = index_pattern()
        .captures(token)
        .ok_or_else(|| ListError::invalid_index(token))?;

    let base = if captures.get(1).is_some() {
        i64::try_from(length)
            .ok()
            .and_then(|length| length.checked_sub(1))
    } else {
        captures.get(2).and_then(|m| m.as_str().parse::<i64>().ok())
    }
    .ok_or_else(|| ListError::invalid_index(token))?;

    let Some(op) = captures.get(3) else {
        return Ok(base);
    };
    let offset = captures
        .get(4)
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .ok_or_else(|| ListError::invalid_index(token))?;

    match op.as_str() {
        "+" => base.checked_add(offset),
        _ => base.checked_sub(offset),
    }
    .ok_or_else(|| ListError::invalid_index(token))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexBound {
    /// `0 <= p < len`
    Element,
    /// `0 <= p <= len`
    Insertion,
}

impl IndexBound {
    pub fn check(self, position: i64, length: usize) -> Option<usize> {
        let position = usize::try_from(position).ok()?;
        let valid = match self {
            Self::Element => position < length,
            Self::Insertion => position <= length,
        };
        valid.then_some(position)
    }
}
