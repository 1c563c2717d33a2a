use std::borrow::Cow;

use lp_core::{ListSlot, ListValue};

use crate::decode::is_list_space;

/// Joins elements into canonical list text, quoting each one as needed.
pub fn encode(list: &ListValue) -> String {
    let mut out = String::new();
    for (index, element) in list.iter().enumerate() {
        if index > 0 {
            out.push(' ');
        }
        out.push_str(&encode_element(element));
    }
    out
}

/// Canonical text of `slot`; cached lists are re-encoded, text is borrowed as is.
pub fn slot_text(slot: &ListSlot) -> Cow<'_, str> {
    match slot {
        ListSlot::Cached(list) => Cow::Owned(encode(list)),
        ListSlot::Text(text) => Cow::Borrowed(text.as_str()),
    }
}

pub fn encode_element(element: &str) -> Cow<'_, str> {
    if element.is_empty() {
        return Cow::Borrowed("{}");
    }
    if !element.chars().any(is_special) {
        return Cow::Borrowed(element);
    }
    if can_brace(element) {
        return Cow::Owned(format!("{{{}}}", element));
    }
    Cow::Owned(escape(element))
}

fn is_special(ch: char) -> bool {
    is_list_space(ch) || matches!(ch, '{' | '}' | '\\' | '"' | '[' | ']' | '$' | ';')
}

/// Braces can carry the element verbatim only when they stay balanced under the
/// backslash rule the decoder applies inside braces.
fn can_brace(element: &str) -> bool {
    let mut depth = 0usize;
    let mut chars = element.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                if chars.next().is_none() {
                    return false;
                }
            }
            '{' => depth += 1,
            '}' => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    depth == 0
}

fn escape(element: &str) -> String {
    let mut out = String::with_capacity(element.len() * 2);
    for ch in element.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{0b}' => out.push_str("\\v"),
            '\u{0c}' => out.push_str("\\f"),
            ' ' | '{' | '}' | '\\' | '"' | '[' | ']' | '$' | ';' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}
