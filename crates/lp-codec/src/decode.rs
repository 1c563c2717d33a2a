use lp_core::{ListError, ListSlot, ListValue};

pub fn is_list_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\u{0b}' | '\u{0c}')
}

/// Splits canonical list text into its elements.
pub fn decode(text: &str) -> Result<ListValue, ListError> {
    let chars: Vec<char> = text.chars().collect();
    let mut elements = Vec::new();
    let mut pos = 0usize;

    loop {
        while pos < chars.len() && is_list_space(chars[pos]) {
            pos += 1;
        }
        if pos >= chars.len() {
            break;
        }

        let (element, next) = match chars[pos] {
            '{' => read_braced(&chars, pos, text)?,
            '"' => read_quoted(&chars, pos, text)?,
            _ => read_bare(&chars, pos, text)?,
        };
        elements.push(element);
        pos = next;
    }

    Ok(ListValue::from(elements))
}

/// Returns the decoded list held by `slot`, parsing only when it is still text.
pub fn decode_slot(slot: ListSlot) -> Result<ListValue, ListError> {
    match slot {
        ListSlot::Cached(list) => Ok(list),
        ListSlot::Text(text) => decode(&text),
    }
}

fn read_braced(chars: &[char], start: usize, text: &str) -> Result<(String, usize), ListError> {
    let mut depth = 1usize;
    let mut pos = start + 1;
    let mut out = String::new();

    while pos < chars.len() {
        let ch = chars[pos];
        match ch {
            '\\' => {
                // The escaped character is kept verbatim and never counts as a brace.
                out.push(ch);
                if let Some(&escaped) = chars.get(pos + 1) {
                    out.push(escaped);
                }
                pos += 2;
                continue;
            }
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let next = pos + 1;
                    ensure_separated(chars, next, "braces", text)?;
                    return Ok((out, next));
                }
            }
            _ => {}
        }
        out.push(ch);
        pos += 1;
    }

    Err(ListError::parse("unmatched open brace in list", text))
}

fn read_quoted(chars: &[char], start: usize, text: &str) -> Result<(String, usize), ListError> {
    let mut pos = start + 1;
    let mut out = String::new();

    while pos < chars.len() {
        match chars[pos] {
            '\\' => pos = unescape_into(chars, pos, &mut out, text)?,
            '"' => {
                let next = pos + 1;
                ensure_separated(chars, next, "quotes", text)?;
                return Ok((out, next));
            }
            ch => {
                out.push(ch);
                pos += 1;
            }
        }
    }

    Err(ListError::parse("unmatched open quote in list", text))
}

fn read_bare(chars: &[char], start: usize, text: &str) -> Result<(String, usize), ListError> {
    let mut pos = start;
    let mut out = String::new();

    while pos < chars.len() && !is_list_space(chars[pos]) {
        if chars[pos] == '\\' {
            pos = unescape_into(chars, pos, &mut out, text)?;
        } else {
            out.push(chars[pos]);
            pos += 1;
        }
    }

    Ok((out, pos))
}

fn ensure_separated(
    chars: &[char],
    next: usize,
    delimiter: &str,
    text: &str,
) -> Result<(), ListError> {
    if next >= chars.len() || is_list_space(chars[next]) {
        return Ok(());
    }
    let trailing: String = chars[next..]
        .iter()
        .take_while(|ch| !is_list_space(**ch))
        .collect();
    Err(ListError::parse(
        format!(
            "list element in {} followed by \"{}\" instead of space",
            delimiter, trailing
        ),
        text,
    ))
}

/// Decodes the backslash sequence starting at `pos` and returns the position after it.
fn unescape_into(
    chars: &[char],
    pos: usize,
    out: &mut String,
    text: &str,
) -> Result<usize, ListError> {
    let Some(&escaped) = chars.get(pos + 1) else {
        return Err(ListError::parse(
            "dangling backslash at end of list element",
            text,
        ));
    };

    let mut next = pos + 2;
    match escaped {
        'a' => out.push('\u{07}'),
        'b' => out.push('\u{08}'),
        'f' => out.push('\u{0c}'),
        'n' => out.push('\n'),
        'r' => out.push('\r'),
        't' => out.push('\t'),
        'v' => out.push('\u{0b}'),
        '\n' => {
            out.push(' ');
            while next < chars.len() && matches!(chars[next], ' ' | '\t') {
                next += 1;
            }
        }
        'x' => {
            let (value, used) = read_digits(chars, next, 16, 2);
            if used == 0 {
                out.push('x');
            } else {
                out.push(code_point(value));
                next += used;
            }
        }
        'u' => {
            let (value, used) = read_digits(chars, next, 16, 4);
            if used == 0 {
                out.push('u');
            } else {
                out.push(code_point(value));
                next += used;
            }
        }
        '0'..='7' => {
            let (value, used) = read_digits(chars, pos + 1, 8, 3);
            out.push(code_point(value & 0xff));
            next = pos + 1 + used;
        }
        other => out.push(other),
    }

    Ok(next)
}

fn read_digits(chars: &[char], start: usize, radix: u32, max: usize) -> (u32, usize) {
    let mut value = 0u32;
    let mut used = 0usize;
    while used < max {
        let Some(digit) = chars.get(start + used).and_then(|ch| ch.to_digit(radix)) else {
            break;
        };
        value = value * radix + digit;
        used += 1;
    }
    (value, used)
}

fn code_point(value: u32) -> char {
    char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER)
}
