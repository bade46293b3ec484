//! Codec for list-valued CSV cells.
//!
//! The clean CSV stores entity lists as printed list literals such as
//! `['Paris', "L'Élysée"]`. Parsing is lenient by contract: a cell that is not
//! a well-formed list literal becomes the empty set instead of failing the
//! load. `None` items are dropped; numbers and booleans keep their printed text.

use std::{iter::Peekable, str::Chars};

use crate::model::Labels;

/// Parse a printed list literal into labels. Malformed input yields an empty set.
pub fn parse_list_literal(cell: &str) -> Labels {
    parse_items(cell.trim())
        .map(Labels::from_iter)
        .unwrap_or_default()
}

/// Print labels back as a list literal, quoting the way the source files do.
pub fn format_list_literal(labels: &Labels) -> String {
    let items: Vec<String> = labels.iter().map(quote).collect();
    format!("[{}]", items.join(", "))
}

fn parse_items(s: &str) -> Option<Vec<String>> {
    let inner = s.strip_prefix('[')?.strip_suffix(']')?;
    let mut chars = inner.chars().peekable();
    let mut items = Vec::new();

    loop {
        skip_whitespace(&mut chars);
        match chars.next() {
            None => break,
            Some(q @ ('\'' | '"')) => items.push(parse_quoted(&mut chars, q)?),
            Some(first) => items.extend(parse_bare(first, &mut chars)?),
        }
        skip_whitespace(&mut chars);
        match chars.next() {
            None => break,
            Some(',') => {},
            Some(_) => return None,
        }
    }

    Some(items)
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.next_if(|c| c.is_whitespace()).is_some() {}
}

/// Unquoted item. `Some(None)` for `None`, `None` when the token is not a literal.
fn parse_bare(first: char, chars: &mut Peekable<Chars<'_>>) -> Option<Option<String>> {
    let mut token = String::from(first);
    while let Some(c) = chars.next_if(|c| *c != ',' && !c.is_whitespace()) {
        token.push(c);
    }
    match token.as_str() {
        "None" => Some(None),
        "True" | "False" => Some(Some(token)),
        t if is_number(t) => Some(Some(token)),
        _ => None,
    }
}

fn is_number(token: &str) -> bool {
    let unsigned = token.strip_prefix(['-', '+']).unwrap_or(token);
    unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        && unsigned
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '-' | '+'))
        && unsigned.parse::<f64>().is_ok()
}

fn parse_quoted(chars: &mut Peekable<Chars<'_>>, quote: char) -> Option<String> {
    let mut out = String::new();
    loop {
        match chars.next()? {
            c if c == quote => return Some(out),
            '\\' => match chars.next()? {
                'n' => out.push('\n'),
                't' => out.push('\t'),
                'r' => out.push('\r'),
                d @ '0'..='7' => out.push(octal_escape(d, chars)?),
                '\\' => out.push('\\'),
                '\'' => out.push('\''),
                '"' => out.push('"'),
                'x' => out.push(hex_escape(chars, 2)?),
                'u' => out.push(hex_escape(chars, 4)?),
                'U' => out.push(hex_escape(chars, 8)?),
                // Line continuation.
                '\n' => {},
                other => {
                    out.push('\\');
                    out.push(other);
                },
            },
            c => out.push(c),
        }
    }
}

fn hex_escape(chars: &mut Peekable<Chars<'_>>, digits: usize) -> Option<char> {
    let hex: String = chars.by_ref().take(digits).collect();
    if hex.chars().count() != digits {
        return None;
    }
    u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32)
}

/// Up to three octal digits, the first already consumed.
fn octal_escape(first: char, chars: &mut Peekable<Chars<'_>>) -> Option<char> {
    let mut value = first.to_digit(8)?;
    for _ in 0..2 {
        let Some(d) = chars.next_if(|c| c.is_digit(8)) else {
            break;
        };
        value = value * 8 + d.to_digit(8)?;
    }
    char::from_u32(value)
}

fn quote(label: &str) -> String {
    let quote = if label.contains('\'') && !label.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(label.len() + 2);
    out.push(quote);
    for c in label.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            },
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
