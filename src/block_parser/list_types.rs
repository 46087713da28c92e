//! Ordinal values and list types for fancy list markers.

use crate::syntax::ListTypeTag;

/// Largest value a token has to denote to be read as a roman numeral.
const MAX_ROMAN: u32 = 4;

/// Bijective base-26 value of a letter token: `a` is 1, `z` is 26, `aa` is
/// 27. Case-insensitive. Returns 0 for an empty token or any non-letter.
pub fn alpha_value(token: &[u8]) -> u32 {
    if token.is_empty() {
        return 0;
    }
    let mut value: u32 = 0;
    for &b in token {
        if !b.is_ascii_alphabetic() {
            return 0;
        }
        let digit = u32::from(b.to_ascii_lowercase() - b'a' + 1);
        value = value.saturating_mul(26).saturating_add(digit);
    }
    value
}

/// Value of a roman numeral token that starts with `i`/`I` and denotes at
/// most 4. Everything else (`v`, `ix`, `iiii`, `il`) is not a roman marker.
pub fn roman_value(token: &[u8]) -> Option<u32> {
    let first = token.first()?;
    if first.to_ascii_lowercase() != b'i' {
        return None;
    }
    let upper: Vec<u8> = token.iter().map(|b| b.to_ascii_uppercase()).collect();
    let value = decode_roman(&upper)?;
    (value <= MAX_ROMAN).then_some(value)
}

/// Strict decoding of an uppercase roman numeral. Only the canonical
/// spelling of a value is accepted.
fn decode_roman(token: &[u8]) -> Option<u32> {
    fn digit(b: u8) -> Option<u32> {
        match b {
            b'I' => Some(1),
            b'V' => Some(5),
            b'X' => Some(10),
            b'L' => Some(50),
            b'C' => Some(100),
            b'D' => Some(500),
            b'M' => Some(1000),
            _ => None,
        }
    }

    let mut total = 0;
    let mut i = 0;
    while i < token.len() {
        let current = digit(token[i])?;
        match token.get(i + 1).map(|&b| digit(b)) {
            Some(Some(next)) if next > current => {
                total += next - current;
                i += 2;
            }
            Some(None) => return None,
            _ => {
                total += current;
                i += 1;
            }
        }
    }
    if total == 0 || encode_roman(total).as_bytes() != token {
        return None;
    }
    Some(total)
}

fn encode_roman(mut value: u32) -> String {
    const TABLE: [(u32, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];
    let mut out = String::new();
    for (n, glyphs) in TABLE {
        while value >= n {
            out.push_str(glyphs);
            value -= n;
        }
    }
    out
}

/// Type and ordinal of a fancy (non-digit) marker token.
///
/// `#` yields `(Num, 1)`; callers treat it as "continue whatever type the
/// list already has". Roman tokens win over alphabetic ones, so `ii` is 2
/// and `vi` is 581. Returns `None` for a token with no numeric value.
pub fn type_of_fancy_marker(token: &[u8]) -> Option<(ListTypeTag, u32)> {
    if token == b"#" {
        return Some((ListTypeTag::Num, 1));
    }
    let first = *token.first()?;
    if let Some(value) = roman_value(token) {
        let tag = if first.is_ascii_lowercase() {
            ListTypeTag::LcRoman
        } else {
            ListTypeTag::UcRoman
        };
        return Some((tag, value));
    }
    let value = alpha_value(token);
    if value == 0 {
        return None;
    }
    let tag = if first.is_ascii_lowercase() {
        ListTypeTag::LcAlpha
    } else {
        ListTypeTag::UcAlpha
    };
    Some((tag, value))
}

/// Type a marker token implies when it shows up inside a list of type
/// `current`.
///
/// A lone `i`/`I` is ambiguous: it continues an alphabetic list of the same
/// case (`g. h. i.`) and reads as a roman one everywhere else.
pub fn continuation_type(token: &[u8], current: ListTypeTag) -> ListTypeTag {
    match (token, current) {
        (b"i", ListTypeTag::LcAlpha) | (b"I", ListTypeTag::UcAlpha) => current,
        (b"i", _) => ListTypeTag::LcRoman,
        (b"I", _) => ListTypeTag::UcRoman,
        _ if token.iter().all(u8::is_ascii_digit) => ListTypeTag::Num,
        _ => type_of_fancy_marker(token).map_or(ListTypeTag::Num, |(tag, _)| tag),
    }
}
