//! List marker scanning.
//!
//! Recognizes bullets (`-`, `*`, `+`), numeric markers (`1.`, `10)`),
//! alphabetic and roman markers (`a.`, `B)`, `iv.`) and the `#.`
//! continuation marker at the start of a line. Positions are byte offsets
//! into the line as handed out by the reader, so they can be fed straight
//! back into `Reader::advance`.

use super::utils::indent_width;

const MAX_DIGITS: usize = 9;
const MAX_LETTERS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Bullet,
    /// Digits followed by `.` or `)`.
    OrderedPlain,
    /// Letters or `#` followed by `.` or `)`.
    OrderedFancy,
    None,
}

impl MarkerKind {
    pub fn is_ordered(self) -> bool {
        matches!(self, MarkerKind::OrderedPlain | MarkerKind::OrderedFancy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanResult {
    /// Leading spaces before the marker.
    pub indent: usize,
    pub marker_start: usize,
    /// End of the marker token, delimiter excluded.
    pub marker_end: usize,
    /// Just past the delimiter (or the bullet).
    pub delimiter_end: usize,
    /// Rest of the line after the marker, trailing newline excluded.
    pub content: Option<(usize, usize)>,
    pub kind: MarkerKind,
}

impl ScanResult {
    fn none(indent: usize) -> Self {
        Self {
            indent,
            marker_start: indent,
            marker_end: indent,
            delimiter_end: indent,
            content: None,
            kind: MarkerKind::None,
        }
    }

    pub fn is_match(&self) -> bool {
        self.kind != MarkerKind::None
    }

    /// The marker token without its delimiter: `12`, `iv`, `#`, `-`.
    pub fn token<'l>(&self, line: &'l [u8]) -> &'l [u8] {
        &line[self.marker_start..self.marker_end]
    }

    /// Bullet character for bullets, the delimiter for ordered markers.
    pub fn list_char(&self, line: &[u8]) -> u8 {
        line[self.delimiter_end - 1]
    }

    /// True if there is no content after the marker, or only whitespace.
    pub fn content_is_blank(&self, line: &[u8]) -> bool {
        match self.content {
            None => true,
            Some((start, end)) => line[start..end].iter().all(|b| b.is_ascii_whitespace()),
        }
    }
}

fn is_delimiter(b: u8) -> bool {
    b == b'.' || b == b')'
}

/// Scans `line` for a list marker.
///
/// With `fancy` off only bullets and digit markers are recognized.
pub fn scan_list_item(line: &[u8], fancy: bool) -> ScanResult {
    let len = line.len();
    let mut i = 0;
    while i < len && line[i] == b' ' {
        i += 1;
    }
    if i > 3 {
        return ScanResult::none(i);
    }
    let indent = i;
    let mut result = ScanResult::none(indent);

    if i >= len {
        return result;
    }

    match line[i] {
        b'-' | b'*' | b'+' => {
            i += 1;
            result.marker_end = i;
            result.kind = MarkerKind::Bullet;
        }
        b'#' if fancy => {
            if i + 1 < len && is_delimiter(line[i + 1]) {
                result.marker_end = i + 1;
                i += 2;
                result.kind = MarkerKind::OrderedFancy;
            } else {
                return ScanResult::none(indent);
            }
        }
        b'0'..=b'9' => {
            let digits = line[i..].iter().take_while(|b| b.is_ascii_digit()).count();
            if digits > MAX_DIGITS {
                // Too long for a number, and digits are not letters either.
                return ScanResult::none(indent);
            }
            i += digits;
            if i < len && is_delimiter(line[i]) {
                result.marker_end = i;
                i += 1;
                result.kind = MarkerKind::OrderedPlain;
            } else {
                return ScanResult::none(indent);
            }
        }
        b if fancy && b.is_ascii_alphabetic() => {
            let letters = line[i..]
                .iter()
                .take(MAX_LETTERS)
                .take_while(|b| b.is_ascii_alphabetic())
                .count();
            i += letters;
            if i < len && is_delimiter(line[i]) {
                result.marker_end = i;
                i += 1;
                result.kind = MarkerKind::OrderedFancy;
            } else {
                return ScanResult::none(indent);
            }
        }
        _ => return ScanResult::none(indent),
    }
    result.delimiter_end = i;

    if i < len && line[i] != b'\n' {
        let (width, _) = indent_width(&line[i..], 0);
        if width == 0 {
            return ScanResult::none(indent);
        }
    }

    if i < len {
        let mut end = len;
        if line[end - 1] == b'\n' && line[i] != b'\n' {
            end -= 1;
        }
        result.content = Some((i, end));
    }
    result
}

/// Like [`scan_list_item`], but in strict mode a marker indented by four or
/// more spaces does not count.
pub fn matches_list_item(line: &[u8], strict: bool, fancy: bool) -> ScanResult {
    let result = scan_list_item(line, fancy);
    if result.is_match() && (!strict || result.indent < 4) {
        result
    } else {
        ScanResult::none(result.indent)
    }
}
