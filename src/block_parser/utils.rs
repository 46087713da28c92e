//! Shared utilities for block parsing.

/// Columns a tab advances from `column`, with tab stops every 4 columns.
pub(crate) fn tab_width(column: usize) -> usize {
    4 - column % 4
}

/// Width in columns and length in bytes of the leading whitespace of `bytes`,
/// where `bytes` starts at `column`.
pub(crate) fn indent_width(bytes: &[u8], column: usize) -> (usize, usize) {
    let mut width = 0;
    let mut pos = 0;
    for &b in bytes {
        match b {
            b' ' => width += 1,
            b'\t' => width += tab_width(column + width),
            _ => break,
        }
        pos += 1;
    }
    (width, pos)
}

/// Byte position at which `width` columns of indentation have been consumed,
/// and how many columns of a split tab are left over as padding. `None` if
/// the line has less indentation than that.
pub(crate) fn indent_position(bytes: &[u8], column: usize, width: usize) -> Option<(usize, usize)> {
    if width == 0 {
        return Some((0, 0));
    }
    let mut w = 0;
    let mut i = 0;
    while i < bytes.len() && w < width {
        match bytes[i] {
            b'\t' => w += tab_width(column + w),
            b' ' => w += 1,
            _ => break,
        }
        i += 1;
    }
    (w >= width).then(|| (i, w - width))
}

pub(crate) fn is_blank(line: &[u8]) -> bool {
    line.iter().all(|b| b.is_ascii_whitespace())
}

pub(crate) fn trim_left_space_len(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_whitespace()).count()
}

pub(crate) fn trim_right_space_len(bytes: &[u8]) -> usize {
    bytes.iter().rev().take_while(|b| b.is_ascii_whitespace()).count()
}

/// Count of leading ASCII spaces (tabs excluded).
pub(crate) fn leading_spaces(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|&&b| b == b' ').count()
}
