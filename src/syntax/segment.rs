use std::borrow::Cow;

/// A byte range of the source, plus virtual leading spaces.
///
/// `padding` counts columns left over when the reader advances into the
/// middle of a tab: the tab is consumed but its remaining width still has to
/// show up as spaces in the block content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Segment {
    pub start: usize,
    pub stop: usize,
    pub padding: usize,
}

impl Segment {
    pub fn new(start: usize, stop: usize) -> Self {
        Self {
            start,
            stop,
            padding: 0,
        }
    }

    pub fn with_padding(start: usize, stop: usize, padding: usize) -> Self {
        Self {
            start,
            stop,
            padding,
        }
    }

    /// Length in bytes including padding.
    pub fn len(&self) -> usize {
        self.stop.saturating_sub(self.start) + self.padding
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn value<'a>(&self, source: &'a [u8]) -> Cow<'a, [u8]> {
        let bytes = &source[self.start..self.stop];
        if self.padding == 0 {
            Cow::Borrowed(bytes)
        } else {
            let mut owned = vec![b' '; self.padding];
            owned.extend_from_slice(bytes);
            Cow::Owned(owned)
        }
    }

    /// Drops leading whitespace. Padding is whitespace too, so it goes.
    pub fn trim_left_space(&self, source: &[u8]) -> Segment {
        let n = source[self.start..self.stop]
            .iter()
            .take_while(|b| b.is_ascii_whitespace())
            .count();
        Segment::new(self.start + n, self.stop)
    }

    pub fn trim_right_space(&self, source: &[u8]) -> Segment {
        let n = source[self.start..self.stop]
            .iter()
            .rev()
            .take_while(|b| b.is_ascii_whitespace())
            .count();
        Segment::with_padding(self.start, self.stop - n, self.padding)
    }

    /// Drops up to `n` leading columns of padding and spaces.
    pub fn trim_leading_columns(&self, source: &[u8], n: usize) -> Segment {
        let mut seg = *self;
        let mut left = n;
        let from_padding = seg.padding.min(left);
        seg.padding -= from_padding;
        left -= from_padding;
        while left > 0 && seg.start < seg.stop && source[seg.start] == b' ' {
            seg.start += 1;
            left -= 1;
        }
        seg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_prepends_padding() {
        let src = b"\tfoo\n";
        let seg = Segment::with_padding(1, 5, 2);
        assert_eq!(seg.value(src).as_ref(), b"  foo\n");
        assert_eq!(seg.len(), 6);
    }

    #[test]
    fn trims_whitespace_on_both_sides() {
        let src = b"   foo  \n";
        let seg = Segment::new(0, src.len());
        assert_eq!(seg.trim_left_space(src), Segment::new(3, 9));
        assert_eq!(seg.trim_right_space(src), Segment::new(0, 6));
    }

    #[test]
    fn trim_leading_columns_stops_at_text() {
        let src = b"  x\n";
        let seg = Segment::with_padding(0, 4, 1);
        let trimmed = seg.trim_leading_columns(src, 4);
        assert_eq!(trimmed, Segment::new(2, 4));
    }
}
