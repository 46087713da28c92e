//! Line cursor over the document source.
//!
//! The reader hands out the remainder of the current line. Container rules
//! consume their markers with [`Reader::advance`] so that the rules of the
//! blocks they contain only see what is left. Tabs are expanded lazily: when
//! a rule consumes part of a tab, the leftover columns are kept as padding
//! and reappear as spaces at the front of the next peek.

use std::borrow::Cow;

use crate::syntax::Segment;

use super::utils::{is_blank, tab_width};

pub struct Reader<'a> {
    source: &'a [u8],
    line: usize,
    head: usize,
    pos: Segment,
}

impl<'a> Reader<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        let mut reader = Self {
            source,
            line: 0,
            head: 0,
            pos: Segment::default(),
        };
        reader.pos.stop = reader.line_end(0);
        reader
    }

    pub fn source(&self) -> &'a [u8] {
        self.source
    }

    /// Zero-based number of the current line.
    pub fn line_number(&self) -> usize {
        self.line
    }

    /// The unread part of the current line.
    pub fn segment(&self) -> Segment {
        self.pos
    }

    /// The unread part of the current line, padding included, or `None`
    /// past the end of the source.
    pub fn peek_line(&self) -> Option<Cow<'a, [u8]>> {
        if self.pos.start < self.source.len() {
            Some(self.pos.value(self.source))
        } else {
            None
        }
    }

    /// Column of the read position within the current line.
    pub fn line_offset(&self) -> usize {
        let mut column = 0;
        for &b in &self.source[self.head..self.pos.start] {
            if b == b'\t' {
                column += tab_width(column);
            } else {
                column += 1;
            }
        }
        column.saturating_sub(self.pos.padding)
    }

    /// Consumes `n` bytes (padding first). Crossing a newline moves to the
    /// next line.
    pub fn advance(&mut self, n: usize) {
        if n < self.pos.len() && self.pos.padding == 0 {
            self.pos.start += n;
            return;
        }
        let mut n = n;
        while n > 0 && self.pos.start < self.source.len() {
            n -= 1;
            if self.pos.padding != 0 {
                self.pos.padding -= 1;
                continue;
            }
            if self.source[self.pos.start] == b'\n' {
                self.advance_line();
                continue;
            }
            self.pos.start += 1;
        }
    }

    pub fn advance_and_set_padding(&mut self, n: usize, padding: usize) {
        self.advance(n);
        if padding > self.pos.padding {
            self.pos.padding = padding;
        }
    }

    pub fn advance_line(&mut self) {
        self.pos.start = self.pos.stop;
        self.head = self.pos.start;
        self.pos.stop = self.line_end(self.pos.start);
        self.pos.padding = 0;
        self.line += 1;
    }

    /// Moves to the newline of the current line, or to its end if it has none.
    pub fn advance_to_eol(&mut self) {
        if self.pos.start >= self.source.len() {
            return;
        }
        self.pos.start = match self.source[self.pos.start..self.pos.stop]
            .iter()
            .position(|&b| b == b'\n')
        {
            Some(i) => self.pos.start + i,
            None => self.pos.stop,
        };
        self.pos.padding = 0;
    }

    /// Skips blank lines and returns how many were skipped, or `None` when
    /// the source ran out first.
    pub fn skip_blank_lines(&mut self) -> Option<usize> {
        let mut lines = 0;
        loop {
            let line = self.peek_line()?;
            if !is_blank(&line) {
                return Some(lines);
            }
            lines += 1;
            self.advance_line();
        }
    }

    fn line_end(&self, start: usize) -> usize {
        match self.source[start.min(self.source.len())..]
            .iter()
            .position(|&b| b == b'\n')
        {
            Some(i) => start + i + 1,
            None => self.source.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peeks_and_advances_lines() {
        let mut reader = Reader::new(b"one\ntwo");
        assert_eq!(reader.peek_line().as_deref(), Some(&b"one\n"[..]));
        reader.advance_line();
        assert_eq!(reader.line_number(), 1);
        assert_eq!(reader.peek_line().as_deref(), Some(&b"two"[..]));
        reader.advance_line();
        assert!(reader.peek_line().is_none());
    }

    #[test]
    fn advance_within_line_tracks_offset() {
        let mut reader = Reader::new(b"- foo\n");
        reader.advance(2);
        assert_eq!(reader.line_offset(), 2);
        assert_eq!(reader.peek_line().as_deref(), Some(&b"foo\n"[..]));
    }

    #[test]
    fn padding_surfaces_as_spaces() {
        let mut reader = Reader::new(b"-\tfoo\n");
        // Consume the marker and one column of the tab.
        reader.advance_and_set_padding(2, 2);
        assert_eq!(reader.peek_line().as_deref(), Some(&b"  foo\n"[..]));
        assert_eq!(reader.line_offset(), 2);
    }

    #[test]
    fn advance_to_eol_stops_at_newline() {
        let mut reader = Reader::new(b"abc\ndef\n");
        reader.advance_to_eol();
        assert_eq!(reader.peek_line().as_deref(), Some(&b"\n"[..]));
        assert_eq!(reader.line_number(), 0);
    }

    #[test]
    fn skip_blank_lines_counts() {
        let mut reader = Reader::new(b"\n  \nx\n");
        assert_eq!(reader.skip_blank_lines(), Some(2));
        assert_eq!(reader.line_number(), 2);
        reader.advance_line();
        assert_eq!(reader.skip_blank_lines(), None);
    }
}
