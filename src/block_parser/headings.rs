//! ATX and setext headings.

use crate::syntax::{NodeData, NodeId, Segment, SyntaxKind};

use super::paragraphs::trim_paragraph_lines;
use super::utils::{indent_width, is_blank, leading_spaces, trim_left_space_len, trim_right_space_len};
use super::{BlockRule, Children, Continuation, ParseContext, Reader};

/// Level and end of the opening `#` run of an ATX heading line.
pub(crate) fn try_parse_atx_heading(line: &[u8]) -> Option<(u8, usize)> {
    let (width, start) = indent_width(line, 0);
    if width > 3 {
        return None;
    }
    let hash_count = line[start..].iter().take_while(|&&b| b == b'#').count();
    if hash_count == 0 || hash_count > 6 {
        return None;
    }
    let end = start + hash_count;
    match line.get(end) {
        None | Some(b' ' | b'\t' | b'\n' | b'\r') => Some((hash_count as u8, end)),
        Some(_) => None,
    }
}

/// Content range of an ATX heading, without the optional closing sequence.
fn atx_content(line: &[u8], hashes_end: usize) -> (usize, usize) {
    let start = hashes_end + trim_left_space_len(&line[hashes_end..]);
    let mut stop = line.len() - trim_right_space_len(line);
    if stop <= start {
        return (start, start);
    }
    let mut closing = stop;
    while closing > start && line[closing - 1] == b'#' {
        closing -= 1;
    }
    if closing == start {
        stop = start;
    } else if closing < stop && matches!(line[closing - 1], b' ' | b'\t') {
        stop = closing - trim_right_space_len(&line[start..closing]);
    }
    (start, stop)
}

/// The underline character if `line` is a setext underline.
fn setext_bar(line: &[u8]) -> Option<u8> {
    let start = leading_spaces(line);
    if start > 3 {
        return None;
    }
    let c = *line.get(start)?;
    if c != b'=' && c != b'-' {
        return None;
    }
    let run = line[start..].iter().take_while(|&&b| b == c).count();
    is_blank(&line[start + run..]).then_some(c)
}

pub(crate) struct AtxHeadingRule;

impl BlockRule for AtxHeadingRule {
    fn name(&self) -> &'static str {
        "atx heading"
    }

    fn triggers(&self) -> &'static [u8] {
        b"#"
    }

    fn open(
        &self,
        _parent: NodeId,
        reader: &mut Reader<'_>,
        pc: &mut ParseContext,
    ) -> Option<(NodeId, Children)> {
        let line = reader.peek_line()?;
        let (level, hashes_end) = try_parse_atx_heading(&line)?;
        let (start, stop) = atx_content(&line, hashes_end);
        let segment = reader.segment();

        let node = pc.tree.add(NodeData::Heading { level });
        if start < stop {
            // `start` lies past the padding, which is all spaces.
            let base = segment.start;
            let padding = segment.padding;
            pc.tree
                .node_mut(node)
                .lines
                .push(Segment::new(base + start - padding, base + stop - padding));
        }
        reader.advance_to_eol();
        Some((node, Children::No))
    }

    fn continue_block(
        &self,
        _node: NodeId,
        _reader: &mut Reader<'_>,
        _pc: &mut ParseContext,
    ) -> Continuation {
        Continuation::Close
    }

    fn can_interrupt_paragraph(&self) -> bool {
        true
    }
}

/// Turns the paragraph just above an underline into a heading.
pub(crate) struct SetextHeadingRule;

impl BlockRule for SetextHeadingRule {
    fn name(&self) -> &'static str {
        "setext heading"
    }

    fn triggers(&self) -> &'static [u8] {
        b"-="
    }

    fn open(
        &self,
        parent: NodeId,
        reader: &mut Reader<'_>,
        pc: &mut ParseContext,
    ) -> Option<(NodeId, Children)> {
        let paragraph = pc.last_opened_node()?;
        if pc.tree.kind(paragraph) != SyntaxKind::PARAGRAPH
            || pc.tree.parent(paragraph) != Some(parent)
        {
            return None;
        }
        let line = reader.peek_line()?;
        let level = match setext_bar(&line)? {
            b'=' => 1,
            _ => 2,
        };

        let mut lines = std::mem::take(&mut pc.tree.node_mut(paragraph).lines);
        trim_paragraph_lines(&mut lines, reader.source());
        let node = pc.tree.add(NodeData::Heading { level });
        pc.tree.node_mut(node).lines = lines;
        pc.tree.detach(paragraph);
        reader.advance_to_eol();
        Some((node, Children::No))
    }

    fn continue_block(
        &self,
        _node: NodeId,
        _reader: &mut Reader<'_>,
        _pc: &mut ParseContext,
    ) -> Continuation {
        Continuation::Close
    }

    fn can_interrupt_paragraph(&self) -> bool {
        true
    }
}
