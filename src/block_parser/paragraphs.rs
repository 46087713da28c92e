use crate::syntax::{NodeData, NodeId, Segment};

use super::utils::is_blank;
use super::{BlockRule, Children, Continuation, ParseContext, Reader};

/// Strips leading whitespace from every line and trailing whitespace from
/// the last one.
pub(crate) fn trim_paragraph_lines(lines: &mut [Segment], source: &[u8]) {
    for line in lines.iter_mut() {
        *line = line.trim_left_space(source);
    }
    if let Some(last) = lines.last_mut() {
        *last = last.trim_right_space(source);
    }
}

pub(crate) struct ParagraphRule;

impl BlockRule for ParagraphRule {
    fn name(&self) -> &'static str {
        "paragraph"
    }

    fn triggers(&self) -> &'static [u8] {
        &[]
    }

    fn open(
        &self,
        _parent: NodeId,
        reader: &mut Reader<'_>,
        pc: &mut ParseContext,
    ) -> Option<(NodeId, Children)> {
        let segment = reader.segment().trim_left_space(reader.source());
        if segment.is_empty() {
            return None;
        }
        let node = pc.tree.add(NodeData::Paragraph);
        pc.tree.node_mut(node).lines.push(segment);
        reader.advance(segment.len() - 1);
        Some((node, Children::No))
    }

    fn continue_block(
        &self,
        node: NodeId,
        reader: &mut Reader<'_>,
        pc: &mut ParseContext,
    ) -> Continuation {
        let Some(line) = reader.peek_line() else {
            return Continuation::Close;
        };
        if is_blank(&line) {
            return Continuation::Close;
        }
        let segment = reader.segment();
        log::trace!("Paragraph continues with {:?}", String::from_utf8_lossy(&line));
        pc.tree.node_mut(node).lines.push(segment);
        reader.advance(segment.len().saturating_sub(1));
        Continuation::Continue(Children::No)
    }

    fn close(&self, node: NodeId, reader: &Reader<'_>, pc: &mut ParseContext) {
        let source = reader.source();
        trim_paragraph_lines(&mut pc.tree.node_mut(node).lines, source);
        if pc.tree.node(node).lines.is_empty() {
            pc.tree.detach(node);
        }
    }

    fn can_interrupt_paragraph(&self) -> bool {
        false
    }
}
