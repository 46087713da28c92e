//! Indented code blocks.
//!
//! A run of lines indented four columns or more is verbatim text with the
//! first four columns removed. Blank lines inside the run need no
//! indentation; trailing blank lines are not part of the block.

use crate::syntax::{NodeData, NodeId};

use super::utils::{indent_position, is_blank};
use super::{BlockRule, Children, Continuation, ParseContext, Reader};

/// Consumes four columns of indentation, leaving a split tab as padding.
fn consume_code_indent(reader: &mut Reader<'_>, line: &[u8]) -> bool {
    match indent_position(line, reader.line_offset(), 4) {
        Some((pos, padding)) => {
            reader.advance_and_set_padding(pos, padding);
            true
        }
        None => false,
    }
}

pub(crate) struct IndentedCodeRule;

impl BlockRule for IndentedCodeRule {
    fn name(&self) -> &'static str {
        "indented code"
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
        let line = reader.peek_line()?;
        if is_blank(&line) || !consume_code_indent(reader, &line) {
            return None;
        }
        let node = pc.tree.add(NodeData::CodeBlock);
        pc.tree.node_mut(node).lines.push(reader.segment());
        reader.advance_to_eol();
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
            let segment = reader.segment().trim_leading_columns(reader.source(), 4);
            pc.tree.node_mut(node).lines.push(segment);
            return Continuation::Continue(Children::No);
        }
        if !consume_code_indent(reader, &line) {
            return Continuation::Close;
        }
        pc.tree.node_mut(node).lines.push(reader.segment());
        reader.advance_to_eol();
        Continuation::Continue(Children::No)
    }

    fn close(&self, node: NodeId, reader: &Reader<'_>, pc: &mut ParseContext) {
        let source = reader.source();
        let lines = &mut pc.tree.node_mut(node).lines;
        while lines.last().is_some_and(|line| is_blank(&line.value(source))) {
            lines.pop();
        }
    }

    fn can_interrupt_paragraph(&self) -> bool {
        false
    }

    fn can_accept_indented_line(&self) -> bool {
        true
    }
}
