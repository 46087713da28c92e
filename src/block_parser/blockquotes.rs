use crate::syntax::{NodeData, NodeId};

use super::utils::{indent_width, tab_width};
use super::{BlockRule, Children, Continuation, ParseContext, Reader};

/// Consumes a `>` marker (up to three columns of indentation before it) and
/// one column of the whitespace after it.
fn strip_blockquote_marker(reader: &mut Reader<'_>) -> bool {
    let Some(line) = reader.peek_line() else {
        return false;
    };
    let (width, pos) = indent_width(&line, reader.line_offset());
    if width > 3 || line.get(pos) != Some(&b'>') {
        return false;
    }
    let pos = pos + 1;
    reader.advance(pos);
    match line.get(pos) {
        Some(b' ') => reader.advance(1),
        Some(b'\t') => {
            // The tab counts as the optional space; the rest stays as padding.
            let padding = tab_width(reader.line_offset()) - 1;
            reader.advance_and_set_padding(1, padding);
        }
        _ => {}
    }
    true
}

pub(crate) struct BlockQuoteRule;

impl BlockRule for BlockQuoteRule {
    fn name(&self) -> &'static str {
        "blockquote"
    }

    fn triggers(&self) -> &'static [u8] {
        b">"
    }

    fn open(
        &self,
        _parent: NodeId,
        reader: &mut Reader<'_>,
        pc: &mut ParseContext,
    ) -> Option<(NodeId, Children)> {
        strip_blockquote_marker(reader).then(|| (pc.tree.add(NodeData::BlockQuote), Children::Has))
    }

    fn continue_block(
        &self,
        _node: NodeId,
        reader: &mut Reader<'_>,
        _pc: &mut ParseContext,
    ) -> Continuation {
        if strip_blockquote_marker(reader) {
            Continuation::Continue(Children::Has)
        } else {
            Continuation::Close
        }
    }

    fn can_interrupt_paragraph(&self) -> bool {
        true
    }
}
