//! Thematic breaks (`***`, `---`, `___`).

use crate::syntax::{NodeData, NodeId};

use super::utils::leading_spaces;
use super::{BlockRule, Children, Continuation, ParseContext, Reader};

/// Whether `line` is a thematic break: up to three spaces of indentation,
/// then three or more of one of `-`, `*` or `_`, optionally separated by
/// spaces or tabs.
pub(crate) fn is_thematic_break(line: &[u8]) -> bool {
    let start = leading_spaces(line);
    if start > 3 {
        return false;
    }
    let Some(&marker) = line.get(start) else {
        return false;
    };
    if !matches!(marker, b'-' | b'*' | b'_') {
        return false;
    }
    let mut count = 0;
    for &b in &line[start..] {
        match b {
            b if b == marker => count += 1,
            b' ' | b'\t' | b'\n' | b'\r' => {}
            _ => return false,
        }
    }
    count >= 3
}

pub(crate) struct ThematicBreakRule;

impl BlockRule for ThematicBreakRule {
    fn name(&self) -> &'static str {
        "thematic break"
    }

    fn triggers(&self) -> &'static [u8] {
        b"-*_"
    }

    fn open(
        &self,
        _parent: NodeId,
        reader: &mut Reader<'_>,
        pc: &mut ParseContext,
    ) -> Option<(NodeId, Children)> {
        let line = reader.peek_line()?;
        if !is_thematic_break(&line) {
            return None;
        }
        reader.advance_to_eol();
        Some((pc.tree.add(NodeData::ThematicBreak), Children::No))
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
