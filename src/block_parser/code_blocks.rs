//! Fenced code blocks.

use crate::syntax::{FenceInfo, NodeData, NodeId};

use super::utils::{indent_width, is_blank};
use super::{BlockRule, Children, Continuation, ParseContext, Reader};

/// Length of the run of `fence_char` at the start of `bytes`.
fn get_fence_count(bytes: &[u8], fence_char: u8) -> usize {
    bytes.iter().take_while(|&&b| b == fence_char).count()
}

/// Parses an opening fence line.
pub(crate) fn try_parse_fence_open(line: &[u8], column: usize) -> Option<FenceInfo> {
    let (indent, pos) = indent_width(line, column);
    if indent > 3 {
        return None;
    }
    let fence_char = *line.get(pos)?;
    if fence_char != b'`' && fence_char != b'~' {
        return None;
    }
    let fence_len = get_fence_count(&line[pos..], fence_char);
    if fence_len < 3 {
        return None;
    }

    let rest = String::from_utf8_lossy(&line[pos + fence_len..]);
    let info = rest.trim();
    // A backtick fence would be read as inline code otherwise.
    if fence_char == b'`' && info.contains('`') {
        return None;
    }
    Some(FenceInfo {
        fence_char,
        fence_len,
        indent,
        info: (!info.is_empty()).then(|| info.to_string()),
    })
}

fn is_closing_fence(line: &[u8], column: usize, fence: &FenceInfo) -> bool {
    let (width, pos) = indent_width(line, column);
    if width >= 4 {
        return false;
    }
    let count = get_fence_count(&line[pos..], fence.fence_char);
    count >= fence.fence_len && is_blank(&line[pos + count..])
}

pub(crate) struct FencedCodeRule;

impl BlockRule for FencedCodeRule {
    fn name(&self) -> &'static str {
        "fenced code"
    }

    fn triggers(&self) -> &'static [u8] {
        b"`~"
    }

    fn open(
        &self,
        _parent: NodeId,
        reader: &mut Reader<'_>,
        pc: &mut ParseContext,
    ) -> Option<(NodeId, Children)> {
        let line = reader.peek_line()?;
        let fence = try_parse_fence_open(&line, reader.line_offset())?;
        log::debug!(
            "Opened {}-fence of {} with info {:?}",
            fence.fence_char as char,
            fence.fence_len,
            fence.info
        );
        reader.advance_to_eol();
        Some((pc.tree.add(NodeData::FencedCodeBlock(fence)), Children::No))
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
        let NodeData::FencedCodeBlock(fence) = pc.tree.data(node) else {
            return Continuation::Close;
        };
        if is_closing_fence(&line, reader.line_offset(), fence) {
            reader.advance_to_eol();
            return Continuation::Close;
        }
        let indent = fence.indent;
        let segment = reader.segment().trim_leading_columns(reader.source(), indent);
        pc.tree.node_mut(node).lines.push(segment);
        reader.advance_to_eol();
        Continuation::Continue(Children::No)
    }

    fn can_interrupt_paragraph(&self) -> bool {
        true
    }
}
