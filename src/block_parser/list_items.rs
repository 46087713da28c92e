//! List items.

use crate::syntax::{AttrValue, ListItem, NodeData, NodeId};

use super::lists::{LIST_TRIGGERS, last_offset};
use super::marker_utils::{ScanResult, matches_list_item};
use super::utils::{indent_position, indent_width, is_blank};
use super::{BlockRule, Children, Continuation, ParseContext, Reader};

/// Columns between the marker and the item content: the width of the
/// whitespace after the marker, or 1 when the item starts empty or with
/// indented code.
pub(crate) fn content_offset(line: &[u8], scan: &ScanResult) -> usize {
    match scan.content {
        Some((start, _)) if !is_blank(&line[start..]) => {
            let (width, _) = indent_width(&line[start..], start);
            if width > 4 { 1 } else { width }
        }
        _ => 1,
    }
}

pub(crate) struct ListItemRule;

impl BlockRule for ListItemRule {
    fn name(&self) -> &'static str {
        "list item"
    }

    fn triggers(&self) -> &'static [u8] {
        LIST_TRIGGERS
    }

    fn open(
        &self,
        parent: NodeId,
        reader: &mut Reader<'_>,
        pc: &mut ParseContext,
    ) -> Option<(NodeId, Children)> {
        let start = pc.tree.list(parent)?.start;
        let offset = last_offset(&pc.tree, parent);
        let line = reader.peek_line()?;
        let scan = matches_list_item(&line, false, pc.fancy_lists);
        if !scan.is_match() || scan.indent > offset + 3 {
            return None;
        }

        pc.empty_list_item_with_blank_lines = false;

        let item_offset = content_offset(&line, &scan);
        let node = pc.tree.add(NodeData::ListItem(ListItem::new(
            scan.delimiter_end + item_offset,
        )));
        if scan.kind.is_ordered() {
            let value = start + pc.tree.child_count(parent) as i64;
            pc.tree.set_attribute(node, "value", AttrValue::Number(value));
        }

        let content_start = match scan.content {
            Some((content_start, _)) if !scan.content_is_blank(&line) => content_start,
            _ => return Some((node, Children::No)),
        };
        if let Some((pos, padding)) =
            indent_position(&line[content_start..], content_start, item_offset)
        {
            reader.advance_and_set_padding(scan.delimiter_end + pos, padding);
        }
        Some((node, Children::Has))
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
            reader.advance_to_eol();
            return Continuation::Continue(Children::Has);
        }

        let offset = pc
            .tree
            .parent(node)
            .map_or(0, |list| last_offset(&pc.tree, list));
        let is_empty = !pc.tree.has_children(node) && pc.empty_list_item_with_blank_lines;
        let (indent, _) = indent_width(&line, reader.line_offset());

        if (is_empty || indent < offset) && indent < 4 {
            if matches_list_item(&line, true, pc.fancy_lists).is_match() {
                // The list rule lets the sibling item through instead of
                // opening a new list for it.
                pc.skip_list_parser = true;
                return Continuation::Close;
            }
            if !is_empty {
                return Continuation::Close;
            }
        }

        if let Some((pos, padding)) = indent_position(&line, reader.line_offset(), offset) {
            reader.advance_and_set_padding(pos, padding);
        }
        Continuation::Continue(Children::Has)
    }

    fn can_interrupt_paragraph(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block_parser::marker_utils::scan_list_item;

    fn offset_of(line: &str) -> usize {
        let scan = scan_list_item(line.as_bytes(), true);
        content_offset(line.as_bytes(), &scan)
    }

    #[test]
    fn content_offsets() {
        assert_eq!(offset_of("- foo"), 1);
        assert_eq!(offset_of("1.  foo"), 2);
        assert_eq!(offset_of("-    foo"), 4);
        // Five or more spaces means indented code inside the item.
        assert_eq!(offset_of("-     foo"), 1);
        assert_eq!(offset_of("-"), 1);
        assert_eq!(offset_of("-   \n"), 1);
        assert_eq!(offset_of("-\tfoo"), 3);
    }
}
