//! List containers.
//!
//! A list opens on the first marker line and stays open while following
//! lines either belong to its last item or start a sibling item of the same
//! kind. Ordered lists also have to keep their type: `a.` after `2.` closes
//! the numeric list so that a new alphabetic one can start on that line.

use crate::syntax::{AttrValue, ListContainer, ListTypeTag, NodeData, NodeId, SyntaxKind, Tree};

use super::list_types::{continuation_type, type_of_fancy_marker};
use super::marker_utils::{MarkerKind, ScanResult, matches_list_item};
use super::utils::{indent_width, is_blank};
use super::{BlockRule, Children, Continuation, ParseContext, Reader};

/// Bytes that can start a list marker.
pub(crate) const LIST_TRIGGERS: &[u8] =
    b"-+*0123456789#abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// What the marker line of a new list resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOpening {
    pub marker: u8,
    pub start: i64,
    pub type_tag: Option<ListTypeTag>,
}

/// Where a candidate marker line sits relative to an open paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Interruption {
    /// The line would interrupt a paragraph that has the same parent.
    pub paragraph: bool,
    /// The new list would be nested in a list item.
    pub in_list_item: bool,
}

/// Decides whether a strictly scanned marker line starts a new list.
pub fn decide_list_open(
    line: &[u8],
    scan: &ScanResult,
    interruption: Interruption,
) -> Option<ListOpening> {
    let (start, type_tag) = match scan.kind {
        MarkerKind::None => return None,
        MarkerKind::Bullet => (0, None),
        MarkerKind::OrderedPlain => {
            let start = scan
                .token(line)
                .iter()
                .fold(0i64, |acc, b| acc * 10 + i64::from(b - b'0'));
            (start, Some(ListTypeTag::Num))
        }
        MarkerKind::OrderedFancy => {
            let token = scan.token(line);
            if token == b"#" {
                (1, None)
            } else {
                let (tag, value) = type_of_fancy_marker(token)?;
                (i64::from(value), Some(tag))
            }
        }
    };

    if interruption.paragraph {
        // Only lists counting from one may interrupt a paragraph, except
        // inside list items.
        if !interruption.in_list_item && scan.kind.is_ordered() && start != 1 {
            return None;
        }
        // An empty item never interrupts a paragraph.
        if scan.content_is_blank(line) {
            return None;
        }
    }

    Some(ListOpening {
        marker: scan.list_char(line),
        start,
        type_tag,
    })
}

/// Whether a sibling marker found while `list` is open continues it.
///
/// The bullet character or delimiter has to match, and for ordered markers
/// other than `#` the implied type has to equal the list's type (numeric
/// when it has none).
pub fn marker_continues_list(
    line: &[u8],
    scan: &ScanResult,
    list: &ListContainer,
    current: Option<ListTypeTag>,
) -> bool {
    if scan.list_char(line) != list.marker || scan.kind.is_ordered() != list.is_ordered() {
        return false;
    }
    if scan.kind.is_ordered() {
        let token = scan.token(line);
        if token != b"#" {
            let current = current.unwrap_or_default();
            let expected = continuation_type(token, current);
            if expected != current {
                log::debug!(
                    "Marker {:?} implies list type {expected}, list is {current}",
                    String::from_utf8_lossy(token)
                );
                return false;
            }
        }
    }
    true
}

/// Content offset of the last item of `list`, 0 if it has none.
pub(crate) fn last_offset(tree: &Tree, list: NodeId) -> usize {
    tree.last_child(list)
        .and_then(|item| tree.list_item(item))
        .map_or(0, |item| item.offset)
}

/// A list is loose if any item but the first follows a blank line, or if a
/// blank line separates two blocks of one item.
pub(crate) fn is_tight(tree: &Tree, list: NodeId) -> bool {
    for (index, item) in tree.children(list).enumerate() {
        if let Some(first) = tree.first_child(item)
            && tree.last_child(item) != Some(first)
        {
            let mut child = tree.next_sibling(first);
            while let Some(c) = child {
                if tree.node(c).blank_previous_lines {
                    return false;
                }
                child = tree.next_sibling(c);
            }
        }
        if index > 0 && tree.node(item).blank_previous_lines {
            return false;
        }
    }
    true
}

pub(crate) struct ListRule;

impl BlockRule for ListRule {
    fn name(&self) -> &'static str {
        "list"
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
        if pc.last_opened_is(SyntaxKind::LIST) || pc.skip_list_parser {
            pc.skip_list_parser = false;
            return None;
        }
        let line = reader.peek_line()?;
        let scan = matches_list_item(&line, true, pc.fancy_lists);
        if !scan.is_match() {
            return None;
        }

        let interruption = match pc.last_opened_node() {
            Some(last)
                if pc.tree.kind(last) == SyntaxKind::PARAGRAPH
                    && pc.tree.parent(last) == Some(parent) =>
            {
                Interruption {
                    paragraph: true,
                    in_list_item: pc.tree.kind(parent) == SyntaxKind::LIST_ITEM,
                }
            }
            _ => Interruption::default(),
        };
        let opening = decide_list_open(&line, &scan, interruption)?;

        let mut list = ListContainer::new(opening.marker);
        list.start = opening.start;
        let node = pc.tree.add(NodeData::List(list));
        if let Some(tag) = opening.type_tag {
            pc.tree
                .set_attribute(node, "type", AttrValue::TypeSymbol(tag));
        }
        pc.empty_list_item_with_blank_lines = false;

        log::debug!(
            "Opened list marker={:?} start={} type={:?}",
            opening.marker as char,
            opening.start,
            opening.type_tag
        );
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
        let last_is_empty = pc
            .tree
            .last_child(node)
            .is_none_or(|item| !pc.tree.has_children(item));

        if is_blank(&line) {
            if last_is_empty {
                pc.empty_list_item_with_blank_lines = true;
            }
            return Continuation::Continue(Children::Has);
        }

        let offset = last_offset(&pc.tree, node);
        let (indent, _) = indent_width(&line, reader.line_offset());

        if indent < offset || last_is_empty {
            if indent < 4 {
                let scan = matches_list_item(&line, false, pc.fancy_lists);
                if scan.is_match() && scan.indent < offset + 4 {
                    let Some(list) = pc.tree.list(node) else {
                        return Continuation::Close;
                    };
                    let current = pc.tree.list_type(node);
                    return if marker_continues_list(&line, &scan, list, current) {
                        Continuation::Continue(Children::Has)
                    } else {
                        Continuation::Close
                    };
                }
            }
            if !last_is_empty {
                return Continuation::Close;
            }
        }

        if last_is_empty && indent < offset {
            return Continuation::Close;
        }
        if pc.empty_list_item_with_blank_lines {
            return Continuation::Close;
        }
        Continuation::Continue(Children::Has)
    }

    fn close(&self, node: NodeId, _reader: &Reader<'_>, pc: &mut ParseContext) {
        let tight = is_tight(&pc.tree, node);
        if let Some(list) = pc.tree.list_mut(node) {
            list.is_tight = tight;
        }
        if !tight {
            log::debug!("List {} is loose", node.index());
            return;
        }
        let items: Vec<NodeId> = pc.tree.children(node).collect();
        for item in items {
            let children: Vec<NodeId> = pc.tree.children(item).collect();
            for child in children {
                if pc.tree.kind(child) == SyntaxKind::PARAGRAPH {
                    pc.tree.node_mut(child).data = NodeData::TextBlock;
                }
            }
        }
    }

    fn can_interrupt_paragraph(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block_parser::marker_utils::scan_list_item;

    fn open(line: &str, interruption: Interruption) -> Option<ListOpening> {
        let scan = matches_list_item(line.as_bytes(), true, true);
        decide_list_open(line.as_bytes(), &scan, interruption)
    }

    const PARAGRAPH: Interruption = Interruption {
        paragraph: true,
        in_list_item: false,
    };

    #[test]
    fn opening_values() {
        let o = open("003. ok", Interruption::default()).expect("opens");
        assert_eq!(o.start, 3);
        assert_eq!(o.marker, b'.');
        assert_eq!(o.type_tag, Some(ListTypeTag::Num));

        let o = open("vi) x", Interruption::default()).expect("opens");
        assert_eq!((o.start, o.type_tag), (581, Some(ListTypeTag::LcAlpha)));
        assert_eq!(o.marker, b')');

        let o = open("IV. x", Interruption::default()).expect("opens");
        assert_eq!((o.start, o.type_tag), (4, Some(ListTypeTag::UcRoman)));

        let o = open("- x", Interruption::default()).expect("opens");
        assert_eq!((o.marker, o.type_tag), (b'-', None));
    }

    #[test]
    fn hash_marker_leaves_type_open() {
        let o = open("#. x", Interruption::default()).expect("opens");
        assert_eq!((o.start, o.type_tag), (1, None));
    }

    #[test]
    fn paragraph_interruption_rules() {
        assert!(open("1. x", PARAGRAPH).is_some());
        assert!(open("a. x", PARAGRAPH).is_some());
        assert!(open("i. x", PARAGRAPH).is_some());
        assert!(open("2. x", PARAGRAPH).is_none());
        assert!(open("b. x", PARAGRAPH).is_none());
        assert!(open("- x", PARAGRAPH).is_some());
        assert!(open("-", PARAGRAPH).is_none());
        assert!(open("1.", PARAGRAPH).is_none());
        assert!(open("1.   \n", PARAGRAPH).is_none());
    }

    #[test]
    fn nested_lists_may_interrupt_with_any_start() {
        let nested = Interruption {
            paragraph: true,
            in_list_item: true,
        };
        assert!(open("2. x", nested).is_some());
        assert!(open("-", nested).is_none());
    }

    #[test]
    fn markers_must_match_the_list() {
        let mut ordered = ListContainer::new(b'.');
        ordered.start = 1;
        let check = |line: &str, list: &ListContainer, current| {
            let scan = scan_list_item(line.as_bytes(), true);
            marker_continues_list(line.as_bytes(), &scan, list, current)
        };
        assert!(check("2. x", &ordered, None));
        assert!(!check("2) x", &ordered, None));
        assert!(!check("- x", &ordered, None));
        assert!(!check("a. x", &ordered, Some(ListTypeTag::Num)));
        assert!(check("#. x", &ordered, Some(ListTypeTag::LcAlpha)));
        assert!(check("i. x", &ordered, Some(ListTypeTag::LcAlpha)));
        assert!(!check("i. x", &ordered, Some(ListTypeTag::UcAlpha)));

        let bullets = ListContainer::new(b'-');
        assert!(check("- x", &bullets, None));
        assert!(!check("* x", &bullets, None));
    }
}
