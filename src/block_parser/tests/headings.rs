use crate::block_parser::tests::helpers::{
    assert_block_kinds, count_children, find_all, find_first, get_text, parse_blocks,
};
use crate::syntax::{NodeData, SyntaxKind};

fn heading_level(input: &str) -> Option<u8> {
    let doc = parse_blocks(input);
    let tree = doc.tree();
    let heading = find_first(tree, SyntaxKind::HEADING)?;
    match tree.data(heading) {
        NodeData::Heading { level } => Some(*level),
        _ => None,
    }
}

#[test]
fn atx_levels() {
    assert_eq!(heading_level("# one\n"), Some(1));
    assert_eq!(heading_level("### three\n"), Some(3));
    assert_eq!(heading_level("###### six\n"), Some(6));
    assert_eq!(heading_level("####### seven\n"), None);
}

#[test]
fn atx_requires_space_after_hashes() {
    assert_block_kinds("#hashtag\n", &[SyntaxKind::PARAGRAPH]);
}

#[test]
fn atx_closing_sequence_is_not_content() {
    let doc = parse_blocks("## Title ##\n");
    assert_eq!(get_text(&doc, SyntaxKind::HEADING).as_deref(), Some("Title"));

    let doc = parse_blocks("# Title#\n");
    assert_eq!(get_text(&doc, SyntaxKind::HEADING).as_deref(), Some("Title#"));
}

#[test]
fn empty_atx_heading() {
    let doc = parse_blocks("#\n");
    let tree = doc.tree();
    let heading = find_first(tree, SyntaxKind::HEADING).unwrap();
    assert!(tree.node(heading).lines.is_empty());
}

#[test]
fn atx_interrupts_paragraph() {
    assert_block_kinds(
        "text\n# Heading\nmore\n",
        &[SyntaxKind::PARAGRAPH, SyntaxKind::HEADING, SyntaxKind::PARAGRAPH],
    );
}

#[test]
fn setext_headings() {
    assert_eq!(heading_level("Title\n=====\n"), Some(1));
    assert_eq!(heading_level("Title\n---\n"), Some(2));

    let doc = parse_blocks("multi\nline\n===\n");
    assert_block_kinds("multi\nline\n===\n", &[SyntaxKind::HEADING]);
    assert_eq!(
        get_text(&doc, SyntaxKind::HEADING).as_deref(),
        Some("multi\nline")
    );
}

#[test]
fn dashes_without_paragraph_are_a_rule() {
    assert_block_kinds("---\n", &[SyntaxKind::THEMATIC_BREAK]);
    assert_block_kinds(
        "para\n\n---\n",
        &[SyntaxKind::PARAGRAPH, SyntaxKind::THEMATIC_BREAK],
    );
}

#[test]
fn setext_keeps_blank_line_flag_of_paragraph() {
    let doc = parse_blocks("- a\n\n  Title\n  ---\n");
    let tree = doc.tree();
    let heading = find_first(tree, SyntaxKind::HEADING).unwrap();
    assert!(tree.node(heading).blank_previous_lines);

    // The blank line makes the list loose, so `a` stays a paragraph.
    let item = find_first(tree, SyntaxKind::LIST_ITEM).unwrap();
    assert_eq!(tree.parent(heading), Some(item));
    assert_eq!(count_children(tree, item, SyntaxKind::PARAGRAPH), 1);
    let kinds: Vec<_> = tree.children(item).map(|n| tree.kind(n)).collect();
    assert_eq!(kinds, vec![SyntaxKind::PARAGRAPH, SyntaxKind::HEADING]);
}

#[test]
fn heading_inside_list_item() {
    let doc = parse_blocks("1. # Title\n2. text\n");
    let tree = doc.tree();
    let items = find_all(tree, SyntaxKind::LIST_ITEM);
    assert_eq!(items.len(), 2);
    assert_eq!(count_children(tree, items[0], SyntaxKind::HEADING), 1);
    assert_eq!(get_text(&doc, SyntaxKind::HEADING).as_deref(), Some("Title"));
}

#[test]
fn underline_after_list_is_a_rule() {
    assert_block_kinds("- a\n---\n", &[SyntaxKind::LIST, SyntaxKind::THEMATIC_BREAK]);
}
