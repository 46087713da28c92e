use crate::block_parser::BlockParser;
use crate::config::Config;
use crate::syntax::{Document, NodeId, SyntaxKind, Tree};

pub fn parse_blocks(input: &str) -> Document {
    parse_blocks_with(input, &Config::default())
}

pub fn parse_blocks_with(input: &str, config: &Config) -> Document {
    let tree = BlockParser::new(input, config).parse();
    Document::new(input.to_string(), tree)
}

pub fn find_first(tree: &Tree, kind: SyntaxKind) -> Option<NodeId> {
    tree.descendants(tree.root())
        .into_iter()
        .find(|&n| tree.kind(n) == kind)
}

pub fn find_all(tree: &Tree, kind: SyntaxKind) -> Vec<NodeId> {
    tree.descendants(tree.root())
        .into_iter()
        .filter(|&n| tree.kind(n) == kind)
        .collect()
}

pub fn get_blocks(tree: &Tree) -> Vec<NodeId> {
    tree.children(tree.root()).collect()
}

pub fn assert_block_kinds(input: &str, expected: &[SyntaxKind]) {
    let doc = parse_blocks(input);
    let tree = doc.tree();
    let actual: Vec<_> = get_blocks(tree).iter().map(|&n| tree.kind(n)).collect();
    assert_eq!(
        actual, expected,
        "Block kinds did not match for input:\n{}",
        input
    );
}

/// Text content of the first node matching the kind
pub fn get_text(doc: &Document, kind: SyntaxKind) -> Option<String> {
    find_first(doc.tree(), kind).map(|n| doc.tree().text(n, doc.source().as_bytes()))
}

/// Count direct children of a specific kind
pub fn count_children(tree: &Tree, node: NodeId, kind: SyntaxKind) -> usize {
    tree.children(node).filter(|&n| tree.kind(n) == kind).count()
}
