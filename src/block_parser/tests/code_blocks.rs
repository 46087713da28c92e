use crate::block_parser::tests::helpers::{
    assert_block_kinds, count_children, find_first, get_text, parse_blocks,
};
use crate::syntax::{NodeData, SyntaxKind};

#[test]
fn indented_code_block() {
    let doc = parse_blocks("    let x = 1;\n    let y = 2;\n");
    assert_eq!(
        get_text(&doc, SyntaxKind::CODE_BLOCK).as_deref(),
        Some("let x = 1;\nlet y = 2;\n")
    );
}

#[test]
fn indented_code_keeps_inner_blank_lines() {
    let doc = parse_blocks("    a\n\n    b\n\n\nafter\n");
    assert_eq!(
        get_text(&doc, SyntaxKind::CODE_BLOCK).as_deref(),
        Some("a\n\nb\n")
    );
    assert_block_kinds(
        "    a\n\n    b\n\n\nafter\n",
        &[SyntaxKind::CODE_BLOCK, SyntaxKind::PARAGRAPH],
    );
}

#[test]
fn indented_code_cannot_interrupt_paragraph() {
    let doc = parse_blocks("para\n    still para\n");
    assert_block_kinds("para\n    still para\n", &[SyntaxKind::PARAGRAPH]);
    assert_eq!(
        get_text(&doc, SyntaxKind::PARAGRAPH).as_deref(),
        Some("para\nstill para")
    );
}

#[test]
fn extra_indentation_is_preserved() {
    let doc = parse_blocks("      deeper\n");
    assert_eq!(
        get_text(&doc, SyntaxKind::CODE_BLOCK).as_deref(),
        Some("  deeper\n")
    );
}

#[test]
fn backtick_fence_with_info() {
    let doc = parse_blocks("```rust\nfn main() {}\n```\n");
    let tree = doc.tree();
    let code = find_first(tree, SyntaxKind::FENCED_CODE_BLOCK).unwrap();
    let NodeData::FencedCodeBlock(fence) = tree.data(code) else {
        panic!("expected a fenced code block");
    };
    assert_eq!(fence.fence_char, b'`');
    assert_eq!(fence.fence_len, 3);
    assert_eq!(fence.info.as_deref(), Some("rust"));
    assert_eq!(
        get_text(&doc, SyntaxKind::FENCED_CODE_BLOCK).as_deref(),
        Some("fn main() {}\n")
    );
}

#[test]
fn tilde_fence_needs_matching_close() {
    let input = "~~~~\n~~~\nstill code\n~~~~\nafter\n";
    let doc = parse_blocks(input);
    assert_eq!(
        get_text(&doc, SyntaxKind::FENCED_CODE_BLOCK).as_deref(),
        Some("~~~\nstill code\n")
    );
    assert_block_kinds(input, &[SyntaxKind::FENCED_CODE_BLOCK, SyntaxKind::PARAGRAPH]);
}

#[test]
fn unclosed_fence_runs_to_end() {
    let doc = parse_blocks("```\none\n\ntwo\n");
    assert_eq!(
        get_text(&doc, SyntaxKind::FENCED_CODE_BLOCK).as_deref(),
        Some("one\n\ntwo\n")
    );
}

#[test]
fn fence_indentation_is_removed_from_content() {
    let doc = parse_blocks("  ```\n  one\n    two\nthree\n  ```\n");
    assert_eq!(
        get_text(&doc, SyntaxKind::FENCED_CODE_BLOCK).as_deref(),
        Some("one\n  two\nthree\n")
    );
}

#[test]
fn fence_interrupts_paragraph() {
    assert_block_kinds(
        "para\n```\ncode\n```\n",
        &[SyntaxKind::PARAGRAPH, SyntaxKind::FENCED_CODE_BLOCK],
    );
}

#[test]
fn fenced_code_inside_list_item() {
    let doc = parse_blocks("1. item\n\n   ```\n   code\n   ```\n");
    let tree = doc.tree();
    let item = find_first(tree, SyntaxKind::LIST_ITEM).unwrap();
    assert_eq!(count_children(tree, item, SyntaxKind::FENCED_CODE_BLOCK), 1);
    assert_eq!(
        get_text(&doc, SyntaxKind::FENCED_CODE_BLOCK).as_deref(),
        Some("code\n")
    );
}
