//! Syntax kinds for the block tree.

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    // Containers
    DOCUMENT = 0,
    BLOCKQUOTE,
    LIST,      // ordered or bullet list container
    LIST_ITEM, // one marker-introduced item

    // Leaf blocks
    PARAGRAPH,
    TEXT_BLOCK, // paragraph inside a tight list
    HEADING,    // ATX or setext
    THEMATIC_BREAK,
    CODE_BLOCK, // indented code
    FENCED_CODE_BLOCK,
    ATTRIBUTE_BLOCK, // {#id .class key=value} line, merged away after parsing
}

impl SyntaxKind {
    /// Containers hold child blocks; everything else holds lines.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            SyntaxKind::DOCUMENT | SyntaxKind::BLOCKQUOTE | SyntaxKind::LIST | SyntaxKind::LIST_ITEM
        )
    }
}
