use crate::config::Config;
use crate::syntax::{NodeId, SyntaxKind, Tree};

/// An open block and the index of the rule that opened it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenBlock {
    pub node: NodeId,
    pub rule: usize,
}

/// Mutable state of one parse. Nothing in here outlives the parse.
pub struct ParseContext {
    pub tree: Tree,
    pub(crate) opened: Vec<OpenBlock>,
    /// Set by a list item that closed because the next line starts a
    /// sibling item; tells the list rule not to open a new list for it.
    pub skip_list_parser: bool,
    /// Set when a list item without content is followed by blank lines.
    pub empty_list_item_with_blank_lines: bool,
    pub fancy_lists: bool,
}

impl ParseContext {
    pub fn new(config: &Config) -> Self {
        Self {
            tree: Tree::new(),
            opened: Vec::new(),
            skip_list_parser: false,
            empty_list_item_with_blank_lines: false,
            fancy_lists: config.extensions.fancy_lists,
        }
    }

    pub fn last_opened_block(&self) -> Option<OpenBlock> {
        self.opened.last().copied()
    }

    pub fn last_opened_node(&self) -> Option<NodeId> {
        self.opened.last().map(|b| b.node)
    }

    pub fn last_opened_is(&self, kind: SyntaxKind) -> bool {
        self.last_opened_node()
            .is_some_and(|node| self.tree.kind(node) == kind)
    }
}
