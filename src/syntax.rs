mod kind;
mod lists;
mod segment;
mod tree;

pub use kind::SyntaxKind;
pub use lists::{ListContainer, ListItem, ListTypeTag};
pub use segment::Segment;
pub use tree::{AttrValue, Children, FenceInfo, Node, NodeData, NodeId, Tree};

/// A parsed document: the normalized source and the block tree over it.
#[derive(Debug, Clone)]
pub struct Document {
    source: String,
    tree: Tree,
}

impl Document {
    pub fn new(source: String, tree: Tree) -> Self {
        Self { source, tree }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Indented outline of the block tree.
    pub fn dump(&self) -> String {
        self.tree.dump(self.source.as_bytes())
    }
}
