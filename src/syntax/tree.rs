//! Arena-backed block tree.
//!
//! Nodes live in one `Vec` and refer to each other by [`NodeId`]. Detaching
//! a node only unlinks it; the slot stays allocated until the tree is
//! dropped, which keeps ids stable for the whole parse.

use std::fmt::{self, Write as _};

use super::kind::SyntaxKind;
use super::lists::{ListContainer, ListItem, ListTypeTag};
use super::segment::Segment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Attribute values attached to block nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Classes(Vec<String>),
    TypeSymbol(ListTypeTag),
    Number(i64),
    Text(String),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Classes(classes) => f.write_str(&classes.join(" ")),
            AttrValue::TypeSymbol(tag) => f.write_str(tag.symbol()),
            AttrValue::Number(n) => write!(f, "{n}"),
            AttrValue::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceInfo {
    pub fence_char: u8,
    pub fence_len: usize,
    /// Columns of indentation before the opening fence.
    pub indent: usize,
    pub info: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    Document,
    BlockQuote,
    List(ListContainer),
    ListItem(ListItem),
    Paragraph,
    TextBlock,
    Heading { level: u8 },
    ThematicBreak,
    CodeBlock,
    FencedCodeBlock(FenceInfo),
    AttributeBlock,
}

impl NodeData {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            NodeData::Document => SyntaxKind::DOCUMENT,
            NodeData::BlockQuote => SyntaxKind::BLOCKQUOTE,
            NodeData::List(_) => SyntaxKind::LIST,
            NodeData::ListItem(_) => SyntaxKind::LIST_ITEM,
            NodeData::Paragraph => SyntaxKind::PARAGRAPH,
            NodeData::TextBlock => SyntaxKind::TEXT_BLOCK,
            NodeData::Heading { .. } => SyntaxKind::HEADING,
            NodeData::ThematicBreak => SyntaxKind::THEMATIC_BREAK,
            NodeData::CodeBlock => SyntaxKind::CODE_BLOCK,
            NodeData::FencedCodeBlock(_) => SyntaxKind::FENCED_CODE_BLOCK,
            NodeData::AttributeBlock => SyntaxKind::ATTRIBUTE_BLOCK,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub data: NodeData,
    pub lines: Vec<Segment>,
    pub blank_previous_lines: bool,
    attributes: Vec<(String, AttrValue)>,
    parent: Option<NodeId>,
    first_child: Option<NodeId>,
    last_child: Option<NodeId>,
    prev_sibling: Option<NodeId>,
    next_sibling: Option<NodeId>,
}

impl Node {
    fn new(data: NodeData) -> Self {
        Self {
            data,
            lines: Vec::new(),
            blank_previous_lines: false,
            attributes: Vec::new(),
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeData::Document)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Allocates a detached node.
    pub fn add(&mut self, data: NodeData) -> NodeId {
        self.nodes.push(Node::new(data));
        NodeId(self.nodes.len() - 1)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn kind(&self, id: NodeId) -> SyntaxKind {
        self.nodes[id.0].data.kind()
    }

    pub fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0].data
    }

    pub fn list(&self, id: NodeId) -> Option<&ListContainer> {
        match &self.nodes[id.0].data {
            NodeData::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn list_mut(&mut self, id: NodeId) -> Option<&mut ListContainer> {
        match &mut self.nodes[id.0].data {
            NodeData::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn list_item(&self, id: NodeId) -> Option<&ListItem> {
        match &self.nodes[id.0].data {
            NodeData::ListItem(item) => Some(item),
            _ => None,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].first_child
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].last_child
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].next_sibling
    }

    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].prev_sibling
    }

    pub fn has_children(&self, id: NodeId) -> bool {
        self.nodes[id.0].first_child.is_some()
    }

    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.first_child(id),
        }
    }

    pub fn child_count(&self, id: NodeId) -> usize {
        self.children(id).count()
    }

    /// Pre-order traversal starting at (and including) `id`.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            out.push(current);
            let children: Vec<NodeId> = self.children(current).collect();
            stack.extend(children.into_iter().rev());
        }
        out
    }

    /// True while the node is reachable from the root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        current == self.root()
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.nodes[child.0].parent.is_some() {
            self.detach(child);
        }
        let last = self.nodes[parent.0].last_child;
        {
            let node = &mut self.nodes[child.0];
            node.parent = Some(parent);
            node.prev_sibling = last;
            node.next_sibling = None;
        }
        match last {
            Some(last) => self.nodes[last.0].next_sibling = Some(child),
            None => self.nodes[parent.0].first_child = Some(child),
        }
        self.nodes[parent.0].last_child = Some(child);
    }

    /// Unlinks `id` from its parent and siblings. Its own children stay.
    pub fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.nodes[id.0].parent else {
            return;
        };
        let prev = self.nodes[id.0].prev_sibling;
        let next = self.nodes[id.0].next_sibling;
        match prev {
            Some(prev) => self.nodes[prev.0].next_sibling = next,
            None => self.nodes[parent.0].first_child = next,
        }
        match next {
            Some(next) => self.nodes[next.0].prev_sibling = prev,
            None => self.nodes[parent.0].last_child = prev,
        }
        let node = &mut self.nodes[id.0];
        node.parent = None;
        node.prev_sibling = None;
        node.next_sibling = None;
    }

    pub fn attributes(&self, id: NodeId) -> &[(String, AttrValue)] {
        &self.nodes[id.0].attributes
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&AttrValue> {
        self.nodes[id.0]
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Sets an attribute, replacing an existing value in place.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: AttrValue) {
        let attrs = &mut self.nodes[id.0].attributes;
        if let Some(slot) = attrs.iter_mut().find(|(n, _)| n == name) {
            slot.1 = value;
        } else {
            attrs.push((name.to_string(), value));
        }
    }

    /// The `type` attribute of an ordered list, if it names a known type.
    pub fn list_type(&self, id: NodeId) -> Option<ListTypeTag> {
        match self.attribute(id, "type")? {
            AttrValue::TypeSymbol(tag) => Some(*tag),
            AttrValue::Text(s) => ListTypeTag::from_symbol(s),
            _ => None,
        }
    }

    /// Concatenated content of a leaf node's lines.
    pub fn text(&self, id: NodeId, source: &[u8]) -> String {
        let mut bytes = Vec::new();
        for line in &self.nodes[id.0].lines {
            bytes.extend_from_slice(&line.value(source));
        }
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Indented outline of the tree, one node per line.
    pub fn dump(&self, source: &[u8]) -> String {
        let mut out = String::new();
        self.dump_node(self.root(), 0, source, &mut out);
        out
    }

    fn dump_node(&self, id: NodeId, depth: usize, source: &[u8], out: &mut String) {
        let node = self.node(id);
        let _ = write!(out, "{}{:?}", "  ".repeat(depth), node.data.kind());
        match &node.data {
            NodeData::List(list) => {
                let _ = write!(out, " '{}'", list.marker as char);
                if list.is_ordered() {
                    let _ = write!(out, " start={}", list.start);
                }
                out.push_str(if list.is_tight { " tight" } else { " loose" });
            }
            NodeData::ListItem(item) => {
                let _ = write!(out, " offset={}", item.offset);
            }
            NodeData::Heading { level } => {
                let _ = write!(out, " level={level}");
            }
            NodeData::FencedCodeBlock(fence) => {
                if let Some(info) = &fence.info {
                    let _ = write!(out, " info={info:?}");
                }
            }
            _ => {}
        }
        for (name, value) in &node.attributes {
            let _ = write!(out, " [{name}={value}]");
        }
        if !node.data.kind().is_container() && !node.lines.is_empty() {
            let _ = write!(out, " {:?}", self.text(id, source));
        }
        out.push('\n');
        for child in self.children(id) {
            self.dump_node(child, depth + 1, source, out);
        }
    }
}

pub struct Children<'a> {
    tree: &'a Tree,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.next_sibling(current);
        Some(current)
    }
}
