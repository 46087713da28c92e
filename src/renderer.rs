//! Block tree → HTML rendering.
//!
//! Output follows goldmark's HTML renderer byte for byte for the blocks the
//! parser produces. Rendering is a pure walk over the tree: every node is
//! visited once when entering and once when leaving, and the per-kind
//! functions append to one `String`.

use crate::config::Config;
use crate::syntax::{AttrValue, Document, NodeData, NodeId, Tree};

mod lists;

/// Options that change the emitted markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Self-close void elements (`<hr />`, `<br />`).
    pub xhtml: bool,
    /// Render ordered lists with `fancy` classes and `type`/`start`.
    pub fancy_lists: bool,
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        Self {
            xhtml: config.xhtml,
            fancy_lists: config.extensions.fancy_lists,
        }
    }
}

/// Escapes `&`, `<`, `>` and `"`.
pub(crate) fn escape_into(text: &str, out: &mut String) {
    html_escape::encode_double_quoted_attribute_to_string(text, out);
}

pub struct HtmlRenderer<'a> {
    tree: &'a Tree,
    source: &'a [u8],
    options: RenderOptions,
    out: String,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(document: &'a Document, options: RenderOptions) -> Self {
        Self {
            tree: document.tree(),
            source: document.source().as_bytes(),
            options,
            out: String::with_capacity(document.source().len() * 2),
        }
    }

    pub fn render(mut self) -> String {
        let tree = self.tree;
        for child in tree.children(tree.root()) {
            self.walk(child);
        }
        self.out
    }

    fn walk(&mut self, node: NodeId) {
        self.render_node(node, true);
        let tree = self.tree;
        for child in tree.children(node) {
            self.walk(child);
        }
        self.render_node(node, false);
    }

    fn render_node(&mut self, node: NodeId, entering: bool) {
        let tree = self.tree;
        match tree.data(node) {
            NodeData::Document | NodeData::AttributeBlock => {}
            NodeData::BlockQuote => self.render_blockquote(node, entering),
            NodeData::List(_) => lists::render_list(self, node, entering),
            NodeData::ListItem(_) => lists::render_list_item(self, node, entering),
            NodeData::Paragraph => self.render_paragraph(node, entering),
            NodeData::TextBlock => self.render_text_block(node, entering),
            NodeData::Heading { level } => self.render_heading(node, *level, entering),
            NodeData::ThematicBreak => self.render_thematic_break(node, entering),
            NodeData::CodeBlock => self.render_code_block(node, None, entering),
            NodeData::FencedCodeBlock(fence) => {
                let language = fence
                    .info
                    .as_deref()
                    .and_then(|info| info.split_whitespace().next());
                self.render_code_block(node, language, entering)
            }
        }
    }

    pub(crate) fn push(&mut self, s: &str) {
        self.out.push_str(s);
    }

    pub(crate) fn push_escaped(&mut self, s: &str) {
        escape_into(s, &mut self.out);
    }

    /// Writes ` name="value"` for each attribute not in `skip`.
    pub(crate) fn write_attributes(&mut self, node: NodeId, skip: &[&str]) {
        let tree = self.tree;
        for (name, value) in tree.attributes(node) {
            if skip.contains(&name.as_str()) {
                continue;
            }
            self.write_attribute(name, value);
        }
    }

    pub(crate) fn write_attribute(&mut self, name: &str, value: &AttrValue) {
        self.out.push(' ');
        self.out.push_str(name);
        self.out.push_str("=\"");
        escape_into(&value.to_string(), &mut self.out);
        self.out.push('"');
    }

    fn void_tag(&self, name: &str) -> String {
        if self.options.xhtml {
            format!("<{name} />")
        } else {
            format!("<{name}>")
        }
    }

    /// Inline content of a leaf block: escaped text with soft and hard
    /// line breaks.
    fn write_lines(&mut self, node: NodeId) {
        let tree = self.tree;
        let lines = &tree.node(node).lines;
        let count = lines.len();
        for (index, segment) in lines.iter().enumerate() {
            let value = segment.value(self.source);
            let text = String::from_utf8_lossy(&value);
            let text = text.strip_suffix('\n').unwrap_or(&text);
            if index + 1 == count {
                escape_into(text, &mut self.out);
                break;
            }
            let body = text.trim_end_matches([' ', '\t']);
            let trailing = text.len() - body.len();
            if trailing >= 2 {
                escape_into(body, &mut self.out);
                let br = self.void_tag("br");
                self.out.push_str(&br);
            } else if let Some(body) = body.strip_suffix('\\') {
                escape_into(body, &mut self.out);
                let br = self.void_tag("br");
                self.out.push_str(&br);
            } else {
                escape_into(body, &mut self.out);
            }
            self.out.push('\n');
        }
    }

    fn render_paragraph(&mut self, node: NodeId, entering: bool) {
        if entering {
            self.push("<p");
            self.write_attributes(node, &[]);
            self.push(">");
            self.write_lines(node);
        } else {
            self.push("</p>\n");
        }
    }

    fn render_text_block(&mut self, node: NodeId, entering: bool) {
        if entering {
            self.write_lines(node);
        } else if self.tree.next_sibling(node).is_some() {
            self.push("\n");
        }
    }

    fn render_heading(&mut self, node: NodeId, level: u8, entering: bool) {
        if entering {
            self.push(&format!("<h{level}"));
            self.write_attributes(node, &[]);
            self.push(">");
            self.write_lines(node);
        } else {
            self.push(&format!("</h{level}>\n"));
        }
    }

    fn render_thematic_break(&mut self, node: NodeId, entering: bool) {
        if !entering {
            return;
        }
        self.push("<hr");
        self.write_attributes(node, &[]);
        self.push(if self.options.xhtml { " />\n" } else { ">\n" });
    }

    fn render_blockquote(&mut self, node: NodeId, entering: bool) {
        if entering {
            self.push("<blockquote");
            self.write_attributes(node, &[]);
            self.push(">\n");
        } else {
            self.push("</blockquote>\n");
        }
    }

    fn render_code_block(&mut self, node: NodeId, language: Option<&str>, entering: bool) {
        if !entering {
            self.push("</code></pre>\n");
            return;
        }
        self.push("<pre><code");
        if let Some(language) = language {
            self.push(" class=\"language-");
            self.push_escaped(language);
            self.push("\"");
        }
        self.push(">");
        let tree = self.tree;
        let mut content = Vec::new();
        for line in &tree.node(node).lines {
            content.extend_from_slice(&line.value(self.source));
        }
        let text = String::from_utf8_lossy(&content);
        escape_into(&text, &mut self.out);
        if !text.is_empty() && !text.ends_with('\n') {
            self.out.push('\n');
        }
    }
}
