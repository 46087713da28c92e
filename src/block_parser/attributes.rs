//! Block attribute lines: `{#id .class key=value}`
//!
//! A line holding nothing but an attribute set applies it to the block just
//! before it. The line is parsed into its own node first; once the tree is
//! complete, [`attach_block_attributes`] merges each of those nodes into its
//! previous sibling and removes it.
//!
//! Syntax:
//! - Identifier: `#id` (only the first one counts)
//! - Classes: `.class` (can repeat)
//! - Key-value pairs: `key=value`, `key="value"` or `key='value'`

use crate::syntax::{AttrValue, NodeData, NodeId, SyntaxKind, Tree};

use super::utils::{leading_spaces, trim_right_space_len};
use super::{BlockRule, Children, Continuation, ParseContext, Reader};

#[derive(Debug, PartialEq)]
pub struct AttributeBlock {
    pub identifier: Option<String>,
    pub classes: Vec<String>,
    pub key_values: Vec<(String, String)>,
}

/// Parses a line consisting of one attribute set and optional whitespace.
pub fn try_parse_attribute_line(line: &str) -> Option<AttributeBlock> {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix('{')?.strip_suffix('}')?;
    if inner.contains(['{', '}']) {
        return None;
    }
    parse_attribute_content(inner)
}

fn take_word(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && !bytes[pos].is_ascii_whitespace() && bytes[pos] != b'}' {
        pos += 1;
    }
    pos
}

/// Parse the content inside the attribute braces
fn parse_attribute_content(content: &str) -> Option<AttributeBlock> {
    let mut identifier = None;
    let mut classes = Vec::new();
    let mut key_values = Vec::new();

    let content = content.trim();
    if content.is_empty() {
        return None;
    }

    let mut pos = 0;
    let bytes = content.as_bytes();

    while pos < bytes.len() {
        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos >= bytes.len() {
            break;
        }

        match bytes[pos] {
            b'#' => {
                let start = pos + 1;
                pos = take_word(bytes, start);
                if identifier.is_none() && pos > start {
                    identifier = Some(content[start..pos].to_string());
                }
            }
            b'.' => {
                let start = pos + 1;
                pos = take_word(bytes, start);
                if pos > start {
                    classes.push(content[start..pos].to_string());
                }
            }
            _ => {
                let key_start = pos;
                while pos < bytes.len() && bytes[pos] != b'=' && !bytes[pos].is_ascii_whitespace() {
                    pos += 1;
                }
                if pos >= bytes.len() || bytes[pos] != b'=' {
                    // A bare word is not an attribute.
                    return None;
                }
                let key = content[key_start..pos].to_string();
                pos += 1;

                let value = if pos < bytes.len() && (bytes[pos] == b'"' || bytes[pos] == b'\'') {
                    let quote = bytes[pos];
                    pos += 1;
                    let val_start = pos;
                    while pos < bytes.len() && bytes[pos] != quote {
                        pos += 1;
                    }
                    if pos >= bytes.len() {
                        // Unterminated quote.
                        return None;
                    }
                    let val = content[val_start..pos].to_string();
                    pos += 1;
                    val
                } else {
                    let val_start = pos;
                    pos = take_word(bytes, pos);
                    content[val_start..pos].to_string()
                };

                if key.is_empty() {
                    return None;
                }
                key_values.push((key, value));
            }
        }
    }

    if identifier.is_none() && classes.is_empty() && key_values.is_empty() {
        return None;
    }

    Some(AttributeBlock {
        identifier,
        classes,
        key_values,
    })
}

/// Copies parsed attributes onto a node, appending classes to existing ones.
fn apply_attributes(tree: &mut Tree, node: NodeId, attrs: AttributeBlock) {
    if let Some(id) = attrs.identifier {
        tree.set_attribute(node, "id", AttrValue::Text(id));
    }
    if !attrs.classes.is_empty() {
        let mut classes = match tree.attribute(node, "class") {
            Some(AttrValue::Classes(existing)) => existing.clone(),
            Some(other) => vec![other.to_string()],
            None => Vec::new(),
        };
        classes.extend(attrs.classes);
        tree.set_attribute(node, "class", AttrValue::Classes(classes));
    }
    for (key, value) in attrs.key_values {
        tree.set_attribute(node, &key, AttrValue::Text(value));
    }
}

/// Moves the attributes of every attribute line onto the block before it
/// and drops the attribute nodes from the tree.
pub(crate) fn attach_block_attributes(tree: &mut Tree) {
    let pending: Vec<NodeId> = tree
        .descendants(tree.root())
        .into_iter()
        .filter(|&id| tree.kind(id) == SyntaxKind::ATTRIBUTE_BLOCK)
        .collect();

    for attr_node in pending {
        if let Some(target) = tree.prev_sibling(attr_node) {
            let attrs = tree.attributes(attr_node).to_vec();
            log::debug!(
                "Attaching {} attribute(s) to {:?}",
                attrs.len(),
                tree.kind(target)
            );
            for (name, value) in attrs {
                match (name.as_str(), value) {
                    ("class", AttrValue::Classes(classes)) => apply_attributes(
                        tree,
                        target,
                        AttributeBlock {
                            identifier: None,
                            classes,
                            key_values: Vec::new(),
                        },
                    ),
                    (_, value) => tree.set_attribute(target, &name, value),
                }
            }
        }
        tree.detach(attr_node);
    }
}

pub(crate) struct BlockAttributeRule;

impl BlockRule for BlockAttributeRule {
    fn name(&self) -> &'static str {
        "block attributes"
    }

    fn triggers(&self) -> &'static [u8] {
        b"{"
    }

    fn open(
        &self,
        parent: NodeId,
        reader: &mut Reader<'_>,
        pc: &mut ParseContext,
    ) -> Option<(NodeId, Children)> {
        pc.tree.last_child(parent)?;
        let line = reader.peek_line()?;
        if leading_spaces(&line) > 3 {
            return None;
        }
        let end = line.len() - trim_right_space_len(&line);
        let text = std::str::from_utf8(&line[..end]).ok()?;
        let attrs = try_parse_attribute_line(text)?;

        let node = pc.tree.add(NodeData::AttributeBlock);
        apply_attributes(&mut pc.tree, node, attrs);
        reader.advance_to_eol();
        Some((node, Children::No))
    }

    fn continue_block(
        &self,
        _node: NodeId,
        _reader: &mut Reader<'_>,
        _pc: &mut ParseContext,
    ) -> Continuation {
        Continuation::Close
    }

    fn can_interrupt_paragraph(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_id() {
        let attrs = try_parse_attribute_line("{#my-id}").expect("attributes");
        assert_eq!(attrs.identifier, Some("my-id".to_string()));
        assert!(attrs.classes.is_empty());
        assert!(attrs.key_values.is_empty());
    }

    #[test]
    fn test_multiple_classes() {
        let attrs = try_parse_attribute_line("{.class1 .class2 .class3}").expect("attributes");
        assert_eq!(attrs.classes, vec!["class1", "class2", "class3"]);
    }

    #[test]
    fn test_key_value_quoted() {
        let attrs = try_parse_attribute_line("{key=\"value with spaces\" k2='v'}").expect("attributes");
        assert_eq!(
            attrs.key_values,
            vec![
                ("key".to_string(), "value with spaces".to_string()),
                ("k2".to_string(), "v".to_string())
            ]
        );
    }

    #[test]
    fn test_full_attributes() {
        let attrs = try_parse_attribute_line("  {#id .class1 .class2 key1=val1 key2=\"val 2\"}  ")
            .expect("attributes");
        assert_eq!(attrs.identifier, Some("id".to_string()));
        assert_eq!(attrs.classes, vec!["class1", "class2"]);
        assert_eq!(
            attrs.key_values,
            vec![
                ("key1".to_string(), "val1".to_string()),
                ("key2".to_string(), "val 2".to_string())
            ]
        );
    }

    #[test]
    fn test_only_first_id_counts() {
        let attrs = try_parse_attribute_line("{#id1 #id2}").expect("attributes");
        assert_eq!(attrs.identifier, Some("id1".to_string()));
    }

    #[test]
    fn rejects_non_attribute_lines() {
        assert!(try_parse_attribute_line("{}").is_none());
        assert!(try_parse_attribute_line("{.a} trailing").is_none());
        assert!(try_parse_attribute_line("{bare word}").is_none());
        assert!(try_parse_attribute_line("{key=\"open}").is_none());
        assert!(try_parse_attribute_line("{{.a}}").is_none());
    }

    #[test]
    fn classes_append_to_existing() {
        let mut tree = Tree::new();
        let root = tree.root();
        let list = tree.add(NodeData::List(crate::syntax::ListContainer::new(b'-')));
        let attr = tree.add(NodeData::AttributeBlock);
        tree.append_child(root, list);
        tree.append_child(root, attr);
        tree.set_attribute(list, "class", AttrValue::Classes(vec!["a".to_string()]));
        apply_attributes(
            &mut tree,
            attr,
            try_parse_attribute_line("{.b #x bar=baz}").expect("attributes"),
        );

        attach_block_attributes(&mut tree);

        assert_eq!(tree.child_count(root), 1);
        assert_eq!(
            tree.attribute(list, "class"),
            Some(&AttrValue::Classes(vec!["a".to_string(), "b".to_string()]))
        );
        assert_eq!(tree.attribute(list, "id"), Some(&AttrValue::Text("x".to_string())));
        assert_eq!(tree.attribute(list, "bar"), Some(&AttrValue::Text("baz".to_string())));
    }
}
