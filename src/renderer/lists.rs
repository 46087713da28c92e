//! List and list item markup.
//!
//! Ordered lists always carry `class="fancy fl-…"`, `type` and `start`,
//! so that stylesheets can pick the counter style without looking at the
//! items. Items never get a `value`.

use crate::syntax::{AttrValue, ListTypeTag, NodeId, SyntaxKind};

use super::HtmlRenderer;

/// Classes set on the list node by attribute lines, in order.
fn user_classes(renderer: &HtmlRenderer<'_>, node: NodeId) -> Vec<String> {
    match renderer.tree.attribute(node, "class") {
        Some(AttrValue::Classes(classes)) => classes.clone(),
        Some(other) => vec![other.to_string()],
        None => Vec::new(),
    }
}

pub(super) fn render_list(renderer: &mut HtmlRenderer<'_>, node: NodeId, entering: bool) {
    let tree = renderer.tree;
    let Some(list) = tree.list(node) else {
        return;
    };
    let tag = if list.is_ordered() { "ol" } else { "ul" };
    if !entering {
        renderer.push(&format!("</{tag}>\n"));
        return;
    }
    let start = list.start;
    let ordered = list.is_ordered();

    renderer.push("<");
    renderer.push(tag);
    if !renderer.options.fancy_lists {
        if ordered && start != 1 {
            renderer.push(&format!(" start=\"{start}\""));
        }
        renderer.write_attributes(node, &["type"]);
        renderer.push(">\n");
        return;
    }

    let mut classes = Vec::new();
    if ordered {
        let tag = tree.list_type(node).unwrap_or_default();
        classes.push("fancy".to_string());
        classes.push(tag.css_class().to_string());
    }
    classes.extend(user_classes(renderer, node));
    if !classes.is_empty() {
        renderer.write_attribute("class", &AttrValue::Classes(classes));
    }

    if ordered {
        let type_value = tree
            .attribute(node, "type")
            .cloned()
            .unwrap_or(AttrValue::TypeSymbol(ListTypeTag::Num));
        renderer.write_attribute("type", &type_value);
        renderer.write_attribute("start", &AttrValue::Number(start));
    }

    renderer.write_attributes(node, &["class", "type"]);
    renderer.push(">\n");
}

pub(super) fn render_list_item(renderer: &mut HtmlRenderer<'_>, node: NodeId, entering: bool) {
    if !entering {
        renderer.push("</li>\n");
        return;
    }
    renderer.push("<li");
    renderer.write_attributes(node, &["value"]);
    renderer.push(">");
    let tree = renderer.tree;
    if let Some(first) = tree.first_child(node)
        && tree.kind(first) != SyntaxKind::TEXT_BLOCK
    {
        renderer.push("\n");
    }
}
