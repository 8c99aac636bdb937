//! HTML parsing adapter.
//!
//! Parses with `dom_query` (html5ever's forgiving tree builder) and converts the
//! document content into an owned [`Node`] tree. A fragment's leading `title`,
//! `style`, `meta` or `script` lands in `<head>`; head content comes first and
//! goes through the same tag policy as the body.

use dom_query::{Document, NodeData, NodeRef};

use crate::node::{Element, Node};

/// Nesting depth beyond which elements are flattened into their ancestor.
///
/// Keeps every later pass's recursion bounded on pathological input.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parse an HTML string into a synthetic root holding the head content followed
/// by the body content.
///
/// Comments the tree builder attaches outside `<head>` and `<body>` (a fragment
/// that starts or ends with one) are kept at their document position.
///
/// Never fails: malformed markup is repaired by the tree builder.
#[must_use]
pub fn parse(html: &str) -> Node {
    let document = Document::from(html);

    let mut children = Vec::new();
    for top in document.root().children() {
        if top.is_element() {
            for section in top.children() {
                match tag_name(&section).as_str() {
                    "head" | "body" => {
                        for child in section.children() {
                            convert_into(&child, 1, &mut children);
                        }
                    }
                    _ => collect_comment(&section, &mut children),
                }
            }
        } else {
            collect_comment(&top, &mut children);
        }
    }

    Node::Element(Element::root(children))
}

fn collect_comment(node: &NodeRef, out: &mut Vec<Node>) {
    if let Some(comment @ Node::Comment(_)) = leaf(node) {
        out.push(comment);
    }
}

/// Convert one parser node, appending the result to `out`.
fn convert_into(node: &NodeRef, depth: usize, out: &mut Vec<Node>) {
    if node.is_element() {
        if depth >= MAX_NESTING_DEPTH {
            log::debug!("nesting deeper than {MAX_NESTING_DEPTH}; flattening subtree");
            flatten_into(node, out);
            return;
        }

        let mut children = Vec::new();
        for child in node.children() {
            convert_into(&child, depth + 1, &mut children);
        }
        out.push(Node::Element(Element {
            tag: tag_name(node),
            attributes: attributes(node),
            children,
        }));
    } else if let Some(leaf) = leaf(node) {
        out.push(leaf);
    }
}

/// Append the leaves of a subtree in document order, discarding element nesting.
///
/// Void elements are kept as childless elements so images and breaks survive.
fn flatten_into(node: &NodeRef, out: &mut Vec<Node>) {
    let mut stack = vec![*node];
    while let Some(current) = stack.pop() {
        if current.is_element() {
            let tag = tag_name(&current);
            if crate::tags::is_void(&tag) {
                out.push(Node::Element(Element {
                    tag,
                    attributes: attributes(&current),
                    children: Vec::new(),
                }));
            } else {
                stack.extend(current.children().into_iter().rev());
            }
        } else if let Some(leaf) = leaf(&current) {
            out.push(leaf);
        }
    }
}

/// Text and comment nodes; doctypes and processing instructions are dropped.
fn leaf(node: &NodeRef) -> Option<Node> {
    node.query(|tree_node| match &tree_node.data {
        NodeData::Text { contents } => Some(Node::Text(contents.to_string())),
        NodeData::Comment { contents } => Some(Node::Comment(contents.to_string())),
        _ => None,
    })
    .flatten()
}

/// Lowercase local tag name
fn tag_name(node: &NodeRef) -> String {
    node.node_name()
        .map(|name| name.to_ascii_lowercase())
        .unwrap_or_default()
}

/// All attributes as key-value pairs, in source order
fn attributes(node: &NodeRef) -> Vec<(String, String)> {
    node.attrs()
        .iter()
        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
        .collect()
}
