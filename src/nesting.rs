//! Nesting repair after rewriting.
//!
//! Unwrapping brings elements together that the HTML tree builder never leaves
//! nested: a heading directly inside a heading, a list inside a paragraph, the
//! text of an unwrapped `<caption>` sitting between table rows. Serialized as
//! is, the next parse would rearrange them. Each element is reshaped here into
//! a form that parses back to the same tree:
//!
//! - An element whose direct child would implicitly close it is split at that
//!   child; the child and everything after it move up to the parent level.
//! - Content a table cannot hold is moved in front of the table, where the
//!   parser would foster-parent it.
//!
//! Only direct children are inspected. The rewriter calls [`repair`] on every
//! surviving element once its own children are final, so the rules apply
//! bottom-up across the whole tree.

use crate::node::{Element, Node};
use crate::tags::{allowed_in_table, nests_directly};

/// Reshape one rewritten node into the sibling sequence that replaces it.
#[must_use]
pub fn repair(node: Node) -> Vec<Node> {
    match node {
        Node::Element(element) if element.tag == "table" => foster_table(element),
        Node::Element(element) => split_at_implicit_close(element),
        leaf => vec![leaf],
    }
}

/// Whether some direct child of `element` would close it on re-parse.
#[must_use]
pub fn needs_split(element: &Element) -> bool {
    first_closing_child(element).is_some()
}

fn first_closing_child(element: &Element) -> Option<usize> {
    element
        .children
        .iter()
        .position(|child| child.tag().is_some_and(|tag| !nests_directly(&element.tag, tag)))
}

fn split_at_implicit_close(mut element: Element) -> Vec<Node> {
    let Some(index) = first_closing_child(&element) else {
        return vec![Node::Element(element)];
    };
    log::trace!("splitting <{}> before a child that closes it", element.tag);

    let moved = element.children.split_off(index);
    let mut out = Vec::with_capacity(moved.len() + 1);
    out.push(Node::Element(element));
    out.extend(moved);
    out
}

fn foster_table(mut table: Element) -> Vec<Node> {
    let mut fostered = Vec::new();
    let children = std::mem::take(&mut table.children);
    table.children = keep_table_content("table", children, &mut fostered);

    if !fostered.is_empty() {
        log::trace!("moving {} node(s) out of a table", fostered.len());
    }
    fostered.push(Node::Element(table));
    fostered
}

/// Keep what a table-level container may hold; push the rest to `fostered`.
fn keep_table_content(container: &str, children: Vec<Node>, fostered: &mut Vec<Node>) -> Vec<Node> {
    let mut kept = Vec::with_capacity(children.len());
    for child in children {
        match child {
            Node::Element(mut element) if allowed_in_table(container, &element.tag) => {
                if matches!(element.tag.as_str(), "thead" | "tbody" | "tfoot" | "tr") {
                    let grandchildren = std::mem::take(&mut element.children);
                    element.children = keep_table_content(&element.tag, grandchildren, fostered);
                }
                kept.push(Node::Element(element));
            }
            Node::Text(text) if is_html_whitespace(&text) => kept.push(Node::Text(text)),
            comment @ Node::Comment(_) => kept.push(comment),
            other => fostered.push(other),
        }
    }
    kept
}

/// Text the parser leaves inside a table: ASCII whitespace only.
fn is_html_whitespace(text: &str) -> bool {
    text.chars().all(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C'))
}
