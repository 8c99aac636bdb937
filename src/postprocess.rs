//! Whole-tree cleanup passes run after rewriting.
//!
//! The order is fixed: comments, successive non-breaking spaces, empty tags,
//! then whitespace. Pruning comes after comment stripping so that an element
//! holding only a comment is recognized as empty, and whitespace is normalized
//! last so that text left adjacent by pruning is merged and trimmed.

use crate::config::Config;
use crate::node::{Element, Node};
use crate::patterns::{ASCII_WHITESPACE_RUN, SUCCESSIVE_NBSP};
use crate::tags::{is_block, is_preformatted, is_raw_text, PRUNE_EXEMPT_TAG_SET};

/// Run every enabled post-processor in order.
#[must_use]
pub fn post_process(root: Node, config: &Config) -> Node {
    let mut root = root;
    if config.remove_comments {
        root = strip_comments(root);
    }
    if config.remove_successive_nbsp {
        root = collapse_successive_nbsp(root);
    }
    if config.remove_empty_tags {
        root = prune_empty(root);
    }
    normalize_whitespace(root)
}

// === Comment Stripper ===

/// Delete every comment node. Nothing is promoted.
#[must_use]
pub fn strip_comments(node: Node) -> Node {
    map_elements(node, &mut |mut element| {
        element.children.retain(|child| !matches!(child, Node::Comment(_)));
        element
    })
}

// === Successive &nbsp; Collapser ===

/// Collapse each run of two or more non-breaking spaces into one.
#[must_use]
pub fn collapse_successive_nbsp(node: Node) -> Node {
    match node {
        Node::Text(text) => Node::Text(collapse_nbsp_run(text)),
        Node::Element(element) => Node::Element(Element {
            children: element
                .children
                .into_iter()
                .map(collapse_successive_nbsp)
                .collect(),
            ..element
        }),
        comment @ Node::Comment(_) => comment,
    }
}

fn collapse_nbsp_run(text: String) -> String {
    if SUCCESSIVE_NBSP.is_match(&text) {
        SUCCESSIVE_NBSP.replace_all(&text, "\u{a0}").into_owned()
    } else {
        text
    }
}

// === Empty-Tag Pruner ===

/// Remove elements without content until a pass removes nothing.
///
/// An element is empty when all its children are whitespace-only text (or it
/// has none) and its tag is not in the exempt set. The number of passes is
/// bounded by the tree depth.
#[must_use]
pub fn prune_empty(root: Node) -> Node {
    let max_passes = root.depth() + 1;
    let mut root = root;

    for pass in 1..=max_passes {
        let mut removed = 0;
        root = prune_pass(root, &mut removed);
        log::trace!("prune pass {pass}: removed {removed} empty element(s)");
        if removed == 0 {
            break;
        }
    }

    root
}

fn prune_pass(node: Node, removed: &mut usize) -> Node {
    match node {
        Node::Element(element) => Node::Element(Element {
            children: prune_children(element.children, removed),
            ..element
        }),
        leaf => leaf,
    }
}

fn prune_children(children: Vec<Node>, removed: &mut usize) -> Vec<Node> {
    children
        .into_iter()
        .filter_map(|child| match child {
            Node::Element(mut element) => {
                element.children = prune_children(element.children, removed);
                if is_empty_element(&element) {
                    *removed += 1;
                    None
                } else {
                    Some(Node::Element(element))
                }
            }
            leaf => Some(leaf),
        })
        .collect()
}

/// Check if an element carries no content and may be pruned
#[must_use]
pub fn is_empty_element(element: &Element) -> bool {
    !element.is_root()
        && !PRUNE_EXEMPT_TAG_SET.contains(element.tag.as_str())
        && element.children.iter().all(Node::is_blank_text)
}

// === Whitespace Normalizer ===

/// Merge adjacent text, collapse ASCII whitespace runs to a single space and
/// trim text where it touches a block boundary.
///
/// Preformatted and raw-text elements are left exactly as they are.
#[must_use]
pub fn normalize_whitespace(node: Node) -> Node {
    match node {
        Node::Element(element) => Node::Element(normalize_element(element)),
        other => other,
    }
}

fn normalize_element(element: Element) -> Element {
    if is_preformatted(&element.tag) || is_raw_text(&element.tag) {
        return element;
    }
    let is_block_container = element.is_root() || is_block(&element.tag);

    let mut merged: Vec<Node> = Vec::with_capacity(element.children.len());
    for child in element.children {
        match child {
            Node::Text(text) => {
                if let Some(Node::Text(previous)) = merged.last_mut() {
                    previous.push_str(&text);
                } else {
                    merged.push(Node::Text(text));
                }
            }
            Node::Element(child) => merged.push(Node::Element(normalize_element(child))),
            comment @ Node::Comment(_) => merged.push(comment),
        }
    }

    let is_block_at = |nodes: &[Node], index: Option<usize>| {
        index
            .and_then(|i| nodes.get(i))
            .and_then(Node::tag)
            .is_some_and(is_block)
    };

    let last = merged.len().saturating_sub(1);
    let mut trimmed: Vec<Option<String>> = Vec::with_capacity(merged.len());
    for (i, child) in merged.iter().enumerate() {
        let Node::Text(text) = child else {
            trimmed.push(None);
            continue;
        };
        let mut text = ASCII_WHITESPACE_RUN.replace_all(text, " ").into_owned();
        let at_start = (i == 0 && is_block_container) || is_block_at(&merged, i.checked_sub(1));
        let at_end = (i == last && is_block_container) || is_block_at(&merged, Some(i + 1));
        if at_start {
            text = text.trim_start_matches(' ').to_string();
        }
        if at_end {
            text.truncate(text.trim_end_matches(' ').len());
        }
        trimmed.push(Some(text));
    }

    let children = merged
        .into_iter()
        .zip(trimmed)
        .filter_map(|(child, text)| match text {
            Some(text) if text.is_empty() => None,
            Some(text) => Some(Node::Text(text)),
            None => Some(child),
        })
        .collect();

    Element { children, ..element }
}

// === Helpers ===

/// Apply `f` to every element bottom-up, rebuilding the tree.
fn map_elements(node: Node, f: &mut impl FnMut(Element) -> Element) -> Node {
    match node {
        Node::Element(element) => {
            let children = element
                .children
                .into_iter()
                .map(|child| map_elements(child, f))
                .collect();
            Node::Element(f(Element { children, ..element }))
        }
        leaf => leaf,
    }
}
