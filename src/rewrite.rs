//! Tree rewriting.
//!
//! Post-order and functional: every level builds a fresh children vector from
//! the (already rewritten) children it owns, so no list is mutated while it is
//! being walked. Each surviving element goes through [`nesting::repair`] before
//! it joins its parent's children.

use crate::config::Config;
use crate::nesting::{self, needs_split};
use crate::node::{Element, Node};
use crate::policy::{bold_wrapper, classify_element, Disposition};

/// What a rewritten node contributes to its parent's children.
enum Rewritten {
    /// The node survives (possibly renamed, with filtered attributes).
    Node(Node),
    /// The node's tag is gone; these children take its place.
    Splice(Vec<Node>),
    /// The node and its subtree are gone.
    Dropped,
}

/// Rewrite a tree according to the configured policy.
///
/// The synthetic document root is always kept. Any other node passed as the
/// root is classified like an ordinary element: dropped it becomes an empty
/// text run, unwrapped it becomes a synthetic root over its children.
#[must_use]
pub fn rewrite(root: Node, config: &Config) -> Node {
    match root {
        Node::Element(element) if element.is_root() => Node::Element(Element {
            children: rewrite_children(element.children, config),
            ..element
        }),
        node => match rewrite_node(node, config) {
            Rewritten::Node(node) => node,
            Rewritten::Splice(children) => Node::Element(Element::root(children)),
            Rewritten::Dropped => Node::Text(String::new()),
        },
    }
}

/// Rewrite a children list, splicing unwrapped children in place.
fn rewrite_children(children: Vec<Node>, config: &Config) -> Vec<Node> {
    let mut out = Vec::with_capacity(children.len());
    for child in children {
        match rewrite_node(child, config) {
            Rewritten::Node(node) => out.extend(nesting::repair(node)),
            Rewritten::Splice(promoted) => out.extend(promoted),
            Rewritten::Dropped => {}
        }
    }
    out
}

fn rewrite_node(node: Node, config: &Config) -> Rewritten {
    let element = match node {
        Node::Element(element) => element,
        leaf @ (Node::Text(_) | Node::Comment(_)) => return Rewritten::Node(leaf),
    };

    let disposition = classify_element(&element, config);
    if disposition == Disposition::DropSubtree {
        log::trace!("dropping <{}> with its content", element.tag);
        return Rewritten::Dropped;
    }

    let bold = bold_wrapper(&element, config);
    let Element { tag, attributes, children } = element;
    let children = rewrite_children(children, config);

    let tag = match disposition {
        Disposition::Keep => tag,
        Disposition::Rename(new_tag) => {
            // Converted table cells that already hold paragraphs would nest them.
            if new_tag == "p" && children.iter().any(|c| c.tag() == Some("p")) {
                return Rewritten::Splice(children);
            }
            new_tag.to_string()
        }
        Disposition::Unwrap => return Rewritten::Splice(children),
        Disposition::DropSubtree => return Rewritten::Dropped,
    };

    let attributes = filter_attributes(&tag, attributes, config);
    let mut element = Element { tag, attributes, children };
    if let Some(bold_tag) = bold {
        wrap_content(&mut element, bold_tag);
    }
    Rewritten::Node(Node::Element(element))
}

/// Move an element's content into a single `wrapper` child.
///
/// Nothing happens when the content is blank, is already exactly one
/// `wrapper`, or would be split apart by nesting repair.
fn wrap_content(element: &mut Element, wrapper: &'static str) {
    let mut content = element.children.iter().filter(|child| !child.is_blank_text());
    let already_wrapped = match (content.next(), content.next()) {
        (None, _) => true,
        (Some(only), None) => only.tag() == Some(wrapper),
        _ => false,
    };
    if already_wrapped || element.tag == wrapper || needs_split(element) {
        return;
    }

    let children = std::mem::take(&mut element.children);
    element.children = vec![Node::element(wrapper, children)];
}

/// Keep only whitelisted attributes, in their original order.
///
/// The class/id/style switches override the whitelist. `data-*` attributes never
/// survive, whitelisted or not.
#[must_use]
pub fn filter_attributes(
    tag: &str,
    attributes: Vec<(String, String)>,
    config: &Config,
) -> Vec<(String, String)> {
    attributes
        .into_iter()
        .filter(|(name, _)| {
            let forced_out = match name.as_str() {
                "class" => config.remove_classes,
                "id" => config.remove_ids,
                "style" => config.remove_inline_styles,
                _ => name.starts_with("data-"),
            };
            !forced_out && config.allows_attribute(tag, name)
        })
        .collect()
}
