//! Owned document tree.
//!
//! The parser hands back a `dom_query` document; every pass after that works on
//! this plain tree so that rewriting can move nodes by value instead of mutating
//! a shared DOM while iterating it.

/// Tag name of the synthetic container that holds a parsed fragment.
pub const ROOT_TAG: &str = "#root";

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with its attributes and children.
    Element(Element),
    /// A run of character data (entities already decoded).
    Text(String),
    /// A comment, without the `<!--`/`-->` delimiters.
    Comment(String),
}

/// An element node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Lowercase tag name.
    pub tag: String,
    /// Attributes as `(name, value)` pairs in source order.
    pub attributes: Vec<(String, String)>,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element without attributes.
    #[must_use]
    pub fn new(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children,
        }
    }

    /// Create the synthetic container that represents a whole fragment.
    #[must_use]
    pub fn root(children: Vec<Node>) -> Self {
        Self::new(ROOT_TAG, children)
    }

    /// Whether this is the synthetic fragment container.
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.tag == ROOT_TAG
    }

    /// Get an attribute value by name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl Node {
    /// Shorthand for an element node without attributes.
    #[must_use]
    pub fn element(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self::Element(Element::new(tag, children))
    }

    /// Shorthand for a text node.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// The element payload, if this is an element.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Tag name if this is an element.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.as_element().map(|element| element.tag.as_str())
    }

    /// Depth of the subtree rooted here (a leaf has depth 1).
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Element(element) => {
                1 + element.children.iter().map(Node::depth).max().unwrap_or(0)
            }
            Self::Text(_) | Self::Comment(_) => 1,
        }
    }

    /// Whether this is text made only of whitespace (including non-breaking spaces).
    #[must_use]
    pub fn is_blank_text(&self) -> bool {
        matches!(self, Self::Text(text) if text.chars().all(char::is_whitespace))
    }

    /// Concatenated text of this node and its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            Self::Text(text) => out.push_str(text),
            Self::Comment(_) => {}
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth() {
        let tree = Node::element("p", vec![Node::element("span", vec![Node::text("x")])]);
        assert_eq!(tree.depth(), 3);
        assert_eq!(Node::text("x").depth(), 1);
        assert_eq!(Node::element("p", vec![]).depth(), 1);
    }

    #[test]
    fn test_blank_text() {
        assert!(Node::text("  \n\t").is_blank_text());
        assert!(Node::text("\u{a0}").is_blank_text());
        assert!(Node::text("").is_blank_text());
        assert!(!Node::text(" a ").is_blank_text());
        assert!(!Node::Comment(String::new()).is_blank_text());
    }

    #[test]
    fn test_text_content_skips_comments() {
        let tree = Node::element(
            "p",
            vec![
                Node::text("a"),
                Node::Comment("hidden".into()),
                Node::element("em", vec![Node::text("b")]),
            ],
        );
        assert_eq!(tree.text_content(), "ab");
    }

    #[test]
    fn test_attr_lookup() {
        let mut a = Element::new("a", vec![]);
        a.attributes.push(("href".into(), "/x".into()));
        assert_eq!(a.attr("href"), Some("/x"));
        assert_eq!(a.attr("title"), None);
        assert!(Element::root(vec![]).is_root());
    }
}
