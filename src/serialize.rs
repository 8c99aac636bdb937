//! Rendering the cleaned tree back to HTML.

use crate::node::{Element, Node};
use crate::tags::{is_preformatted, is_raw_text, is_void, LINE_BREAK_AFTER_TAG_SET};

/// Serialization switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerializeOptions {
    /// Emit `\n` after the closing tag of block elements.
    pub line_breaks: bool,
}

/// Render a tree to an HTML string.
///
/// The synthetic root renders only its children. Trailing line terminators
/// are trimmed from the result.
#[must_use]
pub fn serialize(node: &Node, options: SerializeOptions) -> String {
    let mut out = String::new();
    let mut serializer = Serializer {
        out: &mut out,
        options,
    };
    serializer.node(node, Context::default());
    out.truncate(out.trim_end_matches(['\n', '\r']).len());
    out
}

#[derive(Clone, Copy, Default)]
struct Context {
    in_raw_text: bool,
    in_preformatted: bool,
}

struct Serializer<'a> {
    out: &'a mut String,
    options: SerializeOptions,
}

impl Serializer<'_> {
    fn node(&mut self, node: &Node, ctx: Context) {
        match node {
            Node::Element(element) if element.is_root() => self.children(element, ctx),
            Node::Element(element) => self.element(element, ctx),
            Node::Text(text) if ctx.in_raw_text => self.out.push_str(text),
            Node::Text(text) => escape_text(self.out, text),
            Node::Comment(comment) => {
                self.out.push_str("<!--");
                self.out.push_str(comment);
                self.out.push_str("-->");
            }
        }
    }

    fn element(&mut self, element: &Element, ctx: Context) {
        let tag = element.tag.as_str();

        self.out.push('<');
        self.out.push_str(tag);
        for (name, value) in &element.attributes {
            self.out.push(' ');
            self.out.push_str(name);
            self.out.push_str("=\"");
            escape_attribute(self.out, value);
            self.out.push('"');
        }

        if is_void(tag) {
            self.out.push_str(" />");
            return;
        }
        self.out.push('>');

        // The parser drops one newline directly after these opening tags.
        if is_preformatted(tag) {
            if let Some(Node::Text(text)) = element.children.first() {
                if text.starts_with('\n') {
                    self.out.push('\n');
                }
            }
        }

        let child_ctx = Context {
            in_raw_text: ctx.in_raw_text || is_raw_text(tag),
            in_preformatted: ctx.in_preformatted || is_preformatted(tag),
        };
        self.children(element, child_ctx);

        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
        if self.options.line_breaks
            && !ctx.in_preformatted
            && LINE_BREAK_AFTER_TAG_SET.contains(tag)
        {
            self.out.push('\n');
        }
    }

    fn children(&mut self, element: &Element, ctx: Context) {
        for child in &element.children {
            self.node(child, ctx);
        }
    }
}

/// Escape `&`, `<` and `>` in text content
fn escape_text(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}

/// Escape `&` and `"` in attribute values
fn escape_attribute(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: SerializeOptions = SerializeOptions { line_breaks: false };
    const BREAKS: SerializeOptions = SerializeOptions { line_breaks: true };

    fn root(children: Vec<Node>) -> Node {
        Node::Element(Element::root(children))
    }

    #[test]
    fn test_void_elements_self_close_without_children() {
        let mut img = Element::new("img", vec![Node::text("ignored")]);
        img.attributes.push(("src".into(), "a.png".into()));
        let tree = root(vec![Node::element("br", vec![]), Node::Element(img)]);

        assert_eq!(serialize(&tree, PLAIN), r#"<br /><img src="a.png" />"#);
    }

    #[test]
    fn test_escaping() {
        let mut a = Element::new("a", vec![Node::text("1 < 2 & 3 > 0 \"q\"")]);
        a.attributes.push(("href".into(), "/x?a=1&b=\"2\"".into()));
        let tree = root(vec![Node::Element(a)]);

        assert_eq!(
            serialize(&tree, PLAIN),
            r#"<a href="/x?a=1&amp;b=&quot;2&quot;">1 &lt; 2 &amp; 3 &gt; 0 "q"</a>"#
        );
    }

    #[test]
    fn test_attribute_order_is_insertion_order() {
        let mut img = Element::new("img", vec![]);
        for (k, v) in [("width", "10"), ("src", "s"), ("alt", "a")] {
            img.attributes.push((k.into(), v.into()));
        }
        assert_eq!(
            serialize(&Node::Element(img), PLAIN),
            r#"<img width="10" src="s" alt="a" />"#
        );
    }

    #[test]
    fn test_line_breaks_after_blocks() {
        let tree = root(vec![
            Node::element("h1", vec![Node::text("T")]),
            Node::element(
                "ul",
                vec![
                    Node::element("li", vec![Node::text("a")]),
                    Node::element("li", vec![Node::text("b")]),
                ],
            ),
            Node::element("p", vec![Node::element("strong", vec![Node::text("x")])]),
        ]);

        assert_eq!(
            serialize(&tree, BREAKS),
            "<h1>T</h1>\n<ul><li>a</li>\n<li>b</li>\n</ul>\n<p><strong>x</strong></p>"
        );
        assert_eq!(
            serialize(&tree, PLAIN),
            "<h1>T</h1><ul><li>a</li><li>b</li></ul><p><strong>x</strong></p>"
        );
    }

    #[test]
    fn test_no_line_breaks_inside_pre() {
        let tree = root(vec![Node::element(
            "pre",
            vec![Node::element("p", vec![Node::text("x")])],
        )]);
        assert_eq!(serialize(&tree, BREAKS), "<pre><p>x</p></pre>");
    }

    #[test]
    fn test_pre_leading_newline_is_doubled() {
        let tree = Node::element("pre", vec![Node::text("\ncode")]);
        assert_eq!(serialize(&tree, PLAIN), "<pre>\n\ncode</pre>");
    }

    #[test]
    fn test_raw_text_and_comments() {
        let tree = root(vec![
            Node::Comment(" keep ".into()),
            Node::element("style", vec![Node::text("a > b { }")]),
        ]);
        assert_eq!(serialize(&tree, PLAIN), "<!-- keep --><style>a > b { }</style>");
    }
}
