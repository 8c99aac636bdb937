//! Tag catalogs used by the policy, the post-processors and the serializer.
//!
//! Provides both arrays (for iteration and defaults) and `HashSets` (for O(1) lookup).

use std::collections::HashSet;
use std::sync::LazyLock;

// === Tag Lists (arrays for iteration) ===

/// Table scaffolding unwrapped when tables are converted to paragraphs.
pub static TABLE_STRUCTURE_TAGS: [&str; 5] = ["table", "thead", "tbody", "tfoot", "tr"];

/// Table cells renamed to paragraphs when tables are converted.
pub static TABLE_CELL_TAGS: [&str; 2] = ["td", "th"];

/// Elements that are content-free on purpose and survive empty-tag pruning.
pub static CONTENT_FREE_TAGS: [&str; 3] = ["br", "hr", "img"];

/// HTML void elements: never have children, always self-close.
pub static VOID_TAGS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

/// Elements whose text is emitted verbatim by the serializer.
pub static RAW_TEXT_TAGS: [&str; 8] = [
    "script", "style", "xmp", "iframe", "noembed", "noframes", "plaintext", "noscript",
];

/// Elements whose contents keep their whitespace exactly.
pub static PREFORMATTED_TAGS: [&str; 3] = ["pre", "textarea", "listing"];

/// Elements followed by a line terminator when line breaks are preserved.
pub static LINE_BREAK_AFTER_TAGS: [&str; 13] = [
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "li", "ul", "ol", "tr", "table", "blockquote",
];

/// Block-level elements: whitespace touching their boundaries is insignificant.
pub static BLOCK_TAGS: [&str; 38] = [
    "address", "article", "aside", "blockquote", "body", "dd", "details", "dialog",
    "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form",
    "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "html", "li", "main", "nav",
    "ol", "p", "pre", "section", "table", "tbody", "td", "tfoot", "th", "thead",
];

/// Heading elements; opening one directly inside another closes the outer one.
pub static HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Start tags that implicitly close an open `<p>`.
///
/// `table` is absent: markup without a doctype is parsed in quirks mode,
/// where a table nests inside a paragraph.
pub static PARAGRAPH_CLOSING_TAGS: [&str; 39] = [
    "address", "article", "aside", "blockquote", "center", "dd", "details", "dialog",
    "dir", "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form",
    "h1", "h2", "h3", "h4", "h5", "h6", "header", "hgroup", "hr", "li", "listing",
    "main", "menu", "nav", "ol", "p", "plaintext", "pre", "section", "summary", "ul", "xmp",
];

// === Tag Sets (HashSets for O(1) lookup) ===

/// `HEADING_TAGS` as a `HashSet`
pub static HEADING_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| HEADING_TAGS.into_iter().collect());

/// `PARAGRAPH_CLOSING_TAGS` as a `HashSet`
pub static PARAGRAPH_CLOSING_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| PARAGRAPH_CLOSING_TAGS.into_iter().collect());


/// `TABLE_STRUCTURE_TAGS` as a `HashSet`
pub static TABLE_STRUCTURE_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| TABLE_STRUCTURE_TAGS.into_iter().collect());

/// `TABLE_CELL_TAGS` as a `HashSet`
pub static TABLE_CELL_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| TABLE_CELL_TAGS.into_iter().collect());

/// Tags exempt from empty-tag pruning: the content-free set plus every void element.
pub static PRUNE_EXEMPT_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    CONTENT_FREE_TAGS.into_iter().chain(VOID_TAGS).collect()
});

/// `VOID_TAGS` as a `HashSet`
pub static VOID_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| VOID_TAGS.into_iter().collect());

/// `RAW_TEXT_TAGS` as a `HashSet`
pub static RAW_TEXT_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| RAW_TEXT_TAGS.into_iter().collect());

/// `PREFORMATTED_TAGS` as a `HashSet`
pub static PREFORMATTED_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| PREFORMATTED_TAGS.into_iter().collect());

/// `LINE_BREAK_AFTER_TAGS` as a `HashSet`
pub static LINE_BREAK_AFTER_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| LINE_BREAK_AFTER_TAGS.into_iter().collect());

/// `BLOCK_TAGS` as a `HashSet`, plus `tr` which also delimits table text.
pub static BLOCK_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| BLOCK_TAGS.into_iter().chain(["tr"]).collect());

// === Helper Functions ===

/// Check if a tag is a heading
#[inline]
#[must_use]
pub fn is_heading(tag: &str) -> bool {
    HEADING_TAG_SET.contains(tag)
}

/// Check if the parser keeps `child` as a direct child of an open `parent`.
///
/// False when opening `child` would close `parent` first: a block inside a
/// paragraph, a heading inside a heading, a list item inside a list item, a
/// link inside a link.
#[must_use]
pub fn nests_directly(parent: &str, child: &str) -> bool {
    match parent {
        "p" => !PARAGRAPH_CLOSING_TAG_SET.contains(child),
        "li" => child != "li",
        "dd" | "dt" => !matches!(child, "dd" | "dt"),
        "a" => child != "a",
        _ if is_heading(parent) => !is_heading(child),
        _ => true,
    }
}

/// Check if the parser keeps `child` inside a table-level `container`
/// (`table`, a row group or `tr`) rather than moving it in front of the table.
#[must_use]
pub fn allowed_in_table(container: &str, child: &str) -> bool {
    let common = matches!(child, "script" | "style" | "template");
    match container {
        "table" => {
            common
                || matches!(
                    child,
                    "caption" | "colgroup" | "thead" | "tbody" | "tfoot" | "tr" | "td" | "th"
                )
        }
        "thead" | "tbody" | "tfoot" => common || matches!(child, "tr" | "td" | "th"),
        "tr" => common || matches!(child, "td" | "th"),
        _ => true,
    }
}

/// Check if a tag is a void element
#[inline]
#[must_use]
pub fn is_void(tag: &str) -> bool {
    VOID_TAG_SET.contains(tag)
}

/// Check if a tag is block-level
#[inline]
#[must_use]
pub fn is_block(tag: &str) -> bool {
    BLOCK_TAG_SET.contains(tag)
}

/// Check if a tag's text content is serialized without escaping
#[inline]
#[must_use]
pub fn is_raw_text(tag: &str) -> bool {
    RAW_TEXT_TAG_SET.contains(tag)
}

/// Check if a tag preserves its whitespace
#[inline]
#[must_use]
pub fn is_preformatted(tag: &str) -> bool {
    PREFORMATTED_TAG_SET.contains(tag)
}
