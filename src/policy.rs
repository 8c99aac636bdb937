//! Tag policy: what happens to each element.
//!
//! `classify` is a pure function of the tag name and the configuration. The
//! rewriter asks once per element and never repeats membership tests itself.

use crate::config::Config;
use crate::node::Element;
use crate::patterns::{BOLD_STYLE, HIDDEN_STYLE, STYLE_HEIGHT_1PX, STYLE_WIDTH_1PX};
use crate::tags::{is_void, TABLE_CELL_TAG_SET, TABLE_STRUCTURE_TAG_SET};

/// Classification outcome for one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Survive as an element with the same tag.
    Keep,
    /// Drop the tag, promote the children to the parent's position.
    Unwrap,
    /// Delete the element and all of its descendants.
    DropSubtree,
    /// Survive as an element under a new tag name.
    Rename(&'static str),
}

/// Classify a tag name.
///
/// Removal is checked first so that an explicitly removed tag is never kept
/// or renamed, even when it also appears in `keep_tags`. Everything not kept
/// unwraps: spans, structural wrappers (`div`, `section`, ...) and unknown
/// tags alike, so their text is never silently deleted. A span listed in
/// `keep_tags` is kept whatever `remove_span_tags` says.
#[must_use]
pub fn classify(tag: &str, config: &Config) -> Disposition {
    if config.remove_with_content.contains(tag) {
        return Disposition::DropSubtree;
    }

    if config.convert_b_to_strong {
        match tag {
            "b" => return Disposition::Rename("strong"),
            "i" => return Disposition::Rename("em"),
            _ => {}
        }
    }

    if config.convert_tables_to_paragraphs {
        if TABLE_STRUCTURE_TAG_SET.contains(tag) {
            return Disposition::Unwrap;
        }
        if TABLE_CELL_TAG_SET.contains(tag) {
            return Disposition::Rename("p");
        }
    }

    if config.keep_tags.contains(tag) {
        return Disposition::Keep;
    }

    Disposition::Unwrap
}

/// Classify an element, taking attribute-driven rules into account.
///
/// Tracking pixels and hidden content (preheader text styled out of view) are
/// dropped with their subtree; everything else defers to [`classify`].
#[must_use]
pub fn classify_element(element: &Element, config: &Config) -> Disposition {
    if config.remove_tracking_pixels && element.tag == "img" && is_tracking_pixel(element) {
        return Disposition::DropSubtree;
    }
    if config.remove_hidden_content && is_hidden(element) {
        return Disposition::DropSubtree;
    }
    classify(&element.tag, config)
}

/// Check if an inline style hides the element (`display:none`, `opacity:0`, ...)
#[must_use]
pub fn is_hidden(element: &Element) -> bool {
    element.attr("style").is_some_and(|style| HIDDEN_STYLE.is_match(style))
}

/// Tag to wrap a surviving element's content in when its style makes it bold.
///
/// The wrapper is whatever `b` classifies to: `strong` when bold is converted,
/// `b` when kept as is, nothing when bold markup would not survive. Voids,
/// lists and table scaffolding never take a wrapper since the parser would
/// move it out again.
#[must_use]
pub fn bold_wrapper(element: &Element, config: &Config) -> Option<&'static str> {
    if !config.convert_bold_styles
        || is_void(&element.tag)
        || TABLE_STRUCTURE_TAG_SET.contains(element.tag.as_str())
        || matches!(element.tag.as_str(), "ul" | "ol" | "colgroup")
        || !element.attr("style").is_some_and(|style| BOLD_STYLE.is_match(style))
    {
        return None;
    }
    match classify("b", config) {
        Disposition::Rename(tag) => Some(tag),
        Disposition::Keep => Some("b"),
        Disposition::Unwrap | Disposition::DropSubtree => None,
    }
}

/// Check if an image is a 1x1 tracking pixel (via attributes or inline style)
#[must_use]
pub fn is_tracking_pixel(element: &Element) -> bool {
    let one = |value: Option<&str>| matches!(value.map(str::trim), Some("1" | "1px"));

    let style = element.attr("style").unwrap_or_default();
    let width_1 = one(element.attr("width")) || STYLE_WIDTH_1PX.is_match(style);
    let height_1 = one(element.attr("height")) || STYLE_HEIGHT_1PX.is_match(style);

    width_1 && height_1
}
