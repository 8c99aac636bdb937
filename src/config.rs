//! Configuration for cleaning.
//!
//! The `Config` struct is the immutable policy record handed to every cleaning
//! call. It is read-only for the duration of a call; hosts that let users edit
//! settings build a new value instead of mutating a shared one.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Key in `keep_attributes` whose attributes are kept on every surviving tag.
pub const ANY_TAG: &str = "*";

/// Configuration options for cleaning.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the email-safe defaults.
///
/// # Example
///
/// ```rust
/// use html_email_clean::Config;
///
/// let config = Config {
///     convert_b_to_strong: false,
///     remove_comments: false,
///     ..Config::default()
/// };
/// assert!(config.remove_empty_tags);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Config {
    /// Tags whose elements survive as elements.
    pub keep_tags: BTreeSet<String>,

    /// Tags whose elements are deleted together with their whole subtree.
    ///
    /// Wins over `keep_tags` when a tag is listed in both.
    pub remove_with_content: BTreeSet<String>,

    /// Per-tag whitelist of attribute names to retain.
    ///
    /// Tags absent from the map retain no attributes. The `"*"` entry applies
    /// to every tag.
    pub keep_attributes: BTreeMap<String, BTreeSet<String>>,

    /// Drop `class` even when whitelisted.
    ///
    /// Default: `true`
    pub remove_classes: bool,

    /// Drop `id` even when whitelisted.
    ///
    /// Default: `true`
    pub remove_ids: bool,

    /// Drop `style` even when whitelisted.
    ///
    /// Default: `true`
    pub remove_inline_styles: bool,

    /// Delete comment nodes.
    ///
    /// Default: `true`
    pub remove_comments: bool,

    /// Rename `<b>` to `<strong>` and `<i>` to `<em>`.
    ///
    /// Default: `true`
    pub convert_b_to_strong: bool,

    /// Collapse runs of non-breaking spaces into one.
    ///
    /// Default: `true`
    pub remove_successive_nbsp: bool,

    /// Unwrap `<span>` elements.
    ///
    /// Unlisted tags unwrap anyway, and a `span` listed in `keep_tags` is kept
    /// either way.
    ///
    /// Default: `true`
    pub remove_span_tags: bool,

    /// Remove elements left without content, repeating until nothing changes.
    ///
    /// Default: `true`
    pub remove_empty_tags: bool,

    /// Emit a line terminator after block elements.
    ///
    /// Default: `true`
    pub preserve_line_breaks: bool,

    /// Unwrap table scaffolding and turn cells into paragraphs.
    ///
    /// Default: `false`
    pub convert_tables_to_paragraphs: bool,

    /// Drop 1x1 tracking-pixel images.
    ///
    /// Default: `true`
    pub remove_tracking_pixels: bool,

    /// Drop elements hidden by their inline style (`display:none`,
    /// `visibility:hidden`, `mso-hide:all`, `max-height:0`, `opacity:0`), such
    /// as email preheader text.
    ///
    /// Default: `true`
    pub remove_hidden_content: bool,

    /// Wrap the content of a surviving element styled `font-weight: bold` in
    /// `<strong>` (or `<b>` when bold is not converted).
    ///
    /// Default: `true`
    pub convert_bold_styles: bool,
}

impl Default for Config {
    fn default() -> Self {
        let keep_tags = [
            "p", "br", "hr",
            "h1", "h2", "h3", "h4", "h5", "h6",
            "strong", "b", "em", "i", "u",
            "a", "img",
            "ul", "ol", "li",
            "table", "tr", "td", "th",
            "blockquote", "pre", "code",
        ];
        let keep_attributes = [
            ("a", &["href"][..]),
            ("img", &["src", "alt", "width", "height"][..]),
        ];

        Self {
            keep_tags: string_set(keep_tags),
            remove_with_content: string_set(["script", "style", "form", "iframe"]),
            keep_attributes: keep_attributes
                .into_iter()
                .map(|(tag, attrs)| (tag.to_string(), string_set(attrs.iter().copied())))
                .collect(),
            remove_classes: true,
            remove_ids: true,
            remove_inline_styles: true,
            remove_comments: true,
            convert_b_to_strong: true,
            remove_successive_nbsp: true,
            remove_span_tags: true,
            remove_empty_tags: true,
            preserve_line_breaks: true,
            convert_tables_to_paragraphs: false,
            remove_tracking_pixels: true,
            remove_hidden_content: true,
            convert_bold_styles: true,
        }
    }
}

impl Config {
    /// Parse a JSON configuration document.
    ///
    /// Every field is optional; missing fields take their defaults. Tag and
    /// attribute names are lowercased to match what the parser produces.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` when the document is not valid JSON or a field
    /// has the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.normalized())
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Lowercase every tag and attribute name.
    #[must_use]
    pub fn normalized(self) -> Self {
        let lower = |set: BTreeSet<String>| -> BTreeSet<String> {
            set.into_iter().map(|s| s.trim().to_ascii_lowercase()).collect()
        };
        let mut keep_attributes: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (tag, attrs) in self.keep_attributes {
            keep_attributes
                .entry(tag.trim().to_ascii_lowercase())
                .or_default()
                .extend(lower(attrs));
        }

        Self {
            keep_tags: lower(self.keep_tags),
            remove_with_content: lower(self.remove_with_content),
            keep_attributes,
            ..self
        }
    }

    /// Tags listed both for keeping and for removal (removal wins).
    #[must_use]
    pub fn conflicting_tags(&self) -> Vec<&str> {
        self.keep_tags
            .intersection(&self.remove_with_content)
            .map(String::as_str)
            .collect()
    }

    /// Whether `attr` is whitelisted for `tag`, either directly or through `"*"`.
    #[must_use]
    pub fn allows_attribute(&self, tag: &str, attr: &str) -> bool {
        [tag, ANY_TAG].iter().any(|key| {
            self.keep_attributes
                .get(*key)
                .is_some_and(|attrs| attrs.contains(attr))
        })
    }
}

fn string_set<'a>(items: impl IntoIterator<Item = &'a str>) -> BTreeSet<String> {
    items.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        for tag in ["p", "br", "hr", "h1", "h6", "strong", "b", "em", "i", "u", "a", "img"] {
            assert!(config.keep_tags.contains(tag), "{tag} should be kept");
        }
        for tag in ["ul", "ol", "li", "table", "tr", "td", "th", "blockquote", "pre", "code"] {
            assert!(config.keep_tags.contains(tag), "{tag} should be kept");
        }
        assert_eq!(config.keep_tags.len(), 26);
        assert_eq!(
            config.remove_with_content,
            string_set(["script", "style", "form", "iframe"])
        );
        assert!(config.allows_attribute("a", "href"));
        assert!(config.allows_attribute("img", "height"));
        assert!(!config.allows_attribute("a", "title"));
        assert!(!config.allows_attribute("p", "href"));

        assert!(config.remove_classes);
        assert!(config.remove_ids);
        assert!(config.remove_inline_styles);
        assert!(config.remove_comments);
        assert!(config.convert_b_to_strong);
        assert!(config.remove_successive_nbsp);
        assert!(config.remove_span_tags);
        assert!(config.remove_empty_tags);
        assert!(config.preserve_line_breaks);
        assert!(!config.convert_tables_to_paragraphs);
        assert!(config.remove_tracking_pixels);
        assert!(config.remove_hidden_content);
        assert!(config.convert_bold_styles);
    }

    #[test]
    fn test_wildcard_attributes() {
        let mut config = Config::default();
        config
            .keep_attributes
            .insert(ANY_TAG.to_string(), string_set(["title"]));

        assert!(config.allows_attribute("p", "title"));
        assert!(config.allows_attribute("a", "title"));
        assert!(config.allows_attribute("a", "href"));
        assert!(!config.allows_attribute("p", "href"));
    }

    #[test]
    fn test_from_json_fills_defaults_and_lowercases() {
        let config = Config::from_json(
            r#"{"keep_tags": ["P", " Strong "], "keep_attributes": {"A": ["HREF"]}, "remove_ids": false}"#,
        )
        .unwrap();

        assert_eq!(config.keep_tags, string_set(["p", "strong"]));
        assert!(config.allows_attribute("a", "href"));
        assert!(!config.remove_ids);
        assert!(config.remove_classes);
        assert_eq!(config.remove_with_content, Config::default().remove_with_content);
    }

    #[test]
    fn test_from_json_rejects_wrong_types() {
        let err = Config::from_json(r#"{"remove_ids": "yes"}"#).unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
        assert!(Config::from_json("not json").is_err());
    }

    #[test]
    fn test_json_round_trip_of_defaults() {
        let json = Config::default().to_json().unwrap();
        assert_eq!(Config::from_json(&json).unwrap(), Config::default());
    }

    #[test]
    fn test_conflicting_tags() {
        let mut config = Config::default();
        assert!(config.conflicting_tags().is_empty());

        config.remove_with_content.insert("b".to_string());
        assert_eq!(config.conflicting_tags(), vec!["b"]);
    }
}
