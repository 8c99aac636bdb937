//! # html-email-clean
//!
//! Normalizes arbitrary HTML fragments into a restricted, email-safe markup
//! subset: layout and scripting cruft is removed, presentational attributes are
//! stripped, redundant whitespace artifacts are collapsed and `b`/`i` become
//! `strong`/`em`.
//!
//! ## Quick Start
//!
//! ```rust
//! use html_email_clean::{clean, Config};
//!
//! let html = r#"<div class="wrapper"><script>track()</script><p style="color:red">Hello <b>you</b></p></div>"#;
//! let cleaned = clean(html, &Config::default());
//! assert_eq!(cleaned, "<p>Hello <strong>you</strong></p>");
//! ```
//!
//! ## Pipeline
//!
//! 1. **Parse** the input with a forgiving HTML5 parser ([`dom`]).
//! 2. **Classify** every element as keep, unwrap, drop or rename ([`policy`]).
//! 3. **Rewrite** the tree bottom-up, filtering attributes and repairing
//!    nesting that would not survive a re-parse ([`rewrite`], [`nesting`]).
//! 4. **Post-process**: comments, successive `&nbsp;`, empty tags, whitespace ([`postprocess`]).
//! 5. **Serialize** back to HTML ([`serialize`]).
//!
//! Cleaning never fails: any input string produces an output string.

mod config;
mod error;
mod node;
mod patterns;

/// HTML parsing into the owned node tree.
pub mod dom;

/// Tag catalogs (void, block, wrapper and table tags).
pub mod tags;

/// Tag classification into dispositions.
pub mod policy;

/// Post-order tree rewriting and attribute filtering.
pub mod rewrite;

/// Reshaping of nesting the HTML parser would rearrange.
pub mod nesting;

/// Cleanup passes run after rewriting.
pub mod postprocess;

/// Tree to HTML rendering.
pub mod serialize;

/// Character encoding detection for byte input.
pub mod encoding;

/// Selection-aware cleaning of editor buffers.
pub mod editor;

// Public API - re-exports
pub use config::{Config, ANY_TAG};
pub use error::{Error, Result};
pub use node::{Element, Node, ROOT_TAG};
pub use policy::{classify, Disposition};

use serialize::SerializeOptions;

/// Cleans an HTML fragment with the given configuration.
///
/// # Arguments
///
/// * `html` - The HTML fragment or document as a string slice
/// * `config` - The cleaning policy
///
/// # Returns
///
/// The cleaned HTML. Malformed markup is repaired by the parser, so every
/// input yields an output.
///
/// # Example
///
/// ```rust
/// use html_email_clean::{clean, Config};
///
/// let config = Config {
///     convert_b_to_strong: false,
///     ..Config::default()
/// };
/// assert_eq!(clean("<b>bold</b>", &config), "<b>bold</b>");
/// ```
#[must_use]
pub fn clean(html: &str, config: &Config) -> String {
    log::debug!("cleaning {} bytes of HTML", html.len());
    let conflicts = config.conflicting_tags();
    if !conflicts.is_empty() {
        log::debug!("tags both kept and removed, removal wins: {conflicts:?}");
    }

    let tree = dom::parse(html);
    let tree = rewrite::rewrite(tree, config);
    let tree = postprocess::post_process(tree, config);
    let out = serialize::serialize(
        &tree,
        SerializeOptions {
            line_breaks: config.preserve_line_breaks,
        },
    );

    log::debug!("cleaned output: {} bytes", out.len());
    out
}

/// Cleans an HTML fragment using the default configuration.
///
/// # Example
///
/// ```rust
/// use html_email_clean::clean_default;
///
/// assert_eq!(clean_default("<div><p>Hello</p></div>"), "<p>Hello</p>");
/// ```
#[must_use]
pub fn clean_default(html: &str) -> String {
    clean(html, &Config::default())
}

/// Cleans HTML bytes, detecting their character encoding first.
///
/// The encoding is taken from a byte-order mark or a `<meta>` charset
/// declaration and defaults to UTF-8. Invalid sequences are replaced with
/// U+FFFD rather than causing errors.
///
/// # Example
///
/// ```rust
/// use html_email_clean::{clean_bytes, Config};
///
/// let html = b"<meta charset=\"windows-1252\"><p>Caf\xE9</p>";
/// assert_eq!(clean_bytes(html, &Config::default()), "<p>Caf\u{e9}</p>");
/// ```
#[must_use]
pub fn clean_bytes(html: &[u8], config: &Config) -> String {
    clean(&encoding::decode_html(html), config)
}
