//! Compiled regex patterns used by the cleaning passes.
//!
//! All patterns are compiled once on first use with `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Two or more consecutive non-breaking spaces, as characters or literal entities.
pub static SUCCESSIVE_NBSP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\x{a0}|&nbsp;){2,}").expect("SUCCESSIVE_NBSP regex")
});

/// Runs of ASCII whitespace (non-breaking spaces are content, not layout).
pub static ASCII_WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[ \t\n\r\x0C]+").expect("ASCII_WHITESPACE_RUN regex")
});

/// `width: 1px` inside an inline style.
pub static STYLE_WIDTH_1PX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[;\s])width\s*:\s*1px\b").expect("STYLE_WIDTH_1PX regex")
});

/// `height: 1px` inside an inline style.
pub static STYLE_HEIGHT_1PX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[;\s])height\s*:\s*1px\b").expect("STYLE_HEIGHT_1PX regex")
});

/// Inline-style declarations that take an element out of view.
pub static HIDDEN_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|[;\s])(?:display\s*:\s*none|visibility\s*:\s*hidden|mso-hide\s*:\s*all|(?:max-height|opacity)\s*:\s*0(?:\.0+)?(?:px|em|rem|%)?)\s*(?:!important\s*)?(?:;|$)",
    )
    .expect("HIDDEN_STYLE regex")
});

/// `font-weight: bold` (or a numeric weight of 600 and up) inside an inline style.
pub static BOLD_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[;\s])font-weight\s*:\s*(?:bold|bolder|[6-9]00)\s*(?:!important\s*)?(?:;|$)")
        .expect("BOLD_STYLE regex")
});

/// `<meta charset="...">`
pub static CHARSET_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("CHARSET_META regex")
});
