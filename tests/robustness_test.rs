//! Malformed, empty, deep and large inputs.

use std::time::{Duration, Instant};

use html_email_clean::{clean, clean_default, Config};

#[test]
fn empty_and_blank_input() {
    assert_eq!(clean_default(""), "");
    assert_eq!(clean_default("   \n\t "), "");
    assert_eq!(clean_default("<div></div>"), "");
}

#[test]
fn plain_text_passes_through() {
    assert_eq!(clean_default("just text"), "just text");
    assert_eq!(clean_default("a < b & c"), "a &lt; b &amp; c");
}

#[test]
fn malformed_markup_does_not_panic() {
    let inputs = [
        "<p>unclosed",
        "</p></div></span>",
        "<<<>>>",
        "<p <b>>x</p>",
        "<a href=\"unterminated>link</a>",
        "<table><td>cell without row",
        "<li>orphan item",
        "<!-- never closed",
        "<script>no end",
        "<img src=x onerror=alert(1)",
        "&#xD800; &#0; &bogus;",
    ];
    for html in inputs {
        let once = clean_default(html);
        assert!(!once.contains("<script"), "script survived for {html:?}");
        assert!(!once.contains("onerror"), "handler survived for {html:?}");
    }
}

#[test]
fn null_bytes_are_tolerated() {
    let out = clean_default("<p>a\0b</p>\0");
    assert!(out.starts_with("<p>a"));
    assert!(out.contains('b'));
}

#[test]
fn deep_nesting_is_bounded() {
    let depth = 5000;
    let html = format!(
        "{}<b>deep</b>{}",
        "<span>".repeat(depth),
        "</span>".repeat(depth)
    );
    // Formatting below the nesting limit is flattened; the text survives.
    assert_eq!(clean_default(&html), "deep");

    let divs = format!("{}x{}", "<div>".repeat(depth), "</div>".repeat(depth));
    assert_eq!(clean_default(&divs), "x");
}

#[test]
fn large_input_finishes_quickly() {
    let block = r#"<div class="row"><p style="margin:0">Hello <b>world</b>&nbsp;&nbsp;again</p><span></span></div>"#;
    let html = block.repeat(1_000_000 / block.len());

    let start = Instant::now();
    let out = clean(&html, &Config::default());
    let elapsed = start.elapsed();

    assert!(out.starts_with("<p>Hello <strong>world</strong>\u{a0}again</p>"));
    assert!(!out.contains("span"));
    assert!(
        elapsed < Duration::from_secs(30),
        "cleaning 1MB took {elapsed:?}"
    );
}

#[test]
fn unicode_is_preserved() {
    assert_eq!(
        clean_default("<p>Gr\u{fc}\u{df}e \u{1f44b} \u{65e5}\u{672c}</p>"),
        "<p>Gr\u{fc}\u{df}e \u{1f44b} \u{65e5}\u{672c}</p>"
    );
}
