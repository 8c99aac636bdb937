//! Configuration loading and its effect on cleaning.

#![allow(clippy::unwrap_used)] // unwrap() is appropriate in tests for clear panic messages

use std::fs;

use html_email_clean::{clean, Config, Error};
use tempfile::tempdir;

#[test]
fn default_policy_matches_documented_table() {
    let config = Config::default();
    assert!(config.keep_tags.contains("blockquote"));
    assert!(!config.keep_tags.contains("div"));
    assert!(!config.keep_tags.contains("span"));
    assert!(config.remove_with_content.contains("iframe"));
    assert_eq!(config.keep_attributes.len(), 2);
}

#[test]
fn config_loaded_from_file_is_respected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("clean.json");
    fs::write(
        &path,
        r#"{
            "keep_tags": ["p", "b", "div"],
            "keep_attributes": {"div": ["align"]},
            "convert_b_to_strong": false,
            "preserve_line_breaks": false
        }"#,
    )
    .unwrap();

    let config = Config::from_json(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        clean(r#"<div align="center" class="c"><p><b>x</b><i>y</i></p></div>"#, &config),
        r#"<div align="center"><p><b>x</b>y</p></div>"#
    );
    assert_eq!(config.remove_with_content, Config::default().remove_with_content);
}

#[test]
fn empty_document_gives_defaults() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn invalid_document_is_a_config_error() {
    match Config::from_json(r#"{"keep_tags": "p"}"#) {
        Err(Error::Config(message)) => assert!(!message.is_empty()),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn kept_span_survives_regardless_of_span_flag() {
    assert_eq!(clean("<p><span>x</span></p>", &Config::default()), "<p>x</p>");

    let mut config = Config {
        remove_span_tags: false,
        ..Config::default()
    };
    assert_eq!(clean("<p><span>x</span></p>", &config), "<p>x</p>");

    config.keep_tags.insert("span".to_string());
    assert_eq!(clean("<p><span>x</span></p>", &config), "<p><span>x</span></p>");

    config.remove_span_tags = true;
    assert_eq!(clean("<p><span>x</span></p>", &config), "<p><span>x</span></p>");
}

#[test]
fn same_config_can_be_shared_across_threads() {
    let config = Config::default();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let config = &config;
                scope.spawn(move || clean(&format!("<div><b>{i}</b></div>"), config))
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), format!("<strong>{i}</strong>"));
        }
    });
}
