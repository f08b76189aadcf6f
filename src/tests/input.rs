use super::{comment_syntax, parse_file, render_files};
use crate::config::Config;
use std::fs;
use std::path::Path;

fn plain_config() -> Config {
    Config {
        markdown: false,
        highlight: false,
        ..Config::default()
    }
}

#[test]
fn test_syntax_from_extension_or_config() {
    let mut cfg = Config::default();
    assert_eq!(comment_syntax(Path::new("a.py"), &cfg).marker(), "#");
    assert_eq!(comment_syntax(Path::new("a.rs"), &cfg).marker(), "//");
    assert_eq!(comment_syntax(Path::new("Makefile"), &cfg).marker(), "//");

    cfg.comment_marker = Some(";;".to_string());
    assert_eq!(comment_syntax(Path::new("a.py"), &cfg).marker(), ";;");
}

#[test]
fn test_parse_file_serialises() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("demo.py");
    fs::write(&path, "# Greet\nprint('hi')\n").unwrap();

    let parsed = parse_file(&path, &Config::default()).unwrap();
    let json = serde_json::to_value(&parsed).unwrap();

    assert_eq!(
        json,
        serde_json::json!({"sections": [{"comments": "Greet\n", "code": "print('hi')"}]})
    );
}

#[test]
fn test_parse_missing_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(parse_file(&dir.path().join("nope.rs"), &Config::default()).is_err());
}

#[test]
fn test_render_files_joins_fragments() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.rs");
    let b = dir.path().join("b.rs");
    fs::write(&a, "// First\nlet a = 1;").unwrap();
    fs::write(&b, "// Second\nlet b = a < 2;").unwrap();

    let html = render_files(&[&a, &b], &plain_config()).unwrap();

    assert_eq!(html.matches("<div class=\"lit\">").count(), 2);
    assert!(html.find("First").unwrap() < html.find("Second").unwrap());
    assert!(html.contains("let b = a &lt; 2;"));
    assert!(!html.contains("<!DOCTYPE html>"));
}

#[test]
fn test_render_standalone_page() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.rs");
    fs::write(&path, "// *Hello*\nfn main() {}").unwrap();

    let cfg = Config {
        standalone: true,
        ..Config::default()
    };
    let html = render_files(&[&path], &cfg).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>page.rs</title>"));
    assert!(html.contains("<em>Hello</em>"));
    assert!(html.contains("<span"));
}

#[test]
fn test_render_unknown_theme_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("x.rs");
    fs::write(&path, "x();").unwrap();

    let cfg = Config {
        standalone: true,
        theme: "Missing".to_string(),
        ..Config::default()
    };
    assert!(render_files(&[&path], &cfg).is_err());
}
