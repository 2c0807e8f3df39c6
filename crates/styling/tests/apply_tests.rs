//! Tests for immediate and deferred styling.

mod common;

use common::TagRenderer;
use styling::{
    autostyle, autostyle_with, color, color_with, styled, styled_with, NamedColor, Overrides,
    Relative, StyleDef, StyleError,
};

// ============================================================================
// Immediate
// ============================================================================

#[test]
fn styled_passes_def_to_renderer() {
    let out = styled_with(
        &TagRenderer::default(),
        "msg",
        &["white,blue", "bold+italic"],
        &Overrides::new(),
    )
    .unwrap();
    insta::assert_snapshot!(out, @"<fg=white bg=blue style=bold|italic>msg</>");
}

#[test]
fn styled_applies_overrides_last() {
    let out = styled_with(
        &TagRenderer::default(),
        "msg",
        &["red"],
        &Overrides::new().fg(NamedColor::Yellow).clear_bg(),
    )
    .unwrap();
    assert_eq!(out, "<fg=yellow>msg</>");
}

#[test]
fn styled_converts_non_text_items() {
    let renderer = TagRenderer::default();
    let overrides = Overrides::new();
    assert_eq!(
        styled_with(&renderer, &42, &["green"], &overrides).unwrap(),
        "<fg=green>42</>"
    );
    assert_eq!(
        styled_with(&renderer, &Relative::new(3), &["green"], &overrides).unwrap(),
        "<fg=green>+3</>"
    );
}

#[test]
fn styled_does_not_touch_input() {
    let item = String::from("keep");
    let _ = styled(&item, &["red"], &Overrides::new()).unwrap();
    assert_eq!(item, "keep");
}

#[test]
fn styled_surfaces_parse_errors() {
    assert_eq!(
        styled("x", &["purple+glow"], &Overrides::new()).unwrap_err(),
        StyleError::InvalidToken("glow".into())
    );
}

#[test]
fn color_with_renders_parsed_def() {
    let def = StyleDef::parse("black,#ffffff").unwrap();
    assert_eq!(
        color_with(&TagRenderer::default(), "ink", &def),
        "<fg=black bg=#ffffff>ink</>"
    );
}

#[test]
fn color_with_empty_def_passes_through() {
    assert_eq!(color("as is", &StyleDef::new()), "as is");
}

#[test]
fn ansi_output_wraps_text() {
    let out = styled("hi", &["red+bold"], &Overrides::new()).unwrap();
    assert!(out.starts_with("\x1b["), "{:?}", out);
    assert!(out.contains("hi"));
    assert_ne!(out, "hi");
}

// ============================================================================
// Deferred
// ============================================================================

#[test]
fn autostyle_output_is_stable() {
    let f = autostyle(&["orange+underline"], &Overrides::new()).unwrap();
    let first = f(&"same");
    let second = f(&"same");
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn autostyle_matches_styled() {
    let specs = ["cyan,black", "faint"];
    let f = autostyle(&specs, &Overrides::new()).unwrap();
    assert_eq!(f(&"v"), styled("v", &specs, &Overrides::new()).unwrap());
}

#[test]
fn autostyle_parses_once_renders_many() {
    let renderer = TagRenderer::default();
    let f = autostyle_with(renderer.clone(), &["negative"], &Overrides::new()).unwrap();
    let rendered: Vec<String> = [1, 2, 3].iter().map(|n| f(n)).collect();
    assert_eq!(
        rendered,
        [
            "<style=negative>1</>",
            "<style=negative>2</>",
            "<style=negative>3</>"
        ]
    );
    assert_eq!(renderer.calls(), 3);
}

#[test]
fn autostyle_fails_at_definition_time() {
    assert!(autostyle(&["red,green,blue"], &Overrides::new()).is_err());
}

#[test]
fn autostyle_function_can_cross_threads() {
    let f = autostyle(&["bold"], &Overrides::new()).unwrap();
    let handle = std::thread::spawn(move || f(&"threaded"));
    assert!(handle.join().unwrap().contains("threaded"));
}
