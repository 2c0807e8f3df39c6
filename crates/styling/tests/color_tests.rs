//! Tests for color token resolution.

use styling::{parse_rgb, resolve_color, Color, ColorParseError, NamedColor};

// ============================================================================
// Basic Names
// ============================================================================

#[test]
fn basic_names() {
    let names = [
        "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
    ];

    for name in names {
        let parsed = resolve_color(name);
        assert!(
            matches!(parsed, Some(Color::Named(_))),
            "{} resolved to {:?}",
            name,
            parsed
        );
        assert_eq!(parsed.unwrap().to_string(), name);
    }
}

#[test]
fn basic_names_are_not_css_rgb() {
    // "green" is (0, 128, 0) in CSS, but the terminal's own green wins
    assert_eq!(resolve_color("green"), Some(Color::Named(NamedColor::Green)));
    assert_eq!(parse_rgb("green"), Ok((0, 128, 0)));
}

#[test]
fn color_parse_normalizes_case_and_whitespace() {
    assert_eq!(Color::parse("  RED "), Some(Color::Named(NamedColor::Red)));
    assert_eq!(Color::parse("Orange"), Some(Color::Rgb(255, 165, 0)));
}

// ============================================================================
// CSS Names
// ============================================================================

#[test]
fn css_names() {
    let colors = [
        ("silver", (192, 192, 192)),
        ("maroon", (128, 0, 0)),
        ("teal", (0, 128, 128)),
        ("gold", (255, 215, 0)),
        ("cornflowerblue", (100, 149, 237)),
        ("lightgoldenrodyellow", (250, 250, 210)),
    ];

    for (name, (r, g, b)) in colors {
        assert_eq!(resolve_color(name), Some(Color::Rgb(r, g, b)), "{}", name);
    }
}

#[test]
fn css_lookup_ignores_case_and_spaces() {
    assert_eq!(parse_rgb("Light Blue"), Ok((173, 216, 230)));
}

// ============================================================================
// Hex
// ============================================================================

#[test]
fn hex_three_digits() {
    assert_eq!(parse_rgb("#f80"), Ok((255, 136, 0)));
    assert_eq!(parse_rgb("#000"), Ok((0, 0, 0)));
    assert_eq!(parse_rgb("#FFF"), Ok((255, 255, 255)));
}

#[test]
fn hex_six_digits() {
    assert_eq!(parse_rgb("#ff5733"), Ok((255, 87, 51)));
    assert_eq!(resolve_color("#0a0b0c"), Some(Color::Rgb(10, 11, 12)));
}

#[test]
fn hex_requires_prefix() {
    assert_eq!(
        parse_rgb("ff5733"),
        Err(ColorParseError::UnknownName("ff5733".into()))
    );
}

#[test]
fn hex_wrong_length() {
    for input in ["#f", "#ff", "#ffff", "#fffff", "#fffffff"] {
        assert!(
            matches!(parse_rgb(input), Err(ColorParseError::InvalidHex(_))),
            "{} should be invalid",
            input
        );
    }
}

#[test]
fn hex_bad_digits() {
    assert!(matches!(parse_rgb("#xyz"), Err(ColorParseError::InvalidHex(_))));
    assert!(matches!(parse_rgb("#12345g"), Err(ColorParseError::InvalidHex(_))));
}

#[test]
fn hex_error_message() {
    let err = parse_rgb("#12345g").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid hex color: #12345g");
}

// ============================================================================
// Not a Color
// ============================================================================

#[test]
fn non_colors_resolve_to_none() {
    for token in ["bold", "", "rgb(1,2,3)", "#ggg", "bright_red", "42"] {
        assert_eq!(resolve_color(token), None, "{:?}", token);
    }
}

#[test]
fn indexed_colors_display_as_numbers() {
    assert_eq!(Color::Indexed(42).to_string(), "42");
    assert_eq!(Color::from((1, 2, 3)), Color::Rgb(1, 2, 3));
    assert_eq!(Color::from(NamedColor::Blue).to_string(), "blue");
}
