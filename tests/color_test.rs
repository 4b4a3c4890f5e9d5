use tauri::utils::config::Color;
use tauri_plugin_css_injector::{
    Error,
    color::{ResolvedColor, Rgba, resolve_from_settings},
    painter,
};

#[test]
fn parse_six_digit_hex_is_opaque() {
    let color = Rgba::parse("#336699").unwrap();
    assert_eq!(color.red, 0.2);
    assert_eq!(color.green, 0.4);
    assert_eq!(color.blue, 0.6);
    assert_eq!(color.alpha, 1.0);
}

#[test]
fn parse_eight_digit_hex_scales_alpha() {
    let color = Rgba::parse("#00000080").unwrap();
    assert_eq!(color.red, 0.0);
    assert!((color.alpha - 0.502).abs() < 1e-3);

    let opaque = Rgba::parse("FFFFFFFF").unwrap();
    assert_eq!(opaque.alpha, 1.0);
}

#[test]
fn parse_accepts_whitespace_and_missing_hash() {
    let color = Rgba::parse("  FF0000  ").unwrap();
    assert_eq!(color.red, 1.0);
    assert_eq!(color.green, 0.0);
    assert_eq!(color.blue, 0.0);
}

#[test]
fn parse_rejects_malformed_input() {
    for raw in [
        "", "#", "zzzzzz", "#GGGGGG", "#12345", "#1234567", "#123456789", "#12 456", "red",
    ] {
        let result = Rgba::parse(raw);
        assert!(
            matches!(result, Err(Error::InvalidColorFormat(_))),
            "expected InvalidColorFormat for {raw:?}"
        );
    }
}

#[test]
fn window_color_conversion() {
    let color = Rgba::parse("#336699").unwrap();
    assert_eq!(color.to_window_color(), Color(51, 102, 153, 255));
    assert_eq!(Rgba::TRANSPARENT.to_window_color(), Color(0, 0, 0, 0));
}

#[test]
fn resolved_color_normalizes_hex_text() {
    let color = ResolvedColor::parse("  FF0000 ").unwrap();
    assert_eq!(color.hex, "#FF0000");

    let color = ResolvedColor::parse("#2E303D").unwrap();
    assert_eq!(color.hex, "#2E303D");
}

#[test]
fn settings_precedence_first_non_empty_wins() {
    let (color, diag) = resolve_from_settings(Some("#112233"), Some("#445566"), None);
    assert_eq!(color.unwrap().hex, "#112233");
    assert!(diag.is_none());

    // Empty settings are skipped, not treated as a match.
    let (color, _) = resolve_from_settings(Some("   "), None, Some("#445566"));
    assert_eq!(color.unwrap().hex, "#445566");

    let (color, diag) = resolve_from_settings(None, None, None);
    assert!(color.is_none());
    assert!(diag.is_none());
}

#[test]
fn malformed_winner_yields_no_color_with_diagnostic() {
    // The first non-empty setting wins even when malformed; lower-precedence
    // settings must not be consulted afterwards.
    let (color, diag) = resolve_from_settings(Some("zzzzzz"), Some("#445566"), None);
    assert!(color.is_none());
    assert!(matches!(diag, Some(Error::InvalidColorFormat(_))));
}

#[test]
fn painter_falls_back_to_transparent() {
    assert_eq!(painter::window_background(None), Color(0, 0, 0, 0));

    let resolved = ResolvedColor::parse("#FF0000").unwrap();
    assert_eq!(
        painter::window_background(Some(&resolved)),
        Color(255, 0, 0, 255)
    );
}
