use base64::{Engine as _, engine::general_purpose::STANDARD};
use tauri_plugin_css_injector::encoding::{encode_base64, escape_js_literal};

const AWKWARD_CSS: &str =
    "body::before { content: 'it\\'s \"quoted\"'; }\r\n.tab {\tcolor: red;\n}\n/* ünïcödé © */";

/// Mirror of the unescaping a JS engine performs on a single-quoted string
/// literal, used to prove the fallback path is byte-for-byte reconstructible.
fn unescape_js_literal(escaped: &str) -> String {
    let mut out = String::with_capacity(escaped.len());
    let mut chars = escaped.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

#[test]
fn base64_round_trip_is_exact() {
    for text in ["", "body { margin: 0; }", AWKWARD_CSS] {
        let encoded = encode_base64(text).unwrap();
        let decoded = STANDARD.decode(encoded.as_bytes()).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), text);
    }
}

#[test]
fn base64_output_is_literal_safe() {
    let encoded = encode_base64(AWKWARD_CSS).unwrap();
    assert!(encoded.is_ascii());
    assert!(!encoded.contains('\''));
    assert!(!encoded.contains('\\'));
    assert!(!encoded.contains('\n'));
}

#[test]
fn escape_round_trip_is_exact() {
    for text in [
        "",
        "plain",
        AWKWARD_CSS,
        "\\'\"\n\r\t",
        "a\\nb", // a literal backslash-n, not a newline
    ] {
        assert_eq!(unescape_js_literal(&escape_js_literal(text)), text);
    }
}

#[test]
fn escaped_output_cannot_terminate_the_literal() {
    let escaped = escape_js_literal(AWKWARD_CSS);
    assert!(!escaped.contains('\n'));
    assert!(!escaped.contains('\r'));
    assert!(!escaped.contains('\t'));

    // Every quote must be preceded by a backslash.
    let chars: Vec<char> = escaped.chars().collect();
    for (i, c) in chars.iter().enumerate() {
        if *c == '\'' {
            assert_eq!(chars[i - 1], '\\');
        }
    }
}
