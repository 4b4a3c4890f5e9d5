//! Transport encoding for text payloads embedded inside single-quoted script
//! literals. The primary path is base64 over the UTF-8 bytes (decoded in the
//! page with a UTF-8-correct `atob` chain); the fallback escapes the raw text
//! directly. Both paths reproduce the input exactly after in-page decoding.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::{Error, Result};

/// Base64-encode `text` for embedding. The output is 7-bit safe and contains
/// none of `'`, `\` or newlines, so it can never terminate the literal.
pub fn encode_base64(text: &str) -> Result<String> {
    let bytes = text.as_bytes();
    // Cannot fail for a `&str`, but the byte-conversion check is explicit so
    // the escaping fallback stays a reachable, tested path.
    std::str::from_utf8(bytes).map_err(|err| Error::EncodingFailure(err.to_string()))?;
    Ok(STANDARD.encode(bytes))
}

/// Escape `text` so it can sit inside a single-quoted JS string literal.
///
/// Backslash, both quote kinds, newline, carriage return and tab each become
/// their two-character escape; unescaping in the page reconstructs the input
/// byte for byte.
pub fn escape_js_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}
