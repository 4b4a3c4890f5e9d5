//! The three injection-unit builders. Each unit is a self-contained script
//! that is safe to run more than once in the same document: the style-element
//! units guard on a reserved id, and the config unit only re-assigns the same
//! globals. An absent source artifact yields no unit, not an error.

use serde_json::{Map, Value};

use crate::{
    Error, Result,
    encoding::{self, escape_js_literal},
    fallback,
};

/// Reserved id of the background-color `<style>` element.
pub const BACKGROUND_STYLE_ID: &str = "early-inject-bg";
/// Reserved id of the bundled-stylesheet `<style>` element.
pub const CSS_STYLE_ID: &str = "cdn-injected-styles";

/// Page-visible names published by the config unit.
#[derive(Debug, Clone)]
pub struct ScriptNames {
    /// Primary global binding holding the parsed configuration object.
    pub config_global: String,
    /// Legacy-compatible alias for the same object.
    pub legacy_config_global: String,
    /// `CustomEvent` name dispatched once the configuration is published.
    pub ready_event: String,
}

impl Default for ScriptNames {
    fn default() -> Self {
        Self {
            config_global: "__APP_BUILD_CONFIG__".to_string(),
            legacy_config_global: "AppConfig".to_string(),
            ready_event: "app-config-ready".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectionPhase {
    /// Runs before the document's HTML is parsed, ahead of any page script.
    BeforeParse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameScope {
    /// Main document only; sub-frames never receive the unit, so embedded
    /// frames cannot end up with duplicate globals.
    MainOnly,
}

/// Relative priority of a unit within one pre-parse pass. Config consumers may
/// read the global synchronously at the earliest tick, the background must
/// land before layout, and the stylesheet is the heaviest and least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum UnitKind {
    Config,
    Background,
    Css,
}

#[derive(Debug, Clone)]
pub struct InjectionUnit {
    pub kind: UnitKind,
    pub source: String,
    pub phase: InjectionPhase,
    pub frame_scope: FrameScope,
}

impl InjectionUnit {
    fn before_parse(kind: UnitKind, source: String) -> Self {
        Self {
            kind,
            source,
            phase: InjectionPhase::BeforeParse,
            frame_scope: FrameScope::MainOnly,
        }
    }
}

/// Build the configuration unit: a shallow copy of the cached config with
/// `backgroundColor` merged in (when a color resolved), published under the
/// primary global and the legacy alias, with a one-shot readiness event.
///
/// The payload is escaped, not base64-encoded, because it must stay valid JSON
/// text inside the literal. Serialization failure omits the unit; the caller
/// continues without config injection.
pub fn build_config_unit(
    config: Option<&Map<String, Value>>,
    background_color: Option<&str>,
    names: &ScriptNames,
) -> Result<Option<InjectionUnit>> {
    let Some(config) = config else {
        return Ok(None);
    };

    let mut merged = config.clone();
    if let Some(color) = background_color {
        merged.insert(
            "backgroundColor".to_string(),
            Value::String(color.to_string()),
        );
    }

    let json = serde_json::to_string(&Value::Object(merged))?;
    let payload = escape_js_literal(&json);

    let source = format!(
        r#"(function () {{
    try {{
        var config = JSON.parse('{payload}');
        window.{primary} = config;
        window.{legacy} = config;
        var notify = function () {{
            if (typeof CustomEvent !== 'undefined') {{
                window.dispatchEvent(new CustomEvent('{event}', {{ detail: config }}));
            }}
        }};
        if (document.readyState === 'loading') {{
            document.addEventListener('DOMContentLoaded', notify, {{ once: true }});
        }} else {{
            notify();
        }}
    }} catch (e) {{
        console.error('[css-injector] config injection failed:', e);
    }}
}})();"#,
        payload = payload,
        primary = names.config_global,
        legacy = names.legacy_config_global,
        event = names.ready_event,
    );

    Ok(Some(InjectionUnit::before_parse(UnitKind::Config, source)))
}

/// Build the background unit from an already-resolved color string. Hex
/// validity is the resolver's job upstream; an absent or empty string yields
/// no unit. The script paints the root element inline first, then appends the
/// reserved-id `<style>` unless a prior run already did.
pub fn build_background_unit(color: Option<&str>) -> Option<InjectionUnit> {
    let color = color?.trim();
    if color.is_empty() {
        return None;
    }

    let color = escape_js_literal(color);
    let source = format!(
        r#"(function () {{
    try {{
        var color = '{color}';
        if (document.documentElement) {{
            document.documentElement.style.backgroundColor = color;
        }}
        if (!document.getElementById('{style_id}')) {{
            var style = document.createElement('style');
            style.id = '{style_id}';
            style.textContent = 'html, body, #root, #app, .app-container {{ background-color: {color} !important; background: {color} !important; margin: 0; padding: 0; }}';
            (document.head || document.documentElement).appendChild(style);
        }}
    }} catch (e) {{
        console.error('[css-injector] background injection failed:', e);
    }}
}})();"#,
        color = color,
        style_id = BACKGROUND_STYLE_ID,
    );

    Some(InjectionUnit::before_parse(UnitKind::Background, source))
}

/// Build the stylesheet unit. The primary path embeds the CSS base64-encoded
/// and decodes it in the page; if encoding fails the unit falls back to the
/// escaped raw text and skips the decode step. The returned diagnostic, if
/// any, is the primary path's failure.
pub fn build_css_unit(css: Option<&str>) -> (Option<InjectionUnit>, Option<Error>) {
    let Some(css) = css else {
        return (None, None);
    };
    if css.trim().is_empty() {
        return (None, None);
    }

    let (source, diagnostic) = fallback::attempt(
        || encoding::encode_base64(css).map(|encoded| encoded_css_script(&encoded)),
        || Ok(escaped_css_script(&escape_js_literal(css))),
    );

    (
        source.map(|source| InjectionUnit::before_parse(UnitKind::Css, source)),
        diagnostic,
    )
}

fn encoded_css_script(encoded: &str) -> String {
    format!(
        r#"(function () {{
    try {{
        if (!document.getElementById('{style_id}')) {{
            var encoded = '{encoded}';
            var css = decodeURIComponent(escape(atob(encoded)));
            var style = document.createElement('style');
            style.id = '{style_id}';
            style.textContent = css;
            (document.head || document.documentElement).appendChild(style);
        }}
    }} catch (e) {{
        console.error('[css-injector] stylesheet injection failed:', e);
    }}
}})();"#,
        style_id = CSS_STYLE_ID,
        encoded = encoded,
    )
}

fn escaped_css_script(escaped: &str) -> String {
    format!(
        r#"(function () {{
    try {{
        if (!document.getElementById('{style_id}')) {{
            var style = document.createElement('style');
            style.id = '{style_id}';
            style.textContent = '{escaped}';
            (document.head || document.documentElement).appendChild(style);
        }}
    }} catch (e) {{
        console.error('[css-injector] stylesheet injection failed:', e);
    }}
}})();"#,
        style_id = CSS_STYLE_ID,
        escaped = escaped,
    )
}
