use serde::Serialize;
use serde_json::{Map, Value};
use tauri::{Runtime, State, WebviewWindow, command};

use crate::{CssInjector, Error, Result, script};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InjectReport {
    pub injected: bool,
    pub bytes: usize,
}

/// Manual stylesheet injection against the live, already-parsed document.
/// Used when the pre-parse path could not run; the in-script reserved-id
/// guard makes repeated calls no-ops. Absent CSS is a soft no-op, execution
/// failure is reported to the caller and never crashes the host.
#[command]
pub async fn inject_css<R: Runtime>(
    window: WebviewWindow<R>,
    state: State<'_, CssInjector>,
) -> Result<InjectReport> {
    let css = state.cached_or_reload_css();

    let (unit, diagnostic) = script::build_css_unit(css.as_deref());
    if let Some(diag) = diagnostic {
        log::warn!("stylesheet encoding degraded to escape fallback: {diag}");
    }

    let Some(unit) = unit else {
        log::debug!("manual injection skipped, no stylesheet available");
        return Ok(InjectReport {
            injected: false,
            bytes: 0,
        });
    };

    window
        .eval(unit.source.as_str())
        .map_err(|err| Error::ScriptExecution(err.to_string()))?;

    Ok(InjectReport {
        injected: true,
        bytes: css.map(|c| c.len()).unwrap_or_default(),
    })
}

/// Re-run the background unit against the live document. Errors when no
/// background color was ever configured.
#[command]
pub async fn inject_background<R: Runtime>(
    window: WebviewWindow<R>,
    state: State<'_, CssInjector>,
) -> Result<InjectReport> {
    let color = state.color().ok_or(Error::NoBackgroundColor)?;

    let Some(unit) = script::build_background_unit(Some(color.hex.as_str())) else {
        return Ok(InjectReport {
            injected: false,
            bytes: 0,
        });
    };

    window
        .eval(unit.source.as_str())
        .map_err(|err| Error::ScriptExecution(err.to_string()))?;

    Ok(InjectReport {
        injected: true,
        bytes: unit.source.len(),
    })
}

/// The cached configuration object, loading it from the bundle first if it
/// was not cached yet. Errors only when no configuration could be loaded at
/// all. The object is returned as loaded, without the injection-time
/// `backgroundColor` augmentation.
#[command]
pub async fn get_config(state: State<'_, CssInjector>) -> Result<Map<String, Value>> {
    state.cached_or_reload_config()
}
