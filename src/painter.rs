//! Native paint-time background. The window's own background property is set
//! so the first composited frame already matches the theme color, before any
//! script (including the injection units) has executed. A failed color
//! resolution paints fully transparent rather than leaving a stale value.

use tauri::{Runtime, WebviewWindow, utils::config::Color};

use crate::{Result, color::ResolvedColor};

/// The native color to paint: the resolved color, or fully transparent when
/// resolution failed or nothing was configured.
pub fn window_background(color: Option<&ResolvedColor>) -> Color {
    color
        .map(|c| c.rgba.to_window_color())
        .unwrap_or(Color(0, 0, 0, 0))
}

/// Apply the background to a live window. Webview mutation belongs to the
/// UI-owning context, so the call is marshaled onto the main thread; the
/// result of the dispatch is reported, the paint itself is fire-and-forget.
pub fn apply<R: Runtime>(window: &WebviewWindow<R>, color: Option<&ResolvedColor>) -> Result<()> {
    let background = window_background(color);
    let target = window.clone();
    window.run_on_main_thread(move || {
        if let Err(err) = target.set_background_color(Some(background)) {
            log::error!("failed to set native window background: {err}");
        }
    })?;
    Ok(())
}
