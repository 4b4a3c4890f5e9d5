//! Early injection of startup artifacts — a build configuration object, a
//! theme background color and a bundled stylesheet — into the webview's
//! document before its HTML parses, so page script sees native-side values
//! from the very first paint and no flash of unstyled content occurs.
//!
//! The host registers the plugin, then applies the scheduled units when it
//! builds its window:
//!
//! ```ignore
//! let injector = app.css_injector();
//! let window = injector
//!     .startup_scheduler()
//!     .apply_to_builder(WebviewWindowBuilder::new(app, "main", WebviewUrl::default()))
//!     .background_color(painter::window_background(injector.color()))
//!     .build()?;
//! painter::apply(&window, injector.color())?;
//! ```

use std::path::PathBuf;

use parking_lot::RwLock;
use serde_json::{Map, Value};
use tauri::{
    Manager, Runtime,
    plugin::{Builder as PluginBuilder, TauriPlugin},
};

pub mod artifacts;
pub mod color;
pub mod commands;
pub mod encoding;
mod error;
pub mod fallback;
pub mod painter;
pub mod scheduler;
pub mod script;

pub use error::{Error, Result};

use artifacts::{ArtifactCache, BundleLayout};
use color::ResolvedColor;
use scheduler::InjectionScheduler;
use script::ScriptNames;

/// Plugin state: the explicitly owned artifact cache, the color resolved at
/// startup and the bundle layout used for on-demand reloads. Construction is
/// pure and lock-guarded; only the final registration and apply steps touch
/// the webview.
pub struct CssInjector {
    cache: RwLock<ArtifactCache>,
    color: Option<ResolvedColor>,
    bundle: BundleLayout,
    names: ScriptNames,
}

impl CssInjector {
    pub fn color(&self) -> Option<&ResolvedColor> {
        self.color.as_ref()
    }

    /// Build the injection units from the current cache and queue them in
    /// execution order. Every artifact-preparation failure is absorbed here
    /// and degrades to that unit being omitted; partial injection always beats
    /// no injection.
    pub fn startup_scheduler(&self) -> InjectionScheduler {
        let (config, css) = {
            let cache = self.cache.read();
            (cache.config(), cache.css())
        };

        let mut scheduler = InjectionScheduler::new();

        match script::build_config_unit(
            config.as_ref(),
            self.color.as_ref().map(|c| c.hex.as_str()),
            &self.names,
        ) {
            Ok(unit) => scheduler.schedule(unit),
            Err(err) => log::warn!("config injection unit omitted: {err}"),
        }

        scheduler.schedule(script::build_background_unit(
            self.color.as_ref().map(|c| c.hex.as_str()),
        ));

        let (css_unit, diagnostic) = script::build_css_unit(css.as_deref());
        if let Some(diag) = diagnostic {
            log::warn!("stylesheet encoding degraded to escape fallback: {diag}");
        }
        scheduler.schedule(css_unit);

        scheduler
    }

    /// Cached CSS, re-read from the bundle when the cache holds nothing
    /// usable. Reload failure degrades to absent.
    pub fn cached_or_reload_css(&self) -> Option<String> {
        if let Some(css) = self.cache.read().css() {
            if !css.trim().is_empty() {
                return Some(css);
            }
        }
        match artifacts::load_css(&self.bundle.css_path()) {
            Ok(css) => {
                self.cache.write().set_css(css.clone());
                Some(css)
            }
            Err(err) => {
                log::warn!("stylesheet reload failed: {err}");
                None
            }
        }
    }

    /// Cached configuration, loading it first if not yet cached. Errors only
    /// when no configuration could be loaded at all.
    pub fn cached_or_reload_config(&self) -> Result<Map<String, Value>> {
        if let Some(config) = self.cache.read().config() {
            return Ok(config);
        }
        match artifacts::load_config(&self.bundle.config_path()) {
            Ok(config) => {
                self.cache.write().set_config(config.clone());
                Ok(config)
            }
            Err(err) => {
                log::warn!("config reload failed: {err}");
                Err(Error::ConfigNotAvailable)
            }
        }
    }
}

/// Extension to [`tauri::App`], [`tauri::AppHandle`] and [`tauri::Window`] to
/// access the injector state.
pub trait CssInjectorExt<R: Runtime> {
    fn css_injector(&self) -> &CssInjector;
}

impl<R: Runtime, T: Manager<R>> CssInjectorExt<R> for T {
    fn css_injector(&self) -> &CssInjector {
        self.state::<CssInjector>().inner()
    }
}

#[derive(Debug, Default)]
pub struct Builder {
    bundle_dir: Option<PathBuf>,
    config_file: Option<String>,
    css_file: Option<String>,
    theme_color: Option<String>,
    background_color: Option<String>,
    splash_background_color: Option<String>,
    names: ScriptNames,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory holding the startup artifacts. Defaults to the app's
    /// resource directory.
    pub fn bundle_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.bundle_dir = Some(dir.into());
        self
    }

    pub fn config_file(mut self, file: impl Into<String>) -> Self {
        self.config_file = Some(file.into());
        self
    }

    pub fn css_file(mut self, file: impl Into<String>) -> Self {
        self.css_file = Some(file.into());
        self
    }

    /// Primary theme-color setting; highest precedence of the three sources.
    pub fn theme_color(mut self, color: impl Into<String>) -> Self {
        self.theme_color = Some(color.into());
        self
    }

    /// Generic background-color setting; consulted when no theme color is set.
    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Splash-screen background color; lowest precedence of the three.
    pub fn splash_background_color(mut self, color: impl Into<String>) -> Self {
        self.splash_background_color = Some(color.into());
        self
    }

    pub fn config_global(mut self, name: impl Into<String>) -> Self {
        self.names.config_global = name.into();
        self
    }

    pub fn legacy_config_global(mut self, name: impl Into<String>) -> Self {
        self.names.legacy_config_global = name.into();
        self
    }

    pub fn ready_event(mut self, name: impl Into<String>) -> Self {
        self.names.ready_event = name.into();
        self
    }

    pub fn build<R: Runtime>(self) -> TauriPlugin<R> {
        PluginBuilder::new("css-injector")
            .invoke_handler(tauri::generate_handler![
                commands::inject_css,
                commands::inject_background,
                commands::get_config,
            ])
            .setup(move |app, _api| {
                let dir = match self.bundle_dir {
                    Some(dir) => dir,
                    None => app.path().resource_dir()?,
                };
                let mut bundle = BundleLayout::new(dir);
                if let Some(file) = self.config_file {
                    bundle.config_file = file;
                }
                if let Some(file) = self.css_file {
                    bundle.css_file = file;
                }

                let (resolved, diagnostic) = color::resolve_from_settings(
                    self.theme_color.as_deref(),
                    self.background_color.as_deref(),
                    self.splash_background_color.as_deref(),
                );
                if let Some(diag) = diagnostic {
                    log::warn!("background color unusable, painting transparent: {diag}");
                }

                let cache = ArtifactCache::load(&bundle);

                app.manage(CssInjector {
                    cache: RwLock::new(cache),
                    color: resolved,
                    bundle,
                    names: self.names,
                });
                Ok(())
            })
            .build()
    }
}

/// Initialize the plugin with the default configuration.
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new().build()
}
