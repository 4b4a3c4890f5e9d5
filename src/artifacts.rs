use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::{Error, Result};

pub const DEFAULT_CONFIG_FILE: &str = "build-config.json";
pub const DEFAULT_CSS_FILE: &str = "assets/cdn-styles.css";

/// Where the startup artifacts live inside the app bundle.
#[derive(Debug, Clone)]
pub struct BundleLayout {
    pub dir: PathBuf,
    pub config_file: String,
    pub css_file: String,
}

impl BundleLayout {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            config_file: DEFAULT_CONFIG_FILE.to_string(),
            css_file: DEFAULT_CSS_FILE.to_string(),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.join(&self.config_file)
    }

    pub fn css_path(&self) -> PathBuf {
        self.dir.join(&self.css_file)
    }
}

/// Process-lifetime cache for the loaded startup artifacts. One instance is
/// created at plugin setup and owned by the managed state; reads may come from
/// any thread (manual injection re-triggers), so the owner wraps it in a lock.
#[derive(Debug, Default, Clone)]
pub struct ArtifactCache {
    config: Option<Map<String, Value>>,
    css: Option<String>,
}

impl ArtifactCache {
    /// Populate the cache from the bundle. Either artifact failing to load is
    /// absorbed here: it is logged and cached as absent, never an abort.
    pub fn load(layout: &BundleLayout) -> Self {
        let mut cache = Self::default();

        match load_config(&layout.config_path()) {
            Ok(config) => {
                log::debug!("loaded build config ({} top-level keys)", config.len());
                cache.config = Some(config);
            }
            Err(err) => log::warn!("build config unavailable: {err}"),
        }

        match load_css(&layout.css_path()) {
            Ok(css) => {
                log::debug!("loaded bundled stylesheet ({} bytes)", css.len());
                cache.css = Some(css);
            }
            Err(err) => log::warn!("bundled stylesheet unavailable: {err}"),
        }

        cache
    }

    pub fn config(&self) -> Option<Map<String, Value>> {
        self.config.clone()
    }

    pub fn css(&self) -> Option<String> {
        self.css.clone()
    }

    pub fn set_config(&mut self, config: Map<String, Value>) {
        self.config = Some(config);
    }

    pub fn set_css(&mut self, css: String) {
        self.css = Some(css);
    }
}

/// Read the configuration artifact; the top-level JSON value must be an
/// object.
pub fn load_config(path: &Path) -> Result<Map<String, Value>> {
    let text = read_artifact(path)?;
    let value: Value = serde_json::from_str(&text).map_err(|err| Error::ArtifactLoad {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(Error::ArtifactLoad {
            path: path.display().to_string(),
            reason: "top-level JSON value is not an object".to_string(),
        }),
    }
}

/// Read the stylesheet artifact as opaque UTF-8 text.
pub fn load_css(path: &Path) -> Result<String> {
    read_artifact(path)
}

fn read_artifact(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|err| Error::ArtifactLoad {
        path: path.display().to_string(),
        reason: err.to_string(),
    })
}
