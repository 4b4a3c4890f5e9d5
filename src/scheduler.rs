//! Orders the built injection units and registers them with the webview's
//! pre-parse pipeline. Initialization scripts run in registration order on the
//! main frame, strictly before any page script, which is the one ordering
//! contract this crate exists to satisfy.

use tauri::{Manager, Runtime, WebviewWindowBuilder};

use crate::script::{InjectionUnit, UnitKind};

/// Collects zero to three units and hands them to the webview in priority
/// order: config, then background, then stylesheet. Registration is additive
/// and happens once per webview instance; re-initialization means building a
/// fresh webview, not mutating an existing registration set.
#[derive(Debug, Default)]
pub struct InjectionScheduler {
    units: Vec<InjectionUnit>,
}

impl InjectionScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a unit if one was built. Insertion order does not matter; units
    /// are kept sorted by their fixed priority.
    pub fn schedule(&mut self, unit: Option<InjectionUnit>) {
        if let Some(unit) = unit {
            log::debug!(
                "scheduled {:?} injection unit ({} bytes)",
                unit.kind,
                unit.source.len()
            );
            self.units.push(unit);
            self.units.sort_by_key(|u| u.kind);
        }
    }

    /// The queued units in execution order.
    pub fn units(&self) -> &[InjectionUnit] {
        &self.units
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Register every unit on the window builder, one initialization script
    /// per unit, in order. With no units the builder is returned untouched and
    /// the webview loads normally.
    pub fn apply_to_builder<'a, R: Runtime, M: Manager<R>>(
        &self,
        mut builder: WebviewWindowBuilder<'a, R, M>,
    ) -> WebviewWindowBuilder<'a, R, M> {
        for unit in &self.units {
            builder = builder.initialization_script(unit.source.as_str());
        }
        builder
    }

    /// Concatenate the units into one ordered script, for hosts that register
    /// a single startup script themselves. `None` when nothing was scheduled.
    pub fn into_startup_script(self) -> Option<String> {
        if self.units.is_empty() {
            return None;
        }
        Some(
            self.units
                .into_iter()
                .map(|unit| unit.source)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }

    /// Whether a unit of the given kind has been scheduled.
    pub fn has(&self, kind: UnitKind) -> bool {
        self.units.iter().any(|unit| unit.kind == kind)
    }
}
