//! Selection of the active display unit system

use crate::units::UnitSystem;
use std::sync::{Arc, RwLock};

/// Holds the unit system a user selected
///
/// The registry is a plain value: pass it (or the [`UnitSystem`] it returns)
/// to whatever formats measurements instead of reading a global.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnitSystemRegistry {
    current: UnitSystem,
}

impl UnitSystemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from the persisted setting value.
    ///
    /// A missing or unparseable value selects Metric.
    pub fn init_from_setting(raw: Option<&str>) -> Self {
        let id = match raw.map(|value| value.trim().parse::<i32>()) {
            Some(Ok(id)) => id,
            Some(Err(e)) => {
                tracing::warn!(setting = ?raw, error = %e, "Unparseable unit system setting, using metric");
                UnitSystem::Metric.id()
            }
            None => UnitSystem::Metric.id(),
        };

        let mut registry = Self::new();
        registry.select(id);
        registry
    }

    /// Select the system with the given id, falling back to Metric
    pub fn select(&mut self, id: i32) {
        self.current = match UnitSystem::from_id(id) {
            Some(system) => {
                tracing::debug!(id, system = %system, "Unit system selected");
                system
            }
            None => {
                tracing::warn!(id, "Unknown unit system id, using metric");
                UnitSystem::Metric
            }
        };
    }

    pub fn current(&self) -> UnitSystem {
        self.current
    }
}

/// Registry shared between a selecting thread and formatting threads
#[derive(Debug, Clone, Default)]
pub struct SharedUnitRegistry {
    inner: Arc<RwLock<UnitSystemRegistry>>,
}

impl SharedUnitRegistry {
    pub fn new(registry: UnitSystemRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    pub fn select(&self, id: i32) {
        let mut guard = match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.select(id);
    }

    pub fn current(&self) -> UnitSystem {
        match self.inner.read() {
            Ok(guard) => guard.current(),
            Err(poisoned) => poisoned.into_inner().current(),
        }
    }
}
