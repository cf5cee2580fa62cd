use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// How hover/cursor state is shared with sibling panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DashboardCursorSync {
    #[default]
    Off,
    Crosshair,
    Tooltip,
}

/// Handle to the host's cross-panel event bus.
///
/// The adapter never publishes on it; it only forwards the handle into the
/// plot config so hover and zoom events reach sibling panels. Clones share
/// the same bus.
#[derive(Debug, Clone)]
pub struct EventBus {
    scope: Arc<str>,
}

impl EventBus {
    #[must_use]
    pub fn new(scope: impl Into<Arc<str>>) -> Self {
        Self {
            scope: scope.into(),
        }
    }

    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Whether both handles point at the same bus instance.
    #[must_use]
    pub fn same_bus(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.scope, &other.scope)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new("panel")
    }
}

/// Ambient rendering context supplied by the host on every render.
#[derive(Debug, Clone, Default)]
pub struct PanelContext {
    pub event_bus: EventBus,
    pub sync: DashboardCursorSync,
}

impl PanelContext {
    #[must_use]
    pub fn new(event_bus: EventBus, sync: DashboardCursorSync) -> Self {
        Self { event_bus, sync }
    }
}
