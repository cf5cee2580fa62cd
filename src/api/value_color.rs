use std::sync::Arc;

use tracing::warn;

use crate::core::{DataFrame, FieldValue};
use crate::render::{Color, FALLBACK_COLOR};

/// Resolves the fill color of individual timeline values.
///
/// Holds the unaligned source frames so the original field (and its display
/// processor) can be found from a `(frame, field)` index pair.
#[derive(Debug, Clone)]
pub struct ValueColorResolver {
    frames: Arc<[DataFrame]>,
}

impl ValueColorResolver {
    #[must_use]
    pub fn new(frames: Arc<[DataFrame]>) -> Self {
        Self { frames }
    }

    #[must_use]
    pub fn frames(&self) -> &[DataFrame] {
        &self.frames
    }

    /// Color of `value` in field `field_index` of frame `frame_index`.
    ///
    /// Uses the color of the field's display processor when it yields one and
    /// `FALLBACK_COLOR` otherwise. Unknown indices also fall back.
    #[must_use]
    pub fn resolve(&self, frame_index: usize, field_index: usize, value: &FieldValue) -> Color {
        let Some(field) = self
            .frames
            .get(frame_index)
            .and_then(|frame| frame.field(field_index))
        else {
            warn!(
                frame_index,
                field_index,
                frames = self.frames.len(),
                "value color requested for unknown field"
            );
            return FALLBACK_COLOR;
        };

        field
            .display_value(value)
            .and_then(|display| display.color)
            .unwrap_or(FALLBACK_COLOR)
    }
}
