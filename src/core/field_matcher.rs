use serde::{Deserialize, Serialize};

use super::{DataFrame, Field, FieldType};

/// Role a field plays in the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldRole {
    TimeAxis,
    Value,
    Excluded,
}

/// Classifies a field by its declared type.
#[must_use]
pub fn classify_field(field_type: FieldType) -> FieldRole {
    match field_type {
        FieldType::Time => FieldRole::TimeAxis,
        FieldType::Number | FieldType::Boolean | FieldType::String | FieldType::Enum => {
            FieldRole::Value
        }
        FieldType::Trace | FieldType::Geo | FieldType::Other => FieldRole::Excluded,
    }
}

/// Predicate pair handed to the graph host: which fields form the x axis and
/// which become value rows.
#[derive(Debug, Clone, Copy)]
pub struct FieldMatchers {
    pub x: fn(&Field) -> bool,
    pub y: fn(&Field) -> bool,
}

impl FieldMatchers {
    #[must_use]
    pub fn timeline() -> Self {
        Self {
            x: |field| classify_field(field.field_type) == FieldRole::TimeAxis,
            y: |field| classify_field(field.field_type) == FieldRole::Value,
        }
    }

    #[must_use]
    pub fn role(&self, field: &Field) -> FieldRole {
        if (self.x)(field) {
            FieldRole::TimeAxis
        } else if (self.y)(field) {
            FieldRole::Value
        } else {
            FieldRole::Excluded
        }
    }
}

impl Default for FieldMatchers {
    fn default() -> Self {
        Self::timeline()
    }
}

/// Location and role of one field across a frame set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSelection {
    pub frame_index: usize,
    pub field_index: usize,
    pub role: FieldRole,
}

/// Classifies every field of every frame once.
#[must_use]
pub fn select_fields(matchers: &FieldMatchers, frames: &[DataFrame]) -> Vec<FieldSelection> {
    frames
        .iter()
        .enumerate()
        .flat_map(|(frame_index, frame)| {
            frame
                .fields
                .iter()
                .enumerate()
                .map(move |(field_index, field)| FieldSelection {
                    frame_index,
                    field_index,
                    role: matchers.role(field),
                })
        })
        .collect()
}
