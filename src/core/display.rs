//! Value-mapping display processor.
//!
//! Hosts usually attach their own processor to each field. This one covers the
//! common state-timeline setup: fixed values and numeric ranges mapped to a
//! label and a color, everything else rendered as plain text without color.

use serde::{Deserialize, Serialize};

use super::{DisplayProcessor, DisplayValue, FieldValue};
use crate::render::Color;

/// Text and color a matched value is shown with.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MappingResult {
    pub text: Option<String>,
    pub color: Option<Color>,
}

impl MappingResult {
    #[must_use]
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: Some(text.into()),
            color: Some(color),
        }
    }
}

/// One value mapping rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ValueMapping {
    /// Matches values whose display text equals `value`.
    Value { value: String, result: MappingResult },
    /// Matches numeric values in `[from, to]`; a missing bound is open.
    Range {
        from: Option<f64>,
        to: Option<f64>,
        result: MappingResult,
    },
    /// Matches null values.
    Null { result: MappingResult },
}

impl ValueMapping {
    fn matches(&self, value: &FieldValue) -> Option<&MappingResult> {
        match self {
            Self::Value { value: key, result } => {
                (!value.is_null() && value.to_string() == *key).then_some(result)
            }
            Self::Range { from, to, result } => {
                let numeric = value.as_f64()?;
                let above = from.is_none_or(|from| numeric >= from);
                let below = to.is_none_or(|to| numeric <= to);
                (above && below).then_some(result)
            }
            Self::Null { result } => value.is_null().then_some(result),
        }
    }
}

/// Display processor applying value mappings in order; first match wins.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValueMappings {
    pub mappings: Vec<ValueMapping>,
}

impl ValueMappings {
    #[must_use]
    pub fn new(mappings: Vec<ValueMapping>) -> Self {
        Self { mappings }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>, result: MappingResult) -> Self {
        self.mappings.push(ValueMapping::Value {
            value: value.into(),
            result,
        });
        self
    }

    #[must_use]
    pub fn with_range(mut self, from: Option<f64>, to: Option<f64>, result: MappingResult) -> Self {
        self.mappings.push(ValueMapping::Range { from, to, result });
        self
    }
}

impl DisplayProcessor for ValueMappings {
    fn display(&self, value: &FieldValue) -> DisplayValue {
        let mut display = DisplayValue::text(value.to_string());
        if let Some(numeric) = value.as_f64() {
            display = display.with_numeric(numeric);
        }
        if let Some(result) = self.mappings.iter().find_map(|m| m.matches(value)) {
            if let Some(text) = &result.text {
                display.text.clone_from(text);
            }
            display.color = result.color;
        }
        display
    }
}
