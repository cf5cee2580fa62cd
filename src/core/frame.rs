use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Declared type of a frame column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    Time,
    Number,
    String,
    Boolean,
    Enum,
    Trace,
    Geo,
    Other,
}

/// Raw cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
}

impl FieldValue {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Boolean(value) => Some(f64::from(u8::from(*value))),
            Self::Null | Self::String(_) => None,
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::String(value) => f.write_str(value),
        }
    }
}

/// Formatted representation of one value, as produced by a display processor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DisplayValue {
    pub text: String,
    pub numeric: Option<f64>,
    pub color: Option<Color>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

impl DisplayValue {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_numeric(mut self, numeric: f64) -> Self {
        self.numeric = Some(numeric);
        self
    }
}

/// Turns raw values of a field into display text and color.
///
/// Color modes, thresholds and value mappings all live behind this
/// capability; the adapter only asks for the resulting color.
pub trait DisplayProcessor: Send + Sync {
    fn display(&self, value: &FieldValue) -> DisplayValue;
}

impl<F> DisplayProcessor for F
where
    F: Fn(&FieldValue) -> DisplayValue + Send + Sync,
{
    fn display(&self, value: &FieldValue) -> DisplayValue {
        self(value)
    }
}

/// Named, typed column of a frame.
#[derive(Clone)]
pub struct Field {
    pub name: String,
    pub field_type: FieldType,
    pub values: Vec<FieldValue>,
    pub labels: IndexMap<String, String>,
    pub display: Option<Arc<dyn DisplayProcessor>>,
}

impl Field {
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: FieldType, values: Vec<FieldValue>) -> Self {
        Self {
            name: name.into(),
            field_type,
            values,
            labels: IndexMap::new(),
            display: None,
        }
    }

    /// Time field with epoch-millisecond values.
    #[must_use]
    pub fn time(name: impl Into<String>, millis: impl IntoIterator<Item = i64>) -> Self {
        let values = millis
            .into_iter()
            .map(|ms| FieldValue::Number(ms as f64))
            .collect();
        Self::new(name, FieldType::Time, values)
    }

    #[must_use]
    pub fn with_display(mut self, display: impl DisplayProcessor + 'static) -> Self {
        self.display = Some(Arc::new(display));
        self
    }

    #[must_use]
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Runs the field's display processor, if it has one.
    #[must_use]
    pub fn display_value(&self, value: &FieldValue) -> Option<DisplayValue> {
        self.display.as_ref().map(|display| display.display(value))
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("field_type", &self.field_type)
            .field("values", &self.values.len())
            .field("labels", &self.labels)
            .field("display", &self.display.is_some())
            .finish()
    }
}

/// Table of named, typed columns sharing a row index.
#[derive(Debug, Clone, Default)]
pub struct DataFrame {
    pub name: Option<String>,
    pub fields: Vec<Field>,
}

impl DataFrame {
    #[must_use]
    pub fn new(fields: Vec<Field>) -> Self {
        Self { name: None, fields }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Row count, taken from the first field.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.first().map_or(0, Field::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    /// First field declared as time, if any.
    #[must_use]
    pub fn time_field(&self) -> Option<&Field> {
        self.fields
            .iter()
            .find(|field| field.field_type == FieldType::Time)
    }
}
