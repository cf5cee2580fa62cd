use serde::{Deserialize, Serialize};

use super::Color;

/// Where the legend sits relative to the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LegendPlacement {
    #[default]
    Bottom,
    Right,
}

/// How legend entries are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LegendDisplayMode {
    #[default]
    List,
    Table,
    Hidden,
}

/// Legend display options supplied by the panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendOptions {
    #[serde(default = "default_show_legend")]
    pub show_legend: bool,
    #[serde(default)]
    pub display_mode: LegendDisplayMode,
    #[serde(default)]
    pub placement: LegendPlacement,
    /// Legend width in pixels when placed on the right.
    #[serde(default)]
    pub width: Option<f64>,
    /// Reducer names shown next to each entry (`"last"`, `"max"`, ...).
    #[serde(default)]
    pub calcs: Vec<String>,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            show_legend: default_show_legend(),
            display_mode: LegendDisplayMode::default(),
            placement: LegendPlacement::default(),
            width: None,
            calcs: Vec::new(),
        }
    }
}

impl LegendOptions {
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            show_legend: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_placement(mut self, placement: LegendPlacement) -> Self {
        self.placement = placement;
        self
    }

    #[must_use]
    pub fn with_display_mode(mut self, display_mode: LegendDisplayMode) -> Self {
        self.display_mode = display_mode;
        self
    }
}

fn default_show_legend() -> bool {
    true
}

/// One series or category entry in the legend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendItem {
    pub label: String,
    pub color: Color,
    #[serde(default = "default_y_axis")]
    pub y_axis: u32,
    #[serde(default)]
    pub disabled: bool,
    /// Name of the field the entry was derived from, if any.
    #[serde(default)]
    pub field_name: Option<String>,
}

impl LegendItem {
    #[must_use]
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
            y_axis: default_y_axis(),
            disabled: false,
            field_name: None,
        }
    }

    #[must_use]
    pub fn with_field_name(mut self, field_name: impl Into<String>) -> Self {
        self.field_name = Some(field_name.into());
        self
    }
}

fn default_y_axis() -> u32 {
    1
}

/// Legend handed to the host's legend widget.
///
/// Timeline legends are always read-only: entries cannot toggle series
/// visibility from this view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendElement {
    pub placement: LegendPlacement,
    pub display_mode: LegendDisplayMode,
    pub items: Vec<LegendItem>,
    pub readonly: bool,
}
