use serde::{Deserialize, Serialize};

use crate::core::TimeZoneOption;
use crate::error::{TimelineError, TimelineResult};
use crate::render::{LegendItem, LegendOptions};

/// Option names whose change requires rebuilding the plot config.
pub const PROPS_TO_DIFF: [&str; 6] = [
    "rowHeight",
    "colWidth",
    "showValue",
    "mergeValues",
    "alignValue",
    "tooltip",
];

/// How rows are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimelineMode {
    /// One bar per state change (state timeline).
    #[default]
    Changes,
    /// One cell per sample (status history).
    Samples,
}

/// When value text is drawn inside bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VisibilityMode {
    #[default]
    Auto,
    Never,
    Always,
}

/// Horizontal placement of value text inside a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimelineValueAlignment {
    Left,
    #[default]
    Center,
    Right,
}

/// Which series the tooltip shows on hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TooltipDisplayMode {
    #[default]
    Single,
    Multi,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TooltipOptions {
    #[serde(default)]
    pub mode: TooltipDisplayMode,
}

impl TooltipOptions {
    #[must_use]
    pub fn new(mode: TooltipDisplayMode) -> Self {
        Self { mode }
    }
}

/// Per-render display options supplied by the panel.
///
/// Serializable with camelCase names so panels can persist/load options
/// as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineOptions {
    #[serde(default)]
    pub mode: TimelineMode,
    /// Fraction of the row band filled by bars, in `[0, 1]`.
    #[serde(default = "default_row_height")]
    pub row_height: Option<f64>,
    /// Fraction of the sample slot filled by cells, in `[0, 1]`.
    #[serde(default = "default_col_width")]
    pub col_width: Option<f64>,
    #[serde(default)]
    pub show_value: VisibilityMode,
    #[serde(default)]
    pub align_value: Option<TimelineValueAlignment>,
    #[serde(default)]
    pub merge_values: Option<bool>,
    #[serde(default)]
    pub tooltip: TooltipOptions,
    #[serde(default)]
    pub legend: Option<LegendOptions>,
    #[serde(default)]
    pub time_zone: TimeZoneOption,
    #[serde(default)]
    pub legend_items: Option<Vec<LegendItem>>,
}

impl Default for TimelineOptions {
    fn default() -> Self {
        Self {
            mode: TimelineMode::default(),
            row_height: default_row_height(),
            col_width: default_col_width(),
            show_value: VisibilityMode::default(),
            align_value: None,
            merge_values: None,
            tooltip: TooltipOptions::default(),
            legend: None,
            time_zone: TimeZoneOption::default(),
            legend_items: None,
        }
    }
}

impl TimelineOptions {
    #[must_use]
    pub fn new(mode: TimelineMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_row_height(mut self, row_height: Option<f64>) -> Self {
        self.row_height = row_height;
        self
    }

    #[must_use]
    pub fn with_col_width(mut self, col_width: Option<f64>) -> Self {
        self.col_width = col_width;
        self
    }

    #[must_use]
    pub fn with_show_value(mut self, show_value: VisibilityMode) -> Self {
        self.show_value = show_value;
        self
    }

    #[must_use]
    pub fn with_align_value(mut self, align_value: TimelineValueAlignment) -> Self {
        self.align_value = Some(align_value);
        self
    }

    #[must_use]
    pub fn with_merge_values(mut self, merge_values: bool) -> Self {
        self.merge_values = Some(merge_values);
        self
    }

    #[must_use]
    pub fn with_tooltip_mode(mut self, mode: TooltipDisplayMode) -> Self {
        self.tooltip = TooltipOptions::new(mode);
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: LegendOptions) -> Self {
        self.legend = Some(legend);
        self
    }

    #[must_use]
    pub fn with_legend_items(mut self, items: Vec<LegendItem>) -> Self {
        self.legend_items = Some(items);
        self
    }

    #[must_use]
    pub fn with_time_zone(mut self, time_zone: impl Into<TimeZoneOption>) -> Self {
        self.time_zone = time_zone.into();
        self
    }

    /// Rejects ratios outside `[0, 1]`.
    pub fn validate(&self) -> TimelineResult<()> {
        for (value, name) in [(self.row_height, "rowHeight"), (self.col_width, "colWidth")] {
            if let Some(value) = value {
                if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                    return Err(TimelineError::InvalidOptions(format!(
                        "`{name}` must be finite and in [0, 1], got {value}"
                    )));
                }
            }
        }
        if let Some(width) = self.legend.as_ref().and_then(|legend| legend.width) {
            if !width.is_finite() || width <= 0.0 {
                return Err(TimelineError::InvalidOptions(
                    "legend width must be finite and > 0".to_owned(),
                ));
            }
        }
        if let Some(items) = &self.legend_items {
            for item in items {
                item.color.validate()?;
            }
        }
        Ok(())
    }

    /// Parses options from JSON and validates them.
    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        let options: Self = serde_json::from_str(input).map_err(|e| {
            TimelineError::InvalidOptions(format!("failed to parse timeline options: {e}"))
        })?;
        options.validate()?;
        Ok(options)
    }

    pub fn to_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            TimelineError::InvalidOptions(format!("failed to serialize timeline options: {e}"))
        })
    }

    /// Names of the render-relevant options that differ between `self` and `next`.
    #[must_use]
    pub fn changed_render_props(&self, next: &Self) -> Vec<&'static str> {
        let changed = [
            self.row_height != next.row_height,
            self.col_width != next.col_width,
            self.show_value != next.show_value,
            self.merge_values != next.merge_values,
            self.align_value != next.align_value,
            self.tooltip != next.tooltip,
        ];
        PROPS_TO_DIFF
            .into_iter()
            .zip(changed)
            .filter_map(|(name, changed)| changed.then_some(name))
            .collect()
    }

    /// Whether the plot config must be rebuilt when moving to `next`.
    #[must_use]
    pub fn diff_relevant_changed(&self, next: &Self) -> bool {
        !self.changed_render_props(next).is_empty()
    }
}

fn default_row_height() -> Option<f64> {
    Some(0.9)
}

fn default_col_width() -> Option<f64> {
    Some(0.9)
}
