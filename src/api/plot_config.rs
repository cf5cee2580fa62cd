use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::core::{DataFrame, FieldValue, TimeRange, TimeZones};
use crate::render::Color;

use super::{
    DashboardCursorSync, EventBus, PanelContext, TimelineMode, TimelineOptions,
    TimelineValueAlignment, TooltipDisplayMode, ValueColorResolver, VisibilityMode,
};

/// Accessor for the currently visible time range, re-evaluated on zoom.
pub type GetTimeRangeFn = Arc<dyn Fn() -> TimeRange + Send + Sync + 'static>;

/// Row height used when the aligned frame holds a single value series.
pub const FULL_ROW_HEIGHT: f64 = 1.0;

/// Everything the plot builder needs to draw one timeline.
///
/// Cheap to clone: frames, the time-range accessor and the event bus are shared.
#[derive(Clone)]
pub struct PlotConfigDescriptor {
    pub frame: DataFrame,
    pub all_frames: Arc<[DataFrame]>,
    pub get_time_range: GetTimeRangeFn,
    pub event_bus: EventBus,
    pub sync: DashboardCursorSync,
    pub mode: TimelineMode,
    pub row_height: Option<f64>,
    pub col_width: Option<f64>,
    pub show_value: VisibilityMode,
    pub align_value: Option<TimelineValueAlignment>,
    pub merge_values: Option<bool>,
    pub time_zones: TimeZones,
    pub value_color: ValueColorResolver,
    pub hover_multi: bool,
}

impl PlotConfigDescriptor {
    #[must_use]
    pub fn time_range(&self) -> TimeRange {
        (self.get_time_range)()
    }

    #[must_use]
    pub fn get_value_color(&self, frame_index: usize, field_index: usize, value: &FieldValue) -> Color {
        self.value_color.resolve(frame_index, field_index, value)
    }

    /// Number of value rows in the aligned frame (every field but time).
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.frame.fields.len().saturating_sub(1)
    }
}

impl fmt::Debug for PlotConfigDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlotConfigDescriptor")
            .field("frame", &self.frame)
            .field("all_frames", &self.all_frames.len())
            .field("event_bus", &self.event_bus)
            .field("sync", &self.sync)
            .field("mode", &self.mode)
            .field("row_height", &self.row_height)
            .field("col_width", &self.col_width)
            .field("show_value", &self.show_value)
            .field("align_value", &self.align_value)
            .field("merge_values", &self.merge_values)
            .field("time_zones", &self.time_zones)
            .field("hover_multi", &self.hover_multi)
            .finish_non_exhaustive()
    }
}

/// Builds the plot config for one render pass.
///
/// `aligned` is the frame resampled onto one time base; `all_frames` are the
/// unaligned source frames the color resolver indexes into. Never fails:
/// malformed frames are passed through as-is.
#[must_use]
pub fn prepare_plot_config(
    context: &PanelContext,
    aligned: DataFrame,
    all_frames: Arc<[DataFrame]>,
    get_time_range: GetTimeRangeFn,
    options: &TimelineOptions,
) -> PlotConfigDescriptor {
    let time_zones = options.time_zone.to_list();

    // A lone value series gets the full row band.
    let row_height = if aligned.fields.len() > 2 {
        options.row_height
    } else {
        Some(FULL_ROW_HEIGHT)
    };

    let hover_multi = options.tooltip.mode == TooltipDisplayMode::Multi;

    debug!(
        fields = aligned.fields.len(),
        frames = all_frames.len(),
        ?row_height,
        time_zones = time_zones.len(),
        hover_multi,
        sync = ?context.sync,
        "prepare timeline plot config"
    );

    PlotConfigDescriptor {
        frame: aligned,
        value_color: ValueColorResolver::new(Arc::clone(&all_frames)),
        all_frames,
        get_time_range,
        event_bus: context.event_bus.clone(),
        sync: context.sync,
        mode: options.mode,
        row_height,
        col_width: options.col_width,
        show_value: options.show_value,
        align_value: options.align_value,
        merge_values: options.merge_values,
        time_zones,
        hover_multi,
    }
}
