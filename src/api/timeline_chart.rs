use std::sync::Arc;

use tracing::debug;

use crate::core::{DataFrame, FieldMatchers, FieldSelection, FieldValue, select_fields};
use crate::render::{Color, LegendElement};

use super::{
    GetTimeRangeFn, PROPS_TO_DIFF, PanelContext, PlotConfigDescriptor, TimelineOptions,
    ValueColorResolver, prepare_plot_config, render_legend_if_enabled,
};

/// Contract between a chart and the host's generic time-series graph.
///
/// The host aligns frames, diffs options and draws; the chart decides which
/// fields to plot, how the plot is configured and what legend to show.
pub trait GraphAdapter {
    fn field_matchers(&self) -> FieldMatchers;

    fn prep_config(
        &mut self,
        context: &PanelContext,
        aligned: DataFrame,
        all_frames: &[DataFrame],
        get_time_range: GetTimeRangeFn,
    ) -> PlotConfigDescriptor;

    /// Option names whose change invalidates the last built config.
    fn props_to_diff(&self) -> &'static [&'static str];

    fn render_legend(&self, config: Option<&PlotConfigDescriptor>) -> Option<LegendElement>;
}

/// Output of one full render pass.
#[derive(Debug, Clone)]
pub struct TimelineRender {
    pub fields: Vec<FieldSelection>,
    pub config: PlotConfigDescriptor,
    pub legend: Option<LegendElement>,
}

/// State-timeline chart adapter.
#[derive(Debug, Clone)]
pub struct TimelineChart {
    frames: Arc<[DataFrame]>,
    options: TimelineOptions,
    panel_context: Option<PanelContext>,
}

impl TimelineChart {
    #[must_use]
    pub fn new(frames: Vec<DataFrame>, options: TimelineOptions) -> Self {
        Self {
            frames: frames.into(),
            options,
            panel_context: None,
        }
    }

    #[must_use]
    pub fn frames(&self) -> &[DataFrame] {
        &self.frames
    }

    #[must_use]
    pub fn options(&self) -> &TimelineOptions {
        &self.options
    }

    /// Context seen by the last `prep_config` call.
    #[must_use]
    pub fn panel_context(&self) -> Option<&PanelContext> {
        self.panel_context.as_ref()
    }

    /// Replaces the source frames.
    pub fn set_frames(&mut self, frames: Vec<DataFrame>) {
        self.frames = frames.into();
    }

    /// Replaces the options. Returns `true` when a render-relevant option changed
    /// and the plot config has to be rebuilt.
    pub fn set_options(&mut self, options: TimelineOptions) -> bool {
        let changed = self.options.changed_render_props(&options);
        if !changed.is_empty() {
            debug!(?changed, "timeline options changed");
        }
        self.options = options;
        !changed.is_empty()
    }

    /// Color of a single value, looked up through the source frames.
    #[must_use]
    pub fn value_color(&self, frame_index: usize, field_index: usize, value: &FieldValue) -> Color {
        ValueColorResolver::new(Arc::clone(&self.frames)).resolve(frame_index, field_index, value)
    }

    /// Classifies fields, builds the config and the legend in one pass.
    pub fn render_pass(
        &mut self,
        context: &PanelContext,
        aligned: DataFrame,
        get_time_range: GetTimeRangeFn,
    ) -> TimelineRender {
        let fields = select_fields(&self.field_matchers(), &self.frames);
        let frames = Arc::clone(&self.frames);
        let config = self.prep_config(context, aligned, &frames, get_time_range);
        let legend = self.render_legend(Some(&config));
        TimelineRender {
            fields,
            config,
            legend,
        }
    }
}

impl GraphAdapter for TimelineChart {
    fn field_matchers(&self) -> FieldMatchers {
        FieldMatchers::timeline()
    }

    fn prep_config(
        &mut self,
        context: &PanelContext,
        aligned: DataFrame,
        all_frames: &[DataFrame],
        get_time_range: GetTimeRangeFn,
    ) -> PlotConfigDescriptor {
        self.panel_context = Some(context.clone());

        // Colors are resolved against the chart's own frames; the host hands
        // the same set in as `all_frames`.
        if all_frames.len() != self.frames.len() {
            debug!(
                host_frames = all_frames.len(),
                chart_frames = self.frames.len(),
                "host frame set differs from chart frames"
            );
        }

        prepare_plot_config(
            context,
            aligned,
            Arc::clone(&self.frames),
            get_time_range,
            &self.options,
        )
    }

    fn props_to_diff(&self) -> &'static [&'static str] {
        &PROPS_TO_DIFF
    }

    fn render_legend(&self, config: Option<&PlotConfigDescriptor>) -> Option<LegendElement> {
        render_legend_if_enabled(
            config,
            self.options.legend.as_ref(),
            self.options.legend_items.as_deref(),
        )
    }
}
