mod context;
mod json_contract;
mod legend;
mod options;
mod plot_config;
mod timeline_chart;
mod value_color;

pub use context::{DashboardCursorSync, EventBus, PanelContext};
pub use json_contract::{
    PLOT_CONFIG_SNAPSHOT_JSON_SCHEMA_V1, PlotConfigSnapshot, PlotConfigSnapshotJsonContractV1,
};
pub use legend::render_legend_if_enabled;
pub use options::{
    PROPS_TO_DIFF, TimelineMode, TimelineOptions, TimelineValueAlignment, TooltipDisplayMode,
    TooltipOptions, VisibilityMode,
};
pub use plot_config::{FULL_ROW_HEIGHT, GetTimeRangeFn, PlotConfigDescriptor, prepare_plot_config};
pub use timeline_chart::{GraphAdapter, TimelineChart, TimelineRender};
pub use value_color::ValueColorResolver;
