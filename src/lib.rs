//! timeline-chart: state-timeline chart configuration adapter.
//!
//! Turns time-aligned frames and panel display options into a plot config
//! descriptor, resolves per-value colors and decides what legend to show.
//! Drawing is left to the host's plotting backend.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{GraphAdapter, PlotConfigDescriptor, TimelineChart, TimelineOptions};
pub use error::{TimelineError, TimelineResult};
