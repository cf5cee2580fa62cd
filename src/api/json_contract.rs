use serde::{Deserialize, Serialize};

use crate::core::{TimeRange, TimeZones};
use crate::error::{TimelineError, TimelineResult};

use super::{
    DashboardCursorSync, PlotConfigDescriptor, TimelineMode, TimelineValueAlignment,
    VisibilityMode,
};

pub const PLOT_CONFIG_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable projection of a built plot config, for diagnostics and fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotConfigSnapshot {
    pub mode: TimelineMode,
    pub row_height: Option<f64>,
    pub col_width: Option<f64>,
    pub show_value: VisibilityMode,
    pub align_value: Option<TimelineValueAlignment>,
    pub merge_values: Option<bool>,
    pub time_zones: TimeZones,
    pub hover_multi: bool,
    pub sync: DashboardCursorSync,
    pub aligned_field_count: usize,
    pub frame_count: usize,
    pub time_range: TimeRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfigSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: PlotConfigSnapshot,
}

impl PlotConfigDescriptor {
    #[must_use]
    pub fn snapshot(&self) -> PlotConfigSnapshot {
        PlotConfigSnapshot {
            mode: self.mode,
            row_height: self.row_height,
            col_width: self.col_width,
            show_value: self.show_value,
            align_value: self.align_value,
            merge_values: self.merge_values,
            time_zones: self.time_zones.clone(),
            hover_multi: self.hover_multi,
            sync: self.sync,
            aligned_field_count: self.frame.fields.len(),
            frame_count: self.all_frames.len(),
            time_range: self.time_range(),
        }
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> TimelineResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}

impl PlotConfigSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> TimelineResult<String> {
        let payload = PlotConfigSnapshotJsonContractV1 {
            schema_version: PLOT_CONFIG_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            TimelineError::InvalidData(format!("failed to serialize plot config contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned v1 payload.
    pub fn from_json_compat_str(input: &str) -> TimelineResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<PlotConfigSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: PlotConfigSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                TimelineError::InvalidData(format!("failed to parse plot config json payload: {e}"))
            })?;
        if payload.schema_version != PLOT_CONFIG_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(TimelineError::InvalidData(format!(
                "unsupported plot config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
