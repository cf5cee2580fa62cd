use tracing::trace;

use crate::render::{LegendElement, LegendItem, LegendOptions};

use super::PlotConfigDescriptor;

/// Builds the read-only legend for a timeline, or `None` when there is nothing to show.
///
/// The legend is skipped when the config is missing, no items or options were
/// supplied, or the options turn the legend off.
#[must_use]
pub fn render_legend_if_enabled(
    config: Option<&PlotConfigDescriptor>,
    legend: Option<&LegendOptions>,
    items: Option<&[LegendItem]>,
) -> Option<LegendElement> {
    config?;
    let items = items.filter(|items| !items.is_empty())?;
    let legend = legend.filter(|legend| legend.show_legend)?;

    trace!(
        items = items.len(),
        placement = ?legend.placement,
        "render timeline legend"
    );

    Some(LegendElement {
        placement: legend.placement,
        display_mode: legend.display_mode,
        items: items.to_vec(),
        readonly: true,
    })
}
