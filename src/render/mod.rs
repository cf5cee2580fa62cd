mod legend;
mod primitives;

pub use legend::{LegendDisplayMode, LegendElement, LegendItem, LegendOptions, LegendPlacement};
pub use primitives::{Color, FALLBACK_COLOR};
