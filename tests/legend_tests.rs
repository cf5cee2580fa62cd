use std::sync::Arc;

use timeline_chart::api::{
    EventBus, PanelContext, PlotConfigDescriptor, TimelineOptions, prepare_plot_config,
    render_legend_if_enabled,
};
use timeline_chart::core::{DataFrame, Field, FieldType, FieldValue, TimeRange};
use timeline_chart::render::{
    Color, LegendDisplayMode, LegendItem, LegendOptions, LegendPlacement,
};

fn config() -> PlotConfigDescriptor {
    let frame = DataFrame::new(vec![
        Field::time("time", [0, 1_000]),
        Field::new("state", FieldType::Number, vec![FieldValue::Number(1.0); 2]),
    ]);
    prepare_plot_config(
        &PanelContext::new(EventBus::new("legend"), Default::default()),
        frame,
        Arc::new([]),
        Arc::new(|| TimeRange::from_millis(0, 1_000)),
        &TimelineOptions::default(),
    )
}

fn items() -> Vec<LegendItem> {
    vec![
        LegendItem::new("OK", Color::rgb(0.0, 1.0, 0.0)).with_field_name("state"),
        LegendItem::new("Down", Color::rgb(1.0, 0.0, 0.0)),
    ]
}

#[test]
fn legend_is_rendered_read_only_with_supplied_items_and_placement() {
    let config = config();
    let options = LegendOptions::default()
        .with_placement(LegendPlacement::Right)
        .with_display_mode(LegendDisplayMode::Table);
    let items = items();

    let legend = render_legend_if_enabled(Some(&config), Some(&options), Some(&items))
        .expect("legend should render");

    assert_eq!(legend.placement, LegendPlacement::Right);
    assert_eq!(legend.display_mode, LegendDisplayMode::Table);
    assert_eq!(legend.items, items);
    assert!(legend.readonly);
}

#[test]
fn missing_config_skips_legend() {
    let items = items();
    assert!(
        render_legend_if_enabled(None, Some(&LegendOptions::default()), Some(&items)).is_none()
    );
}

#[test]
fn missing_or_empty_items_skip_legend() {
    let config = config();
    let options = LegendOptions::default();
    assert!(render_legend_if_enabled(Some(&config), Some(&options), None).is_none());
    assert!(render_legend_if_enabled(Some(&config), Some(&options), Some(&[])).is_none());
}

#[test]
fn missing_options_skip_legend() {
    let config = config();
    let items = items();
    assert!(render_legend_if_enabled(Some(&config), None, Some(&items)).is_none());
}

#[test]
fn hidden_legend_is_skipped() {
    let config = config();
    let items = items();
    assert!(
        render_legend_if_enabled(Some(&config), Some(&LegendOptions::hidden()), Some(&items))
            .is_none()
    );
}

#[test]
fn hidden_display_mode_alone_still_renders() {
    let config = config();
    let items = items();
    let options = LegendOptions::default().with_display_mode(LegendDisplayMode::Hidden);
    let legend = render_legend_if_enabled(Some(&config), Some(&options), Some(&items));
    assert!(legend.is_some());
}
