use timeline_chart::TimelineError;
use timeline_chart::api::{
    PROPS_TO_DIFF, TimelineMode, TimelineOptions, TimelineValueAlignment, TooltipDisplayMode,
    VisibilityMode,
};
use timeline_chart::core::TimeZoneOption;
use timeline_chart::render::{Color, LegendOptions, LegendPlacement};

#[test]
fn empty_json_yields_defaults() {
    let options = TimelineOptions::from_json_str("{}").expect("defaults");
    assert_eq!(options, TimelineOptions::default());
    assert_eq!(options.row_height, Some(0.9));
    assert_eq!(options.col_width, Some(0.9));
    assert_eq!(options.time_zone, TimeZoneOption::Single("browser".to_owned()));
}

#[test]
fn panel_json_is_parsed_with_camel_case_names() {
    let input = r##"{
        "mode": "samples",
        "rowHeight": 0.5,
        "showValue": "never",
        "alignValue": "left",
        "mergeValues": true,
        "tooltip": { "mode": "multi" },
        "legend": { "showLegend": true, "displayMode": "list", "placement": "right" },
        "timeZone": ["utc", "Asia/Tokyo"],
        "legendItems": [{ "label": "OK", "color": "#73bf69" }]
    }"##;

    let options = TimelineOptions::from_json_str(input).expect("parse options");
    assert_eq!(options.mode, TimelineMode::Samples);
    assert_eq!(options.row_height, Some(0.5));
    assert_eq!(options.show_value, VisibilityMode::Never);
    assert_eq!(options.align_value, Some(TimelineValueAlignment::Left));
    assert_eq!(options.merge_values, Some(true));
    assert_eq!(options.tooltip.mode, TooltipDisplayMode::Multi);
    assert_eq!(
        options.legend.as_ref().map(|legend| legend.placement),
        Some(LegendPlacement::Right)
    );
    assert_eq!(
        options.time_zone,
        TimeZoneOption::Many(vec!["utc".to_owned(), "Asia/Tokyo".to_owned()])
    );

    let items = options.legend_items.expect("legend items");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].y_axis, 1);
    assert_eq!(
        items[0].color,
        Color::from_hex("#73bf69").expect("valid hex")
    );
}

#[test]
fn scalar_time_zone_is_accepted() {
    let options =
        TimelineOptions::from_json_str(r#"{ "timeZone": "utc" }"#).expect("parse options");
    assert_eq!(options.time_zone, TimeZoneOption::Single("utc".to_owned()));
}

#[test]
fn out_of_range_ratios_are_rejected() {
    let err = TimelineOptions::from_json_str(r#"{ "rowHeight": 1.5 }"#)
        .expect_err("row height above 1");
    assert!(matches!(err, TimelineError::InvalidOptions(_)));

    let options = TimelineOptions::default().with_col_width(Some(-0.1));
    assert!(options.validate().is_err());

    let options = TimelineOptions::default().with_row_height(Some(f64::NAN));
    assert!(options.validate().is_err());
}

#[test]
fn invalid_legend_settings_are_rejected() {
    let mut legend = LegendOptions::default();
    legend.width = Some(0.0);
    assert!(TimelineOptions::default().with_legend(legend).validate().is_err());

    let err = TimelineOptions::from_json_str(
        r#"{ "legendItems": [{ "label": "x", "color": "red" }] }"#,
    )
    .expect_err("named colors are not hex");
    assert!(matches!(err, TimelineError::InvalidOptions(_)));
}

#[test]
fn malformed_json_is_reported() {
    let err = TimelineOptions::from_json_str("{ not json").expect_err("malformed");
    assert!(err.to_string().contains("failed to parse timeline options"));
}

#[test]
fn options_round_trip_through_json() {
    let options = TimelineOptions::new(TimelineMode::Samples)
        .with_tooltip_mode(TooltipDisplayMode::Multi)
        .with_time_zone("utc");
    let json = options.to_json_pretty().expect("serialize");
    let parsed = TimelineOptions::from_json_str(&json).expect("parse");
    assert_eq!(parsed, options);
}

#[test]
fn only_render_relevant_options_trigger_rebuild() {
    let base = TimelineOptions::default();

    let moved_legend = base
        .clone()
        .with_legend(LegendOptions::default().with_placement(LegendPlacement::Right))
        .with_time_zone("utc")
        .with_legend_items(Vec::new());
    assert!(!base.diff_relevant_changed(&moved_legend));

    let next = base
        .clone()
        .with_row_height(Some(0.4))
        .with_tooltip_mode(TooltipDisplayMode::Multi);
    assert_eq!(base.changed_render_props(&next), vec!["rowHeight", "tooltip"]);

    let next = base
        .clone()
        .with_col_width(Some(0.1))
        .with_show_value(VisibilityMode::Always)
        .with_merge_values(false)
        .with_align_value(TimelineValueAlignment::Right);
    assert_eq!(
        base.changed_render_props(&next),
        vec!["colWidth", "showValue", "mergeValues", "alignValue"]
    );
    assert_eq!(PROPS_TO_DIFF.len(), 6);
}
