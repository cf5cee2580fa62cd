use std::sync::Arc;

use proptest::prelude::*;
use timeline_chart::api::{
    PanelContext, TimelineOptions, TooltipDisplayMode, ValueColorResolver, prepare_plot_config,
};
use timeline_chart::core::{
    DataFrame, Field, FieldRole, FieldType, FieldValue, MappingResult, TimeRange,
    TimeZoneOption, ValueMappings, classify_field,
};
use timeline_chart::render::{Color, FALLBACK_COLOR};

fn field_type_strategy() -> impl Strategy<Value = FieldType> {
    prop_oneof![
        Just(FieldType::Time),
        Just(FieldType::Number),
        Just(FieldType::String),
        Just(FieldType::Boolean),
        Just(FieldType::Enum),
        Just(FieldType::Trace),
        Just(FieldType::Geo),
        Just(FieldType::Other),
    ]
}

fn tooltip_strategy() -> impl Strategy<Value = TooltipDisplayMode> {
    prop_oneof![
        Just(TooltipDisplayMode::Single),
        Just(TooltipDisplayMode::Multi),
        Just(TooltipDisplayMode::None),
    ]
}

fn frame_with_fields(field_count: usize) -> DataFrame {
    let mut fields = vec![Field::time("time", [0, 1_000])];
    fields.extend((1..field_count).map(|i| {
        Field::new(
            format!("s{i}"),
            FieldType::Number,
            vec![FieldValue::Number(0.0); 2],
        )
    }));
    DataFrame::new(fields)
}

proptest! {
    #[test]
    fn row_height_depends_only_on_field_count(
        field_count in 1usize..8,
        row_height in proptest::option::of(0.0f64..=1.0),
        tooltip in tooltip_strategy(),
    ) {
        let options = TimelineOptions::default()
            .with_row_height(row_height)
            .with_tooltip_mode(tooltip);
        let config = prepare_plot_config(
            &PanelContext::default(),
            frame_with_fields(field_count),
            Arc::new([]),
            Arc::new(|| TimeRange::from_millis(0, 1_000)),
            &options,
        );

        if field_count > 2 {
            prop_assert_eq!(config.row_height, row_height);
        } else {
            prop_assert_eq!(config.row_height, Some(1.0));
        }
        prop_assert_eq!(config.hover_multi, tooltip == TooltipDisplayMode::Multi);
    }

    #[test]
    fn time_zone_normalization_preserves_content(
        zones in proptest::collection::vec("[A-Za-z_/]{0,16}", 0..5),
        single in "[A-Za-z_/]{0,16}",
    ) {
        let list = TimeZoneOption::Many(zones.clone()).to_list();
        prop_assert_eq!(list.to_vec(), zones);

        let scalar = TimeZoneOption::Single(single.clone()).to_list();
        prop_assert_eq!(scalar.len(), 1);
        prop_assert_eq!(&scalar[0], &single);
    }

    #[test]
    fn time_is_never_a_value_series(field_type in field_type_strategy()) {
        let role = classify_field(field_type);
        match field_type {
            FieldType::Time => prop_assert_eq!(role, FieldRole::TimeAxis),
            FieldType::Number | FieldType::Boolean | FieldType::String | FieldType::Enum => {
                prop_assert_eq!(role, FieldRole::Value)
            }
            _ => prop_assert_eq!(role, FieldRole::Excluded),
        }
    }

    #[test]
    fn resolved_color_is_mapping_color_or_fallback(value in -100.0f64..100.0) {
        let mapped = Color::rgb(0.2, 0.4, 0.6);
        let frames: Arc<[DataFrame]> = vec![DataFrame::new(vec![
            Field::time("time", [0]),
            Field::new("raw", FieldType::Number, vec![FieldValue::Number(value)]),
            Field::new("mapped", FieldType::Number, vec![FieldValue::Number(value)])
                .with_display(ValueMappings::default().with_range(
                    Some(0.0),
                    None,
                    MappingResult::new("positive", mapped),
                )),
        ])]
        .into();
        let resolver = ValueColorResolver::new(frames);
        let value = FieldValue::Number(value);

        prop_assert_eq!(resolver.resolve(0, 1, &value), FALLBACK_COLOR);
        let expected = if value.as_f64().is_some_and(|v| v >= 0.0) { mapped } else { FALLBACK_COLOR };
        prop_assert_eq!(resolver.resolve(0, 2, &value), expected);
    }
}
