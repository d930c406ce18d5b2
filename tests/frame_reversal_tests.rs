use serde_json::json;
use timeseries_panel::core::{DataFrame, Field, FieldType, reverse_frame, reverse_frames};

fn values(frame: &DataFrame, index: usize) -> Vec<serde_json::Value> {
    frame.fields[index].values.clone()
}

#[test]
fn reverses_values_in_every_field() {
    let frame = DataFrame::new("test")
        .with_field(Field::time("time", [1000, 2000, 3000]))
        .with_field(Field::number("value", [10.0, 20.0, 30.0]));

    let reversed = reverse_frame(&frame);

    assert_eq!(values(&reversed, 0), vec![json!(3000), json!(2000), json!(1000)]);
    assert_eq!(values(&reversed, 1), vec![json!(30.0), json!(20.0), json!(10.0)]);
    assert_eq!(reversed.length, 3);
    assert_eq!(reversed.name.as_deref(), Some("test"));
}

#[test]
fn keeps_frame_length() {
    let frame = DataFrame::new("test").with_field(Field::time("time", [1, 2, 3, 4, 5]));
    assert_eq!(reverse_frame(&frame).length, 5);
}

#[test]
fn preserves_frame_name_and_meta() {
    let frame = DataFrame::new("test-frame")
        .with_field(Field::time("time", [100, 200]))
        .with_meta(json!({"custom": {"test": "value"}}));

    let reversed = reverse_frame(&frame);

    assert_eq!(reversed.name.as_deref(), Some("test-frame"));
    assert_eq!(reversed.meta, Some(json!({"custom": {"test": "value"}})));
}

#[test]
fn frame_without_fields_stays_empty() {
    let frame = DataFrame::new("empty").with_meta(json!({"preferredVisualisationType": "graph"}));

    let reversed = reverse_frame(&frame);

    assert!(reversed.fields.is_empty());
    assert_eq!(reversed.length, 0);
    assert_eq!(reversed.meta, frame.meta);
}

#[test]
fn fields_without_rows_stay_empty() {
    let frame = DataFrame::new("no-rows")
        .with_field(Field::time("time", []))
        .with_field(Field::number("value", []));

    let reversed = reverse_frame(&frame);

    assert_eq!(reversed.field_count(), 2);
    assert!(reversed.fields.iter().all(Field::is_empty));
    assert_eq!(reversed.length, 0);
}

#[test]
fn preserves_field_attributes() {
    let frame = DataFrame::new("test").with_field(
        Field::number("temperature", [20.0, 25.0])
            .with_config("unit", "celsius")
            .with_label("sensor", "A"),
    );

    let reversed = reverse_frame(&frame);
    let field = &reversed.fields[0];

    assert_eq!(field.name, "temperature");
    assert_eq!(field.field_type, FieldType::Number);
    assert_eq!(field.config.get("unit"), Some(&json!("celsius")));
    let labels = field.labels.as_ref().expect("labels kept");
    assert_eq!(labels.get("sensor").map(String::as_str), Some("A"));
    assert_eq!(field.values, vec![json!(25.0), json!(20.0)]);
}

#[test]
fn string_and_unknown_fields_are_reversed_too() {
    let frame = DataFrame::new("mixed")
        .with_field(Field::string("host", ["a", "b", "c"]))
        .with_field(Field::new(
            "raw",
            FieldType::Other("other".to_owned()),
            vec![json!({"k": 1}), json!(null), json!([2])],
        ));

    let reversed = reverse_frame(&frame);

    assert_eq!(values(&reversed, 0), vec![json!("c"), json!("b"), json!("a")]);
    assert_eq!(values(&reversed, 1), vec![json!([2]), json!(null), json!({"k": 1})]);
    assert_eq!(reversed.fields[1].field_type, FieldType::Other("other".to_owned()));
}

#[test]
fn reverses_real_cpu_series() {
    let frame = DataFrame::new("cpu-usage")
        .with_field(Field::time(
            "Time",
            [
                1_699_200_000_000,
                1_699_200_060_000,
                1_699_200_120_000,
                1_699_200_180_000,
                1_699_200_240_000,
            ],
        ))
        .with_field(
            Field::number("CPU Usage", [45.2, 52.1, 48.9, 61.3, 55.7]).with_config("unit", "percent"),
        );

    let reversed = reverse_frame(&frame);

    assert_eq!(reversed.fields[0].values[0], json!(1_699_200_240_000_i64));
    assert_eq!(reversed.fields[0].values[4], json!(1_699_200_000_000_i64));
    assert_eq!(reversed.fields[1].values[0], json!(55.7));
    assert_eq!(reversed.fields[1].values[4], json!(45.2));
    assert_eq!(reversed.fields[1].config.get("unit"), Some(&json!("percent")));

    let (first, last) = reversed.time_span().expect("time span");
    assert!(first > last);
}

#[test]
fn reverses_multiple_series_in_lock_step() {
    let frame = DataFrame::new("multi-series")
        .with_field(Field::time("time", [1000, 2000, 3000]))
        .with_field(Field::number("series1", [10.0, 20.0, 30.0]))
        .with_field(Field::number("series2", [100.0, 200.0, 300.0]))
        .with_field(Field::number("series3", [1.0, 2.0, 3.0]));

    let reversed = reverse_frame(&frame);

    assert_eq!(values(&reversed, 0), vec![json!(3000), json!(2000), json!(1000)]);
    assert_eq!(values(&reversed, 1), vec![json!(30.0), json!(20.0), json!(10.0)]);
    assert_eq!(values(&reversed, 2), vec![json!(300.0), json!(200.0), json!(100.0)]);
    assert_eq!(values(&reversed, 3), vec![json!(3.0), json!(2.0), json!(1.0)]);
}

#[test]
fn batch_reverses_each_frame() {
    let frames = vec![
        DataFrame::new("frame1").with_field(Field::time("time", [1000, 2000])),
        DataFrame::new("frame2").with_field(Field::time("time", [3000, 4000])),
    ];

    let reversed = reverse_frames(&frames);

    assert_eq!(reversed.len(), 2);
    assert_eq!(values(&reversed[0], 0), vec![json!(2000), json!(1000)]);
    assert_eq!(values(&reversed[1], 0), vec![json!(4000), json!(3000)]);
}

#[test]
fn batch_keeps_frame_order() {
    let frames: Vec<DataFrame> = [("first", 100), ("second", 200), ("third", 300)]
        .into_iter()
        .map(|(name, t)| DataFrame::new(name).with_field(Field::time("time", [t])))
        .collect();

    let reversed = reverse_frames(&frames);
    let names: Vec<&str> = reversed
        .iter()
        .filter_map(|frame| frame.name.as_deref())
        .collect();

    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn empty_batch_yields_empty_result() {
    assert!(reverse_frames(&[]).is_empty());
}
