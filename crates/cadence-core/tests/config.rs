// File: crates/cadence-core/tests/config.rs
// Purpose: Serde configuration (options, declarative series) and color parsing.

use cadence_core::series::SeriesKind;
use cadence_core::theme::{self, parse_color};
use cadence_core::{ChartOptions, ErrorKind, SeriesId, SeriesSpec};
use skia_safe::Color;

#[test]
fn options_fill_missing_fields_with_defaults() {
    let opts: ChartOptions = serde_json::from_str(r#"{ "width": 800, "draw_labels": false }"#).unwrap();
    assert_eq!(opts.width, 800);
    assert_eq!(opts.height, 300);
    assert_eq!(opts.buffer, 40);
    assert_eq!(opts.refresh_speed_ms, 25);
    assert!(!opts.draw_labels);
    assert_eq!(opts.refresh_speed(), std::time::Duration::from_millis(25));
}

#[test]
fn options_round_trip_without_theme() {
    let opts = ChartOptions { theme: cadence_core::Theme::dark(), ..ChartOptions::default() };
    let json = serde_json::to_string(&opts).unwrap();
    assert!(!json.contains("theme"));
    let back: ChartOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back.theme.name, "light");
}

#[test]
fn series_spec_from_json() {
    let spec: SeriesSpec = serde_json::from_str(
        r##"{ "id": 4, "label": "Sales", "type": "bar", "color": "#f00", "order": 2, "values": [1, 2.5] }"##,
    )
    .unwrap();
    let series = spec.into_series().unwrap();
    assert_eq!(series.id, SeriesId(4));
    assert_eq!(series.kind, SeriesKind::Bar);
    assert_eq!(series.color, Some(Color::from_rgb(255, 0, 0)));
    assert_eq!(series.order, 2);
    assert!(series.visible);
    assert_eq!(series.values, vec![1.0, 2.5]);
}

#[test]
fn series_spec_rejects_bad_kind_and_color() {
    let spec = SeriesSpec { label: "X".into(), kind: "donut".into(), ..SeriesSpec::default() };
    assert_eq!(spec.into_series().unwrap_err().kind(), ErrorKind::Render);

    let spec = SeriesSpec { label: "X".into(), kind: "line".into(), color: Some("#12".into()), ..SeriesSpec::default() };
    assert!(spec.into_series().is_err());
}

#[test]
fn color_forms() {
    assert_eq!(parse_color("#3366cc").unwrap(), Color::from_rgb(0x33, 0x66, 0xcc));
    assert_eq!(parse_color("rgb(1, 2, 3)").unwrap(), Color::from_rgb(1, 2, 3));
    assert_eq!(parse_color(" Teal ").unwrap(), Color::from_rgb(0, 128, 128));
    assert!(parse_color("rgb(1,2)").is_err());
    assert!(parse_color("chartreuse").is_err());
    // Signs are not digits
    assert!(parse_color("#+fffff").is_err());
    assert!(parse_color("#-12").is_err());
    assert!(parse_color("rgb(+1, 2, 3)").is_err());
    assert!(parse_color("rgb(1, -2, 3)").is_err());
}

#[test]
fn theme_lookup_falls_back_to_light() {
    assert_eq!(theme::find("DARK").name, "dark");
    assert_eq!(theme::find("sepia").name, "light");
    assert_eq!(theme::presets().len(), 3);
}
