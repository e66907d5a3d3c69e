use linechart_rs::api::{ChartRenderer, FigureConfig};
use linechart_rs::core::Viewport;
use linechart_rs::{ChartError, RenderStyle};

#[test]
fn default_config_yields_a_600_by_400_surface() {
    let viewport = FigureConfig::default().viewport().expect("viewport");
    assert_eq!(viewport, Viewport::new(600, 400));
}

#[test]
fn custom_scale_changes_the_surface() {
    let viewport = FigureConfig::new(8.0, 5.0)
        .with_pixels_per_unit(50.0)
        .viewport()
        .expect("viewport");
    assert_eq!(viewport, Viewport::new(400, 250));
}

#[test]
fn config_round_trips_through_json() {
    let config = FigureConfig::default()
        .with_title("Sample Chart")
        .with_x_label("X-axis")
        .with_y_label("Y-axis");

    let json = config.to_json().expect("serialize");
    let parsed = FigureConfig::from_json(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let parsed =
        FigureConfig::from_json(r#"{"width_units": 6.0, "height_units": 4.0}"#).expect("parse");

    assert_eq!(parsed.pixels_per_unit, 100.0);
    assert_eq!(parsed.title, None);
    assert_eq!(parsed.style, RenderStyle::default());
}

#[test]
fn config_rejects_non_positive_dimensions() {
    let err = FigureConfig::new(0.0, 4.0)
        .validate()
        .expect_err("zero width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = FigureConfig::new(6.0, f64::NAN)
        .validate()
        .expect_err("nan height must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn renderer_rejects_invalid_style() {
    let mut style = RenderStyle::default();
    style.line_width = -2.0;
    let config = FigureConfig::default().with_style(style);

    let err = ChartRenderer::new(config).expect_err("bad style must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn malformed_json_is_rejected() {
    let err = FigureConfig::from_json("{not json").expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}
