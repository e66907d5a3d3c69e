use approx::assert_relative_eq;
use linechart_rs::ChartError;
use linechart_rs::core::{DataPoint, Series};

#[test]
fn series_rejects_length_mismatch() {
    let err = Series::from_xy(&[1.0, 2.0], &[1.0, 2.0, 3.0]).expect_err("mismatch must fail");
    match err {
        ChartError::SeriesLengthMismatch { x_len, y_len } => {
            assert_eq!(x_len, 2);
            assert_eq!(y_len, 3);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn series_rejects_empty_input() {
    let err = Series::from_xy(&[], &[]).expect_err("empty must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn series_rejects_non_finite_values() {
    let err = Series::from_xy(&[1.0, f64::NAN], &[1.0, 2.0]).expect_err("nan must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = Series::from_xy(&[1.0, 2.0], &[1.0, f64::INFINITY]).expect_err("inf must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn series_preserves_insertion_order() {
    let series = Series::from_xy(&[4.0, 1.0, 3.0], &[1.0, 2.0, 3.0]).expect("series");
    let xs: Vec<f64> = series.points().iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![4.0, 1.0, 3.0]);
    assert_eq!(series.len(), 3);
    assert!(!series.is_empty());
}

#[test]
fn bounds_pad_each_axis_by_five_percent() {
    let series = Series::from_xy(&[1.0, 2.0, 3.0, 4.0], &[10.0, 20.0, 15.0, 25.0]).expect("series");
    let bounds = series.bounds();

    // x span 3.0 -> 0.15 padding, y span 15.0 -> 0.75 padding.
    assert_relative_eq!(bounds.x_min, 0.85, epsilon = 1e-12);
    assert_relative_eq!(bounds.x_max, 4.15, epsilon = 1e-12);
    assert_relative_eq!(bounds.y_min, 9.25, epsilon = 1e-12);
    assert_relative_eq!(bounds.y_max, 25.75, epsilon = 1e-12);
}

#[test]
fn bounds_widen_degenerate_spans() {
    let series = Series::from_points(vec![DataPoint::new(1.0, 5.0)]).expect("series");
    let bounds = series.bounds();

    assert_relative_eq!(bounds.x_min, 0.5);
    assert_relative_eq!(bounds.x_max, 1.5);
    assert_relative_eq!(bounds.y_min, 4.5);
    assert_relative_eq!(bounds.y_max, 5.5);
}

#[test]
fn bounds_widen_constant_axis_only() {
    let series = Series::from_xy(&[0.0, 10.0], &[7.0, 7.0]).expect("series");
    let bounds = series.bounds();

    assert_relative_eq!(bounds.x_min, -0.5, epsilon = 1e-12);
    assert_relative_eq!(bounds.x_max, 10.5, epsilon = 1e-12);
    assert_relative_eq!(bounds.y_min, 6.5);
    assert_relative_eq!(bounds.y_max, 7.5);
}
