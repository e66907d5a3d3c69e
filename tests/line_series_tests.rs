use approx::assert_relative_eq;
use linechart_rs::core::{
    DataPoint, LinearScale, PlotArea, project_line_segments, project_marker_points,
};

fn unit_plot() -> PlotArea {
    PlotArea::new(0.0, 0.0, 100.0, 100.0)
}

#[test]
fn projection_inverts_the_y_axis() {
    let x_scale = LinearScale::new(0.0, 10.0).expect("x scale");
    let y_scale = LinearScale::new(0.0, 100.0).expect("y scale");
    let points = vec![
        DataPoint::new(0.0, 0.0),
        DataPoint::new(5.0, 50.0),
        DataPoint::new(10.0, 100.0),
    ];

    let markers =
        project_marker_points(&points, x_scale, y_scale, unit_plot()).expect("project markers");
    assert_eq!(markers.len(), 3);

    assert_relative_eq!(markers[0].x, 0.0);
    assert_relative_eq!(markers[0].y, 100.0);
    assert_relative_eq!(markers[1].x, 50.0);
    assert_relative_eq!(markers[1].y, 50.0);
    assert_relative_eq!(markers[2].x, 100.0);
    assert_relative_eq!(markers[2].y, 0.0);
}

#[test]
fn projection_offsets_by_the_plot_area_origin() {
    let x_scale = LinearScale::new(0.0, 1.0).expect("x scale");
    let y_scale = LinearScale::new(0.0, 1.0).expect("y scale");
    let plot = PlotArea::new(40.0, 20.0, 200.0, 100.0);

    let markers = project_marker_points(&[DataPoint::new(0.0, 0.0)], x_scale, y_scale, plot)
        .expect("project markers");
    assert_relative_eq!(markers[0].x, 40.0);
    assert_relative_eq!(markers[0].y, 120.0);
}

#[test]
fn segments_connect_adjacent_markers() {
    let x_scale = LinearScale::new(0.0, 10.0).expect("x scale");
    let y_scale = LinearScale::new(0.0, 100.0).expect("y scale");
    let points = vec![
        DataPoint::new(0.0, 0.0),
        DataPoint::new(5.0, 50.0),
        DataPoint::new(10.0, 100.0),
    ];

    let segments =
        project_line_segments(&points, x_scale, y_scale, unit_plot()).expect("project segments");
    assert_eq!(segments.len(), 2);

    assert_relative_eq!(segments[0].x1, 0.0);
    assert_relative_eq!(segments[0].y1, 100.0);
    assert_relative_eq!(segments[0].x2, 50.0);
    assert_relative_eq!(segments[0].y2, 50.0);
    assert_relative_eq!(segments[1].x2, 100.0);
    assert_relative_eq!(segments[1].y2, 0.0);
}

#[test]
fn single_point_yields_marker_but_no_segments() {
    let x_scale = LinearScale::new(0.0, 10.0).expect("x scale");
    let y_scale = LinearScale::new(0.0, 100.0).expect("y scale");
    let points = vec![DataPoint::new(5.0, 50.0)];

    let segments =
        project_line_segments(&points, x_scale, y_scale, unit_plot()).expect("project segments");
    assert!(segments.is_empty());

    let markers =
        project_marker_points(&points, x_scale, y_scale, unit_plot()).expect("project markers");
    assert_eq!(markers.len(), 1);
}
