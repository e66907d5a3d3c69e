use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, LinearScale, PlotArea};
use crate::error::{ChartError, ChartResult};

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Projected marker center in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPoint {
    pub x: f64,
    pub y: f64,
}

/// Projects series points into pixel-space marker centers.
///
/// The function is deterministic and side-effect free so both rendering and
/// tests can consume the exact same geometry output.
pub fn project_marker_points(
    points: &[DataPoint],
    x_scale: LinearScale,
    y_scale: LinearScale,
    plot_area: PlotArea,
) -> ChartResult<Vec<MarkerPoint>> {
    if !plot_area.is_valid() {
        return Err(ChartError::InvalidData(
            "plot area must be finite with positive extent".to_owned(),
        ));
    }

    let mut projected = Vec::with_capacity(points.len());
    for point in points {
        let x = plot_area.left + x_scale.domain_to_pixel(point.x, plot_area.width)?;
        // Screen y grows downward, the y axis domain grows upward.
        let y = plot_area.bottom() - y_scale.domain_to_pixel(point.y, plot_area.height)?;
        projected.push(MarkerPoint { x, y });
    }

    Ok(projected)
}

/// Projects series points into adjacent pixel-space line segments.
///
/// Series with fewer than two points yield no segments; the single marker is
/// still drawn by the caller.
pub fn project_line_segments(
    points: &[DataPoint],
    x_scale: LinearScale,
    y_scale: LinearScale,
    plot_area: PlotArea,
) -> ChartResult<Vec<LineSegment>> {
    let markers = project_marker_points(points, x_scale, y_scale, plot_area)?;
    if markers.len() < 2 {
        return Ok(Vec::new());
    }

    let mut segments = Vec::with_capacity(markers.len() - 1);
    for pair in markers.windows(2) {
        segments.push(LineSegment {
            x1: pair[0].x,
            y1: pair[0].y,
            x2: pair[1].x,
            y2: pair[1].y,
        });
    }

    Ok(segments)
}
