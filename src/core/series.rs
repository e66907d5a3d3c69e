use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};

/// Fraction of the data span added as padding on each side of an axis domain.
const SPAN_PADDING_RATIO: f64 = 0.05;
/// Half-span used to widen a degenerate (zero-span) axis domain.
const DEGENERATE_HALF_SPAN: f64 = 0.5;

/// Immutable plotted series.
///
/// Points keep insertion order; the series is plotted in that order and never
/// sorted. Construction validates length parity and finiteness so downstream
/// projection code can assume well-formed input.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    points: Vec<DataPoint>,
}

impl Series {
    /// Builds a series from paired x/y slices.
    pub fn from_xy(x: &[f64], y: &[f64]) -> ChartResult<Self> {
        if x.len() != y.len() {
            return Err(ChartError::SeriesLengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        let points = x
            .iter()
            .zip(y)
            .map(|(&px, &py)| DataPoint::new(px, py))
            .collect();
        Self::from_points(points)
    }

    pub fn from_points(points: Vec<DataPoint>) -> ChartResult<Self> {
        if points.is_empty() {
            return Err(ChartError::InvalidData(
                "series must contain at least one point".to_owned(),
            ));
        }
        for point in &points {
            if !point.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "series point ({}, {}) must be finite",
                    point.x, point.y
                )));
            }
        }

        Ok(Self { points })
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Padded axis domains covering every point in the series.
    #[must_use]
    pub fn bounds(&self) -> DataBounds {
        DataBounds::from_points(&self.points)
    }
}

/// Padded axis domains derived from series data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataBounds {
    /// Computes padded bounds for a non-empty point slice.
    ///
    /// Each axis gets `SPAN_PADDING_RATIO` of its span on both sides so line
    /// and markers never touch the plot frame. A zero-span axis (single point
    /// or constant series) is widened by `DEGENERATE_HALF_SPAN` instead, which
    /// keeps the resulting scale domain valid.
    #[must_use]
    pub fn from_points(points: &[DataPoint]) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        for point in points {
            x_min = x_min.min(point.x);
            x_max = x_max.max(point.x);
            y_min = y_min.min(point.y);
            y_max = y_max.max(point.y);
        }

        let (x_min, x_max) = pad_domain(x_min, x_max);
        let (y_min, y_max) = pad_domain(y_min, y_max);
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }
}

fn pad_domain(min: f64, max: f64) -> (f64, f64) {
    let span = max - min;
    if span == 0.0 {
        return (min - DEGENERATE_HALF_SPAN, max + DEGENERATE_HALF_SPAN);
    }

    let padding = span * SPAN_PADDING_RATIO;
    (min - padding, max + padding)
}
