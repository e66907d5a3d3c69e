use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

const MIN_TICKS: usize = 2;
const MAX_TICKS: usize = 12;
const MAX_LABEL_DECIMALS: usize = 6;
/// Tolerance factor for including the last tick despite float accumulation.
const DOMAIN_EDGE_EPSILON: f64 = 1e-9;

/// One selected axis tick with its formatted label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
}

/// Selects ticks for one axis using a 1/2/5 × 10^k step ladder.
///
/// The tick count target is derived from the axis pixel span and the desired
/// label spacing, then the raw step is rounded up to the nearest "nice" step.
/// Returned values are strictly increasing and lie inside the domain.
pub fn select_ticks(
    domain_start: f64,
    domain_end: f64,
    axis_span_px: f64,
    target_spacing_px: f64,
) -> ChartResult<Vec<AxisTick>> {
    if !domain_start.is_finite() || !domain_end.is_finite() || domain_start >= domain_end {
        return Err(ChartError::InvalidData(
            "tick domain must be finite with start < end".to_owned(),
        ));
    }

    let target = tick_target_count(axis_span_px, target_spacing_px, MIN_TICKS, MAX_TICKS);
    let span = domain_end - domain_start;
    let raw_step = span / (target - 1).max(1) as f64;
    let step = nice_step(raw_step);

    let first = (domain_start / step).ceil() * step;
    let tolerance = span * DOMAIN_EDGE_EPSILON;

    let mut ticks = Vec::new();
    let mut index = 0usize;
    loop {
        let value = first + index as f64 * step;
        if value > domain_end + tolerance {
            break;
        }
        // Snap values that are zero up to rounding noise, so labels never
        // read "-0".
        let value = if value.abs() < step * DOMAIN_EDGE_EPSILON {
            0.0
        } else {
            value
        };
        ticks.push(AxisTick {
            value,
            label: format_tick_label(value, step),
        });
        index += 1;
    }

    Ok(ticks)
}

fn tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_ticks, max_ticks)
}

/// Rounds a positive raw step up to the nearest 1, 2, or 5 times a power of ten.
fn nice_step(raw_step: f64) -> f64 {
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let fraction = raw_step / magnitude;

    let nice_fraction = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice_fraction * magnitude
}

/// Formats a tick value with precision derived from the step size.
///
/// Integer-sized steps produce integer labels; fractional steps carry exactly
/// enough decimals to distinguish adjacent ticks.
#[must_use]
pub fn format_tick_label(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 || step <= 0.0 || !step.is_finite() {
        0
    } else {
        (-step.log10().floor()) as usize
    };
    let decimals = decimals.min(MAX_LABEL_DECIMALS);
    format!("{value:.decimals$}")
}
