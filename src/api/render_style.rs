use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Visual styling for a rendered figure.
///
/// Serializable so host applications can persist/load chart setup without
/// inventing their own ad-hoc format. All defaults follow the conventional
/// single-series look: white background, one accent color for the series,
/// near-black axes and text, no grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub background_color: Color,
    pub line_color: Color,
    pub line_width: f64,
    pub marker_color: Color,
    pub marker_radius: f64,
    pub axis_color: Color,
    pub axis_width: f64,
    pub tick_length_px: f64,
    pub grid_color: Color,
    pub draw_grid: bool,
    pub text_color: Color,
    pub title_font_px: f64,
    pub label_font_px: f64,
    pub tick_font_px: f64,
    pub margin_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background_color: Color::rgb(1.0, 1.0, 1.0),
            line_color: STEEL_BLUE,
            line_width: 2.0,
            marker_color: STEEL_BLUE,
            marker_radius: 4.0,
            axis_color: Color::rgb(0.15, 0.15, 0.15),
            axis_width: 1.0,
            tick_length_px: 4.0,
            grid_color: Color::rgb(0.85, 0.85, 0.85),
            draw_grid: false,
            text_color: Color::rgb(0.1, 0.1, 0.1),
            title_font_px: 18.0,
            label_font_px: 14.0,
            tick_font_px: 11.0,
            margin_px: 10.0,
        }
    }
}

const STEEL_BLUE: Color = Color::rgb(0.275, 0.51, 0.706);

impl RenderStyle {
    pub fn validate(self) -> ChartResult<()> {
        for color in [
            self.background_color,
            self.line_color,
            self.marker_color,
            self.axis_color,
            self.grid_color,
            self.text_color,
        ] {
            color.validate()?;
        }

        for (name, value) in [
            ("line_width", self.line_width),
            ("marker_radius", self.marker_radius),
            ("axis_width", self.axis_width),
            ("tick_length_px", self.tick_length_px),
            ("title_font_px", self.title_font_px),
            ("label_font_px", self.label_font_px),
            ("tick_font_px", self.tick_font_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }

        if !self.margin_px.is_finite() || self.margin_px < 0.0 {
            return Err(ChartError::InvalidData(
                "style `margin_px` must be finite and >= 0".to_owned(),
            ));
        }

        Ok(())
    }
}
