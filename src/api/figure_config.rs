use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

use super::RenderStyle;

const DEFAULT_WIDTH_UNITS: f64 = 6.0;
const DEFAULT_HEIGHT_UNITS: f64 = 4.0;
const DEFAULT_PIXELS_PER_UNIT: f64 = 100.0;

/// Public figure bootstrap configuration.
///
/// Sizes are given in abstract figure units and converted to pixels through
/// `pixels_per_unit`; the default 6×4 units at 100 px/unit yields a 600×400
/// surface. Serializable so hosts can persist chart setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureConfig {
    pub width_units: f64,
    pub height_units: f64,
    #[serde(default = "default_pixels_per_unit")]
    pub pixels_per_unit: f64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub x_label: Option<String>,
    #[serde(default)]
    pub y_label: Option<String>,
    #[serde(default)]
    pub style: RenderStyle,
}

fn default_pixels_per_unit() -> f64 {
    DEFAULT_PIXELS_PER_UNIT
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH_UNITS, DEFAULT_HEIGHT_UNITS)
    }
}

impl FigureConfig {
    /// Creates a config of the given figure size with no title or labels.
    #[must_use]
    pub fn new(width_units: f64, height_units: f64) -> Self {
        Self {
            width_units,
            height_units,
            pixels_per_unit: DEFAULT_PIXELS_PER_UNIT,
            title: None,
            x_label: None,
            y_label: None,
            style: RenderStyle::default(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_pixels_per_unit(mut self, pixels_per_unit: f64) -> Self {
        self.pixels_per_unit = pixels_per_unit;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("width_units", self.width_units),
            ("height_units", self.height_units),
            ("pixels_per_unit", self.pixels_per_unit),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "figure `{name}` must be finite and > 0"
                )));
            }
        }
        self.style.validate()
    }

    /// Pixel surface implied by the configured figure size.
    pub fn viewport(&self) -> ChartResult<Viewport> {
        self.validate()?;

        let width = (self.width_units * self.pixels_per_unit).round() as u32;
        let height = (self.height_units * self.pixels_per_unit).round() as u32;
        let viewport = Viewport::new(width, height);
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport { width, height });
        }

        Ok(viewport)
    }

    pub fn to_json(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|err| {
            ChartError::InvalidData(format!("failed to serialize figure config: {err}"))
        })
    }

    pub fn from_json(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|err| {
            ChartError::InvalidData(format!("failed to parse figure config json: {err}"))
        })?;
        config.validate()?;
        Ok(config)
    }
}
