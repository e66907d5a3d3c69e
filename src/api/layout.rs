use crate::core::{PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};

use super::FigureConfig;

/// Height of the band reserved above the plot when a title is present.
pub(super) const TITLE_BAND_PX: f64 = 30.0;
/// Thickness of the band reserved for an axis label.
pub(super) const AXIS_LABEL_BAND_PX: f64 = 22.0;
/// Height reserved below the plot for x tick labels.
pub(super) const X_TICK_LABEL_BAND_PX: f64 = 20.0;
/// Width reserved left of the plot for y tick labels.
pub(super) const Y_TICK_LABEL_BAND_PX: f64 = 42.0;

/// Resolved pixel layout for one figure.
///
/// Bands are only reserved for the title and axis labels that are actually
/// configured; tick label bands are always present since every chart draws
/// its axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureLayout {
    pub viewport: Viewport,
    pub plot_area: PlotArea,
    /// Vertical center of the title band, when a title is configured.
    pub title_center_y: Option<f64>,
    /// Vertical center of the x-label band, when an x label is configured.
    pub x_label_center_y: Option<f64>,
    /// Horizontal center of the y-label band, when a y label is configured.
    pub y_label_center_x: Option<f64>,
}

impl FigureLayout {
    pub fn resolve(config: &FigureConfig, viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let margin = config.style.margin_px;

        let mut top_edge = margin;
        let title_center_y = config.title.as_ref().map(|_| {
            let center = top_edge + TITLE_BAND_PX * 0.5;
            top_edge += TITLE_BAND_PX;
            center
        });

        let mut bottom_edge = f64::from(viewport.height) - margin;
        let x_label_center_y = config.x_label.as_ref().map(|_| {
            let center = bottom_edge - AXIS_LABEL_BAND_PX * 0.5;
            bottom_edge -= AXIS_LABEL_BAND_PX;
            center
        });

        let mut left_edge = margin;
        let y_label_center_x = config.y_label.as_ref().map(|_| {
            let center = left_edge + AXIS_LABEL_BAND_PX * 0.5;
            left_edge += AXIS_LABEL_BAND_PX;
            center
        });

        let plot_left = left_edge + Y_TICK_LABEL_BAND_PX;
        let plot_top = top_edge;
        let plot_right = f64::from(viewport.width) - margin;
        let plot_bottom = bottom_edge - X_TICK_LABEL_BAND_PX;

        let plot_area = PlotArea::new(
            plot_left,
            plot_top,
            plot_right - plot_left,
            plot_bottom - plot_top,
        );
        if !plot_area.is_valid() {
            return Err(ChartError::InvalidData(format!(
                "viewport {}x{} is too small for the configured margins",
                viewport.width, viewport.height
            )));
        }

        Ok(Self {
            viewport,
            plot_area,
            title_center_y,
            x_label_center_y,
            y_label_center_x,
        })
    }
}
