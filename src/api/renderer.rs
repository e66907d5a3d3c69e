use tracing::debug;

use crate::core::{
    AxisTick, LinearScale, PlotArea, Series, project_line_segments, project_marker_points,
    select_ticks,
};
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, LinePrimitive, RenderFrame, TextHAlign, TextOrientation, TextPrimitive,
};

use super::{FigureConfig, FigureLayout};

#[cfg(feature = "png-backend")]
use crate::render::{PngRenderer, Renderer};
#[cfg(feature = "png-backend")]
use std::path::Path;

/// Desired pixel spacing between x-axis tick labels.
const X_TICK_TARGET_SPACING_PX: f64 = 80.0;
/// Desired pixel spacing between y-axis tick labels.
const Y_TICK_TARGET_SPACING_PX: f64 = 48.0;
/// Gap between the tick mark end and its label anchor.
const TICK_LABEL_GAP_PX: f64 = 4.0;

/// Builds deterministic render frames for one series and drives a backend.
///
/// The renderer is stateless across calls: every invocation re-derives the
/// scales from the series bounds, builds a fresh frame, and hands it to the
/// backend. Rendering the same series twice produces the same frame.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    config: FigureConfig,
}

impl ChartRenderer {
    pub fn new(config: FigureConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &FigureConfig {
        &self.config
    }

    /// Builds the backend-agnostic frame for one series.
    ///
    /// Draw order: grid, axis frame and ticks, series polyline, markers,
    /// then title and axis labels.
    pub fn build_frame(&self, series: &Series) -> ChartResult<RenderFrame> {
        let viewport = self.config.viewport()?;
        let layout = FigureLayout::resolve(&self.config, viewport)?;
        let plot = layout.plot_area;

        let bounds = series.bounds();
        let x_scale = LinearScale::new(bounds.x_min, bounds.x_max)?;
        let y_scale = LinearScale::new(bounds.y_min, bounds.y_max)?;

        let x_ticks = select_ticks(
            bounds.x_min,
            bounds.x_max,
            plot.width,
            X_TICK_TARGET_SPACING_PX,
        )?;
        let y_ticks = select_ticks(
            bounds.y_min,
            bounds.y_max,
            plot.height,
            Y_TICK_TARGET_SPACING_PX,
        )?;

        let mut frame = RenderFrame::new(viewport);
        self.push_grid(&mut frame, plot, x_scale, y_scale, &x_ticks, &y_ticks)?;
        self.push_axis_frame(&mut frame, plot);
        self.push_x_ticks(&mut frame, plot, x_scale, &x_ticks)?;
        self.push_y_ticks(&mut frame, plot, y_scale, &y_ticks)?;
        self.push_series(&mut frame, series, x_scale, y_scale, plot)?;
        self.push_captions(&mut frame, &layout);

        debug!(
            points = series.len(),
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            "built render frame"
        );
        Ok(frame)
    }

    /// Runs the full pipeline: build the frame and write it as a PNG.
    #[cfg(feature = "png-backend")]
    pub fn render_to_path(&self, series: &Series, path: impl AsRef<Path>) -> ChartResult<()> {
        let frame = self.build_frame(series)?;
        let mut renderer = PngRenderer::new(path.as_ref());
        renderer.set_clear_color(self.config.style.background_color)?;
        renderer.render(&frame)?;

        debug!(
            path = %path.as_ref().display(),
            backend = renderer.backend_name(),
            "chart written"
        );
        Ok(())
    }

    fn push_grid(
        &self,
        frame: &mut RenderFrame,
        plot: PlotArea,
        x_scale: LinearScale,
        y_scale: LinearScale,
        x_ticks: &[AxisTick],
        y_ticks: &[AxisTick],
    ) -> ChartResult<()> {
        let style = &self.config.style;
        if !style.draw_grid {
            return Ok(());
        }

        for tick in x_ticks {
            let x = plot.left + x_scale.domain_to_pixel(tick.value, plot.width)?;
            frame.lines.push(LinePrimitive::new(
                x,
                plot.top,
                x,
                plot.bottom(),
                style.axis_width,
                style.grid_color,
            ));
        }
        for tick in y_ticks {
            let y = plot.bottom() - y_scale.domain_to_pixel(tick.value, plot.height)?;
            frame.lines.push(LinePrimitive::new(
                plot.left,
                y,
                plot.right(),
                y,
                style.axis_width,
                style.grid_color,
            ));
        }

        Ok(())
    }

    fn push_axis_frame(&self, frame: &mut RenderFrame, plot: PlotArea) {
        let style = &self.config.style;
        let edges = [
            (plot.left, plot.top, plot.right(), plot.top),
            (plot.right(), plot.top, plot.right(), plot.bottom()),
            (plot.left, plot.bottom(), plot.right(), plot.bottom()),
            (plot.left, plot.top, plot.left, plot.bottom()),
        ];
        for (x1, y1, x2, y2) in edges {
            frame.lines.push(LinePrimitive::new(
                x1,
                y1,
                x2,
                y2,
                style.axis_width,
                style.axis_color,
            ));
        }
    }

    fn push_x_ticks(
        &self,
        frame: &mut RenderFrame,
        plot: PlotArea,
        x_scale: LinearScale,
        ticks: &[AxisTick],
    ) -> ChartResult<()> {
        let style = &self.config.style;
        for tick in ticks {
            let x = plot.left + x_scale.domain_to_pixel(tick.value, plot.width)?;
            frame.lines.push(LinePrimitive::new(
                x,
                plot.bottom(),
                x,
                plot.bottom() + style.tick_length_px,
                style.axis_width,
                style.axis_color,
            ));
            frame.texts.push(TextPrimitive::new(
                tick.label.clone(),
                x,
                plot.bottom() + style.tick_length_px + TICK_LABEL_GAP_PX + style.tick_font_px * 0.5,
                style.tick_font_px,
                style.text_color,
                TextHAlign::Center,
            ));
        }
        Ok(())
    }

    fn push_y_ticks(
        &self,
        frame: &mut RenderFrame,
        plot: PlotArea,
        y_scale: LinearScale,
        ticks: &[AxisTick],
    ) -> ChartResult<()> {
        let style = &self.config.style;
        for tick in ticks {
            let y = plot.bottom() - y_scale.domain_to_pixel(tick.value, plot.height)?;
            frame.lines.push(LinePrimitive::new(
                plot.left - style.tick_length_px,
                y,
                plot.left,
                y,
                style.axis_width,
                style.axis_color,
            ));
            frame.texts.push(TextPrimitive::new(
                tick.label.clone(),
                plot.left - style.tick_length_px - TICK_LABEL_GAP_PX,
                y,
                style.tick_font_px,
                style.text_color,
                TextHAlign::Right,
            ));
        }
        Ok(())
    }

    fn push_series(
        &self,
        frame: &mut RenderFrame,
        series: &Series,
        x_scale: LinearScale,
        y_scale: LinearScale,
        plot: PlotArea,
    ) -> ChartResult<()> {
        let style = &self.config.style;

        let segments = project_line_segments(series.points(), x_scale, y_scale, plot)?;
        for segment in segments {
            frame.lines.push(LinePrimitive::new(
                segment.x1,
                segment.y1,
                segment.x2,
                segment.y2,
                style.line_width,
                style.line_color,
            ));
        }

        let markers = project_marker_points(series.points(), x_scale, y_scale, plot)?;
        for marker in markers {
            frame.circles.push(CirclePrimitive::new(
                marker.x,
                marker.y,
                style.marker_radius,
                style.marker_color,
            ));
        }

        Ok(())
    }

    fn push_captions(&self, frame: &mut RenderFrame, layout: &FigureLayout) {
        let style = &self.config.style;
        let plot = layout.plot_area;

        if let (Some(title), Some(center_y)) = (&self.config.title, layout.title_center_y) {
            frame.texts.push(TextPrimitive::new(
                title.clone(),
                plot.center_x(),
                center_y,
                style.title_font_px,
                style.text_color,
                TextHAlign::Center,
            ));
        }

        if let (Some(label), Some(center_y)) = (&self.config.x_label, layout.x_label_center_y) {
            frame.texts.push(TextPrimitive::new(
                label.clone(),
                plot.center_x(),
                center_y,
                style.label_font_px,
                style.text_color,
                TextHAlign::Center,
            ));
        }

        if let (Some(label), Some(center_x)) = (&self.config.y_label, layout.y_label_center_x) {
            frame.texts.push(
                TextPrimitive::new(
                    label.clone(),
                    center_x,
                    plot.center_y(),
                    style.label_font_px,
                    style.text_color,
                    TextHAlign::Center,
                )
                .with_orientation(TextOrientation::Vertical),
            );
        }
    }
}
