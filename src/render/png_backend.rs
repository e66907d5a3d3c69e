use std::fmt::Display;
use std::path::{Path, PathBuf};

use plotters::prelude::{BitMapBackend, Circle, IntoDrawingArea, PathElement, Text};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontTransform, IntoFont, RGBAColor, ShapeStyle, TextStyle};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign, TextOrientation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PngRenderStats {
    pub lines_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Plotters bitmap renderer backend.
///
/// Rasterizes one `RenderFrame` into a PNG file at the configured path,
/// overwriting any existing file. The surface size comes from the frame
/// viewport; nothing is kept in memory once `render` returns.
#[derive(Debug)]
pub struct PngRenderer {
    output_path: PathBuf,
    clear_color: Color,
    last_stats: PngRenderStats,
}

impl PngRenderer {
    #[must_use]
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: PngRenderStats::default(),
        }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "plotters-bitmap"
    }

    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> PngRenderStats {
        self.last_stats
    }
}

impl Renderer for PngRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        let size = (frame.viewport.width, frame.viewport.height);
        let root = BitMapBackend::new(&self.output_path, size).into_drawing_area();

        root.fill(&to_backend_color(self.clear_color))
            .map_err(|err| map_backend_error(&self.output_path, "failed to fill background", err))?;

        let mut stats = PngRenderStats::default();

        for line in &frame.lines {
            let style = ShapeStyle {
                color: to_backend_color(line.color),
                filled: false,
                stroke_width: stroke_width_px(line.stroke_width),
            };
            root.draw(&PathElement::new(
                vec![
                    (round_px(line.x1), round_px(line.y1)),
                    (round_px(line.x2), round_px(line.y2)),
                ],
                style,
            ))
            .map_err(|err| map_backend_error(&self.output_path, "failed to draw line", err))?;
            stats.lines_drawn += 1;
        }

        for circle in &frame.circles {
            let style = ShapeStyle {
                color: to_backend_color(circle.color),
                filled: true,
                stroke_width: 1,
            };
            root.draw(&Circle::new(
                (round_px(circle.cx), round_px(circle.cy)),
                circle.radius.round().max(1.0) as i32,
                style,
            ))
            .map_err(|err| map_backend_error(&self.output_path, "failed to draw marker", err))?;
            stats.circles_drawn += 1;
        }

        for text in &frame.texts {
            let h_pos = match text.h_align {
                TextHAlign::Left => HPos::Left,
                TextHAlign::Center => HPos::Center,
                TextHAlign::Right => HPos::Right,
            };
            let font = ("sans-serif", text.font_size_px).into_font();
            let font = match text.orientation {
                TextOrientation::Horizontal => font,
                TextOrientation::Vertical => font.transform(FontTransform::Rotate270),
            };
            let color = to_backend_color(text.color);
            let style = TextStyle::from(font)
                .color(&color)
                .pos(Pos::new(h_pos, VPos::Center));

            root.draw(&Text::new(
                text.text.clone(),
                (round_px(text.x), round_px(text.y)),
                style,
            ))
            .map_err(|err| map_backend_error(&self.output_path, "failed to draw text", err))?;
            stats.texts_drawn += 1;
        }

        root.present()
            .map_err(|err| map_backend_error(&self.output_path, "failed to write image", err))?;

        self.last_stats = stats;
        Ok(())
    }
}

fn to_backend_color(color: Color) -> RGBAColor {
    RGBAColor(
        channel_to_u8(color.red),
        channel_to_u8(color.green),
        channel_to_u8(color.blue),
        color.alpha,
    )
}

fn channel_to_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn round_px(value: f64) -> i32 {
    value.round() as i32
}

fn stroke_width_px(width: f64) -> u32 {
    width.round().max(1.0) as u32
}

fn map_backend_error(path: &Path, prefix: &str, err: impl Display) -> ChartError {
    ChartError::FileWrite {
        path: path.display().to_string(),
        message: format!("{prefix}: {err}"),
    }
}
