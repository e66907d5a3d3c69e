mod figure_config;
mod layout;
mod render_style;
mod renderer;

pub use figure_config::FigureConfig;
pub use layout::FigureLayout;
pub use render_style::RenderStyle;
pub use renderer::ChartRenderer;

#[cfg(feature = "png-backend")]
use std::path::Path;

#[cfg(feature = "png-backend")]
use crate::core::Series;
#[cfg(feature = "png-backend")]
use crate::error::ChartResult;

/// Renders a single marker-annotated line chart to a PNG file.
///
/// `x` and `y` must be equal-length with at least one point; a mismatch fails
/// with `ChartError::SeriesLengthMismatch` before any file is created. The
/// figure uses the default 6×4-unit size, an existing file at `output_path`
/// is overwritten, and an unwritable path fails with `ChartError::FileWrite`.
#[cfg(feature = "png-backend")]
pub fn render_line_chart(
    x: &[f64],
    y: &[f64],
    title: &str,
    x_label: &str,
    y_label: &str,
    output_path: impl AsRef<Path>,
) -> ChartResult<()> {
    let series = Series::from_xy(x, y)?;
    let config = FigureConfig::default()
        .with_title(title)
        .with_x_label(x_label)
        .with_y_label(y_label);

    ChartRenderer::new(config)?.render_to_path(&series, output_path)
}
