pub mod line_series;
pub mod scale;
pub mod series;
pub mod ticks;
pub mod types;

pub use line_series::{LineSegment, MarkerPoint, project_line_segments, project_marker_points};
pub use scale::LinearScale;
pub use series::{DataBounds, Series};
pub use ticks::{AxisTick, select_ticks};
pub use types::{DataPoint, PlotArea, Viewport};
