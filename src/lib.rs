//! linechart-rs: headless line-chart rendering to a PNG file.
//!
//! The crate keeps a strict split between chart domain logic (`core`),
//! backend-agnostic draw primitives (`render`), and the public figure API
//! (`api`). Backends only ever see a fully materialized `RenderFrame`, so
//! every piece of geometry can be asserted on without a raster surface.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "png-backend")]
pub use api::render_line_chart;
pub use api::{ChartRenderer, FigureConfig, RenderStyle};
pub use error::{ChartError, ChartResult};
