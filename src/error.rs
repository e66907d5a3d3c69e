use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("series length mismatch: x has {x_len} points, y has {y_len}")]
    SeriesLengthMismatch { x_len: usize, y_len: usize },

    #[error("failed to write chart to `{path}`: {message}")]
    FileWrite { path: String, message: String },
}
