use thiserror::Error;

/// Everything recoverable that the raster, indexing and io surfaces can
/// report. Intersection code never produces errors; a miss is just `false`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("position ({x},{y}) is outside a {width}x{height} raster")]
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("a scanline of width {src} cannot be assigned to a raster of width {dst}")]
    SizeMismatch { src: usize, dst: usize },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// A malformed image file.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("bad magic: expected {expected:?}, found {found:?}")]
    BadMagic { expected: String, found: String },

    #[error("unsupported value {value} for {name}")]
    BadConstant { name: &'static str, value: i64 },

    #[error("truncated input")]
    Truncated,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
