use alloc::string::String;
use enough::StopReason;

/// Errors from PPM parsing, format validation, and raster conversion.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FbError {
    #[error("stream is not binary PPM (magic must be \"P6\")")]
    NotPpm,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("{channel} channel is {width} bits wide, 8 is the maximum")]
    ChannelTooWide { channel: &'static str, width: u32 },

    #[error("{channel} bitfield does not fit a {bits}-bit pixel word")]
    BitfieldOutOfRange { channel: &'static str, bits: u32 },

    #[error("unsupported pixel size: {0} bytes (must be 1-4)")]
    UnsupportedPixelSize(u32),

    #[error("indexed visual requires a device-supplied colormap")]
    MissingColormap,

    #[error("colormap channel has {0} entries, expected 256")]
    BadColormapLength(usize),

    #[error("raster dimensions must be nonzero")]
    EmptyRaster,

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for FbError {
    fn from(r: StopReason) -> Self {
        FbError::Cancelled(r)
    }
}
