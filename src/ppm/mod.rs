//! Binary PPM (P6) sample streams.
//!
//! Header is ASCII `P6 <width> <height> <maxval>` followed by one whitespace
//! byte and raw samples: 3 per pixel, big-endian, 1 byte each when
//! `maxval <= 255` and 2 bytes otherwise. Comment lines are not supported.

mod decode;
mod encode;

pub use decode::{decode_sample, sample_bytes};
pub use encode::encode_triplet;

pub(crate) use decode::parse_header;
pub(crate) use encode::write_header;

use crate::error::FbError;

/// Stream header fields, probed without touching sample data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PpmInfo {
    pub width: u32,
    pub height: u32,
    /// Maximum sample value, 1..=65535. Samples are 2 bytes each above 255.
    pub maxval: u32,
}

impl PpmInfo {
    pub fn from_bytes(data: &[u8]) -> Result<Self, FbError> {
        let header = decode::parse_header(data)?;
        Ok(Self {
            width: header.width,
            height: header.height,
            maxval: header.maxval,
        })
    }
}
