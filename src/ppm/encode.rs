//! P6 output: header and triplet emission. Output streams always use
//! maxval 255.

use alloc::format;
use alloc::vec::Vec;

use crate::pixel::Pixel;

pub(crate) fn write_header(out: &mut Vec<u8>, width: u32, height: u32) {
    let header = format!("P6 {width} {height} 255\n");
    out.extend_from_slice(header.as_bytes());
}

/// Emit a pixel as a PPM sample triplet: red, green, blue.
///
/// Alpha is dropped; the triplet order holds whether or not alpha is zero.
#[inline]
pub fn encode_triplet(pixel: Pixel) -> [u8; 3] {
    [pixel.r, pixel.g, pixel.b]
}
