//! Packed device pixel access.
//!
//! Device words are little-endian on the wire, always converted explicitly —
//! host byte order never enters into it. The 3-byte case loads and stores
//! exactly 3 bytes; a wide store would touch one byte past the pixel.

use crate::format::PixelFormat;
use crate::pixel::Pixel;

#[inline]
fn load_word(buf: &[u8], addr: usize, bytes_per_pixel: u32) -> u32 {
    match bytes_per_pixel {
        1 => buf[addr] as u32,
        2 => u16::from_le_bytes([buf[addr], buf[addr + 1]]) as u32,
        3 => u32::from_le_bytes([buf[addr], buf[addr + 1], buf[addr + 2], 0]),
        _ => u32::from_le_bytes([buf[addr], buf[addr + 1], buf[addr + 2], buf[addr + 3]]),
    }
}

#[inline]
fn store_word(buf: &mut [u8], addr: usize, bytes_per_pixel: u32, word: u32) {
    let bytes = word.to_le_bytes();
    let n = bytes_per_pixel as usize;
    buf[addr..addr + n].copy_from_slice(&bytes[..n]);
}

/// Read the device pixel at byte address `addr` into a [`Pixel`].
///
/// Callers guarantee `addr` plus the pixel width is inside `buf`; the raster
/// passes check the full reach up front.
#[inline]
pub fn read_pixel(buf: &[u8], addr: usize, format: &PixelFormat) -> Pixel {
    let word = load_word(buf, addr, format.bytes_per_pixel);
    Pixel {
        r: format.red.extract(word),
        g: format.green.extract(word),
        b: format.blue.extract(word),
        a: format.alpha.extract(word),
    }
}

/// Pack a [`Pixel`] into a device word and store it at byte address `addr`.
#[inline]
pub fn write_pixel(buf: &mut [u8], addr: usize, format: &PixelFormat, pixel: Pixel) {
    let word = format.red.insert(pixel.r)
        | format.green.insert(pixel.g)
        | format.blue.insert(pixel.b)
        | format.alpha.insert(pixel.a);
    store_word(buf, addr, format.bytes_per_pixel, word);
}
