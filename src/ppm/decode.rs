//! P6 header parsing and sample decoding.

use alloc::format;

use crate::error::FbError;
use crate::pixel::Pixel;

/// Parsed header plus the offset of the first sample byte.
pub(crate) struct PpmHeader {
    pub width: u32,
    pub height: u32,
    pub maxval: u32,
    pub data_offset: usize,
}

pub(crate) fn parse_header(data: &[u8]) -> Result<PpmHeader, FbError> {
    if data.len() < 2 {
        return Err(FbError::UnexpectedEof);
    }
    if &data[..2] != b"P6" {
        return Err(FbError::NotPpm);
    }

    let mut pos = 2usize;
    let width = parse_field(data, &mut pos, "width")?;
    let height = parse_field(data, &mut pos, "height")?;
    let maxval = parse_field(data, &mut pos, "maxval")?;

    // Exactly one whitespace byte separates maxval from sample data.
    match data.get(pos) {
        Some(b) if b.is_ascii_whitespace() => pos += 1,
        Some(_) => {
            return Err(FbError::InvalidHeader(
                "missing whitespace after maxval".into(),
            ));
        }
        None => return Err(FbError::UnexpectedEof),
    }

    if maxval == 0 || maxval > 65535 {
        return Err(FbError::InvalidHeader(format!(
            "maxval {maxval} out of range 1..=65535"
        )));
    }

    Ok(PpmHeader {
        width,
        height,
        maxval,
        data_offset: pos,
    })
}

fn parse_field(data: &[u8], pos: &mut usize, name: &'static str) -> Result<u32, FbError> {
    while data.get(*pos).is_some_and(|b| b.is_ascii_whitespace()) {
        *pos += 1;
    }
    let start = *pos;
    let mut value: u32 = 0;
    while let Some(&b) = data.get(*pos) {
        if !b.is_ascii_digit() {
            break;
        }
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add((b - b'0') as u32))
            .ok_or_else(|| FbError::InvalidHeader(format!("{name} overflows")))?;
        *pos += 1;
    }
    if *pos == start {
        return match data.get(*pos) {
            None => Err(FbError::UnexpectedEof),
            Some(_) => Err(FbError::InvalidHeader(format!("missing {name}"))),
        };
    }
    Ok(value)
}

/// Bytes one pixel occupies in the sample stream for a given maxval.
#[inline]
pub fn sample_bytes(maxval: u32) -> usize {
    if maxval > 255 { 6 } else { 3 }
}

/// Decode one sample triplet into a [`Pixel`]. Alpha is always 0.
///
/// `sample` must hold at least [`sample_bytes`] bytes. Scaling:
/// - maxval 255: identity.
/// - maxval 65535: the high byte of each big-endian sample. This is the
///   legacy `value >> 8` shortcut, not an exact `value * 255 / 65535` — the
///   two differ by at most one, and the shortcut is the observable contract.
/// - anything else: `sample * 255 / maxval`, truncating.
#[inline]
pub fn decode_sample(sample: &[u8], maxval: u32) -> Pixel {
    if maxval == 255 {
        Pixel::new(sample[0] as u32, sample[1] as u32, sample[2] as u32, 0)
    } else if maxval == 65535 {
        Pixel::new(sample[0] as u32, sample[2] as u32, sample[4] as u32, 0)
    } else if maxval > 255 {
        let r = u16::from_be_bytes([sample[0], sample[1]]) as u32;
        let g = u16::from_be_bytes([sample[2], sample[3]]) as u32;
        let b = u16::from_be_bytes([sample[4], sample[5]]) as u32;
        Pixel::new(r * 255 / maxval, g * 255 / maxval, b * 255 / maxval, 0)
    } else {
        Pixel::new(
            sample[0] as u32 * 255 / maxval,
            sample[1] as u32 * 255 / maxval,
            sample[2] as u32 * 255 / maxval,
            0,
        )
    }
}
