//! Device color lookup tables.
//!
//! True/direct-color sessions get a synthesized linear ramp; indexed visuals
//! must carry the table queried from the device. Channel extraction itself
//! expands bitfields linearly (see [`crate::Bitfield::extract`]) — the table
//! rides along read-only for callers that need the device's own mapping.

use crate::error::FbError;
use crate::format::PixelFormat;

/// 256-entry color lookup table, one 16-bit ramp per channel.
#[derive(Clone)]
pub struct ColorTable {
    pub red: [u16; 256],
    pub green: [u16; 256],
    pub blue: [u16; 256],
    pub alpha: [u16; 256],
}

impl ColorTable {
    /// Synthesize a linear ramp for a direct/true-color format.
    ///
    /// For a channel of width `L`, entries `0..2^L` hold
    /// `i * 65535 / (2^L - 1)`; the remainder stays zero. Width-0 channels
    /// (absent alpha) are left all-zero.
    pub fn linear(format: &PixelFormat) -> Self {
        let mut table = Self::zeroed();
        fill_ramp(&mut table.red, format.red.width);
        fill_ramp(&mut table.green, format.green.width);
        fill_ramp(&mut table.blue, format.blue.width);
        fill_ramp(&mut table.alpha, format.alpha.width);
        table
    }

    /// Build from device-queried channel tables.
    ///
    /// Each slice must hold exactly 256 entries.
    pub fn from_channels(
        red: &[u16],
        green: &[u16],
        blue: &[u16],
        alpha: &[u16],
    ) -> Result<Self, FbError> {
        let mut table = Self::zeroed();
        copy_channel(&mut table.red, red)?;
        copy_channel(&mut table.green, green)?;
        copy_channel(&mut table.blue, blue)?;
        copy_channel(&mut table.alpha, alpha)?;
        Ok(table)
    }

    fn zeroed() -> Self {
        Self {
            red: [0; 256],
            green: [0; 256],
            blue: [0; 256],
            alpha: [0; 256],
        }
    }
}

impl core::fmt::Debug for ColorTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // 1024 entries of noise otherwise
        f.debug_struct("ColorTable").finish_non_exhaustive()
    }
}

fn fill_ramp(channel: &mut [u16; 256], width: u32) {
    if width == 0 {
        return;
    }
    let entries = 1u32 << width;
    for i in 0..entries {
        channel[i as usize] = (i * 0xffff / (entries - 1)) as u16;
    }
}

fn copy_channel(dst: &mut [u16; 256], src: &[u16]) -> Result<(), FbError> {
    if src.len() != 256 {
        return Err(FbError::BadColormapLength(src.len()));
    }
    dst.copy_from_slice(src);
    Ok(())
}
