//! Immutable per-device conversion state.
//!
//! Discovery and mapping collaborators build a [`DeviceSession`] once per
//! device and pass it by reference into every conversion; the engine holds
//! no other state between calls.

use crate::colormap::ColorTable;
use crate::error::FbError;
use crate::format::{PixelFormat, VisualKind};

/// Everything the engine needs to know about one device: pixel format,
/// visual kind, colormap, raster geometry, and panning offsets.
///
/// Validated on construction; read-only afterward.
#[derive(Clone, Debug)]
pub struct DeviceSession {
    format: PixelFormat,
    visual: VisualKind,
    colormap: ColorTable,
    width: u32,
    height: u32,
    stride: usize,
    x_offset: u32,
    y_offset: u32,
}

impl DeviceSession {
    /// Build a session from collaborator-supplied device state.
    ///
    /// `stride` is the device row pitch in bytes (driver `line_length`).
    /// Indexed visuals must supply the device-queried `colormap`; for
    /// true/direct color a linear ramp is synthesized when none is given.
    pub fn new(
        format: PixelFormat,
        visual: VisualKind,
        width: u32,
        height: u32,
        stride: usize,
        colormap: Option<ColorTable>,
    ) -> Result<Self, FbError> {
        format.validate()?;
        let min_stride = (width as usize)
            .checked_mul(format.bytes_per_pixel as usize)
            .ok_or(FbError::DimensionsTooLarge { width, height })?;
        if stride < min_stride {
            return Err(FbError::BufferTooSmall {
                needed: min_stride,
                actual: stride,
            });
        }
        let colormap = match colormap {
            Some(table) => table,
            None if visual.is_indexed() => return Err(FbError::MissingColormap),
            None => ColorTable::linear(&format),
        };
        Ok(Self {
            format,
            visual,
            colormap,
            width,
            height,
            stride,
            x_offset: 0,
            y_offset: 0,
        })
    }

    /// Synthetic true-color session over a tightly packed buffer.
    ///
    /// Row pitch is exactly `width * bytes_per_pixel`, no panning. Used for
    /// raw-output conversion and tests.
    pub fn offscreen(format: PixelFormat, width: u32, height: u32) -> Result<Self, FbError> {
        let stride = (width as usize)
            .checked_mul(format.bytes_per_pixel as usize)
            .ok_or(FbError::DimensionsTooLarge { width, height })?;
        Self::new(format, VisualKind::TrueColor, width, height, stride, None)
    }

    /// Apply the device's panning offsets (driver `xoffset`/`yoffset`).
    pub fn with_pan(mut self, x_offset: u32, y_offset: u32) -> Self {
        self.x_offset = x_offset;
        self.y_offset = y_offset;
        self
    }

    pub fn format(&self) -> &PixelFormat {
        &self.format
    }

    pub fn visual(&self) -> VisualKind {
        self.visual
    }

    /// The session colormap: device-queried for indexed visuals, a linear
    /// ramp otherwise.
    pub fn colormap(&self) -> &ColorTable {
        &self.colormap
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Byte address of the pixel at visible coordinates `(x, y)`.
    #[inline]
    pub fn address_of(&self, x: u32, y: u32) -> usize {
        (y as usize + self.y_offset as usize) * self.stride
            + (x as usize + self.x_offset as usize) * self.format.bytes_per_pixel as usize
    }

    /// Buffer length needed to reach the last pixel of a `w` x `h` raster,
    /// or `None` on address overflow.
    pub(crate) fn required_bytes(&self, w: u32, h: u32) -> Option<usize> {
        if w == 0 || h == 0 {
            return Some(0);
        }
        let bypp = self.format.bytes_per_pixel as usize;
        let row = (h - 1) as usize + self.y_offset as usize;
        let col = (w - 1) as usize + self.x_offset as usize;
        row.checked_mul(self.stride)?
            .checked_add(col.checked_mul(bypp)?)?
            .checked_add(bypp)
    }
}
