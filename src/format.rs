//! Device pixel format descriptors: per-channel bitfields, word size, visual kind.

use crate::error::FbError;

/// Position of one color channel inside a packed device word.
///
/// `width == 0` denotes an absent channel (RGB565 devices report alpha as
/// 0/0): extraction yields 0 and insertion contributes nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bitfield {
    /// Bit offset of the field's least significant bit.
    pub offset: u32,
    /// Field width in bits, at most 8.
    pub width: u32,
}

impl Bitfield {
    pub const fn new(offset: u32, width: u32) -> Self {
        Self { offset, width }
    }

    /// Extract this channel from a device word, left-justified into a byte.
    ///
    /// The low `8 - width` bits of the result are zero-filled; narrow fields
    /// are expanded linearly, never through a colormap. Requires a validated
    /// descriptor (`width <= 8`).
    #[inline]
    pub fn extract(&self, word: u32) -> u8 {
        let raw = (word >> self.offset) & ((1u32 << self.width) - 1);
        (raw << (8 - self.width)) as u8
    }

    /// Position the top `width` bits of `value` at this channel's offset.
    ///
    /// The low `8 - width` bits of `value` are discarded. Callers OR the
    /// four channel contributions together to build a device word.
    #[inline]
    pub fn insert(&self, value: u8) -> u32 {
        ((value as u32) >> (8 - self.width)) << self.offset
    }

    fn validate(&self, channel: &'static str, word_bits: u32) -> Result<(), FbError> {
        if self.width > 8 {
            return Err(FbError::ChannelTooWide {
                channel,
                width: self.width,
            });
        }
        if self
            .offset
            .checked_add(self.width)
            .is_none_or(|end| end > word_bits)
        {
            return Err(FbError::BitfieldOutOfRange {
                channel,
                bits: word_bits,
            });
        }
        Ok(())
    }
}

/// Packed device pixel layout: word size plus one bitfield per channel.
///
/// Device words are little-endian on the wire regardless of host order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelFormat {
    /// Bytes per device pixel word, 1 to 4.
    pub bytes_per_pixel: u32,
    pub red: Bitfield,
    pub green: Bitfield,
    pub blue: Bitfield,
    pub alpha: Bitfield,
}

impl PixelFormat {
    /// 16-bit 5/6/5, no alpha.
    pub const RGB565: PixelFormat = PixelFormat {
        bytes_per_pixel: 2,
        red: Bitfield::new(11, 5),
        green: Bitfield::new(5, 6),
        blue: Bitfield::new(0, 5),
        alpha: Bitfield::new(0, 0),
    };

    /// 24-bit 8/8/8, no alpha. Stored as B, G, R bytes (little-endian word).
    pub const RGB888: PixelFormat = PixelFormat {
        bytes_per_pixel: 3,
        red: Bitfield::new(16, 8),
        green: Bitfield::new(8, 8),
        blue: Bitfield::new(0, 8),
        alpha: Bitfield::new(0, 0),
    };

    /// 32-bit 8/8/8/8 with an alpha byte (typically 0 on framebuffers).
    pub const XRGB8888: PixelFormat = PixelFormat {
        bytes_per_pixel: 4,
        red: Bitfield::new(16, 8),
        green: Bitfield::new(8, 8),
        blue: Bitfield::new(0, 8),
        alpha: Bitfield::new(24, 8),
    };

    /// Validate word size and channel bitfields.
    ///
    /// Rejects `bytes_per_pixel` outside 1..=4, any channel wider than
    /// 8 bits, and any bitfield reaching past the pixel word.
    pub fn validate(&self) -> Result<(), FbError> {
        if !(1..=4).contains(&self.bytes_per_pixel) {
            return Err(FbError::UnsupportedPixelSize(self.bytes_per_pixel));
        }
        let word_bits = self.bytes_per_pixel * 8;
        self.red.validate("red", word_bits)?;
        self.green.validate("green", word_bits)?;
        self.blue.validate("blue", word_bits)?;
        self.alpha.validate("alpha", word_bits)?;
        Ok(())
    }
}

/// How device pixel values map to color intensity.
///
/// A closed set: anything a driver reports outside these four kinds is
/// rejected by the discovery collaborator before a session exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VisualKind {
    /// Channel bit patterns map linearly to intensity.
    TrueColor,
    /// Like true color, but the device applies a per-channel lookup.
    DirectColor,
    /// Indexed: pixel values are colormap indices.
    PseudoColor,
    /// Indexed with a read-only, device-fixed colormap.
    StaticPseudoColor,
}

impl VisualKind {
    /// Whether this kind requires a device-supplied colormap.
    pub fn is_indexed(&self) -> bool {
        matches!(self, VisualKind::PseudoColor | VisualKind::StaticPseudoColor)
    }
}
