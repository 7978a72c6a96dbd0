//! # zenfb
//!
//! Pixel conversion between binary PPM (`P6`) sample streams and packed
//! framebuffer pixel formats: 1–4 bytes per pixel, arbitrary per-channel
//! {offset, width} bitfields, optional indexed colormap.
//!
//! This crate is the conversion engine only. Opening devices, querying the
//! driver for format and colormap, and mapping video memory are collaborator
//! concerns; the engine receives byte buffers plus an immutable
//! [`DeviceSession`] and performs no I/O.
//!
//! ## Wire formats
//!
//! PPM samples are big-endian, device words little-endian — both fixed by
//! the formats, so conversion is explicit and independent of host byte
//! order. Narrow channels expand linearly into 8-bit values (left-justified,
//! zero-filled); sub-255 maxvals scale by truncating integer division.
//!
//! ## Non-Goals
//!
//! - Compression, dithering, gamma or color-space conversion
//! - Channels wider than 8 bits
//! - Planar (non-packed) device layouts
//!
//! ## Usage
//!
//! ```no_run
//! use zenfb::{BlitRequest, CaptureRequest, DeviceSession, PixelFormat, Unstoppable};
//!
//! // A live session comes from the device-discovery collaborator;
//! // offscreen sessions work the same way over a plain buffer.
//! let session = DeviceSession::offscreen(PixelFormat::RGB565, 320, 240)?;
//! let mut framebuffer = vec![0u8; session.stride() * session.height() as usize];
//!
//! // PPM -> device
//! let ppm: &[u8] = &[]; // your P6 bytes
//! BlitRequest::new(&session).blit(ppm, &mut framebuffer, Unstoppable)?;
//!
//! // device -> PPM (always emitted with maxval 255)
//! let stream = CaptureRequest::new(&session).capture(&framebuffer, Unstoppable)?;
//! # Ok::<(), zenfb::FbError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod colormap;
mod convert;
mod error;
mod format;
mod limits;
mod packed;
mod pixel;
mod session;

pub mod ppm;

// Re-exports
pub use colormap::ColorTable;
pub use convert::{BlitRequest, CaptureRequest, OutputFormat, RawRequest};
pub use enough::{Stop, Unstoppable};
pub use error::FbError;
pub use format::{Bitfield, PixelFormat, VisualKind};
pub use limits::Limits;
pub use packed::{read_pixel, write_pixel};
pub use pixel::Pixel;
pub use ppm::PpmInfo;
pub use session::DeviceSession;
