//! Raster conversion passes: PPM stream to device memory and back.
//!
//! Both directions walk the raster row-major, top row first, visiting each
//! device pixel exactly once. Every validation error is raised before the
//! first byte of output is written.

use alloc::vec;
use alloc::vec::Vec;

use enough::Stop;

use crate::error::FbError;
use crate::format::PixelFormat;
use crate::limits::Limits;
use crate::packed::{read_pixel, write_pixel};
use crate::ppm;
use crate::session::DeviceSession;

/// PPM stream → device memory.
///
/// The image is cropped to the session raster on both axes; when the image
/// is wider than the device, trailing samples of each row are skipped.
#[derive(Clone, Debug)]
pub struct BlitRequest<'a> {
    session: &'a DeviceSession,
    limits: Option<&'a Limits>,
}

impl<'a> BlitRequest<'a> {
    pub fn new(session: &'a DeviceSession) -> Self {
        Self {
            session,
            limits: None,
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode `ppm_data` and write the visible region into `framebuffer`.
    pub fn blit(
        &self,
        ppm_data: &[u8],
        framebuffer: &mut [u8],
        stop: impl Stop,
    ) -> Result<(), FbError> {
        blit(self.session, self.limits, ppm_data, framebuffer, &stop)
    }
}

/// Device memory → PPM stream (always maxval 255).
#[derive(Clone, Debug)]
pub struct CaptureRequest<'a> {
    session: &'a DeviceSession,
    limits: Option<&'a Limits>,
}

impl<'a> CaptureRequest<'a> {
    pub fn new(session: &'a DeviceSession) -> Self {
        Self {
            session,
            limits: None,
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Read the full session raster out of `framebuffer` as a P6 stream.
    pub fn capture(&self, framebuffer: &[u8], stop: impl Stop) -> Result<Vec<u8>, FbError> {
        capture(self.session, self.limits, framebuffer, &stop)
    }
}

fn blit(
    session: &DeviceSession,
    limits: Option<&Limits>,
    data: &[u8],
    framebuffer: &mut [u8],
    stop: &dyn Stop,
) -> Result<(), FbError> {
    let header = ppm::parse_header(data)?;
    if let Some(limits) = limits {
        limits.check_raster(header.width, header.height)?;
    }

    let spp = ppm::sample_bytes(header.maxval);
    let img_w = header.width as usize;
    let expected = img_w
        .checked_mul(header.height as usize)
        .and_then(|wh| wh.checked_mul(spp))
        .ok_or(FbError::DimensionsTooLarge {
            width: header.width,
            height: header.height,
        })?;
    let samples = data
        .get(header.data_offset..)
        .ok_or(FbError::UnexpectedEof)?;
    if samples.len() < expected {
        return Err(FbError::UnexpectedEof);
    }

    // Crop to the visible raster.
    let w = header.width.min(session.width());
    let h = header.height.min(session.height());
    if w == 0 || h == 0 {
        return Ok(());
    }

    let needed = session
        .required_bytes(w, h)
        .ok_or(FbError::DimensionsTooLarge {
            width: w,
            height: h,
        })?;
    if framebuffer.len() < needed {
        return Err(FbError::BufferTooSmall {
            needed,
            actual: framebuffer.len(),
        });
    }

    stop.check()?;

    let format = session.format();
    let row_skip = (img_w - w as usize) * spp;
    let mut src = 0usize;
    for y in 0..h {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..w {
            let pixel = ppm::decode_sample(&samples[src..], header.maxval);
            write_pixel(framebuffer, session.address_of(x, y), format, pixel);
            src += spp;
        }
        src += row_skip;
    }
    Ok(())
}

fn capture(
    session: &DeviceSession,
    limits: Option<&Limits>,
    framebuffer: &[u8],
    stop: &dyn Stop,
) -> Result<Vec<u8>, FbError> {
    let w = session.width();
    let h = session.height();
    if w == 0 || h == 0 {
        return Err(FbError::EmptyRaster);
    }
    if let Some(limits) = limits {
        limits.check_raster(w, h)?;
    }

    let needed = session
        .required_bytes(w, h)
        .ok_or(FbError::DimensionsTooLarge {
            width: w,
            height: h,
        })?;
    if framebuffer.len() < needed {
        return Err(FbError::BufferTooSmall {
            needed,
            actual: framebuffer.len(),
        });
    }

    let payload = (w as usize)
        .checked_mul(h as usize)
        .and_then(|wh| wh.checked_mul(3))
        .ok_or(FbError::DimensionsTooLarge {
            width: w,
            height: h,
        })?;
    if let Some(limits) = limits {
        limits.check_alloc(payload)?;
    }

    stop.check()?;

    let mut out = Vec::with_capacity(payload + 24);
    ppm::write_header(&mut out, w, h);

    let format = session.format();
    for y in 0..h {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..w {
            let pixel = read_pixel(framebuffer, session.address_of(x, y), format);
            out.extend_from_slice(&ppm::encode_triplet(pixel));
        }
    }
    Ok(out)
}

/// Raw output layouts for conversion without a live device session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// 16-bit 5/6/5.
    Rgb565,
    /// 24-bit B, G, R bytes.
    Rgb888,
    /// 32-bit B, G, R, A bytes.
    Xrgb8888,
}

impl OutputFormat {
    pub fn pixel_format(&self) -> PixelFormat {
        match self {
            OutputFormat::Rgb565 => PixelFormat::RGB565,
            OutputFormat::Rgb888 => PixelFormat::RGB888,
            OutputFormat::Xrgb8888 => PixelFormat::XRGB8888,
        }
    }
}

/// PPM stream → tightly packed raw pixels in a fixed [`OutputFormat`].
///
/// Output dimensions come from the stream header; no cropping.
#[derive(Clone, Debug)]
pub struct RawRequest<'a> {
    format: OutputFormat,
    limits: Option<&'a Limits>,
}

impl<'a> RawRequest<'a> {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            limits: None,
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn convert(&self, ppm_data: &[u8], stop: impl Stop) -> Result<Vec<u8>, FbError> {
        let info = ppm::PpmInfo::from_bytes(ppm_data)?;
        if let Some(limits) = self.limits {
            limits.check_raster(info.width, info.height)?;
        }

        let format = self.format.pixel_format();
        let bytes = (info.width as usize)
            .checked_mul(info.height as usize)
            .and_then(|wh| wh.checked_mul(format.bytes_per_pixel as usize))
            .ok_or(FbError::DimensionsTooLarge {
                width: info.width,
                height: info.height,
            })?;
        if let Some(limits) = self.limits {
            limits.check_alloc(bytes)?;
        }

        let session = DeviceSession::offscreen(format, info.width, info.height)?;
        let mut raw = vec![0u8; bytes];
        blit(&session, self.limits, ppm_data, &mut raw, &stop)?;
        Ok(raw)
    }
}
