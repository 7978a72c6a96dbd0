use enough::Unstoppable;
use zenfb::*;

/// Build a P6 stream from raw sample bytes.
fn ppm(width: u32, height: u32, maxval: u32, samples: &[u8]) -> Vec<u8> {
    let mut out = format!("P6 {width} {height} {maxval}\n").into_bytes();
    out.extend_from_slice(samples);
    out
}

#[test]
fn ppm_to_rgb565_packs_word() {
    let session = DeviceSession::offscreen(PixelFormat::RGB565, 1, 1).unwrap();
    let mut fb = vec![0u8; 2];

    let data = ppm(1, 1, 255, &[255, 128, 0]);
    BlitRequest::new(&session)
        .blit(&data, &mut fb, Unstoppable)
        .unwrap();

    // red 255 -> 31 << 11, green 128 -> 32 << 5, blue 0; little-endian word 0xFC00
    assert_eq!(fb, [0x00, 0xFC]);
}

#[test]
fn rgb565_capture_expands_linearly() {
    let session = DeviceSession::offscreen(PixelFormat::RGB565, 1, 1).unwrap();
    let fb = 0xFC00u16.to_le_bytes();

    let stream = CaptureRequest::new(&session)
        .capture(&fb, Unstoppable)
        .unwrap();

    // 5-bit red 31 -> 248, 6-bit green 32 -> 128: low bits zero-filled
    assert!(stream.starts_with(b"P6 1 1 255\n"));
    assert_eq!(&stream[stream.len() - 3..], &[248, 128, 0]);
}

#[test]
fn xrgb8888_roundtrip_is_byte_exact() {
    // 8-bit channels at byte offsets lose nothing either way
    let w = 4u32;
    let h = 3u32;
    let mut samples = Vec::new();
    for i in 0..(w * h) {
        samples.push((i * 21) as u8);
        samples.push(255 - (i * 17) as u8);
        samples.push((i * 93) as u8);
    }

    let session = DeviceSession::offscreen(PixelFormat::XRGB8888, w, h).unwrap();
    let mut fb = vec![0u8; session.stride() * h as usize];

    let data = ppm(w, h, 255, &samples);
    BlitRequest::new(&session)
        .blit(&data, &mut fb, Unstoppable)
        .unwrap();

    let stream = CaptureRequest::new(&session)
        .capture(&fb, Unstoppable)
        .unwrap();
    assert_eq!(&stream[stream.len() - samples.len()..], &samples[..]);
}

#[test]
fn two_pixel_stream_decodes_row_major() {
    let session = DeviceSession::offscreen(PixelFormat::XRGB8888, 2, 1).unwrap();
    let mut fb = vec![0u8; 8];

    let data = ppm(2, 1, 255, &[255, 0, 0, 0, 255, 0]);
    BlitRequest::new(&session)
        .blit(&data, &mut fb, Unstoppable)
        .unwrap();

    let first = read_pixel(&fb, session.address_of(0, 0), session.format());
    let second = read_pixel(&fb, session.address_of(1, 0), session.format());
    assert_eq!(first, Pixel::new(255, 0, 0, 0));
    assert_eq!(second, Pixel::new(0, 255, 0, 0));
}

#[test]
fn wider_image_skips_trailing_samples_per_row() {
    // 4x2 image onto a 2x2 device: each device row takes the first two
    // image pixels of its own row, not a wrapped continuation.
    let session = DeviceSession::offscreen(PixelFormat::XRGB8888, 2, 2).unwrap();
    let mut fb = vec![0u8; session.stride() * 2];

    #[rustfmt::skip]
    let samples = [
        10, 0, 0,  20, 0, 0,  30, 0, 0,  40, 0, 0,
        50, 0, 0,  60, 0, 0,  70, 0, 0,  80, 0, 0,
    ];
    let data = ppm(4, 2, 255, &samples);
    BlitRequest::new(&session)
        .blit(&data, &mut fb, Unstoppable)
        .unwrap();

    let fmt = session.format();
    assert_eq!(read_pixel(&fb, session.address_of(0, 0), fmt).r, 10);
    assert_eq!(read_pixel(&fb, session.address_of(1, 0), fmt).r, 20);
    assert_eq!(read_pixel(&fb, session.address_of(0, 1), fmt).r, 50);
    assert_eq!(read_pixel(&fb, session.address_of(1, 1), fmt).r, 60);
}

#[test]
fn taller_image_crops_to_device_height() {
    let session = DeviceSession::offscreen(PixelFormat::RGB565, 1, 1).unwrap();
    let mut fb = vec![0u8; 2];

    let data = ppm(1, 3, 255, &[255, 255, 255, 1, 1, 1, 2, 2, 2]);
    BlitRequest::new(&session)
        .blit(&data, &mut fb, Unstoppable)
        .unwrap();
    assert_eq!(fb, [0xFF, 0xFF]);
}

#[test]
fn sixteen_bit_samples_roundtrip_via_high_byte() {
    let session = DeviceSession::offscreen(PixelFormat::XRGB8888, 1, 1).unwrap();
    let mut fb = vec![0u8; 4];

    // maxval 65535: channel takes the high byte of each big-endian sample
    let data = ppm(1, 1, 65535, &[0x80, 0xFF, 0x40, 0x01, 0x00, 0xFE]);
    BlitRequest::new(&session)
        .blit(&data, &mut fb, Unstoppable)
        .unwrap();

    let px = read_pixel(&fb, 0, session.format());
    assert_eq!(px, Pixel::new(0x80, 0x40, 0x00, 0));
}

#[test]
fn raw_request_dispatches_all_formats() {
    let data = ppm(2, 1, 255, &[255, 128, 0, 0, 0, 255]);

    let rgb565 = RawRequest::new(OutputFormat::Rgb565)
        .convert(&data, Unstoppable)
        .unwrap();
    assert_eq!(rgb565, [0x00, 0xFC, 0x1F, 0x00]);

    let rgb888 = RawRequest::new(OutputFormat::Rgb888)
        .convert(&data, Unstoppable)
        .unwrap();
    // stored B, G, R
    assert_eq!(rgb888, [0, 128, 255, 255, 0, 0]);

    let xrgb = RawRequest::new(OutputFormat::Xrgb8888)
        .convert(&data, Unstoppable)
        .unwrap();
    assert_eq!(xrgb.len(), 8);
    assert_eq!(&xrgb[..4], &[0, 128, 255, 0]);
}

#[test]
fn capture_rejects_empty_raster() {
    let session = DeviceSession::offscreen(PixelFormat::RGB565, 0, 4).unwrap();
    let result = CaptureRequest::new(&session).capture(&[], Unstoppable);
    assert!(matches!(result, Err(FbError::EmptyRaster)));
}

#[test]
fn limits_reject_large_stream() {
    let session = DeviceSession::offscreen(PixelFormat::RGB565, 4, 4).unwrap();
    let mut fb = vec![0u8; session.stride() * 4];
    let data = ppm(4, 4, 255, &[0; 48]);

    let limits = Limits {
        max_pixels: Some(4),
        ..Default::default()
    };
    let result = BlitRequest::new(&session)
        .with_limits(&limits)
        .blit(&data, &mut fb, Unstoppable);
    match result.unwrap_err() {
        FbError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}

#[test]
fn undersized_framebuffer_is_rejected_before_any_write() {
    let session = DeviceSession::offscreen(PixelFormat::XRGB8888, 2, 2).unwrap();
    let mut fb = vec![0u8; 15]; // one byte short of 2*2*4

    let data = ppm(2, 2, 255, &[9; 12]);
    let result = BlitRequest::new(&session).blit(&data, &mut fb, Unstoppable);
    match result.unwrap_err() {
        FbError::BufferTooSmall { needed: 16, actual: 15 } => {}
        other => panic!("expected BufferTooSmall, got {other:?}"),
    }
    assert!(fb.iter().all(|&b| b == 0), "no partial output on error");
}

#[test]
fn short_sample_payload_is_rejected_before_any_write() {
    let session = DeviceSession::offscreen(PixelFormat::XRGB8888, 2, 2).unwrap();
    let mut fb = vec![0u8; 16];

    let data = ppm(2, 2, 255, &[1, 2, 3]); // 9 bytes missing
    let result = BlitRequest::new(&session).blit(&data, &mut fb, Unstoppable);
    assert!(matches!(result, Err(FbError::UnexpectedEof)));
    assert!(fb.iter().all(|&b| b == 0));
}
