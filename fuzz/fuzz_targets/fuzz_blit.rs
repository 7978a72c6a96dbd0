#![no_main]
use libfuzzer_sys::fuzz_target;
use zenfb::{BlitRequest, CaptureRequest, DeviceSession, PixelFormat, PpmInfo};

fuzz_target!(|data: &[u8]| {
    // Header probe must never panic
    let _ = PpmInfo::from_bytes(data);

    // Blit arbitrary bytes into a small fixed device — must never panic,
    // oversized images are cropped
    let session = DeviceSession::offscreen(PixelFormat::RGB565, 32, 32).unwrap();
    let mut fb = vec![0u8; session.stride() * 32];
    let _ = BlitRequest::new(&session).blit(data, &mut fb, enough::Unstoppable);
    let _ = CaptureRequest::new(&session).capture(&fb, enough::Unstoppable);
});
