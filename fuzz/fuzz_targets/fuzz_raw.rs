#![no_main]
use libfuzzer_sys::fuzz_target;
use zenfb::{Limits, OutputFormat, RawRequest};

fuzz_target!(|data: &[u8]| {
    // Raw conversion allocates from header dimensions; cap it so the
    // fuzzer explores parsing, not the allocator
    let limits = Limits {
        max_pixels: Some(1 << 16),
        max_memory_bytes: Some(1 << 20),
        ..Default::default()
    };
    for format in [OutputFormat::Rgb565, OutputFormat::Rgb888, OutputFormat::Xrgb8888] {
        let _ = RawRequest::new(format)
            .with_limits(&limits)
            .convert(data, enough::Unstoppable);
    }
});
