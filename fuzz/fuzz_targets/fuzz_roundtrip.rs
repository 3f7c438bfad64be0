#![no_main]

use libfuzzer_sys::fuzz_target;

use fftcalc_core::{forward_transform, inverse_transform, Complex};

fuzz_target!(|data: &[u8]| {
    // Each sample is two i16 components, capped at 1024 samples for speed
    let samples: Vec<Complex> = data
        .chunks_exact(4)
        .take(1024)
        .map(|c| {
            let re = i16::from_le_bytes([c[0], c[1]]);
            let im = i16::from_le_bytes([c[2], c[3]]);
            Complex::new(f64::from(re), f64::from(im))
        })
        .collect();

    let Ok(spectrum) = forward_transform(&samples) else {
        assert!(samples.is_empty());
        return;
    };
    assert!(spectrum.len().is_power_of_two());
    assert!(spectrum.len() >= samples.len());

    let back = inverse_transform(&spectrum).unwrap();
    assert_eq!(back.len(), spectrum.len());
    for (i, (b, s)) in back.iter().zip(&samples).enumerate() {
        assert!(b.approx_eq(*s, 1e-6), "sample {i}: {b} != {s}");
    }
    for b in &back[samples.len()..] {
        assert!(b.approx_eq(Complex::ZERO, 1e-6), "padding leaked: {b}");
    }
});
