#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Should not panic
        let _ = fftcalc_cli::parse_sequence(text);
        let _ = fftcalc_cli::parse_reals(text);
    }
});
