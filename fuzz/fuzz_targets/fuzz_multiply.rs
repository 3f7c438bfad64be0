#![no_main]

use libfuzzer_sys::fuzz_target;

use fftcalc_core::{multiply_polynomials, naive};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First byte splits the remaining bytes into two coefficient lists
    let split = 1 + usize::from(data[0]) % (data.len() - 1);
    let a: Vec<f64> = data[1..split].iter().map(|&b| f64::from(b as i8)).collect();
    let b: Vec<f64> = data[split..].iter().map(|&b| f64::from(b as i8)).collect();

    match multiply_polynomials(&a, &b) {
        Ok(product) => {
            let reference = naive::convolve(&a, &b).unwrap();
            assert_eq!(product.len(), reference.len());
            for (p, r) in product.iter().zip(&reference) {
                assert!((p - r).abs() < 1e-4, "{p} != {r}");
            }
        }
        Err(_) => assert!(a.is_empty() || b.is_empty()),
    }
});
