//! Statistical regression checks
//!
//! Not proofs of quality: fixed-seed chi-square bounds that catch gross
//! breakage of the keystream or the float conversion.

use rc4_keystream::{KeystreamGenerator, KeystreamRng};

// Chi-square critical values, 1 and 15 degrees of freedom
const CHI1_P1: f64 = 0.000;
const CHI1_P99: f64 = 6.635;
const CHI15_P1: f64 = 5.229;
const CHI15_P99: f64 = 30.578;

fn sq(x: f64) -> f64 {
    x * x
}

#[test]
fn test_float_halves_balanced() {
    let mut rng = KeystreamGenerator::new("deadbeef").unwrap();
    let n = 10_000;
    let mut smaller = 0;

    for _ in 0..n {
        let r = rng.next_float();
        assert!((0.0..1.0).contains(&r), "float should be in range of [0, 1)");
        if r < 0.5 {
            smaller += 1;
        }
    }

    let half = n as f64 / 2.0;
    let chi = (sq(smaller as f64 - half) + sq((n - smaller) as f64 - half)) / half;
    assert!(CHI1_P1 < chi && chi < CHI1_P99, "chi = {}", chi);
}

/// Returns true when both nibble histograms sit inside the 1%..99% band
fn nibble_run(rng: &mut KeystreamGenerator, n: usize) -> bool {
    let mut high = [0usize; 16];
    let mut low = [0usize; 16];

    for _ in 0..n {
        let b = rng.next_byte();
        high[(b >> 4) as usize] += 1;
        low[(b & 0x0f) as usize] += 1;
    }

    let expected = n as f64 / 16.0;
    let chi = |counts: &[usize; 16]| -> f64 {
        counts
            .iter()
            .map(|&c| sq(c as f64 - expected) / expected)
            .sum()
    };

    let (chih, chil) = (chi(&high), chi(&low));
    (CHI15_P1 < chih && chih < CHI15_P99) && (CHI15_P1 < chil && chil < CHI15_P99)
}

#[test]
fn test_byte_nibble_distribution() {
    let mut rng = KeystreamGenerator::new("deadbeef").unwrap();

    for n in [1_000, 10_000, 100_000] {
        for _ in 0..3 {
            let a = nibble_run(&mut rng, n);
            let b = nibble_run(&mut rng, n);
            let c = nibble_run(&mut rng, n);

            // only one of three consecutive runs may fail
            assert!(a || b, "N = {}", n);
            assert!(b || c, "N = {}", n);
        }
    }
}
