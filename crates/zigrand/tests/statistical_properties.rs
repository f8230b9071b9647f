//! Statistical sanity checks over long sample runs.
//!
//! These are not a substitute for a full test battery; they catch gross
//! errors such as a mis-scaled conversion or a broken ziggurat table.

use approx::assert_abs_diff_eq;
use zigrand::{EngineKind, RandomStream};

/// Raw moments E[z^k], k = 1..=6, of `n` draws.
fn raw_moments(n: usize, mut draw: impl FnMut() -> f64) -> [f64; 6] {
    let mut sums = [0.0f64; 6];
    for _ in 0..n {
        let z = draw();
        let mut power = 1.0;
        for sum in sums.iter_mut() {
            power *= z;
            *sum += power;
        }
    }
    sums.map(|s| s / n as f64)
}

/// Standard normal raw moments and tolerances for 10^7 draws.
const NORMAL_MOMENTS: [(f64, f64); 6] = [
    (0.0, 0.002),
    (1.0, 0.003),
    (0.0, 0.008),
    (3.0, 0.02),
    (0.0, 0.06),
    (15.0, 0.2),
];

/// Test ziggurat moments over 10^7 draws of the default engine.
#[test]
fn test_ziggurat_moments_default_engine() {
    let mut stream = RandomStream::init("", 0, 0).unwrap();
    let moments = raw_moments(10_000_000, || stream.draw_normal());
    for (k, (&m, &(expected, tol))) in moments.iter().zip(NORMAL_MOMENTS.iter()).enumerate() {
        assert!(
            (m - expected).abs() < tol,
            "moment {}: {} vs {} (tol {})",
            k + 1,
            m,
            expected,
            tol
        );
    }
}

/// Test ziggurat mean and variance on every engine.
#[test]
fn test_ziggurat_moments_all_engines() {
    for kind in EngineKind::ALL {
        let mut stream = RandomStream::new(kind, 12345);
        let moments = raw_moments(1_000_000, || stream.draw_normal());
        assert_abs_diff_eq!(moments[0], 0.0, epsilon = 0.006);
        assert_abs_diff_eq!(moments[1], 1.0, epsilon = 0.009);
        assert_abs_diff_eq!(moments[3], 3.0, epsilon = 0.06);
    }
}

/// Test polar-method moments on the default engine.
#[test]
fn test_polar_moments() {
    let mut stream = RandomStream::default();
    let moments = raw_moments(1_000_000, || stream.draw_normal_polar());
    assert_abs_diff_eq!(moments[0], 0.0, epsilon = 0.006);
    assert_abs_diff_eq!(moments[1], 1.0, epsilon = 0.009);
    assert_abs_diff_eq!(moments[2], 0.0, epsilon = 0.025);
    assert_abs_diff_eq!(moments[3], 3.0, epsilon = 0.06);
}

/// Test the tail frequency beyond the ziggurat base strip.
#[test]
fn test_ziggurat_tail_frequency() {
    // P(|Z| > 3.442619855899) ≈ 5.7611e-4
    let mut stream = RandomStream::new(EngineKind::Pcg64Dxsm, 99);
    let n = 2_000_000;
    let tail = (0..n)
        .filter(|_| stream.draw_normal().abs() > zigrand::normal::ZIGNOR_R)
        .count();
    let freq = tail as f64 / n as f64;
    assert_abs_diff_eq!(freq, 5.7611e-4, epsilon = 1.2e-4);
}

/// Test that 10^7 uniform doubles of the default engine stay in (0, 1).
#[test]
fn test_uniform_open_interval_default_engine() {
    let mut stream = RandomStream::default();
    let mut min = 1.0f64;
    let mut max = 0.0f64;
    let mut sum = 0.0;
    let n = 10_000_000;
    for _ in 0..n {
        let u = stream.draw_f64();
        assert!(u > 0.0 && u < 1.0, "{}", u);
        min = min.min(u);
        max = max.max(u);
        sum += u;
    }
    assert!(min < 1e-5);
    assert!(max > 1.0 - 1e-5);
    assert_abs_diff_eq!(sum / n as f64, 0.5, epsilon = 5e-4);
}

/// Test uniform range and mean on every engine.
#[test]
fn test_uniform_all_engines() {
    for kind in EngineKind::ALL {
        let mut stream = RandomStream::new(kind, 7);
        let mut buffer = vec![0.0; 1_000_000];
        stream.fill_uniform(&mut buffer);
        assert!(buffer.iter().all(|&u| u > 0.0 && u < 1.0), "{}", kind);
        let mean = buffer.iter().sum::<f64>() / buffer.len() as f64;
        assert_abs_diff_eq!(mean, 0.5, epsilon = 1.5e-3);
    }
}

/// Test that 32-bit draws cover all 16 top-nibble buckets evenly.
#[test]
fn test_u32_high_nibble_buckets() {
    for kind in EngineKind::ALL {
        let mut stream = RandomStream::new(kind, 2718);
        let mut buckets = [0u32; 16];
        let n = 160_000;
        for _ in 0..n {
            buckets[(stream.draw_u32() >> 28) as usize] += 1;
        }
        for (i, &count) in buckets.iter().enumerate() {
            // expected 10_000, sd ≈ 97
            assert!(
                (9_400..=10_600).contains(&count),
                "{} bucket {}: {}",
                kind,
                i,
                count
            );
        }
    }
}
