//! Stationary transform properties.

use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use subband::{SubbandError, SwtConfig, iswt, swt, swt_max_level};

fn random_signal(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-5.0..5.0)).collect()
}

#[test]
fn bands_keep_signal_length() {
    let signal = random_signal(48, 1);
    assert_eq!(swt_max_level(signal.len()), 4);
    let coeffs = swt(&signal, "sym4", &SwtConfig::new(4)).unwrap();
    assert_eq!(coeffs.levels.len(), 4);
    for level in coeffs.levels.iter() {
        assert_eq!(level.approximations.len(), 48);
        assert_eq!(level.details.len(), 48);
    }
}

#[test]
fn round_trip_across_families() {
    for (seed, name) in ["haar", "db6", "sym7", "coif1", "bior3.3", "rbio2.4", "vaidyanathan"]
        .into_iter()
        .enumerate()
    {
        let signal = random_signal(128, seed as u64);
        for norm in [false, true] {
            let config = SwtConfig::new(3).with_norm(norm);
            let coeffs = swt(&signal, name, &config).unwrap();
            let restored = iswt(&coeffs, name, &config).unwrap();
            for (a, b) in restored.iter().zip(signal.iter()) {
                assert_abs_diff_eq!(*a, *b, epsilon = 1e-8);
            }
        }
    }
}

#[test]
fn single_level_matches_trous_filtering() {
    let signal = random_signal(16, 9);
    let coeffs = swt(&signal, "haar", &SwtConfig::new(2)).unwrap();
    let h = std::f64::consts::FRAC_1_SQRT_2;
    let first = &coeffs.levels[0].approximations;
    for (i, value) in first.iter().enumerate() {
        let expected = h * (signal[i] + signal[(i + 1) % 16]);
        assert_abs_diff_eq!(*value, expected, epsilon = 1e-12);
    }
    let second = &coeffs.levels[1].approximations;
    for (i, value) in second.iter().enumerate() {
        let expected = h * (first[i] + first[(i + 2) % 16]);
        assert_abs_diff_eq!(*value, expected, epsilon = 1e-12);
    }
}

#[test]
fn rejects_indivisible_length() {
    let signal = random_signal(20, 2);
    assert_eq!(
        swt(&signal, "db2", &SwtConfig::new(3)).unwrap_err(),
        SubbandError::LevelTooHigh {
            requested: 3,
            max: 2,
            len: 20
        }
    );
    assert_eq!(
        swt(&signal, "db2", &SwtConfig::new(1).with_start_level(2)).unwrap_err(),
        SubbandError::LevelTooHigh {
            requested: 1,
            max: 0,
            len: 20
        }
    );
}
