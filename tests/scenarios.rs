//! Fixed input scenarios with known coefficients.

use approx::assert_abs_diff_eq;
use ndarray::ArrayD;
use subband::{
    ExtensionMode, SubbandError, dwt, dwt_coeff_len, dwt_max_level, dwtn, extend, idwt, lookup,
    wavedec,
};

const H: f64 = std::f64::consts::FRAC_1_SQRT_2;

#[test]
fn haar_periodization_pairs() {
    let signal = [1.0f64, 2., 3., 4., 5., 6., 7., 8.];
    let coeffs = dwt(&signal, "haar", ExtensionMode::Periodization).unwrap();
    for (a, b) in coeffs
        .approximations
        .iter()
        .zip([3. * H, 7. * H, 11. * H, 15. * H])
    {
        assert_abs_diff_eq!(*a, b, epsilon = 1e-12);
    }
    for d in coeffs.details.iter() {
        assert_abs_diff_eq!(*d, -H, epsilon = 1e-12);
    }
    let restored = idwt(
        Some(coeffs.approximations.as_slice()),
        Some(coeffs.details.as_slice()),
        "haar",
        ExtensionMode::Periodization,
    )
    .unwrap();
    for (a, b) in restored.iter().zip(signal.iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
    }
}

#[test]
fn db2_symmetric_reference() {
    let signal = [1.0f64, 2., 3., 4., 5., 6., 7., 8.];
    let coeffs = dwt(&signal, "db2", ExtensionMode::Symmetric).unwrap();
    let approximations = [
        1.7677669529668640,
        2.3107890345415143,
        5.1392161592877050,
        7.9676432840338958,
        10.9601551083909925,
    ];
    let details = [-0.6123724356956117, 0., 0., 0., 0.6123724356956112];
    for (a, b) in coeffs.approximations.iter().zip(approximations) {
        assert_abs_diff_eq!(*a, b, epsilon = 1e-10);
    }
    for (a, b) in coeffs.details.iter().zip(details) {
        assert_abs_diff_eq!(*a, b, epsilon = 1e-10);
    }
}

#[test]
fn level_too_high_on_short_signal() {
    let signal = [1.0f64, 2., 3., 4., 5., 6., 7., 8.];
    assert_eq!(dwt_max_level(signal.len(), lookup("haar").unwrap().dec_len()), 3);
    let err = wavedec(&signal, "haar", ExtensionMode::Symmetric, Some(10)).unwrap_err();
    assert_eq!(
        err,
        SubbandError::LevelTooHigh {
            requested: 10,
            max: 3,
            len: 8
        }
    );
    assert_eq!(
        err.to_string(),
        "level too high: requested 10, max for length 8 is 3"
    );
}

#[test]
fn dwtn_4x4_subbands() {
    let image = ArrayD::from_shape_fn(vec![4, 4], |ix| (ix[0] * 4 + ix[1]) as f64);
    let bands = dwtn(&image, "haar", ExtensionMode::Periodization, Some(&[0, 1][..])).unwrap();
    assert_eq!(
        bands.keys().map(|x| x.as_str()).collect::<Vec<_>>(),
        ["aa", "ad", "da", "dd"]
    );
    for band in bands.values() {
        assert_eq!(band.shape(), [2, 2]);
    }
}

#[test]
fn output_length_formula() {
    for len in 1..40usize {
        for name in ["haar", "db3", "bior3.7", "coif2"] {
            let filter = lookup(name).unwrap().dec_len();
            let signal = vec![1f64; len];
            for mode in ExtensionMode::ALL {
                let coeffs = dwt(&signal, name, mode).unwrap();
                let expected = match mode {
                    ExtensionMode::Periodization => len.div_ceil(2),
                    _ => (len + filter - 1) / 2,
                };
                assert_eq!(coeffs.approximations.len(), expected, "{name} {mode} {len}");
                assert_eq!(dwt_coeff_len(len, filter, mode), expected);
            }
        }
    }
}

#[test]
fn extension_modes_on_short_sequence() {
    let data = [1.0f64, 2., 4.];
    let expected: [(ExtensionMode, [f64; 7]); 8] = [
        (ExtensionMode::Zero, [0., 0., 1., 2., 4., 0., 0.]),
        (ExtensionMode::Constant, [1., 1., 1., 2., 4., 4., 4.]),
        (ExtensionMode::Symmetric, [2., 1., 1., 2., 4., 4., 2.]),
        (ExtensionMode::Reflect, [4., 2., 1., 2., 4., 2., 1.]),
        (ExtensionMode::Periodic, [2., 4., 1., 2., 4., 1., 2.]),
        (ExtensionMode::Smooth, [-1., 0., 1., 2., 4., 6., 8.]),
        (ExtensionMode::Antisymmetric, [-2., -1., 1., 2., 4., -4., -2.]),
        (ExtensionMode::Antireflect, [-2., 0., 1., 2., 4., 6., 7.]),
    ];
    for (mode, reference) in expected {
        let extended = extend(&data, 2, mode).unwrap();
        assert_eq!(extended.len(), 7, "{mode}");
        for (a, b) in extended.iter().zip(reference) {
            assert_abs_diff_eq!(*a, b, epsilon = 1e-12);
        }
    }
}

#[test]
fn error_kinds() {
    assert_eq!(
        dwt(&[1.0f64, 2.], "db99", ExtensionMode::Symmetric).unwrap_err(),
        SubbandError::UnknownWavelet("db99".to_string())
    );
    assert!(matches!(
        "sp0".parse::<ExtensionMode>(),
        Err(SubbandError::UnknownMode(_))
    ));
    assert!(matches!(
        dwt::<f64, _>(&[], "haar", ExtensionMode::Symmetric),
        Err(SubbandError::InputTooShort { len: 0, .. })
    ));
    assert!(matches!(
        idwt(
            Some(&[1.0f64, 2., 3.][..]),
            Some(&[1.0f64][..]),
            "haar",
            ExtensionMode::Symmetric
        ),
        Err(SubbandError::MismatchedLength {
            approx: 3,
            detail: 1
        })
    ));
}
