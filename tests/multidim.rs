//! n-dimensional composition on random arrays.

use approx::assert_abs_diff_eq;
use ndarray::{Array2, ArrayD, IxDyn, Slice};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use subband::{
    ExtensionMode, SubbandError, dwt2, dwtn, idwt2, idwtn, wavedec2, wavedecn, waverec2,
    waverecn,
};

fn random_array(shape: &[usize], seed: u64) -> ArrayD<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    ArrayD::from_shape_simple_fn(IxDyn(shape), || rng.gen_range(-2.0..2.0))
}

fn crop(array: &ArrayD<f64>, shape: &[usize]) -> ArrayD<f64> {
    array
        .slice_each_axis(|ax| Slice::from(0..shape[ax.axis.index()]))
        .to_owned()
}

#[test]
fn dwtn_round_trip_partial_axes() {
    let data = random_array(&[6, 7, 5], 1);
    for axes in [vec![0isize], vec![2, 0], vec![-1, -2, -3]] {
        let bands = dwtn(&data, "db3", ExtensionMode::Symmetric, Some(axes.as_slice())).unwrap();
        assert_eq!(bands.len(), 1 << axes.len());
        assert!(bands.keys().all(|x| x.len() == axes.len()));
        let restored =
            idwtn(&bands, "db3", ExtensionMode::Symmetric, Some(axes.as_slice())).unwrap();
        let restored = crop(&restored, data.shape());
        for (a, b) in restored.iter().zip(data.iter()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
        }
    }
}

#[test]
fn labels_enumerate_last_axis_fastest() {
    let data = random_array(&[4, 4, 4], 2);
    let bands = dwtn(&data, "haar", ExtensionMode::Periodization, None).unwrap();
    let labels = bands.keys().cloned().collect::<Vec<_>>();
    assert_eq!(
        labels,
        ["aaa", "aad", "ada", "add", "daa", "dad", "dda", "ddd"]
    );
}

#[test]
fn wavedecn_odd_shape() {
    let data = random_array(&[33, 18, 9], 3);
    let mode = ExtensionMode::Reflect;
    let coeffs = wavedecn(&data, "sym2", mode, None, None).unwrap();
    assert_eq!(coeffs.level(), 1);
    let restored = waverecn(&coeffs, "sym2", mode).unwrap();
    assert_eq!(restored.shape(), data.shape());
    for (a, b) in restored.iter().zip(data.iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
    }

    let coeffs = wavedecn(&data, "haar", mode, Some(3), Some(&[0, 1][..])).unwrap();
    assert_eq!(coeffs.axes, vec![0, 1]);
    assert!(coeffs.details.iter().all(|x| x.len() == 3));
    let restored = waverecn(&coeffs, "haar", mode).unwrap();
    for (a, b) in restored.iter().zip(data.iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
    }
}

#[test]
fn image_round_trip() {
    let mut rng = StdRng::seed_from_u64(4);
    let image = Array2::from_shape_simple_fn((40, 27), || rng.gen_range(0.0..255.0));
    let single = dwt2(&image, "bior4.4", ExtensionMode::Periodization).unwrap();
    assert_eq!(single.approximation.dim(), (20, 14));
    let restored = idwt2(&single, "bior4.4", ExtensionMode::Periodization).unwrap();
    let cropped = restored.slice(ndarray::s![..40, ..27]).to_owned();
    for (a, b) in cropped.iter().zip(image.iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-8);
    }

    let coeffs = wavedec2(&image, "db2", ExtensionMode::Symmetric, Some(2)).unwrap();
    let restored = waverec2(&coeffs, "db2", ExtensionMode::Symmetric).unwrap();
    assert_eq!(restored.dim(), image.dim());
    for (a, b) in restored.iter().zip(image.iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-8);
    }
}

#[test]
fn invalid_axes() {
    let data = random_array(&[4, 4], 5);
    assert_eq!(
        dwtn(&data, "haar", ExtensionMode::Symmetric, Some(&[0, 0][..])).unwrap_err(),
        SubbandError::DuplicateAxis(0)
    );
    assert_eq!(
        dwtn(&data, "haar", ExtensionMode::Symmetric, Some(&[5][..])).unwrap_err(),
        SubbandError::InvalidAxis { axis: 5, ndim: 2 }
    );
}
