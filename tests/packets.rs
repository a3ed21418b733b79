//! Wavelet packet trees on random signals.

use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use subband::{ExtensionMode, PacketOrder, WaveletPacket};

fn random_signal(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

#[test]
fn full_depth_leaves_reconstruct() {
    let signal = random_signal(200, 21);
    for (name, mode) in [
        ("db4", ExtensionMode::Symmetric),
        ("coif2", ExtensionMode::Periodization),
        ("bior2.6", ExtensionMode::Smooth),
    ] {
        let mut tree = WaveletPacket::new(&signal, name, mode, None).unwrap();
        let maxlevel = tree.maxlevel();
        let leaves = tree
            .get_leaf_nodes(true)
            .unwrap()
            .iter()
            .map(|x| x.path().to_string())
            .collect::<Vec<_>>();
        assert_eq!(leaves.len(), 1 << maxlevel);
        assert!(leaves.iter().all(|x| x.len() == maxlevel));
        let restored = tree.reconstruct(false).unwrap();
        assert_eq!(restored.len(), signal.len());
        for (a, b) in restored.iter().zip(signal.iter()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-8);
        }
    }
}

#[test]
fn orthogonal_level_preserves_energy() {
    let signal = random_signal(256, 8);
    let energy = signal.iter().map(|x| x * x).sum::<f64>();
    let mut tree = WaveletPacket::new(&signal, "db3", ExtensionMode::Periodization, None).unwrap();
    for level in 1..=3 {
        let nodes = tree.get_level(level, PacketOrder::Frequency, true).unwrap();
        assert_eq!(nodes.len(), 1 << level);
        let transformed = nodes
            .iter()
            .flat_map(|x| x.data().unwrap_or_default().iter())
            .map(|x| x * x)
            .sum::<f64>();
        assert_abs_diff_eq!(energy, transformed, epsilon = 1e-8 * energy);
    }
}

#[test]
fn mixed_depth_basis() {
    let signal = random_signal(128, 5);
    let mut tree = WaveletPacket::new(&signal, "sym4", ExtensionMode::Symmetric, None).unwrap();
    tree.node("aad").unwrap();
    tree.node("da").unwrap();
    let restored = tree
        .reconstruct_from(&["aaa", "aad", "ad", "da", "dd"])
        .unwrap();
    for (a, b) in restored.iter().zip(signal.iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-8);
    }
}
