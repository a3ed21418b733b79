#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use subband::{SwtConfig, iswt, swt, wavelist};

#[derive(Arbitrary, Debug)]
struct Data {
    length: u8,
    wavelet: u8,
    level: u8,
    start_level: u8,
    norm: bool,
}

fuzz_target!(|data: Data| {
    let names = wavelist(None).unwrap();
    let name = &names[data.wavelet as usize % names.len()];
    let signal = (0..data.length as usize)
        .map(|i| (i as f64 * 0.37).sin())
        .collect::<Vec<_>>();
    let config = SwtConfig::new(data.level as usize % 5)
        .with_start_level(data.start_level as usize % 3)
        .with_norm(data.norm);
    let Ok(coeffs) = swt(&signal, name.as_str(), &config) else {
        return;
    };
    let restored = iswt(&coeffs, name.as_str(), &config).unwrap();
    assert_eq!(restored.len(), signal.len());
});
