#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use subband::{ExtensionMode, wavedec, wavelist, waverec};

#[derive(Arbitrary, Debug)]
struct Data {
    length: u8,
    wavelet: u8,
    mode: u8,
    level: u8,
}

fuzz_target!(|data: Data| {
    if data.length == 0 {
        return;
    }
    let names = wavelist(None).unwrap();
    let name = &names[data.wavelet as usize % names.len()];
    let mode = ExtensionMode::ALL[data.mode as usize % ExtensionMode::ALL.len()];
    let signal = (0..data.length as usize)
        .map(|i| i as f32 / data.length as f32)
        .collect::<Vec<_>>();
    let level = Some(data.level as usize % 4);
    let Ok(coeffs) = wavedec(&signal, name.as_str(), mode, level) else {
        return;
    };
    let restored = waverec(&coeffs, name.as_str(), mode).unwrap();
    assert_eq!(restored.len(), signal.len());
});
