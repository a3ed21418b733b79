#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use subband::{ExtensionMode, PacketOrder, WaveletPacket, wavelist};

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
        .map(|i| i as f64 / data.length as f64)
        .collect::<Vec<_>>();
    let mut tree = WaveletPacket::new(&signal, name.as_str(), mode, None).unwrap();
    let level = data.level as usize % (tree.maxlevel() + 1);
    _ = tree.get_level(level, PacketOrder::Frequency, true).unwrap();
    let restored = tree.reconstruct(false).unwrap();
    assert_eq!(restored.len(), signal.len());
});
