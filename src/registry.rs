/*
 * // Copyright (c) Radzivon Bartoshyk 10/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::beylkin::BEYLKIN;
use crate::biorthogonal::BiorthogonalFamily;
use crate::coiflet::CoifletFamily;
use crate::daubechies::DaubechiesFamily;
use crate::dmey::DISCRETE_MEYER;
use crate::err::SubbandError;
use crate::symlets::SymletFamily;
use crate::util::{biorthogonal_bank, orthogonal_bank};
use crate::vaidyanathan::VAIDYANATHAN;
use crate::wavelet::{Symmetry, Wavelet};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::OnceLock;

/// Closed enumeration of every wavelet bundled with the crate.
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum DiscreteWavelet {
    Haar,
    Daubechies(DaubechiesFamily),
    Symlet(SymletFamily),
    Coiflet(CoifletFamily),
    Biorthogonal(BiorthogonalFamily),
    ReverseBiorthogonal(BiorthogonalFamily),
    DiscreteMeyer,
    Beylkin,
    Vaidyanathan,
}

/// Short family names accepted by [`wavelist`].
pub const FAMILIES: [&str; 9] = [
    "haar",
    "db",
    "sym",
    "coif",
    "bior",
    "rbio",
    "dmey",
    "beylkin",
    "vaidyanathan",
];

impl DiscreteWavelet {
    /// Every bundled wavelet, grouped by family.
    pub fn all() -> Vec<DiscreteWavelet> {
        let mut all = vec![DiscreteWavelet::Haar];
        all.extend(DaubechiesFamily::ALL.map(DiscreteWavelet::Daubechies));
        all.extend(SymletFamily::ALL.map(DiscreteWavelet::Symlet));
        all.extend(CoifletFamily::ALL.map(DiscreteWavelet::Coiflet));
        all.extend(BiorthogonalFamily::ALL.map(DiscreteWavelet::Biorthogonal));
        all.extend(BiorthogonalFamily::ALL.map(DiscreteWavelet::ReverseBiorthogonal));
        all.push(DiscreteWavelet::DiscreteMeyer);
        all.push(DiscreteWavelet::Beylkin);
        all.push(DiscreteWavelet::Vaidyanathan);
        all
    }

    /// Registered name, e.g. `db4` or `bior2.2`.
    pub fn name(self) -> String {
        match self {
            DiscreteWavelet::Haar => "haar".to_string(),
            DiscreteWavelet::Daubechies(db) => format!("db{}", db.order()),
            DiscreteWavelet::Symlet(sym) => format!("sym{}", sym.order()),
            DiscreteWavelet::Coiflet(coif) => format!("coif{}", coif.order()),
            DiscreteWavelet::Biorthogonal(bior) => {
                let (n, m) = bior.order();
                format!("bior{n}.{m}")
            }
            DiscreteWavelet::ReverseBiorthogonal(bior) => {
                let (n, m) = bior.order();
                format!("rbio{n}.{m}")
            }
            DiscreteWavelet::DiscreteMeyer => "dmey".to_string(),
            DiscreteWavelet::Beylkin => "beylkin".to_string(),
            DiscreteWavelet::Vaidyanathan => "vaidyanathan".to_string(),
        }
    }

    /// Short family name, one of [`FAMILIES`].
    pub fn short_family_name(self) -> &'static str {
        match self {
            DiscreteWavelet::Haar => "haar",
            DiscreteWavelet::Daubechies(_) => "db",
            DiscreteWavelet::Symlet(_) => "sym",
            DiscreteWavelet::Coiflet(_) => "coif",
            DiscreteWavelet::Biorthogonal(_) => "bior",
            DiscreteWavelet::ReverseBiorthogonal(_) => "rbio",
            DiscreteWavelet::DiscreteMeyer => "dmey",
            DiscreteWavelet::Beylkin => "beylkin",
            DiscreteWavelet::Vaidyanathan => "vaidyanathan",
        }
    }

    /// Descriptor shared for the lifetime of the process.
    pub fn wavelet(self) -> &'static Wavelet {
        static REGISTRY: OnceLock<HashMap<DiscreteWavelet, Wavelet>> = OnceLock::new();
        let registry = REGISTRY.get_or_init(|| {
            DiscreteWavelet::all()
                .into_iter()
                .map(|w| (w, w.build()))
                .collect()
        });
        // every variant is inserted above
        &registry[&self]
    }

    fn build(self) -> Wavelet {
        let name = self.name();
        let short = self.short_family_name();
        match self {
            DiscreteWavelet::Haar => Wavelet::from_parts(
                name,
                "Haar",
                short,
                orthogonal_bank(DaubechiesFamily::Db1.get_wavelet_impl()),
                Symmetry::Asymmetric,
                true,
                Some(1),
                Some(0),
            ),
            DiscreteWavelet::Daubechies(db) => Wavelet::from_parts(
                name,
                "Daubechies",
                short,
                orthogonal_bank(db.get_wavelet_impl()),
                Symmetry::Asymmetric,
                true,
                Some(db.order()),
                Some(0),
            ),
            DiscreteWavelet::Symlet(sym) => Wavelet::from_parts(
                name,
                "Symlets",
                short,
                orthogonal_bank(sym.get_wavelet_impl()),
                Symmetry::NearSymmetric,
                true,
                Some(sym.order()),
                Some(0),
            ),
            DiscreteWavelet::Coiflet(coif) => Wavelet::from_parts(
                name,
                "Coiflets",
                short,
                orthogonal_bank(coif.get_wavelet_impl()),
                Symmetry::NearSymmetric,
                true,
                Some(2 * coif.order()),
                Some(2 * coif.order() - 1),
            ),
            DiscreteWavelet::Biorthogonal(bior) => Wavelet::from_parts(
                name,
                "Biorthogonal",
                short,
                biorthogonal_bank(&bior.synthesis_impl(), bior.analysis_impl()),
                Symmetry::Symmetric,
                bior.order() == (1, 1),
                Some(bior.order().0),
                None,
            ),
            DiscreteWavelet::ReverseBiorthogonal(bior) => Wavelet::from_parts(
                name,
                "Reverse biorthogonal",
                short,
                biorthogonal_bank(bior.analysis_impl(), &bior.synthesis_impl()),
                Symmetry::Symmetric,
                bior.order() == (1, 1),
                Some(bior.order().0),
                None,
            ),
            DiscreteWavelet::DiscreteMeyer => Wavelet::from_parts(
                name,
                "Discrete Meyer (FIR Approximation)",
                short,
                orthogonal_bank(&DISCRETE_MEYER),
                Symmetry::Symmetric,
                true,
                None,
                None,
            ),
            DiscreteWavelet::Beylkin => Wavelet::from_parts(
                name,
                "Beylkin",
                short,
                orthogonal_bank(&BEYLKIN),
                Symmetry::Asymmetric,
                true,
                None,
                None,
            ),
            DiscreteWavelet::Vaidyanathan => Wavelet::from_parts(
                name,
                "Vaidyanathan",
                short,
                orthogonal_bank(&VAIDYANATHAN),
                Symmetry::Asymmetric,
                true,
                None,
                None,
            ),
        }
    }
}

impl Display for DiscreteWavelet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

fn parse_order(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn parse_biorthogonal(s: &str) -> Option<BiorthogonalFamily> {
    let (n, m) = s.split_once('.')?;
    BiorthogonalFamily::from_order(parse_order(n)?, parse_order(m)?)
}

impl FromStr for DiscreteWavelet {
    type Err = SubbandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = match s {
            "haar" => Some(DiscreteWavelet::Haar),
            "dmey" => Some(DiscreteWavelet::DiscreteMeyer),
            "beylkin" => Some(DiscreteWavelet::Beylkin),
            "vaidyanathan" => Some(DiscreteWavelet::Vaidyanathan),
            _ => {
                if let Some(order) = s.strip_prefix("db") {
                    parse_order(order)
                        .and_then(DaubechiesFamily::from_order)
                        .map(DiscreteWavelet::Daubechies)
                } else if let Some(order) = s.strip_prefix("sym") {
                    parse_order(order)
                        .and_then(SymletFamily::from_order)
                        .map(DiscreteWavelet::Symlet)
                } else if let Some(order) = s.strip_prefix("coif") {
                    parse_order(order)
                        .and_then(CoifletFamily::from_order)
                        .map(DiscreteWavelet::Coiflet)
                } else if let Some(order) = s.strip_prefix("bior") {
                    parse_biorthogonal(order).map(DiscreteWavelet::Biorthogonal)
                } else if let Some(order) = s.strip_prefix("rbio") {
                    parse_biorthogonal(order).map(DiscreteWavelet::ReverseBiorthogonal)
                } else {
                    None
                }
            }
        };
        parsed.ok_or_else(|| SubbandError::UnknownWavelet(s.to_string()))
    }
}

/// Resolves a wavelet name to its registered descriptor.
///
/// ```
/// let db2 = subband::lookup("db2").unwrap();
/// assert_eq!(db2.support_length(), 4);
/// assert!(subband::lookup("db99").is_err());
/// ```
pub fn lookup(name: &str) -> Result<&'static Wavelet, SubbandError> {
    Ok(name.parse::<DiscreteWavelet>()?.wavelet())
}

/// Lists registered wavelet names, optionally restricted to one short family name.
pub fn wavelist(family: Option<&str>) -> Result<Vec<String>, SubbandError> {
    if let Some(family) = family {
        if !FAMILIES.contains(&family) {
            return Err(SubbandError::UnknownWavelet(family.to_string()));
        }
    }
    Ok(DiscreteWavelet::all()
        .into_iter()
        .filter(|w| family.is_none_or(|f| w.short_family_name() == f))
        .map(|w| w.name())
        .collect())
}

/// Anything that can be resolved to a wavelet descriptor: a [`Wavelet`], a
/// [`DiscreteWavelet`] tag, or a registered name.
pub trait AsWavelet {
    fn as_wavelet(&self) -> Result<&Wavelet, SubbandError>;
}

impl AsWavelet for Wavelet {
    fn as_wavelet(&self) -> Result<&Wavelet, SubbandError> {
        Ok(self)
    }
}

impl AsWavelet for DiscreteWavelet {
    fn as_wavelet(&self) -> Result<&Wavelet, SubbandError> {
        Ok(self.wavelet())
    }
}

impl AsWavelet for str {
    fn as_wavelet(&self) -> Result<&Wavelet, SubbandError> {
        lookup(self)
    }
}

impl AsWavelet for String {
    fn as_wavelet(&self) -> Result<&Wavelet, SubbandError> {
        lookup(self)
    }
}

impl<W: AsWavelet + ?Sized> AsWavelet for &W {
    fn as_wavelet(&self) -> Result<&Wavelet, SubbandError> {
        (**self).as_wavelet()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for wavelet in DiscreteWavelet::all() {
            let parsed: DiscreteWavelet = wavelet.name().parse().unwrap();
            assert_eq!(parsed, wavelet);
            assert_eq!(wavelet.wavelet().name(), wavelet.name());
        }
    }

    #[test]
    fn test_unknown_names() {
        for name in ["db0", "db21", "sym1", "bior2.3", "coif", "mexh", "db+4", "Haar"] {
            assert_eq!(
                lookup(name).unwrap_err(),
                SubbandError::UnknownWavelet(name.to_string()),
                "{name}"
            );
        }
    }

    #[test]
    fn test_haar_descriptor() {
        let haar = lookup("haar").unwrap();
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_eq!(haar.dec_lo(), &[h, h]);
        assert_eq!(haar.dec_hi(), &[-h, h]);
        assert_eq!(haar.support_length(), 2);
        assert!(haar.orthogonal());
        assert_eq!(haar.family_name(), "Haar");
    }

    #[test]
    fn test_registry_flags_match_taps() {
        for wavelet in DiscreteWavelet::all() {
            if wavelet == DiscreteWavelet::DiscreteMeyer {
                continue;
            }
            let descriptor = wavelet.wavelet();
            let detected = Wavelet::custom("probe", descriptor.filter_bank().clone()).unwrap();
            assert!(detected.biorthogonal(), "{wavelet}");
            assert_eq!(detected.orthogonal(), descriptor.orthogonal(), "{wavelet}");
        }
    }

    #[test]
    fn test_haar_spline_is_orthogonal() {
        for name in ["bior1.1", "rbio1.1"] {
            let wavelet = lookup(name).unwrap();
            assert!(wavelet.orthogonal(), "{name}");
            let haar = lookup("haar").unwrap();
            assert_eq!(wavelet.dec_len(), haar.dec_len(), "{name}");
            for (a, b) in wavelet.dec_lo().iter().zip(haar.dec_lo()) {
                assert!((a - b).abs() < 1e-12, "{name}: ref {b}, derived {a}");
            }
        }
        assert!(!lookup("bior1.3").unwrap().orthogonal());
        assert!(!lookup("rbio2.2").unwrap().orthogonal());
    }

    #[test]
    fn test_reverse_biorthogonal_swaps_roles() {
        let bior = lookup("bior3.5").unwrap();
        let rbio = lookup("rbio3.5").unwrap();
        let rev = |x: &[f64]| x.iter().rev().copied().collect::<Vec<_>>();
        assert_eq!(rbio.rec_lo(), rev(bior.dec_lo()).as_slice());
        assert_eq!(rbio.dec_lo(), rev(bior.rec_lo()).as_slice());
    }

    #[test]
    fn test_wavelist() {
        let db = wavelist(Some("db")).unwrap();
        assert_eq!(db.first().map(String::as_str), Some("db1"));
        assert_eq!(db.len(), 8);
        assert_eq!(wavelist(Some("bior")).unwrap().len(), 15);
        assert!(wavelist(None).unwrap().contains(&"coif2".to_string()));
        assert!(wavelist(Some("gaus")).is_err());
    }

    #[test]
    fn test_as_wavelet() {
        let by_name = "sym4".as_wavelet().unwrap();
        let by_tag = DiscreteWavelet::Symlet(SymletFamily::Sym4)
            .as_wavelet()
            .unwrap();
        assert_eq!(by_name, by_tag);
        let owned = String::from("coif1");
        assert_eq!(owned.as_wavelet().unwrap().support_length(), 6);
    }
}
