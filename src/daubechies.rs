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

/// Daubechies wavelets with extremal phase.
///
/// `DbN` has `N` vanishing moments and a support of `2N` taps. `Db1` is the Haar wavelet.
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum DaubechiesFamily {
    /// Daubechies wavelet with 1 vanishing moments (2 taps)
    Db1,
    /// Daubechies wavelet with 2 vanishing moments (4 taps)
    Db2,
    /// Daubechies wavelet with 3 vanishing moments (6 taps)
    Db3,
    /// Daubechies wavelet with 4 vanishing moments (8 taps)
    Db4,
    /// Daubechies wavelet with 5 vanishing moments (10 taps)
    Db5,
    /// Daubechies wavelet with 6 vanishing moments (12 taps)
    Db6,
    /// Daubechies wavelet with 7 vanishing moments (14 taps)
    Db7,
    /// Daubechies wavelet with 8 vanishing moments (16 taps)
    Db8,
}

impl DaubechiesFamily {
    /// Every member of the family in ascending order.
    pub const ALL: [DaubechiesFamily; 8] = [
        DaubechiesFamily::Db1,
        DaubechiesFamily::Db2,
        DaubechiesFamily::Db3,
        DaubechiesFamily::Db4,
        DaubechiesFamily::Db5,
        DaubechiesFamily::Db6,
        DaubechiesFamily::Db7,
        DaubechiesFamily::Db8,
    ];

    /// Family order as used in the wavelet name.
    pub fn order(self) -> usize {
        match self {
            DaubechiesFamily::Db1 => 1,
            DaubechiesFamily::Db2 => 2,
            DaubechiesFamily::Db3 => 3,
            DaubechiesFamily::Db4 => 4,
            DaubechiesFamily::Db5 => 5,
            DaubechiesFamily::Db6 => 6,
            DaubechiesFamily::Db7 => 7,
            DaubechiesFamily::Db8 => 8,
        }
    }

    /// Looks a member up by its order.
    pub fn from_order(order: usize) -> Option<DaubechiesFamily> {
        DaubechiesFamily::ALL.iter().copied().find(|x| x.order() == order)
    }

    pub(crate) fn get_wavelet_impl(self) -> &'static [f64] {
        match self {
            DaubechiesFamily::Db1 => [
                0.7071067811865476,
                0.7071067811865476,
            ]
            .as_slice(),
            DaubechiesFamily::Db2 => [
                0.48296291314469025,
                0.836516303737469,
                0.22414386804185735,
                -0.12940952255092145,
            ]
            .as_slice(),
            DaubechiesFamily::Db3 => [
                0.3326705529509569,
                0.8068915093133388,
                0.4598775021193313,
                -0.13501102001039084,
                -0.08544127388224149,
                0.035226291882100656,
            ]
            .as_slice(),
            DaubechiesFamily::Db4 => [
                0.23037781330885523,
                0.7148465705525415,
                0.6308807679295904,
                -0.02798376941698385,
                -0.18703481171888114,
                0.030841381835986965,
                0.032883011666982945,
                -0.010597401784997278,
            ]
            .as_slice(),
            DaubechiesFamily::Db5 => [
                0.160102397974125,
                0.6038292697974729,
                0.7243085284385744,
                0.13842814590110342,
                -0.24229488706619015,
                -0.03224486958502952,
                0.07757149384006515,
                -0.006241490213011705,
                -0.012580751999015526,
                0.003335725285001549,
            ]
            .as_slice(),
            DaubechiesFamily::Db6 => [
                0.11154074335008017,
                0.4946238903983854,
                0.7511339080215775,
                0.3152503517092432,
                -0.22626469396516913,
                -0.12976686756709563,
                0.09750160558707936,
                0.02752286553001629,
                -0.031582039318031156,
                0.0005538422009938016,
                0.004777257511010651,
                -0.00107730108499558,
            ]
            .as_slice(),
            DaubechiesFamily::Db7 => [
                0.07785205408506236,
                0.39653931948230575,
                0.7291320908465551,
                0.4697822874053586,
                -0.14390600392910627,
                -0.22403618499416572,
                0.07130921926705004,
                0.0806126091510659,
                -0.03802993693503463,
                -0.01657454163101562,
                0.012550998556013784,
                0.00042957797300470274,
                -0.0018016407039998328,
                0.0003537138000010399,
            ]
            .as_slice(),
            DaubechiesFamily::Db8 => [
                0.05441584224308161,
                0.3128715909144659,
                0.6756307362980128,
                0.5853546836548691,
                -0.015829105256023893,
                -0.2840155429624281,
                0.00047248457399797254,
                0.128747426620186,
                -0.01736930100202211,
                -0.04408825393106472,
                0.013981027917015516,
                0.008746094047015655,
                -0.00487035299301066,
                -0.0003917403729959771,
                0.0006754494059985568,
                -0.00011747678400228192,
            ]
            .as_slice(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daubechies_orthonormal() {
        for member in DaubechiesFamily::ALL {
            let h = member.get_wavelet_impl();
            let sum: f64 = h.iter().sum();
            assert!(
                (sum - std::f64::consts::SQRT_2).abs() < 1e-9,
                "{member:?} scaling filter must sum to sqrt(2), got {sum}"
            );
            for shift in 0..h.len() / 2 {
                let dot: f64 = h
                    .iter()
                    .skip(2 * shift)
                    .zip(h.iter())
                    .map(|(a, b)| a * b)
                    .sum();
                let expected = if shift == 0 { 1. } else { 0. };
                assert!(
                    (dot - expected).abs() < 1e-9,
                    "{member:?} shift {shift}: expected {expected}, got {dot}"
                );
            }
        }
    }

    #[test]
    fn test_lookup_by_order() {
        assert_eq!(DaubechiesFamily::from_order(4), Some(DaubechiesFamily::Db4));
        assert_eq!(DaubechiesFamily::from_order(0), None);
        assert_eq!(DaubechiesFamily::Db8.get_wavelet_impl().len(), 16);
    }
}
