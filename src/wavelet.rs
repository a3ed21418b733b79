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
use crate::err::SubbandError;
use crate::util::{FilterBank, fill_biorthogonal, fill_wavelet};

/// Symmetry class of a wavelet's filters.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Symmetry {
    /// No symmetry (Daubechies, Haar as an extremal phase member).
    Asymmetric,
    /// Close to, but not exactly, linear phase (Symlets, Coiflets).
    NearSymmetric,
    /// Linear phase filters (biorthogonal splines, Meyer).
    Symmetric,
}

/// Immutable description of a discrete wavelet: its filter bank and properties.
///
/// Registry wavelets live for the whole process; custom ones are created with
/// [`Wavelet::custom`], [`Wavelet::from_scaling_filter`] or
/// [`Wavelet::from_biorthogonal_pair`].
#[derive(Debug, Clone, PartialEq)]
pub struct Wavelet {
    name: String,
    family_name: String,
    short_family_name: String,
    bank: FilterBank,
    symmetry: Symmetry,
    orthogonal: bool,
    biorthogonal: bool,
    vanishing_moments_psi: Option<usize>,
    vanishing_moments_phi: Option<usize>,
}

impl Wavelet {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        name: String,
        family_name: &str,
        short_family_name: &str,
        bank: FilterBank,
        symmetry: Symmetry,
        orthogonal: bool,
        vanishing_moments_psi: Option<usize>,
        vanishing_moments_phi: Option<usize>,
    ) -> Wavelet {
        Wavelet {
            name,
            family_name: family_name.to_string(),
            short_family_name: short_family_name.to_string(),
            bank,
            symmetry,
            orthogonal,
            biorthogonal: true,
            vanishing_moments_psi,
            vanishing_moments_phi,
        }
    }

    /// Creates a wavelet from an explicit filter bank.
    ///
    /// Decomposition filters must share one even length and reconstruction filters
    /// another. Orthogonality, biorthogonality and symmetry are detected from the taps.
    pub fn custom(name: &str, bank: FilterBank) -> Result<Wavelet, SubbandError> {
        let check = |what: &str, a: &[f64], b: &[f64]| {
            if a.is_empty() || a.len() % 2 != 0 || a.len() != b.len() {
                return Err(SubbandError::InvalidWavelet(format!(
                    "{what} filters must share a positive even length, got {} and {}",
                    a.len(),
                    b.len()
                )));
            }
            if a.iter().chain(b.iter()).any(|x| !x.is_finite()) {
                return Err(SubbandError::InvalidWavelet(format!(
                    "{what} filters contain non-finite taps"
                )));
            }
            Ok(())
        };
        check("decomposition", &bank.dec_lo, &bank.dec_hi)?;
        check("reconstruction", &bank.rec_lo, &bank.rec_hi)?;

        let biorthogonal = is_biorthogonal(&bank);
        let orthogonal = biorthogonal && is_orthogonal(&bank);
        let symmetry = if is_palindrome(&bank.rec_lo) && is_palindrome(&bank.dec_lo) {
            Symmetry::Symmetric
        } else {
            Symmetry::Asymmetric
        };
        Ok(Wavelet {
            name: name.to_string(),
            family_name: String::new(),
            short_family_name: String::new(),
            bank,
            symmetry,
            orthogonal,
            biorthogonal,
            vanishing_moments_psi: None,
            vanishing_moments_phi: None,
        })
    }

    /// Creates an orthogonal wavelet from its reconstruction scaling filter.
    pub fn from_scaling_filter(name: &str, scaling: &[f64]) -> Result<Wavelet, SubbandError> {
        Wavelet::custom(name, fill_wavelet(scaling)?)
    }

    /// Creates a biorthogonal wavelet from centre-aligned synthesis and analysis
    /// scaling filters of the same even length.
    pub fn from_biorthogonal_pair(
        name: &str,
        synthesis: &[f64],
        analysis: &[f64],
    ) -> Result<Wavelet, SubbandError> {
        Wavelet::custom(name, fill_biorthogonal(synthesis, analysis)?)
    }

    /// Name the wavelet is registered under, e.g. `db4`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Descriptive family name, e.g. `Daubechies`. Empty for custom wavelets.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Short family name, e.g. `db`. Empty for custom wavelets.
    pub fn short_family_name(&self) -> &str {
        &self.short_family_name
    }

    /// All four filters.
    pub fn filter_bank(&self) -> &FilterBank {
        &self.bank
    }

    /// Filter bank for running the transform in reverse.
    pub fn inverse_filter_bank(&self) -> FilterBank {
        self.bank.inverse()
    }

    pub fn dec_lo(&self) -> &[f64] {
        &self.bank.dec_lo
    }

    pub fn dec_hi(&self) -> &[f64] {
        &self.bank.dec_hi
    }

    pub fn rec_lo(&self) -> &[f64] {
        &self.bank.rec_lo
    }

    pub fn rec_hi(&self) -> &[f64] {
        &self.bank.rec_hi
    }

    /// Length of the decomposition filters.
    pub fn dec_len(&self) -> usize {
        self.bank.dec_lo.len()
    }

    /// Length of the reconstruction filters.
    pub fn rec_len(&self) -> usize {
        self.bank.rec_lo.len()
    }

    /// Filter length used for extension and output-length formulas.
    pub fn support_length(&self) -> usize {
        self.dec_len()
    }

    pub fn symmetry(&self) -> Symmetry {
        self.symmetry
    }

    pub fn orthogonal(&self) -> bool {
        self.orthogonal
    }

    pub fn biorthogonal(&self) -> bool {
        self.biorthogonal
    }

    /// Vanishing moments of the wavelet function, when known.
    pub fn vanishing_moments_psi(&self) -> Option<usize> {
        self.vanishing_moments_psi
    }

    /// Vanishing moments of the scaling function, when known.
    pub fn vanishing_moments_phi(&self) -> Option<usize> {
        self.vanishing_moments_phi
    }
}

const TOLERANCE: f64 = 1e-8;

fn is_palindrome(taps: &[f64]) -> bool {
    let first = taps.iter().position(|x| x.abs() >= TOLERANCE);
    let last = taps.iter().rposition(|x| x.abs() >= TOLERANCE);
    let taps = match (first, last) {
        (Some(first), Some(last)) => &taps[first..=last],
        _ => return true,
    };
    taps.iter()
        .zip(taps.iter().rev())
        .all(|(a, b)| (a - b).abs() < TOLERANCE)
}

// sum_i rec_lo[i] * rev(dec_lo)[i + 2k] == delta(k)
fn is_biorthogonal(bank: &FilterBank) -> bool {
    if bank.rec_lo.len() != bank.dec_lo.len() {
        return false;
    }
    let synthesis = &bank.rec_lo;
    let analysis = bank.dec_lo.iter().rev().copied().collect::<Vec<_>>();
    let len = synthesis.len() as isize;
    (-(len / 2)..=(len / 2)).all(|shift| {
        let acc: f64 = (0..len)
            .filter(|&i| i + 2 * shift >= 0 && i + 2 * shift < len)
            .map(|i| synthesis[i as usize] * analysis[(i + 2 * shift) as usize])
            .sum();
        let expected = if shift == 0 { 1. } else { 0. };
        (acc - expected).abs() < TOLERANCE
    })
}

fn is_orthogonal(bank: &FilterBank) -> bool {
    let reversed = |a: &[f64], b: &[f64]| {
        a.iter()
            .zip(b.iter().rev())
            .all(|(x, y)| (x - y).abs() < TOLERANCE)
    };
    reversed(&bank.dec_lo, &bank.rec_lo) && reversed(&bank.dec_hi, &bank.rec_hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_haar_is_orthogonal() {
        let h = std::f64::consts::FRAC_1_SQRT_2;
        let wavelet = Wavelet::from_scaling_filter("my_haar", &[h, h]).unwrap();
        assert!(wavelet.orthogonal());
        assert!(wavelet.biorthogonal());
        assert_eq!(wavelet.support_length(), 2);
        assert_eq!(wavelet.symmetry(), Symmetry::Symmetric);
        assert_eq!(wavelet.name(), "my_haar");
    }

    #[test]
    fn test_custom_rejects_odd_filters() {
        let bank = FilterBank {
            dec_lo: vec![1., 2., 3.],
            dec_hi: vec![1., 2., 3.],
            rec_lo: vec![1., 2.],
            rec_hi: vec![1., 2.],
        };
        assert!(matches!(
            Wavelet::custom("bad", bank),
            Err(SubbandError::InvalidWavelet(_))
        ));
    }

    #[test]
    fn test_custom_rejects_unequal_pairs() {
        let bank = FilterBank {
            dec_lo: vec![1., 2.],
            dec_hi: vec![1., 2., 3., 4.],
            rec_lo: vec![1., 2.],
            rec_hi: vec![1., 2.],
        };
        assert!(Wavelet::custom("bad", bank).is_err());
    }

    #[test]
    fn test_non_orthogonal_bank_detected() {
        let bank = FilterBank {
            dec_lo: vec![1., 1.],
            dec_hi: vec![-1., 1.],
            rec_lo: vec![1., 1.],
            rec_hi: vec![1., -1.],
        };
        let wavelet = Wavelet::custom("unnormalized", bank).unwrap();
        assert!(!wavelet.orthogonal());
        assert!(!wavelet.biorthogonal());
    }

    #[test]
    fn test_cdf53_pair() {
        let s = std::f64::consts::SQRT_2;
        let synthesis = [0., s / 4., s / 2., s / 4., 0., 0.];
        let analysis = [-s / 8., s / 4., 3. * s / 4., s / 4., -s / 8., 0.];
        let wavelet = Wavelet::from_biorthogonal_pair("cdf53", &synthesis, &analysis).unwrap();
        assert!(wavelet.biorthogonal());
        assert!(!wavelet.orthogonal());
        assert_eq!(wavelet.symmetry(), Symmetry::Symmetric);
    }
}
