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
use crate::border_mode::ExtensionMode;
use crate::err::SubbandError;

/// Computes the length of the **approximation/detail coefficients** after a single-level
/// discrete wavelet transform (DWT) on a 1D signal, for every mode but periodization.
///
/// # Parameters
/// - `len`: Length of the input signal.
/// - `filter_length`: Length of the wavelet filter (number of taps).
///
/// # Returns
/// The number of coefficients in the resulting approximation or detail vector.
#[inline]
pub fn dwt_length(len: usize, filter_length: usize) -> usize {
    (len + filter_length).saturating_sub(1) / 2
}

/// Number of coefficients produced by one forward step under `mode`.
///
/// `floor((len + filter_length - 1) / 2)` in general and `ceil(len / 2)` for
/// periodization. Returns 0 for an empty signal.
///
/// ```
/// use subband::{dwt_coeff_len, ExtensionMode};
///
/// assert_eq!(dwt_coeff_len(8, 4, ExtensionMode::Symmetric), 5);
/// assert_eq!(dwt_coeff_len(9, 4, ExtensionMode::Periodization), 5);
/// ```
#[inline]
pub fn dwt_coeff_len(len: usize, filter_length: usize, mode: ExtensionMode) -> usize {
    if len == 0 {
        return 0;
    }
    match mode {
        ExtensionMode::Periodization => len.div_ceil(2),
        _ => dwt_length(len, filter_length),
    }
}

/// Computes the length of the **reconstructed signal** from approximation coefficients
/// during the inverse discrete wavelet transform (IDWT).
///
/// # Parameters
/// - `approx_length`: Length of the approximation coefficients (after DWT).
/// - `filter_length`: Length of the wavelet filter (number of taps).
/// - `mode`: Extension mode used by the forward transform.
#[inline]
pub fn idwt_length(approx_length: usize, filter_length: usize, mode: ExtensionMode) -> usize {
    match mode {
        ExtensionMode::Periodization => 2 * approx_length,
        _ => (2 * approx_length + 2).saturating_sub(filter_length),
    }
}

/// Maximum useful number of decomposition levels for a signal of `len` samples.
///
/// This is the largest `L` with `(filter_length - 1) * 2^L <= len`, i.e. the level after
/// which further filtering would be dominated by boundary effects. Returns 0 when the
/// signal is shorter than `filter_length - 1` or the filter has fewer than two taps.
///
/// ```
/// use subband::dwt_max_level;
///
/// assert_eq!(dwt_max_level(8, 2), 3);
/// assert_eq!(dwt_max_level(1000, 8), 7);
/// ```
pub fn dwt_max_level(len: usize, filter_length: usize) -> usize {
    if filter_length < 2 || len < filter_length - 1 {
        return 0;
    }
    let ratio = len / (filter_length - 1);
    (usize::BITS - 1 - ratio.leading_zeros()) as usize
}

/// Maximum level of the stationary transform for a signal of `len` samples.
///
/// Every level halves the effective period, so this is the number of times `len`
/// divides by two.
///
/// ```
/// use subband::swt_max_level;
///
/// assert_eq!(swt_max_level(96), 5);
/// assert_eq!(swt_max_level(7), 0);
/// ```
pub fn swt_max_level(len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    len.trailing_zeros() as usize
}

/// Quadrature mirror of a filter: reversed, with every odd tap negated.
pub fn qmf(filter: &[f64]) -> Vec<f64> {
    filter
        .iter()
        .rev()
        .enumerate()
        .map(|(n, &x)| if n % 2 == 0 { x } else { -x })
        .collect()
}

/// Four filters of a two-channel filter bank.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterBank {
    /// Decomposition low-pass filter.
    pub dec_lo: Vec<f64>,
    /// Decomposition high-pass filter.
    pub dec_hi: Vec<f64>,
    /// Reconstruction low-pass filter.
    pub rec_lo: Vec<f64>,
    /// Reconstruction high-pass filter.
    pub rec_hi: Vec<f64>,
}

impl FilterBank {
    /// Filter bank that runs the transform backwards: each filter reversed and
    /// decomposition swapped with reconstruction.
    pub fn inverse(&self) -> FilterBank {
        let rev = |x: &Vec<f64>| x.iter().rev().copied().collect::<Vec<_>>();
        FilterBank {
            dec_lo: rev(&self.rec_lo),
            dec_hi: rev(&self.rec_hi),
            rec_lo: rev(&self.dec_lo),
            rec_hi: rev(&self.dec_hi),
        }
    }
}

/// Derives an orthogonal filter bank from a scaling filter `src`.
///
/// `rec_lo` is the filter itself, `dec_lo` its reverse, and the high-pass pair are
/// the quadrature mirrors.
pub(crate) fn fill_wavelet(src: &[f64]) -> Result<FilterBank, SubbandError> {
    if src.is_empty() || src.len() % 2 != 0 {
        return Err(SubbandError::InvalidWavelet(format!(
            "scaling filter must have a positive even length, got {}",
            src.len()
        )));
    }
    Ok(orthogonal_bank(src))
}

pub(crate) fn orthogonal_bank(src: &[f64]) -> FilterBank {
    let len = src.len();

    let mut w_rec_lo = vec![0f64; len];
    let mut w_rec_hi = vec![0f64; len];
    let mut w_dec_lo = vec![0f64; len];
    let mut w_dec_hi = vec![0f64; len];

    for (i, (((rec_lo, rec_hi), dec_lo), dec_hi)) in w_rec_lo
        .iter_mut()
        .zip(w_rec_hi.iter_mut())
        .zip(w_dec_lo.iter_mut())
        .zip(w_dec_hi.iter_mut())
        .enumerate()
    {
        let rev_i = len - 1 - i;

        *rec_lo = src[i];
        *dec_lo = src[rev_i];

        *rec_hi = if i % 2 == 1 { -src[rev_i] } else { src[rev_i] };
        *dec_hi = if rev_i % 2 == 1 { -src[i] } else { src[i] };
    }

    FilterBank {
        dec_lo: w_dec_lo,
        dec_hi: w_dec_hi,
        rec_hi: w_rec_hi,
        rec_lo: w_rec_lo,
    }
}

/// Derives a biorthogonal filter bank from a synthesis scaling filter and an analysis
/// scaling filter of the same even length, already aligned on a common centre.
pub(crate) fn fill_biorthogonal(
    synthesis: &[f64],
    analysis: &[f64],
) -> Result<FilterBank, SubbandError> {
    if synthesis.len() != analysis.len() || synthesis.is_empty() || synthesis.len() % 2 != 0 {
        return Err(SubbandError::InvalidWavelet(format!(
            "synthesis and analysis filters must share a positive even length, got {} and {}",
            synthesis.len(),
            analysis.len()
        )));
    }
    Ok(biorthogonal_bank(synthesis, analysis))
}

pub(crate) fn biorthogonal_bank(synthesis: &[f64], analysis: &[f64]) -> FilterBank {
    let len = synthesis.len();
    let sign = |i: usize| if i % 2 == 0 { 1f64 } else { -1f64 };

    FilterBank {
        dec_lo: analysis.iter().rev().copied().collect(),
        dec_hi: (0..len).map(|i| sign(len - 1 - i) * synthesis[i]).collect(),
        rec_lo: synthesis.to_vec(),
        rec_hi: (0..len).map(|i| sign(i) * analysis[len - 1 - i]).collect(),
    }
}

/// Builds an orthogonal filter bank from an arbitrary scaling filter.
///
/// The filter is first normalized so its taps sum to `sqrt(2)`.
pub fn orthfilt(scaling_filter: &[f64]) -> Result<FilterBank, SubbandError> {
    let sum: f64 = scaling_filter.iter().sum();
    if sum == 0. || !sum.is_finite() {
        return Err(SubbandError::InvalidWavelet(
            "scaling filter must have a finite non-zero sum".to_string(),
        ));
    }
    let normalized = scaling_filter
        .iter()
        .map(|&x| x * std::f64::consts::SQRT_2 / sum)
        .collect::<Vec<_>>();
    fill_wavelet(&normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths() {
        assert_eq!(dwt_length(8, 2), 4);
        assert_eq!(dwt_length(9, 2), 5);
        assert_eq!(dwt_length(10, 8), 8);
        assert_eq!(dwt_coeff_len(9, 8, ExtensionMode::Periodization), 5);
        assert_eq!(dwt_coeff_len(0, 8, ExtensionMode::Zero), 0);
        assert_eq!(idwt_length(8, 8, ExtensionMode::Symmetric), 10);
        assert_eq!(idwt_length(5, 8, ExtensionMode::Periodization), 10);
    }

    #[test]
    fn test_max_levels() {
        assert_eq!(dwt_max_level(8, 2), 3);
        assert_eq!(dwt_max_level(7, 2), 2);
        assert_eq!(dwt_max_level(5, 8), 0);
        assert_eq!(dwt_max_level(7, 8), 0);
        assert_eq!(dwt_max_level(14, 8), 1);
        assert_eq!(dwt_max_level(10, 1), 0);
        assert_eq!(swt_max_level(64), 6);
        assert_eq!(swt_max_level(0), 0);
    }

    #[test]
    fn test_qmf() {
        assert_eq!(qmf(&[1., 2., 3., 4.]), vec![4., -3., 2., -1.]);
    }

    #[test]
    fn test_fill_wavelet_haar() {
        let h = std::f64::consts::FRAC_1_SQRT_2;
        let bank = fill_wavelet(&[h, h]).unwrap();
        assert_eq!(bank.dec_lo, vec![h, h]);
        assert_eq!(bank.dec_hi, vec![-h, h]);
        assert_eq!(bank.rec_lo, vec![h, h]);
        assert_eq!(bank.rec_hi, vec![h, -h]);
        assert!(fill_wavelet(&[1., 2., 3.]).is_err());
    }

    #[test]
    fn test_orthfilt_normalizes() {
        let bank = orthfilt(&[1., 1.]).unwrap();
        let h = std::f64::consts::FRAC_1_SQRT_2;
        for (a, b) in bank.rec_lo.iter().zip([h, h]) {
            assert!((a - b).abs() < 1e-15, "expected {b}, got {a}");
        }
        assert!(orthfilt(&[1., -1.]).is_err());
    }

    #[test]
    fn test_inverse_bank() {
        let bank = fill_wavelet(&[0.25, 0.75, 0.5, -0.1]).unwrap();
        let inverse = bank.inverse();
        assert_eq!(inverse.inverse(), bank);
        assert_eq!(inverse.dec_lo, bank.dec_lo);
    }
}
