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
use crate::convolve1d::{Convolve1d, ScalarConvolution1d, upsample_full};
use crate::err::{SubbandError, try_vec};
use crate::registry::AsWavelet;
use crate::util::{dwt_coeff_len, idwt_length};
use crate::wavelet::Wavelet;
use crate::{
    Dwt, DwtExecutor, DwtForwardExecutor, DwtInverseExecutor, WaveletSample, cast_filter,
};
use num_traits::AsPrimitive;
use std::str::FromStr;

/// Which branch of the filter bank a single-branch operation follows.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Part {
    /// Low-pass branch, `a`.
    Approximation,
    /// High-pass branch, `d`.
    Detail,
}

impl FromStr for Part {
    type Err = SubbandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" => Ok(Part::Approximation),
            "d" => Ok(Part::Detail),
            _ => Err(SubbandError::InvalidPath(format!(
                "part must be 'a' or 'd', got '{s}'"
            ))),
        }
    }
}

/// Single-level filter bank transform bound to one wavelet and extension mode.
///
/// Filters are cast to `T` once; the handler can be reused across signals and threads.
pub struct DwtHandler<T> {
    mode: ExtensionMode,
    dec_lo_reversed: Vec<T>,
    dec_hi_reversed: Vec<T>,
    rec_lo: Vec<T>,
    rec_hi: Vec<T>,
    convolution: Box<dyn Convolve1d<T> + Send + Sync>,
}

impl<T: WaveletSample> DwtHandler<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(wavelet: &Wavelet, mode: ExtensionMode) -> Self {
        let reversed = |taps: &[f64]| {
            let mut v = cast_filter::<T>(taps);
            v.reverse();
            v
        };
        Self {
            mode,
            dec_lo_reversed: reversed(wavelet.dec_lo()),
            dec_hi_reversed: reversed(wavelet.dec_hi()),
            rec_lo: cast_filter(wavelet.rec_lo()),
            rec_hi: cast_filter(wavelet.rec_hi()),
            convolution: Box::new(ScalarConvolution1d::new(mode)),
        }
    }

    /// Resolves `wavelet` and builds a handler for it.
    pub fn from_wavelet<W: AsWavelet + ?Sized>(
        wavelet: &W,
        mode: ExtensionMode,
    ) -> Result<Self, SubbandError> {
        Ok(Self::new(wavelet.as_wavelet()?, mode))
    }

    /// Filters one branch only and writes `dwt_size(input.len())` coefficients.
    pub(crate) fn execute_branch(
        &self,
        input: &[T],
        output: &mut [T],
        part: Part,
    ) -> Result<(), SubbandError> {
        let kernel = match part {
            Part::Approximation => &self.dec_lo_reversed,
            Part::Detail => &self.dec_hi_reversed,
        };
        let mut scratch = try_vec![
            T::default();
            self.convolution.scratch_size(input.len(), kernel.len())
        ];
        self.convolution
            .downsample(input, output, &mut scratch, kernel)
    }

    pub(crate) fn rec_filter(&self, part: Part) -> &[T] {
        match part {
            Part::Approximation => &self.rec_lo,
            Part::Detail => &self.rec_hi,
        }
    }
}

impl<T: WaveletSample> DwtForwardExecutor<T> for DwtHandler<T>
where
    f64: AsPrimitive<T>,
{
    fn execute_forward(
        &self,
        input: &[T],
        approx: &mut [T],
        details: &mut [T],
    ) -> Result<(), SubbandError> {
        if input.is_empty() {
            return Err(SubbandError::InputTooShort { len: 0, min: 1 });
        }
        let half = self.dwt_size(input.len());
        if approx.len() != half || details.len() != half {
            return Err(SubbandError::ShapeMismatch(format!(
                "coefficient buffers of {} and {} samples, expected {half}",
                approx.len(),
                details.len()
            )));
        }

        let mut scratch = try_vec![
            T::default();
            self.convolution
                .scratch_size(input.len(), self.dec_lo_reversed.len())
        ];
        self.convolution
            .downsample(input, approx, &mut scratch, &self.dec_lo_reversed)?;
        self.convolution
            .downsample(input, details, &mut scratch, &self.dec_hi_reversed)?;
        Ok(())
    }

    fn dwt_size(&self, input_length: usize) -> usize {
        dwt_coeff_len(input_length, self.dec_lo_reversed.len(), self.mode)
    }
}

impl<T: WaveletSample> DwtInverseExecutor<T> for DwtHandler<T>
where
    f64: AsPrimitive<T>,
{
    fn execute_inverse(
        &self,
        approx: Option<&[T]>,
        details: Option<&[T]>,
        output: &mut [T],
    ) -> Result<(), SubbandError> {
        let coeffs_length = match (approx, details) {
            (None, None) => return Err(SubbandError::MissingCoefficients),
            (Some(a), Some(d)) if a.len() != d.len() => {
                return Err(SubbandError::MismatchedLength {
                    approx: a.len(),
                    detail: d.len(),
                });
            }
            (Some(a), _) => a.len(),
            (None, Some(d)) => d.len(),
        };
        let filter_length = self.rec_lo.len();
        let min = match self.mode {
            ExtensionMode::Periodization => 1,
            _ => filter_length / 2,
        };
        if coeffs_length < min {
            return Err(SubbandError::InputTooShort {
                len: coeffs_length,
                min,
            });
        }
        let rec_len = self.idwt_size(coeffs_length);
        if output.len() != rec_len {
            return Err(SubbandError::ShapeMismatch(format!(
                "reconstruction buffer of {} samples, expected {rec_len}",
                output.len()
            )));
        }

        output.iter_mut().for_each(|x| *x = T::zero());
        if let Some(approx) = approx {
            self.convolution
                .upsample_accumulate(approx, output, &self.rec_lo)?;
        }
        if let Some(details) = details {
            self.convolution
                .upsample_accumulate(details, output, &self.rec_hi)?;
        }
        Ok(())
    }

    fn idwt_size(&self, coeffs_length: usize) -> usize {
        idwt_length(coeffs_length, self.rec_lo.len(), self.mode)
    }
}

impl<T: WaveletSample> DwtExecutor<T> for DwtHandler<T>
where
    f64: AsPrimitive<T>,
{
    fn filter_length(&self) -> usize {
        self.dec_lo_reversed.len()
    }

    fn mode(&self) -> ExtensionMode {
        self.mode
    }

    fn dwt(&self, signal: &[T]) -> Result<Dwt<T>, SubbandError> {
        if signal.is_empty() {
            return Err(SubbandError::InputTooShort { len: 0, min: 1 });
        }
        let half = self.dwt_size(signal.len());
        let mut approximations = try_vec![T::default(); half];
        let mut details = try_vec![T::default(); half];
        self.execute_forward(signal, &mut approximations, &mut details)?;
        Ok(Dwt {
            approximations,
            details,
        })
    }

    fn idwt(&self, approx: Option<&[T]>, details: Option<&[T]>) -> Result<Vec<T>, SubbandError> {
        let (approx, details) = match (approx, details) {
            (Some(a), Some(d)) if a.len().abs_diff(d.len()) > 1 => {
                return Err(SubbandError::MismatchedLength {
                    approx: a.len(),
                    detail: d.len(),
                });
            }
            (Some(a), Some(d)) => {
                let len = a.len().min(d.len());
                (Some(&a[..len]), Some(&d[..len]))
            }
            other => other,
        };
        let coeffs_length = approx
            .or(details)
            .map(|x| x.len())
            .ok_or(SubbandError::MissingCoefficients)?;
        let mut output = try_vec![T::default(); self.idwt_size(coeffs_length)];
        self.execute_inverse(approx, details, &mut output)?;
        Ok(output)
    }
}

/// Single-level forward discrete wavelet transform.
///
/// Returns approximation and detail coefficients of length
/// [`dwt_coeff_len`]`(data.len(), wavelet.support_length(), mode)`.
///
/// # Errors
/// [`SubbandError::UnknownWavelet`] for an unresolvable name and
/// [`SubbandError::InputTooShort`] for an empty signal.
pub fn dwt<T: WaveletSample, W: AsWavelet + ?Sized>(
    data: &[T],
    wavelet: &W,
    mode: ExtensionMode,
) -> Result<Dwt<T>, SubbandError>
where
    f64: AsPrimitive<T>,
{
    DwtHandler::from_wavelet(wavelet, mode)?.dwt(data)
}

/// Single-level inverse discrete wavelet transform.
///
/// Either band may be `None`, in which case it is treated as zeros. Bands whose
/// lengths differ by one are accepted and the longer one is truncated.
pub fn idwt<T: WaveletSample, W: AsWavelet + ?Sized>(
    approx: Option<&[T]>,
    details: Option<&[T]>,
    wavelet: &W,
    mode: ExtensionMode,
) -> Result<Vec<T>, SubbandError>
where
    f64: AsPrimitive<T>,
{
    DwtHandler::from_wavelet(wavelet, mode)?.idwt(approx, details)
}

/// Coefficients of one branch at `level` computed by following the approximation
/// branch `level - 1` times.
pub fn downcoef<T: WaveletSample, W: AsWavelet + ?Sized>(
    part: Part,
    data: &[T],
    wavelet: &W,
    mode: ExtensionMode,
    level: usize,
) -> Result<Vec<T>, SubbandError>
where
    f64: AsPrimitive<T>,
{
    if level == 0 {
        return Err(SubbandError::ZeroLevel);
    }
    let handler = DwtHandler::from_wavelet(wavelet, mode)?;
    let mut current = data.to_vec();
    for step in 0..level {
        if current.is_empty() {
            return Err(SubbandError::InputTooShort { len: 0, min: 1 });
        }
        let branch = if step + 1 == level {
            part
        } else {
            Part::Approximation
        };
        let mut next = try_vec![T::default(); handler.dwt_size(current.len())];
        handler.execute_branch(&current, &mut next, branch)?;
        current = next;
    }
    Ok(current)
}

/// Direct reconstruction from one branch at `level`.
///
/// The coefficients are passed through the reconstruction filter of `part` once and
/// then through the low-pass reconstruction filter `level - 1` times without any
/// boundary trimming. When `take` is given and shorter than the result, the central
/// `take` samples are returned.
pub fn upcoef<T: WaveletSample, W: AsWavelet + ?Sized>(
    part: Part,
    coeffs: &[T],
    wavelet: &W,
    level: usize,
    take: Option<usize>,
) -> Result<Vec<T>, SubbandError>
where
    f64: AsPrimitive<T>,
{
    if level == 0 {
        return Err(SubbandError::ZeroLevel);
    }
    let handler = DwtHandler::<T>::from_wavelet(wavelet, ExtensionMode::Zero)?;
    let mut rec = upsample_full(coeffs, handler.rec_filter(part))?;
    for _ in 1..level {
        rec = upsample_full(&rec, handler.rec_filter(Part::Approximation))?;
    }
    match take {
        Some(take) if take > 0 && take < rec.len() => {
            let excess = rec.len() - take;
            let left = excess / 2;
            Ok(rec[left..left + take].to_vec())
        }
        _ => Ok(rec),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haar_periodization() {
        let input = [1.0f64, 2., 3., 4., 5., 6., 7., 8.];
        let coeffs = dwt(&input, "haar", ExtensionMode::Periodization).unwrap();
        let h = std::f64::consts::FRAC_1_SQRT_2;
        let approx_ref = [3. * h, 7. * h, 11. * h, 15. * h];
        coeffs
            .approximations
            .iter()
            .zip(approx_ref.iter())
            .for_each(|(a, b)| {
                assert!(
                    (a - b).abs() < 1e-12,
                    "approximation difference expected to be < 1e-12, but values were ref {b}, derived {a}"
                );
            });
        coeffs.details.iter().for_each(|&d| {
            assert!(
                (d + h).abs() < 1e-12,
                "detail expected to be {}, but was {d}",
                -h
            );
        });
        let rec = idwt(
            Some(coeffs.approximations.as_slice()),
            Some(coeffs.details.as_slice()),
            "haar",
            ExtensionMode::Periodization,
        )
        .unwrap();
        rec.iter().zip(input.iter()).for_each(|(a, b)| {
            assert!(
                (a - b).abs() < 1e-12,
                "reconstructed difference expected to be < 1e-12, but values were ref {b}, derived {a}"
            );
        });
    }

    #[test]
    fn test_db2_symmetric_reference() {
        let input = [1.0f64, 2., 3., 4., 5., 6., 7., 8.];
        let coeffs = dwt(&input, "db2", ExtensionMode::Symmetric).unwrap();
        let approx_ref = [
            1.7677669529668640,
            2.3107890345415143,
            5.1392161592877050,
            7.9676432840338958,
            10.9601551083909925,
        ];
        let details_ref = [
            -0.6123724356956117,
            0.0,
            0.0,
            0.0,
            0.6123724356956112,
        ];
        assert_eq!(coeffs.approximations.len(), 5);
        for (a, b) in coeffs.approximations.iter().zip(approx_ref.iter()) {
            assert!((a - b).abs() < 1e-9, "approximation: ref {b}, derived {a}");
        }
        for (a, b) in coeffs.details.iter().zip(details_ref.iter()) {
            assert!((a - b).abs() < 1e-9, "details: ref {b}, derived {a}");
        }
    }

    #[test]
    fn test_round_trip_all_modes() {
        let input = [
            1.0f64, 2.0, 3.0, 4.0, 2.0, 1.0, 0.0, 1.0, 2.4, 6.5, 2.4, 6.4, 5.2, 0.6, 0.5, 1.3,
            2.5,
        ];
        for name in ["haar", "db3", "sym4", "coif2", "bior2.2", "rbio3.3"] {
            for mode in ExtensionMode::ALL {
                let coeffs = dwt(&input, name, mode).unwrap();
                let rec = idwt(
                    Some(coeffs.approximations.as_slice()),
                    Some(coeffs.details.as_slice()),
                    name,
                    mode,
                )
                .unwrap();
                assert!(rec.len() >= input.len(), "{name} {mode}");
                rec.iter().take(input.len()).zip(input.iter()).for_each(|(a, b)| {
                    assert!(
                        (a - b).abs() < 1e-9,
                        "{name} {mode}: reconstructed difference expected to be < 1e-9, but values were ref {b}, derived {a}"
                    );
                });
            }
        }
    }

    #[test]
    fn test_single_precision() {
        let input = [3.0f32, 1.0, -2.0, 7.5, 4.0, 0.25];
        let coeffs = dwt(&input, "db2", ExtensionMode::Periodic).unwrap();
        let rec = idwt(
            Some(coeffs.approximations.as_slice()),
            Some(coeffs.details.as_slice()),
            "db2",
            ExtensionMode::Periodic,
        )
        .unwrap();
        rec.iter().zip(input.iter()).for_each(|(a, b)| {
            assert!((a - b).abs() < 1e-5, "ref {b}, derived {a}");
        });
    }

    #[test]
    fn test_partial_reconstruction_sums() {
        let input = [4.0f64, -1.0, 2.5, 3.0, 0.0, 9.0, -2.0, 1.0];
        let coeffs = dwt(&input, "db2", ExtensionMode::Symmetric).unwrap();
        let a = idwt(
            Some(coeffs.approximations.as_slice()),
            None,
            "db2",
            ExtensionMode::Symmetric,
        )
        .unwrap();
        let d = idwt(
            None,
            Some(coeffs.details.as_slice()),
            "db2",
            ExtensionMode::Symmetric,
        )
        .unwrap();
        for ((x, y), z) in a.iter().zip(d.iter()).zip(input.iter()) {
            assert!((x + y - z).abs() < 1e-9, "ref {z}, derived {}", x + y);
        }
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            dwt::<f64, _>(&[], "haar", ExtensionMode::Symmetric).unwrap_err(),
            SubbandError::InputTooShort { len: 0, min: 1 }
        );
        assert_eq!(
            dwt(&[1.0f64], "db42", ExtensionMode::Symmetric).unwrap_err(),
            SubbandError::UnknownWavelet("db42".to_string())
        );
        assert_eq!(
            idwt::<f64, _>(None, None, "haar", ExtensionMode::Symmetric).unwrap_err(),
            SubbandError::MissingCoefficients
        );
        assert_eq!(
            idwt(Some(&[1.0f64; 5][..]), Some(&[1.0; 8][..]), "haar", ExtensionMode::Symmetric)
                .unwrap_err(),
            SubbandError::MismatchedLength {
                approx: 5,
                detail: 8
            }
        );
        assert_eq!(
            idwt(Some(&[1.0f64; 2][..]), None, "db4", ExtensionMode::Symmetric).unwrap_err(),
            SubbandError::InputTooShort { len: 2, min: 4 }
        );
    }

    #[test]
    fn test_off_by_one_bands_are_truncated() {
        let rec = idwt(
            Some(&[1.0f64, 2.0, 3.0][..]),
            Some(&[0.0, 0.0][..]),
            "haar",
            ExtensionMode::Periodization,
        )
        .unwrap();
        assert_eq!(rec.len(), 4);
    }

    #[test]
    fn test_downcoef_matches_dwt() {
        let input = (0..32).map(|x| (x as f64 * 0.3).sin()).collect::<Vec<_>>();
        let level1 = dwt(&input, "sym3", ExtensionMode::Smooth).unwrap();
        let level2 = dwt(&level1.approximations, "sym3", ExtensionMode::Smooth).unwrap();
        let down = downcoef(Part::Detail, &input, "sym3", ExtensionMode::Smooth, 2).unwrap();
        assert_eq!(down, level2.details);
        let down = downcoef(Part::Approximation, &input, "sym3", ExtensionMode::Smooth, 1)
            .unwrap();
        assert_eq!(down, level1.approximations);
    }

    #[test]
    fn test_upcoef_lengths() {
        let coeffs = [1.0f64, -0.5, 2.0, 0.25];
        let full = upcoef(Part::Approximation, &coeffs, "db2", 1, None).unwrap();
        assert_eq!(full.len(), 2 * 4 + 4 - 2);
        let twice = upcoef(Part::Detail, &coeffs, "db2", 2, None).unwrap();
        assert_eq!(twice.len(), 2 * 10 + 4 - 2);
        let taken = upcoef(Part::Detail, &coeffs, "db2", 2, Some(7)).unwrap();
        assert_eq!(taken.as_slice(), &twice[7..14]);
    }

    #[test]
    fn test_zero_level_rejected() {
        let input = [1.0f64, 2.0, 3.0, 4.0];
        assert_eq!(
            downcoef(Part::Approximation, &input, "haar", ExtensionMode::Zero, 0).unwrap_err(),
            SubbandError::ZeroLevel
        );
        assert_eq!(
            upcoef(Part::Detail, &input, "haar", 0, None).unwrap_err(),
            SubbandError::ZeroLevel
        );
    }

    #[test]
    fn test_part_parse() {
        assert_eq!("a".parse::<Part>().unwrap(), Part::Approximation);
        assert_eq!("d".parse::<Part>().unwrap(), Part::Detail);
        assert!("x".parse::<Part>().is_err());
    }
}
