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
use crate::dwt::DwtHandler;
use crate::err::SubbandError;
use crate::registry::AsWavelet;
use crate::util::dwt_max_level;
use crate::{DwtExecutor, DwtForwardExecutor, WaveletSample};
use num_traits::AsPrimitive;
use tracing::debug;

/// Coefficients of a multilevel decomposition.
///
/// `details` are ordered coarsest first, so `details[0]` pairs with `approximation`.
/// Any band may be `None` to reconstruct from a subset of levels.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLevelCoefficients<T> {
    /// Approximation at the coarsest level.
    pub approximation: Option<Vec<T>>,
    /// Detail bands, coarsest first.
    pub details: Vec<Option<Vec<T>>>,
    /// Length of the decomposed signal, used to trim the reconstruction.
    pub signal_length: Option<usize>,
}

impl<T> MultiLevelCoefficients<T> {
    /// Number of decomposition levels.
    pub fn level(&self) -> usize {
        self.details.len()
    }

    /// Detail band at `level`, where level 1 is the finest.
    pub fn detail(&self, level: usize) -> Option<&[T]> {
        let idx = self.details.len().checked_sub(level)?;
        self.details.get(idx)?.as_deref()
    }

    /// Flattens into `[cD_n, ..., cD_1, cA_n]`.
    pub fn into_list(self) -> Vec<Option<Vec<T>>> {
        let mut list = self.details;
        list.push(self.approximation);
        list
    }

    /// Builds from `[cD_n, ..., cD_1, cA_n]`.
    ///
    /// The signal length is unknown, so reconstruction keeps the natural length of
    /// the final inverse step.
    pub fn from_list(mut list: Vec<Option<Vec<T>>>) -> Result<Self, SubbandError> {
        let approximation = list.pop().ok_or(SubbandError::MissingCoefficients)?;
        Ok(Self {
            approximation,
            details: list,
            signal_length: None,
        })
    }
}

/// Multilevel 1D discrete wavelet decomposition.
///
/// Applies [`crate::dwt`] `level` times to the running approximation. When `level` is
/// `None` the maximum useful level [`dwt_max_level`] is used.
///
/// # Errors
/// [`SubbandError::LevelTooHigh`] when `level` exceeds [`dwt_max_level`].
///
/// ```
/// use subband::{wavedec, waverec, ExtensionMode};
///
/// let signal = (0..64).map(|x| x as f64).collect::<Vec<_>>();
/// let coeffs = wavedec(&signal, "db2", ExtensionMode::Symmetric, Some(3)).unwrap();
/// assert_eq!(coeffs.level(), 3);
/// let restored = waverec(&coeffs, "db2", ExtensionMode::Symmetric).unwrap();
/// assert_eq!(restored.len(), signal.len());
/// ```
#[tracing::instrument(skip_all, fields(len = data.len(), level = ?level, mode = %mode))]
pub fn wavedec<T: WaveletSample, W: AsWavelet + ?Sized>(
    data: &[T],
    wavelet: &W,
    mode: ExtensionMode,
    level: Option<usize>,
) -> Result<MultiLevelCoefficients<T>, SubbandError>
where
    f64: AsPrimitive<T>,
{
    let wavelet = wavelet.as_wavelet()?;
    if data.is_empty() {
        return Err(SubbandError::InputTooShort { len: 0, min: 1 });
    }
    let max = dwt_max_level(data.len(), wavelet.support_length());
    let level = level.unwrap_or(max);
    if level > max {
        return Err(SubbandError::LevelTooHigh {
            requested: level,
            max,
            len: data.len(),
        });
    }
    if mode.is_lossy() {
        debug!(%mode, "boundary padding is not recoverable from truncated coefficients");
    }

    let handler = DwtHandler::<T>::new(wavelet, mode);
    let mut details = Vec::with_capacity(level);
    let mut current = data.to_vec();
    for _ in 0..level {
        let step = handler.dwt(&current)?;
        details.push(Some(step.details));
        current = step.approximations;
    }
    details.reverse();
    debug!(level, approximation_len = current.len(), "decomposed");

    Ok(MultiLevelCoefficients {
        approximation: Some(current),
        details,
        signal_length: Some(data.len()),
    })
}

/// Length of the bands at `index` (coarsest first).
///
/// Derived from the nearest present detail at or below `index`, or from the signal
/// length when every finer detail is missing.
fn band_length<T: WaveletSample>(
    coeffs: &MultiLevelCoefficients<T>,
    index: usize,
    handler: &DwtHandler<T>,
) -> Option<usize>
where
    f64: AsPrimitive<T>,
{
    let finer = coeffs
        .details
        .get(index..)?
        .iter()
        .enumerate()
        .find_map(|(steps, detail)| detail.as_ref().map(|x| (steps, x.len())));
    let (steps, len) = match finer {
        Some(found) => found,
        None => (coeffs.details.len() - index, coeffs.signal_length?),
    };
    Some((0..steps).fold(len, |len, _| handler.dwt_size(len)))
}

/// Multilevel 1D reconstruction, the inverse of [`wavedec`].
///
/// Folds [`crate::idwt`] from the coarsest level down. An intermediate approximation
/// one sample longer than its level's bands is truncated by one, and the result is
/// truncated to `signal_length` when it is known. Band lengths of missing levels are
/// derived from the finer levels or the signal length.
#[tracing::instrument(skip_all, fields(level = coeffs.level(), mode = %mode))]
pub fn waverec<T: WaveletSample, W: AsWavelet + ?Sized>(
    coeffs: &MultiLevelCoefficients<T>,
    wavelet: &W,
    mode: ExtensionMode,
) -> Result<Vec<T>, SubbandError>
where
    f64: AsPrimitive<T>,
{
    let wavelet = wavelet.as_wavelet()?;
    let handler = DwtHandler::<T>::new(wavelet, mode);

    let mut current = coeffs.approximation.clone();
    for (index, detail) in coeffs.details.iter().enumerate() {
        if let Some(approx) = current.as_mut() {
            if band_length(coeffs, index, &handler).is_some_and(|x| approx.len() == x + 1) {
                approx.pop();
            }
        }
        current = match (current, detail.as_deref()) {
            (None, None) => None,
            (Some(approx), Some(detail)) => {
                if approx.len() != detail.len() {
                    return Err(SubbandError::MismatchedLength {
                        approx: approx.len(),
                        detail: detail.len(),
                    });
                }
                Some(handler.idwt(Some(approx.as_slice()), Some(detail))?)
            }
            (Some(approx), None) => Some(handler.idwt(Some(approx.as_slice()), None)?),
            (None, Some(detail)) => Some(handler.idwt(None, Some(detail))?),
        };
    }

    let mut output = current.ok_or(SubbandError::MissingCoefficients)?;
    if let Some(signal_length) = coeffs.signal_length {
        if output.len() < signal_length {
            return Err(SubbandError::ShapeMismatch(format!(
                "reconstruction has {} samples, fewer than the recorded {signal_length}",
                output.len()
            )));
        }
        output.truncate(signal_length);
    }
    Ok(output)
}
