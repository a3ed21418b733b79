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
use crate::convolve1d::convolve_circular;
use crate::dwt::DwtHandler;
use crate::err::{SubbandError, try_vec};
use crate::registry::AsWavelet;
use crate::util::swt_max_level;
use crate::wavelet::Wavelet;
use crate::{Dwt, DwtInverseExecutor, MultiDwt, WaveletSample, cast_filter};
use num_traits::AsPrimitive;
use tracing::{debug, warn};

/// Parameters of the stationary wavelet transform.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SwtConfig {
    /// Number of decomposition levels, at least 1.
    pub level: usize,
    /// Number of levels skipped before the first computed one.
    pub start_level: usize,
    /// Scale filters by 1/√2 so that orthogonal wavelets preserve energy.
    pub norm: bool,
}

impl SwtConfig {
    pub fn new(level: usize) -> Self {
        Self {
            level,
            start_level: 0,
            norm: false,
        }
    }

    pub fn with_start_level(mut self, start_level: usize) -> Self {
        self.start_level = start_level;
        self
    }

    pub fn with_norm(mut self, norm: bool) -> Self {
        self.norm = norm;
        self
    }

    fn validate(&self, len: usize) -> Result<(), SubbandError> {
        if len == 0 {
            return Err(SubbandError::InputTooShort { len: 0, min: 1 });
        }
        if self.level == 0 {
            return Err(SubbandError::ZeroLevel);
        }
        let max = swt_max_level(len);
        if self.start_level.saturating_add(self.level) > max {
            return Err(SubbandError::LevelTooHigh {
                requested: self.level,
                max: max.saturating_sub(self.start_level),
                len,
            });
        }
        Ok(())
    }
}

/// Undecimated filter bank with dilated filters at every level.
struct SwtHandler<T> {
    dec_lo: Vec<T>,
    dec_hi: Vec<T>,
    inverse: DwtHandler<T>,
    inverse_scale: T,
}

impl<T: WaveletSample> SwtHandler<T>
where
    f64: AsPrimitive<T>,
{
    fn new(wavelet: &Wavelet, norm: bool) -> Self {
        if norm && !wavelet.orthogonal() {
            warn!(
                wavelet = wavelet.name(),
                "normalized stationary transform only preserves energy for orthogonal wavelets"
            );
        }
        let (forward_scale, inverse_scale) = if norm {
            (std::f64::consts::FRAC_1_SQRT_2, std::f64::consts::SQRT_2)
        } else {
            (1., 1.)
        };
        let scaled = |taps: &[f64]| {
            cast_filter::<T>(&taps.iter().map(|&x| x * forward_scale).collect::<Vec<_>>())
        };
        Self {
            dec_lo: scaled(wavelet.dec_lo()),
            dec_hi: scaled(wavelet.dec_hi()),
            inverse: DwtHandler::new(wavelet, ExtensionMode::Periodization),
            inverse_scale: inverse_scale.as_(),
        }
    }

    /// Filters with `kernel` dilated by `2^(level - 1)` using circular boundaries.
    fn circular_convolve(
        &self,
        input: &[T],
        output: &mut [T],
        kernel: &[T],
        level: usize,
    ) -> Result<(), SubbandError> {
        let stride = 1usize << level.saturating_sub(1);
        let mut dilated = try_vec![T::default(); kernel.len() * stride];
        for (&h, dst) in kernel.iter().zip(dilated.iter_mut().step_by(stride)) {
            *dst = h;
        }
        convolve_circular(input, output, &dilated, dilated.len() / 2)
    }

    fn forward(&self, input: &[T], config: &SwtConfig) -> Result<MultiDwt<T>, SubbandError> {
        let mut levels = Vec::with_capacity(config.level);
        let mut current = input.to_vec();
        for j in config.start_level + 1..=config.start_level + config.level {
            let mut approximations = try_vec![T::default(); input.len()];
            let mut details = try_vec![T::default(); input.len()];
            self.circular_convolve(&current, &mut approximations, &self.dec_lo, j)?;
            self.circular_convolve(&current, &mut details, &self.dec_hi, j)?;
            current.copy_from_slice(&approximations);
            levels.push(Dwt {
                approximations,
                details,
            });
        }
        Ok(MultiDwt { levels })
    }

    /// Undoes one level in place.
    ///
    /// Every residue class modulo `stride` is a decimated signal of its own. Each is
    /// reconstructed twice, once from its even and once from its odd samples, and the
    /// two estimates are averaged.
    fn inverse_level(
        &self,
        output: &mut [T],
        details: &[T],
        stride: usize,
    ) -> Result<(), SubbandError> {
        let n = output.len();
        let phase_len = n / stride;
        let half = phase_len / 2;
        let mut approx_even = try_vec![T::default(); half];
        let mut details_even = try_vec![T::default(); half];
        let mut approx_odd = try_vec![T::default(); half];
        let mut details_odd = try_vec![T::default(); half];
        let mut even_rec = try_vec![T::default(); phase_len];
        let mut odd_rec = try_vec![T::default(); phase_len];
        let half_scale = self.inverse_scale * 0.5f64.as_();

        for first in 0..stride {
            for k in 0..half {
                let even = first + 2 * k * stride;
                let odd = even + stride;
                approx_even[k] = output[even];
                details_even[k] = details[even];
                approx_odd[k] = output[odd];
                details_odd[k] = details[odd];
            }
            self.inverse.execute_inverse(
                Some(approx_even.as_slice()),
                Some(details_even.as_slice()),
                &mut even_rec,
            )?;
            self.inverse.execute_inverse(
                Some(approx_odd.as_slice()),
                Some(details_odd.as_slice()),
                &mut odd_rec,
            )?;
            odd_rec.rotate_right(1);
            for (k, (&e, &o)) in even_rec.iter().zip(odd_rec.iter()).enumerate() {
                output[first + k * stride] = (e + o) * half_scale;
            }
        }
        Ok(())
    }
}

/// Stationary (undecimated) wavelet transform.
///
/// Level `k` filters the previous approximation with the decomposition filters
/// dilated by `2^(k - 1)` under circular boundaries, so every band keeps the input
/// length. Levels are returned finest first.
///
/// # Errors
/// [`SubbandError::LevelTooHigh`] unless `data.len()` is divisible by
/// `2^(start_level + level)`.
///
/// ```
/// use subband::{SwtConfig, iswt, swt};
///
/// let signal = (0..32).map(|x| (x as f64 * 0.3).sin()).collect::<Vec<_>>();
/// let config = SwtConfig::new(3);
/// let coeffs = swt(&signal, "db2", &config).unwrap();
/// assert!(coeffs.levels.iter().all(|x| x.details.len() == 32));
/// let restored = iswt(&coeffs, "db2", &config).unwrap();
/// assert!(restored.iter().zip(signal.iter()).all(|(a, b)| (a - b).abs() < 1e-9));
/// ```
#[tracing::instrument(
    skip_all,
    fields(len = data.len(), level = config.level, start_level = config.start_level)
)]
pub fn swt<T: WaveletSample, W: AsWavelet + ?Sized>(
    data: &[T],
    wavelet: &W,
    config: &SwtConfig,
) -> Result<MultiDwt<T>, SubbandError>
where
    f64: AsPrimitive<T>,
{
    let wavelet = wavelet.as_wavelet()?;
    config.validate(data.len())?;
    let handler = SwtHandler::<T>::new(wavelet, config.norm);
    let result = handler.forward(data, config)?;
    debug!(levels = result.levels.len(), "stationary decomposition done");
    Ok(result)
}

/// Inverse of [`swt`].
///
/// The number of levels is taken from `coeffs`; `start_level` and `norm` must match
/// the forward configuration. Only the coarsest approximation is used.
///
/// # Errors
/// [`SubbandError::MismatchedLength`] when any two bands differ in length.
#[tracing::instrument(
    skip_all,
    fields(levels = coeffs.levels.len(), start_level = config.start_level)
)]
pub fn iswt<T: WaveletSample, W: AsWavelet + ?Sized>(
    coeffs: &MultiDwt<T>,
    wavelet: &W,
    config: &SwtConfig,
) -> Result<Vec<T>, SubbandError>
where
    f64: AsPrimitive<T>,
{
    let wavelet = wavelet.as_wavelet()?;
    let coarsest = coeffs
        .levels
        .last()
        .ok_or(SubbandError::MissingCoefficients)?;
    let n = coarsest.approximations.len();
    for level in coeffs.levels.iter() {
        if level.approximations.len() != n || level.details.len() != n {
            return Err(SubbandError::MismatchedLength {
                approx: level.approximations.len(),
                detail: level.details.len(),
            });
        }
    }
    let config = SwtConfig {
        level: coeffs.levels.len(),
        ..*config
    };
    config.validate(n)?;

    let handler = SwtHandler::<T>::new(wavelet, config.norm);
    let mut output = coarsest.approximations.clone();
    for (idx, level) in coeffs.levels.iter().enumerate().rev() {
        let j = config.start_level + idx + 1;
        handler.inverse_level(&mut output, &level.details, 1usize << (j - 1))?;
    }
    Ok(output)
}
