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
use crate::WaveletSample;
use crate::border_mode::ExtensionMode;
use crate::err::{SubbandError, try_vec};
use num_traits::AsPrimitive;

/// Reads sample `k` of the virtually extended signal.
///
/// `data` must not be empty. Periodization reads the signal as periodic; the
/// odd-length duplication is applied by the caller before the call.
#[inline]
pub(crate) fn extended_value<T: WaveletSample>(data: &[T], k: isize, mode: ExtensionMode) -> T
where
    f64: AsPrimitive<T>,
{
    let n = data.len() as isize;
    if k >= 0 && k < n {
        return data[k as usize];
    }
    let first = data[0];
    let last = data[(n - 1) as usize];
    match mode {
        ExtensionMode::Zero => 0f64.as_(),
        ExtensionMode::Constant => {
            if k < 0 {
                first
            } else {
                last
            }
        }
        ExtensionMode::Symmetric => {
            let m = k.rem_euclid(2 * n);
            if m < n {
                data[m as usize]
            } else {
                data[(2 * n - 1 - m) as usize]
            }
        }
        ExtensionMode::Antisymmetric => {
            let m = k.rem_euclid(2 * n);
            if m < n {
                data[m as usize]
            } else {
                -data[(2 * n - 1 - m) as usize]
            }
        }
        ExtensionMode::Reflect => {
            if n == 1 {
                return first;
            }
            let period = 2 * n - 2;
            let m = k.rem_euclid(period);
            if m < n {
                data[m as usize]
            } else {
                data[(period - m) as usize]
            }
        }
        ExtensionMode::Periodic | ExtensionMode::Periodization => data[k.rem_euclid(n) as usize],
        ExtensionMode::Smooth => {
            if n == 1 {
                return if k < 0 { first } else { last };
            }
            if k < 0 {
                let slope = data[1] - first;
                first + slope * (k as f64).as_()
            } else {
                let slope = last - data[(n - 2) as usize];
                last + slope * ((k - n + 1) as f64).as_()
            }
        }
        ExtensionMode::Antireflect => {
            if n == 1 {
                return if k < 0 { first } else { last };
            }
            let period = 2 * (n - 1);
            let q = k.div_euclid(period);
            let m = k.rem_euclid(period);
            let two: T = 2f64.as_();
            let base = if m < n {
                data[m as usize]
            } else {
                two * last - data[(period - m) as usize]
            };
            base + two * (last - first) * (q as f64).as_()
        }
    }
}

/// Extends `data` by `amount` samples on both sides according to `mode`.
///
/// The result has `data.len() + 2 * amount` samples. Periodization extends the
/// even-length view of the signal, so odd inputs gain one extra sample at the end.
///
/// # Example
///
/// ```
/// use subband::{extend, ExtensionMode};
///
/// let padded = extend(&[1.0f64, 2.0, 3.0], 2, ExtensionMode::Symmetric).unwrap();
/// assert_eq!(padded, vec![2.0, 1.0, 1.0, 2.0, 3.0, 3.0, 2.0]);
/// ```
pub fn extend<T: WaveletSample>(
    data: &[T],
    amount: usize,
    mode: ExtensionMode,
) -> Result<Vec<T>, SubbandError>
where
    f64: AsPrimitive<T>,
{
    if data.is_empty() {
        return Err(SubbandError::InputTooShort { len: 0, min: 1 });
    }
    if mode == ExtensionMode::Periodization && data.len() % 2 != 0 {
        let mut even = try_vec![T::default(); data.len() + 1];
        even[..data.len()].copy_from_slice(data);
        even[data.len()] = data[data.len() - 1];
        let mut padded = try_vec![T::default(); even.len() + 2 * amount];
        write_arena_1d(&even, &mut padded, amount, amount, mode)?;
        return Ok(padded);
    }
    let mut padded = try_vec![T::default(); data.len() + 2 * amount];
    write_arena_1d(data, &mut padded, amount, amount, mode)?;
    Ok(padded)
}

/// Writes `data` surrounded by `pad_left`/`pad_right` extended samples into `padded`.
pub(crate) fn write_arena_1d<T: WaveletSample>(
    data: &[T],
    padded: &mut [T],
    pad_left: usize,
    pad_right: usize,
    mode: ExtensionMode,
) -> Result<(), SubbandError>
where
    f64: AsPrimitive<T>,
{
    if data.is_empty() {
        return Err(SubbandError::InputTooShort { len: 0, min: 1 });
    }
    if padded.len() != pad_left + data.len() + pad_right {
        return Err(SubbandError::ShapeMismatch(format!(
            "arena of {} samples cannot hold {} + {} + {}",
            padded.len(),
            pad_left,
            data.len(),
            pad_right
        )));
    }
    padded[pad_left..pad_left + data.len()].copy_from_slice(data);

    for (idx, dst) in padded.iter_mut().take(pad_left).enumerate() {
        *dst = extended_value(data, idx as isize - pad_left as isize, mode);
    }
    let tail_start = pad_left + data.len();
    for (idx, dst) in padded.iter_mut().skip(tail_start).enumerate() {
        *dst = extended_value(data, (data.len() + idx) as isize, mode);
    }
    Ok(())
}
