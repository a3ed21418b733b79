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
use crate::err::{SubbandError, try_vec};
use crate::filter_padding::write_arena_1d;
use crate::mla::fmla;
use crate::util::dwt_coeff_len;
use crate::WaveletSample;
use num_traits::AsPrimitive;
use std::marker::PhantomData;

/// Filtering primitives shared by every transform.
///
/// Kernels passed to [`Convolve1d::downsample`] are expected in reversed order so
/// that each output sample is a plain dot product over a contiguous window.
pub(crate) trait Convolve1d<T> {
    /// Filters the extended `input` with `reversed_kernel` and keeps every second
    /// sample. `output.len()` selects how many coefficients are produced.
    fn downsample(
        &self,
        input: &[T],
        output: &mut [T],
        scratch: &mut [T],
        reversed_kernel: &[T],
    ) -> Result<(), SubbandError>;

    /// Size of the scratch arena [`Convolve1d::downsample`] requires.
    fn scratch_size(&self, input_size: usize, filter_size: usize) -> usize;

    /// Upsamples `coeffs` by two, filters with `kernel` and accumulates the part of
    /// the result that overlaps `output`.
    fn upsample_accumulate(
        &self,
        coeffs: &[T],
        output: &mut [T],
        kernel: &[T],
    ) -> Result<(), SubbandError>;
}

#[derive(Debug, Copy, Clone, Hash, Ord, PartialOrd, Eq, PartialEq)]
pub(crate) struct ConvolvePaddings {
    pub(crate) padding_left: usize,
    pub(crate) padding_right: usize,
}

impl ConvolvePaddings {
    /// Paddings of the extension arena for a signal of `input_size` samples that
    /// produces `output_size` coefficients.
    ///
    /// `input_size` is the even length for periodization.
    pub(crate) fn from_filter(
        input_size: usize,
        output_size: usize,
        filter_size: usize,
        mode: ExtensionMode,
    ) -> Self {
        match mode {
            ExtensionMode::Periodization => ConvolvePaddings {
                padding_left: filter_size / 2 - 1,
                padding_right: filter_size / 2 - 1,
            },
            _ => ConvolvePaddings {
                padding_left: filter_size - 2,
                padding_right: (2 * output_size).saturating_sub(input_size),
            },
        }
    }
}

pub(crate) struct ScalarConvolution1d<T> {
    pub(crate) phantom_data: PhantomData<T>,
    pub(crate) border_mode: ExtensionMode,
}

impl<T: WaveletSample> ScalarConvolution1d<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(border_mode: ExtensionMode) -> Self {
        Self {
            phantom_data: PhantomData,
            border_mode,
        }
    }
}

impl<T: WaveletSample> Convolve1d<T> for ScalarConvolution1d<T>
where
    f64: AsPrimitive<T>,
{
    fn downsample(
        &self,
        input: &[T],
        output: &mut [T],
        scratch: &mut [T],
        reversed_kernel: &[T],
    ) -> Result<(), SubbandError> {
        if input.is_empty() {
            return Err(SubbandError::InputTooShort { len: 0, min: 1 });
        }
        let filter_size = reversed_kernel.len();
        let expected = dwt_coeff_len(input.len(), filter_size, self.border_mode);
        if output.len() != expected {
            return Err(SubbandError::ShapeMismatch(format!(
                "output of {} coefficients, expected {expected}",
                output.len()
            )));
        }
        let required = self.scratch_size(input.len(), filter_size);
        if scratch.len() < required {
            return Err(SubbandError::ShapeMismatch(format!(
                "scratch of {} samples is smaller than required {required}",
                scratch.len()
            )));
        }
        let arena = &mut scratch[..required];

        if self.border_mode == ExtensionMode::Periodization && input.len() % 2 != 0 {
            // odd signals are periodized over their last sample repeated once
            let mut even = try_vec![T::default(); input.len() + 1];
            even[..input.len()].copy_from_slice(input);
            even[input.len()] = input[input.len() - 1];
            let paddings = ConvolvePaddings::from_filter(
                even.len(),
                output.len(),
                filter_size,
                self.border_mode,
            );
            write_arena_1d(
                &even,
                arena,
                paddings.padding_left,
                paddings.padding_right,
                self.border_mode,
            )?;
        } else {
            let paddings = ConvolvePaddings::from_filter(
                input.len(),
                output.len(),
                filter_size,
                self.border_mode,
            );
            write_arena_1d(
                input,
                arena,
                paddings.padding_left,
                paddings.padding_right,
                self.border_mode,
            )?;
        }

        for (i, dst) in output.iter_mut().enumerate() {
            let window = &arena[2 * i..2 * i + filter_size];
            let mut acc: T = 0f64.as_();
            for (&src, &k) in window.iter().zip(reversed_kernel.iter()) {
                acc = fmla(src, k, acc);
            }
            *dst = acc;
        }
        Ok(())
    }

    fn scratch_size(&self, input_size: usize, filter_size: usize) -> usize {
        match self.border_mode {
            ExtensionMode::Periodization => input_size + input_size % 2 + filter_size - 2,
            _ => {
                let output_size = (input_size + filter_size - 1) / 2;
                2 * output_size + filter_size - 2
            }
        }
    }

    fn upsample_accumulate(
        &self,
        coeffs: &[T],
        output: &mut [T],
        kernel: &[T],
    ) -> Result<(), SubbandError> {
        let filter_length = kernel.len();
        match self.border_mode {
            ExtensionMode::Periodization => {
                let rec_len = output.len() as isize;
                if rec_len == 0 {
                    return Ok(());
                }
                let filter_offset = filter_length as isize / 2 - 1;
                for (i, &c) in coeffs.iter().enumerate() {
                    let k = 2 * i as isize - filter_offset;
                    for (j, &w) in kernel.iter().enumerate() {
                        let dst = &mut output[(k + j as isize).rem_euclid(rec_len) as usize];
                        *dst = fmla(w, c, *dst);
                    }
                }
            }
            _ => {
                let rec_len = output.len();
                let filter_offset = filter_length - 2;
                // coefficients whose whole footprint lies inside the output
                let safe_start = filter_offset.div_ceil(2);
                let safe_end = if rec_len + filter_offset >= filter_length {
                    ((rec_len + filter_offset - filter_length) / 2 + 1).min(coeffs.len())
                } else {
                    0
                };

                for (i, &c) in coeffs.iter().enumerate() {
                    let k = 2 * i as isize - filter_offset as isize;
                    if i >= safe_start && i < safe_end {
                        let k = k as usize;
                        for (&w, dst) in kernel.iter().zip(output[k..k + filter_length].iter_mut())
                        {
                            *dst = fmla(w, c, *dst);
                        }
                    } else {
                        for (j, &w) in kernel.iter().enumerate() {
                            let idx = k + j as isize;
                            if idx >= 0 && idx < rec_len as isize {
                                let dst = &mut output[idx as usize];
                                *dst = fmla(w, c, *dst);
                            }
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// Full (untrimmed) upsampling convolution: `output.len() == 2 * coeffs.len() + kernel.len() - 2`.
pub(crate) fn upsample_full<T: WaveletSample>(
    coeffs: &[T],
    kernel: &[T],
) -> Result<Vec<T>, SubbandError>
where
    f64: AsPrimitive<T>,
{
    if coeffs.is_empty() {
        return Err(SubbandError::InputTooShort { len: 0, min: 1 });
    }
    let mut output = try_vec![T::default(); 2 * coeffs.len() + kernel.len() - 2];
    for (i, &c) in coeffs.iter().enumerate() {
        for (j, &w) in kernel.iter().enumerate() {
            if let Some(dst) = output.get_mut(2 * i + j) {
                *dst = fmla(w, c, *dst);
            }
        }
    }
    Ok(output)
}

/// Undecimated circular filtering: `output[o] = sum_j kernel[j] * input[(offset + o - j) mod N]`.
pub(crate) fn convolve_circular<T: WaveletSample>(
    input: &[T],
    output: &mut [T],
    kernel: &[T],
    offset: usize,
) -> Result<(), SubbandError>
where
    f64: AsPrimitive<T>,
{
    if input.len() != output.len() {
        return Err(SubbandError::ShapeMismatch(format!(
            "input of {} samples does not match output of {}",
            input.len(),
            output.len()
        )));
    }
    if input.is_empty() {
        return Err(SubbandError::InputTooShort { len: 0, min: 1 });
    }
    let n = input.len() as isize;
    for (o, dst) in output.iter_mut().enumerate() {
        let mut acc: T = 0f64.as_();
        let base = offset as isize + o as isize;
        for (j, &w) in kernel.iter().enumerate() {
            if w != T::zero() {
                acc = fmla(w, input[(base - j as isize).rem_euclid(n) as usize], acc);
            }
        }
        *dst = acc;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downsample_haar_periodization() {
        let h = std::f64::consts::FRAC_1_SQRT_2;
        let conv = ScalarConvolution1d::<f64>::new(ExtensionMode::Periodization);
        let input = [1., 2., 3., 4., 5., 6., 7., 8.];
        let mut scratch = vec![0.; conv.scratch_size(input.len(), 2)];
        let mut output = vec![0.; 4];
        conv.downsample(&input, &mut output, &mut scratch, &[h, h])
            .unwrap();
        let reference = [3. * h, 7. * h, 11. * h, 15. * h];
        output.iter().zip(reference.iter()).for_each(|(a, b)| {
            assert!(
                (a - b).abs() < 1e-12,
                "difference expected to be < 1e-12, but values were ref {b}, derived {a}"
            );
        });
    }

    #[test]
    fn test_downsample_zero_mode_boundary() {
        // [1, 1] filter under zero padding is a moving pair sum with phase 1
        let conv = ScalarConvolution1d::<f64>::new(ExtensionMode::Zero);
        let input = [1., 2., 3., 4., 5.];
        let mut scratch = vec![0.; conv.scratch_size(input.len(), 4)];
        let mut output = vec![0.; 4];
        conv.downsample(&input, &mut output, &mut scratch, &[1., 1., 1., 1.])
            .unwrap();
        assert_eq!(output, vec![3., 10., 12., 5.]);
    }

    #[test]
    fn test_upsample_full_length() {
        let full = upsample_full(&[1f64, 2.], &[1., 1., 1., 1.]).unwrap();
        assert_eq!(full, vec![1., 1., 3., 3., 2., 2.]);
    }

    #[test]
    fn test_circular() {
        let input = [1f64, 2., 3., 4.];
        let mut output = [0f64; 4];
        convolve_circular(&input, &mut output, &[1., 0., -1.], 1).unwrap();
        // output[o] = x[o + 1] - x[o - 1]
        assert_eq!(output, [-2., 2., 2., -2.]);
    }
}
