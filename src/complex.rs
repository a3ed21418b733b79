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
use crate::{DwtExecutor, WaveletSample};
use num_complex::Complex;
use num_traits::AsPrimitive;

/// Single-level transform of a complex signal.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexDwt<T> {
    pub approximations: Vec<Complex<T>>,
    pub details: Vec<Complex<T>>,
}

fn split<T: Copy>(data: &[Complex<T>]) -> (Vec<T>, Vec<T>) {
    data.iter().map(|x| (x.re, x.im)).unzip()
}

fn join<T: Copy>(re: &[T], im: &[T]) -> Vec<Complex<T>> {
    re.iter()
        .zip(im.iter())
        .map(|(&re, &im)| Complex::new(re, im))
        .collect()
}

/// Forward transform of a complex signal.
///
/// Filters are real, so the real and imaginary parts are transformed independently.
pub fn dwt_complex<T: WaveletSample, W: AsWavelet + ?Sized>(
    data: &[Complex<T>],
    wavelet: &W,
    mode: ExtensionMode,
) -> Result<ComplexDwt<T>, SubbandError>
where
    f64: AsPrimitive<T>,
{
    let handler = DwtHandler::<T>::from_wavelet(wavelet, mode)?;
    let (re, im) = split(data);
    let re = handler.dwt(&re)?;
    let im = handler.dwt(&im)?;
    Ok(ComplexDwt {
        approximations: join(&re.approximations, &im.approximations),
        details: join(&re.details, &im.details),
    })
}

/// Inverse of [`dwt_complex`]. Either band may be `None`.
pub fn idwt_complex<T: WaveletSample, W: AsWavelet + ?Sized>(
    approx: Option<&[Complex<T>]>,
    details: Option<&[Complex<T>]>,
    wavelet: &W,
    mode: ExtensionMode,
) -> Result<Vec<Complex<T>>, SubbandError>
where
    f64: AsPrimitive<T>,
{
    let handler = DwtHandler::<T>::from_wavelet(wavelet, mode)?;
    let approx = approx.map(split);
    let details = details.map(split);
    let re = handler.idwt(
        approx.as_ref().map(|x| x.0.as_slice()),
        details.as_ref().map(|x| x.0.as_slice()),
    )?;
    let im = handler.idwt(
        approx.as_ref().map(|x| x.1.as_slice()),
        details.as_ref().map(|x| x.1.as_slice()),
    )?;
    Ok(join(&re, &im))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dwt::dwt;

    #[test]
    fn test_complex_matches_real_parts() {
        let signal = (0..13)
            .map(|i| Complex::new(i as f64 * 0.5, (i as f64).cos()))
            .collect::<Vec<_>>();
        let coeffs = dwt_complex(&signal, "db3", ExtensionMode::Symmetric).unwrap();
        let re = signal.iter().map(|x| x.re).collect::<Vec<_>>();
        let real = dwt(&re, "db3", ExtensionMode::Symmetric).unwrap();
        coeffs
            .approximations
            .iter()
            .zip(real.approximations.iter())
            .for_each(|(a, b)| {
                assert!((a.re - b).abs() < 1e-12, "ref {b}, derived {}", a.re);
            });

        let restored = idwt_complex(
            Some(coeffs.approximations.as_slice()),
            Some(coeffs.details.as_slice()),
            "db3",
            ExtensionMode::Symmetric,
        )
        .unwrap();
        // 2 * 9 - 6 + 2 samples for 13 inputs
        assert_eq!(restored.len(), 14);
        restored.iter().zip(signal.iter()).for_each(|(a, b)| {
            assert!((a - b).norm() < 1e-10, "ref {b}, derived {a}");
        });
    }

    #[test]
    fn test_complex_partial() {
        let signal = (0..8)
            .map(|i| Complex::new(i as f32, -(i as f32)))
            .collect::<Vec<_>>();
        let coeffs = dwt_complex(&signal, "haar", ExtensionMode::Periodization).unwrap();
        let approx_only = idwt_complex(
            Some(coeffs.approximations.as_slice()),
            None,
            "haar",
            ExtensionMode::Periodization,
        )
        .unwrap();
        // pairwise means
        for (i, v) in approx_only.iter().enumerate() {
            let mean = (i / 2 * 2) as f32 + 0.5;
            assert!((v.re - mean).abs() < 1e-5, "ref {mean}, derived {}", v.re);
            assert!((v.im + mean).abs() < 1e-5, "ref {}, derived {}", -mean, v.im);
        }
    }
}
