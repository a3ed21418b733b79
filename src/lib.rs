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
#![allow(clippy::excessive_precision)]
//! Discrete, stationary and packet wavelet transforms.
//!
//! The engine is built around one primitive, the single-level filter bank
//! transform [`dwt`]/[`idwt`], and composes it into multilevel ([`wavedec`]),
//! n-dimensional ([`dwtn`]), stationary ([`swt`]) and wavelet packet
//! ([`WaveletPacket`]) decompositions.
//!
//! ```
//! use subband::{dwt, idwt, ExtensionMode};
//!
//! let signal = [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
//! let coeffs = dwt(&signal, "haar", ExtensionMode::Periodization).unwrap();
//! assert_eq!(coeffs.approximations.len(), 4);
//!
//! let restored = idwt(
//!     Some(coeffs.approximations.as_slice()),
//!     Some(coeffs.details.as_slice()),
//!     "haar",
//!     ExtensionMode::Periodization,
//! )
//! .unwrap();
//! assert!(restored.iter().zip(signal.iter()).all(|(a, b)| (a - b).abs() < 1e-12));
//! ```

use num_traits::{AsPrimitive, Float, FloatConst, MulAdd};
use std::fmt::Debug;

mod beylkin;
mod biorthogonal;
mod border_mode;
mod coiflet;
mod complex;
mod convolve1d;
mod daubechies;
mod dmey;
mod dwt;
mod err;
mod filter_padding;
mod mla;
mod multidim;
mod multilevel;
mod packet;
mod promote;
mod registry;
mod swt;
mod symlets;
mod util;
mod vaidyanathan;
mod wavelet;

pub use biorthogonal::BiorthogonalFamily;
pub use border_mode::ExtensionMode;
pub use coiflet::CoifletFamily;
pub use complex::{ComplexDwt, dwt_complex, idwt_complex};
pub use daubechies::DaubechiesFamily;
pub use dwt::{DwtHandler, Part, downcoef, dwt, idwt, upcoef};
pub use err::SubbandError;
pub use filter_padding::extend;
pub use multidim::{
    Dwt2, SubbandMap, WaveletNdCoefficients, dwt_axis, dwt2, dwtn, idwt_axis, idwt2, idwtn,
    idwtn_partial, wavedec2, wavedecn, waverec2, waverecn,
};
pub use multilevel::{MultiLevelCoefficients, wavedec, waverec};
pub use packet::{NodeId, PacketNode, PacketOrder, WaveletPacket};
pub use promote::promote;
pub use registry::{AsWavelet, DiscreteWavelet, FAMILIES, lookup, wavelist};
pub use swt::{SwtConfig, iswt, swt};
pub use symlets::SymletFamily;
pub use util::{
    FilterBank, dwt_coeff_len, dwt_length, dwt_max_level, idwt_length, orthfilt, qmf,
    swt_max_level,
};
pub use wavelet::{Symmetry, Wavelet};

/// Floating point sample type the transforms operate on.
pub trait WaveletSample:
    Float + FloatConst + MulAdd<Self, Output = Self> + Default + Debug + Send + Sync + 'static
{
}

impl WaveletSample for f32 {}

impl WaveletSample for f64 {}

/// Trait for performing the **forward discrete wavelet transform (DWT)**.
///
/// # Type Parameters
/// - `T`: The numeric type of the input signal (e.g., `f32` or `f64`).
pub trait DwtForwardExecutor<T> {
    /// Executes the forward DWT on a 1D input signal.
    ///
    /// # Parameters
    /// - `input`: Slice of the input signal.
    /// - `approx`: Mutable slice to store the approximation (low-pass) coefficients.
    /// - `details`: Mutable slice to store the detail (high-pass) coefficients.
    ///
    /// Both output slices must be exactly [`DwtForwardExecutor::dwt_size`] long.
    fn execute_forward(
        &self,
        input: &[T],
        approx: &mut [T],
        details: &mut [T],
    ) -> Result<(), SubbandError>;

    /// Number of coefficients per band for an input of `input_length` samples.
    fn dwt_size(&self, input_length: usize) -> usize;
}

/// Trait for performing the **inverse discrete wavelet transform (IDWT)**.
///
/// # Type Parameters
/// - `T`: The numeric type of the coefficients (e.g., `f32` or `f64`).
pub trait DwtInverseExecutor<T> {
    /// Reconstructs a signal from approximation and detail coefficients.
    ///
    /// A missing band contributes nothing, which yields a partial reconstruction.
    /// Present bands must have equal length and `output` must be
    /// [`DwtInverseExecutor::idwt_size`] long.
    fn execute_inverse(
        &self,
        approx: Option<&[T]>,
        details: Option<&[T]>,
        output: &mut [T],
    ) -> Result<(), SubbandError>;

    /// Length of the reconstruction from bands of `coeffs_length` coefficients.
    fn idwt_size(&self, coeffs_length: usize) -> usize;
}

/// Full DWT executor combining forward and inverse operations.
pub trait DwtExecutor<T>: DwtForwardExecutor<T> + DwtInverseExecutor<T> + Send + Sync {
    /// Returns the number of coefficients in the wavelet filter.
    fn filter_length(&self) -> usize;

    /// Extension mode the executor was built for.
    fn mode(&self) -> ExtensionMode;

    /// Allocating single-level forward transform.
    fn dwt(&self, signal: &[T]) -> Result<Dwt<T>, SubbandError>;

    /// Allocating single-level inverse transform.
    ///
    /// Bands whose lengths differ by one are accepted and the longer one is truncated.
    fn idwt(&self, approx: Option<&[T]>, details: Option<&[T]>) -> Result<Vec<T>, SubbandError>;
}

/// Represents the result of a **single-level DWT**.
#[derive(Debug, Clone, PartialEq)]
pub struct Dwt<T> {
    /// Approximation (low-pass) coefficients of the signal.
    pub approximations: Vec<T>,
    /// Detail (high-pass) coefficients of the signal.
    pub details: Vec<T>,
}

/// Represents the result of a **multi-level stationary transform**.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiDwt<T> {
    /// Approximation and detail pairs, finest level first.
    pub levels: Vec<Dwt<T>>,
}

pub(crate) fn cast_filter<T: WaveletSample>(taps: &[f64]) -> Vec<T>
where
    f64: AsPrimitive<T>,
{
    taps.iter().map(|&x| x.as_()).collect()
}
