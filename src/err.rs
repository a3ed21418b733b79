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

/// Errors produced by the transform engine.
///
/// All failures are local and synchronous. An operation either returns its full
/// result or one of these variants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubbandError {
    /// The wavelet name is not present in the registry.
    #[error("unknown wavelet: {0}")]
    UnknownWavelet(String),
    /// The extension mode name is not recognized.
    #[error("unknown extension mode: {0}")]
    UnknownMode(String),
    /// The signal is shorter than the operation requires.
    #[error("input too short: got {len} samples, need at least {min}")]
    InputTooShort {
        /// Number of samples provided.
        len: usize,
        /// Minimum number of samples required.
        min: usize,
    },
    /// Approximation and detail coefficients cannot be paired.
    #[error("approximation length {approx} is incompatible with detail length {detail}")]
    MismatchedLength {
        /// Approximation band length.
        approx: usize,
        /// Detail band length.
        detail: usize,
    },
    /// Requested decomposition level exceeds what the signal supports.
    #[error("level too high: requested {requested}, max for length {len} is {max}")]
    LevelTooHigh {
        /// Level that was requested.
        requested: usize,
        /// Maximum feasible level.
        max: usize,
        /// Length of the input signal along the transformed axis.
        len: usize,
    },
    /// A decomposition level of zero was requested where at least one is needed.
    #[error("level must be at least 1")]
    ZeroLevel,
    /// Axis index is out of range for the array dimensionality.
    #[error("axis {axis} is out of range for an array with {ndim} dimensions")]
    InvalidAxis {
        /// Axis as given by the caller, may be negative.
        axis: isize,
        /// Number of array dimensions.
        ndim: usize,
    },
    /// The same axis was requested more than once.
    #[error("axis {0} was requested more than once")]
    DuplicateAxis(usize),
    /// Wavelet packet path does not address a node.
    #[error("invalid packet path: {0}")]
    InvalidPath(String),
    /// Neither approximation nor detail coefficients were supplied.
    #[error("at least one of approximation or detail coefficients must be present")]
    MissingCoefficients,
    /// A custom filter bank failed validation.
    #[error("invalid wavelet filter bank: {0}")]
    InvalidWavelet(String),
    /// A subband map does not form a complete and consistent set.
    #[error("invalid subband set: {0}")]
    InvalidSubbands(String),
    /// Coefficient arrays disagree in shape.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
    /// Allocation of the given number of elements failed.
    #[error("cannot allocate {0} elements")]
    OutOfMemory(usize),
}

macro_rules! try_vec {
    () => {
        Vec::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut v = Vec::new();
        v.try_reserve_exact($n)
            .map_err(|_| crate::err::SubbandError::OutOfMemory($n))?;
        v.resize($n, $elem);
        v
    }};
}

pub(crate) use try_vec;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_level_too_high_display() {
        let err = SubbandError::LevelTooHigh {
            requested: 10,
            max: 3,
            len: 8,
        };
        assert_eq!(
            err.to_string(),
            "level too high: requested 10, max for length 8 is 3"
        );
    }

    #[test]
    fn error_input_too_short_display() {
        let err = SubbandError::InputTooShort { len: 0, min: 1 };
        assert_eq!(err.to_string(), "input too short: got 0 samples, need at least 1");
    }

    #[test]
    fn error_invalid_axis_display() {
        let err = SubbandError::InvalidAxis { axis: -3, ndim: 2 };
        assert_eq!(
            err.to_string(),
            "axis -3 is out of range for an array with 2 dimensions"
        );
    }

    #[test]
    fn try_vec_allocates() {
        fn make() -> Result<Vec<f64>, SubbandError> {
            Ok(try_vec![0.5f64; 7])
        }
        let v = make().unwrap();
        assert_eq!(v.len(), 7);
        assert!(v.iter().all(|&x| x == 0.5));
    }
}
