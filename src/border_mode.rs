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
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[repr(C)]
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
/// Declares how a finite signal is extended beyond its edges.
pub enum ExtensionMode {
    /// Signal is padded with zeros `000000|abcdefgh|000000`
    Zero,
    /// Edge samples are replicated `aaaaaa|abcdefgh|hhhhhh`
    Constant,
    /// Half-sample symmetric mirror `fedcba|abcdefgh|hgfedc`
    #[default]
    Symmetric,
    /// Whole-sample symmetric mirror `gfedcb|abcdefgh|gfedcb`
    Reflect,
    /// Signal wraps around `cdefgh|abcdefgh|abcdefg`
    Periodic,
    /// Odd signals get their last sample duplicated, then the signal is treated as
    /// periodic and the transform yields exactly `ceil(N/2)` coefficients.
    Periodization,
    /// First derivative extrapolation from the two outermost samples.
    Smooth,
    /// Half-sample anti-symmetric mirror `-f-e-d-c-b-a|abcdefgh|-h-g-f-e-d-c`
    Antisymmetric,
    /// Whole-sample anti-symmetric mirror about the edge value.
    Antireflect,
}

impl ExtensionMode {
    /// Every supported mode, in declaration order.
    pub const ALL: [ExtensionMode; 9] = [
        ExtensionMode::Zero,
        ExtensionMode::Constant,
        ExtensionMode::Symmetric,
        ExtensionMode::Reflect,
        ExtensionMode::Periodic,
        ExtensionMode::Periodization,
        ExtensionMode::Smooth,
        ExtensionMode::Antisymmetric,
        ExtensionMode::Antireflect,
    ];

    /// Canonical lower-case name of the mode.
    pub fn name(self) -> &'static str {
        match self {
            ExtensionMode::Zero => "zero",
            ExtensionMode::Constant => "constant",
            ExtensionMode::Symmetric => "symmetric",
            ExtensionMode::Reflect => "reflect",
            ExtensionMode::Periodic => "periodic",
            ExtensionMode::Periodization => "periodization",
            ExtensionMode::Smooth => "smooth",
            ExtensionMode::Antisymmetric => "antisymmetric",
            ExtensionMode::Antireflect => "antireflect",
        }
    }

    /// Modes whose single-level round trip is not robust to coefficient truncation.
    ///
    /// Zero and constant padding invent samples that are not part of the signal, so
    /// reconstructing from a modified or truncated coefficient set leaves boundary
    /// artifacts.
    pub fn is_lossy(self) -> bool {
        matches!(self, ExtensionMode::Zero | ExtensionMode::Constant)
    }

    /// Translates a retired short mode name into its current variant.
    ///
    /// Accepts `zpd`, `cpd`, `sp1`, `sym`, `ppd` and `per`. Any other input is
    /// parsed as a regular mode name. Each legacy hit emits a deprecation warning.
    pub fn from_legacy(name: &str) -> Result<ExtensionMode, SubbandError> {
        let mode = match name {
            "zpd" => ExtensionMode::Zero,
            "cpd" => ExtensionMode::Constant,
            "sp1" => ExtensionMode::Smooth,
            "sym" => ExtensionMode::Symmetric,
            "ppd" => ExtensionMode::Periodic,
            "per" => ExtensionMode::Periodization,
            other => return other.parse(),
        };
        tracing::warn!(
            legacy = name,
            replacement = mode.name(),
            "legacy extension mode name is deprecated"
        );
        Ok(mode)
    }
}

impl Display for ExtensionMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExtensionMode {
    type Err = SubbandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExtensionMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| SubbandError::UnknownMode(s.to_string()))
    }
}

impl TryFrom<&str> for ExtensionMode {
    type Error = SubbandError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_names_round_trip() {
        for mode in ExtensionMode::ALL {
            let parsed: ExtensionMode = mode.to_string().parse().unwrap();
            assert_eq!(parsed, mode);
        }
    }

    #[test]
    fn test_unknown_mode() {
        let err = "mirror".parse::<ExtensionMode>().unwrap_err();
        assert_eq!(err, SubbandError::UnknownMode("mirror".to_string()));
    }

    #[test]
    fn test_legacy_aliases() {
        assert_eq!(ExtensionMode::from_legacy("zpd").unwrap(), ExtensionMode::Zero);
        assert_eq!(
            ExtensionMode::from_legacy("cpd").unwrap(),
            ExtensionMode::Constant
        );
        assert_eq!(ExtensionMode::from_legacy("sp1").unwrap(), ExtensionMode::Smooth);
        assert_eq!(
            ExtensionMode::from_legacy("sym").unwrap(),
            ExtensionMode::Symmetric
        );
        assert_eq!(
            ExtensionMode::from_legacy("ppd").unwrap(),
            ExtensionMode::Periodic
        );
        assert_eq!(
            ExtensionMode::from_legacy("per").unwrap(),
            ExtensionMode::Periodization
        );
        assert_eq!(
            ExtensionMode::from_legacy("reflect").unwrap(),
            ExtensionMode::Reflect
        );
        assert!(ExtensionMode::from_legacy("spd").is_err());
    }

    #[test]
    fn test_default_is_symmetric() {
        assert_eq!(ExtensionMode::default(), ExtensionMode::Symmetric);
        assert!(ExtensionMode::Zero.is_lossy());
        assert!(!ExtensionMode::Periodization.is_lossy());
    }
}
