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

/// Coiflet wavelets.
///
/// Both the wavelet and the scaling function of `CoifN` have `2N` vanishing moments,
/// which makes the filters close to symmetric with `6N` taps.
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum CoifletFamily {
    /// Coiflet of order 1 (6 taps)
    Coif1,
    /// Coiflet of order 2 (12 taps)
    Coif2,
    /// Coiflet of order 3 (18 taps)
    Coif3,
}

impl CoifletFamily {
    /// Every member of the family in ascending order.
    pub const ALL: [CoifletFamily; 3] = [
        CoifletFamily::Coif1,
        CoifletFamily::Coif2,
        CoifletFamily::Coif3,
    ];

    /// Family order as used in the wavelet name.
    pub fn order(self) -> usize {
        match self {
            CoifletFamily::Coif1 => 1,
            CoifletFamily::Coif2 => 2,
            CoifletFamily::Coif3 => 3,
        }
    }

    /// Looks a member up by its order.
    pub fn from_order(order: usize) -> Option<CoifletFamily> {
        CoifletFamily::ALL.iter().copied().find(|x| x.order() == order)
    }

    pub(crate) fn get_wavelet_impl(self) -> &'static [f64] {
        match self {
            CoifletFamily::Coif1 => [
                -0.01565572813546454,
                -0.0727326195128539,
                0.38486484686420286,
                0.8525720202122554,
                0.3378976624578092,
                -0.0727326195128539,
            ]
            .as_slice(),
            CoifletFamily::Coif2 => [
                -0.0007205494453645122,
                -0.0018232088707029932,
                0.0056114348193944995,
                0.023680171946334084,
                -0.0594344186464569,
                -0.0764885990783064,
                0.41700518442169254,
                0.8127236354455423,
                0.3861100668211622,
                -0.06737255472196302,
                -0.04146493678175915,
                0.016387336463522112,
            ]
            .as_slice(),
            CoifletFamily::Coif3 => [
                -3.459977283621256e-05,
                -7.098330313814125e-05,
                0.0004662169601128863,
                0.0011175187708906016,
                -0.0025745176887502236,
                -0.00900797613666158,
                0.015880544863615904,
                0.03455502757306163,
                -0.08230192710688598,
                -0.07179982161931202,
                0.42848347637761874,
                0.7937772226256206,
                0.4051769024096169,
                -0.06112339000267287,
                -0.0657719112818555,
                0.023452696141836267,
                0.007782596427325418,
                -0.003793512864491014,
            ]
            .as_slice(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coiflet_orthonormal() {
        for member in CoifletFamily::ALL {
            let h = member.get_wavelet_impl();
            let sum: f64 = h.iter().sum();
            assert!(
                (sum - std::f64::consts::SQRT_2).abs() < 1e-9,
                "{member:?} scaling filter must sum to sqrt(2), got {sum}"
            );
            for shift in 0..h.len() / 2 {
                let dot: f64 = h
                    .iter()
                    .skip(2 * shift)
                    .zip(h.iter())
                    .map(|(a, b)| a * b)
                    .sum();
                let expected = if shift == 0 { 1. } else { 0. };
                assert!(
                    (dot - expected).abs() < 1e-9,
                    "{member:?} shift {shift}: expected {expected}, got {dot}"
                );
            }
        }
    }
}
