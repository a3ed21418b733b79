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
#![allow(clippy::approx_constant)]

/// Biorthogonal spline wavelets of the Cohen-Daubechies-Feauveau family.
///
/// `BiorthogonalN_M` pairs a synthesis (reconstruction) B-spline scaling filter of
/// order **N** with an analysis (decomposition) filter carrying **M** vanishing moments.
///
/// * `Biorthogonal2_2` corresponds to the **CDF 5/3** wavelet used in lossless JPEG 2000.
/// * `Biorthogonal4_4` corresponds to the **CDF 9/7** wavelet.
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum BiorthogonalFamily {
    Biorthogonal1_1,
    Biorthogonal1_3,
    Biorthogonal1_5,
    Biorthogonal2_2,
    Biorthogonal2_4,
    Biorthogonal2_6,
    Biorthogonal2_8,
    Biorthogonal3_1,
    Biorthogonal3_3,
    Biorthogonal3_5,
    Biorthogonal3_7,
    Biorthogonal3_9,
    Biorthogonal4_4,
    Biorthogonal5_5,
    Biorthogonal6_8,
}

const SPLINE_1: [f64; 2] = [0.70710678118654752440084436210, 0.70710678118654752440084436210];
const SPLINE_2: [f64; 3] = [
    0.35355339059327376220042218105,
    0.70710678118654752440084436210,
    0.35355339059327376220042218105,
];
const SPLINE_3: [f64; 4] = [
    0.17677669529663688110021109052,
    0.53033008588991064330063327157,
    0.53033008588991064330063327157,
    0.17677669529663688110021109052,
];
const SPLINE_4: [f64; 7] = [
    -0.064538882628697058,
    -0.040689417609164058,
    0.41809227322161724,
    0.7884856164055829,
    0.41809227322161724,
    -0.040689417609164058,
    -0.064538882628697058,
];
const SPLINE_5: [f64; 11] = [
    0.013456709459118716,
    -0.0026949668801115071,
    -0.13670658466432914,
    -0.093504697400938863,
    0.47680326579848425,
    0.89950610974864842,
    0.47680326579848425,
    -0.093504697400938863,
    -0.13670658466432914,
    -0.0026949668801115071,
    0.013456709459118716,
];
const SPLINE_6: [f64; 11] = [
    0.014426282505624435,
    0.014467504896790148,
    -0.078722001062628819,
    -0.040367979030339923,
    0.41784910915027457,
    0.75890772945365415,
    0.41784910915027457,
    -0.040367979030339923,
    -0.078722001062628819,
    0.014467504896790148,
    0.014426282505624435,
];

impl BiorthogonalFamily {
    /// Every member of the family, ordered by `(N, M)`.
    pub const ALL: [BiorthogonalFamily; 15] = [
        BiorthogonalFamily::Biorthogonal1_1,
        BiorthogonalFamily::Biorthogonal1_3,
        BiorthogonalFamily::Biorthogonal1_5,
        BiorthogonalFamily::Biorthogonal2_2,
        BiorthogonalFamily::Biorthogonal2_4,
        BiorthogonalFamily::Biorthogonal2_6,
        BiorthogonalFamily::Biorthogonal2_8,
        BiorthogonalFamily::Biorthogonal3_1,
        BiorthogonalFamily::Biorthogonal3_3,
        BiorthogonalFamily::Biorthogonal3_5,
        BiorthogonalFamily::Biorthogonal3_7,
        BiorthogonalFamily::Biorthogonal3_9,
        BiorthogonalFamily::Biorthogonal4_4,
        BiorthogonalFamily::Biorthogonal5_5,
        BiorthogonalFamily::Biorthogonal6_8,
    ];

    /// Returns `(N, M)`: synthesis spline order and analysis vanishing moments.
    pub fn order(self) -> (usize, usize) {
        match self {
            BiorthogonalFamily::Biorthogonal1_1 => (1, 1),
            BiorthogonalFamily::Biorthogonal1_3 => (1, 3),
            BiorthogonalFamily::Biorthogonal1_5 => (1, 5),
            BiorthogonalFamily::Biorthogonal2_2 => (2, 2),
            BiorthogonalFamily::Biorthogonal2_4 => (2, 4),
            BiorthogonalFamily::Biorthogonal2_6 => (2, 6),
            BiorthogonalFamily::Biorthogonal2_8 => (2, 8),
            BiorthogonalFamily::Biorthogonal3_1 => (3, 1),
            BiorthogonalFamily::Biorthogonal3_3 => (3, 3),
            BiorthogonalFamily::Biorthogonal3_5 => (3, 5),
            BiorthogonalFamily::Biorthogonal3_7 => (3, 7),
            BiorthogonalFamily::Biorthogonal3_9 => (3, 9),
            BiorthogonalFamily::Biorthogonal4_4 => (4, 4),
            BiorthogonalFamily::Biorthogonal5_5 => (5, 5),
            BiorthogonalFamily::Biorthogonal6_8 => (6, 8),
        }
    }

    /// Looks a member up by its `(N, M)` order.
    pub fn from_order(n: usize, m: usize) -> Option<BiorthogonalFamily> {
        BiorthogonalFamily::ALL
            .iter()
            .copied()
            .find(|family| family.order() == (n, m))
    }

    /// Analysis scaling filter, zero padded to the common filter-bank length.
    pub(crate) fn analysis_impl(self) -> &'static [f64] {
        match self {
            BiorthogonalFamily::Biorthogonal1_1 => [
                0.70710678118654752440084436210,
                0.70710678118654752440084436210,
            ]
            .as_slice(),
            BiorthogonalFamily::Biorthogonal1_3 => [
                -0.0883883476483184405501055452631,
                0.0883883476483184405501055452631,
                0.70710678118654752440084436210,
                0.70710678118654752440084436210,
                0.0883883476483184405501055452631,
                -0.0883883476483184405501055452631,
            ]
            .as_slice(),
            BiorthogonalFamily::Biorthogonal1_5 => [
                0.0165728151840597076031447897368,
                -0.0165728151840597076031447897368,
                -0.1215339780164378557563951247368,
                0.1215339780164378557563951247368,
                0.70710678118654752440084436210,
                0.70710678118654752440084436210,
                0.1215339780164378557563951247368,
                -0.1215339780164378557563951247368,
                -0.0165728151840597076031447897368,
                0.0165728151840597076031447897368,
            ]
            .as_slice(),
            BiorthogonalFamily::Biorthogonal2_2 => [
                -0.1767766952966368811002110905262,
                0.3535533905932737622004221810524,
                1.0606601717798212866012665431573,
                0.3535533905932737622004221810524,
                -0.1767766952966368811002110905262,
                0.0,
            ]
            .as_slice(),
            BiorthogonalFamily::Biorthogonal2_4 => [
                0.0331456303681194152062895794737,
                -0.0662912607362388304125791589473,
                -0.1767766952966368811002110905262,
                0.4198446513295125926130013399998,
                0.9943689110435824561886873842099,
                0.4198446513295125926130013399998,
                -0.1767766952966368811002110905262,
                -0.0662912607362388304125791589473,
                0.0331456303681194152062895794737,
                0.0,
            ]
            .as_slice(),
            BiorthogonalFamily::Biorthogonal2_6 => [
                -0.0069053396600248781679769957237,
                0.0138106793200497563359539914474,
                0.0469563096881691715422435709210,
                -0.1077232986963880994204411332894,
                -0.1698713556366120029322340948025,
                0.4474660099696121052849093228945,
                0.9667475524034829435167794013152,
                0.4474660099696121052849093228945,
                -0.1698713556366120029322340948025,
                -0.1077232986963880994204411332894,
                0.0469563096881691715422435709210,
                0.0138106793200497563359539914474,
                -0.0069053396600248781679769957237,
                0.0,
            ]
            .as_slice(),
            BiorthogonalFamily::Biorthogonal2_8 => [
                0.0015105430506304420992449678146,
                -0.0030210861012608841984899356291,
                -0.0129475118625466465649568669819,
                0.0289161098263541773284036695929,
                0.0529984818906909399392234421792,
                -0.1349130736077360572068505539514,
                -0.1638291834340902345352542235443,
                0.4625714404759165262773590010400,
                0.9516421218971785225243297231697,
                0.4625714404759165262773590010400,
                -0.1638291834340902345352542235443,
                -0.1349130736077360572068505539514,
                0.0529984818906909399392234421792,
                0.0289161098263541773284036695929,
                -0.0129475118625466465649568669819,
                -0.0030210861012608841984899356291,
                0.0015105430506304420992449678146,
                0.0,
            ]
            .as_slice(),
            BiorthogonalFamily::Biorthogonal3_1 => [
                -0.3535533905932737622004221810524,
                1.0606601717798212866012665431573,
                1.0606601717798212866012665431573,
                -0.3535533905932737622004221810524,
            ]
            .as_slice(),
            BiorthogonalFamily::Biorthogonal3_3 => [
                0.0662912607362388304125791589473,
                -0.1988737822087164912377374768420,
                -0.1546796083845572709626847042104,
                0.9943689110435824561886873842099,
                0.9943689110435824561886873842099,
                -0.1546796083845572709626847042104,
                -0.1988737822087164912377374768420,
                0.0662912607362388304125791589473,
            ]
            .as_slice(),
            BiorthogonalFamily::Biorthogonal3_5 => [
                -0.0138106793200497563359539914474,
                0.0414320379601492690078619743421,
                0.0524805814161890740766251675000,
                -0.2679271788089652729175074340788,
                -0.0718155324642587329469607555263,
                0.9667475524034829435167794013152,
                0.9667475524034829435167794013152,
                -0.0718155324642587329469607555263,
                -0.2679271788089652729175074340788,
                0.0524805814161890740766251675000,
                0.0414320379601492690078619743421,
                -0.0138106793200497563359539914474,
            ]
            .as_slice(),
            BiorthogonalFamily::Biorthogonal3_7 => [
                0.0030210861012608841984899356291,
                -0.0090632583037826525954698068873,
                -0.0168317654213106405344439270765,
                0.0746639850740189951912512662623,
                0.0313329787073628846871956180962,
                -0.3011591259228349991008967259990,
                -0.0264992409453454699696117210896,
                0.9516421218971785225243297231697,
                0.9516421218971785225243297231697,
                -0.0264992409453454699696117210896,
                -0.3011591259228349991008967259990,
                0.0313329787073628846871956180962,
                0.0746639850740189951912512662623,
                -0.0168317654213106405344439270765,
                -0.0090632583037826525954698068873,
                0.0030210861012608841984899356291,
            ]
            .as_slice(),
            BiorthogonalFamily::Biorthogonal3_9 => [
                -0.0006797443727836989446602355165,
                0.0020392331183510968339807065496,
                0.0050603192196119810324706421788,
                -0.0206189126411055346546938106687,
                -0.0141127879301758447558029850103,
                0.0991347824942321571990197448581,
                0.0123001362694193142367090236328,
                -0.3201919683607785695513833204624,
                0.0020500227115698857061181706055,
                0.9421257006782067372990864259380,
                0.9421257006782067372990864259380,
                0.0020500227115698857061181706055,
                -0.3201919683607785695513833204624,
                0.0123001362694193142367090236328,
                0.0991347824942321571990197448581,
                -0.0141127879301758447558029850103,
                -0.0206189126411055346546938106687,
                0.0050603192196119810324706421788,
                0.0020392331183510968339807065496,
                -0.0006797443727836989446602355165,
            ]
            .as_slice(),
            BiorthogonalFamily::Biorthogonal4_4 => [
                0.03782845550726404,
                -0.023849465019556843,
                -0.11062440441843718,
                0.37740285561283066,
                0.85269867900889385,
                0.37740285561283066,
                -0.11062440441843718,
                -0.023849465019556843,
                0.03782845550726404,
                0.0,
            ]
            .as_slice(),
            BiorthogonalFamily::Biorthogonal5_5 => [
                0.0,
                0.03968708834740544,
                0.0079481086372403219,
                -0.054463788468236907,
                0.34560528195603346,
                0.73666018142821055,
                0.34560528195603346,
                -0.054463788468236907,
                0.0079481086372403219,
                0.03968708834740544,
                0.0,
                0.0,
            ]
            .as_slice(),
            BiorthogonalFamily::Biorthogonal6_8 => [
                0.0019088317364812906,
                -0.0019142861290887667,
                -0.016990639867602342,
                0.01193456527972926,
                0.04973290349094079,
                -0.077263173167204144,
                -0.09405920349573646,
                0.42079628460982682,
                0.82592299745840225,
                0.42079628460982682,
                -0.09405920349573646,
                -0.077263173167204144,
                0.04973290349094079,
                0.01193456527972926,
                -0.016990639867602342,
                -0.0019142861290887667,
                0.0019088317364812906,
                0.0,
            ]
            .as_slice(),
        }
    }

    fn spline(self) -> &'static [f64] {
        match self.order().0 {
            1 => SPLINE_1.as_slice(),
            2 => SPLINE_2.as_slice(),
            3 => SPLINE_3.as_slice(),
            4 => SPLINE_4.as_slice(),
            5 => SPLINE_5.as_slice(),
            _ => SPLINE_6.as_slice(),
        }
    }

    /// Synthesis scaling filter placed on the same support centre as the analysis one.
    pub(crate) fn synthesis_impl(self) -> Vec<f64> {
        let analysis = self.analysis_impl();
        let spline = self.spline();
        let first = analysis.iter().position(|&x| x != 0.).unwrap_or(0);
        let last = analysis
            .iter()
            .rposition(|&x| x != 0.)
            .unwrap_or(analysis.len() - 1);
        let start = (first + last + 1 - spline.len()) / 2;
        let mut synthesis = vec![0.; analysis.len()];
        synthesis[start..start + spline.len()].copy_from_slice(spline);
        synthesis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_biorthogonality() {
        for family in BiorthogonalFamily::ALL {
            let a = family.synthesis_impl();
            let b = family.analysis_impl();
            assert_eq!(a.len(), b.len(), "{family:?}");
            assert_eq!(a.len() % 2, 0, "{family:?}");
            let len = a.len() as isize;
            for shift in -(len / 2)..=(len / 2) {
                let mut acc = 0f64;
                for i in 0..len {
                    let j = i + 2 * shift;
                    if j >= 0 && j < len {
                        acc += a[i as usize] * b[j as usize];
                    }
                }
                let expected = if shift == 0 { 1. } else { 0. };
                assert!(
                    (acc - expected).abs() < 1e-9,
                    "{family:?} shift {shift}: expected {expected}, got {acc}"
                );
            }
        }
    }

    #[test]
    fn test_filters_sum_to_sqrt2() {
        for family in BiorthogonalFamily::ALL {
            let a: f64 = family.synthesis_impl().iter().sum();
            let b: f64 = family.analysis_impl().iter().sum();
            assert!((a - std::f64::consts::SQRT_2).abs() < 1e-9, "{family:?}");
            assert!((b - std::f64::consts::SQRT_2).abs() < 1e-9, "{family:?}");
        }
    }
}
