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
use crate::err::{SubbandError, try_vec};
use crate::registry::AsWavelet;
use crate::util::dwt_max_level;
use crate::{DwtExecutor, DwtForwardExecutor, DwtInverseExecutor, WaveletSample};
use ndarray::{
    Array2, ArrayBase, ArrayD, ArrayViewD, Axis, CowArray, Data, Ix2, IxDyn, Slice,
};
use num_traits::AsPrimitive;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Subbands of one n-dimensional level keyed by their `a`/`d` label.
pub type SubbandMap<T> = BTreeMap<String, ArrayD<T>>;

/// Single-level 2D decomposition.
#[derive(Debug, Clone, PartialEq)]
pub struct Dwt2<T> {
    /// Low-pass along both axes, `aa`.
    pub approximation: Array2<T>,
    /// High-pass along rows, `da`.
    pub horizontal: Array2<T>,
    /// High-pass along columns, `ad`.
    pub vertical: Array2<T>,
    /// High-pass along both axes, `dd`.
    pub diagonal: Array2<T>,
}

/// Multilevel n-dimensional decomposition.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveletNdCoefficients<T> {
    /// Approximation at the coarsest level.
    pub approximation: ArrayD<T>,
    /// Detail subbands per level, coarsest first. The all-`a` label is never present.
    pub details: Vec<SubbandMap<T>>,
    /// Transformed axes, in the order labels are written.
    pub axes: Vec<usize>,
    /// Shape of the decomposed array, used to crop the reconstruction.
    pub signal_shape: Option<Vec<usize>>,
}

impl<T> WaveletNdCoefficients<T> {
    pub fn level(&self) -> usize {
        self.details.len()
    }
}

fn normalize_axis(axis: isize, ndim: usize) -> Result<usize, SubbandError> {
    let resolved = if axis < 0 {
        axis + ndim as isize
    } else {
        axis
    };
    if resolved < 0 || resolved >= ndim as isize {
        return Err(SubbandError::InvalidAxis { axis, ndim });
    }
    Ok(resolved as usize)
}

/// Resolves negative indices; `None` selects every axis in order.
fn normalize_axes(axes: Option<&[isize]>, ndim: usize) -> Result<Vec<usize>, SubbandError> {
    if ndim == 0 {
        return Err(SubbandError::ShapeMismatch(
            "input must have at least one dimension".to_string(),
        ));
    }
    let Some(axes) = axes else {
        return Ok((0..ndim).collect());
    };
    if axes.is_empty() {
        return Err(SubbandError::InvalidSubbands(
            "at least one axis is required".to_string(),
        ));
    }
    let mut resolved = Vec::with_capacity(axes.len());
    for &axis in axes.iter() {
        let axis = normalize_axis(axis, ndim)?;
        if resolved.contains(&axis) {
            return Err(SubbandError::DuplicateAxis(axis));
        }
        resolved.push(axis);
    }
    Ok(resolved)
}

/// Copies `view` into a row-major buffer whose last axis is `axis`.
///
/// Returns the buffer and its shape.
fn gather_lanes<T: Copy>(view: ArrayViewD<'_, T>, axis: usize) -> (Vec<T>, Vec<usize>) {
    let mut order = (0..view.ndim()).filter(|&x| x != axis).collect::<Vec<_>>();
    order.push(axis);
    let moved = view.permuted_axes(order);
    let shape = moved.shape().to_vec();
    (moved.iter().copied().collect(), shape)
}

/// Inverse of [`gather_lanes`]: moves the last axis of a lane buffer back to `axis`.
fn scatter_lanes<T: Copy>(
    buffer: Vec<T>,
    moved_shape: &[usize],
    axis: usize,
) -> Result<ArrayD<T>, SubbandError> {
    let moved = ArrayD::from_shape_vec(IxDyn(moved_shape), buffer)
        .map_err(|e| SubbandError::ShapeMismatch(e.to_string()))?;
    let ndim = moved_shape.len();
    let mut restore = Vec::with_capacity(ndim);
    for target in 0..ndim {
        let position = if target == axis {
            ndim - 1
        } else if target < axis {
            target
        } else {
            target - 1
        };
        restore.push(position);
    }
    let restored = moved.permuted_axes(restore);
    Ok(restored.as_standard_layout().into_owned())
}

fn forward_lanes<T: WaveletSample>(
    handler: &DwtHandler<T>,
    view: ArrayViewD<'_, T>,
    axis: usize,
) -> Result<(ArrayD<T>, ArrayD<T>), SubbandError>
where
    f64: AsPrimitive<T>,
{
    let n = view.len_of(Axis(axis));
    if n == 0 {
        return Err(SubbandError::InputTooShort { len: 0, min: 1 });
    }
    let (input, mut shape) = gather_lanes(view, axis);
    let out_len = handler.dwt_size(n);
    let lanes = input.len() / n;
    let mut approx = try_vec![T::default(); lanes * out_len];
    let mut details = try_vec![T::default(); lanes * out_len];

    #[cfg(feature = "rayon")]
    input
        .par_chunks_exact(n)
        .zip(approx.par_chunks_exact_mut(out_len))
        .zip(details.par_chunks_exact_mut(out_len))
        .try_for_each(|((src, a), d)| handler.execute_forward(src, a, d))?;
    #[cfg(not(feature = "rayon"))]
    input
        .chunks_exact(n)
        .zip(approx.chunks_exact_mut(out_len))
        .zip(details.chunks_exact_mut(out_len))
        .try_for_each(|((src, a), d)| handler.execute_forward(src, a, d))?;

    if let Some(last) = shape.last_mut() {
        *last = out_len;
    }
    Ok((
        scatter_lanes(approx, &shape, axis)?,
        scatter_lanes(details, &shape, axis)?,
    ))
}

fn inverse_lanes<T: WaveletSample>(
    handler: &DwtHandler<T>,
    approx: Option<ArrayViewD<'_, T>>,
    details: Option<ArrayViewD<'_, T>>,
    axis: usize,
) -> Result<ArrayD<T>, SubbandError>
where
    f64: AsPrimitive<T>,
{
    if let (Some(a), Some(d)) = (&approx, &details) {
        if a.shape() != d.shape() {
            return Err(SubbandError::ShapeMismatch(format!(
                "approximation shape {:?} does not match detail shape {:?}",
                a.shape(),
                d.shape()
            )));
        }
    }
    let approx = approx.map(|x| gather_lanes(x, axis));
    let details = details.map(|x| gather_lanes(x, axis));
    let mut shape = approx
        .as_ref()
        .or(details.as_ref())
        .map(|x| x.1.clone())
        .ok_or(SubbandError::MissingCoefficients)?;
    let n = shape.last().copied().unwrap_or(0);
    let out_len = handler.idwt_size(n);
    if n == 0 || out_len == 0 {
        return Err(SubbandError::InputTooShort {
            len: n,
            min: (handler.filter_length() / 2).max(1),
        });
    }
    let lanes = shape.iter().product::<usize>() / n;
    let mut output = try_vec![T::default(); lanes * out_len];

    let reconstruct_lane = |(i, dst): (usize, &mut [T])| {
        let a = approx.as_ref().map(|x| &x.0[i * n..(i + 1) * n]);
        let d = details.as_ref().map(|x| &x.0[i * n..(i + 1) * n]);
        handler.execute_inverse(a, d, dst)
    };
    #[cfg(feature = "rayon")]
    output
        .par_chunks_exact_mut(out_len)
        .enumerate()
        .try_for_each(reconstruct_lane)?;
    #[cfg(not(feature = "rayon"))]
    output
        .chunks_exact_mut(out_len)
        .enumerate()
        .try_for_each(reconstruct_lane)?;

    if let Some(last) = shape.last_mut() {
        *last = out_len;
    }
    scatter_lanes(output, &shape, axis)
}

/// Single-level transform of every lane along `axis`.
///
/// Lanes are independent and run in parallel when the `rayon` feature is on.
pub fn dwt_axis<T: WaveletSample, S: Data<Elem = T>, W: AsWavelet + ?Sized>(
    data: &ArrayBase<S, IxDyn>,
    wavelet: &W,
    mode: ExtensionMode,
    axis: isize,
) -> Result<(ArrayD<T>, ArrayD<T>), SubbandError>
where
    f64: AsPrimitive<T>,
{
    let axis = normalize_axis(axis, data.ndim())?;
    let handler = DwtHandler::from_wavelet(wavelet, mode)?;
    forward_lanes(&handler, data.view(), axis)
}

/// Inverse of [`dwt_axis`]. Either band may be `None`; present bands must share a shape.
pub fn idwt_axis<'a, T: WaveletSample, W: AsWavelet + ?Sized>(
    approx: Option<ArrayViewD<'a, T>>,
    details: Option<ArrayViewD<'a, T>>,
    wavelet: &W,
    mode: ExtensionMode,
    axis: isize,
) -> Result<ArrayD<T>, SubbandError>
where
    f64: AsPrimitive<T>,
{
    let ndim = approx
        .as_ref()
        .or(details.as_ref())
        .map(|x| x.ndim())
        .ok_or(SubbandError::MissingCoefficients)?;
    let axis = normalize_axis(axis, ndim)?;
    let handler = DwtHandler::from_wavelet(wavelet, mode)?;
    inverse_lanes(&handler, approx, details, axis)
}

fn decompose_level<T: WaveletSample>(
    handler: &DwtHandler<T>,
    data: ArrayViewD<'_, T>,
    axes: &[usize],
) -> Result<SubbandMap<T>, SubbandError>
where
    f64: AsPrimitive<T>,
{
    let mut bands: Vec<(String, CowArray<'_, T, IxDyn>)> = vec![(String::new(), data.into())];
    for &axis in axes.iter() {
        let mut next = Vec::with_capacity(bands.len() * 2);
        for (label, band) in bands.into_iter() {
            let (a, d) = forward_lanes(handler, band.view(), axis)?;
            next.push((format!("{label}a"), a.into()));
            next.push((format!("{label}d"), d.into()));
        }
        bands = next;
    }
    Ok(bands
        .into_iter()
        .map(|(label, band)| (label, band.into_owned()))
        .collect())
}

/// Checks labels and shapes of a subband map against `naxes` transformed axes.
fn validate_subbands<'a>(
    bands: impl Iterator<Item = (&'a str, &'a [usize])>,
    naxes: usize,
    complete: bool,
) -> Result<Vec<usize>, SubbandError> {
    let mut shape: Option<&[usize]> = None;
    let mut count = 0usize;
    for (label, band_shape) in bands {
        if label.len() != naxes || !label.chars().all(|c| c == 'a' || c == 'd') {
            return Err(SubbandError::InvalidSubbands(format!(
                "label '{label}' does not name a subband of {naxes} axes"
            )));
        }
        match shape {
            Some(expected) if expected != band_shape => {
                return Err(SubbandError::ShapeMismatch(format!(
                    "subband '{label}' has shape {band_shape:?}, expected {expected:?}"
                )));
            }
            None => shape = Some(band_shape),
            _ => {}
        }
        count += 1;
    }
    let shape = shape.ok_or(SubbandError::MissingCoefficients)?;
    if complete && Some(count) != 1usize.checked_shl(naxes as u32) {
        return Err(SubbandError::InvalidSubbands(format!(
            "expected all {} subbands of {naxes} axes, got {count}",
            1usize << naxes.min(63)
        )));
    }
    Ok(shape.to_vec())
}

/// Folds the subbands back along `axes` in reverse order.
///
/// At step `k` the label character at position `k` is consumed; labels missing from
/// the map contribute zeros.
fn reconstruct_subbands<T: WaveletSample>(
    handler: &DwtHandler<T>,
    mut bands: BTreeMap<String, CowArray<'_, T, IxDyn>>,
    axes: &[usize],
) -> Result<ArrayD<T>, SubbandError>
where
    f64: AsPrimitive<T>,
{
    for (depth, &axis) in axes.iter().enumerate().rev() {
        let prefixes = bands
            .keys()
            .map(|x| x[..depth].to_string())
            .collect::<BTreeSet<_>>();
        let mut next = BTreeMap::new();
        for prefix in prefixes.into_iter() {
            let low = bands.remove(&format!("{prefix}a"));
            let high = bands.remove(&format!("{prefix}d"));
            let rec = inverse_lanes(
                handler,
                low.as_ref().map(|x| x.view()),
                high.as_ref().map(|x| x.view()),
                axis,
            )?;
            next.insert(prefix, CowArray::from(rec));
        }
        bands = next;
    }
    bands
        .remove("")
        .map(|x| x.into_owned())
        .ok_or(SubbandError::MissingCoefficients)
}

/// Single-level n-dimensional transform along `axes` (all axes when `None`).
///
/// Returns `2^axes.len()` subbands. A label has one character per transformed axis,
/// in the order the axes were given: `a` for low-pass, `d` for high-pass. Arrays are
/// read in row-major order, and in the returned map the last listed axis varies
/// fastest.
///
/// ```
/// use ndarray::ArrayD;
/// use subband::{ExtensionMode, dwtn};
///
/// let image = ArrayD::from_shape_fn(vec![4, 4], |ix| (ix[0] * 4 + ix[1]) as f64);
/// let bands = dwtn(&image, "haar", ExtensionMode::Periodization, None).unwrap();
/// assert_eq!(bands.keys().collect::<Vec<_>>(), ["aa", "ad", "da", "dd"]);
/// assert!(bands.values().all(|x| x.shape() == [2, 2]));
/// ```
#[tracing::instrument(skip_all, fields(shape = ?data.shape(), mode = %mode))]
pub fn dwtn<T: WaveletSample, S: Data<Elem = T>, W: AsWavelet + ?Sized>(
    data: &ArrayBase<S, IxDyn>,
    wavelet: &W,
    mode: ExtensionMode,
    axes: Option<&[isize]>,
) -> Result<SubbandMap<T>, SubbandError>
where
    f64: AsPrimitive<T>,
{
    let axes = normalize_axes(axes, data.ndim())?;
    let handler = DwtHandler::from_wavelet(wavelet, mode)?;
    decompose_level(&handler, data.view(), &axes)
}

/// Inverse of [`dwtn`]. Requires every subband of `axes`.
///
/// # Errors
/// [`SubbandError::InvalidSubbands`] for a malformed or incomplete key set and
/// [`SubbandError::ShapeMismatch`] when subbands disagree in shape.
#[tracing::instrument(skip_all, fields(bands = coeffs.len(), mode = %mode))]
pub fn idwtn<T: WaveletSample, W: AsWavelet + ?Sized>(
    coeffs: &SubbandMap<T>,
    wavelet: &W,
    mode: ExtensionMode,
    axes: Option<&[isize]>,
) -> Result<ArrayD<T>, SubbandError>
where
    f64: AsPrimitive<T>,
{
    idwtn_impl(coeffs, wavelet, mode, axes, true)
}

/// Like [`idwtn`] but absent subbands are treated as zeros.
#[tracing::instrument(skip_all, fields(bands = coeffs.len(), mode = %mode))]
pub fn idwtn_partial<T: WaveletSample, W: AsWavelet + ?Sized>(
    coeffs: &SubbandMap<T>,
    wavelet: &W,
    mode: ExtensionMode,
    axes: Option<&[isize]>,
) -> Result<ArrayD<T>, SubbandError>
where
    f64: AsPrimitive<T>,
{
    idwtn_impl(coeffs, wavelet, mode, axes, false)
}

fn idwtn_impl<T: WaveletSample, W: AsWavelet + ?Sized>(
    coeffs: &SubbandMap<T>,
    wavelet: &W,
    mode: ExtensionMode,
    axes: Option<&[isize]>,
    complete: bool,
) -> Result<ArrayD<T>, SubbandError>
where
    f64: AsPrimitive<T>,
{
    let ndim = coeffs
        .values()
        .next()
        .map(|x| x.ndim())
        .ok_or(SubbandError::MissingCoefficients)?;
    let axes = normalize_axes(axes, ndim)?;
    validate_subbands(
        coeffs.iter().map(|(k, v)| (k.as_str(), v.shape())),
        axes.len(),
        complete,
    )?;
    let handler = DwtHandler::from_wavelet(wavelet, mode)?;
    let bands = coeffs
        .iter()
        .map(|(k, v)| (k.clone(), CowArray::from(v.view())))
        .collect();
    reconstruct_subbands(&handler, bands, &axes)
}

fn into_2d<T>(array: ArrayD<T>) -> Result<Array2<T>, SubbandError> {
    array
        .into_dimensionality::<Ix2>()
        .map_err(|e| SubbandError::ShapeMismatch(e.to_string()))
}

fn take_band<T>(bands: &mut SubbandMap<T>, label: &str) -> Result<Array2<T>, SubbandError> {
    into_2d(
        bands
            .remove(label)
            .ok_or_else(|| SubbandError::InvalidSubbands(format!("missing subband '{label}'")))?,
    )
}

/// Single-level 2D transform over both axes.
pub fn dwt2<T: WaveletSample, S: Data<Elem = T>, W: AsWavelet + ?Sized>(
    data: &ArrayBase<S, Ix2>,
    wavelet: &W,
    mode: ExtensionMode,
) -> Result<Dwt2<T>, SubbandError>
where
    f64: AsPrimitive<T>,
{
    let mut bands = dwtn(&data.view().into_dyn(), wavelet, mode, None)?;
    Ok(Dwt2 {
        approximation: take_band(&mut bands, "aa")?,
        horizontal: take_band(&mut bands, "da")?,
        vertical: take_band(&mut bands, "ad")?,
        diagonal: take_band(&mut bands, "dd")?,
    })
}

/// Inverse of [`dwt2`].
pub fn idwt2<T: WaveletSample, W: AsWavelet + ?Sized>(
    coeffs: &Dwt2<T>,
    wavelet: &W,
    mode: ExtensionMode,
) -> Result<Array2<T>, SubbandError>
where
    f64: AsPrimitive<T>,
{
    let handler = DwtHandler::from_wavelet(wavelet, mode)?;
    let bands = [
        ("aa", &coeffs.approximation),
        ("ad", &coeffs.vertical),
        ("da", &coeffs.horizontal),
        ("dd", &coeffs.diagonal),
    ];
    validate_subbands(bands.iter().map(|(k, v)| (*k, v.shape())), 2, true)?;
    let bands = bands
        .iter()
        .map(|(k, v)| (k.to_string(), CowArray::from(v.view().into_dyn())))
        .collect();
    into_2d(reconstruct_subbands(&handler, bands, &[0, 1])?)
}

/// Multilevel n-dimensional decomposition along `axes` (all axes when `None`).
///
/// The maximum level is limited by the shortest transformed axis.
#[tracing::instrument(skip_all, fields(shape = ?data.shape(), level = ?level, mode = %mode))]
pub fn wavedecn<T: WaveletSample, S: Data<Elem = T>, W: AsWavelet + ?Sized>(
    data: &ArrayBase<S, IxDyn>,
    wavelet: &W,
    mode: ExtensionMode,
    level: Option<usize>,
    axes: Option<&[isize]>,
) -> Result<WaveletNdCoefficients<T>, SubbandError>
where
    f64: AsPrimitive<T>,
{
    let axes = normalize_axes(axes, data.ndim())?;
    let wavelet = wavelet.as_wavelet()?;
    let shortest = axes
        .iter()
        .map(|&axis| data.len_of(Axis(axis)))
        .min()
        .unwrap_or(0);
    if shortest == 0 {
        return Err(SubbandError::InputTooShort { len: 0, min: 1 });
    }
    let max = dwt_max_level(shortest, wavelet.support_length());
    let level = level.unwrap_or(max);
    if level > max {
        return Err(SubbandError::LevelTooHigh {
            requested: level,
            max,
            len: shortest,
        });
    }

    let handler = DwtHandler::new(wavelet, mode);
    let approx_label = "a".repeat(axes.len());
    let mut current: CowArray<'_, T, IxDyn> = data.view().into();
    let mut details = Vec::with_capacity(level);
    for _ in 0..level {
        let mut bands = decompose_level(&handler, current.view(), &axes)?;
        let approx = bands
            .remove(&approx_label)
            .ok_or(SubbandError::MissingCoefficients)?;
        details.push(bands);
        current = approx.into();
    }
    details.reverse();
    debug!(level, approximation = ?current.shape(), "decomposed");

    Ok(WaveletNdCoefficients {
        approximation: current.into_owned(),
        details,
        axes,
        signal_shape: Some(data.shape().to_vec()),
    })
}

/// Shape of the subbands at `index` (coarsest first).
///
/// Taken from the nearest non-empty level at or below `index`, or derived from
/// `signal_shape` when every finer level is empty.
fn level_shape<T: WaveletSample>(
    coeffs: &WaveletNdCoefficients<T>,
    index: usize,
    axes: &[usize],
    handler: &DwtHandler<T>,
) -> Option<Vec<usize>>
where
    f64: AsPrimitive<T>,
{
    let finer = coeffs
        .details
        .get(index..)?
        .iter()
        .enumerate()
        .find_map(|(steps, level)| level.values().next().map(|x| (steps, x.shape().to_vec())));
    let (steps, mut shape) = match finer {
        Some(found) => found,
        None => (coeffs.details.len() - index, coeffs.signal_shape.clone()?),
    };
    for _ in 0..steps {
        for &axis in axes.iter() {
            if let Some(len) = shape.get_mut(axis) {
                *len = handler.dwt_size(*len);
            }
        }
    }
    Some(shape)
}

/// Inverse of [`wavedecn`].
///
/// Along every axis an intermediate approximation one sample longer than the detail
/// subbands is truncated by one. Missing labels inside a level are treated as zeros,
/// and an empty level contributes only its approximation.
#[tracing::instrument(skip_all, fields(level = coeffs.level(), mode = %mode))]
pub fn waverecn<T: WaveletSample, W: AsWavelet + ?Sized>(
    coeffs: &WaveletNdCoefficients<T>,
    wavelet: &W,
    mode: ExtensionMode,
) -> Result<ArrayD<T>, SubbandError>
where
    f64: AsPrimitive<T>,
{
    let ndim = coeffs.approximation.ndim();
    let signed = coeffs
        .axes
        .iter()
        .map(|&x| x as isize)
        .collect::<Vec<_>>();
    let axes = normalize_axes(Some(signed.as_slice()), ndim)?;
    let handler = DwtHandler::from_wavelet(wavelet, mode)?;
    let approx_label = "a".repeat(axes.len());

    let mut current = coeffs.approximation.clone();
    for (index, level) in coeffs.details.iter().enumerate() {
        if level.contains_key(&approx_label) {
            return Err(SubbandError::InvalidSubbands(format!(
                "detail level carries the approximation label '{approx_label}'"
            )));
        }
        if let Some(detail_shape) = level_shape(coeffs, index, &axes, &handler) {
            for &axis in axes.iter() {
                let Some(&target) = detail_shape.get(axis) else {
                    continue;
                };
                if current.len_of(Axis(axis)) == target + 1 {
                    current = current
                        .slice_axis(Axis(axis), Slice::from(0..target))
                        .to_owned();
                }
            }
        }
        validate_subbands(
            level
                .iter()
                .map(|(k, v)| (k.as_str(), v.shape()))
                .chain(std::iter::once((approx_label.as_str(), current.shape()))),
            axes.len(),
            false,
        )?;
        let mut bands = level
            .iter()
            .map(|(k, v)| (k.clone(), CowArray::from(v.view())))
            .collect::<BTreeMap<_, _>>();
        bands.insert(approx_label.clone(), CowArray::from(current.view()));
        current = reconstruct_subbands(&handler, bands, &axes)?;
    }

    if let Some(shape) = coeffs.signal_shape.as_ref() {
        if shape.len() != ndim || shape.iter().zip(current.shape()).any(|(s, c)| s > c) {
            return Err(SubbandError::ShapeMismatch(format!(
                "reconstruction of shape {:?} cannot be cropped to {shape:?}",
                current.shape()
            )));
        }
        current = current
            .slice_each_axis(|ax| Slice::from(0..shape[ax.axis.index()]))
            .to_owned();
    }
    Ok(current)
}

/// Multilevel 2D decomposition over both axes.
pub fn wavedec2<T: WaveletSample, S: Data<Elem = T>, W: AsWavelet + ?Sized>(
    data: &ArrayBase<S, Ix2>,
    wavelet: &W,
    mode: ExtensionMode,
    level: Option<usize>,
) -> Result<WaveletNdCoefficients<T>, SubbandError>
where
    f64: AsPrimitive<T>,
{
    wavedecn(&data.view().into_dyn(), wavelet, mode, level, None)
}

/// Inverse of [`wavedec2`].
pub fn waverec2<T: WaveletSample, W: AsWavelet + ?Sized>(
    coeffs: &WaveletNdCoefficients<T>,
    wavelet: &W,
    mode: ExtensionMode,
) -> Result<Array2<T>, SubbandError>
where
    f64: AsPrimitive<T>,
{
    into_2d(waverecn(coeffs, wavelet, mode)?)
}
