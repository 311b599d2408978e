//! Running median and minimum with shrinking edge windows.
//!
//! The window holds `2r + 1` samples centred on the current position.
//! Near the array ends the window shrinks instead of clamping: the
//! first `r` positions reduce over `x[..i + r + 1]` and the last `r`
//! positions over the mirrored trailing slice `x[n - (i + r + 1)..]`,
//! so the window never leaves the array. Interior positions always see
//! the full `2r + 1` samples.

use ndarray::{s, Array1, Array2, ArrayView2, Axis};

use super::median::median_in_place;
use crate::error::{FilterError, Result};

/// Running median of `x` along `axis`.
///
/// `r` is the number of samples included on each side of the current
/// position; the full window holds `2r + 1` samples and must be
/// strictly smaller than the filtered axis. The input is untouched and
/// the output has the same shape.
///
/// ```
/// use bbxfilt::running_median;
/// use ndarray::{array, Axis};
///
/// let spec = array![[4.0, 0.0], [1.0, 9.0], [2.0, 3.0], [8.0, 5.0]];
/// let med = running_median(&spec, 1, Axis(0)).unwrap();
/// assert_eq!(med[[1, 0]], 2.0); // median of column 0 rows 0..3
/// ```
pub fn running_median(x: &Array2<f64>, r: usize, axis: Axis) -> Result<Array2<f64>> {
    run_2d(x, r, axis, median_of_columns)
}

/// Running minimum of `x` along `axis`; same windowing as
/// [`running_median`].
pub fn running_minimum(x: &Array2<f64>, r: usize, axis: Axis) -> Result<Array2<f64>> {
    run_2d(x, r, axis, minimum_of_columns)
}

/// Running median of a 1-D signal.
///
/// The first and last `r` output samples come from shrinking windows,
/// so `running_median_1d(&[1., 2., 3., 4., 5.], 1)` starts with the
/// median of `[1, 2]`, not of a padded triple.
pub fn running_median_1d(x: &[f64], r: usize) -> Result<Vec<f64>> {
    check_window(r, x.len(), 0)?;
    let mut buf = Vec::with_capacity(2 * r + 1);
    Ok(run_slice(x, r, |w| {
        buf.clear();
        buf.extend_from_slice(w);
        median_in_place(&mut buf)
    }))
}

/// Running minimum of a 1-D signal; same windowing as
/// [`running_median_1d`].
pub fn running_minimum_1d(x: &[f64], r: usize) -> Result<Vec<f64>> {
    check_window(r, x.len(), 0)?;
    Ok(run_slice(x, r, |w| {
        w.iter().copied().fold(f64::INFINITY, f64::min)
    }))
}

fn check_window(r: usize, len: usize, axis: usize) -> Result<()> {
    let window = 2 * r + 1;
    if len <= window {
        return Err(FilterError::WindowTooLarge { window, len, axis });
    }
    Ok(())
}

fn run_2d(
    x: &Array2<f64>,
    r: usize,
    axis: Axis,
    reduce: fn(ArrayView2<f64>) -> Array1<f64>,
) -> Result<Array2<f64>> {
    let ax = axis.index();
    if ax > 1 {
        return Err(FilterError::AxisOutOfBounds { axis: ax, ndim: 2 });
    }
    check_window(r, x.len_of(axis), ax)?;

    if ax == 1 {
        // Slide along columns by filtering the transposed view; the
        // edge policy is start/end symmetric, so transposing back gives
        // the same result as rotating.
        let flipped = x.t().to_owned();
        let y = run_axis0(flipped.view(), r, reduce);
        return Ok(y.reversed_axes());
    }
    Ok(run_axis0(x.view(), r, reduce))
}

/// Window walk along axis 0: `reduce` collapses a block of rows into
/// one output row.
fn run_axis0(
    x: ArrayView2<f64>,
    r: usize,
    reduce: fn(ArrayView2<f64>) -> Array1<f64>,
) -> Array2<f64> {
    let n = x.nrows();
    let mut y = Array2::zeros(x.raw_dim());
    for i in 0..r {
        y.row_mut(i).assign(&reduce(x.slice(s![..i + r + 1, ..])));
        y.row_mut(n - 1 - i)
            .assign(&reduce(x.slice(s![n - (i + r + 1).., ..])));
    }
    for j in r..n - r {
        y.row_mut(j).assign(&reduce(x.slice(s![j - r..j + r + 1, ..])));
    }
    y
}

/// Shrinking-window walk over a slice.
fn run_slice(x: &[f64], r: usize, mut reduce: impl FnMut(&[f64]) -> f64) -> Vec<f64> {
    let n = x.len();
    let mut y = vec![0.0_f64; n];
    for i in 0..r {
        y[i] = reduce(&x[..i + r + 1]);
        y[n - 1 - i] = reduce(&x[n - (i + r + 1)..]);
    }
    for j in r..n - r {
        y[j] = reduce(&x[j - r..j + r + 1]);
    }
    y
}

fn median_of_columns(w: ArrayView2<f64>) -> Array1<f64> {
    w.map_axis(Axis(0), |col| {
        let mut buf = col.to_vec();
        median_in_place(&mut buf)
    })
}

fn minimum_of_columns(w: ArrayView2<f64>) -> Array1<f64> {
    w.fold_axis(Axis(0), f64::INFINITY, |&acc, &v| acc.min(v))
}
