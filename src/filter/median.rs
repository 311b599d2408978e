//! Length-`k` median filter with clamped end-point replication.

use crate::error::{FilterError, Result};

/// Apply a length-`k` median filter to a 1-D signal.
///
/// Boundaries are extended by repeating the end points: window
/// positions that fall outside the signal read `x[0]` on the left and
/// `x[n-1]` on the right, so every output sample is the median of
/// exactly `k` values.
///
/// `k` must be odd; an even (or zero) length fails with
/// [`FilterError::EvenFilterLength`]. An empty input produces an empty
/// output.
///
/// ```
/// use bbxfilt::medfilt;
///
/// let x = [1.0, 9.0, 2.0, 1.0, 1.0];
/// let y = medfilt(&x, 3).unwrap();
/// assert_eq!(y, vec![1.0, 2.0, 2.0, 1.0, 1.0]);
/// ```
pub fn medfilt(x: &[f64], k: usize) -> Result<Vec<f64>> {
    if k % 2 == 0 {
        return Err(FilterError::EvenFilterLength { k });
    }
    let n = x.len();
    if n == 0 {
        return Ok(vec![]);
    }

    let k2 = (k - 1) / 2;
    let mut window = vec![0.0_f64; k];
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        for (j, w) in window.iter_mut().enumerate() {
            // clamp(i + j - k2) into 0..n
            let idx = (i + j).saturating_sub(k2).min(n - 1);
            *w = x[idx];
        }
        out.push(median_in_place(&mut window));
    }
    Ok(out)
}

/// Median of a scratch buffer, sorting it in place.
///
/// Even-length buffers return the mean of the two middle values.
pub(crate) fn median_in_place(buf: &mut [f64]) -> f64 {
    debug_assert!(!buf.is_empty());
    buf.sort_unstable_by(f64::total_cmp);
    let mid = buf.len() / 2;
    if buf.len() % 2 == 1 {
        buf[mid]
    } else {
        0.5 * (buf[mid - 1] + buf[mid])
    }
}
