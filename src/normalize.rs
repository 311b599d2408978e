//! Per-row spectrogram rescaling.
//!
//! `dynamic_range_scale` — soft dynamic-range compression:
//!   `out[i, t] = data[i, t] / sqrt(data[i, t]² + mu²)`
//!
//! `running_average_scale` — divide each row by the column-wise mean of
//! the rows around it, flattening slow drifts in the time direction.

use ndarray::{s, Array2, Axis};

use crate::error::{FilterError, Result};

/// Default knee of the dynamic-range compression, in the same units as
/// the spectrogram power.
pub const DEFAULT_MU: f64 = 1000.0;

/// Compress the dynamic range of a spectrogram.
///
/// Every element is mapped to `v / sqrt(v² + mu²)`, which is ≈ `v / mu`
/// for `|v| ≪ mu` and saturates towards ±1 for `|v| ≫ mu`. A `mu` of
/// zero is replaced by `1e-6` so an all-zero input does not divide
/// `0 / 0`; [`DEFAULT_MU`] is the usual knee for raw bbx power.
///
/// ```
/// use bbxfilt::dynamic_range_scale;
/// use ndarray::array;
///
/// let data = array![[3.0, -4.0]];
/// let out = dynamic_range_scale(&data, 4.0);
/// assert_eq!(out[[0, 0]], 0.6);  // 3 / sqrt(9 + 16)
/// ```
pub fn dynamic_range_scale(data: &Array2<f64>, mu: f64) -> Array2<f64> {
    let mu = if mu == 0.0 { 1e-6 } else { mu };
    let mu2 = mu * mu;
    data.mapv(|v| v / (v * v + mu2).sqrt())
}

/// Normalise each row by the running average of the rows around it.
///
/// Interior rows (`r <= j < n - r`) divide element-wise by the
/// column-wise mean of rows `j - r ..= j + r`. The first `r` rows
/// divide by the mean over rows `..i + r` and the last `r` rows by the
/// mean over the trailing `i + r + 1` rows; the leading edge windows
/// are one row narrower than the trailing ones.
///
/// The full window must fit strictly inside the row count, same policy
/// as the running filters.
pub fn running_average_scale(data: &Array2<f64>, r: usize) -> Result<Array2<f64>> {
    let n = data.nrows();
    let window = 2 * r + 1;
    if n <= window {
        return Err(FilterError::WindowTooLarge { window, len: n, axis: 0 });
    }

    let mut out = Array2::zeros(data.raw_dim());
    for i in 0..r {
        let lead = data.slice(s![..i + r, ..]).mean_axis(Axis(0)).unwrap();
        out.row_mut(i).assign(&(&data.row(i) / &lead));
        let trail = data
            .slice(s![n - (i + r + 1).., ..])
            .mean_axis(Axis(0))
            .unwrap();
        out.row_mut(n - 1 - i).assign(&(&data.row(n - 1 - i) / &trail));
    }
    for j in r..n - r {
        let local = data
            .slice(s![j - r..j + r + 1, ..])
            .mean_axis(Axis(0))
            .unwrap();
        out.row_mut(j).assign(&(&data.row(j) / &local));
    }
    Ok(out)
}
