//! Frequency-band reductions.
//!
//! A band is a half-open range of spectrogram rows (frequency bins) in
//! an `[F, T]` power array. Collapsing a band to its per-time-bin mean,
//! and that series to its minimum, is how quiet-sky baselines are
//! pulled out of a run of bbx files.

use std::ops::Range;

use ndarray::{s, Array1, Array2, Axis};

use crate::error::{FilterError, Result};

/// Average the rows of `band` into a single time series.
///
/// Returns one value per column (time bin). The band must be non-empty
/// and lie inside the spectrogram's rows.
///
/// ```
/// use bbxfilt::band_average;
/// use ndarray::array;
///
/// let spec = array![[1.0, 2.0], [3.0, 4.0], [100.0, 100.0]];
/// let ts = band_average(&spec, 0..2).unwrap();
/// assert_eq!(ts.to_vec(), vec![2.0, 3.0]);
/// ```
pub fn band_average(data: &Array2<f64>, band: Range<usize>) -> Result<Array1<f64>> {
    if band.is_empty() || band.end > data.nrows() {
        return Err(FilterError::BandOutOfRange {
            lo: band.start,
            hi: band.end,
            rows: data.nrows(),
        });
    }
    Ok(data.slice(s![band, ..]).mean_axis(Axis(0)).unwrap())
}

/// Minimum of the band-averaged time series.
///
/// This is the per-file statistic the frequency-averaged minimum
/// time-series tooling stitches into light curves.
pub fn band_minimum(data: &Array2<f64>, band: Range<usize>) -> Result<f64> {
    let ts = band_average(data, band)?;
    Ok(ts.fold(f64::INFINITY, |acc, &v| acc.min(v)))
}
