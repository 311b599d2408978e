//! Row decimation for downsampled file sequences.

use ndarray::{Array2, Axis};

use crate::error::{FilterError, Result};

/// Keep every `step`-th row of `data`, starting at `offset`.
///
/// Returns the kept rows and the offset to apply to the next array in
/// the sequence: `(last_kept + step) - nrows`. Threading that offset
/// through consecutive arrays keeps a constant cadence across file
/// boundaries even when the stride straddles them.
///
/// An `offset` at or past the end keeps nothing and carries
/// `offset - nrows` forward. The column count is always preserved.
///
/// ```
/// use bbxfilt::decimate_rows;
/// use ndarray::Array2;
///
/// let file = Array2::from_shape_fn((10, 4), |(i, _)| i as f64);
/// let (rows, carry) = decimate_rows(&file, 3, 0).unwrap();
/// assert_eq!(rows.nrows(), 4);   // rows 0, 3, 6, 9
/// assert_eq!(carry, 2);          // next file starts at its row 2
/// ```
pub fn decimate_rows(
    data: &Array2<f64>,
    step: usize,
    offset: usize,
) -> Result<(Array2<f64>, usize)> {
    if step == 0 {
        return Err(FilterError::ZeroStep);
    }
    let n = data.nrows();
    if offset >= n {
        return Ok((Array2::zeros((0, data.ncols())), offset - n));
    }

    let kept: Vec<usize> = (offset..n).step_by(step).collect();
    let carry = kept[kept.len() - 1] + step - n;
    Ok((data.select(Axis(0), &kept), carry))
}
