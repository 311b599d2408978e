use bbxfilt::{band_average, band_minimum, decimate_rows, FilterError};
use ndarray::{array, Array2};

// ── band reductions ───────────────────────────────────────────────────────────

#[test]
fn band_average_is_row_mean_per_time_bin() {
    // [F, T] = 4 frequency bins × 3 time bins.
    let spec = array![
        [1.0, 2.0, 3.0],
        [3.0, 4.0, 5.0],
        [50.0, 60.0, 70.0],
        [0.0, 0.0, 0.0],
    ];
    let ts = band_average(&spec, 0..2).unwrap();
    assert_eq!(ts.to_vec(), vec![2.0, 3.0, 4.0]);

    // Full-height band averages every row.
    let ts = band_average(&spec, 0..4).unwrap();
    assert_eq!(ts.to_vec(), vec![13.5, 16.5, 19.5]);
}

#[test]
fn band_minimum_is_min_of_averaged_series() {
    let spec = array![
        [10.0, 2.0, 6.0],
        [20.0, 4.0, 8.0],
    ];
    // Band average = [15, 3, 7].
    assert_eq!(band_minimum(&spec, 0..2).unwrap(), 3.0);
}

#[test]
fn empty_or_out_of_range_band_is_invalid() {
    let spec = Array2::<f64>::zeros((4, 8));
    assert!(matches!(
        band_average(&spec, 2..2),
        Err(FilterError::BandOutOfRange { lo: 2, hi: 2, rows: 4 })
    ));
    assert!(matches!(
        band_minimum(&spec, 3..9),
        Err(FilterError::BandOutOfRange { lo: 3, hi: 9, rows: 4 })
    ));
}

// ── decimation ────────────────────────────────────────────────────────────────

#[test]
fn decimation_matches_global_cadence() {
    // Three "files" of uneven length, globally numbered rows. Taking
    // every 4th row of the concatenation must equal decimating file by
    // file with the carried offset.
    let lens = [7usize, 5, 9];
    let step = 4;

    let mut global_row = 0usize;
    let files: Vec<Array2<f64>> = lens
        .iter()
        .map(|&n| {
            let a = Array2::from_shape_fn((n, 2), |(i, _)| (global_row + i) as f64);
            global_row += n;
            a
        })
        .collect();

    let mut offset = 0usize;
    let mut kept: Vec<f64> = vec![];
    for f in &files {
        let (rows, carry) = decimate_rows(f, step, offset).unwrap();
        kept.extend(rows.column(0).iter().copied());
        offset = carry;
    }

    let total: usize = lens.iter().sum();
    let expected: Vec<f64> = (0..total).step_by(step).map(|i| i as f64).collect();
    assert_eq!(kept, expected);
}

#[test]
fn decimation_preserves_columns() {
    let data = Array2::from_shape_fn((6, 5), |(i, c)| (i * 5 + c) as f64);
    let (rows, _) = decimate_rows(&data, 2, 1).unwrap();
    assert_eq!(rows.ncols(), 5);
    assert_eq!(rows.row(0).to_vec(), vec![5.0, 6.0, 7.0, 8.0, 9.0]);
}

#[test]
fn offset_beyond_array_carries_remainder() {
    let data = Array2::<f64>::zeros((3, 2));
    let (rows, carry) = decimate_rows(&data, 5, 4).unwrap();
    assert_eq!(rows.nrows(), 0);
    assert_eq!(rows.ncols(), 2);
    assert_eq!(carry, 1);
}

#[test]
fn zero_step_is_invalid() {
    let data = Array2::<f64>::zeros((3, 2));
    assert!(matches!(
        decimate_rows(&data, 0, 0),
        Err(FilterError::ZeroStep)
    ));
}
