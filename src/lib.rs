//! # bbxfilt — window filters for bbx radio spectrograms
//!
//! `bbxfilt` implements the array transforms used to clean and reduce
//! bbx-format spectrograms from low-frequency sky monitors: running
//! median / minimum filters, a clamped-replication median filter,
//! dynamic-range compression, running-average normalisation,
//! frequency-band reductions and stride decimation.
//!
//! The library deals in plain [`ndarray`] arrays only. Reading and
//! writing bbx files, globbing file sequences and plotting all live in
//! the surrounding tooling; a reader hands this crate a `[rows, cols]`
//! array and gets a freshly allocated array of the same shape (or a
//! reduced series) back.
//!
//! ## Operations
//!
//! ```text
//! [T, F] spectrogram
//!   ├─ running_median / running_minimum   sliding-window baseline, per axis
//!   ├─ medfilt                            1-D despike (clamped end points)
//!   ├─ dynamic_range_scale                v / sqrt(v² + mu²)
//!   ├─ running_average_scale              row ÷ local row-window mean
//!   ├─ band_average / band_minimum        [F, T] band → time series → scalar
//!   └─ decimate_rows                      every Nth row, offset carried over
//! ```
//!
//! Every transform is a pure function: the input is read-only, the
//! output freshly allocated, and all precondition failures are
//! reported eagerly as [`FilterError`] before any work is done.
//!
//! ## Quick start
//!
//! ```
//! use bbxfilt::{running_median, running_minimum, dynamic_range_scale};
//! use ndarray::{Array2, Axis};
//!
//! // 64 time samples × 16 frequency bins
//! let spec = Array2::from_shape_fn((64, 16), |(t, f)| {
//!     (t as f64 * 0.3).sin() * 40.0 + f as f64
//! });
//!
//! // Sliding 11-sample median along the time axis.
//! let baseline = running_median(&spec, 5, Axis(0)).unwrap();
//! assert_eq!(baseline.dim(), spec.dim());
//!
//! // Per-frequency noise floor, then compress the residual.
//! let floor = running_minimum(&spec, 5, Axis(0)).unwrap();
//! let compressed = dynamic_range_scale(&(&spec - &floor), 1000.0);
//! assert_eq!(compressed.dim(), spec.dim());
//! ```
//!
//! 1-D series use the slice variants:
//!
//! ```
//! use bbxfilt::{medfilt, running_median_1d};
//!
//! let noisy = [1.0, 9.0, 1.0, 1.0, 9.0, 1.0, 1.0];
//! assert_eq!(medfilt(&noisy, 3).unwrap()[1], 1.0);
//! assert_eq!(running_median_1d(&noisy, 1).unwrap()[3], 1.0);
//! ```

pub mod band;
pub mod decimate;
pub mod error;
pub mod filter;
pub mod normalize;

// ── Crate-root re-exports ─────────────────────────────────────────────────
//
// Everything a downstream user is likely to need is available directly
// as `bbxfilt::foo` without having to know the internal module layout.

pub use band::{band_average, band_minimum};
pub use decimate::decimate_rows;
pub use error::{FilterError, Result};
pub use filter::{
    medfilt,
    running_median, running_median_1d,
    running_minimum, running_minimum_1d,
};
pub use normalize::{dynamic_range_scale, running_average_scale, DEFAULT_MU};
