//! Window filters for 1-D signals and 2-D spectrograms.
//!
//! - [`median`]: length-`k` median filter with clamped end-point
//!   replication.
//! - [`running`]: running median / minimum with shrinking edge windows.
//!
//! The two edge policies are semantically different and deliberately
//! kept apart: `medfilt` always reduces a full-size window padded with
//! the boundary sample, while the running filters truncate the window
//! so it never leaves the array.

pub mod median;
pub mod running;

pub use median::medfilt;
pub use running::{running_median, running_median_1d, running_minimum, running_minimum_1d};
