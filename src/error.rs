//! Error type shared by every transform in the crate.
//!
//! All variants describe an invalid argument: the input array or the
//! filter parameters violate a precondition that is checked at call
//! entry, before any output is allocated. The operations themselves are
//! deterministic and side-effect free, so there is nothing to retry —
//! callers either fix the input or propagate the failure.

/// Precondition violations reported by the filter routines.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// The median filter length must be an odd positive integer.
    #[error("median filter length must be odd, got {k}")]
    EvenFilterLength { k: usize },

    /// Running filters accept `Axis(0)` or `Axis(1)` only.
    #[error("axis {axis} is out of bounds for a {ndim}-dimensional array")]
    AxisOutOfBounds { axis: usize, ndim: usize },

    /// The full window (`2r + 1` samples) must fit strictly inside the
    /// filtered axis.
    #[error("window of {window} samples must be smaller than the {len} points along axis {axis}")]
    WindowTooLarge { window: usize, len: usize, axis: usize },

    /// Decimation keeps every `step`-th row; a stride of zero never
    /// advances.
    #[error("decimation step must be at least 1")]
    ZeroStep,

    /// A frequency band must be a non-empty row range inside the
    /// spectrogram.
    #[error("band {lo}..{hi} is empty or outside the {rows} spectrogram rows")]
    BandOutOfRange { lo: usize, hi: usize, rows: usize },
}

pub type Result<T> = std::result::Result<T, FilterError>;
