//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use thiserror::Error;

/// Returned when an operation requires more grid points than an input array
/// provides.
#[derive(Debug, Error)]
#[error("operation requires at least {0} grid points; got {1}")]
pub struct SizeError(pub usize, pub usize);

impl SizeError {
    pub(crate) fn check(min: usize, got: usize) -> Result<(), Self> {
        (got >= min).then_some(()).ok_or(Self(min, got))
    }
}

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned when grid bounds are inverted or coincident.
#[derive(Debug, Error)]
#[error("grid bounds must satisfy x_min < x_max; got {0} and {1}")]
pub struct BoundsError(pub f64, pub f64);

impl BoundsError {
    pub(crate) fn check(x_min: f64, x_max: f64) -> Result<(), Self> {
        (x_min < x_max).then_some(()).ok_or(Self(x_min, x_max))
    }
}

/// Returned when a wavefunction's squared norm is zero or non-finite,
/// leaving no way to rescale its samples.
///
/// A squared norm of exactly zero can come from an all-zero field or from
/// underflow of a vanishingly small one.
#[derive(Debug, Error)]
#[error("wavefunction norm must be positive and finite; got squared norm {0}")]
pub struct NormError(pub f64);

impl NormError {
    pub(crate) fn check(norm_sq: f64) -> Result<(), Self> {
        (norm_sq.is_finite() && norm_sq > 0.0)
            .then_some(()).ok_or(Self(norm_sq))
    }
}

/// Returned when a scalar parameter would generate non-finite samples.
#[derive(Debug, Error)]
#[error("parameter `{0}` would produce non-finite samples; got {1}")]
pub struct NonFiniteError(pub &'static str, pub f64);

impl NonFiniteError {
    pub(crate) fn check(name: &'static str, val: f64) -> Result<(), Self> {
        val.is_finite().then_some(()).ok_or(Self(name, val))
    }

    /// Like [`Self::check`], but additionally reject zero, for parameters
    /// that appear in a denominator.
    pub(crate) fn check_nonzero(name: &'static str, val: f64)
        -> Result<(), Self>
    {
        (val.is_finite() && val != 0.0)
            .then_some(()).ok_or(Self(name, val))
    }
}

/// Returned when an interleaved sample buffer cannot hold whole complex
/// samples.
#[derive(Debug, Error)]
#[error("interleaved buffers must have even length; got {0}")]
pub struct InterleaveError(pub usize);

impl InterleaveError {
    pub(crate) fn check(buf: &[f64]) -> Result<(), Self> {
        (buf.len() % 2 == 0).then_some(()).ok_or(Self(buf.len()))
    }
}

/// Returned from wavefunction kernel functions.
#[derive(Debug, Error)]
pub enum KernelError {
    /// [`SizeError`]
    #[error("size error: {0}")]
    Size(#[from] SizeError),

    /// [`LengthError`]
    #[error("length error: {0}")]
    Length(#[from] LengthError),

    /// [`BoundsError`]
    #[error("bounds error: {0}")]
    Bounds(#[from] BoundsError),

    /// [`NormError`]
    #[error("norm error: {0}")]
    Norm(#[from] NormError),

    /// [`NonFiniteError`]
    #[error("non-finite input: {0}")]
    NonFinite(#[from] NonFiniteError),

    /// [`InterleaveError`]
    #[error("layout error: {0}")]
    Interleave(#[from] InterleaveError),
}

pub type KernelResult<T> = Result<T, KernelError>;
