//! Uniform spatial discretization shared by all kernels.

use ndarray as nd;
use crate::error::{ BoundsError, KernelResult, NonFiniteError, SizeError };

/// A uniformly spaced coordinate grid.
///
/// Bundles the coordinate samples with their spacing so that `dx` and `x`
/// cannot drift apart between kernel calls.
#[derive(Clone, Debug)]
pub struct Grid {
    /// Coordinate samples.
    pub x: nd::Array1<f64>,
    /// Spacing between adjacent samples.
    pub dx: f64,
}

impl Grid {
    /// Create a grid of `n` evenly spaced points covering `[x_min, x_max]`,
    /// endpoints included.
    ///
    /// Requires finite bounds with `x_min < x_max` and `n ≥ 2`.
    pub fn new(x_min: f64, x_max: f64, n: usize) -> KernelResult<Self> {
        SizeError::check(2, n)?;
        NonFiniteError::check("x_min", x_min)?;
        NonFiniteError::check("x_max", x_max)?;
        BoundsError::check(x_min, x_max)?;
        let x: nd::Array1<f64> = nd::Array1::linspace(x_min, x_max, n);
        let dx = (x_max - x_min) / (n as f64 - 1.0);
        Ok(Self { x, dx })
    }

    /// Number of grid points.
    pub fn len(&self) -> usize { self.x.len() }

    /// Always `false` for a constructed grid; provided for completeness.
    pub fn is_empty(&self) -> bool { self.x.is_empty() }
}
