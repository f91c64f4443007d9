//! Potential profile constructors.
//!
//! Each function samples a standard textbook potential over a
//! caller-supplied coordinate array, producing one value per grid point.
//! All constructors are total; an empty coordinate array yields an empty
//! profile.

use ndarray as nd;
use crate::Arr1;

/// Stand-in for an infinite wall; large enough to confine any state of
/// interest without overflowing downstream arithmetic.
pub const WALL: f64 = 1e10;

/// Infinite square well: zero on `[-width/2, width/2]`, [`WALL`] outside.
pub fn infinite_well<S>(x: &Arr1<S>, width: f64) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    let half = width / 2.0;
    x.mapv(|xk| if xk < -half || xk > half { WALL } else { 0.0 })
}

/// Finite square well: zero on `[-width/2, width/2]`, `height` outside.
pub fn finite_well<S>(x: &Arr1<S>, width: f64, height: f64)
    -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    let half = width / 2.0;
    x.mapv(|xk| if xk < -half || xk > half { height } else { 0.0 })
}

/// Rectangular barrier of the given height and width centered on `center`.
pub fn barrier<S>(x: &Arr1<S>, height: f64, width: f64, center: f64)
    -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    let left = center - width / 2.0;
    let right = center + width / 2.0;
    x.mapv(|xk| if (left..=right).contains(&xk) { height } else { 0.0 })
}

/// Harmonic oscillator, `V(x) = m ω² x² / 2`.
pub fn harmonic<S>(x: &Arr1<S>, mass: f64, omega: f64) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    x.mapv(|xk| 0.5 * mass * omega.powi(2) * xk.powi(2))
}

/// Piecewise-constant potential assembled from `(left, right, value)`
/// regions, zero outside all of them; later regions overwrite earlier ones
/// where they overlap.
pub fn piecewise<S>(x: &Arr1<S>, regions: &[(f64, f64, f64)])
    -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    x.mapv(|xk| {
        regions.iter()
            .filter(|(left, right, _)| (*left..=*right).contains(&xk))
            .map(|(_, _, value)| *value)
            .last()
            .unwrap_or(0.0)
    })
}
