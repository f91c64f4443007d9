//! Born-rule measurements: probability densities, norms, and position
//! expectation values.
//!
//! All integrals here use the left-rectangle rule `Σ f[i] dx`. This is the
//! cheapest consistent approximation on a uniform grid; callers wanting
//! trapezoidal accuracy should integrate the returned densities
//! themselves.
//!
//! ```
//! use ndarray as nd;
//! use qwave::{ measure, packet };
//!
//! let x: nd::Array1<f64> = nd::Array1::linspace(-5.0, 5.0, 512);
//! let dx = x[1] - x[0];
//! let mut q = packet::gaussian(&x, 0.0, 0.5, 2.0, 1.0).unwrap();
//! measure::normalize(dx, &mut q).unwrap();
//! assert!((measure::norm_sq(dx, &q) - 1.0).abs() < 1e-9);
//! ```

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    error::{ KernelResult, LengthError, NormError, SizeError },
};

/// Compute the unnormalized probability density `|q[i]|²` at every sample.
///
/// The density integrates to a probability only after [`normalize`].
pub fn probability_density<S>(q: &Arr1<S>) -> KernelResult<nd::Array1<f64>>
where S: nd::Data<Elem = C64>
{
    SizeError::check(1, q.len())?;
    Ok(q.mapv(|qk| qk.norm_sqr()))
}

/// Calculate the squared norm of a wavefunction, `Σ |q[i]|² dx`.
pub fn norm_sq<S>(dx: f64, q: &Arr1<S>) -> f64
where S: nd::Data<Elem = C64>
{
    q.iter().map(|qk| qk.norm_sqr()).sum::<f64>() * dx
}

/// Normalize a wavefunction in place so that its [`norm_sq`] is 1.
///
/// Both components of every sample are divided by the square root of the
/// current squared norm. The samples are left untouched when that norm is
/// zero or non-finite; such fields cannot be rescaled and are reported as
/// errors.
pub fn normalize<S>(dx: f64, q: &mut Arr1<S>) -> KernelResult<()>
where S: nd::DataMut<Elem = C64>
{
    SizeError::check(1, q.len())?;
    let nsq = norm_sq(dx, q);
    NormError::check(nsq)?;
    let norm = nsq.sqrt();
    q.iter_mut().for_each(|qk| { *qk /= norm; });
    Ok(())
}

/// Return a normalized copy of a wavefunction; see [`normalize`].
pub fn normalized<S>(dx: f64, q: &Arr1<S>) -> KernelResult<nd::Array1<C64>>
where S: nd::Data<Elem = C64>
{
    let mut new = q.to_owned();
    normalize(dx, &mut new)?;
    Ok(new)
}

/// Estimate the position expectation value `⟨x⟩ = Σ x[i] prob[i] dx` from
/// a sampled probability density.
///
/// The estimate is physically meaningful only when `prob` has been
/// normalized over the same grid.
pub fn expectation_x<S, T>(dx: f64, x: &Arr1<S>, prob: &Arr1<T>)
    -> KernelResult<f64>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    SizeError::check(1, x.len())?;
    LengthError::check(x, prob)?;
    let acc: f64 = x.iter().zip(prob).map(|(xk, pk)| xk * pk).sum();
    Ok(acc * dx)
}
