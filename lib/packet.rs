//! Gaussian wave packet construction.

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    error::{ KernelResult, NonFiniteError, SizeError },
    measure,
};

/// Sample the Gaussian wave packet
/// `A exp(-(x - x₀)² / 2σ²) exp(i k₀ x)`
/// over the given coordinate array.
///
/// The real and imaginary parts of each sample carry the Euler-form
/// factors `cos(k₀ x)` and `sin(k₀ x)` of the phase; `k₀ = 0` gives a
/// purely real packet.
///
/// Returns an error for an empty coordinate array, for non-finite `x0`,
/// `k0`, or `a`, and for zero or non-finite `sigma` (which would divide
/// every envelope sample to a non-finite value).
pub fn gaussian<S>(x: &Arr1<S>, x0: f64, sigma: f64, k0: f64, a: f64)
    -> KernelResult<nd::Array1<C64>>
where S: nd::Data<Elem = f64>
{
    SizeError::check(1, x.len())?;
    NonFiniteError::check("x0", x0)?;
    NonFiniteError::check_nonzero("sigma", sigma)?;
    NonFiniteError::check("k0", k0)?;
    NonFiniteError::check("amplitude", a)?;
    let two_sigma_sq = 2.0 * sigma.powi(2);
    let q: nd::Array1<C64>
        = x.mapv(|xk| {
            let env = a * (-(xk - x0).powi(2) / two_sigma_sq).exp();
            C64::from_polar(env, k0 * xk)
        });
    Ok(q)
}

/// Like [`gaussian`], but return a unit-amplitude packet normalized over
/// the grid via the rectangle rule; see [`measure::normalize`].
pub fn gaussian_normalized<S>(
    dx: f64,
    x: &Arr1<S>,
    x0: f64,
    sigma: f64,
    k0: f64,
) -> KernelResult<nd::Array1<C64>>
where S: nd::Data<Elem = f64>
{
    let mut q = gaussian(x, x0, sigma, k0, 1.0)?;
    measure::normalize(dx, &mut q)?;
    Ok(q)
}
