//! Finite-difference derivative kernels.
//!
//! Both kernels act on the real and imaginary components independently and
//! fill the samples their stencils cannot reach by copying the nearest
//! computed value (constant extrapolation), keeping output arrays the same
//! length as their inputs.

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    error::{ KernelResult, SizeError },
};

/// Compute the forward-difference first derivative
/// `(q[i+1] - q[i]) / dx`.
///
/// The last sample copies the derivative value of its left neighbor.
/// Requires at least 2 points.
pub fn derivative<S>(dx: f64, q: &Arr1<S>) -> KernelResult<nd::Array1<C64>>
where S: nd::Data<Elem = C64>
{
    let n = q.len();
    SizeError::check(2, n)?;
    let mut dq: nd::Array1<C64> = nd::Array1::zeros(n);
    let iter = dq.iter_mut().zip(q.iter().zip(q.iter().skip(1)));
    for (dqk, (qk, qkp1)) in iter {
        *dqk = (*qkp1 - *qk) / dx;
    }
    dq[n - 1] = dq[n - 2];
    Ok(dq)
}

/// Compute the centered three-point second derivative
/// `(q[i+1] - 2 q[i] + q[i-1]) / dx²` over the interior.
///
/// Both boundary samples copy the nearest interior value. Requires at
/// least 3 points.
pub fn second_derivative<S>(dx: f64, q: &Arr1<S>)
    -> KernelResult<nd::Array1<C64>>
where S: nd::Data<Elem = C64>
{
    let n = q.len();
    SizeError::check(3, n)?;
    let dx_sq = dx.powi(2);
    let mut ddq: nd::Array1<C64> = nd::Array1::zeros(n);
    let iter
        = ddq.iter_mut().skip(1)
        .zip(q.iter().zip(q.iter().skip(1)).zip(q.iter().skip(2)));
    for (ddqk, ((qkm1, qk), qkp1)) in iter {
        *ddqk = (*qkp1 - 2.0 * *qk + *qkm1) / dx_sq;
    }
    ddq[0] = ddq[1];
    ddq[n - 1] = ddq[n - 2];
    Ok(ddq)
}
