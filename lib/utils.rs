//! Miscellaneous tools.

use std::ops::Mul;
use ndarray::{ self as nd, Ix1 };
use num_complex::Complex64 as C64;
use num_traits::Zero;
use crate::{
    Arr1,
    error::{ InterleaveError, KernelResult },
};

/// Integrate using the left-rectangle rule, `Σ y[i] dx`.
pub fn riemann<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Zero + Mul<Output = A> + Copy,
{
    y.iter().fold(A::zero(), |acc, yk| acc + *yk) * dx
}

/// Reassemble complex samples from an interleaved buffer holding the real
/// part of sample `i` at index `2i` and the imaginary part at `2i + 1`.
///
/// This is the layout a typical host passes across an FFI or WASM
/// boundary; an odd-length buffer cannot hold whole samples and is
/// rejected.
pub fn from_interleaved(buf: &[f64]) -> KernelResult<nd::Array1<C64>> {
    InterleaveError::check(buf)?;
    let q: nd::Array1<C64>
        = buf.chunks_exact(2)
        .map(|zk| C64::new(zk[0], zk[1]))
        .collect();
    Ok(q)
}

/// Flatten complex samples into an owned interleaved buffer; inverse of
/// [`from_interleaved`].
pub fn to_interleaved<S>(q: &Arr1<S>) -> Vec<f64>
where S: nd::Data<Elem = C64>
{
    let mut buf: Vec<f64> = Vec::with_capacity(2 * q.len());
    q.iter().for_each(|qk| { buf.push(qk.re); buf.push(qk.im); });
    buf
}
