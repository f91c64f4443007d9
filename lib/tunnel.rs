//! Barrier transmission estimates.

use ndarray as nd;
use crate::{
    Arr1,
    RATIO_EPSILON,
    error::{ KernelResult, LengthError, NonFiniteError, SizeError },
    utils::riemann,
};

/// Estimate the WKB transmission coefficient for tunneling through the
/// barrier formed by the classically forbidden samples of `V`.
///
/// Accumulates `κ = Σ √(2 (V[i] - E)) dx` over the samples with
/// `V[i] > E` and returns `min(exp(-2κ), 1)`. This is a rectangle-rule
/// estimate of the semiclassical tunneling integral, not an exact
/// transmission calculation; see [`docs`][crate::docs]. Requires at least
/// 2 points.
pub fn transmission<S>(dx: f64, V: &Arr1<S>, E: f64) -> KernelResult<f64>
where S: nd::Data<Elem = f64>
{
    SizeError::check(2, V.len())?;
    NonFiniteError::check("dx", dx)?;
    NonFiniteError::check("E", E)?;
    let kappa: f64
        = V.iter()
        .filter(|Vk| **Vk > E)
        .map(|Vk| (2.0 * (Vk - E)).sqrt())
        .sum::<f64>() * dx;
    Ok((-2.0 * kappa).exp().min(1.0))
}

/// WKB reflection estimate, `1 - T`; see [`transmission`].
pub fn reflection<S>(dx: f64, V: &Arr1<S>, E: f64) -> KernelResult<f64>
where S: nd::Data<Elem = f64>
{
    transmission(dx, V, E).map(|T| 1.0 - T)
}

/// Locate the classically forbidden region for energy `E`.
///
/// Returns the coordinates of the first and last samples with `V > E`, or
/// `None` when no sample is forbidden. Intervening classically allowed
/// samples are not excluded; a double barrier reports the span of both.
pub fn forbidden_region<S, T>(x: &Arr1<S>, V: &Arr1<T>, E: f64)
    -> KernelResult<Option<(f64, f64)>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    LengthError::check(x, V)?;
    let mut bounds: Option<(f64, f64)> = None;
    for (xk, Vk) in x.iter().zip(V) {
        if *Vk > E {
            bounds = match bounds {
                None => Some((*xk, *xk)),
                Some((left, _)) => Some((left, *xk)),
            };
        }
    }
    Ok(bounds)
}

/// Measure a transmission coefficient from wave packet densities: the
/// probability mass of `prob_final` at indices at or beyond `split` (the
/// right edge of the barrier) over the total mass of `prob_incident`,
/// clamped to [0, 1].
///
/// A `split` beyond the end of the array counts no transmitted mass, and
/// the denominator is guarded against an all-zero incident density.
pub fn transmission_split<S, T>(
    dx: f64,
    prob_final: &Arr1<S>,
    prob_incident: &Arr1<T>,
    split: usize,
) -> KernelResult<f64>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    SizeError::check(1, prob_final.len())?;
    SizeError::check(1, prob_incident.len())?;
    let m = split.min(prob_final.len());
    let trans = riemann(&prob_final.slice(nd::s![m..]), dx);
    let inc = riemann(prob_incident, dx);
    Ok((trans / (inc + RATIO_EPSILON)).clamp(0.0, 1.0))
}
