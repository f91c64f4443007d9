#![allow(dead_code, non_snake_case)]

//! Numeric kernels for one-dimensional quantum-mechanical wavefunctions
//! sampled over uniform coordinate grids.
//!
//! Every routine is a stateless function over flat arrays of samples:
//! complex-valued wavefunctions are `ndarray::Array1<Complex64>` (whose
//! memory layout is the conventional interleaved real/imaginary sequence;
//! see [`utils::from_interleaved`]), while coordinates, potentials, and
//! probability densities are `ndarray::Array1<f64>` with one value per grid
//! point. Each function either returns a newly owned array or mutates a
//! caller-owned one in place; no state is shared between calls, and every
//! function that integrates over the grid takes the spacing `dx` explicitly.
//!
//! Provides implementations for the following routines:
//! - Gaussian wave packet construction ([`packet`])
//! - Probability densities, norms, and position expectation values
//!   ([`measure`])
//! - Forward- and centered-difference derivatives ([`fdiff`])
//! - WKB tunneling transmission estimates and barrier analysis ([`tunnel`])
//! - Textbook potential profiles ([`potential`])
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod grid;
pub mod potential;
pub mod packet;
pub mod measure;
pub mod fdiff;
pub mod tunnel;
pub mod utils;

pub mod docs;

pub(crate) const RATIO_EPSILON: f64 = 1e-10;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
