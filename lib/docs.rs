//! Theoretical background.
//!
//! # Contents
//! - [Representation](#representation)
//! - [Densities and integration](#densities-and-integration)
//! - [Tunneling estimates](#tunneling-estimates)
//! - [Finite differences](#finite-differences)
//!
//! # Representation
//! A one-dimensional quantum state is described by a complex-valued
//! wavefunction *ψ*(*x*), discretized here over a uniform grid
//! ```text
//! x[i] = x₀ + i δx, i ∊ {0, ..., N - 1}
//! ψ[i] = ψ(x[i])
//! ```
//! Each sample is stored as a `Complex64`, whose real and imaginary parts
//! occupy adjacent positions in memory; a field of *N* samples is hence
//! bit-compatible with the flat, interleaved buffer of 2 *N* doubles used
//! by visualization hosts across FFI/WASM boundaries
//! ([`utils::from_interleaved`][crate::utils::from_interleaved]).
//!
//! The prototypical initial state is the Gaussian wave packet
//! ```text
//!               (x - x₀)²
//! ψ(x) = A exp(- --------) exp(i k₀ x)
//!                 2 σ²
//! ```
//! a state localized around *x*₀ with spatial spread *σ* and mean momentum
//! *ħ* *k*₀. In Euler form the phase factor splits into cos(*k*₀ *x*) and
//! sin(*k*₀ *x*) components scaled by the (real) envelope, which is how the
//! packet constructor fills the two components of each sample.
//!
//! # Densities and integration
//! The Born rule assigns the state the position probability density
//! ```text
//! ρ(x) = |ψ(x)|² = Re(ψ)² + Im(ψ)²
//! ```
//! which is a probability density proper only under the normalization
//! condition ∫ *ρ* d*x* = 1. On the grid, all integrals in this crate are
//! approximated with the left-rectangle rule
//! ```text
//! ∫ f dx ≈ Σᵢ f[i] δx
//! ```
//! rather than the trapezoidal or any higher-order rule. The rectangle
//! rule carries an *O*(*δx*) error term in general, but for fields that
//! decay to zero at both grid edges (the usual situation for localized
//! packets on an adequately wide grid) the boundary terms vanish and its
//! accuracy is close to trapezoidal at lower cost. Normalization divides
//! every sample by the square root of the squared norm Σ |*ψ*[i]|² *δx*;
//! expectation values follow the same rule,
//! ```text
//! ⟨x⟩ ≈ Σᵢ x[i] ρ[i] δx
//! ```
//!
//! # Tunneling estimates
//! A particle of energy *E* incident on a potential barrier *V*(*x*) > *E*
//! penetrates the classically forbidden region with exponentially damped
//! amplitude. The WKB (semiclassical) approximation[^1][^2][^3] estimates
//! the transmission probability from the accumulated decay exponent over
//! that region:
//! ```text
//! κ = ∫ √(2 m (V(x) - E)) dx,  over {x : V(x) > E}
//!
//! T ≈ exp(-2 κ)
//! ```
//! in natural units with *ħ* = *m* = 1. On the grid, the integral becomes
//! a rectangle-rule sum over the forbidden samples only, and the result is
//! clamped to 1 so that a vanishing barrier reports total transmission.
//! This is an order-of-magnitude estimate: it neglects the connection
//! formulae's prefactors and any resonance structure, and is reliable only
//! for *κ* ≳ 1.
//!
//! A complementary, dynamics-based measurement divides the probability
//! mass found beyond the barrier after evolution by the total incident
//! mass. Both quantities land in [0, 1]; agreement between them is itself
//! a useful diagnostic for a host.
//!
//! # Finite differences
//! Spatial derivatives are approximated with the forward two-point and
//! centered three-point stencils
//! ```text
//! ∂ψ    ψ[i + 1] - ψ[i]
//! -- ≈  ---------------         (error O(δx))
//! ∂x          δx
//!
//! ∂²ψ   ψ[i + 1] - 2 ψ[i] + ψ[i - 1]
//! --- ≈ ---------------------------  (error O(δx²))
//! ∂x²              δx²
//! ```
//! applied to the real and imaginary components independently. Samples the
//! stencil cannot reach (the last one for the forward difference; both
//! edges for the centered stencil) are filled by copying the nearest
//! computed value. Constant extrapolation keeps every output array the
//! same length as its input — convenient for hosts that plot entire
//! fields — at the cost of first-order accuracy in the affected samples;
//! callers needing uniform accuracy should discard the boundary samples.
//!
//! [^1]: G. Wentzel, "Eine Verallgemeinerung der Quantenbedingungen für
//! die Zwecke der Wellenmechanik." Zeitschrift für Physik **38** 518–529
//! (1926).
//!
//! [^2]: H. A. Kramers, "Wellenmechanik und halbzahlige Quantisierung."
//! Zeitschrift für Physik **39** 828–840 (1926).
//!
//! [^3]: L. Brillouin, "La mécanique ondulatoire de Schrödinger: une
//! méthode générale de résolution par approximations successives."
//! Comptes Rendus de l'Académie des Sciences **183** 24–26 (1926).
