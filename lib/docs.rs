//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Discretization](#discretization)
//! - [Shooting](#shooting)
//! - [Normalization](#normalization)
//!
//! # Background
//! Inside an infinite square well of width *a* the time-independent Schrödinger
//! equation reads
//! ```text
//! ∂²ψ   2 m
//! --- = --- (V - E) ψ(x),   0 < x < a
//! ∂x²    ħ²
//! ```
//! with constant *V* and boundary conditions *ψ*(0) = *ψ*(*a*) = 0 imposed by
//! the infinite walls. Its solutions are
//! ```text
//! ψₙ(x) = √(2/a) sin(n π x / a)
//!
//!        n² π² ħ²
//! Eₙ = --------- + V,   n = 1, 2, ...
//!        2 m a²
//! ```
//! which are available as [`analytic_energy`][crate::solve::analytic_energy]
//! for comparison with numerical results.
//!
//! # Discretization
//! For a fixed trial energy *E*, the equation above is integrated from the
//! left wall in steps of *δx*, carrying the wavefunction and its first
//! derivative:
//! ```text
//! ψ'[k + 1] = ψ'[k] + δx (2 m / ħ²) (V - E) ψ[k]
//! ψ[k + 1]  = ψ[k]  + δx ψ'[k + 1]
//! ```
//! The derivative is updated first and the new value is used immediately to
//! update the wavefunction. Eliminating the derivative gives the usual
//! three-point relation
//! ```text
//! ψ[k + 1] - 2 ψ[k] + ψ[k - 1] = δx² (2 m / ħ²) (V - E) ψ[k]
//! ```
//! so that, for *E* > *V*, trial wavefunctions started from *ψ*(0) = 0 are
//! exactly sampled sines `ψ[k] ∝ sin(k θ)` with
//! `2 - 2 cos θ = δx² (2 m / ħ²) (E - V)`. The discrete eigenvalues are hence
//! ```text
//!         2 ħ²       n π δx
//! Eₙ = ------ sin² ( ------ ) + V
//!      m δx²          2 a
//! ```
//! which lie slightly below the continuum values, converging to them as
//! *O*(*δx*²).
//!
//! The number of steps taken is ⌈*a* / *δx*⌉, and samples are recorded after
//! each step, so the first sample sits at *x* = *δx* and the last at (or just
//! past) the right wall.
//!
//! # Shooting
//! Trial energies are swept upward from zero in fixed increments *δE*. The
//! first energy for which |*ψ*(*a*)| falls within a tolerance is accepted as
//! the ground state. The search then resumes from the accepted energy
//! multiplied by a growth factor greater than 1, which skips the remainder of
//! the interval around the root just found. Because the sweep is monotonic,
//! accepted energies are strictly increasing.
//!
//! The tolerance is applied to the un-normalized trial wavefunction, whose
//! scale is set by the initial slope. Near the *n*-th root, the sensitivity of
//! *ψ*(*a*) to the trial energy falls off roughly as 1/*n*², so a tolerance
//! that is too tight relative to *δE* can let the sweep step over a root
//! entirely; likewise, a growth factor that is too large for the level spacing
//! can skip a level. Both are reported only as warnings, via the interior node
//! count of each accepted wavefunction.
//!
//! # Normalization
//! Accepted wavefunctions are rescaled so that the plain Riemann sum
//! ```text
//! Σₖ |ψ[k]|² δx
//! ```
//! is equal to 1. Applying the same rescaling again leaves the wavefunction
//! unchanged up to floating-point error.
