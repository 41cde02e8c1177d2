//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use thiserror::Error;

/// Returned when a run configuration is rejected before any integration takes
/// place.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Returned when a non-positive reduced Planck constant is encountered.
    #[error("hbar must be greater than 0; got {0}")]
    BadHbar(f64),

    /// Returned when a non-positive particle mass is encountered.
    #[error("mass must be greater than 0; got {0}")]
    BadMass(f64),

    /// Returned when a non-positive well width is encountered.
    #[error("well width must be greater than 0; got {0}")]
    BadWidth(f64),

    /// Returned when a negative or non-finite potential is encountered.
    #[error("potential must be finite and non-negative; got {0}")]
    BadPotential(f64),

    /// Returned when a non-positive spatial step is encountered.
    #[error("spatial step must be greater than 0; got {0}")]
    BadDx(f64),

    /// Returned when a non-positive or non-finite energy step is encountered.
    #[error("energy step must be finite and greater than 0; got {0}")]
    BadDE(f64),

    /// Returned when a zero eigenstate count is encountered.
    #[error("eigenstate count must be greater than 0; got {0}")]
    BadCount(usize),

    /// Returned when a non-positive boundary tolerance is encountered.
    #[error("boundary tolerance must be greater than 0; got {0}")]
    BadTolerance(f64),

    /// Returned when an energy growth factor not greater than 1 is
    /// encountered.
    #[error("energy growth factor must be greater than 1; got {0}")]
    BadGrowth(f64),

    /// Returned when a zero `max_trials` value is encountered.
    #[error("max_trials must be greater than 0; got {0}")]
    BadMaxTrials(usize),

    /// Returned when the initial amplitude and slope are both zero (or either
    /// is non-finite).
    #[error("initial conditions must be finite and not both zero; got ({0}, {1})")]
    BadShot(f64, f64),

    /// Returned when the number of grid points `a / dx` is non-finite or
    /// exceeds the sample ceiling.
    #[error("a / dx must be finite and within the sample ceiling; got {0}")]
    BadGridLen(f64),
}

impl ConfigError {
    // all of these are written as `x > 0.0` so that NaN is rejected too

    pub(crate) fn check_hbar(hbar: f64) -> Result<(), Self> {
        (hbar > 0.0 && hbar.is_finite()).then_some(()).ok_or(Self::BadHbar(hbar))
    }

    pub(crate) fn check_mass(mass: f64) -> Result<(), Self> {
        (mass > 0.0 && mass.is_finite()).then_some(()).ok_or(Self::BadMass(mass))
    }

    pub(crate) fn check_width(a: f64) -> Result<(), Self> {
        (a > 0.0 && a.is_finite()).then_some(()).ok_or(Self::BadWidth(a))
    }

    pub(crate) fn check_potential(V: f64) -> Result<(), Self> {
        (V >= 0.0 && V.is_finite()).then_some(()).ok_or(Self::BadPotential(V))
    }

    pub(crate) fn check_dx(dx: f64) -> Result<(), Self> {
        (dx > 0.0 && dx.is_finite()).then_some(()).ok_or(Self::BadDx(dx))
    }

    pub(crate) fn check_de(dE: f64) -> Result<(), Self> {
        (dE > 0.0 && dE.is_finite()).then_some(()).ok_or(Self::BadDE(dE))
    }

    pub(crate) fn check_count(count: usize) -> Result<(), Self> {
        (count != 0).then_some(()).ok_or(Self::BadCount(count))
    }

    pub(crate) fn check_tolerance(tol: f64) -> Result<(), Self> {
        (tol > 0.0).then_some(()).ok_or(Self::BadTolerance(tol))
    }

    pub(crate) fn check_growth(growth: f64) -> Result<(), Self> {
        (growth > 1.0 && growth.is_finite())
            .then_some(()).ok_or(Self::BadGrowth(growth))
    }

    pub(crate) fn check_max_trials(max_trials: usize) -> Result<(), Self> {
        (max_trials != 0).then_some(()).ok_or(Self::BadMaxTrials(max_trials))
    }

    pub(crate) fn check_shot(psi0: f64, dpsi0: f64) -> Result<(), Self> {
        (psi0.is_finite() && dpsi0.is_finite() && (psi0 != 0.0 || dpsi0 != 0.0))
            .then_some(()).ok_or(Self::BadShot(psi0, dpsi0))
    }

    pub(crate) fn check_grid_len(a: f64, dx: f64) -> Result<(), Self> {
        let r = a / dx;
        (r.is_finite() && r <= crate::DEF_MAX_SAMPLES as f64)
            .then_some(()).ok_or(Self::BadGridLen(r))
    }
}

/// Returned when a wavefunction cannot be normalized because its discretized
/// norm is not a positive, finite number.
#[derive(Debug, Error)]
#[error("cannot normalize a wavefunction with squared norm {0}")]
pub struct NormError(pub f64);

impl NormError {
    pub(crate) fn check(norm2: f64) -> Result<f64, Self> {
        (norm2 > 0.0 && norm2.is_finite()).then_some(norm2).ok_or(Self(norm2))
    }
}

/// Returned from eigenstate solver functions.
#[derive(Debug, Error)]
pub enum SolveError {
    /// [`ConfigError`]
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Returned when the search for a single eigenstate exhausts its allowed
    /// number of trial energies without meeting the boundary tolerance.
    #[error(
        "solve::find_eigenstates: no convergence for eigenstate {n} after \
        {trials} trial energies (last trial energy {e})"
    )]
    NoConvergence {
        /// Eigenstate index (starting at 1).
        n: usize,
        /// Number of trial energies attempted.
        trials: usize,
        /// Last trial energy attempted.
        e: f64,
    },

    /// [`NormError`]
    #[error("normalization error: {0}")]
    Norm(#[from] NormError),
}
