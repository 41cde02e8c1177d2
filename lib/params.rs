//! Run configuration: physical constants and numerical parameters.
//!
//! Both records default to the reference configuration, a particle of unit
//! mass in a well of unit width with *ħ* = 1 and no potential offset inside
//! the well:
//!
//! ```
//! use boxwell::params::{ NumericalParameters, PhysicalConstants };
//!
//! let consts = PhysicalConstants::default();
//! let params = NumericalParameters { count: 2, ..Default::default() };
//! assert!(consts.validate().is_ok());
//! assert!(params.validate().is_ok());
//! assert_eq!(params.dx, 0.01);
//! ```

use crate::{
    error::ConfigError,
    DEF_COUNT,
    DEF_DE,
    DEF_DX,
    DEF_GROWTH,
    DEF_MAX_TRIALS,
    DEF_TOLERANCE,
};

/// Physical constants describing the particle and the well.
///
/// Immutable for the duration of a solve.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PhysicalConstants {
    /// Reduced Planck constant.
    pub hbar: f64,
    /// Particle mass.
    pub m: f64,
    /// Well width.
    pub a: f64,
    /// Potential inside the well.
    pub V: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self { hbar: 1.0, m: 1.0, a: 1.0, V: 0.0 }
    }
}

impl PhysicalConstants {
    /// Check that all constants are physically meaningful.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_hbar(self.hbar)?;
        ConfigError::check_mass(self.m)?;
        ConfigError::check_width(self.a)?;
        ConfigError::check_potential(self.V)?;
        Ok(())
    }

    /// Coefficient *2m/ħ²* multiplying *(V - E) ψ* in the second derivative.
    pub fn kinetic_coeff(&self) -> f64 { 2.0 * (self.m / self.hbar.powi(2)) }
}

/// Initial amplitude and slope of every trial wavefunction at the left wall.
///
/// The overall scale is arbitrary since accepted wavefunctions are
/// renormalized afterward, but it does set the scale on which the boundary
/// tolerance is applied.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Shot {
    /// Amplitude at `x = 0`.
    pub psi0: f64,
    /// First derivative at `x = 0`.
    pub dpsi0: f64,
}

impl Default for Shot {
    fn default() -> Self { Self { psi0: 0.0, dpsi0: 1.0 } }
}

/// Parameters controlling discretization and the energy search.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NumericalParameters {
    /// Spatial step size.
    pub dx: f64,
    /// Energy step size between consecutive trial energies.
    pub dE: f64,
    /// Number of eigenstates to find.
    pub count: usize,
    /// Largest absolute amplitude at the right wall for which a trial energy
    /// is accepted.
    pub tolerance: f64,
    /// Factor applied to each accepted energy to seed the search for the next
    /// eigenstate.
    pub growth: f64,
    /// Maximum number of trial energies per eigenstate (default: `1000000`).
    pub max_trials: Option<usize>,
    /// Initial conditions for each trial integration.
    pub shot: Shot,
}

impl Default for NumericalParameters {
    fn default() -> Self {
        Self {
            dx: DEF_DX,
            dE: DEF_DE,
            count: DEF_COUNT,
            tolerance: DEF_TOLERANCE,
            growth: DEF_GROWTH,
            max_trials: None,
            shot: Shot::default(),
        }
    }
}

impl NumericalParameters {
    /// Check that the search is guaranteed to make progress.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_dx(self.dx)?;
        ConfigError::check_de(self.dE)?;
        ConfigError::check_count(self.count)?;
        ConfigError::check_tolerance(self.tolerance)?;
        ConfigError::check_growth(self.growth)?;
        ConfigError::check_max_trials(self.max_trials())?;
        ConfigError::check_shot(self.shot.psi0, self.shot.dpsi0)?;
        Ok(())
    }

    /// Get the trial energy bound per eigenstate, falling back on the default.
    pub fn max_trials(&self) -> usize {
        self.max_trials.unwrap_or(DEF_MAX_TRIALS)
    }
}

/// Validate a full run configuration.
///
/// In addition to the checks on each record, the number of grid points
/// `a / dx` must be finite and at most [`DEF_MAX_SAMPLES`][crate::DEF_MAX_SAMPLES].
pub fn validate(consts: &PhysicalConstants, params: &NumericalParameters)
    -> Result<(), ConfigError>
{
    consts.validate()?;
    params.validate()?;
    ConfigError::check_grid_len(consts.a, params.dx)?;
    Ok(())
}
