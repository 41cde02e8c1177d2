//! Functions to compute bound states of a particle in a one-dimensional
//! infinite square well via the shooting method.
//!
//! Each trial energy is integrated from the left wall with the explicit
//! first-order scheme described in [`docs`][crate::docs]; a trial is accepted
//! when the wavefunction returns to within some tolerance of zero at the right
//! wall.
//!
//! ```
//! use boxwell::{ params::*, solve };
//!
//! let consts = PhysicalConstants::default();
//! let params = NumericalParameters { count: 2, ..Default::default() };
//! let states = solve::find_eigenstates(&consts, &params).unwrap();
//! assert_eq!(states.len(), 2);
//! assert!(states[0].e < states[1].e);
//! assert!((states[0].e - solve::analytic_energy(1, &consts)).abs() < 0.1);
//! ```

use std::{ cmp, f64::consts::PI };
use log::{ debug, warn };
use ndarray as nd;
use crate::{
    Arr1,
    error::{ NormError, SolveError },
    params::{ self, NumericalParameters, PhysicalConstants, Shot },
    utils::{ wf_norm, wf_renormalize },
};

pub type SolveResult<T> = Result<T, SolveError>;

/// A single bound state.
///
/// This struct is usually only returned by a solver function; you probably
/// won't ever instantiate it yourself.
#[derive(Clone, Debug, PartialEq)]
pub struct Eigenstate {
    /// Index, starting at 1 for the ground state.
    pub n: usize,
    /// Energy
    pub e: f64,
    /// Coordinate grid spacing
    pub dx: f64,
    /// Coordinate array, shared by all states from the same solve
    pub x: nd::Array1<f64>,
    /// Wavefunction
    pub wf: nd::Array1<f64>,
    /// Un-normalized amplitude at the right wall for the accepted trial
    pub boundary: f64,
    /// Number of trial energies attempted before acceptance
    pub trials: usize,
}

impl Eigenstate {
    /// Compare two `Eigenstate`s by their energy.
    pub fn cmp_energy(&self, other: &Self) -> Option<cmp::Ordering> {
        self.e.partial_cmp(&other.e)
    }

    /// Number of samples in the wavefunction.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.wf.len() }

    /// Iterate over `(position, amplitude)` pairs.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.wf.iter().copied())
    }

    /// Discretized squared norm `Σ ψ² dx`.
    pub fn norm(&self) -> f64 { wf_norm(&self.wf, self.dx) }

    /// Rescale the wavefunction in place so that its discretized probability
    /// integral is 1.
    ///
    /// Idempotent up to floating-point error.
    pub fn normalize(&mut self) -> Result<(), NormError> {
        wf_renormalize(&mut self.wf, self.dx)
    }

    /// Like [`Self::normalize`], but create a normalized copy of `self`.
    pub fn normalized(&self) -> Result<Self, NormError> {
        let mut new = self.clone();
        new.normalize()?;
        Ok(new)
    }
}

/// Number of integration steps needed to cross a well of width `a` in steps of
/// `dx`, i.e. `⌈a / dx⌉`.
///
/// Ratios within a relative `1e-9` of an integer are treated as exact so that,
/// e.g., `a = 1`, `dx = 0.01` gives 100 steps rather than 101. This departs
/// from a strict ceiling for ratios that really are that close to an integer:
/// `a / dx = 100.0000000001` also gives 100 steps.
///
/// *Panics if `dx` is not positive*.
pub fn grid_len(a: f64, dx: f64) -> usize {
    assert!(dx > 0.0, "grid_len: dx must be positive");
    let r = a / dx;
    let rn = r.round();
    if (r - rn).abs() <= 1e-9 * rn.max(1.0) {
        rn.max(0.0) as usize
    } else {
        r.ceil().max(0.0) as usize
    }
}

/// Generate the coordinate array at which a trial wavefunction is sampled.
///
/// Samples are taken after each step, so the first position is `dx` and the
/// last is `grid_len(a, dx) * dx`.
///
/// *Panics if `dx` is not positive*.
pub fn grid(a: f64, dx: f64) -> nd::Array1<f64> {
    let n = grid_len(a, dx);
    (1..=n).map(|k| k as f64 * dx).collect()
}

/// Perform a single explicit integration across the well from the default
/// initial conditions for fixed trial energy `E`.
///
/// ```
/// use boxwell::{ params::PhysicalConstants, solve::integrate };
///
/// let consts = PhysicalConstants::default();
/// let q = integrate(1.0, &consts, 0.01);
/// assert_eq!(q.len(), 100);
/// ```
///
/// *Panics if `dx` is not positive*.
pub fn integrate(E: f64, consts: &PhysicalConstants, dx: f64)
    -> nd::Array1<f64>
{
    integrate_from(E, consts, dx, Shot::default())
}

/// Perform a single explicit integration across the well for fixed trial
/// energy `E`, starting from amplitude and slope given by `shot`.
///
/// The recurrence is applied exactly `grid_len(consts.a, dx)` times:
/// ```text
/// ψ'' = 2m/ħ² (V - E) ψ
/// ψ'  → ψ' + ψ'' dx
/// ψ   → ψ  + ψ'  dx
/// ```
/// and the amplitude after each step is recorded. The result is not
/// normalized.
///
/// *Panics if `dx` is not positive*.
pub fn integrate_from(E: f64, consts: &PhysicalConstants, dx: f64, shot: Shot)
    -> nd::Array1<f64>
{
    let n = grid_len(consts.a, dx);
    let k = consts.kinetic_coeff() * (consts.V - E);
    let mut q: nd::Array1<f64> = nd::Array1::zeros(n);
    let mut psi = shot.psi0;
    let mut dpsi = shot.dpsi0;
    for qk in q.iter_mut() {
        dpsi += k * psi * dx;
        psi += dpsi * dx;
        *qk = psi;
    }
    q
}

/// Return the amplitude at the right wall for a single trial energy without
/// keeping the full wavefunction.
///
/// *Panics if `dx` is not positive*.
pub fn shoot(E: f64, consts: &PhysicalConstants, dx: f64, shot: Shot) -> f64 {
    let n = grid_len(consts.a, dx);
    let k = consts.kinetic_coeff() * (consts.V - E);
    let (mut psi, mut dpsi) = (shot.psi0, shot.dpsi0);
    for _ in 0..n {
        dpsi += k * psi * dx;
        psi += dpsi * dx;
    }
    psi
}

/// Return the number of interior nodes in a wavefunction sampled from the left
/// wall, ignoring the final sample (which sits at the right wall).
pub fn node_count<S>(q: &Arr1<S>) -> usize
where S: nd::Data<Elem = f64>
{
    let n = q.len().saturating_sub(1);
    q.iter().take(n).zip(q.iter().skip(1).take(n.saturating_sub(1)))
        .filter(|(qkm1, qk)| **qkm1 * **qk < 0.0)
        .count()
}

/// Exact energy of the `n`-th (starting at 1) bound state of the infinite
/// well, `n² π² ħ² / 2 m a² + V`.
pub fn analytic_energy(n: usize, consts: &PhysicalConstants) -> f64 {
    (n as f64 * PI * consts.hbar / consts.a).powi(2) / 2.0 / consts.m
        + consts.V
}

// step the trial energy upward from `E` until the right-wall amplitude falls
// within tolerance; returns the accepted energy, its boundary amplitude, and
// the number of trials taken
fn search(
    n: usize,
    mut E: f64,
    consts: &PhysicalConstants,
    params: &NumericalParameters,
) -> SolveResult<(f64, f64, usize)>
{
    let max_trials = params.max_trials();
    for trial in 1..=max_trials {
        E += params.dE;
        let boundary = shoot(E, consts, params.dx, params.shot);
        if boundary.abs() <= params.tolerance {
            return Ok((E, boundary, trial));
        }
    }
    Err(SolveError::NoConvergence { n, trials: max_trials, e: E })
}

/// Find the lowest `params.count` bound states by stepping trial energies
/// upward from zero.
///
/// After each acceptance, the search for the next state resumes from the
/// accepted energy multiplied by `params.growth`. Eigenstates are returned in
/// order of strictly increasing energy with normalized wavefunctions sampled
/// on a common grid.
///
/// The configuration is validated before any integration is performed. This
/// function returns [`SolveError::NoConvergence`] if any single search exceeds
/// `params.max_trials` trial energies; no partial results are returned.
///
/// Closely spaced levels may be skipped if `params.growth` is too large
/// relative to the level spacing.
pub fn find_eigenstates(
    consts: &PhysicalConstants,
    params: &NumericalParameters,
) -> SolveResult<Vec<Eigenstate>>
{
    params::validate(consts, params)?;
    let x = grid(consts.a, params.dx);
    let mut states: Vec<Eigenstate> = Vec::with_capacity(params.count);
    let mut E: f64 = 0.0;
    for n in 1..=params.count {
        let (e, boundary, trials) = search(n, E, consts, params)?;
        debug!(
            "solve::find_eigenstates: accepted state {n} at E = {e:.6} \
            after {trials} trials (ψ(a) = {boundary:.3e})"
        );
        let wf = integrate_from(e, consts, params.dx, params.shot);
        let nodes = node_count(&wf);
        if nodes + 1 != n {
            warn!(
                "solve::find_eigenstates: WARNING: state {n} has {nodes} \
                interior nodes; a level may have been skipped"
            );
        }
        let mut state = Eigenstate {
            n,
            e,
            dx: params.dx,
            x: x.clone(),
            wf,
            boundary,
            trials,
        };
        state.normalize()?;
        states.push(state);
        E = e * params.growth;
    }
    Ok(states)
}

/// Simple record to keep track of a validated configuration and its
/// coordinate grid.
///
/// Eigenstates produced by [`Well::solve`] are guaranteed to be sampled on the
/// grid returned by [`Well::get_x`].
#[derive(Clone, Debug)]
pub struct Well {
    consts: PhysicalConstants,
    params: NumericalParameters,
    // coordinate array
    x: nd::Array1<f64>,
}

impl Well {
    /// Create a new `Well`, validating the configuration.
    pub fn new(consts: PhysicalConstants, params: NumericalParameters)
        -> SolveResult<Self>
    {
        params::validate(&consts, &params)?;
        let x = grid(consts.a, params.dx);
        Ok(Self { consts, params, x })
    }

    /// Get a reference to the physical constants.
    pub fn get_consts(&self) -> &PhysicalConstants { &self.consts }

    /// Get a reference to the numerical parameters.
    pub fn get_params(&self) -> &NumericalParameters { &self.params }

    /// Get a reference to the coordinate array.
    pub fn get_x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get the coordinate array grid spacing.
    pub fn get_dx(&self) -> f64 { self.params.dx }

    /// Get the length of the coordinate array.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.x.len() }

    /// Thin interface to [`integrate_from`] using this well's configuration.
    pub fn integrate(&self, E: f64) -> nd::Array1<f64> {
        integrate_from(E, &self.consts, self.params.dx, self.params.shot)
    }

    /// Thin interface to [`find_eigenstates`].
    pub fn solve(&self) -> SolveResult<Vec<Eigenstate>> {
        find_eigenstates(&self.consts, &self.params)
    }

    /// Exact energy of the `n`-th state for this well's constants.
    pub fn analytic_energy(&self, n: usize) -> f64 {
        analytic_energy(n, &self.consts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_len_absorbs_representation_error() {
        assert_eq!(grid_len(1.0, 0.01), 100);
        assert_eq!(grid_len(1.0, 0.1), 10);
        assert_eq!(grid_len(1.0, 0.3), 4);
        assert_eq!(grid_len(2.5, 0.25), 10);
    }

    #[test]
    fn grid_len_snaps_near_integer_ratios() {
        assert_eq!(grid_len(100.0000000001, 1.0), 100);
        assert_eq!(grid_len(100.001, 1.0), 101);
    }

    #[test]
    #[should_panic]
    fn integrate_zero_dx_panics() {
        integrate_from(1.0, &PhysicalConstants::default(), 0.0, Shot::default());
    }

    #[test]
    #[should_panic]
    fn shoot_nan_dx_panics() {
        shoot(1.0, &PhysicalConstants::default(), f64::NAN, Shot::default());
    }

    #[test]
    fn grid_ends_at_wall() {
        let x = grid(1.0, 0.01);
        assert!((x[0] - 0.01).abs() < 1e-15);
        assert!((x[x.len() - 1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn free_particle_first_step() {
        // with E = V the second derivative vanishes and ψ grows linearly
        let consts = PhysicalConstants::default();
        let q = integrate(0.0, &consts, 0.1);
        q.iter().enumerate()
            .for_each(|(k, qk)| assert!((qk - 0.1 * (k + 1) as f64).abs() < 1e-12));
    }

    #[test]
    fn shoot_matches_last_sample() {
        let consts = PhysicalConstants::default();
        let shot = Shot { psi0: 1.0, dpsi0: 1.0 };
        let q = integrate_from(7.3, &consts, 0.01, shot);
        assert_eq!(shoot(7.3, &consts, 0.01, shot), q[q.len() - 1]);
    }

    #[test]
    fn analytic_ground_state() {
        let consts = PhysicalConstants::default();
        assert!((analytic_energy(1, &consts) - PI * PI / 2.0).abs() < 1e-12);
    }
}
