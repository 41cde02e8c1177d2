#![allow(dead_code, non_snake_case)]

//! Provides functions and higher-level constructs for automated solution of the
//! one-dimensional, time-independent Schrödinger equation for a particle in an
//! infinite square well via the shooting method.
//!
//! Trial energies are swept upward in fixed steps; for each, the equation is
//! integrated across the well with an explicit first-order scheme, and the
//! energy is accepted when the wavefunction vanishes (to within a tolerance)
//! at the far wall. Accepted wavefunctions are normalized and can be handed
//! off to the [`report`] helpers for display.
//!
//! ```
//! use boxwell::{ params::*, report::LevelTable, solve::Well };
//!
//! let well = Well::new(
//!     PhysicalConstants::default(),
//!     NumericalParameters { count: 1, ..Default::default() },
//! ).unwrap();
//! let states = well.solve().unwrap();
//! assert!(LevelTable(&states).to_string().starts_with("Calculated"));
//! ```
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod params;
pub mod report;
pub mod solve;
pub mod utils;

pub mod docs;

pub(crate) const DEF_DX: f64 = 0.01;
pub(crate) const DEF_DE: f64 = 0.01;
pub(crate) const DEF_COUNT: usize = 4;
pub(crate) const DEF_TOLERANCE: f64 = 1e-3;
pub(crate) const DEF_GROWTH: f64 = 1.1;
pub(crate) const DEF_MAX_TRIALS: usize = 1_000_000;

/// Largest number of grid points (`a / dx`) accepted by validation.
pub const DEF_MAX_SAMPLES: usize = 10_000_000;

/// Default vertical scale applied to wavefunctions when they are drawn at
/// their energy levels.
pub const DEF_SCALE_FACTOR: f64 = 5.0;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
