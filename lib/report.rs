//! Renderer-agnostic presentation of solved eigenstates.
//!
//! Nothing here feeds back into the solver; these are conveniences for
//! printing a table of energy levels and for drawing each wavefunction offset
//! vertically by its energy.

use std::fmt;
use crate::solve::Eigenstate;

/// Textual table of energy levels.
///
/// ```
/// use boxwell::report::LevelTable;
///
/// assert_eq!(LevelTable(&[]).to_string(), "Calculated energy levels:\n");
/// ```
#[derive(Copy, Clone, Debug)]
pub struct LevelTable<'a>(pub &'a [Eigenstate]);

impl fmt::Display for LevelTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Calculated energy levels:")?;
        for state in self.0.iter() {
            writeln!(f, "Level {}: E = {:.4}", state.n, state.e)?;
        }
        Ok(())
    }
}

/// A single labeled curve ready for plotting.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    /// Legend entry.
    pub label: String,
    /// Horizontal coordinates.
    pub x: Vec<f64>,
    /// Vertical coordinates.
    pub y: Vec<f64>,
}

impl Curve {
    /// Build the curve `e + scale * ψ(x)` for a single eigenstate.
    pub fn shifted(state: &Eigenstate, scale: f64) -> Self {
        Self {
            label: format!("Eigenfunction {} (E={:.2})", state.n, state.e),
            x: state.x.to_vec(),
            y: state.wf.iter().map(|qk| state.e + scale * qk).collect(),
        }
    }
}

/// Build one [shifted curve][Curve::shifted] per eigenstate.
pub fn shifted_curves(states: &[Eigenstate], scale: f64) -> Vec<Curve> {
    states.iter().map(|state| Curve::shifted(state, scale)).collect()
}

/// Axis labels and title to accompany [`shifted_curves`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlotLabels {
    /// Plot title.
    pub title: String,
    /// Horizontal axis label.
    pub x: String,
    /// Vertical axis label.
    pub y: String,
}

impl PlotLabels {
    /// Build labels for curves drawn with vertical scale `scale`.
    pub fn new(scale: f64) -> Self {
        Self {
            title: "Particle in a Box: Eigenfunctions at Their Energy Levels"
                .to_string(),
            x: "x (in units of a)".to_string(),
            y: format!("Energy + ψ (scaled by {})", scale),
        }
    }
}
