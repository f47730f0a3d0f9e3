#![allow(non_snake_case)]

//! Provides closed-form evaluation of the stationary states of a particle in a
//! two-dimensional rectangular box (infinite square well), along with the
//! sampling grids, quadrature, and energy-level bookkeeping needed to plot and
//! check them.
//!
//! Provides:
//! - [`domain`]: validated box dimensions and mode numbers
//! - [`grid`]: evenly spaced sampling grids and their cross products
//! - [`wavefunction`]: scalar, broadcast, and whole-grid evaluation
//! - [`energy`]: eigenenergies and degenerate levels
//! - [`integrate`]: trapezoidal quadrature in one and two dimensions
//! - [`units`]: conversion to and from physical units
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod domain;
pub mod grid;
pub mod integrate;
pub mod wavefunction;
pub mod energy;
pub mod units;

pub mod docs;

/// Default relative tolerance for comparing energies.
pub const DEF_EPSILON: f64 = 1e-9;

pub use domain::{ BoxDomain, Mode };
pub use error::{ WfError, WfResult };
pub use grid::Grid;
pub use wavefunction::Field;
