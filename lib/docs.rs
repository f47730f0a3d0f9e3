//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Units](#units)
//! - [Degeneracy](#degeneracy)
//! - [Sampling](#sampling)
//!
//! # Background
//! A particle of mass *m* confined to the rectangle [0, *L*<sub>x</sub>] ×
//! [0, *L*<sub>y</sub>] by infinitely high walls obeys the time-independent
//! Schrödinger equation
//! ```text
//!    ħ²  ( ∂²    ∂² )
//! - --- ( --- + --- ) ψ(x, y) = E ψ(x, y)
//!   2 m  ( ∂x²   ∂y² )
//! ```
//! inside the box, with ψ = 0 on the walls. The equation separates into two
//! one-dimensional infinite wells, ψ(*x*, *y*) = *X*(*x*) *Y*(*y*), each of
//! which has standing-wave solutions vanishing at both ends. The normalized
//! product of these is
//! ```text
//!              2            nx π x         ny π y
//! ψ(x, y) = -------- sin( -------- ) sin( -------- )
//!           √(Lx Ly)         Lx              Ly
//! ```
//! for positive integers *n*<sub>x</sub>, *n*<sub>y</sub>. Taking either mode
//! number to be 0 gives ψ = 0 everywhere, which cannot be normalized and is not
//! a state; [`Mode`][crate::domain::Mode] rejects it. Negative mode numbers
//! only flip the overall sign and are not distinct states either.
//!
//! The prefactor fixes
//! ```text
//! ∫∫ |ψ(x, y)|² dx dy = 1
//! ```
//! over the box, and distinct mode pairs are orthogonal. Both are checked
//! numerically by [`Field::norm`][crate::wavefunction::Field::norm] and
//! [`Field::dot`][crate::wavefunction::Field::dot].
//!
//! # Units
//! As in other Schrödinger solvers, we work in natural units. Choosing a length
//! scale *a* and measuring all lengths in multiples of it, the kinetic
//! coefficient *ħ*²/2 *m* *a*² ≡ *ε* has units of energy and is taken as the
//! unit of energy. The energy of a box eigenstate is then
//! ```text
//!        ( nx²   ny² )
//! E = π² ( --- + --- )
//!        ( Lx²   Ly² )
//! ```
//! with *L*<sub>x</sub>, *L*<sub>y</sub> dimensionless. The wavefunction
//! itself has dimensions of inverse length and transforms as ψ → ψ / *a* when
//! going back to physical units. [`Units`][crate::units::Units] handles the
//! conversion of energies and lengths.
//!
//! # Degeneracy
//! Two distinct mode pairs are *degenerate* if they have the same energy. In a
//! square box every pair with *n*<sub>x</sub> ≠ *n*<sub>y</sub> is degenerate
//! with its transpose,
//! ```text
//! E(nx, ny) = E(ny, nx),  ψ(x, y; nx, ny) = ψ(y, x; ny, nx)
//! ```
//! even though the two fields are different functions. Square boxes also show
//! *accidental* degeneracies from integers with more than one representation
//! as a sum of two squares, e.g. 1² + 7² = 5² + 5² = 50. In a rectangle the
//! transpose degeneracy is lifted, but accidental ones can reappear whenever
//! (*L*<sub>x</sub> / *L*<sub>y</sub>)² is rational. See
//! [`energy::levels`][crate::energy::levels].
//!
//! # Sampling
//! Fields are sampled on a grid of *N* evenly spaced points per axis including
//! both walls, [`Grid`][crate::grid::Grid]. Because ψ vanishes at the walls,
//! the trapezoidal rule reduces to a plain Riemann sum, and the discrete
//! orthogonality of sines makes the sampled norm exact (up to rounding) for any
//! mode with *n* < *N* - 1. Plots, on the other hand, need a few points per
//! half-wavelength to look smooth; a warning is logged when *N* < 4 *n* + 1.
