//! Evaluation of the stationary states of a particle in a two-dimensional
//! rectangular box.
//!
//! For a box `[0, lx] × [0, ly]` and mode numbers `(nx, ny)`, the normalized
//! eigenfunction is
//! ```text
//!              2
//! ψ(x, y) = -------- sin(nx π x / lx) sin(ny π y / ly)
//!           √(lx ly)
//! ```
//! See [`docs`][crate::docs] for background.
//!
//! ```
//! use boxwf::{ domain::{ BoxDomain, Mode }, grid::Grid, wavefunction::Field };
//!
//! let domain = BoxDomain::square(1.0).unwrap();
//! let grid = Grid::new(domain, 101).unwrap();
//! let field = Field::compute(&grid, Mode::new(2, 1).unwrap());
//! assert!((field.norm() - 1.0).abs() < 1e-9);
//! assert!((field.values()[[50, 25]] - 2.0).abs() < 1e-12);
//! ```

use std::f64::consts::PI;
use ndarray as nd;
use tracing::{ debug, warn };
use crate::{
    domain::{ BoxDomain, Mode },
    error::{ ShapeMismatch, WfResult },
    grid::Grid,
    integrate::trapz2,
};

/// Evaluate the wavefunction at a single point.
///
/// Points outside the box are not rejected; the formula is simply continued.
pub fn amplitude(domain: &BoxDomain, mode: Mode, x: f64, y: f64) -> f64 {
    let (lx, ly) = (domain.lx(), domain.ly());
    2.0 / domain.area().sqrt()
        * (mode.nx() as f64 * PI * x / lx).sin()
        * (mode.ny() as f64 * PI * y / ly).sin()
}

/// Evaluate the wavefunction at a single point from raw parameters.
///
/// Fails with [`WfError::InvalidDomain`][crate::error::WfError::InvalidDomain]
/// if `lx` or `ly` is not strictly positive and with
/// [`WfError::InvalidModeNumber`][crate::error::WfError::InvalidModeNumber] if
/// `nx` or `ny` is zero.
///
/// ```
/// use boxwf::wavefunction::evaluate;
///
/// let psi = evaluate(0.5, 0.5, 1.0, 1.0, 1, 1).unwrap();
/// assert!((psi - 2.0).abs() < 1e-12);
/// assert!(evaluate(0.5, 0.5, -1.0, 1.0, 1, 1).is_err());
/// assert!(evaluate(0.5, 0.5, 1.0, 1.0, 0, 1).is_err());
/// ```
pub fn evaluate(x: f64, y: f64, lx: f64, ly: f64, nx: u32, ny: u32)
    -> WfResult<f64>
{
    let domain = BoxDomain::new(lx, ly)?;
    let mode = Mode::new(nx, ny)?;
    Ok(amplitude(&domain, mode, x, y))
}

/// Evaluate the wavefunction elementwise over arrays of coordinates.
///
/// `x` and `y` are broadcast against each other: axes are aligned from the
/// trailing end, the lower-rank input gains leading axes of length 1, and along
/// every axis the lengths must agree or one of them must be 1. Fails with
/// [`WfError::ShapeMismatch`][crate::error::WfError::ShapeMismatch] otherwise,
/// before anything is computed.
///
/// ```
/// use ndarray as nd;
/// use boxwf::{ domain::{ BoxDomain, Mode }, wavefunction::evaluate_array };
///
/// let domain = BoxDomain::square(1.0).unwrap();
/// let x = nd::array![[0.25, 0.5, 0.75]];
/// let y = nd::array![[0.5], [1.0]];
/// let psi = evaluate_array(&x, &y, &domain, Mode::ground()).unwrap();
/// assert_eq!(psi.dim(), (2, 3));
/// assert!((psi[[0, 1]] - 2.0).abs() < 1e-12);
/// assert!(psi.row(1).iter().all(|p| p.abs() < 1e-12));
///
/// // a 1D row of x values against a column of y values
/// let x = nd::array![0.25, 0.5, 0.75];
/// let psi = evaluate_array(&x, &y, &domain, Mode::ground()).unwrap();
/// assert_eq!(psi.dim(), (2, 3));
/// ```
pub fn evaluate_array<S, T, D, E>(
    x: &nd::ArrayBase<S, D>,
    y: &nd::ArrayBase<T, E>,
    domain: &BoxDomain,
    mode: Mode,
) -> WfResult<nd::Array<f64, <D as nd::DimMax<E>>::Output>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    D: nd::Dimension + nd::DimMax<E>,
    E: nd::Dimension,
{
    let dim = ShapeMismatch::co_broadcast(x, y)?;
    let mismatch = || ShapeMismatch(x.shape().to_vec(), y.shape().to_vec());
    let xb = x.broadcast(dim.clone()).ok_or_else(mismatch)?;
    let yb = y.broadcast(dim).ok_or_else(mismatch)?;
    let psi: nd::Array<f64, <D as nd::DimMax<E>>::Output>
        = nd::Zip::from(&xb).and(&yb)
        .map_collect(|&xk, &yk| amplitude(domain, mode, xk, yk));
    Ok(psi)
}

// smallest number of samples per axis that puts at least four points in every
// half-wavelength of a mode with `n` antinodes
fn min_resolved_npts(n: u32) -> usize { 4 * n as usize + 1 }

/// The wavefunction of a single mode sampled over a [`Grid`].
///
/// Rows index y and columns index x, i.e. `values[[i, j]] = ψ(x[j], y[i])`.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    mode: Mode,
    domain: BoxDomain,
    x: nd::Array1<f64>,
    y: nd::Array1<f64>,
    values: nd::Array2<f64>,
}

impl Field {
    /// Evaluate `mode` over every point of `grid`.
    ///
    /// Logs a warning if the grid is too coarse to resolve the mode's
    /// oscillations; the field is computed regardless.
    pub fn compute(grid: &Grid, mode: Mode) -> Self {
        let domain = *grid.domain();
        let nmax = mode.nx().max(mode.ny());
        if grid.npts() < min_resolved_npts(nmax) {
            warn!(
                "mode {} is under-resolved by a grid of {} points per axis; \
                use at least {} for smooth plots",
                mode,
                grid.npts(),
                min_resolved_npts(nmax),
            );
        }
        let (lx, ly) = (domain.lx(), domain.ly());
        let a = 2.0 / domain.area().sqrt();
        // the field is separable, so only 2 × npts sines are needed
        let sx: nd::Array1<f64>
            = grid.x().mapv(|xj| (mode.nx() as f64 * PI * xj / lx).sin());
        let sy: nd::Array1<f64>
            = grid.y().mapv(|yi| (mode.ny() as f64 * PI * yi / ly).sin());
        let n = grid.npts();
        let values: nd::Array2<f64>
            = nd::Array2::from_shape_fn((n, n), |(i, j)| a * sx[j] * sy[i]);
        debug!("computed field for mode {} on {}×{} grid", mode, n, n);
        Self {
            mode,
            domain,
            x: grid.x().clone(),
            y: grid.y().clone(),
            values,
        }
    }

    pub fn mode(&self) -> Mode { self.mode }

    pub fn domain(&self) -> &BoxDomain { &self.domain }

    /// Sample coordinates along x.
    pub fn x(&self) -> &nd::Array1<f64> { &self.x }

    /// Sample coordinates along y.
    pub fn y(&self) -> &nd::Array1<f64> { &self.y }

    /// Amplitudes, indexed `[[y, x]]`.
    pub fn values(&self) -> &nd::Array2<f64> { &self.values }

    fn dx(&self) -> f64 { self.x[1] - self.x[0] }

    fn dy(&self) -> f64 { self.y[1] - self.y[0] }

    /// Largest absolute amplitude over the grid.
    pub fn max_abs(&self) -> f64 {
        self.values.iter().fold(0.0, |acc, v| acc.max(v.abs()))
    }

    /// Integral of ψ² over the box.
    pub fn norm(&self) -> f64 {
        trapz2(&self.values.mapv(|v| v * v), self.dx(), self.dy())
    }

    /// Overlap integral of two fields, ∫ ψ₁ ψ₂ dx dy.
    ///
    /// *Panics if the two fields were sampled over different boxes or on
    /// differently shaped grids*.
    pub fn dot(&self, other: &Self) -> f64 {
        assert_eq!(
            self.domain, other.domain,
            "overlap of fields sampled over different boxes",
        );
        let prod: nd::Array2<f64> = &self.values * &other.values;
        trapz2(&prod, self.dx(), self.dy())
    }
}
