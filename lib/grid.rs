//! Evenly spaced sampling grids over a [`BoxDomain`].
//!
//! ```
//! use boxwf::{ domain::BoxDomain, grid::Grid };
//!
//! let grid = Grid::new(BoxDomain::new(1.0, 2.0).unwrap(), 101).unwrap();
//! assert_eq!(grid.x()[0], 0.0);
//! assert_eq!(grid.x()[100], 1.0);
//! assert_eq!(grid.y()[100], 2.0);
//! assert!((grid.dx() - 0.01).abs() < 1e-15);
//! ```

use ndarray as nd;
use crate::{
    domain::BoxDomain,
    error::{ WfError, WfResult },
};

/// `npts` evenly spaced samples along each axis of a box, including both
/// walls.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    domain: BoxDomain,
    npts: usize,
    x: nd::Array1<f64>,
    y: nd::Array1<f64>,
}

impl Grid {
    /// Sample `domain` with `npts` points per axis.
    ///
    /// Fails with [`WfError::BadGridSize`] if `npts < 2`.
    pub fn new(domain: BoxDomain, npts: usize) -> WfResult<Self> {
        let x = Self::linspace(domain.lx(), npts)?;
        let y = Self::linspace(domain.ly(), npts)?;
        Ok(Self { domain, npts, x, y })
    }

    /// Generate `npts` evenly spaced values covering `[0, l]`.
    ///
    /// The first value is exactly 0 and the last is exactly `l`.
    pub fn linspace(l: f64, npts: usize) -> WfResult<nd::Array1<f64>> {
        WfError::check_npts(npts)?;
        let last = npts - 1;
        let h = l / last as f64;
        let x: nd::Array1<f64>
            = (0..npts)
            .map(|k| if k == last { l } else { k as f64 * h })
            .collect();
        Ok(x)
    }

    pub fn domain(&self) -> &BoxDomain { &self.domain }

    /// Number of points along each axis.
    pub fn npts(&self) -> usize { self.npts }

    /// Sample coordinates along x.
    pub fn x(&self) -> &nd::Array1<f64> { &self.x }

    /// Sample coordinates along y.
    pub fn y(&self) -> &nd::Array1<f64> { &self.y }

    /// Spacing between adjacent x samples.
    pub fn dx(&self) -> f64 { self.domain.lx() / (self.npts - 1) as f64 }

    /// Spacing between adjacent y samples.
    pub fn dy(&self) -> f64 { self.domain.ly() / (self.npts - 1) as f64 }

    /// Return the full cross product of the axis samples as a pair of
    /// `(npts, npts)` arrays `(X, Y)`.
    ///
    /// Rows index y and columns index x, i.e. `X[[i, j]] = x[j]` and
    /// `Y[[i, j]] = y[i]`.
    pub fn meshgrid(&self) -> (nd::Array2<f64>, nd::Array2<f64>) {
        let n = self.npts;
        let X: nd::Array2<f64>
            = nd::Array2::from_shape_fn((n, n), |(_, j)| self.x[j]);
        let Y: nd::Array2<f64>
            = nd::Array2::from_shape_fn((n, n), |(i, _)| self.y[i]);
        (X, Y)
    }

    /// Return the x samples as a `(1, npts)` row and the y samples as an
    /// `(npts, 1)` column, suitable for broadcasting against each other.
    pub fn axes(&self) -> (nd::ArrayView2<'_, f64>, nd::ArrayView2<'_, f64>) {
        (self.x.view().insert_axis(nd::Axis(0)),
            self.y.view().insert_axis(nd::Axis(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_endpoints_and_spacing() {
        let x = Grid::linspace(1.0, 101).unwrap();
        assert_eq!(x.len(), 101);
        assert_eq!(x[0], 0.0);
        assert_eq!(x[100], 1.0);
        x.iter().zip(x.iter().skip(1))
            .for_each(|(xk, xkp1)| assert!((xkp1 - xk - 0.01).abs() < 1e-12));
    }

    #[test]
    fn linspace_odd_length_keeps_endpoint() {
        let x = Grid::linspace(0.3, 7).unwrap();
        assert_eq!(x[6], 0.3);
        assert_eq!(Grid::linspace(2.0, 2).unwrap(), nd::array![0.0, 2.0]);
    }

    #[test]
    fn too_few_points() {
        let d = BoxDomain::square(1.0).unwrap();
        assert_eq!(Grid::new(d, 1), Err(WfError::BadGridSize(1)));
        assert_eq!(Grid::new(d, 0), Err(WfError::BadGridSize(0)));
    }

    #[test]
    fn meshgrid_indexing() {
        let grid = Grid::new(BoxDomain::new(2.0, 4.0).unwrap(), 5).unwrap();
        let (X, Y) = grid.meshgrid();
        assert_eq!(X.dim(), (5, 5));
        assert_eq!(Y.dim(), (5, 5));
        assert_eq!(X[[3, 1]], 0.5);
        assert_eq!(Y[[3, 1]], 3.0);
        assert_eq!(X.row(2), grid.x().view());
        assert_eq!(Y.column(4), grid.y().view());
        assert_eq!(grid.dx(), 0.5);
        assert_eq!(grid.dy(), 1.0);
    }

    #[test]
    fn axes_broadcast_to_meshgrid() {
        let grid = Grid::new(BoxDomain::new(1.0, 3.0).unwrap(), 4).unwrap();
        let (xr, yc) = grid.axes();
        assert_eq!(xr.shape(), &[1, 4]);
        assert_eq!(yc.shape(), &[4, 1]);
        let (X, Y) = grid.meshgrid();
        assert_eq!(xr.broadcast((4, 4)).unwrap(), X);
        assert_eq!(yc.broadcast((4, 4)).unwrap(), Y);
    }
}
