//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray::{ self as nd, Dimension };
use thiserror::Error;

/// Returned when two arrays cannot be broadcast against each other.
///
/// Holds the shapes of the two offending arrays.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("arrays cannot be broadcast together; got shapes {0:?} and {1:?}")]
pub struct ShapeMismatch(pub Vec<usize>, pub Vec<usize>);

impl ShapeMismatch {
    /// Compute the shape resulting from broadcasting `a` against `b`.
    ///
    /// Axes are aligned from the trailing end, with the shorter shape padded
    /// by leading axes of length 1. Along each axis the lengths must either
    /// agree or one of them must be 1.
    pub(crate) fn co_broadcast<S, T, A, B, D, E>(
        a: &nd::ArrayBase<S, D>,
        b: &nd::ArrayBase<T, E>,
    ) -> Result<<D as nd::DimMax<E>>::Output, Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
        D: nd::Dimension + nd::DimMax<E>,
        E: nd::Dimension,
    {
        let (sa, sb) = (a.shape(), b.shape());
        let ndim = sa.len().max(sb.len());
        let padded = |s: &[usize], k: usize| -> usize {
            (k + s.len()).checked_sub(ndim).map(|i| s[i]).unwrap_or(1)
        };
        let mut dim = <<D as nd::DimMax<E>>::Output as Dimension>::zeros(ndim);
        for (k, out) in dim.slice_mut().iter_mut().enumerate() {
            *out = match (padded(sa, k), padded(sb, k)) {
                (na, nb) if na == nb => na,
                (1, nb) => nb,
                (na, 1) => na,
                _ => return Err(Self(sa.to_vec(), sb.to_vec())),
            };
        }
        Ok(dim)
    }
}

/// Returned from wavefunction, grid, and energy-level functions.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WfError {
    /// Returned when a box length is not strictly positive (or not finite).
    #[error("box lengths must be finite and greater than 0; got lx = {0}, ly = {1}")]
    InvalidDomain(f64, f64),

    /// Returned when a mode number is zero.
    #[error("mode numbers must be greater than 0; got nx = {0}, ny = {1}")]
    InvalidModeNumber(u32, u32),

    /// Returned when a grid is requested with fewer than two points per axis.
    #[error("grids must have at least 2 points per axis; got {0}")]
    BadGridSize(usize),

    /// Returned when a non-positive `epsilon` value is encountered.
    #[error("epsilon values must be greater than 0; got {0}")]
    BadEpsilon(f64),

    /// [`ShapeMismatch`]
    #[error("shape error: {0}")]
    ShapeMismatch(#[from] ShapeMismatch),
}

impl WfError {
    pub(crate) fn check_domain(lx: f64, ly: f64) -> Result<(), Self> {
        let ok = |l: f64| l.is_finite() && l > 0.0;
        (ok(lx) && ok(ly)).then_some(()).ok_or(Self::InvalidDomain(lx, ly))
    }

    pub(crate) fn check_mode(nx: u32, ny: u32) -> Result<(), Self> {
        (nx != 0 && ny != 0).then_some(())
            .ok_or(Self::InvalidModeNumber(nx, ny))
    }

    pub(crate) fn check_npts(npts: usize) -> Result<(), Self> {
        (npts >= 2).then_some(()).ok_or(Self::BadGridSize(npts))
    }

    pub(crate) fn check_epsilon(epsilon: f64) -> Result<(), Self> {
        (epsilon > 0.0).then_some(()).ok_or(Self::BadEpsilon(epsilon))
    }
}

pub type WfResult<T> = Result<T, WfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_check_rejects_nonpositive_and_nan() {
        assert!(WfError::check_domain(1.0, 2.0).is_ok());
        assert_eq!(
            WfError::check_domain(0.0, 1.0),
            Err(WfError::InvalidDomain(0.0, 1.0)),
        );
        assert!(WfError::check_domain(1.0, -3.0).is_err());
        assert!(WfError::check_domain(f64::NAN, 1.0).is_err());
        assert!(WfError::check_domain(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn co_broadcast_shapes() {
        let a: nd::Array2<f64> = nd::Array2::zeros((3, 1));
        let b: nd::Array2<f64> = nd::Array2::zeros((1, 4));
        let dim = ShapeMismatch::co_broadcast(&a, &b).unwrap();
        assert_eq!(dim, nd::Dim([3, 4]));

        let c: nd::Array2<f64> = nd::Array2::zeros((2, 4));
        let err = ShapeMismatch::co_broadcast(&a, &c).unwrap_err();
        assert_eq!(err, ShapeMismatch(vec![3, 1], vec![2, 4]));
    }

    #[test]
    fn co_broadcast_aligns_trailing_axes() {
        let row: nd::Array1<f64> = nd::Array1::zeros(3);
        let col: nd::Array2<f64> = nd::Array2::zeros((2, 1));
        let dim = ShapeMismatch::co_broadcast(&row, &col).unwrap();
        assert_eq!(dim, nd::Dim([2, 3]));

        let (row_dyn, col_dyn) = (row.view().into_dyn(), col.view().into_dyn());
        let dim = ShapeMismatch::co_broadcast(&row_dyn, &col_dyn).unwrap();
        assert_eq!(dim.slice(), &[2, 3]);

        let bad: nd::ArrayD<f64> = nd::ArrayD::zeros(vec![3, 2]);
        assert_eq!(
            ShapeMismatch::co_broadcast(&row_dyn, &bad),
            Err(ShapeMismatch(vec![3], vec![3, 2])),
        );

        let scalar: nd::Array0<f64> = nd::Array0::zeros(());
        let dim = ShapeMismatch::co_broadcast(&scalar, &col).unwrap();
        assert_eq!(dim, nd::Dim([2, 1]));
    }
}
