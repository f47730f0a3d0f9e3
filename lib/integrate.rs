//! Trapezoidal-rule quadrature over evenly sampled data.

use ndarray::{ self as nd, Ix1, Ix2 };
use num_traits::Float;

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    let inner
        = y.slice(nd::s![1..n - 1]).iter()
        .fold(A::zero(), |acc, yk| acc + *yk);
    (dx / two) * (y[0] + two * inner + y[n - 1])
}

/// Integrate a function sampled on a 2D grid using the trapezoidal rule along
/// each axis.
///
/// Axis 1 (columns) is taken to be sampled with spacing `dx` and axis 0 (rows)
/// with spacing `dy`, matching [`Grid::meshgrid`][crate::grid::Grid::meshgrid].
///
/// *Panics if either axis has length less than 2*.
pub fn trapz2<S, A>(f: &nd::ArrayBase<S, Ix2>, dx: A, dy: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let rows: nd::Array1<A>
        = f.outer_iter()
        .map(|row| trapz(&row, dx))
        .collect();
    trapz(&rows, dy)
}
