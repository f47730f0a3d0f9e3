//! Box dimensions and mode numbers.
//!
//! Both types can only be constructed through validating constructors, so every
//! function that accepts them may assume strictly positive lengths and mode
//! numbers.
//!
//! ```
//! use boxwf::domain::{ BoxDomain, Mode };
//!
//! let domain = BoxDomain::new(2.0, 1.0).unwrap();
//! assert!(!domain.is_square());
//! assert!(BoxDomain::new(0.0, 1.0).is_err());
//!
//! let mode = Mode::new(3, 1).unwrap();
//! assert_eq!(mode.swapped(), Mode::new(1, 3).unwrap());
//! assert!(Mode::new(0, 1).is_err());
//! ```

use std::fmt;
use crate::error::{ WfError, WfResult };

/// The rectangular region `[0, lx] × [0, ly]` confining the particle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxDomain {
    lx: f64,
    ly: f64,
}

impl BoxDomain {
    /// Create a new box, failing with [`WfError::InvalidDomain`] unless both
    /// lengths are finite and greater than zero.
    pub fn new(lx: f64, ly: f64) -> WfResult<Self> {
        WfError::check_domain(lx, ly)?;
        Ok(Self { lx, ly })
    }

    /// Create a square box of side length `l`.
    pub fn square(l: f64) -> WfResult<Self> { Self::new(l, l) }

    /// Length along x.
    pub fn lx(&self) -> f64 { self.lx }

    /// Length along y.
    pub fn ly(&self) -> f64 { self.ly }

    /// Area of the box.
    pub fn area(&self) -> f64 { self.lx * self.ly }

    /// Return `true` if both sides have exactly the same length.
    pub fn is_square(&self) -> bool { self.lx == self.ly }
}

/// A pair of quantum numbers `(nx, ny)` identifying a stationary state.
///
/// Zero is rejected: it gives the trivial, unnormalizable field ψ = 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mode {
    nx: u32,
    ny: u32,
}

impl Mode {
    /// Create a new mode pair, failing with [`WfError::InvalidModeNumber`] if
    /// either number is zero.
    pub fn new(nx: u32, ny: u32) -> WfResult<Self> {
        WfError::check_mode(nx, ny)?;
        Ok(Self { nx, ny })
    }

    /// The ground state, `(1, 1)`.
    pub fn ground() -> Self { Self { nx: 1, ny: 1 } }

    pub fn nx(&self) -> u32 { self.nx }

    pub fn ny(&self) -> u32 { self.ny }

    /// Return the mode with `nx` and `ny` exchanged.
    pub fn swapped(&self) -> Self { Self { nx: self.ny, ny: self.nx } }
}

impl TryFrom<(u32, u32)> for Mode {
    type Error = WfError;

    fn try_from(n: (u32, u32)) -> WfResult<Self> { Self::new(n.0, n.1) }
}

impl TryFrom<[u32; 2]> for Mode {
    type Error = WfError;

    fn try_from(n: [u32; 2]) -> WfResult<Self> { Self::new(n[0], n[1]) }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.nx, self.ny)
    }
}
