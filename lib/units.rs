#![allow(non_upper_case_globals)]

//! Conversion of dimensionless box energies and lengths to physical units.
//!
//! Concrete physical constants are taken from NIST.
//!
//! ```
//! use boxwf::{ domain::{ BoxDomain, Mode }, energy::energy, units };
//!
//! // an electron in a 1 nm × 1 nm box
//! let uu = units::Units::from_mks(units::me, 1e-9);
//! let e = energy(&BoxDomain::square(1.0).unwrap(), Mode::ground());
//! let e_ev = uu.to_ev(e);
//! assert!((e_ev - 0.752).abs() < 1e-3);
//! ```

use std::f64::consts::PI;

/// Planck constant (kg m^2 s^-1)
pub const h: f64 = 6.62607015e-34;
//             +/- 0 (exact)

/// reduced Planck constant (kg m^2 s^-1)
pub const hbar: f64 = h / 2.0 / PI;
//                +/- 0 (exact)

/// elementary charge (C)
pub const e: f64 = 1.602176634e-19;
//             +/- 0 (exact)

/// electron mass (kg)
pub const me: f64 = 9.1093837015e-31;
//              +/- 0.0000000028e-31

/// proton mass (kg)
pub const mp: f64 = 1.67262192369e-27;
//              +/- 0.00000000051e-27

/// Bohr radius (m)
pub const a0: f64 = 5.29177210903e-11;
//              +/- 0.00000000080e-11

/// Natural unit scales for a particle of mass `m` in a box whose lengths are
/// measured in multiples of `a`.
///
/// Dimensionless energies are multiples of `e = ħ²/(2 m a²)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Units {
    /// Particle mass (kg).
    pub m: f64,
    /// Base length scale (m).
    pub a: f64,
    /// Associated energy scale (J).
    pub e: f64,
}

impl Units {
    /// Construct from a mass (kg) and length scale (m).
    pub fn from_mks(mass: f64, a: f64) -> Self {
        let e_unit = hbar.powi(2) / 2.0 / mass / a.powi(2);
        Self { m: mass, a, e: e_unit }
    }

    /// Convert a dimensionless energy to joules.
    pub fn from_nat_energy(&self, x: f64) -> f64 { x * self.e }

    /// Convert a dimensionless energy to electronvolts.
    pub fn to_ev(&self, x: f64) -> f64 { self.from_nat_energy(x) / e }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn energy_scale() {
        let uu = Units::from_mks(2.0, 0.5);
        assert!((uu.e - hbar.powi(2)).abs() < 1e-80);
        assert!((uu.from_nat_energy(3.5) / uu.e - 3.5).abs() < 1e-12);
    }

    #[test]
    fn bohr_scale_is_half_hartree() {
        let au = Units::from_mks(me, a0);
        // ħ²/(2 mₑ a₀²) is half a hartree, ≈ 13.6 eV
        assert!((au.to_ev(1.0) - 13.6057).abs() < 1e-3);
    }
}
