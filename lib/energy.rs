//! Energies of box eigenstates and their grouping into (possibly degenerate)
//! levels.
//!
//! Energies are dimensionless, expressed in units where *ħ*²/2 *m* = 1 (see
//! [`docs/units`][crate::docs#units]). Use [`Units`][crate::units::Units] to
//! convert to physical units.
//!
//! ```
//! use boxwf::{ domain::{ BoxDomain, Mode }, energy };
//!
//! let square = BoxDomain::square(1.0).unwrap();
//! let levels = energy::levels(&square, 3, 1e-9).unwrap();
//! assert_eq!(levels[0].modes, vec![Mode::ground()]);
//! assert_eq!(levels[1].degeneracy(), 2); // (1, 2) and (2, 1)
//! ```

use std::f64::consts::PI;
use crate::{
    domain::{ BoxDomain, Mode },
    error::{ WfError, WfResult },
};

/// Energy of `mode`, π² (nx²/lx² + ny²/ly²).
pub fn energy(domain: &BoxDomain, mode: Mode) -> f64 {
    let kx = mode.nx() as f64 / domain.lx();
    let ky = mode.ny() as f64 / domain.ly();
    PI.powi(2) * (kx.powi(2) + ky.powi(2))
}

// relative comparison, scaled by the larger of the two magnitudes
fn close(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon * a.abs().max(b.abs())
}

/// Return `true` if modes `a` and `b` have the same energy to within relative
/// tolerance `epsilon`.
pub fn is_degenerate(domain: &BoxDomain, a: Mode, b: Mode, epsilon: f64)
    -> WfResult<bool>
{
    WfError::check_epsilon(epsilon)?;
    Ok(close(energy(domain, a), energy(domain, b), epsilon))
}

/// A set of modes sharing a single energy.
#[derive(Clone, Debug, PartialEq)]
pub struct Level {
    /// Energy of the first (lowest, by sort order) mode in the level.
    pub energy: f64,
    /// All modes in the level, in ascending `(nx, ny)` order.
    pub modes: Vec<Mode>,
}

impl Level {
    /// Number of distinct modes sharing this energy.
    pub fn degeneracy(&self) -> usize { self.modes.len() }

    pub fn is_degenerate(&self) -> bool { self.modes.len() > 1 }
}

/// Enumerate all modes with `1 ≤ nx, ny ≤ nmax`, sorted by energy and grouped
/// into levels whose energies agree to relative tolerance `epsilon`.
///
/// Only levels lying strictly below the lowest energy reachable with a mode
/// number of `nmax + 1` are returned, so every returned level is complete.
pub fn levels(domain: &BoxDomain, nmax: u32, epsilon: f64)
    -> WfResult<Vec<Level>>
{
    WfError::check_mode(nmax, nmax)?;
    WfError::check_epsilon(epsilon)?;
    let next = nmax as f64 + 1.0;
    let cutoff
        = PI.powi(2) * (
            (next / domain.lx()).powi(2) + domain.ly().powi(-2)
        ).min(
            domain.lx().powi(-2) + (next / domain.ly()).powi(2)
        );
    let mut states: Vec<(f64, Mode)>
        = (1..=nmax)
        .flat_map(|nx| (1..=nmax).map(move |ny| (nx, ny)))
        .map(|(nx, ny)| Mode::new(nx, ny).map(|m| (energy(domain, m), m)))
        .filter(|state| {
            state.as_ref()
                .map(|(e, _)| *e < cutoff && !close(*e, cutoff, epsilon))
                .unwrap_or(true)
        })
        .collect::<WfResult<_>>()?;
    states.sort_by(|l, r| l.0.total_cmp(&r.0).then(l.1.cmp(&r.1)));

    let mut levels: Vec<Level> = Vec::new();
    for (e, m) in states.into_iter() {
        match levels.last_mut() {
            Some(level) if close(level.energy, e, epsilon) => {
                level.modes.push(m);
            },
            _ => { levels.push(Level { energy: e, modes: vec![m] }); },
        }
    }
    levels.iter_mut().for_each(|level| level.modes.sort());
    Ok(levels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode(nx: u32, ny: u32) -> Mode { Mode::new(nx, ny).unwrap() }

    #[test]
    fn ground_state_energy() {
        let d = BoxDomain::square(1.0).unwrap();
        assert!((energy(&d, Mode::ground()) - 2.0 * PI * PI).abs() < 1e-12);
        let d = BoxDomain::new(2.0, 1.0).unwrap();
        assert!((energy(&d, mode(2, 1)) - 2.0 * PI * PI).abs() < 1e-12);
    }

    #[test]
    fn square_box_swap_degeneracy() {
        let d = BoxDomain::square(1.7).unwrap();
        for (nx, ny) in [(1, 2), (1, 3), (2, 5), (4, 7)] {
            let a = mode(nx, ny);
            assert_eq!(energy(&d, a), energy(&d, a.swapped()));
            assert!(is_degenerate(&d, a, a.swapped(), 1e-12).unwrap());
        }
    }

    #[test]
    fn rectangle_lifts_swap_degeneracy() {
        let d = BoxDomain::new(1.0, 1.5).unwrap();
        assert!(!is_degenerate(&d, mode(1, 2), mode(2, 1), 1e-9).unwrap());
    }

    #[test]
    fn bad_tolerance() {
        let d = BoxDomain::square(1.0).unwrap();
        assert_eq!(
            is_degenerate(&d, mode(1, 2), mode(2, 1), 0.0),
            Err(WfError::BadEpsilon(0.0)),
        );
        assert_eq!(levels(&d, 3, -1.0), Err(WfError::BadEpsilon(-1.0)));
        assert_eq!(levels(&d, 0, 1e-9), Err(WfError::InvalidModeNumber(0, 0)));
    }

    #[test]
    fn square_box_levels() {
        let d = BoxDomain::square(1.0).unwrap();
        let lv = levels(&d, 7, 1e-9).unwrap();
        // every pair with nx² + ny² < 8² + 1²
        let total: usize = lv.iter().map(Level::degeneracy).sum();
        assert_eq!(total, 41);
        assert!(lv.windows(2).all(|w| w[0].energy < w[1].energy));
        assert_eq!(lv[0].modes, vec![mode(1, 1)]);
        assert_eq!(lv[1].modes, vec![mode(1, 2), mode(2, 1)]);
        assert_eq!(lv[2].modes, vec![mode(2, 2)]);
        assert!(!lv[2].is_degenerate());
        // 1² + 7² = 5² + 5² = 50
        let accidental = lv.iter()
            .find(|level| level.modes.contains(&mode(5, 5)))
            .unwrap();
        assert_eq!(accidental.modes, vec![mode(1, 7), mode(5, 5), mode(7, 1)]);
    }

    #[test]
    fn levels_stop_below_cutoff() {
        let d = BoxDomain::square(1.0).unwrap();
        // (1, 3) and (3, 1) sit exactly at the cutoff for nmax = 2
        let lv = levels(&d, 2, 1e-9).unwrap();
        let e: Vec<f64> = lv.iter().map(|l| l.energy / (PI * PI)).collect();
        assert_eq!(lv.len(), 3);
        assert!((e[2] - 8.0).abs() < 1e-9);
        assert!(levels(&d, 1, 1e-9).unwrap()[0].modes == vec![Mode::ground()]);
    }

    #[test]
    fn rectangle_levels_follow_ratio() {
        // E / π² = nx² / 4 + ny²
        let d = BoxDomain::new(2.0, 1.0).unwrap();
        let lv = levels(&d, 4, 1e-9).unwrap();
        assert_eq!(lv[0].modes, vec![mode(1, 1)]);
        assert_eq!(lv[1].modes, vec![mode(2, 1)]);
        // (4, 1): 4 + 1 = 5; (2, 2): 1 + 4 = 5
        let five = lv.iter().find(|level| level.modes.contains(&mode(2, 2)))
            .unwrap();
        assert_eq!(five.modes, vec![mode(2, 2), mode(4, 1)]);
    }
}
