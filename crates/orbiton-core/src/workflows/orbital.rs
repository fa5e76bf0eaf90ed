//! Electron orbital probability evaluation.
//!
//! Hydrogen-like wavefunctions for quantum numbers (n, l, m): the radial
//! part from generalized Laguerre polynomials, the angular part from
//! spherical harmonics, and their product as the probability density
//! |psi|^2. Radii are in Bohr radii (a0 = 1); densities are non-negative by
//! construction and normalized so that the full-space integral is 1
//! (verified approximately by the test suite, not enforced per call).
//!
//! The screened variants first replace the nuclear charge by a Slater-type
//! effective charge and then delegate to the base evaluators - a
//! parameterization of the same algorithm, not a separate one.

use crate::core::error::DomainError;
use crate::engine::backend::BackendRegistry;
use crate::engine::error::EngineError;

/// Bohr radius in Angstrom, for shell-radius output to the renderer.
pub const BOHR_RADIUS_ANGSTROM: f64 = 0.529177;

const ORBITAL_LETTERS: [char; 7] = ['s', 'p', 'd', 'f', 'g', 'h', 'i'];

fn check_charge(z: f64) -> Result<(), DomainError> {
    if !z.is_finite() || z <= 0.0 {
        return Err(DomainError::NonPositiveCharge { z });
    }
    Ok(())
}

/// Evaluates the radial wavefunction R_{n,l}(r) for nuclear charge `z`.
///
/// R_{n,l}(r) = sqrt((2Z/n)^3 (n-l-1)! / (2n (n+l)!))
///              * rho^l * exp(-rho/2) * L_{n-l-1}^{2l+1}(rho),
/// with rho = 2Zr/n. The value can be negative; its square is the radial
/// probability factor.
pub fn radial_wavefunction(
    registry: &BackendRegistry,
    n: u32,
    l: u32,
    r: f64,
    z: f64,
) -> Result<f64, EngineError> {
    if n < 1 || l >= n {
        return Err(DomainError::QuantumNumbers { n, l }.into());
    }
    if !r.is_finite() {
        return Err(DomainError::NonFinite {
            name: "radial_wavefunction r",
            value: r,
        }
        .into());
    }
    if r < 0.0 {
        return Err(DomainError::NegativeRadius { r }.into());
    }
    check_charge(z)?;

    let n_f = f64::from(n);
    let rho = 2.0 * z * r / n_f;
    let norm = ((2.0 * z / n_f).powi(3) * registry.factorial(u64::from(n - l - 1))?
        / (2.0 * n_f * registry.factorial(u64::from(n + l))?))
    .sqrt();
    let laguerre = registry.generalized_laguerre(n - l - 1, f64::from(2 * l + 1), rho)?;
    Ok(norm * rho.powi(l as i32) * (-rho / 2.0).exp() * laguerre)
}

/// Evaluates the squared magnitude of the spherical harmonic |Y_{l,m}|^2.
pub fn angular_wavefunction(
    registry: &BackendRegistry,
    l: u32,
    m: i32,
    theta: f64,
    phi: f64,
) -> Result<f64, EngineError> {
    Ok(registry.spherical_harmonic(l, m, theta, phi)?.norm_sqr())
}

/// Probability density |psi_{n,l,m}(r, theta, phi)|^2 = R^2 |Y|^2.
#[allow(clippy::too_many_arguments)]
pub fn orbital_probability(
    registry: &BackendRegistry,
    n: u32,
    l: u32,
    m: i32,
    r: f64,
    theta: f64,
    phi: f64,
    z: f64,
) -> Result<f64, EngineError> {
    let radial = radial_wavefunction(registry, n, l, r, z)?;
    let angular = angular_wavefunction(registry, l, m, theta, phi)?;
    Ok(radial * radial * angular)
}

/// Slater-type effective nuclear charge for an electron in shell `n` of an
/// atom with `z` protons.
///
/// Shell-wise shielding constants: same-shell electrons shield weakly,
/// inner shells almost fully; the result is clamped at 1.0 so the screened
/// charge never drops below hydrogen.
pub fn effective_nuclear_charge(z: u32, n: u32) -> f64 {
    if z <= 1 {
        return 1.0;
    }
    let z_f = f64::from(z);
    let shielding = match n {
        1 => 0.3 * f64::from(z.min(2) - 1),
        2 => {
            if z > 2 {
                2.0 + 0.85 * f64::from((z - 2).min(8).saturating_sub(1))
            } else {
                0.0
            }
        }
        3 => {
            if z > 10 {
                2.0 + 8.0 + 0.35 * f64::from((z - 10).min(18).saturating_sub(1))
            } else {
                2.0 + 0.85 * f64::from(z.saturating_sub(2).min(8))
            }
        }
        _ => 0.7 * z_f,
    };
    (z_f - shielding).max(1.0)
}

/// Radial wavefunction with the screening correction applied to `z`.
pub fn radial_wavefunction_screened(
    registry: &BackendRegistry,
    n: u32,
    l: u32,
    r: f64,
    z: u32,
) -> Result<f64, EngineError> {
    radial_wavefunction(registry, n, l, r, effective_nuclear_charge(z, n))
}

/// Probability density with the screening correction applied to `z`.
#[allow(clippy::too_many_arguments)]
pub fn orbital_probability_screened(
    registry: &BackendRegistry,
    n: u32,
    l: u32,
    m: i32,
    r: f64,
    theta: f64,
    phi: f64,
    z: u32,
) -> Result<f64, EngineError> {
    orbital_probability(
        registry,
        n,
        l,
        m,
        r,
        theta,
        phi,
        effective_nuclear_charge(z, n),
    )
}

/// Mean shell radius a0 * n^2 / Z_eff, in Angstrom.
pub fn shell_radius(n: u32, z: u32) -> f64 {
    BOHR_RADIUS_ANGSTROM * f64::from(n * n) / effective_nuclear_charge(z, n)
}

/// Conventional orbital designation for the (n, l) pair, e.g. "1s", "3d".
pub fn orbital_label(n: u32, l: u32) -> String {
    let letter = ORBITAL_LETTERS.get(l as usize).copied().unwrap_or('?');
    format!("{n}{letter}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const TOLERANCE: f64 = 1e-10;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn registry() -> BackendRegistry {
        BackendRegistry::new()
    }

    #[test]
    fn ground_state_radial_value_at_origin() {
        // R_{1,0}(0) = 2 for hydrogen.
        let value = radial_wavefunction(&registry(), 1, 0, 0.0, 1.0).unwrap();
        assert!(f64_approx_equal(value, 2.0));
    }

    #[test]
    fn ground_state_radial_decays_exponentially() {
        // R_{1,0}(r) = 2 e^{-r}
        let value = radial_wavefunction(&registry(), 1, 0, 1.0, 1.0).unwrap();
        assert!(f64_approx_equal(value, 2.0 * (-1.0f64).exp()));
    }

    #[test]
    fn ground_state_probability_at_origin_is_finite_and_positive() {
        let density = orbital_probability(&registry(), 1, 0, 0, 0.0, 0.0, 0.0, 1.0).unwrap();
        assert!(density.is_finite());
        // 4 * |Y_0^0|^2 = 1/pi.
        assert!(f64_approx_equal(density, 1.0 / PI));
    }

    #[test]
    fn probability_is_non_negative_everywhere_sampled() {
        let registry = registry();
        for &(n, l, m) in &[(1u32, 0u32, 0i32), (2, 1, 0), (3, 2, -1), (4, 3, 2)] {
            for &r in &[0.0, 0.5, 2.0, 10.0] {
                for &theta in &[0.0, PI / 3.0, PI / 2.0, PI] {
                    let p =
                        orbital_probability(&registry, n, l, m, r, theta, 0.7, 1.0).unwrap();
                    assert!(p >= 0.0 && p.is_finite(), "({n},{l},{m}) at r={r}");
                }
            }
        }
    }

    #[test]
    fn radial_part_is_normalized() {
        // Integral of R^2 r^2 dr over [0, inf) is 1 for every bound state.
        let registry = registry();
        let dr = 0.002;
        for &(n, l) in &[(1u32, 0u32), (2, 0), (2, 1), (3, 2)] {
            let mut integral = 0.0;
            let mut r = dr / 2.0;
            while r < 60.0 {
                let value = radial_wavefunction(&registry, n, l, r, 1.0).unwrap();
                integral += value * value * r * r * dr;
                r += dr;
            }
            assert!(
                (integral - 1.0).abs() < 1e-3,
                "({n},{l}) integrates to {integral}"
            );
        }
    }

    #[test]
    fn angular_part_is_normalized() {
        // Integral of |Y|^2 over the sphere is 1; |Y|^2 is phi-independent,
        // so the azimuthal integral contributes a factor 2 pi.
        let registry = registry();
        let d_theta = PI / 4000.0;
        for &(l, m) in &[(0u32, 0i32), (1, 0), (1, 1), (2, 1), (2, -2), (3, 0)] {
            let mut integral = 0.0;
            let mut theta = d_theta / 2.0;
            while theta < PI {
                let value = angular_wavefunction(&registry, l, m, theta, 0.0).unwrap();
                integral += value * theta.sin() * d_theta;
                theta += d_theta;
            }
            integral *= 2.0 * PI;
            assert!(
                (integral - 1.0).abs() < 1e-3,
                "({l},{m}) integrates to {integral}"
            );
        }
    }

    #[test]
    fn invalid_quantum_numbers_fail() {
        let registry = registry();
        assert!(matches!(
            radial_wavefunction(&registry, 0, 0, 1.0, 1.0),
            Err(EngineError::Domain(DomainError::QuantumNumbers { .. }))
        ));
        assert!(matches!(
            radial_wavefunction(&registry, 2, 2, 1.0, 1.0),
            Err(EngineError::Domain(DomainError::QuantumNumbers { .. }))
        ));
    }

    #[test]
    fn negative_radius_fails() {
        assert!(matches!(
            radial_wavefunction(&registry(), 1, 0, -0.5, 1.0),
            Err(EngineError::Domain(DomainError::NegativeRadius { .. }))
        ));
    }

    #[test]
    fn non_positive_charge_fails() {
        assert!(matches!(
            radial_wavefunction(&registry(), 1, 0, 1.0, 0.0),
            Err(EngineError::Domain(DomainError::NonPositiveCharge { .. }))
        ));
    }

    #[test]
    fn hydrogen_is_unscreened() {
        assert_eq!(effective_nuclear_charge(1, 1), 1.0);
    }

    #[test]
    fn helium_inner_shell_screening() {
        // Z_eff = 2 - 0.3
        assert!(f64_approx_equal(effective_nuclear_charge(2, 1), 1.7));
    }

    #[test]
    fn oxygen_valence_screening() {
        // Z = 8, n = 2: sigma = 2 + 0.85 * 5
        assert!(f64_approx_equal(effective_nuclear_charge(8, 2), 1.75));
    }

    #[test]
    fn screening_never_drops_below_hydrogen() {
        for z in 1..=40u32 {
            for n in 1..=5u32 {
                assert!(effective_nuclear_charge(z, n) >= 1.0);
            }
        }
    }

    #[test]
    fn screened_variant_delegates_to_base_evaluators() {
        let registry = registry();
        let z = 8u32;
        let z_eff = effective_nuclear_charge(z, 2);
        let screened =
            orbital_probability_screened(&registry, 2, 1, 0, 1.5, 0.8, 0.3, z).unwrap();
        let base = orbital_probability(&registry, 2, 1, 0, 1.5, 0.8, 0.3, z_eff).unwrap();
        assert_eq!(screened, base);
    }

    #[test]
    fn shell_radius_shrinks_with_effective_charge() {
        // Hydrogen n=1 sits at one Bohr radius; helium pulls its shell in.
        assert!(f64_approx_equal(shell_radius(1, 1), BOHR_RADIUS_ANGSTROM));
        assert!(shell_radius(1, 2) < shell_radius(1, 1));
    }

    #[test]
    fn orbital_labels_follow_spectroscopic_notation() {
        assert_eq!(orbital_label(1, 0), "1s");
        assert_eq!(orbital_label(2, 1), "2p");
        assert_eq!(orbital_label(3, 2), "3d");
        assert_eq!(orbital_label(4, 3), "4f");
    }
}
