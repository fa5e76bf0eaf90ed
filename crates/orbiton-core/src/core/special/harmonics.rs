use super::legendre::associated_legendre;
use crate::core::error::DomainError;
use num_complex::Complex64;
use std::f64::consts::PI;

/// Normalization prefactor K_l^m = sqrt((2l+1)/(4π) * (l-m)!/(l+m)!).
///
/// The factorial ratio is accumulated as a running product over (l-|m|, l+|m|]
/// instead of dividing two large factorials, which keeps the prefactor finite
/// and accurate for every valid order.
fn normalization(l: u32, m: i32) -> f64 {
    let m_abs = m.unsigned_abs();
    let mut ratio = 1.0;
    for k in (l - m_abs + 1)..=(l + m_abs) {
        if m >= 0 {
            ratio /= k as f64;
        } else {
            ratio *= k as f64;
        }
    }
    ((2 * l + 1) as f64 / (4.0 * PI) * ratio).sqrt()
}

fn check_angles(theta: f64, phi: f64) -> Result<(), DomainError> {
    if !theta.is_finite() {
        return Err(DomainError::NonFinite {
            name: "spherical harmonic theta",
            value: theta,
        });
    }
    if !phi.is_finite() {
        return Err(DomainError::NonFinite {
            name: "spherical harmonic phi",
            value: phi,
        });
    }
    Ok(())
}

/// Evaluates the complex spherical harmonic Y_l^m(θ, φ).
///
/// Follows the quantum-mechanical convention with the Condon-Shortley phase
/// carried by the associated Legendre function:
/// Y_l^m = K_l^m P_l^m(cos θ) e^{imφ}. Stable as θ approaches 0 or π: the
/// Legendre pole terms vanish for m ≠ 0 and the m = 0 harmonics stay finite.
pub fn spherical_harmonic(l: u32, m: i32, theta: f64, phi: f64) -> Result<Complex64, DomainError> {
    check_angles(theta, phi)?;
    let p = associated_legendre(m, l, theta.cos())?;
    let magnitude = normalization(l, m) * p;
    let phase = m as f64 * phi;
    Ok(Complex64::new(
        magnitude * phase.cos(),
        magnitude * phase.sin(),
    ))
}

/// Evaluates the real spherical harmonic basis function Y_{l,m}(θ, φ).
///
/// Returns the standard real combination with no phase ambiguity:
/// the √2-weighted cosine combination for m > 0, the sine combination for
/// m < 0, and the plain zonal harmonic for m = 0.
pub fn spherical_harmonic_real(l: u32, m: i32, theta: f64, phi: f64) -> Result<f64, DomainError> {
    check_angles(theta, phi)?;
    let m_abs = m.unsigned_abs() as i32;
    let p = associated_legendre(m_abs, l, theta.cos())?;
    let k = normalization(l, m_abs);
    let sign = if m_abs % 2 == 0 { 1.0 } else { -1.0 };
    let value = match m.cmp(&0) {
        std::cmp::Ordering::Greater => {
            std::f64::consts::SQRT_2 * sign * k * p * (m as f64 * phi).cos()
        }
        std::cmp::Ordering::Less => {
            std::f64::consts::SQRT_2 * sign * k * p * (m_abs as f64 * phi).sin()
        }
        std::cmp::Ordering::Equal => k * p,
    };
    Ok(value)
}
