use crate::core::error::DomainError;
use crate::core::special::factorial::MAX_FACTORIAL;
use num_complex::Complex64;
use statrs::function::factorial as stat_factorial;
use statrs::function::gamma as stat_gamma;
use std::f64::consts::PI;

const LEGENDRE_ARGUMENT_SLACK: f64 = 1e-12;

pub fn factorial(n: u64) -> Result<f64, DomainError> {
    if n > MAX_FACTORIAL {
        return Err(DomainError::FactorialOverflow {
            n,
            max: MAX_FACTORIAL,
        });
    }
    Ok(stat_factorial::factorial(n))
}

/// n!! through the gamma-function relations: (2k)!! = 2^k k! and
/// (2k+1)!! = 2^(k+1) Γ(k + 3/2) / √π.
pub fn double_factorial(n: u64) -> Result<f64, DomainError> {
    let k = n / 2;
    let value = if n % 2 == 0 {
        (2.0f64).powi(k as i32) * stat_gamma::gamma(k as f64 + 1.0)
    } else {
        (2.0f64).powi(k as i32 + 1) * stat_gamma::gamma(k as f64 + 1.5) / PI.sqrt()
    };
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::DoubleFactorialOverflow { n })
    }
}

pub fn binomial(n: u64, k: u64) -> Result<f64, DomainError> {
    if k > n {
        return Err(DomainError::BinomialOrder { n, k });
    }
    Ok(stat_factorial::binomial(n, k))
}

pub fn gamma_half_integer(n: u64) -> Result<f64, DomainError> {
    if n == 0 {
        return Err(DomainError::GammaPole);
    }
    Ok(stat_gamma::gamma(n as f64 / 2.0))
}

/// L_n^α(x) by the explicit series
/// Σ_{k=0}^{n} (-1)^k C(n+α, n-k) x^k / k!, with the generalized binomial
/// coefficient accumulated as a running product.
pub fn generalized_laguerre(n: u32, alpha: f64, x: f64) -> Result<f64, DomainError> {
    if !alpha.is_finite() {
        return Err(DomainError::NonFinite {
            name: "generalized_laguerre alpha",
            value: alpha,
        });
    }
    if !x.is_finite() {
        return Err(DomainError::NonFinite {
            name: "generalized_laguerre x",
            value: x,
        });
    }

    let mut sum = 0.0;
    for k in 0..=n {
        let mut coefficient = 1.0;
        for j in 0..(n - k) {
            coefficient *= (n as f64 + alpha - j as f64) / (j as f64 + 1.0);
        }
        let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
        sum += sign * coefficient * x.powi(k as i32) / stat_factorial::factorial(k as u64);
    }
    Ok(sum)
}

/// P_l^m(x) for m >= 0 by term-wise differentiation of the Rodrigues series:
///
/// ```text
/// P_l^m(x) = (-1)^m (1-x²)^(m/2) 2^(-l)
///            Σ_k (-1)^k C(l,k) C(2l-2k,l) (l-2k)!/(l-2k-m)! x^(l-2k-m)
/// ```
fn legendre_series(l: u32, m: u32, x: f64) -> f64 {
    let sqrt_term = (1.0 - x * x).max(0.0).sqrt();
    let mut sum = 0.0;
    let mut k = 0u32;
    while 2 * k + m <= l {
        let exponent = l - 2 * k - m;
        let coefficient = stat_factorial::binomial(l as u64, k as u64)
            * stat_factorial::binomial((2 * l - 2 * k) as u64, l as u64)
            * stat_factorial::factorial((l - 2 * k) as u64)
            / stat_factorial::factorial(exponent as u64);
        let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
        sum += sign * coefficient * x.powi(exponent as i32);
        k += 1;
    }
    let phase = if m % 2 == 0 { 1.0 } else { -1.0 };
    phase * sqrt_term.powi(m as i32) * sum / (2.0f64).powi(l as i32)
}

pub fn associated_legendre(m: i32, l: u32, x: f64) -> Result<f64, DomainError> {
    if !x.is_finite() {
        return Err(DomainError::NonFinite {
            name: "associated_legendre x",
            value: x,
        });
    }
    if m.unsigned_abs() > l {
        return Err(DomainError::LegendreOrder { m, l });
    }
    if x.abs() > 1.0 + LEGENDRE_ARGUMENT_SLACK {
        return Err(DomainError::LegendreArgument { x });
    }
    let x = x.clamp(-1.0, 1.0);

    if m < 0 {
        let m_pos = m.unsigned_abs();
        let positive = legendre_series(l, m_pos, x);
        let ratio = stat_factorial::factorial((l - m_pos) as u64)
            / stat_factorial::factorial((l + m_pos) as u64);
        let sign = if m_pos % 2 == 0 { 1.0 } else { -1.0 };
        Ok(sign * ratio * positive)
    } else {
        Ok(legendre_series(l, m as u32, x))
    }
}

fn normalization(l: u32, m: i32) -> f64 {
    let numerator = stat_factorial::factorial((l as i64 - m as i64) as u64);
    let denominator = stat_factorial::factorial((l as i64 + m as i64) as u64);
    ((2 * l + 1) as f64 / (4.0 * PI) * numerator / denominator).sqrt()
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
