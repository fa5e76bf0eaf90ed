use crate::core::error::DomainError;

/// Slack allowed past |x| = 1 before the argument is rejected; values inside
/// the band are clamped so floating-point noise from cos(theta) never
/// produces a spurious domain error.
const ARGUMENT_SLACK: f64 = 1e-12;

/// Evaluates the Legendre polynomial P_l(x) via Bonnet's recursion.
fn legendre(l: u32, x: f64) -> f64 {
    if l == 0 {
        return 1.0;
    }
    if l == 1 {
        return x;
    }
    let mut prev2 = 1.0;
    let mut prev1 = x;
    for k in 1..l {
        let k = k as f64;
        let next = ((2.0 * k + 1.0) * x * prev1 - k * prev2) / (k + 1.0);
        prev2 = prev1;
        prev1 = next;
    }
    prev1
}

/// Evaluates the associated Legendre function P_l^m(x) for |x| <= 1.
///
/// For m > 0 the evaluation starts from the closed-form diagonal term
/// P_m^m(x) = (-1)^m (2m-1)!! (1-x²)^(m/2), built incrementally to avoid
/// overflow, then climbs in l with the stable upward recurrence
///
/// ```text
/// (l - m + 1) P_{l+1}^m = (2l + 1) x P_l^m - (l + m) P_{l-1}^m
/// ```
///
/// Negative orders use the standard symmetry relation
/// P_l^{-m} = (-1)^m (l-m)!/(l+m)! P_l^m, with the factorial ratio computed
/// as a running product. The Condon-Shortley phase is carried by the
/// diagonal term. Results are finite at x = ±1 for every valid (l, m).
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
    if x.abs() > 1.0 + ARGUMENT_SLACK {
        return Err(DomainError::LegendreArgument { x });
    }
    let x = x.clamp(-1.0, 1.0);

    if m < 0 {
        let m_pos = m.unsigned_abs();
        let positive = associated_legendre(m_pos as i32, l, x)?;
        // (l - m)! / (l + m)! as a running product over (l-m, l+m].
        let mut ratio = 1.0;
        for k in (l - m_pos + 1)..=(l + m_pos) {
            ratio /= k as f64;
        }
        let sign = if m_pos % 2 == 0 { 1.0 } else { -1.0 };
        return Ok(sign * ratio * positive);
    }

    let m = m as u32;
    if m == 0 {
        return Ok(legendre(l, x));
    }

    // P_m^m, built as a product of -(2k - 1) * sqrt(1 - x²) factors.
    let sqrt_term = (1.0 - x * x).max(0.0).sqrt();
    let mut p_mm = 1.0;
    for k in 1..=m {
        p_mm *= -((2 * k - 1) as f64) * sqrt_term;
    }
    if l == m {
        return Ok(p_mm);
    }

    // P_{m+1}^m = x (2m + 1) P_m^m, then upward recurrence in l.
    let mut prev2 = p_mm;
    let mut prev1 = x * (2 * m + 1) as f64 * p_mm;
    for k in (m + 1)..l {
        let kf = k as f64;
        let mf = m as f64;
        let next = ((2.0 * kf + 1.0) * x * prev1 - (kf + mf) * prev2) / (kf - mf + 1.0);
        prev2 = prev1;
        prev1 = next;
    }
    Ok(prev1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-10;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn order_zero_degree_zero_is_one() {
        assert_eq!(associated_legendre(0, 0, 0.5).unwrap(), 1.0);
    }

    #[test]
    fn order_zero_degree_one_is_identity() {
        assert_eq!(associated_legendre(0, 1, 0.5).unwrap(), 0.5);
    }

    #[test]
    fn second_legendre_polynomial_at_one_half() {
        // P_2(x) = (3x² - 1)/2
        assert!(f64_approx_equal(
            associated_legendre(0, 2, 0.5).unwrap(),
            -0.125
        ));
    }

    #[test]
    fn third_legendre_polynomial_at_one_half() {
        // P_3(x) = (5x³ - 3x)/2
        assert!(f64_approx_equal(
            associated_legendre(0, 3, 0.5).unwrap(),
            -0.4375
        ));
    }

    #[test]
    fn diagonal_term_carries_condon_shortley_phase() {
        // P_1^1(x) = -sqrt(1 - x²)
        assert!(f64_approx_equal(
            associated_legendre(1, 1, 0.5).unwrap(),
            -(0.75f64).sqrt()
        ));
    }

    #[test]
    fn first_off_diagonal_term() {
        // P_2^1(x) = -3x sqrt(1 - x²)
        assert!(f64_approx_equal(
            associated_legendre(1, 2, 0.5).unwrap(),
            -1.5 * (0.75f64).sqrt()
        ));
    }

    #[test]
    fn full_order_term() {
        // P_2^2(x) = 3 (1 - x²)
        assert!(f64_approx_equal(
            associated_legendre(2, 2, 0.5).unwrap(),
            2.25
        ));
    }

    #[test]
    fn negative_order_uses_symmetry_relation() {
        // P_2^{-1} = -(1/6) P_2^1
        let positive = associated_legendre(1, 2, 0.5).unwrap();
        let negative = associated_legendre(-1, 2, 0.5).unwrap();
        assert!(f64_approx_equal(negative, -positive / 6.0));
    }

    #[test]
    fn order_zero_is_finite_at_poles() {
        for l in 0..8u32 {
            let at_north = associated_legendre(0, l, 1.0).unwrap();
            let at_south = associated_legendre(0, l, -1.0).unwrap();
            assert!(at_north.is_finite() && at_south.is_finite());
            // P_l(1) = 1, P_l(-1) = (-1)^l
            assert!(f64_approx_equal(at_north, 1.0));
            let expected = if l % 2 == 0 { 1.0 } else { -1.0 };
            assert!(f64_approx_equal(at_south, expected));
        }
    }

    #[test]
    fn nonzero_order_vanishes_at_poles() {
        assert!(f64_approx_equal(associated_legendre(1, 3, 1.0).unwrap(), 0.0));
        assert!(f64_approx_equal(
            associated_legendre(2, 4, -1.0).unwrap(),
            0.0
        ));
    }

    #[test]
    fn argument_within_slack_is_clamped() {
        assert!(associated_legendre(0, 2, 1.0 + 1e-14).is_ok());
    }

    #[test]
    fn argument_outside_domain_fails() {
        assert!(matches!(
            associated_legendre(0, 2, 1.5),
            Err(DomainError::LegendreArgument { .. })
        ));
    }

    #[test]
    fn order_above_degree_fails() {
        assert_eq!(
            associated_legendre(3, 2, 0.5),
            Err(DomainError::LegendreOrder { m: 3, l: 2 })
        );
        assert_eq!(
            associated_legendre(-3, 2, 0.5),
            Err(DomainError::LegendreOrder { m: -3, l: 2 })
        );
    }

    #[cfg(feature = "library")]
    #[test]
    fn recurrence_matches_explicit_series_across_domain() {
        use crate::engine::library::special;
        for l in 0..=8u32 {
            for m in -(l as i32)..=(l as i32) {
                for &x in &[-1.0, -0.75, -0.5, 0.0, 0.3, 0.5, 0.9, 1.0] {
                    let recurrence = associated_legendre(m, l, x).unwrap();
                    let series = special::associated_legendre(m, l, x).unwrap();
                    assert!(
                        (recurrence - series).abs() < 1e-10 * series.abs().max(1.0),
                        "P_{l}^{m}({x}): {recurrence} vs {series}"
                    );
                }
            }
        }
    }
}
