use crate::core::error::DomainError;

/// Evaluates the generalized Laguerre polynomial L_n^α(x).
///
/// Uses the three-term recurrence in n,
///
/// ```text
/// L_0^α(x) = 1
/// L_1^α(x) = 1 + α - x
/// (k + 1) L_{k+1}^α(x) = (2k + 1 + α - x) L_k^α(x) - (k + α) L_{k-1}^α(x)
/// ```
///
/// which stays numerically stable for the degrees the orbital engine needs,
/// unlike the explicit alternating-sign series.
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

    if n == 0 {
        return Ok(1.0);
    }
    if n == 1 {
        return Ok(1.0 + alpha - x);
    }

    let mut prev2 = 1.0;
    let mut prev1 = 1.0 + alpha - x;
    for k in 1..n {
        let k = k as f64;
        let next = ((2.0 * k + 1.0 + alpha - x) * prev1 - (k + alpha) * prev2) / (k + 1.0);
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
    fn degree_zero_is_constant_one() {
        assert_eq!(generalized_laguerre(0, 0.0, 3.7).unwrap(), 1.0);
        assert_eq!(generalized_laguerre(0, 2.5, -1.0).unwrap(), 1.0);
    }

    #[test]
    fn degree_one_is_linear() {
        // L_1^α(x) = 1 + α - x
        assert!(f64_approx_equal(
            generalized_laguerre(1, 0.5, 2.0).unwrap(),
            -0.5
        ));
    }

    #[test]
    fn degree_two_matches_closed_form() {
        // L_2^α(x) = x²/2 - (α + 2) x + (α + 1)(α + 2)/2
        let closed = |alpha: f64, x: f64| {
            x * x / 2.0 - (alpha + 2.0) * x + (alpha + 1.0) * (alpha + 2.0) / 2.0
        };
        for &alpha in &[0.0, 0.5, 1.0, 3.0] {
            for &x in &[0.0, 0.5, 1.0, 2.0, 5.0] {
                assert!(
                    f64_approx_equal(
                        generalized_laguerre(2, alpha, x).unwrap(),
                        closed(alpha, x)
                    ),
                    "alpha = {alpha}, x = {x}"
                );
            }
        }
    }

    #[test]
    fn plain_laguerre_at_one() {
        // L_2^0(1) = 1 - 2 + 1/2
        assert!(f64_approx_equal(
            generalized_laguerre(2, 0.0, 1.0).unwrap(),
            -0.5
        ));
    }

    #[test]
    fn value_at_origin_is_generalized_binomial() {
        // L_n^α(0) = C(n + α, n)
        let value = generalized_laguerre(3, 2.0, 0.0).unwrap();
        // C(5, 3) = 10
        assert!(f64_approx_equal(value, 10.0));
    }

    #[test]
    fn non_finite_arguments_fail() {
        assert!(generalized_laguerre(2, f64::NAN, 1.0).is_err());
        assert!(generalized_laguerre(2, 1.0, f64::INFINITY).is_err());
    }

    #[cfg(feature = "library")]
    #[test]
    fn recurrence_matches_explicit_series_across_operating_range() {
        use crate::engine::library::special;
        for n in 0..=10u32 {
            for &alpha in &[-2.5, -0.5, 0.0, 0.5, 1.0, 2.0, 5.0] {
                for &x in &[0.0, 0.25, 0.5, 1.0, 2.0, 5.0, 10.0] {
                    let recurrence = generalized_laguerre(n, alpha, x).unwrap();
                    let series = special::generalized_laguerre(n, alpha, x).unwrap();
                    assert!(
                        (recurrence - series).abs() < 1e-10 * series.abs().max(1.0),
                        "L_{n}^{alpha}({x}): {recurrence} vs {series}"
                    );
                }
            }
        }
    }
}
