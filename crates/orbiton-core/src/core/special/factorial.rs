use crate::core::error::DomainError;
use std::sync::OnceLock;

/// Largest n for which n! is representable as a finite f64.
pub const MAX_FACTORIAL: u64 = 170;

/// Memoization table for the factorial function.
///
/// The full valid domain (n <= 170) is materialized on first access and kept
/// for the process lifetime; there is no eviction, since the table is 171
/// entries and the evaluators call into it at high frequency. Reads after
/// initialization never block.
#[derive(Debug, Default)]
pub struct FactorialCache {
    table: OnceLock<Vec<f64>>,
}

impl FactorialCache {
    pub const fn new() -> Self {
        Self {
            table: OnceLock::new(),
        }
    }

    fn table(&self) -> &[f64] {
        self.table.get_or_init(|| {
            let mut table = Vec::with_capacity(MAX_FACTORIAL as usize + 1);
            let mut acc = 1.0;
            table.push(acc);
            for i in 1..=MAX_FACTORIAL {
                acc *= i as f64;
                table.push(acc);
            }
            table
        })
    }

    pub fn get(&self, n: u64) -> Option<f64> {
        self.table().get(n as usize).copied()
    }
}

static FACTORIALS: FactorialCache = FactorialCache::new();

/// Computes n!.
///
/// Exact for results below 2^53 (n <= 22) and correct to f64 precision up to
/// [`MAX_FACTORIAL`]; larger arguments fail rather than overflow to infinity.
#[inline]
pub fn factorial(n: u64) -> Result<f64, DomainError> {
    FACTORIALS.get(n).ok_or(DomainError::FactorialOverflow {
        n,
        max: MAX_FACTORIAL,
    })
}

/// Computes the double factorial n!! = n * (n-2) * (n-4) * ... with
/// 0!! = 1!! = 1.
pub fn double_factorial(n: u64) -> Result<f64, DomainError> {
    let mut acc = 1.0;
    let mut current = n;
    while current > 1 {
        acc *= current as f64;
        current -= 2;
    }
    if acc.is_finite() {
        Ok(acc)
    } else {
        Err(DomainError::DoubleFactorialOverflow { n })
    }
}

/// Computes the binomial coefficient C(n, k).
///
/// Uses the multiplicative formula with interleaved multiply-divide steps so
/// intermediate values never exceed the result itself; exact for results
/// below 2^53.
pub fn binomial(n: u64, k: u64) -> Result<f64, DomainError> {
    if k > n {
        return Err(DomainError::BinomialOrder { n, k });
    }
    let k = k.min(n - k);
    let mut acc = 1.0;
    for i in 1..=k {
        acc = acc * (n - k + i) as f64 / i as f64;
    }
    Ok(acc)
}

/// Computes Γ(n/2) for integer n >= 1.
///
/// Uses the closed-form relation to double factorials and √π instead of a
/// general gamma algorithm, which keeps the restricted half-integer domain
/// exact: Γ(k) = (k-1)! for even n = 2k, and
/// Γ(k + 1/2) = (2k-1)!!/2^k * √π for odd n = 2k+1.
pub fn gamma_half_integer(n: u64) -> Result<f64, DomainError> {
    if n == 0 {
        return Err(DomainError::GammaPole);
    }
    let k = n / 2;
    if n % 2 == 0 {
        factorial(k - 1)
    } else if k == 0 {
        Ok(std::f64::consts::PI.sqrt())
    } else {
        let numerator = double_factorial(2 * k - 1)?;
        Ok(numerator / (2.0f64).powi(k as i32) * std::f64::consts::PI.sqrt())
    }
}
