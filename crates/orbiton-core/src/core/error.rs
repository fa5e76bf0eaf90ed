use thiserror::Error;

/// An input outside a function's valid mathematical domain.
///
/// Domain errors are never recovered internally; they surface to the caller,
/// who decides whether to retry with corrected input.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("factorial of {n} overflows f64 (maximum supported n is {max})")]
    FactorialOverflow { n: u64, max: u64 },

    #[error("double factorial of {n} overflows f64")]
    DoubleFactorialOverflow { n: u64 },

    #[error("binomial coefficient requires k <= n, got n = {n}, k = {k}")]
    BinomialOrder { n: u64, k: u64 },

    #[error("gamma(n/2) has a pole at n = 0")]
    GammaPole,

    #[error("associated Legendre function requires |m| <= l, got m = {m}, l = {l}")]
    LegendreOrder { m: i32, l: u32 },

    #[error("associated Legendre function requires |x| <= 1, got x = {x}")]
    LegendreArgument { x: f64 },

    #[error("{name} expects a finite argument, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("cannot normalize a zero-length vector")]
    ZeroLengthVector,

    #[error("radial wavefunction requires n >= 1 and l < n, got n = {n}, l = {l}")]
    QuantumNumbers { n: u32, l: u32 },

    #[error("radius must be non-negative, got {r}")]
    NegativeRadius { r: f64 },

    #[error("nuclear charge must be positive and finite, got {z}")]
    NonPositiveCharge { z: f64 },
}
