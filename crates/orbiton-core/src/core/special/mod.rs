//! # Special Functions Module
//!
//! Self-contained evaluators for the special mathematical functions used by
//! the orbital engine: factorials and binomial coefficients, the gamma
//! function at half-integer arguments, generalized Laguerre polynomials,
//! associated Legendre functions, and complex/real spherical harmonics.
//!
//! ## Overview
//!
//! These implementations depend on nothing but the standard library and are
//! interchangeable with the optimized-library backend to better than 1e-10
//! relative error over the operating range (polynomial degree up to ~10,
//! |alpha| up to ~5, the full |m| <= l, |x| <= 1 Legendre domain).
//!
//! ## Key Components
//!
//! - [`factorial`] - memoized factorial, double factorial, multiplicative
//!   binomial coefficient, and closed-form Γ(n/2)
//! - [`laguerre`] - generalized Laguerre polynomials via the stable
//!   three-term recurrence
//! - [`legendre`] - Legendre and associated Legendre functions via upward
//!   recurrence, with the negative-order symmetry relation
//! - [`harmonics`] - spherical harmonics combining the normalization
//!   prefactor, the Legendre evaluator, and the azimuthal phase factor

pub mod factorial;
pub mod harmonics;
pub mod laguerre;
pub mod legendre;
