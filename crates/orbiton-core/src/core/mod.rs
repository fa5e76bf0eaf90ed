//! # Core Module
//!
//! This module provides the pure, stateless numerical foundations of the
//! library: the self-contained Special-Function Library and the
//! self-contained Vector/Rotation Library, serving as the computational core
//! that the backend machinery and the public workflows are built on.
//!
//! ## Overview
//!
//! Everything in this module is dependency-free, synchronous computation.
//! The only cross-call state is the factorial memoization table, which is
//! filled once and read-only afterwards; every function here may be invoked
//! concurrently from multiple threads without coordination.
//!
//! ## Architecture
//!
//! - **Special Functions** ([`special`]) - factorials, binomial coefficients,
//!   half-integer gamma values, generalized Laguerre polynomials, associated
//!   Legendre functions, and complex/real spherical harmonics
//! - **Geometry** ([`geometry`]) - the `Vec3` value type and `Mat3` rotation
//!   matrices with per-axis, axis-angle, and Euler-angle builders
//! - **Error Types** ([`error`]) - domain errors shared by both libraries
//!
//! ## Numerical Contract
//!
//! Out-of-domain inputs fail with a [`error::DomainError`] at the boundary;
//! no function returns NaN or silently wrong values for rejected input. The
//! algorithms favor numerically stable recurrences over explicit series so
//! that results match the optimized-library backend to near machine
//! precision across the operating range.

pub mod error;
pub mod geometry;
pub mod special;
