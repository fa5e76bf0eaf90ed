//! # Orbiton Core Library
//!
//! A dual-backend numerical core for particle property prediction and
//! electron-orbital visualization: special mathematical functions, 3D
//! vector/rotation math, deterministic nucleon position sampling, and the
//! orbital-probability engine built on top of them.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains the pure, stateless,
//!   dependency-free implementations: the Special-Function Library
//!   (factorials, Laguerre and Legendre polynomials, spherical harmonics)
//!   and the Vector/Rotation Library (`Vec3`, `Mat3`).
//!
//! - **[`engine`]: The Logic Core.** This layer owns the backend machinery:
//!   the per-subsystem [`engine::backend::BackendRegistry`] that selects at
//!   call time between the self-contained implementations and the
//!   optimized-library implementations, and the validation battery that
//!   quantifies how closely the two backends agree.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing
//!   operations: seeded nucleon position generation and orbital probability
//!   evaluation. These call exclusively through the engine's
//!   backend-agnostic contract, so swapping backends is transparent to them
//!   and to everything downstream.

pub mod core;
pub mod engine;
pub mod workflows;
