//! # Engine Module
//!
//! This module owns the backend machinery that makes the numerical core
//! dual-pathway: a per-subsystem registry selecting between the
//! self-contained implementations in [`crate::core`] and the
//! optimized-library implementations, and a validation battery that
//! quantifies how closely the two agree.
//!
//! ## Overview
//!
//! Every operation of the Special-Function and Vector/Rotation libraries is
//! exposed here as a backend-agnostic call on
//! [`backend::BackendRegistry`]. The registry reads its selection at every
//! call, so a switch takes effect immediately; callers above this layer
//! (position generation, the orbital engine, external collaborators) never
//! touch a concrete implementation directly.
//!
//! ## Architecture
//!
//! - **Backend Selection** ([`backend`]) - the `Backend`/`Subsystem` enums
//!   and the injectable `BackendRegistry` with its dispatched call contract
//! - **Optimized-Library Implementations** ([`library`], feature `library`) -
//!   statrs-based special functions and nalgebra-based geometry
//! - **Validation** ([`validation`]) - the fixed dual-backend input battery
//!   and its per-function divergence report
//! - **Error Handling** ([`error`]) - engine-level error types
//!
//! ## Availability
//!
//! The optimized-library backend is compiled in by the default-on cargo
//! feature `library`. Without it the self-contained path is a complete,
//! correct fallback: the registry resolves to it silently, and only an
//! explicit request for the library backend fails.

pub mod backend;
pub mod error;
#[cfg(feature = "library")]
pub(crate) mod library;
pub mod validation;
