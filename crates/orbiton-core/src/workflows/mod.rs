//! # Workflows Module
//!
//! The highest-level, user-facing operations of the library: deterministic
//! nucleon position generation and orbital probability evaluation. This
//! layer ties the [`crate::core`] foundations and the [`crate::engine`]
//! backend machinery together into the operations external collaborators
//! (property calculators, the rendering front end, benchmark harnesses)
//! actually consume.
//!
//! Every numerical call in this layer goes through the
//! [`crate::engine::backend::BackendRegistry`] contract, never against a
//! concrete implementation, so backend switches are transparent here and
//! downstream.

pub mod orbital;
pub mod positions;
