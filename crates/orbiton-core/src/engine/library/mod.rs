//! Optimized-library backend implementations.
//!
//! Mirrors the call contract of the self-contained core with independent
//! algorithms on top of external crates: `statrs` supplies the
//! factorial/gamma primitives behind the special functions (with the
//! polynomials evaluated by their explicit closed-form series), and
//! `nalgebra` supplies the geometry. The whole module exists only when the
//! `library` cargo feature is enabled.

pub(crate) mod geometry;
pub(crate) mod special;
