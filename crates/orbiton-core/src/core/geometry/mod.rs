//! # Geometry Module
//!
//! The self-contained Vector/Rotation Library: an immutable 3-component
//! vector value type and 3x3 rotation matrices with per-axis, axis-angle
//! (Rodrigues), and Euler-angle builders.
//!
//! Spherical coordinates follow the physics convention throughout: theta is
//! the polar angle measured from the positive z-axis, phi the azimuthal
//! angle from the positive x-axis. Rotations use the right-handed
//! convention, and Euler composition is fixed as Rz(yaw) * Ry(pitch) *
//! Rx(roll) - callers depend on that order.

pub mod rotation;
pub mod vector;
