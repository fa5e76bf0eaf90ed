use crate::core::error::DomainError;
use crate::core::geometry::rotation::Mat3;
use crate::core::geometry::vector::Vec3;
use crate::core::special::{factorial, harmonics, laguerre, legendre};
use crate::engine::error::EngineError;
use crate::engine::validation::{self, ValidationReport};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU8, Ordering};

/// A concrete implementation choice behind the numerical call contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Backend {
    /// The dependency-free implementations in [`crate::core`].
    SelfContained,
    /// The optimized external-library implementations (statrs, nalgebra).
    Library,
}

impl Backend {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => Backend::SelfContained,
            _ => Backend::Library,
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::SelfContained => write!(f, "self-contained"),
            Backend::Library => write!(f, "library"),
        }
    }
}

/// The independently switchable portions of the numerical core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Subsystem {
    /// Factorials, polynomials, spherical harmonics.
    SpecialFunctions,
    /// Vector operations and rotation matrices.
    Geometry,
}

/// Dispatches a call on the current backend of one subsystem.
///
/// The `Library` arm only exists when the feature is compiled in; without it
/// the registry can never hold that selection, so the arm is statically
/// unreachable.
macro_rules! dispatch {
    ($self:ident, $subsystem:ident, $self_contained:expr, $library:expr $(,)?) => {
        match $self.current(Subsystem::$subsystem) {
            Backend::SelfContained => $self_contained,
            #[cfg(feature = "library")]
            Backend::Library => $library,
            #[cfg(not(feature = "library"))]
            Backend::Library => {
                unreachable!("library backend selected without the `library` feature")
            }
        }
    };
}

/// Per-subsystem selection between the self-contained and the
/// optimized-library implementations, exposing a uniform call contract.
///
/// The registry is an explicit, injectable value - not a process-wide
/// singleton - so independent instances carry independent selections.
/// Selection state is one atomic cell per subsystem under a
/// single-writer/many-reader discipline: reads never block and every
/// dispatched call re-reads the selection, so a switch is visible to the
/// next call. Each instance resolves its defaults at construction: the
/// library backend when it is compiled in, otherwise the self-contained
/// fallback, which is always complete.
#[derive(Debug)]
pub struct BackendRegistry {
    special_functions: AtomicU8,
    geometry: AtomicU8,
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BackendRegistry {
    pub fn new() -> Self {
        let default_backend = if Self::library_available() {
            Backend::Library
        } else {
            Backend::SelfContained
        };
        Self::with_backend(default_backend)
    }

    /// Builds a registry with both subsystems set to `backend`.
    ///
    /// Unlike [`BackendRegistry::select`], this does not verify
    /// availability; use it only with a backend known to exist.
    fn with_backend(backend: Backend) -> Self {
        Self {
            special_functions: AtomicU8::new(backend as u8),
            geometry: AtomicU8::new(backend as u8),
        }
    }

    /// Whether the optimized-library backend was compiled into this build.
    pub const fn library_available() -> bool {
        cfg!(feature = "library")
    }

    fn cell(&self, subsystem: Subsystem) -> &AtomicU8 {
        match subsystem {
            Subsystem::SpecialFunctions => &self.special_functions,
            Subsystem::Geometry => &self.geometry,
        }
    }

    /// Switches one subsystem to `backend`, returning the previous
    /// selection.
    ///
    /// Requesting the library backend when it is not compiled in fails with
    /// [`EngineError::LibraryUnavailable`] and leaves the selection
    /// unchanged; the caller decides whether to fall back or report.
    pub fn select(&self, subsystem: Subsystem, backend: Backend) -> Result<Backend, EngineError> {
        if backend == Backend::Library && !Self::library_available() {
            return Err(EngineError::LibraryUnavailable);
        }
        let previous = self.cell(subsystem).swap(backend as u8, Ordering::Release);
        Ok(Backend::from_u8(previous))
    }

    /// The backend currently serving `subsystem`.
    pub fn current(&self, subsystem: Subsystem) -> Backend {
        Backend::from_u8(self.cell(subsystem).load(Ordering::Acquire))
    }

    /// Executes the fixed dual-backend input battery and reports the
    /// per-function divergence against `tolerance`.
    ///
    /// Both implementations are evaluated directly, so the active selection
    /// is never touched and the caller observes no side effect. Divergence
    /// beyond tolerance is reported in the result, not raised as an error;
    /// only the absence of the library backend fails.
    pub fn validate(&self, tolerance: f64) -> Result<ValidationReport, EngineError> {
        validation::run_battery(tolerance)
    }

    // --- Special-function call contract ---

    pub fn factorial(&self, n: u64) -> Result<f64, DomainError> {
        dispatch!(
            self,
            SpecialFunctions,
            factorial::factorial(n),
            crate::engine::library::special::factorial(n),
        )
    }

    pub fn double_factorial(&self, n: u64) -> Result<f64, DomainError> {
        dispatch!(
            self,
            SpecialFunctions,
            factorial::double_factorial(n),
            crate::engine::library::special::double_factorial(n),
        )
    }

    pub fn binomial(&self, n: u64, k: u64) -> Result<f64, DomainError> {
        dispatch!(
            self,
            SpecialFunctions,
            factorial::binomial(n, k),
            crate::engine::library::special::binomial(n, k),
        )
    }

    pub fn gamma_half_integer(&self, n: u64) -> Result<f64, DomainError> {
        dispatch!(
            self,
            SpecialFunctions,
            factorial::gamma_half_integer(n),
            crate::engine::library::special::gamma_half_integer(n),
        )
    }

    pub fn generalized_laguerre(&self, n: u32, alpha: f64, x: f64) -> Result<f64, DomainError> {
        dispatch!(
            self,
            SpecialFunctions,
            laguerre::generalized_laguerre(n, alpha, x),
            crate::engine::library::special::generalized_laguerre(n, alpha, x),
        )
    }

    pub fn associated_legendre(&self, m: i32, l: u32, x: f64) -> Result<f64, DomainError> {
        dispatch!(
            self,
            SpecialFunctions,
            legendre::associated_legendre(m, l, x),
            crate::engine::library::special::associated_legendre(m, l, x),
        )
    }

    pub fn spherical_harmonic(
        &self,
        l: u32,
        m: i32,
        theta: f64,
        phi: f64,
    ) -> Result<Complex64, DomainError> {
        dispatch!(
            self,
            SpecialFunctions,
            harmonics::spherical_harmonic(l, m, theta, phi),
            crate::engine::library::special::spherical_harmonic(l, m, theta, phi),
        )
    }

    pub fn spherical_harmonic_real(
        &self,
        l: u32,
        m: i32,
        theta: f64,
        phi: f64,
    ) -> Result<f64, DomainError> {
        dispatch!(
            self,
            SpecialFunctions,
            harmonics::spherical_harmonic_real(l, m, theta, phi),
            crate::engine::library::special::spherical_harmonic_real(l, m, theta, phi),
        )
    }

    // --- Vector/rotation call contract ---

    pub fn dot(&self, a: Vec3, b: Vec3) -> f64 {
        dispatch!(
            self,
            Geometry,
            a.dot(&b),
            crate::engine::library::geometry::dot(a, b),
        )
    }

    pub fn cross(&self, a: Vec3, b: Vec3) -> Vec3 {
        dispatch!(
            self,
            Geometry,
            a.cross(&b),
            crate::engine::library::geometry::cross(a, b),
        )
    }

    pub fn length(&self, v: Vec3) -> f64 {
        dispatch!(
            self,
            Geometry,
            v.length(),
            crate::engine::library::geometry::length(v),
        )
    }

    pub fn normalized(&self, v: Vec3) -> Result<Vec3, DomainError> {
        dispatch!(
            self,
            Geometry,
            v.normalized(),
            crate::engine::library::geometry::normalized(v),
        )
    }

    pub fn from_spherical(&self, r: f64, theta: f64, phi: f64) -> Vec3 {
        dispatch!(
            self,
            Geometry,
            Vec3::from_spherical(r, theta, phi),
            crate::engine::library::geometry::from_spherical(r, theta, phi),
        )
    }

    pub fn rotation_x(&self, angle: f64) -> Mat3 {
        dispatch!(
            self,
            Geometry,
            Mat3::rotation_x(angle),
            crate::engine::library::geometry::rotation_x(angle),
        )
    }

    pub fn rotation_y(&self, angle: f64) -> Mat3 {
        dispatch!(
            self,
            Geometry,
            Mat3::rotation_y(angle),
            crate::engine::library::geometry::rotation_y(angle),
        )
    }

    pub fn rotation_z(&self, angle: f64) -> Mat3 {
        dispatch!(
            self,
            Geometry,
            Mat3::rotation_z(angle),
            crate::engine::library::geometry::rotation_z(angle),
        )
    }

    pub fn rotation_axis_angle(&self, axis: Vec3, angle: f64) -> Result<Mat3, DomainError> {
        dispatch!(
            self,
            Geometry,
            Mat3::rotation_axis_angle(axis, angle),
            crate::engine::library::geometry::rotation_axis_angle(axis, angle),
        )
    }

    pub fn rotation_euler(&self, roll: f64, pitch: f64, yaw: f64) -> Mat3 {
        dispatch!(
            self,
            Geometry,
            Mat3::rotation_euler(roll, pitch, yaw),
            crate::engine::library::geometry::rotation_euler(roll, pitch, yaw),
        )
    }

    pub fn mat_mul(&self, a: &Mat3, b: &Mat3) -> Mat3 {
        dispatch!(
            self,
            Geometry,
            a.mul(b),
            crate::engine::library::geometry::mat_mul(a, b),
        )
    }

    pub fn mat_apply(&self, m: &Mat3, v: Vec3) -> Vec3 {
        dispatch!(
            self,
            Geometry,
            m.apply(v),
            crate::engine::library::geometry::mat_apply(m, v),
        )
    }
}
