use super::vector::Vec3;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A 3x3 matrix in row-major order.
///
/// Matrices produced by the rotation builders are orthogonal to within
/// numerical tolerance, and the product of two rotation matrices is again a
/// rotation matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mat3(pub [[f64; 3]; 3]);

impl Mat3 {
    pub const fn identity() -> Self {
        Self([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Rotation about the x-axis by `angle` radians, right-handed.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
    }

    /// Rotation about the y-axis by `angle` radians, right-handed.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self([[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]])
    }

    /// Rotation about the z-axis by `angle` radians, right-handed.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Rotation about an arbitrary axis via Rodrigues' formula.
    ///
    /// The axis is normalized internally; a zero-length axis is a domain
    /// error.
    pub fn rotation_axis_angle(axis: Vec3, angle: f64) -> Result<Self, DomainError> {
        let unit = axis.normalized()?;
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        let (x, y, z) = (unit.x, unit.y, unit.z);
        Ok(Self([
            [t * x * x + c, t * x * y - s * z, t * x * z + s * y],
            [t * x * y + s * z, t * y * y + c, t * y * z - s * x],
            [t * x * z - s * y, t * y * z + s * x, t * z * z + c],
        ]))
    }

    /// Composition of the three axis rotations in the fixed order
    /// Rz(yaw) * Ry(pitch) * Rx(roll).
    ///
    /// The order is a contract callers depend on; it matches the intrinsic
    /// roll-pitch-yaw convention and must not change.
    pub fn rotation_euler(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self::rotation_z(yaw).mul(&Self::rotation_y(pitch).mul(&Self::rotation_x(roll)))
    }

    /// Matrix product self * other.
    pub fn mul(&self, other: &Mat3) -> Mat3 {
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.0[i][k] * other.0[k][j]).sum();
            }
        }
        Mat3(out)
    }

    /// Applies the matrix to a vector.
    pub fn apply(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.0[0][0] * v.x + self.0[0][1] * v.y + self.0[0][2] * v.z,
            self.0[1][0] * v.x + self.0[1][1] * v.y + self.0[1][2] * v.z,
            self.0[2][0] * v.x + self.0[2][1] * v.y + self.0[2][2] * v.z,
        )
    }

    pub fn transpose(&self) -> Mat3 {
        let m = &self.0;
        Mat3([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Whether the columns are unit length and mutually perpendicular to
    /// within `tolerance`.
    pub fn is_orthogonal(&self, tolerance: f64) -> bool {
        let product = self.mul(&self.transpose());
        let identity = Mat3::identity();
        product
            .0
            .iter()
            .flatten()
            .zip(identity.0.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}
