use crate::core::error::DomainError;
use crate::core::geometry::rotation::Mat3;
use crate::core::geometry::vector::Vec3;
use nalgebra::{Matrix3, Rotation3, Unit, Vector3};

fn to_na(v: Vec3) -> Vector3<f64> {
    Vector3::new(v.x, v.y, v.z)
}

fn from_na(v: &Vector3<f64>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

fn mat_from_na(m: &Matrix3<f64>) -> Mat3 {
    Mat3([
        [m[(0, 0)], m[(0, 1)], m[(0, 2)]],
        [m[(1, 0)], m[(1, 1)], m[(1, 2)]],
        [m[(2, 0)], m[(2, 1)], m[(2, 2)]],
    ])
}

fn mat_to_na(m: &Mat3) -> Matrix3<f64> {
    Matrix3::new(
        m.0[0][0], m.0[0][1], m.0[0][2], m.0[1][0], m.0[1][1], m.0[1][2], m.0[2][0], m.0[2][1],
        m.0[2][2],
    )
}

pub fn dot(a: Vec3, b: Vec3) -> f64 {
    to_na(a).dot(&to_na(b))
}

pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    from_na(&to_na(a).cross(&to_na(b)))
}

pub fn length(v: Vec3) -> f64 {
    to_na(v).norm()
}

pub fn normalized(v: Vec3) -> Result<Vec3, DomainError> {
    let vector = to_na(v);
    if vector.norm() == 0.0 {
        return Err(DomainError::ZeroLengthVector);
    }
    Ok(from_na(&vector.normalize()))
}

/// Same component expressions as the self-contained path, so the two
/// backends agree bit-for-bit and the position generators stay
/// backend-independent.
pub fn from_spherical(r: f64, theta: f64, phi: f64) -> Vec3 {
    let sin_theta = theta.sin();
    Vec3::new(
        r * sin_theta * phi.cos(),
        r * sin_theta * phi.sin(),
        r * theta.cos(),
    )
}

pub fn rotation_x(angle: f64) -> Mat3 {
    mat_from_na(Rotation3::from_axis_angle(&Vector3::x_axis(), angle).matrix())
}

pub fn rotation_y(angle: f64) -> Mat3 {
    mat_from_na(Rotation3::from_axis_angle(&Vector3::y_axis(), angle).matrix())
}

pub fn rotation_z(angle: f64) -> Mat3 {
    mat_from_na(Rotation3::from_axis_angle(&Vector3::z_axis(), angle).matrix())
}

pub fn rotation_axis_angle(axis: Vec3, angle: f64) -> Result<Mat3, DomainError> {
    let vector = to_na(axis);
    if vector.norm() == 0.0 {
        return Err(DomainError::ZeroLengthVector);
    }
    let unit = Unit::new_normalize(vector);
    Ok(mat_from_na(Rotation3::from_axis_angle(&unit, angle).matrix()))
}

/// nalgebra's Euler convention is the same fixed Rz(yaw) * Ry(pitch) *
/// Rx(roll) order the contract documents.
pub fn rotation_euler(roll: f64, pitch: f64, yaw: f64) -> Mat3 {
    mat_from_na(Rotation3::from_euler_angles(roll, pitch, yaw).matrix())
}

pub fn mat_mul(a: &Mat3, b: &Mat3) -> Mat3 {
    mat_from_na(&(mat_to_na(a) * mat_to_na(b)))
}

pub fn mat_apply(m: &Mat3, v: Vec3) -> Vec3 {
    from_na(&(mat_to_na(m) * to_na(v)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn nalgebra_rotation_matches_axis_convention() {
        let rotated = mat_apply(&rotation_x(PI / 2.0), Vec3::unit_y());
        assert!((rotated - Vec3::unit_z()).length() < TOLERANCE);
    }

    #[test]
    fn euler_order_is_z_y_x() {
        let (roll, pitch, yaw) = (0.3, -0.7, 1.9);
        let composed = rotation_euler(roll, pitch, yaw);
        let explicit = mat_mul(&rotation_z(yaw), &mat_mul(&rotation_y(pitch), &rotation_x(roll)));
        for (a, b) in composed.0.iter().flatten().zip(explicit.0.iter().flatten()) {
            assert!((a - b).abs() < TOLERANCE);
        }
    }

    #[test]
    fn zero_axis_fails() {
        assert!(matches!(
            rotation_axis_angle(Vec3::zero(), 1.0),
            Err(DomainError::ZeroLengthVector)
        ));
    }

    #[test]
    fn spherical_construction_is_bitwise_identical_to_core() {
        for &(r, theta, phi) in &[(1.0, 0.3, 0.9), (2.5, 1.8, 4.4), (0.0, 0.0, 0.0)] {
            let here = from_spherical(r, theta, phi);
            let core = Vec3::from_spherical(r, theta, phi);
            assert_eq!(here, core);
        }
    }
}
