//! Basic vector math helper functions.
//! Helpers for turning planar directions into orientations.
use std::f32::consts::PI;

use glam::{Quat, Vec3};

/// Dot product below which two unit vectors count as opposite.
const ANTIPARALLEL_DOT: f32 = -1.0 + 1e-6;

/// Returns the shortest-arc rotation carrying `reference` onto `direction`.
///
/// Both vectors are normalised first. When they point in opposite directions
/// the rotation is half a turn about the world up axis, so characters walking
/// on the ground plane never end up upside down. A zero `direction` yields
/// the identity.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use professor_walk::vector_math::heading_rotation;
///
/// let rotation = heading_rotation(Vec3::Z, Vec3::X);
/// assert!((rotation * Vec3::Z - Vec3::X).length() < 1e-5);
///
/// let about_face = heading_rotation(Vec3::NEG_Z, Vec3::Z);
/// assert!((about_face * Vec3::Y - Vec3::Y).length() < 1e-5);
/// ```
#[must_use]
pub fn heading_rotation(reference: Vec3, direction: Vec3) -> Quat {
    let from = reference.normalize_or_zero();
    let to = direction.normalize_or_zero();
    if from == Vec3::ZERO || to == Vec3::ZERO {
        return Quat::IDENTITY;
    }

    if from.dot(to) < ANTIPARALLEL_DOT {
        Quat::from_axis_angle(Vec3::Y, PI)
    } else {
        Quat::from_rotation_arc(from, to)
    }
}

/// Returns the unit vector of `vector`, or zero for zero and non-finite input.
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use professor_walk::vec_normalize;
/// let n = vec_normalize(Vec3::new(3.0, 0.0, 4.0));
/// assert!((n.x - 0.6).abs() < 1e-6);
/// assert!((n.z - 0.8).abs() < 1e-6);
///
/// assert_eq!(vec_normalize(Vec3::ZERO), Vec3::ZERO);
/// ```
#[must_use]
pub fn vec_normalize(vector: Vec3) -> Vec3 {
    if !vector.is_finite() {
        return Vec3::ZERO;
    }
    vector.try_normalize().unwrap_or(Vec3::ZERO)
}
