//! Scalar and vector type aliases.

use nalgebra::Vector3;

/// Scalar type used throughout the library (currently `f64`).
pub type Real = f64;

/// 3D joint coordinate with [`Real`] components.
pub type Vec3 = Vector3<Real>;

/// Returns `true` if every component of `v` is finite.
#[inline]
pub fn is_finite(v: &Vec3) -> bool {
    v.iter().all(|c| c.is_finite())
}
