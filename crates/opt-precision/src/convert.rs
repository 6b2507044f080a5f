//! Conversions between the active family and `f64`.
//!
//! The reference least-squares solver works in double precision; these are
//! the only sanctioned crossing points between its values and ours.

use glam::DVec3;

use crate::{Scalar, Vector3};

/// Widens a [`Scalar`] to `f64`. Lossless in both families.
#[inline]
#[allow(clippy::unnecessary_cast)]
pub fn widen(x: Scalar) -> f64 {
    x as f64
}

/// Converts an `f64` to [`Scalar`], rounding to nearest in single precision.
#[inline]
#[allow(clippy::unnecessary_cast)]
pub fn narrow(x: f64) -> Scalar {
    x as Scalar
}

/// Widens a [`Vector3`] to `DVec3`.
#[inline]
pub fn widen3(v: Vector3) -> DVec3 {
    DVec3::new(widen(v.x), widen(v.y), widen(v.z))
}

/// Converts a `DVec3` to [`Vector3`], component-wise [`narrow`].
#[inline]
pub fn narrow3(v: DVec3) -> Vector3 {
    Vector3::new(narrow(v.x), narrow(v.y), narrow(v.z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widen_is_exact() {
        let x: Scalar = 0.1;
        assert_eq!(narrow(widen(x)), x);
    }

    #[test]
    fn narrow3_rounds_each_component() {
        let v = narrow3(DVec3::new(1.0 / 3.0, 2.0, -0.5));
        assert_eq!(v.x, narrow(1.0 / 3.0));
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, -0.5);
    }
}
