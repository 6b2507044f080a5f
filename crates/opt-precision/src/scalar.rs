//! Scalar and vector type aliases for the solver.
//!
//! All four aliases are selected by the `double-precision` Cargo feature.
//! Feature unification gives every crate in a build the same answer, so
//! residual, Jacobian and energy code written against these names always
//! agrees on width.
//!
//! | alias     | default (`f32`) | `double-precision` (`f64`) |
//! |-----------|-----------------|----------------------------|
//! | `Scalar`  | `f32`           | `f64`                      |
//! | `Vector2` | `glam::Vec2`    | `glam::DVec2`              |
//! | `Vector3` | `glam::Vec3`    | `glam::DVec3`              |
//! | `Vector4` | `glam::Vec4`    | `glam::DVec4`              |
//!
//! Every vector is tightly packed: `size_of::<VectorN>() == N * size_of::<Scalar>()`.
//! In single precision `Vector4` is 16-byte aligned on SIMD targets, which
//! adds no padding since 16 bytes is its packed size. Every other vector is
//! aligned to `Scalar`.

use core::mem::{align_of, size_of};

/// `true` when the crate is built with the `double-precision` feature.
pub const DOUBLE_PRECISION: bool = cfg!(feature = "double-precision");

/// The floating-point type used throughout the solver.
#[cfg(not(feature = "double-precision"))]
pub type Scalar = f32;

/// 2-component point, direction or gradient.
#[cfg(not(feature = "double-precision"))]
pub type Vector2 = glam::Vec2;

/// 3-component point, direction or gradient.
#[cfg(not(feature = "double-precision"))]
pub type Vector3 = glam::Vec3;

/// 4-component vector, usually homogeneous coordinates.
#[cfg(not(feature = "double-precision"))]
pub type Vector4 = glam::Vec4;

/// The floating-point type used throughout the solver.
#[cfg(feature = "double-precision")]
pub type Scalar = f64;

/// 2-component point, direction or gradient.
#[cfg(feature = "double-precision")]
pub type Vector2 = glam::DVec2;

/// 3-component point, direction or gradient.
#[cfg(feature = "double-precision")]
pub type Vector3 = glam::DVec3;

/// 4-component vector, usually homogeneous coordinates.
#[cfg(feature = "double-precision")]
pub type Vector4 = glam::DVec4;

/// Width of [`Scalar`] in bytes.
pub const SCALAR_BYTES: usize = if DOUBLE_PRECISION { 8 } else { 4 };

// Build fails if any alias drifts out of the selected family.
const _: () = assert!(size_of::<Scalar>() == SCALAR_BYTES);
const _: () = assert!(size_of::<Vector2>() == 2 * SCALAR_BYTES);
const _: () = assert!(size_of::<Vector3>() == 3 * SCALAR_BYTES);
const _: () = assert!(size_of::<Vector4>() == 4 * SCALAR_BYTES);
const _: () = assert!(align_of::<Vector2>() == align_of::<Scalar>());
const _: () = assert!(align_of::<Vector3>() == align_of::<Scalar>());
const _: () = assert!(align_of::<Vector4>() % align_of::<Scalar>() == 0);

/// Compile-time check that the active precision is the one a crate was written for.
///
/// Place it at module level in any crate whose kernels assume a width:
///
/// ```
/// # #[cfg(not(feature = "double-precision"))]
/// opt_precision::assert_precision!(f32);
/// # #[cfg(feature = "double-precision")]
/// opt_precision::assert_precision!(f64);
/// ```
///
/// Naming the family the build was not compiled with fails to build:
///
/// ```compile_fail
/// # #[cfg(not(feature = "double-precision"))]
/// opt_precision::assert_precision!(f64);
/// # #[cfg(feature = "double-precision")]
/// opt_precision::assert_precision!(f32);
/// ```
///
/// Only `f32` and `f64` are accepted; any other token is a build error:
///
/// ```compile_fail
/// opt_precision::assert_precision!(f16);
/// ```
#[macro_export]
macro_rules! assert_precision {
    (f32) => {
        const _: () = assert!(
            !$crate::DOUBLE_PRECISION,
            "this crate requires single precision, but opt-precision is built with `double-precision`"
        );
    };
    (f64) => {
        const _: () = assert!(
            $crate::DOUBLE_PRECISION,
            "this crate requires double precision, but opt-precision is built without `double-precision`"
        );
    };
}
