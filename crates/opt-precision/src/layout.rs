//! Zero-copy views between vector slices and flat scalar buffers.
//!
//! GPU upload and the linear-solve stage work on `[Scalar]`; residual code
//! works on `[VectorN]`. Since every vector is tightly packed (see
//! [`crate::scalar`]), both views share one allocation.

use bytemuck::{Pod, PodCastError};

use crate::error::{PrecisionError, PrecisionResult};
use crate::{Scalar, Vector2, Vector3, Vector4};

/// Views a slice of `Vector2` as `2 * len` scalars.
#[inline]
pub fn as_scalars2(v: &[Vector2]) -> &[Scalar] {
    bytemuck::cast_slice(v)
}

/// Views a slice of `Vector3` as `3 * len` scalars.
#[inline]
pub fn as_scalars3(v: &[Vector3]) -> &[Scalar] {
    bytemuck::cast_slice(v)
}

/// Views a slice of `Vector4` as `4 * len` scalars.
#[inline]
pub fn as_scalars4(v: &[Vector4]) -> &[Scalar] {
    bytemuck::cast_slice(v)
}

/// Mutable flat view of a `Vector2` slice.
#[inline]
pub fn as_scalars2_mut(v: &mut [Vector2]) -> &mut [Scalar] {
    bytemuck::cast_slice_mut(v)
}

/// Mutable flat view of a `Vector3` slice.
#[inline]
pub fn as_scalars3_mut(v: &mut [Vector3]) -> &mut [Scalar] {
    bytemuck::cast_slice_mut(v)
}

/// Mutable flat view of a `Vector4` slice.
#[inline]
pub fn as_scalars4_mut(v: &mut [Vector4]) -> &mut [Scalar] {
    bytemuck::cast_slice_mut(v)
}

/// Views a flat buffer as `Vector2`s. Length must be a multiple of 2.
pub fn from_scalars2(s: &[Scalar]) -> PrecisionResult<&[Vector2]> {
    view(s, 2)
}

/// Views a flat buffer as `Vector3`s. Length must be a multiple of 3.
pub fn from_scalars3(s: &[Scalar]) -> PrecisionResult<&[Vector3]> {
    view(s, 3)
}

/// Views a flat buffer as `Vector4`s.
///
/// Length must be a multiple of 4. In single precision on SIMD targets the
/// buffer must also be 16-byte aligned, which holds for buffers produced by
/// [`as_scalars4`].
pub fn from_scalars4(s: &[Scalar]) -> PrecisionResult<&[Vector4]> {
    view(s, 4)
}

fn view<V: Pod>(s: &[Scalar], width: usize) -> PrecisionResult<&[V]> {
    // An empty Vec's dangling pointer is only aligned to Scalar.
    if s.is_empty() {
        return Ok(&[]);
    }
    bytemuck::try_cast_slice(s).map_err(|e| layout_error(s.len(), width, e))
}

fn layout_error(len: usize, width: usize, err: PodCastError) -> PrecisionError {
    let reason = match err {
        PodCastError::OutputSliceWouldHaveSlop | PodCastError::SizeMismatch => {
            format!("length is not a multiple of {width}")
        }
        other => format!("buffer is not aligned for the vector type ({other:?})"),
    };
    PrecisionError::Layout { len, width, reason }
}
