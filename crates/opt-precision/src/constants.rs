//! Numeric constants expressed in the active [`Scalar`] type.

use crate::Scalar;

/// Machine epsilon of [`Scalar`].
pub const EPSILON: Scalar = Scalar::EPSILON;

/// Default convergence threshold on the residual norm.
///
/// Tighter in double precision; 1e-10 would sit below `f32` rounding noise.
pub const DEFAULT_TOLERANCE: Scalar = if crate::DOUBLE_PRECISION {
    1.0e-10
} else {
    1.0e-6
};

/// Smallest positive normal [`Scalar`].
pub const MIN_POSITIVE: Scalar = Scalar::MIN_POSITIVE;
