//! Serializable snapshot of the active bindings.
//!
//! Solver runs stamp their output with a report so results compared against
//! the reference solver always say which family produced them.

use core::mem::{align_of, size_of};

use serde::{Deserialize, Serialize};

use crate::precision::Precision;
use crate::{Scalar, Vector2, Vector3, Vector4};

/// Size and alignment of one bound type, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeLayout {
    pub size: usize,
    pub align: usize,
}

impl TypeLayout {
    fn of<T>() -> Self {
        Self {
            size: size_of::<T>(),
            align: align_of::<T>(),
        }
    }

    /// Bytes of padding beyond `components` tightly packed scalars of
    /// `scalar_bytes` each. `None` if the type is smaller than that, which
    /// only happens for reports recorded by a different build.
    pub fn padding(&self, components: usize, scalar_bytes: usize) -> Option<usize> {
        self.size.checked_sub(components * scalar_bytes)
    }
}

/// Description of the precision family this build was compiled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecisionReport {
    pub precision: Precision,
    pub scalar: TypeLayout,
    pub vector2: TypeLayout,
    pub vector3: TypeLayout,
    pub vector4: TypeLayout,
}

impl PrecisionReport {
    /// Report for the running build.
    pub fn current() -> Self {
        Self {
            precision: Precision::ACTIVE,
            scalar: TypeLayout::of::<Scalar>(),
            vector2: TypeLayout::of::<Vector2>(),
            vector3: TypeLayout::of::<Vector3>(),
            vector4: TypeLayout::of::<Vector4>(),
        }
    }

    /// True when every vector is exactly `N` scalars wide.
    ///
    /// Measured against the report's own scalar width, so a report loaded
    /// from the other precision family is judged on its own terms.
    pub fn is_tightly_packed(&self) -> bool {
        let scalar = self.scalar.size;
        self.vector2.padding(2, scalar) == Some(0)
            && self.vector3.padding(3, scalar) == Some(0)
            && self.vector4.padding(4, scalar) == Some(0)
    }
}

impl Default for PrecisionReport {
    fn default() -> Self {
        Self::current()
    }
}

/// Logs the active bindings once, at solver start-up.
pub fn log_active_precision() {
    let report = PrecisionReport::current();
    tracing::info!(
        precision = %report.precision,
        scalar_bytes = report.scalar.size,
        vector3_bytes = report.vector3.size,
        vector4_align = report.vector4.align,
        packed = report.is_tightly_packed(),
        "precision_policy"
    );
}
