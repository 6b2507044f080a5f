//! Descriptor for the two precision families.
//!
//! The type aliases in [`crate::scalar`] are what kernels use. `Precision` is
//! the value-level name for the same choice, for run reports, logs and for
//! checking recorded results against the running build.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PrecisionError, PrecisionResult};

/// One of the two supported floating-point families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// 32-bit IEEE 754 (`f32`). The default.
    Single,
    /// 64-bit IEEE 754 (`f64`). Selected by the `double-precision` feature.
    Double,
}

impl Precision {
    /// The family this build was compiled with.
    pub const ACTIVE: Self = if crate::DOUBLE_PRECISION {
        Self::Double
    } else {
        Self::Single
    };

    /// Rust name of the scalar type.
    pub fn name(self) -> &'static str {
        match self {
            Self::Single => "f32",
            Self::Double => "f64",
        }
    }

    /// Bytes per scalar.
    pub const fn scalar_bytes(self) -> usize {
        match self {
            Self::Single => 4,
            Self::Double => 8,
        }
    }

    /// Machine epsilon, widened to `f64`.
    pub fn epsilon(self) -> f64 {
        match self {
            Self::Single => f32::EPSILON as f64,
            Self::Double => f64::EPSILON,
        }
    }

    /// True when this is the family the build was compiled with.
    #[inline]
    pub fn is_active(self) -> bool {
        self == Self::ACTIVE
    }

    /// Checks a recorded precision (from a saved report, a reference
    /// comparison, a config file) against this build.
    pub fn ensure_active(self) -> PrecisionResult<()> {
        if self.is_active() {
            Ok(())
        } else {
            Err(PrecisionError::Mismatch {
                expected: Self::ACTIVE,
                found: self,
            })
        }
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::ACTIVE
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Precision {
    type Err = PrecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "f32" | "single" | "float" => Ok(Self::Single),
            "f64" | "double" => Ok(Self::Double),
            _ => Err(PrecisionError::UnknownPrecision(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_matches_scalar_width() {
        assert_eq!(
            Precision::ACTIVE.scalar_bytes(),
            std::mem::size_of::<crate::Scalar>()
        );
    }

    #[test]
    fn parse_aliases() {
        assert_eq!("F32".parse::<Precision>().unwrap(), Precision::Single);
        assert_eq!(" double ".parse::<Precision>().unwrap(), Precision::Double);
        assert!("f16".parse::<Precision>().is_err());
    }

    #[test]
    fn the_other_family_is_rejected() {
        let other = match Precision::ACTIVE {
            Precision::Single => Precision::Double,
            Precision::Double => Precision::Single,
        };
        assert!(Precision::ACTIVE.ensure_active().is_ok());
        assert!(other.ensure_active().is_err());
    }
}
