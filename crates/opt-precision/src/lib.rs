//! # opt-precision
//!
//! Build-time numeric precision for the Opt solver.
//!
//! Residual, Jacobian, energy and convergence code is written once against
//! [`Scalar`], [`Vector2`], [`Vector3`] and [`Vector4`]. The
//! `double-precision` Cargo feature rebinds all four from `f32` to `f64`
//! together; nothing else changes and no runtime dispatch is involved.
//!
//! ```
//! use opt_precision::{Scalar, Vector3};
//!
//! let p = Vector3::new(1.0, 2.0, 3.0);
//! let energy: Scalar = 0.5 * p.length_squared();
//! assert_eq!(energy, 7.0);
//! ```

pub mod constants;
pub mod convert;
pub mod error;
pub mod layout;
pub mod precision;
pub mod report;
pub mod scalar;

pub use error::{PrecisionError, PrecisionResult};
pub use precision::Precision;
pub use report::{log_active_precision, PrecisionReport};
pub use scalar::{Scalar, Vector2, Vector3, Vector4, DOUBLE_PRECISION, SCALAR_BYTES};
