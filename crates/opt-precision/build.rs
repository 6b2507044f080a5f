//! Publishes the selected precision as `links` metadata.
//!
//! Dependent build scripts read `DEP_OPT_PRECISION_SCALAR` and
//! `DEP_OPT_PRECISION_SCALAR_BYTES` to generate GPU kernels that agree
//! with the Rust-side `Scalar` type.

fn main() {
    let double = std::env::var_os("CARGO_FEATURE_DOUBLE_PRECISION").is_some();
    let (scalar, bytes) = if double { ("f64", 8) } else { ("f32", 4) };

    println!("cargo:scalar={scalar}");
    println!("cargo:scalar_bytes={bytes}");
    println!("cargo:rerun-if-changed=build.rs");
}
