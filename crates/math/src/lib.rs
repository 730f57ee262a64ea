//! Camera math: vector primitives, matrix builders, and the matrix stack.
//!
//! # Invariants
//! - Matrices are column-major: element (column c, row r) lives at `4 * c + r`.
//! - Builders never validate their inputs. Contract violations show up as
//!   NaN/Inf or degenerate matrices, never as errors.
//! - Composition never writes into one of its own inputs.

pub mod matrix;
pub mod stack;
pub mod vector;

pub use matrix::{Matrix4, identity, projection, translation, view};
pub use stack::{MatrixStack, compose, compose_into};
pub use vector::{Vector3, cross, horizontal_perpendicular, normalize, normalized};

pub fn crate_info() -> &'static str {
    "flycam-math v0.1.0"
}
