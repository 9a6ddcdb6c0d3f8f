#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Methodbook Intermediate Representation (IR)
//!
//! This crate defines the method records that documentation parsers produce
//! and that the registry organizes into sections. The registry only relies on
//! the [`MethodRecord`] contract; [`MethodDef`] is the concrete record used by
//! the rest of the workspace.

pub mod method_ir;

// Re-export the method IR types for convenience
pub use method_ir::*;
