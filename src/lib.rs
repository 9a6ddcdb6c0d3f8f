// SPDX-License-Identifier: CC0-1.0

//! Methodbook umbrella crate.
//!
//! Re-exports the workspace member crates: the method IR, the method
//! registry, configuration and logging setup.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![warn(deprecated_in_future)]
#![doc(test(attr(warn(unused))))]

pub use config::{Config, ConfigError, LoggingConfig};
pub use ir::{
    MethodArgument, MethodDef, MethodKind, MethodRecord, ParentKind, ParentObject, SourceInfo,
};
pub use logging::{init as init_logging, init_from_config as init_logging_from_config, LoggingError};
pub use registry::{
    MethodHandle, MethodRegistry, MethodRegistryReader, RegistryError, RegistryResult, Section,
};

/// Miscellaneous metadata about the Methodbook workspace.
pub mod methodbook_meta {
    /// Version string for the umbrella crate, as reported by Cargo.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}
