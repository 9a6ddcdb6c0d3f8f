//! Registry errors

/// Errors that can occur while building a method registry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The registry was constructed without a parent object
    #[error("method registry requires a parent object")]
    MissingParent,
    /// A different method instance already occupies the selector
    #[error("method with selector '{selector}' is already registered for {parent}")]
    DuplicateSelector {
        /// The conflicting selector
        selector: String,
        /// The registry's parent object
        parent: String,
    },
    /// The method has an empty selector and cannot be indexed
    #[error("cannot register a method with an empty selector for {parent}")]
    EmptySelector {
        /// The registry's parent object
        parent: String,
    },
    /// The record is borrowed elsewhere and cannot be read or updated
    #[error("method record is borrowed elsewhere while updating registry for {parent}")]
    RecordInUse {
        /// The registry's parent object
        parent: String,
    },
}

/// Result alias for registry operations
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
