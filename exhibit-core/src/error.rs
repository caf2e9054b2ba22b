//! Error types
//!
//! Discovery errors are fatal to a run; invocation errors are reported per
//! member and never leave the driver.

use thiserror::Error;

/// Boxed error returned by fallible example functions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The requested target type is not present in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("target type not found: {name}")]
pub struct TypeNotFoundError {
    /// Name that failed to resolve
    pub name: String,
}

impl TypeNotFoundError {
    /// Create an error for the given target name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A single member's invocation failed.
#[derive(Debug, Error)]
pub enum InvocationError {
    /// The example panicked
    #[error("panicked: {message}")]
    Panicked {
        /// Panic payload, when it was a string
        message: String,
    },

    /// The example returned an error
    #[error("returned an error: {0}")]
    Failed(#[source] BoxError),

    /// The member cannot be called with zero arguments
    #[error("cannot be invoked: {reason}")]
    Unreachable {
        /// Why the call could not be made
        reason: String,
    },
}

/// Errors raised while assembling a catalog by hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two members of one target share a name
    #[error("duplicate member `{member}` in target `{target}`")]
    DuplicateMember {
        /// Target being built
        target: String,
        /// Repeated member name
        member: String,
    },

    /// Two targets share a name
    #[error("duplicate target `{0}`")]
    DuplicateTarget(String),

    /// A label was given before any member to attach it to
    #[error("label `{label}` in target `{target}` has no member to attach to")]
    LabelWithoutMember {
        /// Target being built
        target: String,
        /// The orphaned label
        label: String,
    },
}
