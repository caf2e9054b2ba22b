#![warn(missing_docs)]
//! Exhibit Core - Targets, Discovery and Invocation
//!
//! This crate holds the runner's model and the parts of a run that do not
//! touch the terminal:
//! - `TargetType` / `Member` model with a hand-registration builder
//! - `inventory`-backed registry folded into a `Catalog`
//! - Member discovery (entry point and synthetic closures excluded)
//! - Label resolution
//! - Panic-isolated invocation

mod discovery;
mod error;
mod invoke;
mod label;
mod model;
mod registry;

pub use discovery::{
    DiscoveryRules, ENTRY_POINT, Exclusion, SYNTHETIC_PREFIX, discover, is_reserved_name,
};
pub use error::{BoxError, CatalogError, InvocationError, TypeNotFoundError};
pub use invoke::invoke;
pub use label::resolve_label;
pub use model::{
    Entry, ExampleFn, ExampleReturn, Invocation, Location, Member, MemberDef, Outcome,
    TargetBuilder, TargetType,
};
#[doc(hidden)]
pub use model::{DiscardReturn, ResultReturn, ReturnValue};
pub use registry::{Catalog, ExampleDef, REGISTRY_ANCHOR, TargetDef};

/// Typed handle to a registered target.
///
/// Implemented by `#[exhibit::target]` for the impl block's self type, so a
/// target can be run as `run_type::<Basics>()` instead of by name.
pub trait Target {
    /// Name the target is registered under
    const NAME: &'static str;
    /// Full path of the type, `module::Type`; resolves even when another
    /// target shares [`NAME`](Self::NAME)
    const PATH: &'static str;
}
