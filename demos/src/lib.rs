//! Iterator demonstrations for the exhibit runner.
//!
//! Each struct target has a `main` that runs its own examples; the
//! `exhibit-demos` binary runs any of them by name.

pub mod advanced;
pub mod basics;
pub mod collectors;
pub mod domain;
pub mod grouping;
pub mod lambdas;
pub mod parallel;
pub mod reduce;

pub use advanced::Advanced;
pub use basics::Basics;
pub use grouping::Grouping;
pub use lambdas::CollectorsLambdas;
pub use parallel::Parallel;
pub use reduce::Reduce;

/// Keeps this crate's registrations linked into binaries that only call
/// `exhibit::run_cli`.
pub fn link() {}
