#![warn(missing_docs)]
//! # Exhibit
//!
//! Example runner for Rust: register demonstration functions, then run them
//! one after another with a labelled header before each.
//!
//! - **Registration**: `#[exhibit::target]` on an impl block, `#[exhibit::example]`
//!   on free functions, or the `TargetType::builder` API by hand
//! - **Labels**: `#[label("...")]` replaces the function name in the header
//! - **Discovery**: `main` and `lambda*` members are never run
//! - **Failure isolation**: a panicking or failing example is reported and
//!   the run moves on to the next one
//!
//! ## Quick Start
//!
//! ```ignore
//! struct Basics;
//!
//! #[exhibit::target]
//! impl Basics {
//!     pub fn main() {
//!         exhibit::run_type::<Basics>().unwrap();
//!     }
//!
//!     #[label("Say Hello")]
//!     pub fn greet() {
//!         println!("hello");
//!     }
//!
//!     pub fn count() {
//!         (1..4).for_each(|i| println!("{i}"));
//!     }
//! }
//! ```
//!
//! Running `Basics::main()` prints:
//!
//! ```text
//!
//! --- Say Hello
//! hello
//!
//! --- count
//! 1
//! 2
//! 3
//! ```
//!
//! ## Hand Registration
//!
//! ```ignore
//! let catalog = Catalog::new().with_target(
//!     TargetType::builder("Scratch")
//!         .example("alpha", || println!("a"))
//!         .labeled("First letter")
//!         .build()?,
//! )?;
//! Driver::new(ConsoleReporter::default()).run_named(&catalog, "Scratch")?;
//! ```

// Re-export core types
pub use exhibit_core::{
    BoxError, Catalog, CatalogError, DiscoveryRules, ENTRY_POINT, Entry, ExampleDef, ExampleFn,
    ExampleReturn, Exclusion, Invocation, InvocationError, Location, Member, MemberDef, Outcome,
    SYNTHETIC_PREFIX, Target, TargetBuilder, TargetDef, TargetType, TypeNotFoundError, discover,
    invoke, is_reserved_name, resolve_label,
};

// Re-export macros
pub use exhibit_macros::{example, target};

// Re-export driver and harness
pub use exhibit_cli::{
    Cli, ConsoleReporter, DiagnosticStream, Driver, ExhibitConfig, Reporter, RunSummary,
    WriterReporter, run, run_cli, run_type, run_with_cli,
};

/// Internal re-exports for macro use
#[doc(hidden)]
pub mod internal {
    pub use exhibit_core::{DiscardReturn, ResultReturn, ReturnValue};
    pub use inventory;
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Catalog, ConsoleReporter, Driver, Target, TargetType, example, run, run_type, target,
    };
}
