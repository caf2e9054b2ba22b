//! Invocation Driver
//!
//! Runs every eligible member of a target, strictly one at a time on the
//! calling thread.
//!
//! ## Per-member flow
//!
//! ```text
//! discover(target)
//!        │
//!        ▼
//!  resolve_label ──► Reporter::header
//!        │
//!        ▼
//!     invoke ──► Completed
//!        │
//!        └─────► Failed ──► Reporter::failure
//!        │
//!        ▼
//!   next member | Done
//! ```
//!
//! A failing member never stops the loop; only target resolution can fail.

use super::formatting::Reporter;
use exhibit_core::{
    Catalog, DiscoveryRules, Outcome, TargetType, TypeNotFoundError, discover, invoke,
    resolve_label,
};

/// Tally of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Target that was run
    pub target: String,
    /// Invocation attempts
    pub attempted: usize,
    /// Members that returned normally
    pub completed: usize,
    /// Members that failed
    pub failed: usize,
}

impl RunSummary {
    /// Whether every attempted member completed
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Runs targets and reports through `R`
pub struct Driver<R> {
    rules: DiscoveryRules,
    reporter: R,
}

impl<R: Reporter> Driver<R> {
    /// Driver with default discovery rules
    pub fn new(reporter: R) -> Self {
        Self {
            rules: DiscoveryRules::default(),
            reporter,
        }
    }

    /// Replace the discovery rules
    pub fn with_rules(mut self, rules: DiscoveryRules) -> Self {
        self.rules = rules;
        self
    }

    /// Discovery rules in effect
    pub fn rules(&self) -> &DiscoveryRules {
        &self.rules
    }

    /// Recover the reporter
    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Resolve `name` in `catalog` and run it
    pub fn run_named(
        &mut self,
        catalog: &Catalog,
        name: &str,
    ) -> Result<RunSummary, TypeNotFoundError> {
        let target = catalog.resolve(name)?;
        Ok(self.run(target))
    }

    /// Run every eligible member of `target`
    pub fn run(&mut self, target: &TargetType) -> RunSummary {
        let members = discover(target, &self.rules);
        tracing::debug!(target_type = target.name(), members = members.len(), "starting run");

        let mut summary = RunSummary {
            target: target.name().to_string(),
            ..RunSummary::default()
        };

        for member in members {
            let label = resolve_label(member);
            if let Err(e) = self.reporter.header(label) {
                tracing::warn!(member = member.name, error = %e, "failed to write header");
            }

            tracing::debug!(target_type = target.name(), member = member.name, "invoking");
            summary.attempted += 1;

            match invoke(member) {
                Outcome::Completed => summary.completed += 1,
                Outcome::Failed(error) => {
                    summary.failed += 1;
                    tracing::debug!(member = member.name, error = %error, "example failed");
                    if let Err(e) = self.reporter.failure(label, &error) {
                        tracing::warn!(member = member.name, error = %e, "failed to write diagnostic");
                    }
                }
            }
        }

        tracing::debug!(
            target_type = target.name(),
            completed = summary.completed,
            failed = summary.failed,
            "run finished"
        );
        summary
    }
}
