//! Member Discovery
//!
//! Selects the runnable members of a target. Two names are never examples:
//!
//! - `main`, the entry point that usually starts the run itself
//! - anything starting with `lambda`, reserved for synthetic closure members
//!
//! Matching is exact for the entry point and prefix-only for closures, so
//! `domain` or `my_lambda` stay eligible.

use crate::model::{Member, TargetType};

/// Reserved entry-point name
pub const ENTRY_POINT: &str = "main";

/// Reserved prefix of synthetic closure members
pub const SYNTHETIC_PREFIX: &str = "lambda";

/// Discovery options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscoveryRules {
    /// Also drop members that cannot be called with zero arguments
    pub strict: bool,
}

impl DiscoveryRules {
    /// Rules that drop unreachable members
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Why the member is left out of a run, if it is
    pub fn exclusion(&self, member: &Member) -> Option<Exclusion> {
        if member.name == ENTRY_POINT {
            Some(Exclusion::EntryPoint)
        } else if member.name.starts_with(SYNTHETIC_PREFIX) {
            Some(Exclusion::SyntheticClosure)
        } else if self.strict && !member.invocation.is_reachable() {
            Some(Exclusion::Unreachable)
        } else {
            None
        }
    }

    /// Whether the member is left out of a run
    pub fn excludes(&self, member: &Member) -> bool {
        self.exclusion(member).is_some()
    }
}

/// Reason a declared member is not run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// Named `main`
    EntryPoint,
    /// Name starts with `lambda`
    SyntheticClosure,
    /// Not callable with zero arguments (strict mode only)
    Unreachable,
}

impl Exclusion {
    /// Short description for listings
    pub fn as_str(self) -> &'static str {
        match self {
            Exclusion::EntryPoint => "entry point",
            Exclusion::SyntheticClosure => "synthetic closure",
            Exclusion::Unreachable => "unreachable",
        }
    }
}

/// Whether a name is the entry point or a synthetic closure
pub fn is_reserved_name(name: &str) -> bool {
    name == ENTRY_POINT || name.starts_with(SYNTHETIC_PREFIX)
}

/// Eligible members of `target`, in declaration order.
pub fn discover<'a>(target: &'a TargetType, rules: &DiscoveryRules) -> Vec<&'a Member> {
    target
        .members()
        .iter()
        .filter(|m| !rules.excludes(m))
        .collect()
}
