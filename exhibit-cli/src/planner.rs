//! Target Planner
//!
//! Decides which targets a CLI invocation runs, and in what order.
//!
//! - Named targets run in the order given on the command line
//! - `--all` runs every registered target, alphabetically, optionally
//!   narrowed by a regex on the target name
//!
//! Every name is resolved before anything runs, so a typo aborts the whole
//! invocation without a partial run.

use exhibit_core::{Catalog, TargetType, TypeNotFoundError};
use regex::Regex;

/// Targets selected for one CLI invocation
pub struct RunPlan<'a> {
    /// Ordered targets to run
    pub targets: Vec<&'a TargetType>,
}

/// Build a plan from explicit names, or from the whole catalog when `names`
/// is empty and `all` is set.
pub fn build_plan<'a>(
    catalog: &'a Catalog,
    names: &[String],
    all: bool,
    filter: Option<&Regex>,
) -> Result<RunPlan<'a>, TypeNotFoundError> {
    let targets = if names.is_empty() && all {
        catalog
            .targets()
            .filter(|t| filter.is_none_or(|re| re.is_match(t.name())))
            .collect()
    } else {
        names
            .iter()
            .map(|name| catalog.resolve(name))
            .collect::<Result<Vec<_>, _>>()?
    };

    Ok(RunPlan { targets })
}
