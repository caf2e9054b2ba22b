#![warn(missing_docs)]
//! Exhibit CLI Library
//!
//! The invocation driver plus the command-line harness around it.
//! Use `exhibit::run_type::<T>()` from a target's own `main` to run just that
//! target, or `exhibit::run_cli()` in a binary to get the full CLI over every
//! registered target.
//!
//! # Example
//!
//! ```ignore
//! struct Basics;
//!
//! #[exhibit::target]
//! impl Basics {
//!     #[label("Say Hello")]
//!     fn greet() {
//!         println!("hello");
//!     }
//! }
//!
//! fn main() {
//!     if let Err(e) = exhibit::run_cli() {
//!         eprintln!("Error: {e}");
//!         std::process::exit(1);
//!     }
//! }
//! ```

mod config;
mod driver;
mod planner;

pub use config::*;
pub use driver::{
    ConsoleReporter, Driver, Reporter, RunSummary, WriterReporter, format_failure, format_header,
};
pub use planner::{RunPlan, build_plan};

use clap::{Parser, Subcommand};
use exhibit_core::{Catalog, DiscoveryRules, Location, Target, TargetType, TypeNotFoundError};
use regex::Regex;
use serde::Serialize;
use std::path::PathBuf;

/// Run one registered target by name, printing headers to stdout.
///
/// Only an unknown name is an error; failing examples are reported and
/// skipped over.
pub fn run(target: &str) -> Result<(), TypeNotFoundError> {
    let catalog = Catalog::from_registry();
    let mut driver = Driver::new(ConsoleReporter::default());
    driver.run_named(&catalog, target).map(|_| ())
}

/// Run the target registered for `T` by `#[exhibit::target]`.
///
/// Resolves by full type path, so a type sharing its name with another
/// target still runs only its own members.
pub fn run_type<T: Target>() -> Result<(), TypeNotFoundError> {
    run(T::PATH)
}

/// Exhibit CLI arguments
#[derive(Parser, Debug)]
#[command(name = "exhibit")]
#[command(author, version, about = "Exhibit - run registered Rust examples")]
pub struct Cli {
    /// Optional subcommand (List, Init); defaults to running targets
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Targets to run, in order
    pub targets: Vec<String>,

    /// Run every registered target when none are named
    #[arg(long)]
    pub all: bool,

    /// Regex on target names, for --all and list
    #[arg(long)]
    pub filter: Option<String>,

    /// Listing format: human, json
    #[arg(long, default_value = "human")]
    pub format: String,

    /// Skip members that cannot be called with zero arguments
    #[arg(long)]
    pub strict: bool,

    /// Exit with status 1 when any example failed
    #[arg(long)]
    pub fail_on_error: bool,

    /// Configuration file (default: nearest exhibit.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registered targets and their members
    List,
    /// Write a default exhibit.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Listing output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    /// Tree for terminals
    Human,
    /// JSON array of targets
    Json,
}

impl std::str::FromStr for ListFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(ListFormat::Human),
            "json" => Ok(ListFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Settings after layering CLI flags over the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    /// Discovery rules for every run
    pub rules: DiscoveryRules,
    /// Diagnostic stream
    pub diagnostics: DiagnosticStream,
    /// Exit non-zero on any failure
    pub fail_on_error: bool,
}

impl RunSettings {
    /// Layer: exhibit.toml defaults → CLI overrides. Boolean flags can only
    /// switch a setting on.
    pub fn resolve(cli: &Cli, config: &ExhibitConfig) -> Self {
        Self {
            rules: DiscoveryRules {
                strict: cli.strict || config.discovery.strict,
            },
            diagnostics: config.output.diagnostics,
            fail_on_error: cli.fail_on_error || config.runner.fail_on_error,
        }
    }
}

/// Run the Exhibit CLI over every registered target.
///
/// # Returns
/// Returns `Ok(())` on success, or an error if something goes wrong.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the Exhibit CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Logs go to stderr; stdout belongs to headers and example output
    let filter = if cli.verbose {
        "exhibit=debug"
    } else {
        "exhibit=info"
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = match &cli.config {
        Some(path) => ExhibitConfig::load(path)?,
        None => ExhibitConfig::discover().unwrap_or_default(),
    };

    let filter_re = cli.filter.as_deref().map(Regex::new).transpose()?;

    match &cli.command {
        Some(Commands::List) => {
            let catalog = Catalog::from_registry();
            let settings = RunSettings::resolve(&cli, &config);
            let format: ListFormat = cli.format.parse().unwrap_or_else(|e: String| {
                tracing::warn!("{e}; using human");
                ListFormat::Human
            });
            list_targets(&catalog, &settings, filter_re.as_ref(), format)?;
        }
        Some(Commands::Init { force }) => {
            init_config(*force)?;
        }
        None => {
            let catalog = Catalog::from_registry();
            let settings = RunSettings::resolve(&cli, &config);
            let summaries = run_targets(&cli, &catalog, &settings, filter_re.as_ref())?;

            let failed: usize = summaries.iter().map(|s| s.failed).sum();
            if failed > 0 {
                tracing::info!(failed, "some examples failed");
                if settings.fail_on_error {
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn run_targets(
    cli: &Cli,
    catalog: &Catalog,
    settings: &RunSettings,
    filter: Option<&Regex>,
) -> anyhow::Result<Vec<RunSummary>> {
    let plan = build_plan(catalog, &cli.targets, cli.all, filter)?;

    if plan.targets.is_empty() {
        if cli.targets.is_empty() && !cli.all {
            println!("No targets given. Pass target names, --all, or use `list`.");
        } else {
            println!("No targets found.");
        }
        return Ok(Vec::new());
    }

    let mut driver =
        Driver::new(ConsoleReporter::new(settings.diagnostics)).with_rules(settings.rules);

    Ok(plan.targets.iter().map(|t| driver.run(t)).collect())
}

fn init_config(force: bool) -> anyhow::Result<()> {
    let path = std::env::current_dir()?.join(CONFIG_FILE);
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    std::fs::write(&path, ExhibitConfig::default_toml())?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// One target in a listing
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TargetListing {
    /// Target name
    pub name: String,
    /// Declaring module
    pub module_path: String,
    /// Registration site, `file:line`
    pub location: Option<String>,
    /// Declared members in declaration order
    pub members: Vec<MemberListing>,
}

/// One member in a listing
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MemberListing {
    /// Member name
    pub name: String,
    /// Header text
    pub label: String,
    /// Why the member is skipped, if it is
    pub excluded: Option<String>,
    /// Why the member cannot be called, if it cannot
    pub unreachable: Option<String>,
}

/// Describe `target` under `rules`
pub fn describe_target(target: &TargetType, rules: &DiscoveryRules) -> TargetListing {
    let members = target
        .members()
        .iter()
        .map(|m| MemberListing {
            name: m.name.to_string(),
            label: m.display_label().to_string(),
            excluded: rules.exclusion(m).map(|e| e.as_str().to_string()),
            unreachable: match &m.invocation {
                exhibit_core::Invocation::Unreachable(reason) => Some(reason.to_string()),
                _ => None,
            },
        })
        .collect();

    TargetListing {
        name: target.name().to_string(),
        module_path: target.module_path().to_string(),
        location: target
            .location()
            .map(|Location { file, line }| format!("{}:{}", file, line)),
        members,
    }
}

/// Render listings as a tree
pub fn format_listing(listings: &[TargetListing]) -> String {
    let mut output = String::from("Exhibit Catalog:\n");
    let mut runnable = 0;

    for target in listings {
        match &target.location {
            Some(loc) => output.push_str(&format!("├── target: {} ({})\n", target.name, loc)),
            None => output.push_str(&format!("├── target: {}\n", target.name)),
        }
        for member in &target.members {
            let mut line = format!("│   ├── {}", member.name);
            if member.label != member.name {
                line.push_str(&format!(" \"{}\"", member.label));
            }
            if let Some(reason) = &member.excluded {
                line.push_str(&format!(" (excluded: {})", reason));
            } else {
                runnable += 1;
                if let Some(reason) = &member.unreachable {
                    line.push_str(&format!(" (unreachable: {})", reason));
                }
            }
            output.push_str(&line);
            output.push('\n');
        }
    }

    output.push_str(&format!(
        "{} targets, {} runnable examples.\n",
        listings.len(),
        runnable
    ));
    output
}

fn list_targets(
    catalog: &Catalog,
    settings: &RunSettings,
    filter: Option<&Regex>,
    format: ListFormat,
) -> anyhow::Result<()> {
    let listings: Vec<TargetListing> = catalog
        .targets()
        .filter(|t| filter.is_none_or(|re| re.is_match(t.name())))
        .map(|t| describe_target(t, &settings.rules))
        .collect();

    match format {
        ListFormat::Human => print!("{}", format_listing(&listings)),
        ListFormat::Json => println!("{}", serde_json::to_string_pretty(&listings)?),
    }
    Ok(())
}
