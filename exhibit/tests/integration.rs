//! Integration tests for Exhibit
//!
//! Targets here are registered through the macros, so these tests cover the
//! whole path: macro expansion → inventory → catalog → discovery → driver.

use exhibit::{Catalog, DiscoveryRules, Driver, Target, WriterReporter};
use std::sync::Mutex;

fn run_to_text(name: &str, rules: DiscoveryRules) -> (exhibit::RunSummary, String) {
    let catalog = Catalog::from_registry();
    let mut driver = Driver::new(WriterReporter::new(Vec::new())).with_rules(rules);
    let summary = driver.run_named(&catalog, name).unwrap();
    let text = String::from_utf8(driver.into_reporter().into_inner()).unwrap();
    (summary, text)
}

// ---------------------------------------------------------------------------
// Entry point and synthetic closures are skipped, labels replace names
// ---------------------------------------------------------------------------

static LABELLED: Mutex<Vec<&'static str>> = Mutex::new(Vec::new());

struct Labelled;

#[exhibit::target]
impl Labelled {
    fn main() {
        LABELLED.lock().unwrap().push("main");
    }

    fn lambda_foo_0() {
        LABELLED.lock().unwrap().push("lambda");
    }

    #[label("Say Hello")]
    fn greet() {
        LABELLED.lock().unwrap().push("greet");
    }
}

#[test]
fn test_entry_point_and_closures_excluded() {
    let (summary, text) = run_to_text("Labelled", DiscoveryRules::default());

    assert_eq!(text, "\n--- Say Hello\n");
    assert_eq!(*LABELLED.lock().unwrap(), ["greet"]);
    assert_eq!(summary.attempted, 1);
    assert!(summary.is_success());
}

// ---------------------------------------------------------------------------
// A panicking member does not stop the ones after it
// ---------------------------------------------------------------------------

static ISOLATED: Mutex<Vec<&'static str>> = Mutex::new(Vec::new());

struct Isolated;

#[exhibit::target]
impl Isolated {
    fn alpha() {
        ISOLATED.lock().unwrap().push("alpha");
        panic!("alpha is broken");
    }

    fn beta() {
        ISOLATED.lock().unwrap().push("beta");
    }
}

#[test]
fn test_failure_isolation() {
    let (summary, text) = run_to_text("Isolated", DiscoveryRules::default());

    assert_eq!(
        text,
        "\n--- alpha\n!!! alpha failed: panicked: alpha is broken\n\n--- beta\n"
    );
    assert_eq!(*ISOLATED.lock().unwrap(), ["alpha", "beta"]);
    assert_eq!(summary.attempted, 2);
    assert_eq!(summary.failed, 1);
}

// ---------------------------------------------------------------------------
// Nothing eligible
// ---------------------------------------------------------------------------

struct OnlyEntry;

#[exhibit::target]
impl OnlyEntry {
    pub fn main() {
        exhibit::run_type::<OnlyEntry>().unwrap();
    }
}

#[test]
fn test_no_eligible_members() {
    let (summary, text) = run_to_text("OnlyEntry", DiscoveryRules::default());
    assert!(text.is_empty());
    assert_eq!(summary.attempted, 0);

    // The entry point may start its own run without recursing
    OnlyEntry::main();
}

// ---------------------------------------------------------------------------
// Members that cannot be called, and return-value handling
// ---------------------------------------------------------------------------

static MIXED: Mutex<Vec<&'static str>> = Mutex::new(Vec::new());

struct Mixed;

#[exhibit::target]
impl Mixed {
    #[allow(dead_code)]
    fn with_arg(_n: u32) {}

    #[allow(dead_code)]
    fn with_self(&self) {}

    #[allow(dead_code)]
    async fn later() {}

    #[allow(dead_code)]
    fn generic<T: Default>() {}

    fn returns_value() -> u32 {
        MIXED.lock().unwrap().push("returns_value");
        7
    }

    fn fallible() -> Result<(), std::io::Error> {
        MIXED.lock().unwrap().push("fallible");
        Err(std::io::Error::other("missing file"))
    }

    fn anyhow_fallible() -> anyhow::Result<()> {
        MIXED.lock().unwrap().push("anyhow_fallible");
        anyhow::bail!("bad config")
    }

    #[label = "Equals form"]
    fn eq_label() {
        MIXED.lock().unwrap().push("eq_label");
    }
}

#[test]
fn test_unreachable_and_fallible_members() {
    let (summary, text) = run_to_text("Mixed", DiscoveryRules::default());

    assert_eq!(summary.attempted, 8);
    assert_eq!(summary.completed, 2);
    assert_eq!(summary.failed, 6);

    assert!(text.contains("!!! with_arg failed: cannot be invoked: takes 1 parameter\n"));
    assert!(text.contains("!!! with_self failed: cannot be invoked: takes `self`\n"));
    assert!(text.contains("!!! later failed: cannot be invoked: is async\n"));
    assert!(text.contains("!!! generic failed: cannot be invoked: is generic\n"));
    assert!(text.contains("!!! fallible failed: returned an error: missing file\n"));
    assert!(text.contains("!!! anyhow_fallible failed: returned an error: bad config\n"));
    assert!(text.contains("\n--- Equals form\n"));
    assert!(!text.contains("eq_label"));

    let strict_catalog = Catalog::from_registry();
    let target = strict_catalog.resolve("Mixed").unwrap();
    let eligible: Vec<_> = exhibit::discover(target, &DiscoveryRules::strict())
        .iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(
        eligible,
        ["returns_value", "fallible", "anyhow_fallible", "eq_label"]
    );
}

// ---------------------------------------------------------------------------
// Errors behind aliased or macro-built Result types are still reported
// ---------------------------------------------------------------------------

type DemoResult = Result<(), std::io::Error>;
type Checked<T> = std::result::Result<T, String>;

macro_rules! result_of {
    ($t:ty) => { Result<$t, std::fmt::Error> };
}

struct Aliased;

#[exhibit::target]
impl Aliased {
    fn fails_via_alias() -> DemoResult {
        Err(std::io::Error::other("aliased failure"))
    }

    fn fails_via_generic_alias() -> Checked<u32> {
        Err("generic alias failure".to_string())
    }

    fn fails_via_macro_type() -> result_of!(()) {
        Err(std::fmt::Error)
    }

    fn succeeds_via_alias() -> DemoResult {
        Ok(())
    }

    fn plain_value() -> Option<u8> {
        None
    }
}

#[test]
fn test_aliased_result_errors_reported() {
    let (summary, text) = run_to_text("Aliased", DiscoveryRules::default());

    assert_eq!(summary.attempted, 5);
    assert_eq!(summary.failed, 3);
    assert_eq!(summary.completed, 2);
    assert!(text.contains("!!! fails_via_alias failed: returned an error: aliased failure\n"));
    assert!(text.contains(
        "!!! fails_via_generic_alias failed: returned an error: generic alias failure\n"
    ));
    assert!(text.contains("!!! fails_via_macro_type failed: returned an error: "));
    assert!(!text.contains("!!! succeeds_via_alias"));
    assert!(!text.contains("!!! plain_value"));
}

// ---------------------------------------------------------------------------
// Types sharing a short name stay separate targets
// ---------------------------------------------------------------------------

mod first {
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub static CALLS: AtomicUsize = AtomicUsize::new(0);

    pub struct Shared;

    #[exhibit::target]
    impl Shared {
        fn from_first() {
            CALLS.fetch_add(1, Ordering::SeqCst);
        }
    }
}

mod second {
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub static CALLS: AtomicUsize = AtomicUsize::new(0);

    pub struct Shared;

    #[exhibit::target]
    impl Shared {
        fn from_second() {
            CALLS.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[test]
fn test_same_short_name_stays_separate() {
    use std::sync::atomic::Ordering;

    assert_eq!(<first::Shared as Target>::NAME, "Shared");
    assert_eq!(<first::Shared as Target>::PATH, "integration::first::Shared");

    let catalog = Catalog::from_registry();
    assert!(catalog.resolve("Shared").is_err());

    let (summary, text) = run_to_text("integration::second::Shared", DiscoveryRules::default());
    assert_eq!(text, "\n--- from_second\n");
    assert_eq!(summary.attempted, 1);

    exhibit::run_type::<first::Shared>().unwrap();
    assert_eq!(first::CALLS.load(Ordering::SeqCst), 1);
    assert_eq!(second::CALLS.load(Ordering::SeqCst), 1);
}

// ---------------------------------------------------------------------------
// Free functions join targets
// ---------------------------------------------------------------------------

static JOINED: Mutex<Vec<&'static str>> = Mutex::new(Vec::new());

struct Joined;

#[exhibit::target]
impl Joined {
    fn first() {
        JOINED.lock().unwrap().push("first");
    }
}

#[exhibit::example(target = "Joined", label = "Second one")]
fn second() {
    JOINED.lock().unwrap().push("second");
}

#[exhibit::example(target = "Joined")]
fn third() {
    JOINED.lock().unwrap().push("third");
}

#[test]
fn test_free_examples_follow_impl_members() {
    let (summary, text) = run_to_text("Joined", DiscoveryRules::default());

    assert_eq!(text, "\n--- first\n\n--- Second one\n\n--- third\n");
    assert_eq!(*JOINED.lock().unwrap(), ["first", "second", "third"]);
    assert_eq!(summary.attempted, 3);
}

mod reduce {
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub static CALLS: AtomicUsize = AtomicUsize::new(0);

    #[exhibit::example]
    #[label("Fold sum")]
    fn fold_sum() {
        CALLS.fetch_add(1, Ordering::SeqCst);
    }

    #[exhibit::example]
    fn max_value() {
        CALLS.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_module_target() {
    let (summary, text) = run_to_text("reduce", DiscoveryRules::default());

    assert_eq!(text, "\n--- Fold sum\n\n--- max_value\n");
    assert_eq!(summary.attempted, 2);
    assert_eq!(reduce::CALLS.load(std::sync::atomic::Ordering::SeqCst), 2);
}

// ---------------------------------------------------------------------------
// Handles and lookup
// ---------------------------------------------------------------------------

struct Renamed;

#[exhibit::target(name = "streams::Renamed")]
impl Renamed {
    fn only() {}
}

#[test]
fn test_target_names() {
    assert_eq!(<Labelled as Target>::NAME, "Labelled");
    assert_eq!(<Renamed as Target>::NAME, "streams::Renamed");
    assert_eq!(<Renamed as Target>::PATH, "integration::Renamed");

    let catalog = Catalog::from_registry();
    assert!(catalog.resolve("streams::Renamed").is_ok());
    assert!(catalog.resolve("Renamed").is_err());
    assert!(catalog.resolve("integration::Renamed").is_ok());

    let target = catalog.resolve("Labelled").unwrap();
    let location = target.location().unwrap();
    assert!(location.file.ends_with("integration.rs"));
    assert!(target.module_path().starts_with("integration"));
}

#[test]
fn test_unknown_target() {
    let err = exhibit::run("DoesNotExist").unwrap_err();
    assert_eq!(err.name, "DoesNotExist");
    assert_eq!(err.to_string(), "target type not found: DoesNotExist");
}

#[test]
fn test_declaration_order_is_stable() {
    let catalog = Catalog::from_registry();
    let target = catalog.resolve("Labelled").unwrap();
    let names: Vec<_> = target.members().iter().map(|m| m.name).collect();
    assert_eq!(names, ["main", "lambda_foo_0", "greet"]);

    let again = Catalog::from_registry();
    let names_again: Vec<_> = again
        .resolve("Labelled")
        .unwrap()
        .members()
        .iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, names_again);
}
