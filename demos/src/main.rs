//! Runs the iterator demonstrations from the command line.
//!
//! ```text
//! exhibit-demos Basics Reduce
//! exhibit-demos --all --filter '^[A-Z]'
//! exhibit-demos list --format json
//! ```

fn main() {
    exhibit_demos::link();

    if let Err(e) = exhibit::run_cli() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
