//! Output Formatting
//!
//! Headers and diagnostics, and the [`Reporter`] seam the driver writes
//! them through.
//!
//! A header is a blank line followed by `--- <label>`. Diagnostics start
//! with `!!! ` so they never read as part of an example's own output.

use crate::config::DiagnosticStream;
use exhibit_core::InvocationError;
use std::io::{self, Write};

/// Header line announcing one member
pub fn format_header(label: &str) -> String {
    format!("--- {}", label)
}

/// Diagnostic line for a failed member
pub fn format_failure(label: &str, error: &InvocationError) -> String {
    format!("!!! {} failed: {}", label, error)
}

/// Sink for run headers and failure diagnostics
pub trait Reporter {
    /// Announce the member about to be invoked
    fn header(&mut self, label: &str) -> io::Result<()>;

    /// Report a failed invocation
    fn failure(&mut self, label: &str, error: &InvocationError) -> io::Result<()>;
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn header(&mut self, label: &str) -> io::Result<()> {
        (**self).header(label)
    }

    fn failure(&mut self, label: &str, error: &InvocationError) -> io::Result<()> {
        (**self).failure(label, error)
    }
}

/// Reporter for the terminal.
///
/// Headers go to stdout and are flushed before the member runs, so they
/// stay ahead of whatever the member prints.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter {
    diagnostics: DiagnosticStream,
}

impl ConsoleReporter {
    /// Console reporter sending diagnostics to `diagnostics`
    pub fn new(diagnostics: DiagnosticStream) -> Self {
        Self { diagnostics }
    }
}

impl Reporter for ConsoleReporter {
    fn header(&mut self, label: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out)?;
        writeln!(out, "{}", format_header(label))?;
        out.flush()
    }

    fn failure(&mut self, label: &str, error: &InvocationError) -> io::Result<()> {
        let line = format_failure(label, error);
        match self.diagnostics {
            DiagnosticStream::Stdout => {
                let mut out = io::stdout().lock();
                writeln!(out, "{}", line)?;
                out.flush()
            }
            DiagnosticStream::Stderr => {
                io::stdout().flush()?;
                writeln!(io::stderr().lock(), "{}", line)
            }
        }
    }
}

/// Reporter writing everything to one `Write`, in order
#[derive(Debug, Default)]
pub struct WriterReporter<W> {
    out: W,
}

impl<W: Write> WriterReporter<W> {
    /// Wrap a writer
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for WriterReporter<W> {
    fn header(&mut self, label: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", format_header(label))
    }

    fn failure(&mut self, label: &str, error: &InvocationError) -> io::Result<()> {
        writeln!(self.out, "{}", format_failure(label, error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_format() {
        assert_eq!(format_header("Say Hello"), "--- Say Hello");
    }

    #[test]
    fn test_failure_format() {
        let err = InvocationError::Panicked {
            message: "boom".to_string(),
        };
        assert_eq!(format_failure("alpha", &err), "!!! alpha failed: panicked: boom");
    }

    #[test]
    fn test_writer_reporter_layout() {
        let mut reporter = WriterReporter::new(Vec::new());
        reporter.header("alpha").unwrap();
        reporter
            .failure(
                "alpha",
                &InvocationError::Unreachable {
                    reason: "is async".to_string(),
                },
            )
            .unwrap();
        reporter.header("beta").unwrap();

        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(
            text,
            "\n--- alpha\n!!! alpha failed: cannot be invoked: is async\n\n--- beta\n"
        );
    }
}
