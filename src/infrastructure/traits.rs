//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

/// Sink for non-fatal diagnostics (e.g. unknown state codes).
pub trait Diagnostics: Send + Sync {
    /// Report a warning. Must not fail.
    fn warn(&self, message: &str);
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Writes diagnostics verbatim to stderr.
#[derive(Debug, Default)]
pub struct StderrDiagnostics;

impl Diagnostics for StderrDiagnostics {
    fn warn(&self, message: &str) {
        tracing::debug!("diagnostic: {}", message);
        eprintln!("{}", message);
    }
}
