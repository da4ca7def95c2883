//! Logging capability injected into the request handlers.
//!
//! # Design
//! Handlers only see `LogSink`: a severity, a message, and optionally the
//! error that caused it. Filtering and transport are the sink's business.
//! `TracingSink` forwards to `tracing`, which is what the server installs;
//! tests substitute a recording sink.

use std::fmt;

/// Severity of a log line, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Trace,
    Debug,
    Information,
    Warning,
    Error,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Trace => "trace",
            Severity::Debug => "debug",
            Severity::Information => "information",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Critical => "critical",
        };
        f.write_str(name)
    }
}

pub trait LogSink: Send + Sync {
    fn log(&self, severity: Severity, message: &str, error: Option<&(dyn std::error::Error + 'static)>);

    fn info(&self, message: &str) {
        self.log(Severity::Information, message, None);
    }

    fn error(&self, message: &str, error: &(dyn std::error::Error + 'static)) {
        self.log(Severity::Error, message, Some(error));
    }
}

/// Bridges `LogSink` onto `tracing` events under the `todo` target.
///
/// `tracing` has no level above `ERROR`, so `Critical` is emitted at `ERROR`
/// with `critical = true`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, severity: Severity, message: &str, error: Option<&(dyn std::error::Error + 'static)>) {
        match (severity, error) {
            (Severity::Trace, None) => tracing::trace!(target: "todo", "{message}"),
            (Severity::Trace, Some(e)) => tracing::trace!(target: "todo", error = %e, "{message}"),
            (Severity::Debug, None) => tracing::debug!(target: "todo", "{message}"),
            (Severity::Debug, Some(e)) => tracing::debug!(target: "todo", error = %e, "{message}"),
            (Severity::Information, None) => tracing::info!(target: "todo", "{message}"),
            (Severity::Information, Some(e)) => tracing::info!(target: "todo", error = %e, "{message}"),
            (Severity::Warning, None) => tracing::warn!(target: "todo", "{message}"),
            (Severity::Warning, Some(e)) => tracing::warn!(target: "todo", error = %e, "{message}"),
            (Severity::Error, None) => tracing::error!(target: "todo", "{message}"),
            (Severity::Error, Some(e)) => tracing::error!(target: "todo", error = %e, "{message}"),
            (Severity::Critical, None) => {
                tracing::error!(target: "todo", critical = true, "{message}")
            }
            (Severity::Critical, Some(e)) => {
                tracing::error!(target: "todo", critical = true, error = %e, "{message}")
            }
        }
    }
}
