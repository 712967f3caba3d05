//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{CloseError, TeeError};

/// A diagnostic wrapper for tee errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct TeeDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

impl From<TeeError> for TeeDiagnostic {
    fn from(e: TeeError) -> Self {
        let (message, source, help) = match e {
            TeeError::Open { path, source, .. } => (
                format!("cannot open '{}'", path.display()),
                source,
                "Check that the parent directory exists and is writable",
            ),
            TeeError::Read { source, .. } => (
                "cannot read input".to_string(),
                source,
                "Output files hold everything read before the failure",
            ),
            TeeError::Write { error, .. } => (
                format!("cannot write to '{}'", error.target),
                error.source,
                "Copying stopped at the first failed write; outputs may be incomplete",
            ),
        };
        TeeDiagnostic {
            message,
            source: Some(Box::new(source)),
            help: Some(help.into()),
            severity: Severity::Error,
        }
    }
}

impl From<CloseError> for TeeDiagnostic {
    fn from(e: CloseError) -> Self {
        TeeDiagnostic {
            message: format!("cannot close '{}'", e.path.display()),
            source: Some(Box::new(e.source)),
            help: Some("All data was written before the close failed".into()),
            severity: Severity::Warning,
        }
    }
}

impl From<TeeError> for miette::Report {
    fn from(e: TeeError) -> Self {
        miette::Report::new(TeeDiagnostic::from(e))
    }
}
