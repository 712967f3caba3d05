//! Error types for a tee run.
//!
//! This module provides:
//! - `TeeError`: Fatal errors that end a run (open, read, write)
//! - `WriteError`: A failed write, attributed to one fan-out member
//! - `CloseError`: A failed close, reported but never fatal

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Identifier used for the primary output in error messages.
pub const PRIMARY_ID: &str = "-";

/// A write to one member of the fan-out sink failed.
#[derive(Debug, Error)]
#[error("error writing {target}: {source}")]
pub struct WriteError {
    /// Destination path, or `-` for the primary output
    pub target: String,
    /// The underlying error
    #[source]
    pub source: io::Error,
}

/// Closing a destination failed.
///
/// Everything written before the close has already been handed to the
/// destination, so this is a warning about that file only.
#[derive(Debug, Error)]
#[error("error closing file {path:?}: {source}")]
pub struct CloseError {
    /// Resolved path of the destination
    pub path: PathBuf,
    /// The underlying error
    #[source]
    pub source: io::Error,
}

/// A fatal error. The run stops as soon as one of these occurs.
///
/// Destinations opened before the failure are still closed; any close
/// failures from that cleanup travel with the error.
#[derive(Debug, Error)]
pub enum TeeError {
    /// A destination could not be opened. No data was copied.
    #[error("error opening {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
        close_errors: Vec<CloseError>,
    },
    /// The input stream failed mid-copy.
    #[error("error reading input: {source}")]
    Read {
        #[source]
        source: io::Error,
        close_errors: Vec<CloseError>,
    },
    /// A fan-out member rejected a chunk mid-copy.
    #[error("{error}")]
    Write {
        #[source]
        error: WriteError,
        close_errors: Vec<CloseError>,
    },
}

impl TeeError {
    /// Close failures collected while cleaning up after this error.
    pub fn close_errors(&self) -> &[CloseError] {
        match self {
            TeeError::Open { close_errors, .. }
            | TeeError::Read { close_errors, .. }
            | TeeError::Write { close_errors, .. } => close_errors,
        }
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
