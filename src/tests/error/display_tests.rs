//! Tests for error message formatting.

use std::io;
use std::path::PathBuf;

use crate::error::{CloseError, PRIMARY_ID, TeeError, WriteError};

fn close_error(path: &str) -> CloseError {
    CloseError {
        path: PathBuf::from(path),
        source: io::Error::other("disk quota exceeded"),
    }
}

#[test]
fn open_error_names_path_and_cause() {
    let err = TeeError::Open {
        path: PathBuf::from("/root/locked.txt"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        close_errors: Vec::new(),
    };
    assert_eq!(
        err.to_string(),
        "error opening /root/locked.txt: permission denied"
    );
}

#[test]
fn write_error_names_target() {
    let err = TeeError::Write {
        error: WriteError {
            target: PRIMARY_ID.to_string(),
            source: io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"),
        },
        close_errors: Vec::new(),
    };
    assert_eq!(err.to_string(), "error writing -: broken pipe");
}

#[test]
fn close_error_quotes_path() {
    assert_eq!(
        close_error("out.0").to_string(),
        "error closing file \"out.0\": disk quota exceeded"
    );
}

#[test]
fn fatal_errors_carry_cleanup_close_errors() {
    let err = TeeError::Read {
        source: io::Error::other("device gone"),
        close_errors: vec![close_error("a.0"), close_error("b.0")],
    };
    assert_eq!(err.to_string(), "error reading input: device gone");
    assert_eq!(err.close_errors().len(), 2);
    assert!(std::error::Error::source(&err).is_some());
}
