//! Destination and process-control trait definitions.

use std::fmt::Debug;
use std::io::{self, Write};
use std::path::Path;

use super::ExistingFilesLister;
use crate::config::OpenMode;

/// An opened destination, exclusively owned by whoever holds the box.
pub trait DestinationHandle: Write + Send {
    /// Release the destination, reporting failures from the release itself.
    ///
    /// Called exactly once per handle.
    fn close(self: Box<Self>) -> io::Result<()>;
}

/// Trait for filesystems destinations are opened on.
///
/// Implementors open a writable handle for a concrete path and can list
/// existing entries for numbered naming.
pub trait Filesystem: ExistingFilesLister + Send + Sync + Debug {
    /// Open `path` for writing under `mode`, creating it if absent.
    fn open(&self, path: &Path, mode: OpenMode) -> io::Result<Box<dyn DestinationHandle>>;
}

/// Process-wide side effects the engine may request.
pub trait ProcessControl: Send + Sync + Debug {
    /// Stop the interrupt signal from terminating the process.
    fn ignore_interrupts(&self);
}
