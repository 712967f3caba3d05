//! Destinations and the broadcast sink that feeds them.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{CloseError, PRIMARY_ID, WriteError};
use crate::io::DestinationHandle;

/// An opened output file bound to its resolved path.
///
/// Owns its handle exclusively. Closing consumes the destination, so a
/// destination is closed at most once.
pub struct Destination {
    path: PathBuf,
    handle: Box<dyn DestinationHandle>,
}

impl Destination {
    /// Bind an opened handle to the path it was opened at.
    pub fn new(path: PathBuf, handle: Box<dyn DestinationHandle>) -> Self {
        Self { path, handle }
    }

    /// Get the resolved path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Close the underlying handle.
    pub fn close(self) -> Result<(), CloseError> {
        let path = self.path;
        self.handle
            .close()
            .map_err(|source| CloseError { path, source })
    }

    fn id(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Destination")
            .field("path", &self.path)
            .finish()
    }
}

/// Writes every chunk to every destination, then to the primary output.
///
/// Borrows everything it writes to and owns nothing, so it lives only as
/// long as the copy loop. The first failing member stops the broadcast;
/// members earlier in the order may already hold the chunk.
pub struct FanoutSink<'a> {
    destinations: &'a mut [Destination],
    primary: &'a mut dyn Write,
}

impl<'a> FanoutSink<'a> {
    /// Create a sink over `destinations` (in order) followed by `primary`.
    pub fn new(destinations: &'a mut [Destination], primary: &'a mut dyn Write) -> Self {
        Self {
            destinations,
            primary,
        }
    }

    /// Number of members, the primary output included.
    pub fn member_count(&self) -> usize {
        self.destinations.len() + 1
    }

    /// Write all of `chunk` to every member in order.
    ///
    /// The primary output is flushed after each chunk so it never lags the
    /// files.
    pub fn broadcast(&mut self, chunk: &[u8]) -> Result<(), WriteError> {
        for destination in self.destinations.iter_mut() {
            if let Err(source) = destination.handle.write_all(chunk) {
                return Err(WriteError {
                    target: destination.id(),
                    source,
                });
            }
        }

        self.primary
            .write_all(chunk)
            .and_then(|()| self.primary.flush())
            .map_err(|source| WriteError {
                target: PRIMARY_ID.to_string(),
                source,
            })
    }
}
