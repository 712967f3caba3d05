//! In-memory implementations for testing.

use std::collections::{BTreeMap, HashSet};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::{DestinationHandle, ExistingFilesLister, Filesystem, ProcessControl};
use crate::config::OpenMode;

/// In-memory filesystem with per-path failure injection.
///
/// Clones share the same state, so a test can keep one clone for
/// inspection and hand another to the engine.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFilesystem {
    state: Arc<Mutex<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    files: BTreeMap<PathBuf, Vec<u8>>,
    fail_open: HashSet<PathBuf>,
    fail_write: HashSet<PathBuf>,
    fail_close: HashSet<PathBuf>,
    opened: Vec<PathBuf>,
    closed: Vec<PathBuf>,
}

impl InMemoryFilesystem {
    /// Create a new empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file with the given contents.
    pub fn with_file(self, path: impl Into<PathBuf>, data: impl Into<Vec<u8>>) -> Self {
        self.state
            .lock()
            .unwrap()
            .files
            .insert(path.into(), data.into());
        self
    }

    /// Make every open of `path` fail.
    pub fn fail_open(self, path: impl Into<PathBuf>) -> Self {
        self.state.lock().unwrap().fail_open.insert(path.into());
        self
    }

    /// Make every write to `path` fail.
    pub fn fail_write(self, path: impl Into<PathBuf>) -> Self {
        self.state.lock().unwrap().fail_write.insert(path.into());
        self
    }

    /// Make closing `path` fail.
    pub fn fail_close(self, path: impl Into<PathBuf>) -> Self {
        self.state.lock().unwrap().fail_close.insert(path.into());
        self
    }

    /// Get the contents of a file, if it exists.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.state.lock().unwrap().files.get(path.as_ref()).cloned()
    }

    /// Get the contents of a file as a string, if it exists.
    pub fn contents_string(&self, path: impl AsRef<Path>) -> Option<String> {
        self.contents(path)
            .map(|data| String::from_utf8_lossy(&data).into_owned())
    }

    /// Check whether a file exists.
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.state.lock().unwrap().files.contains_key(path.as_ref())
    }

    /// Paths successfully opened, in open order.
    pub fn opened(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().opened.clone()
    }

    /// Paths whose close was attempted, in close order.
    pub fn closed(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().closed.clone()
    }
}

impl Filesystem for InMemoryFilesystem {
    fn open(&self, path: &Path, mode: OpenMode) -> io::Result<Box<dyn DestinationHandle>> {
        let mut state = self.state.lock().unwrap();
        if state.fail_open.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "injected open failure",
            ));
        }

        let file = state.files.entry(path.to_path_buf()).or_default();
        if mode == OpenMode::Truncate {
            file.clear();
        }
        state.opened.push(path.to_path_buf());

        Ok(Box::new(InMemoryHandle {
            path: path.to_path_buf(),
            state: self.state.clone(),
        }))
    }
}

impl ExistingFilesLister for InMemoryFilesystem {
    fn list_matching(&self, target: &Path) -> Vec<PathBuf> {
        let Some(prefix) = target.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            return Vec::new();
        };
        let state = self.state.lock().unwrap();
        state
            .files
            .keys()
            .filter(|path| path.parent() == target.parent())
            .filter(|path| {
                path.file_name()
                    .is_some_and(|n| n.to_string_lossy().starts_with(&prefix))
            })
            .cloned()
            .collect()
    }
}

/// Write handle for an in-memory file.
struct InMemoryHandle {
    path: PathBuf,
    state: Arc<Mutex<MemoryState>>,
}

impl std::fmt::Debug for InMemoryHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryHandle")
            .field("path", &self.path)
            .finish()
    }
}

impl Write for InMemoryHandle {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut state = self.state.lock().unwrap();
        if state.fail_write.contains(&self.path) {
            return Err(io::Error::other("injected write failure"));
        }
        state
            .files
            .entry(self.path.clone())
            .or_default()
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl DestinationHandle for InMemoryHandle {
    fn close(self: Box<Self>) -> io::Result<()> {
        let mut state = self.state.lock().unwrap();
        state.closed.push(self.path.clone());
        if state.fail_close.contains(&self.path) {
            return Err(io::Error::other("injected close failure"));
        }
        Ok(())
    }
}

/// Process control that records requests instead of acting on them.
#[derive(Debug, Clone, Default)]
pub struct RecordingProcessControl {
    ignored: Arc<AtomicUsize>,
}

impl RecordingProcessControl {
    /// Create a new recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times interrupts were asked to be ignored.
    pub fn ignore_count(&self) -> usize {
        self.ignored.load(Ordering::SeqCst)
    }
}

impl ProcessControl for RecordingProcessControl {
    fn ignore_interrupts(&self) {
        self.ignored.fetch_add(1, Ordering::SeqCst);
    }
}
