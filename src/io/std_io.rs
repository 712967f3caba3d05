//! OS-backed implementations of the filesystem and process collaborators.

use std::ffi::OsStr;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use tracing::{debug, warn};

use super::sys;
use super::{DestinationHandle, ExistingFilesLister, Filesystem, ProcessControl};
use crate::config::OpenMode;

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem;

impl OsFilesystem {
    /// Create a new OS filesystem handle.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for OsFilesystem {
    fn open(&self, path: &Path, mode: OpenMode) -> io::Result<Box<dyn DestinationHandle>> {
        let mut options = OpenOptions::new();
        options.write(true).create(true);
        match mode {
            OpenMode::Truncate => {
                options.truncate(true);
            }
            OpenMode::Append => {
                options.append(true);
            }
        }
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o666);
        }

        let file = options.open(path)?;
        Ok(Box::new(FileHandle { file }))
    }
}

impl ExistingFilesLister for OsFilesystem {
    fn list_matching(&self, target: &Path) -> Vec<PathBuf> {
        glob_prefix(target).unwrap_or_default()
    }
}

/// Expand `<target>*` within the target's parent directory.
///
/// The file-name part is compiled as a glob, so `*`, `?`, `[...]` and `\`
/// in the target keep their glob meaning. Braces are literal. Returns `None`
/// when the pattern is invalid or the directory cannot be read.
fn glob_prefix(target: &Path) -> Option<Vec<PathBuf>> {
    let name = target.file_name()?;
    let parent = target.parent().filter(|p| !p.as_os_str().is_empty());
    let dir = parent.unwrap_or(Path::new("."));

    let matcher = NameMatcher::new(name)?;

    let entries = fs::read_dir(dir).ok()?;
    let matches = entries
        .filter_map(Result::ok)
        .map(|entry| entry.file_name())
        .filter(|file_name| matcher.is_match(file_name))
        .map(|file_name| match parent {
            Some(p) => p.join(file_name),
            None => PathBuf::from(file_name),
        })
        .collect();
    Some(matches)
}

/// Matches directory entries against `<name>*`.
enum NameMatcher {
    Glob(GlobMatcher),
    /// Non-UTF-8 names cannot be compiled as a glob; match their raw bytes.
    #[cfg(unix)]
    BytePrefix(Vec<u8>),
}

impl NameMatcher {
    fn new(name: &OsStr) -> Option<Self> {
        match name.to_str() {
            Some(name) => GlobBuilder::new(&format!("{}*", escape_braces(name)))
                .literal_separator(true)
                .backslash_escape(true)
                .build()
                .ok()
                .map(|glob| Self::Glob(glob.compile_matcher())),
            #[cfg(unix)]
            None => {
                use std::os::unix::ffi::OsStrExt;
                Some(Self::BytePrefix(name.as_bytes().to_vec()))
            }
            #[cfg(not(unix))]
            None => None,
        }
    }

    fn is_match(&self, file_name: &OsStr) -> bool {
        match self {
            Self::Glob(matcher) => matcher.is_match(file_name),
            #[cfg(unix)]
            Self::BytePrefix(prefix) => {
                use std::os::unix::ffi::OsStrExt;
                file_name.as_bytes().starts_with(prefix)
            }
        }
    }
}

/// Rewrite `{` and `}` outside character classes as one-element classes.
///
/// globset reads braces as alternation; shell-style `*`/`?`/`[...]` matching
/// does not.
fn escape_braces(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_class = false;
    let mut chars = name.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' if !in_class => {
                out.push(c);
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            '[' if !in_class => {
                in_class = true;
                out.push(c);
            }
            ']' if in_class => {
                in_class = false;
                out.push(c);
            }
            '{' | '}' if !in_class => {
                out.push('[');
                out.push(c);
                out.push(']');
            }
            _ => out.push(c),
        }
    }
    out
}

/// A destination backed by an open file.
#[derive(Debug)]
struct FileHandle {
    file: File,
}

impl Write for FileHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl DestinationHandle for FileHandle {
    fn close(self: Box<Self>) -> io::Result<()> {
        let mut file = self.file;
        file.flush()?;
        sys::close_file(file)
    }
}

/// Process control for the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsProcessControl;

impl OsProcessControl {
    /// Create a new OS process-control handle.
    pub fn new() -> Self {
        Self
    }
}

impl ProcessControl for OsProcessControl {
    fn ignore_interrupts(&self) {
        match sys::ignore_sigint() {
            Ok(()) => debug!("SIGINT ignored"),
            Err(error) => warn!(%error, "failed to ignore SIGINT"),
        }
    }
}
