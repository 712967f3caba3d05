//! Collaborators that touch the operating system.
//!
//! This module provides:
//! - `Filesystem`: Opens destinations and lists existing entries
//! - `DestinationHandle`: An owned, writable, closable destination
//! - `ExistingFilesLister`: Enumerates `<target>*` entries for numbered naming
//! - `ProcessControl`: Process-level side effects such as ignoring interrupts
//! - OS-backed implementations and in-memory doubles for testing

mod listing;
mod memory;
mod output;
mod std_io;
mod sys;

pub use listing::ExistingFilesLister;
pub use memory::{InMemoryFilesystem, RecordingProcessControl};
pub use output::{DestinationHandle, Filesystem, ProcessControl};
pub use std_io::{OsFilesystem, OsProcessControl};
