//! # multitee
//!
//! Duplicate one input stream to standard output and any number of files.
//!
//! ## Overview
//!
//! multitee provides:
//! - **Fan-out copying**: Every chunk read is written to each file, then to the primary output
//! - **Naming policies**: Append to names verbatim, number them, or timestamp them
//! - **Partial-failure semantics**: Open, read and write failures are fatal; close
//!   failures are reported per file and never stop the other closes
//! - **Pluggable collaborators**: The filesystem and process control are traits,
//!   with OS-backed and in-memory implementations
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use multitee::TeeBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = TeeBuilder::new()
//!         .add_target("build.log")
//!         .with_append(true)
//!         .build();
//!
//!     let report = engine.run(&mut std::io::stdout(), &mut std::io::stdin())?;
//!     for e in &report.close_errors {
//!         eprintln!("{e}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Naming
//!
//! | Mode       | Flag | Opened path                 | Open mode |
//! |------------|------|-----------------------------|-----------|
//! | Append     | `-a` | `<target>`                  | append    |
//! | Timestamp  | `-t` | `<target>.<UTC, no colons>` | truncate  |
//! | Numbered   |      | `<target>.<n>`              | truncate  |
//!
//! `-a` wins over `-t`. In numbered mode `n` counts the existing entries
//! matching `<target>*`, so sequential runs get increasing suffixes.
//!
//! ## Features
//!
//! - `miette` - Pretty error reporting with miette

pub mod builder;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod fanout;
pub mod io;
pub mod naming;

// Re-exports for convenience
pub use builder::TeeBuilder;
pub use config::{NamingMode, OpenMode, Options};
pub use engine::{RunReport, TeeEngine};
pub use error::{CloseError, TeeError, WriteError};
pub use fanout::{Destination, FanoutSink};
pub use io::{
    DestinationHandle, ExistingFilesLister, Filesystem, InMemoryFilesystem, OsFilesystem,
    OsProcessControl, ProcessControl, RecordingProcessControl,
};
pub use naming::{resolve_path, timestamp_suffix};

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::TeeDiagnostic;
