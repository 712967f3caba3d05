//! The fan-out copier.
//!
//! A run moves through `Idle → Opening → Copying → Closing → Done`. An open
//! failure goes `Opening → Closing → Failed`, closing whatever was already
//! opened; a read or write failure goes `Copying → Closing → Failed`. Every
//! destination that was opened is closed exactly once, in open order.

use std::fmt;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::config::Options;
use crate::error::{CloseError, TeeError, WriteError};
use crate::fanout::{Destination, FanoutSink};
use crate::io::{Filesystem, ProcessControl};
use crate::naming;

/// Size of the buffer input is read into.
pub const CHUNK_SIZE: usize = 32 * 1024;

/// Phase of a run, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Idle,
    Opening,
    Copying,
    Closing,
    Done,
    Failed,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Idle => write!(f, "Idle"),
            RunState::Opening => write!(f, "Opening"),
            RunState::Copying => write!(f, "Copying"),
            RunState::Closing => write!(f, "Closing"),
            RunState::Done => write!(f, "Done"),
            RunState::Failed => write!(f, "Failed"),
        }
    }
}

fn enter(state: &mut RunState, next: RunState) {
    debug!(from = %state, to = %next, "run state");
    *state = next;
}

/// Outcome of a run that did not fail fatally.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Bytes read from input and delivered to every member
    pub bytes_copied: u64,
    /// Resolved destination paths, in open order
    pub paths: Vec<PathBuf>,
    /// Destinations that failed to close, in close order
    pub close_errors: Vec<CloseError>,
}

impl RunReport {
    /// True when every destination also closed cleanly.
    pub fn is_clean(&self) -> bool {
        self.close_errors.is_empty()
    }
}

enum CopyFailure {
    Read(io::Error),
    Write(WriteError),
}

/// Copies one input stream to the primary output and every target.
pub struct TeeEngine {
    options: Options,
    filesystem: Arc<dyn Filesystem>,
    process: Arc<dyn ProcessControl>,
}

impl TeeEngine {
    /// Create a new engine.
    pub fn new(
        options: Options,
        filesystem: Arc<dyn Filesystem>,
        process: Arc<dyn ProcessControl>,
    ) -> Self {
        Self {
            options,
            filesystem,
            process,
        }
    }

    /// Get the run options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Open every target, copy `input` to all of them and to `primary`,
    /// then close every target.
    ///
    /// Open, read and write failures are fatal. Close failures are collected
    /// in the report (or in the fatal error, if one occurred) and never stop
    /// the remaining closes.
    pub fn run(&self, primary: &mut dyn Write, input: &mut dyn Read) -> Result<RunReport, TeeError> {
        let mut state = RunState::Idle;

        if self.options.ignore_interrupt {
            self.process.ignore_interrupts();
        }

        enter(&mut state, RunState::Opening);
        let mut destinations = match self.open_all() {
            Ok(destinations) => destinations,
            Err(err) => {
                enter(&mut state, RunState::Failed);
                return Err(err);
            }
        };
        let paths: Vec<PathBuf> = destinations
            .iter()
            .map(|d| d.path().to_path_buf())
            .collect();

        enter(&mut state, RunState::Copying);
        let copied = {
            let mut sink = FanoutSink::new(&mut destinations, primary);
            copy_stream(input, &mut sink)
        };

        enter(&mut state, RunState::Closing);
        let close_errors = close_all(destinations);

        match copied {
            Ok(bytes_copied) => {
                enter(&mut state, RunState::Done);
                debug!(bytes_copied, destinations = paths.len(), "copy finished");
                Ok(RunReport {
                    bytes_copied,
                    paths,
                    close_errors,
                })
            }
            Err(CopyFailure::Read(source)) => {
                enter(&mut state, RunState::Failed);
                Err(TeeError::Read {
                    source,
                    close_errors,
                })
            }
            Err(CopyFailure::Write(error)) => {
                enter(&mut state, RunState::Failed);
                Err(TeeError::Write {
                    error,
                    close_errors,
                })
            }
        }
    }

    /// Resolve and open every target in order. Stops at the first failure,
    /// closing what was opened before it.
    fn open_all(&self) -> Result<Vec<Destination>, TeeError> {
        let mode = self.options.open_mode();
        let mut destinations = Vec::with_capacity(self.options.targets.len());

        for name in &self.options.targets {
            let path = naming::resolve_path(name, &self.options, &*self.filesystem);
            debug!(name = %name.display(), path = %path.display(), ?mode, "opening destination");

            match self.filesystem.open(&path, mode) {
                Ok(handle) => destinations.push(Destination::new(path, handle)),
                Err(source) => {
                    let close_errors = close_all(destinations);
                    return Err(TeeError::Open {
                        path,
                        source,
                        close_errors,
                    });
                }
            }
        }

        Ok(destinations)
    }
}

/// Read `input` to the end, broadcasting each chunk before reading the next.
fn copy_stream(input: &mut dyn Read, sink: &mut FanoutSink<'_>) -> Result<u64, CopyFailure> {
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut total = 0u64;

    loop {
        let n = match input.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(CopyFailure::Read(e)),
        };
        sink.broadcast(&buf[..n]).map_err(CopyFailure::Write)?;
        total += n as u64;
        trace!(chunk = n, total, members = sink.member_count(), "chunk fanned out");
    }

    Ok(total)
}

/// Close every destination in order, collecting failures.
fn close_all(destinations: Vec<Destination>) -> Vec<CloseError> {
    destinations
        .into_iter()
        .filter_map(|destination| destination.close().err())
        .inspect(|e| warn!(path = %e.path.display(), error = %e.source, "close failed"))
        .collect()
}
