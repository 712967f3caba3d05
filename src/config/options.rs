//! Run options and the policies derived from them.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Policy for turning a target name into the path that gets opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamingMode {
    /// Use the target name as given
    Verbatim,
    /// Suffix the target with the count of existing `<target>*` entries
    #[default]
    Numbered,
    /// Suffix the target with a colon-free UTC timestamp
    Timestamped,
}

/// Policy for opening a destination. Both variants create missing files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenMode {
    /// Discard any existing content
    #[default]
    Truncate,
    /// Keep existing content and write after it
    Append,
}

/// Settings for a single run.
///
/// Built once at startup (from the command line or any serde source) and
/// handed to the engine by value. Nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Append to targets instead of truncating; names are used verbatim
    pub append: bool,
    /// Suffix targets with a timestamp instead of a counter
    pub timestamp: bool,
    /// Ignore the interrupt signal for the duration of the run
    pub ignore_interrupt: bool,
    /// File targets, in the order given. Duplicates are opened independently.
    pub targets: Vec<PathBuf>,
}

impl Options {
    /// Create options with no targets and every flag off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a target.
    pub fn with_target(mut self, target: impl Into<PathBuf>) -> Self {
        self.targets.push(target.into());
        self
    }

    /// Set append mode.
    pub fn with_append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }

    /// Set timestamp mode.
    pub fn with_timestamp(mut self, timestamp: bool) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Set whether the interrupt signal is ignored.
    pub fn with_ignore_interrupt(mut self, ignore: bool) -> Self {
        self.ignore_interrupt = ignore;
        self
    }

    /// Naming policy in effect. Append wins over timestamp.
    pub fn naming_mode(&self) -> NamingMode {
        if self.append {
            NamingMode::Verbatim
        } else if self.timestamp {
            NamingMode::Timestamped
        } else {
            NamingMode::Numbered
        }
    }

    /// Open mode in effect.
    pub fn open_mode(&self) -> OpenMode {
        if self.append {
            OpenMode::Append
        } else {
            OpenMode::Truncate
        }
    }
}
