//! Builder for creating TeeEngine instances.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Options;
use crate::engine::TeeEngine;
use crate::io::{Filesystem, OsFilesystem, OsProcessControl, ProcessControl};

pub struct TeeBuilder {
    options: Options,
    filesystem: Option<Arc<dyn Filesystem>>,
    process: Option<Arc<dyn ProcessControl>>,
}

impl TeeBuilder {
    pub fn new() -> Self {
        Self::from_options(Options::default())
    }

    pub fn from_options(options: Options) -> Self {
        Self {
            options,
            filesystem: None,
            process: None,
        }
    }

    pub fn targets_from_args(mut self, args: &[PathBuf]) -> Self {
        self.options.targets = args.to_vec();
        self
    }

    pub fn add_target(mut self, target: impl Into<PathBuf>) -> Self {
        self.options.targets.push(target.into());
        self
    }

    pub fn with_append(mut self, append: bool) -> Self {
        self.options.append = append;
        self
    }

    pub fn with_timestamp(mut self, timestamp: bool) -> Self {
        self.options.timestamp = timestamp;
        self
    }

    pub fn with_ignore_interrupt(mut self, ignore: bool) -> Self {
        self.options.ignore_interrupt = ignore;
        self
    }

    /// Use `filesystem` instead of the OS filesystem.
    pub fn with_filesystem(mut self, filesystem: Arc<dyn Filesystem>) -> Self {
        self.filesystem = Some(filesystem);
        self
    }

    /// Use `process` instead of acting on the running process.
    pub fn with_process_control(mut self, process: Arc<dyn ProcessControl>) -> Self {
        self.process = Some(process);
        self
    }

    pub fn build(self) -> TeeEngine {
        let filesystem = self
            .filesystem
            .unwrap_or_else(|| Arc::new(OsFilesystem::new()));
        let process = self
            .process
            .unwrap_or_else(|| Arc::new(OsProcessControl::new()));

        TeeEngine::new(self.options, filesystem, process)
    }
}

impl Default for TeeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
