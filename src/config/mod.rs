//! Run configuration.
//!
//! This module provides:
//! - `Options`: Immutable settings resolved once before a run
//! - `NamingMode`: How target names become concrete paths
//! - `OpenMode`: How destinations are opened

mod options;

pub use options::{NamingMode, OpenMode, Options};
