//! Command-line surface.
//!
//! ```text
//! multitee [-a] [-t] [-i] [FILE]...
//! ```
//!
//! `TeeArgs` parses the flags with `clap` and converts into [`Options`],
//! which is all the engine ever sees.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Options;

/// Copy standard input to standard output and to each FILE.
///
/// Unless -a is given, each FILE is suffixed with `.<n>` (the count of
/// existing `FILE*` entries) or, with -t, with a UTC timestamp.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "multitee", version)]
pub struct TeeArgs {
    /// Append to the files rather than rewriting them; use names verbatim
    #[arg(short = 'a', long = "append")]
    pub append: bool,

    /// Suffix files with a timestamp instead of a number
    #[arg(short = 't', long = "timestamp")]
    pub timestamp: bool,

    /// Ignore the SIGINT signal
    #[arg(short = 'i', long = "ignore-interrupts")]
    pub ignore_interrupt: bool,

    /// Files to copy input into
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl TeeArgs {
    /// Convert into run options.
    pub fn into_options(self) -> Options {
        Options {
            append: self.append,
            timestamp: self.timestamp,
            ignore_interrupt: self.ignore_interrupt,
            targets: self.files,
        }
    }
}

impl From<TeeArgs> for Options {
    fn from(args: TeeArgs) -> Self {
        args.into_options()
    }
}
