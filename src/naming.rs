//! Output naming policy.
//!
//! Turns a target name into the concrete path that gets opened:
//!
//! - append mode uses the target verbatim;
//! - timestamp mode appends `.<UTC timestamp>` with colons removed, e.g.
//!   `log.2024-05-01T120304Z`;
//! - numbered mode (the default) appends `.<n>`, where `n` is the number of
//!   existing entries matching `<target>*`.
//!
//! Numbered naming is not safe against concurrent runs on the same target:
//! two runs can count the same `n` and open the same path.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};

use crate::config::{NamingMode, Options};
use crate::io::ExistingFilesLister;

/// Resolve `target` to the path to open under the options' naming mode.
pub fn resolve_path<L>(target: &Path, options: &Options, lister: &L) -> PathBuf
where
    L: ExistingFilesLister + ?Sized,
{
    resolve_path_at(target, options.naming_mode(), lister, Utc::now())
}

/// Like [`resolve_path`], with an explicit mode and clock reading.
pub fn resolve_path_at<L>(
    target: &Path,
    mode: NamingMode,
    lister: &L,
    now: DateTime<Utc>,
) -> PathBuf
where
    L: ExistingFilesLister + ?Sized,
{
    match mode {
        NamingMode::Verbatim => target.to_path_buf(),
        NamingMode::Timestamped => with_suffix(target, &timestamp_suffix(now)),
        NamingMode::Numbered => {
            let count = lister.list_matching(target).len();
            with_suffix(target, &count.to_string())
        }
    }
}

/// RFC 3339 UTC timestamp at second precision with every colon removed.
pub fn timestamp_suffix(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Secs, true)
        .replace(':', "")
}

fn with_suffix(target: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(target.as_os_str());
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}
