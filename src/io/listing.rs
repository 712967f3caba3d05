//! Existing-entry listing used by numbered naming.

use std::path::{Path, PathBuf};

/// Lists filesystem entries whose name is `target` followed by any suffix.
///
/// Implementations never fail: anything that prevents listing is reported
/// as "no entries", which makes numbered naming fall back to suffix `0`.
pub trait ExistingFilesLister {
    /// Entries matching `<target>*`, in no particular order.
    fn list_matching(&self, target: &Path) -> Vec<PathBuf>;
}
