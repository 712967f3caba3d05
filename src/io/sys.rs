//! The only `libc` calls in the crate.

use std::fs::File;
use std::io;

/// Close `file` with `close(2)` and report its result.
///
/// Dropping a `File` discards the close error, which is where deferred
/// write failures (NFS, full disks) show up.
#[cfg(unix)]
pub(crate) fn close_file(file: File) -> io::Result<()> {
    use std::os::fd::IntoRawFd;

    let fd = file.into_raw_fd();
    // SAFETY: `fd` was just released by `file`, nothing else owns it.
    if unsafe { libc::close(fd) } == 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

#[cfg(not(unix))]
pub(crate) fn close_file(file: File) -> io::Result<()> {
    drop(file);
    Ok(())
}

/// Set the SIGINT disposition to `SIG_IGN`.
#[cfg(unix)]
pub(crate) fn ignore_sigint() -> io::Result<()> {
    // SAFETY: installs the SIG_IGN disposition; no handler code is registered.
    let previous = unsafe { libc::signal(libc::SIGINT, libc::SIG_IGN) };
    if previous == libc::SIG_ERR {
        Err(io::Error::last_os_error())
    } else {
        Ok(())
    }
}

#[cfg(not(unix))]
pub(crate) fn ignore_sigint() -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "ignoring interrupts is not supported on this platform",
    ))
}
