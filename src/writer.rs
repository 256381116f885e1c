//! Report delivery to a gadget endpoint opened non-blocking.
//!
//! A HID gadget endpoint only accepts a report once the host has polled the
//! previous one, so writes routinely fail with `EAGAIN`. [`ReliableWriter`]
//! keeps retrying, yielding the CPU between attempts, until the whole
//! report is written or the timeout runs out.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use nix::fcntl::OFlag;
use tracing::{debug, trace};

use crate::config::WRITE_TIMEOUT;
use crate::error::{Error, Result};
use crate::hid::{HidReport, MAX_REPORT_SIZE};

/// Open a HID gadget device for non-blocking reads and writes.
pub fn open_device(path: &Path) -> Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .custom_flags(OFlag::O_NONBLOCK.bits())
        .open(path)
        .map_err(|source| Error::DeviceUnavailable {
            path: path.to_path_buf(),
            source,
        })
}

/// Wraps one device handle with the retry/timeout write policy.
#[derive(Debug)]
pub struct ReliableWriter<W> {
    inner: W,
    timeout: Duration,
}

impl<W: Write> ReliableWriter<W> {
    pub fn new(inner: W) -> Self {
        Self::with_timeout(inner, WRITE_TIMEOUT)
    }

    pub fn with_timeout(inner: W, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Write all of `buf`.
    ///
    /// Would-block and interrupted writes are retried. Returns
    /// [`Error::WriteTimedOut`] once more than the timeout has passed since
    /// the first attempt with bytes still outstanding, and [`Error::Io`] for
    /// any other failure.
    pub fn write_report(&mut self, buf: &[u8]) -> Result<()> {
        let start = Instant::now();
        let mut remaining = buf;

        while !remaining.is_empty() {
            match self.inner.write(remaining) {
                Ok(n) if n > 0 => {
                    remaining = &remaining[n..];
                    continue;
                }
                Ok(_) => trace!("device accepted nothing"),
                Err(err)
                    if matches!(
                        err.kind(),
                        io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted
                    ) =>
                {
                    trace!(kind = ?err.kind(), "device busy");
                }
                Err(err) => return Err(Error::Io(err)),
            }

            if start.elapsed() > self.timeout {
                debug!(
                    unsent = remaining.len(),
                    len = buf.len(),
                    "hid write timeout"
                );
                return Err(Error::WriteTimedOut);
            }
            thread::yield_now();
        }
        Ok(())
    }

    /// Serialise and write one report.
    pub fn send(&mut self, report: &HidReport) -> Result<()> {
        let mut buf = [0u8; MAX_REPORT_SIZE];
        let n = report.serialize(&mut buf);
        self.write_report(&buf[..n])
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
