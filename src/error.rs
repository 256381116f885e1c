//! Unified error type for zerohid.
//!
//! Only [`Error::Io`] and [`Error::DeviceUnavailable`] end the process.
//! Invalid input lines and write timeouts are logged by the dispatcher and
//! the loop carries on.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type used across the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// An input line could not be turned into an event.
    #[error("invalid event: {0}")]
    InvalidEvent(#[from] InvalidEvent),

    /// The device did not accept a whole report within the write timeout.
    #[error("device write timed out")]
    WriteTimedOut,

    /// Any other I/O error on the device or the input stream.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A HID device could not be opened at startup.
    #[error("cannot open {}: {source}", path.display())]
    DeviceUnavailable { path: PathBuf, source: io::Error },
}

/// Why an input line was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidEvent {
    /// The line does not match any event form.
    #[error("unrecognised line")]
    Syntax,

    /// A numeric field is missing or not a decimal number.
    #[error("bad number {0:?}")]
    Number(String),

    /// Button state above the 3-bit range.
    #[error("button state {0} out of range 0-7")]
    ButtonsOutOfRange(u8),

    /// Absolute position above 32767.
    #[error("position {0} out of range 0-32767")]
    PositionOutOfRange(u32),

    /// Wheel movement outside -127..127.
    #[error("wheel {0} out of range -127..127")]
    WheelOutOfRange(i32),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
