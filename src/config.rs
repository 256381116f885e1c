//! Application-wide constants and compile-time configuration.
//!
//! Timing and buffer limits live here so they can be tuned in one place.

use std::time::Duration;

// Device writes

/// How long a single report may wait for the gadget endpoint to drain
/// before it is given up.
pub const WRITE_TIMEOUT: Duration = Duration::from_millis(1000);

// Input

/// Size of the structured-mode line buffer. Lines keep at most
/// `LINE_BUFFER_LEN - 1` characters; the rest of the line is dropped.
pub const LINE_BUFFER_LEN: usize = 32;

// Logging

/// Log filter when `-d` is not given. `RUST_LOG` overrides both.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Log filter with `-d`.
pub const DEBUG_LOG_FILTER: &str = "zerohid=debug";
