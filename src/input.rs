//! Byte-level reader for the event stream.
//!
//! Structured mode consumes newline-terminated lines, ASCII mode single raw
//! bytes; both draw from the same buffer so nothing is lost when the mode
//! switches mid-stream.

use std::io::{self, BufReader, Bytes, Read};

use crate::config::LINE_BUFFER_LEN;

pub struct InputReader<R> {
    bytes: Bytes<BufReader<R>>,
}

impl<R: Read> InputReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            bytes: BufReader::new(inner).bytes(),
        }
    }

    /// Next raw byte, or `None` at end of input.
    pub fn read_byte(&mut self) -> io::Result<Option<u8>> {
        self.bytes.next().transpose()
    }

    /// Next line without its `\n`, or `None` at end of input.
    ///
    /// Only printable ASCII is kept, and at most `LINE_BUFFER_LEN - 1`
    /// characters of it; anything beyond is read and discarded. A final
    /// line without a newline is still returned.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::with_capacity(LINE_BUFFER_LEN);
        let mut seen_any = false;

        while let Some(byte) = self.read_byte()? {
            seen_any = true;
            match byte {
                b'\n' => return Ok(Some(line)),
                b' '..=b'~' if line.len() < LINE_BUFFER_LEN - 1 => line.push(byte as char),
                _ => {}
            }
        }

        Ok(seen_any.then_some(line))
    }
}
