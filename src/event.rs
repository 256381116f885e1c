//! Structured input events, one per line.
//!
//! ```text
//! +<keysym>              key press (decimal X11 keysym)
//! -<keysym>              key release
//! !                      release all keys and modifiers
//! <b> <x> <y> [<wheel>]  mouse sample: b = button bits 0-7,
//!                        x, y = 0..32767, wheel = -127..127 (default 0)
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidEvent;
use crate::hid::mouse::{MAX_POSITION, MAX_WHEEL};
use crate::hid::MouseReport;

/// One parsed input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Press(u16),
    Release(u16),
    Reset,
    Mouse(MouseReport),
}

impl FromStr for Event {
    type Err = InvalidEvent;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        parse_line(line)
    }
}

/// Parse one line (without its newline).
pub fn parse_line(line: &str) -> Result<Event, InvalidEvent> {
    let mut chars = line.chars();
    match chars.next() {
        Some('+') => parse_keysym(chars.as_str()).map(Event::Press),
        Some('-') => parse_keysym(chars.as_str()).map(Event::Release),
        Some('!') if chars.as_str().trim().is_empty() => Ok(Event::Reset),
        Some(c @ '0'..='7') => parse_mouse(c as u8 - b'0', chars.as_str()),
        _ => Err(InvalidEvent::Syntax),
    }
}

fn parse_keysym(field: &str) -> Result<u16, InvalidEvent> {
    parse_decimal(field.trim())
}

fn parse_mouse(buttons: u8, rest: &str) -> Result<Event, InvalidEvent> {
    // the button digit stands alone
    if !rest.starts_with(|c: char| c.is_ascii_whitespace()) {
        return Err(InvalidEvent::Syntax);
    }

    let mut fields = rest.split_ascii_whitespace();
    let (Some(x), Some(y)) = (fields.next(), fields.next()) else {
        return Err(InvalidEvent::Syntax);
    };
    let wheel = fields.next();
    if fields.next().is_some() {
        return Err(InvalidEvent::Syntax);
    }

    let x = parse_position(x)?;
    let y = parse_position(y)?;
    let wheel = match wheel {
        Some(field) => parse_wheel(field)?,
        None => 0,
    };

    MouseReport::new(buttons, x, y, wheel).map(Event::Mouse)
}

fn parse_position(field: &str) -> Result<u16, InvalidEvent> {
    let value: u32 = parse_decimal(field)?;
    u16::try_from(value)
        .ok()
        .filter(|&v| v <= MAX_POSITION)
        .ok_or(InvalidEvent::PositionOutOfRange(value))
}

fn parse_wheel(field: &str) -> Result<i8, InvalidEvent> {
    let (negative, digits) = match field.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, field.strip_prefix('+').unwrap_or(field)),
    };
    let magnitude: i32 = parse_decimal(digits)?;
    let value = if negative { -magnitude } else { magnitude };
    if value.abs() > i32::from(MAX_WHEEL) {
        return Err(InvalidEvent::WheelOutOfRange(value));
    }
    Ok(value as i8)
}

/// Unsigned decimal, digits only.
fn parse_decimal<T: FromStr>(field: &str) -> Result<T, InvalidEvent> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidEvent::Number(field.to_owned()));
    }
    field
        .parse()
        .map_err(|_| InvalidEvent::Number(field.to_owned()))
}

/// Displays bytes as space separated hex, for logging rejected lines.
pub struct HexDump<'a>(pub &'a [u8]);

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}
