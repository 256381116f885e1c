//! USB HID absolute-pointer mouse report.
//!
//! Layout (6 bytes, little-endian):
//! ```text
//! Byte 0:   Button bitfield
//!           Bit 0 = Left, Bit 1 = Right, Bit 2 = Middle, bits 3-7 zero
//! Byte 1-2: Absolute X position (0..32767)
//! Byte 3-4: Absolute Y position (0..32767)
//! Byte 5:   Scroll wheel delta (signed, -127..127)
//! ```

use crate::error::InvalidEvent;

/// Mouse report size in bytes.
pub const MOUSE_REPORT_SIZE: usize = 6;

/// Highest button bitfield value (three buttons).
pub const MAX_BUTTONS: u8 = 0x07;

/// Highest absolute coordinate on either axis.
pub const MAX_POSITION: u16 = 32767;

/// Largest wheel movement in either direction.
pub const MAX_WHEEL: i8 = 127;

/// One absolute pointer sample.
///
/// Fields are range-checked by [`MouseReport::new`]; a report built that way
/// always serialises to a valid 6-byte report.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MouseReport {
    /// Button bitfield (bit 0 = left, bit 1 = right, bit 2 = middle).
    pub buttons: u8,
    /// Absolute X position.
    pub x: u16,
    /// Absolute Y position.
    pub y: u16,
    /// Scroll wheel delta (signed).
    pub wheel: i8,
}

impl MouseReport {
    /// Validate a sample. Out-of-range values are rejected, never clamped.
    pub fn new(buttons: u8, x: u16, y: u16, wheel: i8) -> Result<Self, InvalidEvent> {
        if buttons > MAX_BUTTONS {
            return Err(InvalidEvent::ButtonsOutOfRange(buttons));
        }
        if x > MAX_POSITION {
            return Err(InvalidEvent::PositionOutOfRange(x.into()));
        }
        if y > MAX_POSITION {
            return Err(InvalidEvent::PositionOutOfRange(y.into()));
        }
        if wheel < -MAX_WHEEL {
            return Err(InvalidEvent::WheelOutOfRange(wheel.into()));
        }
        Ok(Self {
            buttons,
            x,
            y,
            wheel,
        })
    }

    /// Create an idle (pointer at origin, no buttons) report.
    #[cfg(test)]
    pub const fn empty() -> Self {
        Self {
            buttons: 0,
            x: 0,
            y: 0,
            wheel: 0,
        }
    }

    /// Serialise into a byte slice for the gadget endpoint.
    /// Returns the number of bytes written (always 6, or 0 if `buf` is short).
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        if buf.len() < MOUSE_REPORT_SIZE {
            return 0;
        }
        buf[0] = self.buttons;
        buf[1..3].copy_from_slice(&self.x.to_le_bytes());
        buf[3..5].copy_from_slice(&self.y.to_le_bytes());
        buf[5] = self.wheel as u8;
        MOUSE_REPORT_SIZE
    }

    #[cfg(test)]
    pub fn to_bytes(&self) -> [u8; MOUSE_REPORT_SIZE] {
        let mut buf = [0u8; MOUSE_REPORT_SIZE];
        self.serialize(&mut buf);
        buf
    }
}

// USB HID report descriptor for the absolute mouse

/// USB HID Report Descriptor for a 3-button absolute pointer with wheel.
pub const MOUSE_REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x02, // Usage (Mouse)
    0xA1, 0x01, // Collection (Application)
    0x09, 0x01, //   Usage (Pointer)
    0xA1, 0x00, //   Collection (Physical)
    //
    //   - Buttons (3 bits + 5 padding) -
    0x05, 0x09, //     Usage Page (Buttons)
    0x19, 0x01, //     Usage Minimum (Button 1)
    0x29, 0x03, //     Usage Maximum (Button 3)
    0x15, 0x00, //     Logical Minimum (0)
    0x25, 0x01, //     Logical Maximum (1)
    0x95, 0x03, //     Report Count (3)
    0x75, 0x01, //     Report Size (1)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x95, 0x01, //     Report Count (1)
    0x75, 0x05, //     Report Size (5)
    0x81, 0x01, //     Input (Constant) - padding
    //
    //   - X, Y position (16 bits each) -
    0x05, 0x01, //     Usage Page (Generic Desktop)
    0x09, 0x30, //     Usage (X)
    0x09, 0x31, //     Usage (Y)
    0x15, 0x00, //     Logical Minimum (0)
    0x26, 0xFF, 0x7F, // Logical Maximum (32767)
    0x75, 0x10, //     Report Size (16)
    0x95, 0x02, //     Report Count (2)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    //
    //   - Scroll wheel -
    0x09, 0x38, //     Usage (Wheel)
    0x15, 0x81, //     Logical Minimum (-127)
    0x25, 0x7F, //     Logical Maximum (127)
    0x75, 0x08, //     Report Size (8)
    0x95, 0x01, //     Report Count (1)
    0x81, 0x06, //     Input (Data, Variable, Relative)
    //
    0xC0, //   End Collection (Physical)
    0xC0, // End Collection (Application)
];
