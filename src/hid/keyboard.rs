//! USB HID keyboard report (boot protocol) and the held-key state behind it.
//!
//! Layout (8 bytes):
//! ```text
//! Byte 0: Modifier keys (bitfield)
//!         Bit 0 = Left Ctrl,  Bit 1 = Left Shift,
//!         Bit 2 = Left Alt,   Bit 3 = Left GUI,
//!         Bit 4 = Right Ctrl, Bit 5 = Right Shift,
//!         Bit 6 = Right Alt,  Bit 7 = Right GUI
//! Byte 1: Reserved (0x00)
//! Byte 2-7: Up to 6 simultaneous key codes, left-packed in press order
//! ```

use bitflags::bitflags;
use heapless::Vec;

use super::usage::ERROR_ROLL_OVER;

/// Keyboard report size in bytes.
pub const KEYBOARD_REPORT_SIZE: usize = 8;

/// Number of non-modifier keys a boot-protocol report can carry.
pub const KEY_SLOTS: usize = 6;

bitflags! {
    /// Modifier key bitfield carried in byte 0 of the report.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const LEFT_CTRL   = 0x01;
        const LEFT_SHIFT  = 0x02;
        const LEFT_ALT    = 0x04;
        const LEFT_SUPER  = 0x08;
        const RIGHT_CTRL  = 0x10;
        const RIGHT_SHIFT = 0x20;
        const RIGHT_ALT   = 0x40;
        const RIGHT_SUPER = 0x80;
    }
}

/// A translated key: either an ordinary usage ID or a modifier bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCode {
    Key(u8),
    Modifier(Modifiers),
}

/// Standard USB HID boot-protocol keyboard report.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardReport {
    /// Modifier key bitfield.
    pub modifier: u8,
    /// Reserved byte, always 0x00.
    pub reserved: u8,
    /// Up to 6 simultaneously pressed key codes.
    pub keycodes: [u8; KEY_SLOTS],
}

impl KeyboardReport {
    /// Create an empty (all-keys-released) report.
    pub const fn empty() -> Self {
        Self {
            modifier: 0,
            reserved: 0,
            keycodes: [0; KEY_SLOTS],
        }
    }

    /// Report sent when more keys are held than fit: every key slot carries
    /// ErrorRollOver, modifiers are reported as they are.
    pub const fn roll_over(modifiers: Modifiers) -> Self {
        Self {
            modifier: modifiers.bits(),
            reserved: 0,
            keycodes: [ERROR_ROLL_OVER; KEY_SLOTS],
        }
    }

    /// Report carrying a single key, used for typed characters.
    pub const fn single(scan: u8, modifiers: Modifiers) -> Self {
        Self {
            modifier: modifiers.bits(),
            reserved: 0,
            keycodes: [scan, 0, 0, 0, 0, 0],
        }
    }

    /// Serialise into a byte slice for the gadget endpoint.
    /// Returns the number of bytes written (always 8, or 0 if `buf` is short).
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        if buf.len() < KEYBOARD_REPORT_SIZE {
            return 0;
        }
        buf[0] = self.modifier;
        buf[1] = self.reserved;
        buf[2..KEYBOARD_REPORT_SIZE].copy_from_slice(&self.keycodes);
        KEYBOARD_REPORT_SIZE
    }

    #[cfg(test)]
    pub fn to_bytes(&self) -> [u8; KEYBOARD_REPORT_SIZE] {
        let mut buf = [0u8; KEYBOARD_REPORT_SIZE];
        self.serialize(&mut buf);
        buf
    }

    /// Returns `true` if no keys and no modifiers are pressed.
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.modifier == 0 && self.keycodes.iter().all(|&k| k == 0)
    }

    /// Returns `true` for the ErrorRollOver report.
    #[cfg(test)]
    pub fn is_roll_over(&self) -> bool {
        self.keycodes.iter().all(|&k| k == ERROR_ROLL_OVER)
    }
}

/// Result of pressing a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    /// The key is (now) held; send this report.
    Report(KeyboardReport),
    /// All six slots were taken. The key was not recorded; send this
    /// ErrorRollOver report instead.
    Overflow(KeyboardReport),
}

#[cfg(test)]
impl PressOutcome {
    pub fn report(&self) -> &KeyboardReport {
        match self {
            PressOutcome::Report(report) | PressOutcome::Overflow(report) => report,
        }
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, PressOutcome::Overflow(_))
    }
}

/// Keys and modifiers currently held on one keyboard device.
///
/// Held keys stay left-packed in press order, so the report built from
/// them never has a gap between occupied slots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyboardState {
    modifiers: Modifiers,
    keys: Vec<u8, KEY_SLOTS>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press and return the report to send.
    ///
    /// Pressing a key that is already held does not take another slot.
    pub fn apply_press(&mut self, code: KeyCode) -> PressOutcome {
        match code {
            KeyCode::Modifier(bits) => self.modifiers.insert(bits),
            KeyCode::Key(0) => {}
            KeyCode::Key(scan) => {
                if !self.keys.contains(&scan) && self.keys.push(scan).is_err() {
                    return PressOutcome::Overflow(KeyboardReport::roll_over(self.modifiers));
                }
            }
        }
        PressOutcome::Report(self.report())
    }

    /// Record a release and return the report to send.
    ///
    /// Releasing a key that is not held (for example one rejected by an
    /// earlier overflow) leaves the state untouched.
    pub fn apply_release(&mut self, code: KeyCode) -> KeyboardReport {
        match code {
            KeyCode::Modifier(bits) => self.modifiers.remove(bits),
            KeyCode::Key(scan) => {
                if let Some(slot) = self.keys.iter().position(|&k| k == scan) {
                    self.keys.remove(slot);
                }
            }
        }
        self.report()
    }

    /// Release everything.
    pub fn reset(&mut self) -> KeyboardReport {
        self.modifiers = Modifiers::empty();
        self.keys.clear();
        self.report()
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Held non-modifier keys in slot order.
    pub fn held_keys(&self) -> &[u8] {
        &self.keys
    }

    /// Snapshot of the current report.
    pub fn report(&self) -> KeyboardReport {
        let mut keycodes = [0u8; KEY_SLOTS];
        keycodes[..self.keys.len()].copy_from_slice(&self.keys);
        KeyboardReport {
            modifier: self.modifiers.bits(),
            reserved: 0,
            keycodes,
        }
    }
}

// USB HID report descriptor for a boot-protocol keyboard

/// USB HID Report Descriptor for a standard keyboard.
///
/// Matches the 8-byte report above; write it to the gadget function's
/// `report_desc` when setting up the keyboard endpoint.
pub const KEYBOARD_REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x06, // Usage (Keyboard)
    0xA1, 0x01, // Collection (Application)
    //
    //   - Modifier keys (8 bits) -
    0x05, 0x07, //   Usage Page (Keyboard/Keypad)
    0x19, 0xE0, //   Usage Minimum (Left Control)
    0x29, 0xE7, //   Usage Maximum (Right GUI)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x01, //   Logical Maximum (1)
    0x75, 0x01, //   Report Size (1)
    0x95, 0x08, //   Report Count (8)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    //   - Reserved byte -
    0x95, 0x01, //   Report Count (1)
    0x75, 0x08, //   Report Size (8)
    0x81, 0x01, //   Input (Constant) - padding
    //
    //   - LED output (5 bits + 3 padding) -
    0x05, 0x08, //   Usage Page (LEDs)
    0x19, 0x01, //   Usage Minimum (Num Lock)
    0x29, 0x05, //   Usage Maximum (Kana)
    0x95, 0x05, //   Report Count (5)
    0x75, 0x01, //   Report Size (1)
    0x91, 0x02, //   Output (Data, Variable, Absolute)
    0x95, 0x01, //   Report Count (1)
    0x75, 0x03, //   Report Size (3)
    0x91, 0x01, //   Output (Constant) - padding
    //
    //   - Key codes (6 bytes) -
    0x05, 0x07, //   Usage Page (Keyboard/Keypad)
    0x19, 0x00, //   Usage Minimum (0)
    0x29, 0xFF, //   Usage Maximum (255)
    0x15, 0x00, //   Logical Minimum (0)
    0x26, 0xFF, 0x00, // Logical Maximum (255)
    0x95, 0x06, //   Report Count (6)
    0x75, 0x08, //   Report Size (8)
    0x81, 0x00, //   Input (Data, Array)
    //
    0xC0, // End Collection
];
