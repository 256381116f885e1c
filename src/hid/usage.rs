//! USB HID Keyboard/Keypad page usage IDs (scan codes).
//!
//! Only the keys of a 101-key keyboard are listed. Names follow the US
//! QWERTY key caps even though the usage IDs are layout independent.

/// Reported in every key slot when more keys are held than fit in a
/// boot-protocol report.
pub const ERROR_ROLL_OVER: u8 = 0x01;

pub const A: u8 = 0x04;
pub const B: u8 = 0x05;
pub const C: u8 = 0x06;
pub const D: u8 = 0x07;
pub const E: u8 = 0x08;
pub const F: u8 = 0x09;
pub const G: u8 = 0x0A;
pub const H: u8 = 0x0B;
pub const I: u8 = 0x0C;
pub const J: u8 = 0x0D;
pub const K: u8 = 0x0E;
pub const L: u8 = 0x0F;
pub const M: u8 = 0x10;
pub const N: u8 = 0x11;
pub const O: u8 = 0x12;
pub const P: u8 = 0x13;
pub const Q: u8 = 0x14;
pub const R: u8 = 0x15;
pub const S: u8 = 0x16;
pub const T: u8 = 0x17;
pub const U: u8 = 0x18;
pub const V: u8 = 0x19;
pub const W: u8 = 0x1A;
pub const X: u8 = 0x1B;
pub const Y: u8 = 0x1C;
pub const Z: u8 = 0x1D;

pub const DIGIT_1: u8 = 0x1E; // and !
pub const DIGIT_2: u8 = 0x1F; // and @
pub const DIGIT_3: u8 = 0x20; // and #
pub const DIGIT_4: u8 = 0x21; // and $
pub const DIGIT_5: u8 = 0x22; // and %
pub const DIGIT_6: u8 = 0x23; // and ^
pub const DIGIT_7: u8 = 0x24; // and &
pub const DIGIT_8: u8 = 0x25; // and *
pub const DIGIT_9: u8 = 0x26; // and (
pub const DIGIT_0: u8 = 0x27; // and )

pub const ENTER: u8 = 0x28;
pub const ESCAPE: u8 = 0x29;
pub const BACKSPACE: u8 = 0x2A;
pub const TAB: u8 = 0x2B;
pub const SPACE: u8 = 0x2C;
pub const MINUS: u8 = 0x2D; // and _
pub const EQUAL: u8 = 0x2E; // and +
pub const LEFT_BRACE: u8 = 0x2F; // and {
pub const RIGHT_BRACE: u8 = 0x30; // and }
pub const BACKSLASH: u8 = 0x31; // and |
pub const HASH_TILDE: u8 = 0x32; // non-US # and ~
pub const SEMICOLON: u8 = 0x33; // and :
pub const APOSTROPHE: u8 = 0x34; // and "
pub const GRAVE: u8 = 0x35; // and ~
pub const COMMA: u8 = 0x36; // and <
pub const DOT: u8 = 0x37; // and >
pub const SLASH: u8 = 0x38; // and ?
pub const CAPS_LOCK: u8 = 0x39;

pub const F1: u8 = 0x3A;
pub const F2: u8 = 0x3B;
pub const F3: u8 = 0x3C;
pub const F4: u8 = 0x3D;
pub const F5: u8 = 0x3E;
pub const F6: u8 = 0x3F;
pub const F7: u8 = 0x40;
pub const F8: u8 = 0x41;
pub const F9: u8 = 0x42;
pub const F10: u8 = 0x43;
pub const F11: u8 = 0x44;
pub const F12: u8 = 0x45;

pub const SYSRQ: u8 = 0x46;
pub const SCROLL_LOCK: u8 = 0x47;
pub const PAUSE: u8 = 0x48;
pub const INSERT: u8 = 0x49;
pub const HOME: u8 = 0x4A;
pub const PAGE_UP: u8 = 0x4B;
pub const DELETE: u8 = 0x4C;
pub const END: u8 = 0x4D;
pub const PAGE_DOWN: u8 = 0x4E;
pub const RIGHT: u8 = 0x4F;
pub const LEFT: u8 = 0x50;
pub const DOWN: u8 = 0x51;
pub const UP: u8 = 0x52;

pub const NUM_LOCK: u8 = 0x53;

pub const KP_SLASH: u8 = 0x54;
pub const KP_ASTERISK: u8 = 0x55;
pub const KP_MINUS: u8 = 0x56;
pub const KP_PLUS: u8 = 0x57;
pub const KP_ENTER: u8 = 0x58;
pub const KP_1: u8 = 0x59; // and End
pub const KP_2: u8 = 0x5A; // and Down
pub const KP_3: u8 = 0x5B; // and Page Down
pub const KP_4: u8 = 0x5C; // and Left
pub const KP_5: u8 = 0x5D;
pub const KP_6: u8 = 0x5E; // and Right
pub const KP_7: u8 = 0x5F; // and Home
pub const KP_8: u8 = 0x60; // and Up
pub const KP_9: u8 = 0x61; // and Page Up
pub const KP_0: u8 = 0x62; // and Insert
pub const KP_DOT: u8 = 0x63; // and Delete
