//! ASCII byte to key and modifier, for a US layout.

use crate::hid::usage::*;
use crate::hid::Modifiers;

const NONE: Modifiers = Modifiers::empty();
const SHIFT: Modifiers = Modifiers::LEFT_SHIFT;
const CTRL: Modifiers = Modifiers::LEFT_CTRL;

/// Key and modifiers that type `c` on a US layout.
///
/// Control characters become Ctrl+key, except backspace, tab, newline and
/// escape which have keys of their own. Bytes above 0x7F return scan code 0.
pub fn from_ascii(c: u8) -> (u8, Modifiers) {
    match c {
        0 => (DIGIT_2, CTRL), // ^@
        1 => (A, CTRL),
        2 => (B, CTRL),
        3 => (C, CTRL),
        4 => (D, CTRL),
        5 => (E, CTRL),
        6 => (F, CTRL),
        7 => (G, CTRL),
        8 => (BACKSPACE, NONE),
        9 => (TAB, NONE),
        10 => (ENTER, NONE),
        11 => (K, CTRL),
        12 => (L, CTRL),
        13 => (M, CTRL),
        14 => (N, CTRL),
        15 => (O, CTRL),
        16 => (P, CTRL),
        17 => (Q, CTRL),
        18 => (R, CTRL),
        19 => (S, CTRL),
        20 => (T, CTRL),
        21 => (U, CTRL),
        22 => (V, CTRL),
        23 => (W, CTRL),
        24 => (X, CTRL),
        25 => (Y, CTRL),
        26 => (Z, CTRL),
        27 => (ESCAPE, NONE),
        28 => (LEFT_BRACE, CTRL),
        29 => (BACKSLASH, CTRL),
        30 => (RIGHT_BRACE, CTRL),
        31 => (MINUS, CTRL),
        b' ' => (SPACE, NONE),
        b'!' => (DIGIT_1, SHIFT),
        b'"' => (APOSTROPHE, SHIFT),
        b'#' => (DIGIT_3, SHIFT),
        b'$' => (DIGIT_4, SHIFT),
        b'%' => (DIGIT_5, SHIFT),
        b'&' => (DIGIT_7, SHIFT),
        b'\'' => (APOSTROPHE, NONE),
        b'(' => (DIGIT_9, SHIFT),
        b')' => (DIGIT_0, SHIFT),
        b'*' => (DIGIT_8, SHIFT),
        b'+' => (EQUAL, SHIFT),
        b',' => (COMMA, NONE),
        b'-' => (MINUS, NONE),
        b'.' => (DOT, NONE),
        b'/' => (SLASH, NONE),
        b'0' => (DIGIT_0, NONE),
        b'1' => (DIGIT_1, NONE),
        b'2' => (DIGIT_2, NONE),
        b'3' => (DIGIT_3, NONE),
        b'4' => (DIGIT_4, NONE),
        b'5' => (DIGIT_5, NONE),
        b'6' => (DIGIT_6, NONE),
        b'7' => (DIGIT_7, NONE),
        b'8' => (DIGIT_8, NONE),
        b'9' => (DIGIT_9, NONE),
        b':' => (SEMICOLON, SHIFT),
        b';' => (SEMICOLON, NONE),
        b'<' => (COMMA, SHIFT),
        b'=' => (EQUAL, NONE),
        b'>' => (DOT, SHIFT),
        b'?' => (SLASH, SHIFT),
        b'@' => (DIGIT_2, SHIFT),
        b'A' => (A, SHIFT),
        b'B' => (B, SHIFT),
        b'C' => (C, SHIFT),
        b'D' => (D, SHIFT),
        b'E' => (E, SHIFT),
        b'F' => (F, SHIFT),
        b'G' => (G, SHIFT),
        b'H' => (H, SHIFT),
        b'I' => (I, SHIFT),
        b'J' => (J, SHIFT),
        b'K' => (K, SHIFT),
        b'L' => (L, SHIFT),
        b'M' => (M, SHIFT),
        b'N' => (N, SHIFT),
        b'O' => (O, SHIFT),
        b'P' => (P, SHIFT),
        b'Q' => (Q, SHIFT),
        b'R' => (R, SHIFT),
        b'S' => (S, SHIFT),
        b'T' => (T, SHIFT),
        b'U' => (U, SHIFT),
        b'V' => (V, SHIFT),
        b'W' => (W, SHIFT),
        b'X' => (X, SHIFT),
        b'Y' => (Y, SHIFT),
        b'Z' => (Z, SHIFT),
        b'[' => (LEFT_BRACE, NONE),
        b'\\' => (BACKSLASH, NONE),
        b']' => (RIGHT_BRACE, NONE),
        b'^' => (DIGIT_6, SHIFT),
        b'_' => (MINUS, SHIFT),
        b'`' => (GRAVE, NONE),
        b'a' => (A, NONE),
        b'b' => (B, NONE),
        b'c' => (C, NONE),
        b'd' => (D, NONE),
        b'e' => (E, NONE),
        b'f' => (F, NONE),
        b'g' => (G, NONE),
        b'h' => (H, NONE),
        b'i' => (I, NONE),
        b'j' => (J, NONE),
        b'k' => (K, NONE),
        b'l' => (L, NONE),
        b'm' => (M, NONE),
        b'n' => (N, NONE),
        b'o' => (O, NONE),
        b'p' => (P, NONE),
        b'q' => (Q, NONE),
        b'r' => (R, NONE),
        b's' => (S, NONE),
        b't' => (T, NONE),
        b'u' => (U, NONE),
        b'v' => (V, NONE),
        b'w' => (W, NONE),
        b'x' => (X, NONE),
        b'y' => (Y, NONE),
        b'z' => (Z, NONE),
        b'{' => (LEFT_BRACE, SHIFT),
        b'|' => (BACKSLASH, SHIFT),
        b'}' => (RIGHT_BRACE, SHIFT),
        b'~' => (GRAVE, SHIFT),
        127 => (BACKSPACE, NONE), // DEL
        _ => (0, NONE),
    }
}
