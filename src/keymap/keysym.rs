//! X11 keysym to HID key or modifier.

use crate::hid::usage::*;
use crate::hid::{KeyCode, Modifiers};

/// X11 keysym values (from `keysymdef.h`) for the keys we translate.
#[allow(non_upper_case_globals)]
pub mod xk {
    pub const space: u16 = 0x0020;
    pub const exclam: u16 = 0x0021;
    pub const quotedbl: u16 = 0x0022;
    pub const numbersign: u16 = 0x0023;
    pub const dollar: u16 = 0x0024;
    pub const percent: u16 = 0x0025;
    pub const ampersand: u16 = 0x0026;
    pub const apostrophe: u16 = 0x0027;
    pub const parenleft: u16 = 0x0028;
    pub const parenright: u16 = 0x0029;
    pub const asterisk: u16 = 0x002a;
    pub const plus: u16 = 0x002b;
    pub const comma: u16 = 0x002c;
    pub const minus: u16 = 0x002d;
    pub const period: u16 = 0x002e;
    pub const slash: u16 = 0x002f;
    pub const _0: u16 = 0x0030;
    pub const _1: u16 = 0x0031;
    pub const _2: u16 = 0x0032;
    pub const _3: u16 = 0x0033;
    pub const _4: u16 = 0x0034;
    pub const _5: u16 = 0x0035;
    pub const _6: u16 = 0x0036;
    pub const _7: u16 = 0x0037;
    pub const _8: u16 = 0x0038;
    pub const _9: u16 = 0x0039;
    pub const colon: u16 = 0x003a;
    pub const semicolon: u16 = 0x003b;
    pub const less: u16 = 0x003c;
    pub const equal: u16 = 0x003d;
    pub const greater: u16 = 0x003e;
    pub const question: u16 = 0x003f;
    pub const at: u16 = 0x0040;
    pub const A: u16 = 0x0041;
    pub const Z: u16 = 0x005a;
    pub const bracketleft: u16 = 0x005b;
    pub const backslash: u16 = 0x005c;
    pub const bracketright: u16 = 0x005d;
    pub const asciicircum: u16 = 0x005e;
    pub const underscore: u16 = 0x005f;
    pub const grave: u16 = 0x0060;
    pub const a: u16 = 0x0061;
    pub const z: u16 = 0x007a;
    pub const braceleft: u16 = 0x007b;
    pub const bar: u16 = 0x007c;
    pub const braceright: u16 = 0x007d;
    pub const asciitilde: u16 = 0x007e;

    pub const BackSpace: u16 = 0xff08;
    pub const Tab: u16 = 0xff09;
    pub const Return: u16 = 0xff0d;
    pub const Pause: u16 = 0xff13;
    pub const Scroll_Lock: u16 = 0xff14;
    pub const Sys_Req: u16 = 0xff15;
    pub const Escape: u16 = 0xff1b;
    pub const Home: u16 = 0xff50;
    pub const Left: u16 = 0xff51;
    pub const Up: u16 = 0xff52;
    pub const Right: u16 = 0xff53;
    pub const Down: u16 = 0xff54;
    pub const Page_Up: u16 = 0xff55;
    pub const Page_Down: u16 = 0xff56;
    pub const End: u16 = 0xff57;
    pub const Insert: u16 = 0xff63;
    pub const Break: u16 = 0xff6b;
    pub const Num_Lock: u16 = 0xff7f;
    pub const KP_Enter: u16 = 0xff8d;
    pub const KP_Home: u16 = 0xff95;
    pub const KP_Left: u16 = 0xff96;
    pub const KP_Up: u16 = 0xff97;
    pub const KP_Right: u16 = 0xff98;
    pub const KP_Down: u16 = 0xff99;
    pub const KP_Page_Up: u16 = 0xff9a;
    pub const KP_Page_Down: u16 = 0xff9b;
    pub const KP_End: u16 = 0xff9c;
    pub const KP_Insert: u16 = 0xff9e;
    pub const KP_Delete: u16 = 0xff9f;
    pub const KP_Multiply: u16 = 0xffaa;
    pub const KP_Add: u16 = 0xffab;
    pub const KP_Subtract: u16 = 0xffad;
    pub const KP_Decimal: u16 = 0xffae;
    pub const KP_Divide: u16 = 0xffaf;
    pub const KP_0: u16 = 0xffb0;
    pub const KP_1: u16 = 0xffb1;
    pub const KP_9: u16 = 0xffb9;
    pub const F1: u16 = 0xffbe;
    pub const F12: u16 = 0xffc9;
    pub const Shift_L: u16 = 0xffe1;
    pub const Shift_R: u16 = 0xffe2;
    pub const Control_L: u16 = 0xffe3;
    pub const Control_R: u16 = 0xffe4;
    pub const Caps_Lock: u16 = 0xffe5;
    pub const Alt_L: u16 = 0xffe9;
    pub const Alt_R: u16 = 0xffea;
    pub const Super_L: u16 = 0xffeb;
    pub const Super_R: u16 = 0xffec;
    pub const Delete: u16 = 0xffff;
}

/// Key for an X11 keysym, independent of the active layout.
///
/// Both glyphs on a key (`a`/`A`, `1`/`!`, `[`/`{`) give the same usage ID;
/// the sender is expected to report Shift separately.
pub fn from_keysym(sym: u16) -> Option<KeyCode> {
    let scan = match sym {
        // usage IDs for letters, F-keys and keypad 1-9 run in the same order
        // as the keysyms
        xk::A..=xk::Z => A + (sym - xk::A) as u8,
        xk::a..=xk::z => A + (sym - xk::a) as u8,
        xk::F1..=xk::F12 => F1 + (sym - xk::F1) as u8,
        xk::KP_1..=xk::KP_9 => KP_1 + (sym - xk::KP_1) as u8,

        xk::_1 | xk::exclam => DIGIT_1,
        xk::_2 | xk::at => DIGIT_2,
        xk::_3 | xk::numbersign => DIGIT_3,
        xk::_4 | xk::dollar => DIGIT_4,
        xk::_5 | xk::percent => DIGIT_5,
        xk::_6 | xk::asciicircum => DIGIT_6,
        xk::_7 | xk::ampersand => DIGIT_7,
        xk::_8 | xk::asterisk => DIGIT_8,
        xk::_9 | xk::parenleft => DIGIT_9,
        xk::_0 | xk::parenright => DIGIT_0,
        xk::Return => ENTER,
        xk::Escape => ESCAPE,
        xk::BackSpace => BACKSPACE,
        xk::Tab => TAB,
        xk::space => SPACE,
        xk::minus | xk::underscore => MINUS,
        xk::equal | xk::plus => EQUAL,
        xk::bracketleft | xk::braceleft => LEFT_BRACE,
        xk::bracketright | xk::braceright => RIGHT_BRACE,
        xk::backslash | xk::bar => BACKSLASH,
        xk::semicolon | xk::colon => SEMICOLON,
        xk::apostrophe | xk::quotedbl => APOSTROPHE,
        xk::grave | xk::asciitilde => GRAVE,
        xk::comma | xk::less => COMMA,
        xk::period | xk::greater => DOT,
        xk::slash | xk::question => SLASH,
        xk::Caps_Lock => CAPS_LOCK,
        xk::Sys_Req => SYSRQ,
        xk::Scroll_Lock => SCROLL_LOCK,
        xk::Pause | xk::Break => PAUSE,
        xk::Insert => INSERT,
        xk::Home => HOME,
        xk::Page_Up => PAGE_UP,
        xk::Delete => DELETE,
        xk::End => END,
        xk::Page_Down => PAGE_DOWN,
        xk::Right => RIGHT,
        xk::Left => LEFT,
        xk::Down => DOWN,
        xk::Up => UP,
        xk::Num_Lock => NUM_LOCK,
        xk::KP_Divide => KP_SLASH,
        xk::KP_Multiply => KP_ASTERISK,
        xk::KP_Subtract => KP_MINUS,
        xk::KP_Add => KP_PLUS,
        xk::KP_Enter => KP_ENTER,
        xk::KP_End => KP_1,
        xk::KP_Down => KP_2,
        xk::KP_Page_Down => KP_3,
        xk::KP_Left => KP_4,
        xk::KP_Right => KP_6,
        xk::KP_Home => KP_7,
        xk::KP_Up => KP_8,
        xk::KP_Page_Up => KP_9,
        xk::KP_0 | xk::KP_Insert => KP_0,
        xk::KP_Decimal | xk::KP_Delete => KP_DOT,

        xk::Control_L => return Some(KeyCode::Modifier(Modifiers::LEFT_CTRL)),
        xk::Shift_L => return Some(KeyCode::Modifier(Modifiers::LEFT_SHIFT)),
        xk::Alt_L => return Some(KeyCode::Modifier(Modifiers::LEFT_ALT)),
        xk::Super_L => return Some(KeyCode::Modifier(Modifiers::LEFT_SUPER)),
        xk::Control_R => return Some(KeyCode::Modifier(Modifiers::RIGHT_CTRL)),
        xk::Shift_R => return Some(KeyCode::Modifier(Modifiers::RIGHT_SHIFT)),
        xk::Alt_R => return Some(KeyCode::Modifier(Modifiers::RIGHT_ALT)),
        xk::Super_R => return Some(KeyCode::Modifier(Modifiers::RIGHT_SUPER)),

        _ => return None,
    };
    Some(KeyCode::Key(scan))
}
