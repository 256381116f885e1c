//! Event loop: reads the input stream, keeps the keyboard state and sends
//! reports to the keyboard and mouse endpoints.
//!
//! ```text
//!            empty line
//!   Auto ─────────────────▶ AsciiOnly (terminal)
//!
//!   StructuredOnly          (empty lines ignored)
//! ```

use std::io::{Read, Write};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::event::{parse_line, Event, HexDump};
use crate::hid::{HidReport, KeyboardReport, KeyboardState, MouseReport, PressOutcome};
use crate::input::InputReader;
use crate::keymap::{from_ascii, from_keysym};
use crate::writer::ReliableWriter;

/// How input is interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Structured lines; an empty line switches to [`Mode::AsciiOnly`].
    #[default]
    Auto,
    /// Structured lines only.
    StructuredOnly,
    /// Raw characters, each typed as a press and a release.
    AsciiOnly,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Auto => "auto",
            Mode::StructuredOnly => "structured",
            Mode::AsciiOnly => "ascii",
        }
    }
}

/// Owns the keyboard state and both device writers for one session.
pub struct Dispatcher<K, M> {
    mode: Mode,
    state: KeyboardState,
    keyboard: ReliableWriter<K>,
    mouse: Option<ReliableWriter<M>>,
}

impl<K: Write, M: Write> Dispatcher<K, M> {
    pub fn new(mode: Mode, keyboard: ReliableWriter<K>, mouse: Option<ReliableWriter<M>>) -> Self {
        Self {
            mode,
            state: KeyboardState::new(),
            keyboard,
            mouse,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn keyboard_state(&self) -> &KeyboardState {
        &self.state
    }

    /// Give back the device writers.
    pub fn into_writers(self) -> (ReliableWriter<K>, Option<ReliableWriter<M>>) {
        (self.keyboard, self.mouse)
    }

    /// Process the whole input stream.
    ///
    /// Returns `Ok` at end of input and `Err` only for fatal I/O errors.
    pub fn run<R: Read>(&mut self, input: &mut InputReader<R>) -> Result<()> {
        info!(mode = self.mode.name(), "starting");
        loop {
            if self.mode == Mode::AsciiOnly {
                let Some(c) = input.read_byte()? else { break };
                self.handle_char(c)?;
            } else {
                let Some(line) = input.read_line()? else { break };
                self.handle_line(&line)?;
            }
        }
        info!("end of input");
        Ok(())
    }

    /// Handle one structured-mode line (without its newline).
    pub fn handle_line(&mut self, line: &str) -> Result<()> {
        if line.is_empty() {
            match self.mode {
                Mode::Auto => {
                    info!("switching to ascii mode");
                    self.mode = Mode::AsciiOnly;
                }
                _ => debug!("ignoring empty line"),
            }
            return Ok(());
        }

        match parse_line(line) {
            Ok(event) => self.handle_event(event),
            Err(err) => {
                debug!(line = %HexDump(line.as_bytes()), error = %err, "invalid line");
                Ok(())
            }
        }
    }

    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Reset => {
                debug!("reset");
                let report = self.state.reset();
                self.send_keyboard(report)
            }
            Event::Press(sym) => {
                let Some(code) = from_keysym(sym) else {
                    debug!(keysym = sym, "unmapped key");
                    return Ok(());
                };
                debug!(keysym = sym, ?code, "press");
                match self.state.apply_press(code) {
                    PressOutcome::Report(report) => self.send_keyboard(report),
                    PressOutcome::Overflow(report) => {
                        debug!(keysym = sym, "key rollover overflow");
                        self.send_keyboard(report)
                    }
                }
            }
            Event::Release(sym) => {
                let Some(code) = from_keysym(sym) else {
                    debug!(keysym = sym, "unmapped key");
                    return Ok(());
                };
                debug!(keysym = sym, ?code, "release");
                let report = self.state.apply_release(code);
                self.send_keyboard(report)
            }
            Event::Mouse(report) => self.send_mouse(report),
        }
    }

    /// Type one raw character: a press report, then an all-zero release.
    pub fn handle_char(&mut self, c: u8) -> Result<()> {
        let (scan, modifiers) = from_ascii(c);
        if scan == 0 {
            debug!(char = c, "unmapped character");
            return Ok(());
        }
        debug!(char = c, scan, modifiers = modifiers.bits(), "ascii");
        self.send_keyboard(KeyboardReport::single(scan, modifiers))?;
        self.send_keyboard(KeyboardReport::empty())
    }

    fn send_keyboard(&mut self, report: KeyboardReport) -> Result<()> {
        deliver(&mut self.keyboard, HidReport::Keyboard(report))
    }

    fn send_mouse(&mut self, report: MouseReport) -> Result<()> {
        match self.mouse.as_mut() {
            Some(mouse) => deliver(mouse, HidReport::Mouse(report)),
            None => {
                debug!("no mouse device, ignoring mouse event");
                Ok(())
            }
        }
    }
}

/// Send a report. A timeout is logged and swallowed: the report is lost but
/// the next one carries the current state.
fn deliver<W: Write>(writer: &mut ReliableWriter<W>, report: HidReport) -> Result<()> {
    match writer.send(&report) {
        Err(Error::WriteTimedOut) => {
            warn!(?report, "device not accepting reports, dropped one");
            Ok(())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hid::usage;
    use crate::keymap::KeyCode;
    use std::time::Duration;

    type TestDispatcher = Dispatcher<Vec<u8>, Vec<u8>>;

    fn dispatcher(mode: Mode) -> TestDispatcher {
        Dispatcher::new(
            mode,
            ReliableWriter::new(Vec::new()),
            Some(ReliableWriter::new(Vec::new())),
        )
    }

    fn keyboard_reports(d: TestDispatcher) -> Vec<[u8; 8]> {
        let (keyboard, _) = d.into_writers();
        keyboard
            .into_inner()
            .chunks(8)
            .map(|c| c.try_into().unwrap())
            .collect()
    }

    #[test]
    fn empty_line_switches_auto_to_ascii() {
        let mut d = dispatcher(Mode::Auto);
        d.handle_line("").unwrap();
        assert_eq!(d.mode(), Mode::AsciiOnly);
    }

    #[test]
    fn structured_only_ignores_empty_line() {
        let mut d = dispatcher(Mode::StructuredOnly);
        d.handle_line("").unwrap();
        assert_eq!(d.mode(), Mode::StructuredOnly);
        assert!(keyboard_reports(d).is_empty());
    }

    #[test]
    fn invalid_lines_produce_nothing() {
        let mut d = dispatcher(Mode::Auto);
        for line in ["x", "+abc", "9 1 2", "0 40000 1", "+1 2"] {
            d.handle_line(line).unwrap();
        }
        assert_eq!(d.mode(), Mode::Auto);
        assert_eq!(d.keyboard_state().report(), KeyboardReport::empty());
        let (keyboard, mouse) = d.into_writers();
        assert!(keyboard.into_inner().is_empty());
        assert!(mouse.unwrap().into_inner().is_empty());
    }

    #[test]
    fn unmapped_keysym_sends_nothing() {
        let mut d = dispatcher(Mode::Auto);
        d.handle_line("+233").unwrap(); // eacute
        assert!(keyboard_reports(d).is_empty());
    }

    #[test]
    fn shift_and_letter() {
        let mut d = dispatcher(Mode::Auto);
        for line in ["+65505", "+97", "-97", "-65505"] {
            d.handle_line(line).unwrap();
        }
        assert_eq!(
            keyboard_reports(d),
            [
                [0x02, 0, 0, 0, 0, 0, 0, 0],
                [0x02, 0, usage::A, 0, 0, 0, 0, 0],
                [0x02, 0, 0, 0, 0, 0, 0, 0],
                [0, 0, 0, 0, 0, 0, 0, 0],
            ]
        );
    }

    #[test]
    fn ascii_character_is_press_then_release() {
        let mut d = dispatcher(Mode::AsciiOnly);
        d.handle_char(b'A').unwrap();
        assert_eq!(
            keyboard_reports(d),
            [[0x02, 0, usage::A, 0, 0, 0, 0, 0], [0; 8]]
        );
    }

    #[test]
    fn ascii_mode_does_not_touch_key_state() {
        let mut d = dispatcher(Mode::AsciiOnly);
        d.handle_char(b'x').unwrap();
        assert!(d.keyboard_state().held_keys().is_empty());
    }

    #[test]
    fn mouse_goes_to_mouse_device() {
        let mut d = dispatcher(Mode::Auto);
        d.handle_line("5 100 200 -10").unwrap();
        let (keyboard, mouse) = d.into_writers();
        assert!(keyboard.into_inner().is_empty());
        assert_eq!(mouse.unwrap().into_inner(), [5, 100, 0, 200, 0, 246]);
    }

    #[test]
    fn mouse_without_device_is_ignored() {
        let mut d: TestDispatcher =
            Dispatcher::new(Mode::Auto, ReliableWriter::new(Vec::new()), None);
        d.handle_line("1 10 10").unwrap();
        assert!(keyboard_reports(d).is_empty());
    }

    #[test]
    fn reset_clears_everything() {
        let mut d = dispatcher(Mode::Auto);
        for line in ["+65507", "+97", "+98", "!"] {
            d.handle_line(line).unwrap();
        }
        assert_eq!(d.keyboard_state().report(), KeyboardReport::empty());
        assert_eq!(keyboard_reports(d).last(), Some(&[0u8; 8]));
    }

    struct Stalled;

    impl Write for Stalled {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::WouldBlock.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn timeout_keeps_state_and_continues() {
        let mut d: Dispatcher<Stalled, Vec<u8>> = Dispatcher::new(
            Mode::Auto,
            ReliableWriter::with_timeout(Stalled, Duration::from_millis(5)),
            Some(ReliableWriter::new(Vec::new())),
        );
        d.handle_line("+97").unwrap();
        assert_eq!(
            d.keyboard_state().held_keys(),
            [match from_keysym(97) {
                Some(KeyCode::Key(scan)) => scan,
                other => panic!("unexpected {other:?}"),
            }]
        );

        // the stalled keyboard does not hold up the mouse
        d.handle_line("0 1 1").unwrap();
        let (_, mouse) = d.into_writers();
        assert_eq!(mouse.unwrap().into_inner(), [0, 1, 0, 1, 0, 0]);
    }

    /// Refuses the first report it is offered for as long as the writer
    /// keeps retrying it, then accepts everything.
    #[derive(Default)]
    struct StuckOnFirst {
        stuck_on: Option<Vec<u8>>,
        recovered: bool,
        written: Vec<u8>,
    }

    impl Write for StuckOnFirst {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if !self.recovered {
                match &self.stuck_on {
                    None => {
                        self.stuck_on = Some(buf.to_vec());
                        return Err(std::io::ErrorKind::WouldBlock.into());
                    }
                    Some(first) if first.as_slice() == buf => {
                        return Err(std::io::ErrorKind::WouldBlock.into());
                    }
                    Some(_) => self.recovered = true,
                }
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn ascii_release_sent_after_press_timeout() {
        let mut d: Dispatcher<StuckOnFirst, Vec<u8>> = Dispatcher::new(
            Mode::AsciiOnly,
            ReliableWriter::with_timeout(StuckOnFirst::default(), Duration::from_millis(5)),
            None,
        );
        d.handle_char(b'a').unwrap();
        d.handle_char(b'b').unwrap();

        let (keyboard, _) = d.into_writers();
        let device = keyboard.into_inner();
        assert_eq!(device.stuck_on.as_deref(), Some(&[0, 0, usage::A, 0, 0, 0, 0, 0][..]));
        assert_eq!(
            device.written,
            [
                [0u8; 8],
                [0, 0, usage::B, 0, 0, 0, 0, 0],
                [0; 8],
            ]
            .concat()
        );
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn fatal_io_error_propagates() {
        let mut d: Dispatcher<Broken, Vec<u8>> =
            Dispatcher::new(Mode::Auto, ReliableWriter::new(Broken), None);
        assert!(matches!(d.handle_line("+97"), Err(Error::Io(_))));
    }
}
