//! Integration tests: whole input streams through the dispatcher, with
//! in-memory buffers standing in for the gadget devices.

use zerohid::{Dispatcher, InputReader, Mode, ReliableWriter};

/// Run `input` to completion and return what each device received.
fn run(mode: Mode, input: &[u8]) -> (Vec<u8>, Vec<u8>, Mode) {
    let mut dispatcher: Dispatcher<Vec<u8>, Vec<u8>> = Dispatcher::new(
        mode,
        ReliableWriter::new(Vec::new()),
        Some(ReliableWriter::new(Vec::new())),
    );
    dispatcher
        .run(&mut InputReader::new(input))
        .expect("in-memory devices never fail");
    let final_mode = dispatcher.mode();
    let (keyboard, mouse) = dispatcher.into_writers();
    let mouse = mouse.expect("mouse writer was given").into_inner();
    (keyboard.into_inner(), mouse, final_mode)
}

fn reports<const N: usize>(bytes: &[u8]) -> Vec<[u8; N]> {
    assert_eq!(bytes.len() % N, 0, "partial report written");
    bytes
        .chunks(N)
        .map(|chunk| chunk.try_into().unwrap())
        .collect()
}

#[test]
fn empty_line_then_ascii_character() {
    let (keyboard, mouse, mode) = run(Mode::Auto, b"\nA");
    assert_eq!(mode, Mode::AsciiOnly);
    assert_eq!(
        reports::<8>(&keyboard),
        [[0x02, 0, 0x04, 0, 0, 0, 0, 0], [0; 8]]
    );
    assert!(mouse.is_empty());
}

#[test]
fn ascii_mode_types_every_mapped_byte() {
    // 'h', 'i', '\n' (Enter), 0x80 (unmapped, skipped)
    let (keyboard, _, _) = run(Mode::AsciiOnly, b"hi\n\x80");
    assert_eq!(
        reports::<8>(&keyboard),
        [
            [0, 0, 0x0B, 0, 0, 0, 0, 0],
            [0; 8],
            [0, 0, 0x0C, 0, 0, 0, 0, 0],
            [0; 8],
            [0, 0, 0x28, 0, 0, 0, 0, 0],
            [0; 8],
        ]
    );
}

#[test]
fn structured_session_routes_reports() {
    let input = b"\
+65507
+99
5 100 200 -10
-99
garbage
1 32767 0
-65507
";
    let (keyboard, mouse, mode) = run(Mode::Auto, input);
    assert_eq!(mode, Mode::Auto);
    assert_eq!(
        reports::<8>(&keyboard),
        [
            [0x01, 0, 0, 0, 0, 0, 0, 0],
            [0x01, 0, 0x06, 0, 0, 0, 0, 0],
            [0x01, 0, 0, 0, 0, 0, 0, 0],
            [0; 8],
        ]
    );
    assert_eq!(
        reports::<6>(&mouse),
        [[5, 100, 0, 200, 0, 246], [1, 0xFF, 0x7F, 0, 0, 0]]
    );
}

#[test]
fn structured_only_never_switches() {
    let (keyboard, _, mode) = run(Mode::StructuredOnly, b"\n+97\n\n-97\n");
    assert_eq!(mode, Mode::StructuredOnly);
    assert_eq!(
        reports::<8>(&keyboard),
        [[0, 0, 0x04, 0, 0, 0, 0, 0], [0; 8]]
    );
}

#[test]
fn overflow_then_reset() {
    let input = b"+97\n+98\n+99\n+100\n+101\n+102\n+103\n!\n";
    let (keyboard, _, _) = run(Mode::StructuredOnly, input);
    let reports = reports::<8>(&keyboard);
    assert_eq!(reports.len(), 8);
    assert_eq!(reports[5], [0, 0, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09]);
    assert_eq!(reports[6], [0, 0, 1, 1, 1, 1, 1, 1]);
    assert_eq!(reports[7], [0; 8]);
}

#[test]
fn unterminated_last_line_is_processed() {
    let (keyboard, _, _) = run(Mode::Auto, b"+97\n!");
    assert_eq!(
        reports::<8>(&keyboard),
        [[0, 0, 0x04, 0, 0, 0, 0, 0], [0; 8]]
    );
}

#[test]
fn empty_input_sends_nothing() {
    let (keyboard, mouse, mode) = run(Mode::Auto, b"");
    assert!(keyboard.is_empty());
    assert!(mouse.is_empty());
    assert_eq!(mode, Mode::Auto);
}
