use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use zerohid::config::{DEBUG_LOG_FILTER, DEFAULT_LOG_FILTER, WRITE_TIMEOUT};
use zerohid::hid::keyboard::KEYBOARD_REPORT_DESCRIPTOR;
use zerohid::hid::mouse::MOUSE_REPORT_DESCRIPTOR;
use zerohid::terminal::RawModeGuard;
use zerohid::{open_device, Dispatcher, InputReader, Mode, ReliableWriter};

const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
const VERSION: &str = env!("CARGO_PKG_VERSION");

const KEYBOARD_ARG: &str = "keyboard";
const MOUSE_ARG: &str = "mouse";
const ASCII_ARG: &str = "ascii";
const STRUCTURED_ARG: &str = "structured";
const DEBUG_ARG: &str = "debug";
const TIMEOUT_ARG: &str = "timeout_ms";
const DESCRIPTOR_ARG: &str = "descriptor";

const AFTER_HELP: &str = "\
In structured mode events are read from stdin one per line:

    +<keysym>              press (decimal X11 keysym)
    -<keysym>              release
    !                      release everything
    <b> <x> <y> [<wheel>]  mouse: buttons 0-7, x/y 0-32767, wheel -127..127

Key reports go to the first device, mouse reports to the second (if given).
By default an empty line switches to ASCII mode, where every character read
from stdin is typed as a key press and release.";

fn main() -> ExitCode {
    let args = cli().get_matches();

    let filter = if args.get_flag(DEBUG_ARG) {
        DEBUG_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(ref err) => {
            error!(error = ?err, "Error encountered, exiting");
            ExitCode::FAILURE
        }
    }
}

fn cli() -> Command {
    Command::new("zerohid")
        .version(VERSION)
        .about(DESCRIPTION)
        .after_help(AFTER_HELP)
        .arg(
            Arg::new(ASCII_ARG)
                .short('a')
                .long("ascii")
                .action(ArgAction::SetTrue)
                .conflicts_with(STRUCTURED_ARG)
                .help("Start in ASCII mode"),
        )
        .arg(
            Arg::new(STRUCTURED_ARG)
                .short('x')
                .long("structured")
                .action(ArgAction::SetTrue)
                .help("Structured events only, never switch to ASCII mode"),
        )
        .arg(
            Arg::new(DEBUG_ARG)
                .short('d')
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Log every event and report"),
        )
        .arg(
            Arg::new(TIMEOUT_ARG)
                .long("timeout-ms")
                .num_args(1)
                .value_parser(value_parser!(u64).range(1..))
                .help("Give up on a report the device has not taken after this long [default: 1000]"),
        )
        .arg(
            Arg::new(DESCRIPTOR_ARG)
                .long("descriptor")
                .num_args(1)
                .value_parser(["keyboard", "mouse"])
                .help("Write the HID report descriptor for a gadget function to stdout and exit"),
        )
        .arg(
            Arg::new(KEYBOARD_ARG)
                .value_parser(value_parser!(PathBuf))
                .required_unless_present(DESCRIPTOR_ARG)
                .help("Keyboard gadget device, e.g. /dev/hidg0"),
        )
        .arg(
            Arg::new(MOUSE_ARG)
                .value_parser(value_parser!(PathBuf))
                .help("Mouse gadget device, e.g. /dev/hidg1"),
        )
}

fn run(args: &ArgMatches) -> Result<()> {
    if let Some(which) = args.get_one::<String>(DESCRIPTOR_ARG) {
        let descriptor = match which.as_str() {
            "mouse" => MOUSE_REPORT_DESCRIPTOR,
            _ => KEYBOARD_REPORT_DESCRIPTOR,
        };
        let mut stdout = io::stdout().lock();
        stdout.write_all(descriptor)?;
        stdout.flush()?;
        return Ok(());
    }

    let mode = if args.get_flag(ASCII_ARG) {
        Mode::AsciiOnly
    } else if args.get_flag(STRUCTURED_ARG) {
        Mode::StructuredOnly
    } else {
        Mode::Auto
    };
    let timeout = args
        .get_one::<u64>(TIMEOUT_ARG)
        .map(|&ms| Duration::from_millis(ms))
        .unwrap_or(WRITE_TIMEOUT);

    let keyboard_path = args
        .get_one::<PathBuf>(KEYBOARD_ARG)
        .context("no keyboard device given")?;
    let keyboard = open_device(keyboard_path)?;
    let mouse = args
        .get_one::<PathBuf>(MOUSE_ARG)
        .map(|path| open_device(path))
        .transpose()?;

    info!(
        version = VERSION,
        mode = mode.name(),
        keyboard = %keyboard_path.display(),
        mouse = mouse.is_some(),
        "Starting zerohid"
    );

    let _raw_mode = RawModeGuard::enable().context("cannot put stdin in raw mode")?;

    let mut dispatcher: Dispatcher<File, File> = Dispatcher::new(
        mode,
        ReliableWriter::with_timeout(keyboard, timeout),
        mouse.map(|file| ReliableWriter::with_timeout(file, timeout)),
    );
    let mut input = InputReader::new(io::stdin().lock());
    dispatcher.run(&mut input)?;
    Ok(())
}
