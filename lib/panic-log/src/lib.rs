#![deny(clippy::all)]
use std::{
    fs, io,
    panic::PanicInfo,
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, Ordering},
    thread,
};

use backtrace::Backtrace;
use once_cell::sync::OnceCell;

pub const DEFAULT_PATH: &str = "panic.log";

static PANICKED: AtomicBool = AtomicBool::new(false);
static LOG_PATH: OnceCell<PathBuf> = OnceCell::new();

/// Sets the file the hook writes to. Only the first call takes effect; later
/// calls get their path handed back.
pub fn set_path(path: impl Into<PathBuf>) -> Result<(), PathBuf> {
    LOG_PATH.set(path.into())
}

pub fn path() -> &'static Path {
    LOG_PATH.get_or_init(|| PathBuf::from(DEFAULT_PATH))
}

/// Panic hook that reports the panic through `log` and writes it, with a
/// backtrace, to [`path`].
pub fn hook(info: &PanicInfo<'_>) {
    let msg = payload_message(info);
    let location = info
        .location()
        .map(ToString::to_string)
        .unwrap_or_else(|| "<unknown>".to_owned());
    let thread = thread::current();
    let name = thread.name().unwrap_or("<unnamed>");

    log::error!("thread '{name}' panicked at '{msg}', {location}");

    if let Ok(mut file) = fs::File::create(path()) {
        let _ = write_report(&mut file, name, msg, &location);
    }

    PANICKED.store(true, Ordering::Release);
}

pub fn panicked() -> bool {
    PANICKED.load(Ordering::Acquire)
}

fn payload_message<'a>(info: &'a PanicInfo<'_>) -> &'a str {
    match info.payload().downcast_ref::<&'static str>() {
        Some(s) => *s,
        None => match info.payload().downcast_ref::<String>() {
            Some(s) => &s[..],
            None => "Box<dyn Any>",
        },
    }
}

fn write_report(out: &mut dyn io::Write, thread: &str, msg: &str, location: &str) -> io::Result<()> {
    writeln!(out, "thread '{thread}' panicked at '{msg}', {location}")?;
    writeln!(out, "stack backtrace:")?;
    writeln!(out, "{:#?}", Backtrace::new())
}
