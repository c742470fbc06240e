//! Shared plumbing for the hexkit command-line tools.
//!
//! Both binaries follow the same contract:
//! 1. **Streams:** generated text goes to stdout; usage, errors and log output go to stderr.
//! 2. **Usage errors:** a bad command line prints a one-line usage message and exits with the
//!    tool's usage status instead of clap's own.
//! 3. **Failures:** any conversion error is printed as `Error: <message>` and exits with status 1.

use std::ffi::OsStr;
use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;
use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Exit status for conversion failures.
pub const EXIT_FAILURE: i32 = 1;

/// Installs the stderr log subscriber.
///
/// The filter defaults to `warn` and can be overridden with `RUST_LOG`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Returns the name the program was invoked as, falling back to `default`.
pub fn program_name(default: &str) -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .and_then(OsStr::to_str)
        .map_or_else(|| default.to_string(), str::to_string)
}

/// Parses the command line, or prints `usage` to stderr and exits with `usage_status`.
///
/// `--help` and `--version` keep clap's behaviour and exit successfully.
pub fn parse_or_usage<P: Parser>(usage: &str, usage_status: i32) -> P {
    match P::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            debug!(kind = ?e.kind(), "rejected command line");
            eprintln!("{usage}");
            process::exit(usage_status);
        }
    }
}

/// Writes the generated text to stdout and flushes it.
///
/// # Errors
///
/// Returns the underlying I/O error, e.g. when stdout is a closed pipe.
pub fn write_stdout(text: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()
}

/// Reports a fatal error on stderr and exits with [`EXIT_FAILURE`].
pub fn fail(err: &dyn Display) -> ! {
    eprintln!("Error: {err}");
    process::exit(EXIT_FAILURE);
}
