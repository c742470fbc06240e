//! Binary to memory-init word converter.
//!
//! Reads a raw binary and prints it as 4-byte words, one per line, most significant byte first
//! (`04 03 02 01` for the bytes `01 02 03 04`). The last word is zero-padded.

use std::path::PathBuf;

use clap::Parser;
use hexkit_cli::{fail, init_tracing, parse_or_usage, program_name, write_stdout};
use hexkit_core::loader;
use hexkit_core::render_words;

#[derive(Parser, Debug)]
#[command(
    name = "makehex",
    version,
    about = "Repack a binary into 32-bit hex words",
    long_about = "Repack a binary into 32-bit hex words for memory initialisation.\n\nExample:\n  makehex firmware.bin > firmware.hex"
)]
struct Cli {
    /// Binary image to repack. May start with '-'.
    #[arg(allow_hyphen_values = true)]
    input_file: PathBuf,
}

fn main() {
    init_tracing();
    let usage = format!("Usage: {} <input_file>", program_name("makehex"));
    let cli: Cli = parse_or_usage(&usage, 2);

    let data = loader::load_binary(&cli.input_file).unwrap_or_else(|e| fail(&e));
    if let Err(e) = write_stdout(&render_words(&data)) {
        fail(&e);
    }
}
