//! Hex listing to C array converter.
//!
//! Reads a text file of whitespace-separated hex bytes (`#` starts a comment) and prints a
//! `const char` array literal named after the file, followed by its `<name>_len` constant.
//! Nothing is printed to stdout unless the whole listing parses.

use std::path::PathBuf;

use clap::Parser;
use hexkit_cli::{fail, init_tracing, parse_or_usage, program_name, write_stdout};
use hexkit_core::{read_hex_bytes, render_c_array, symbol_name};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "hex2c",
    version,
    about = "Convert a hex byte listing into a C array",
    long_about = "Convert a hex byte listing into a C array.\n\nThe listing holds whitespace-separated hex bytes; a token starting with '#' comments out the rest of its line. The array is named after the input file and followed by a <name>_len constant.\n\nExample:\n  hex2c firmware/led.hex > led.c"
)]
struct Cli {
    /// Hex listing to convert. May start with '-'.
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,
}

fn main() {
    init_tracing();
    let usage = format!("Usage: {} <input.hex>", program_name("hex2c"));
    let cli: Cli = parse_or_usage(&usage, 1);

    if !cli.input.is_file() {
        fail(&format_args!("file not found: {}", cli.input.display()));
    }

    let symbol = symbol_name(&cli.input);
    let bytes = read_hex_bytes(&cli.input).unwrap_or_else(|e| fail(&e));
    info!(symbol = %symbol, bytes = bytes.len(), "rendering array");

    let rendered = render_c_array(&symbol, &bytes);
    if let Err(e) = write_stdout(&rendered) {
        fail(&e);
    }
}
