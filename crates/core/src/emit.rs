//! C array literal rendering.
//!
//! Produces the declaration consumed by the firmware build:
//!
//! ```text
//! const char led[] = {
//!     0xDE, 0xAD, 0xBE, 0xEF,
//! };
//!
//! const size_t led_len = sizeof(led);
//! ```
//!
//! Rendering is pure: the caller decides where the text goes.

use std::fmt;

use crate::config::EmitConfig;
use crate::symbol::SymbolName;

/// A byte array ready to be rendered as C source.
///
/// Implements [`fmt::Display`], so it can be written straight into any formatter or stream.
#[derive(Clone, Copy, Debug)]
pub struct CArray<'a> {
    name: &'a SymbolName,
    bytes: &'a [u8],
    config: &'a EmitConfig,
}

impl<'a> CArray<'a> {
    /// Creates a renderable array.
    ///
    /// # Arguments
    ///
    /// * `name` - Identifier of the array; the length constant is `<name>_len`.
    /// * `bytes` - Array contents, rendered in order.
    /// * `config` - Layout options.
    pub const fn new(name: &'a SymbolName, bytes: &'a [u8], config: &'a EmitConfig) -> Self {
        Self {
            name,
            bytes,
            config,
        }
    }

    /// Number of elements the array will hold.
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the array body is empty.
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Display for CArray<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config;
        writeln!(f, "{} {}[] = {{", config.element_type, self.name)?;

        for line in self.bytes.chunks(config.bytes_per_line.get()) {
            f.write_str(&config.indent)?;
            for (i, byte) in line.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "0x{byte:02X}")?;
            }
            f.write_str(",\n")?;
        }

        f.write_str("};\n\n")?;
        writeln!(
            f,
            "{} {} = sizeof({});",
            config.length_type,
            self.name.length_symbol(),
            self.name
        )
    }
}

/// Renders `bytes` as a C array named `name` using the default layout.
pub fn render_c_array(name: &SymbolName, bytes: &[u8]) -> String {
    render_c_array_with(name, bytes, &EmitConfig::default())
}

/// Renders `bytes` as a C array named `name` using the given layout.
pub fn render_c_array_with(name: &SymbolName, bytes: &[u8], config: &EmitConfig) -> String {
    CArray::new(name, bytes, config).to_string()
}
