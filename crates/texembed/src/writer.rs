//! Textual encoding of textures as C declarations.

use crate::embed::Asset;
use itertools::Itertools;
use std::io::{self, Write};

/// First line of every generated source file
pub const BANNER: &str = "/* Auto-generated texture data - DO NOT EDIT */";

/// Maximum amount of byte literals on a single line of an array
pub const BYTES_PER_LINE: usize = 12;

const INDENT: &str = "    ";

/// Formats bytes as the body of a C array literal.
///
/// Every byte is rendered as a lowercase `0xNN` literal, with at most [`BYTES_PER_LINE`] of them
/// per indented line. Wrapped lines keep the `", "` separator before the line break, the last
/// value has none, and an empty buffer yields an empty string.
///
/// ## Example
/// ```
/// # use texembed::writer::array_literal;
/// assert_eq!(array_literal(&[0x00, 0xFF, 0x10]), "    0x00, 0xff, 0x10");
/// ```
pub fn array_literal(bytes: &[u8]) -> String {
    bytes
        .chunks(BYTES_PER_LINE)
        .map(|line| {
            let values = line.iter().map(|byte| format!("{byte:#04x}")).join(", ");
            format!("{INDENT}{values}")
        })
        .join(", \n")
}

/// Writes a generated texture source file, one texture at a time.
///
/// The banner and the include directive are written on creation, so an empty texture set still
/// produces a valid file.
pub struct TextureSourceWriter<W: Write> {
    w: W,
}

impl<W: Write> TextureSourceWriter<W> {
    pub fn new(mut w: W, include: &str) -> io::Result<Self> {
        writeln!(w, "{BANNER}")?;
        writeln!(w)?;
        writeln!(w, "#include \"{include}\"")?;
        writeln!(w)?;
        Ok(Self { w })
    }

    /// Emits the provenance comment, the array and its size constant, followed by a blank line.
    pub fn write_texture(&mut self, asset: &Asset, data: &[u8]) -> io::Result<()> {
        let w = &mut self.w;

        writeln!(w, "// Generated from {}", asset.file_name)?;
        writeln!(w, "const unsigned char {}[] = {{", asset.array_symbol())?;
        if !data.is_empty() {
            writeln!(w, "{}", array_literal(data))?;
        }
        writeln!(w, "}};")?;
        writeln!(w, "const unsigned int {} = {};", asset.size_symbol(), data.len())?;
        writeln!(w)
    }

    /// Flushes everything and hands back the inner writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.w.flush()?;
        Ok(self.w)
    }
}
