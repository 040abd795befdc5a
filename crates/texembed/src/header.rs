//! Companion header with `extern` declarations of the generated arrays.

use crate::embed::Asset;
use std::io::{self, Write};

/// Derives an include guard from a header file name, e.g. `textures.h` becomes `TEXTURES_H`.
pub fn include_guard(file_name: &str) -> String {
    let guard: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();

    if guard.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{guard}")
    } else {
        guard
    }
}

/// Writes the header declaring every asset, in the same order as the generated source.
pub fn write_header<W: Write>(w: &mut W, file_name: &str, assets: &[Asset]) -> io::Result<()> {
    let guard = include_guard(file_name);

    writeln!(w, "#ifndef {guard}")?;
    writeln!(w, "#define {guard}")?;
    writeln!(w)?;
    writeln!(w, "// Texture data embedded as byte arrays, generated from PNG files")?;
    writeln!(w)?;

    for asset in assets {
        writeln!(w, "extern const unsigned char {}[];", asset.array_symbol())?;
        writeln!(w, "extern const unsigned int {};", asset.size_symbol())?;
        writeln!(w)?;
    }

    writeln!(w, "#endif /* {guard} */")?;
    w.flush()
}
