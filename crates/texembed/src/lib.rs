//! texembed - texture embedding for C builds
//!
//! Turns a directory of PNG files into a single C source file, where every texture becomes a
//! `const unsigned char` array plus a size constant. The result is meant to be compiled into an
//! executable, so no texture files have to be shipped next to it.

use clap::{ArgAction, Parser};
use embed::{EmbedOptions, Report, DEFAULT_INCLUDE};
use log::LevelFilter;
use std::path::PathBuf;
use texembed_utils::AnyResult;

pub mod embed;
pub mod header;
pub mod writer;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory with the `.png` textures to embed
    pub textures_dir: PathBuf,
    /// Generated C source file. It's overwritten if it already exists.
    pub output_file: PathBuf,
    /// Header named in the `#include` directive of the generated source.
    ///
    /// Defaults to the file name of `--header`, or `embedded_textures.h`.
    #[arg(long)]
    pub include: Option<String>,
    /// Also writes a header with `extern` declarations of all generated arrays
    #[arg(long)]
    pub header: Option<PathBuf>,
    /// Raises the log level, can be repeated
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Resolves the command line into embedder options.
    pub fn options(&self) -> EmbedOptions {
        let include = self
            .include
            .clone()
            .or_else(|| {
                self.header
                    .as_ref()
                    .and_then(|header| header.file_name())
                    .map(|name| name.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| DEFAULT_INCLUDE.to_string());

        EmbedOptions {
            textures_dir: self.textures_dir.clone(),
            output_file: self.output_file.clone(),
            include,
            header: self.header.clone(),
        }
    }
}

/// Runs `texembed` as if it was ran from the command line.
///
/// Build scripts can call this directly instead of spawning the binary.
pub fn run(cli: Cli) -> AnyResult<Report> {
    embed::embed(&cli.options())
}
