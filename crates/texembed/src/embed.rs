//! Directory scanning and the embedding run itself.

use crate::{header, writer::TextureSourceWriter};
use log::*;
use std::{
    collections::HashMap,
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};
use texembed_utils::{AnyResult, AnyhowResultExt};

/// Only files ending with this (case-sensitive) are embedded
pub const EXTENSION: &str = ".png";

/// Appended to the identifier to form the array name
pub const SYMBOL_SUFFIX: &str = "_png";

pub const DEFAULT_INCLUDE: &str = "embedded_textures.h";

#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("`{first}` and `{second}` would both be embedded as `{identifier}_png`")]
    DuplicateIdentifier {
        identifier: String,
        first: String,
        second: String,
    },
}

#[derive(Debug, Clone)]
pub struct EmbedOptions {
    pub textures_dir: PathBuf,
    pub output_file: PathBuf,
    /// Header named by the `#include` directive
    pub include: String,
    /// Where to write the companion declarations header, if anywhere
    pub header: Option<PathBuf>,
}

impl EmbedOptions {
    pub fn new(textures_dir: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            textures_dir: textures_dir.into(),
            output_file: output_file.into(),
            include: DEFAULT_INCLUDE.to_string(),
            header: None,
        }
    }
}

/// A single texture file scheduled for embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub path: PathBuf,
    pub file_name: String,
    pub identifier: String,
}

impl Asset {
    pub fn new(path: PathBuf, file_name: String) -> Self {
        let stem = file_name.strip_suffix(EXTENSION).unwrap_or(&file_name);
        let identifier = identifier_for(stem);
        Self {
            path,
            file_name,
            identifier,
        }
    }

    pub fn array_symbol(&self) -> String {
        format!("{}{SYMBOL_SUFFIX}", self.identifier)
    }

    pub fn size_symbol(&self) -> String {
        format!("{}{SYMBOL_SUFFIX}_size", self.identifier)
    }
}

/// Summary of a finished run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub assets: usize,
    pub bytes: u64,
}

/// Turns a file stem into a valid C identifier.
///
/// Characters outside of `[A-Za-z0-9_]` become underscores, and identifiers that would start
/// with a digit are prefixed with one.
///
/// ## Example
/// ```
/// # use texembed::embed::identifier_for;
/// assert_eq!(identifier_for("stickerCenter"), "stickerCenter");
/// assert_eq!(identifier_for("edge-left 2"), "edge_left_2");
/// assert_eq!(identifier_for("9patch"), "_9patch");
/// ```
pub fn identifier_for(stem: &str) -> String {
    let mut identifier: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if identifier.is_empty() || identifier.starts_with(|c: char| c.is_ascii_digit()) {
        identifier.insert(0, '_');
    }

    identifier
}

/// Lists the textures of a directory, sorted by file name.
///
/// Fails if the path isn't a directory, or if two files map onto the same identifier.
pub fn collect_assets(dir: &Path) -> AnyResult<Vec<Asset>> {
    if !dir.is_dir() {
        return Err(EmbedError::NotADirectory(dir.to_path_buf()).into());
    }

    let mut entries = vec![];
    for dir_entry_result in fs::read_dir(dir).otherwise_at("listing", dir)? {
        let dir_entry = dir_entry_result.otherwise_at("listing", dir)?;
        let file_name = dir_entry.file_name();
        let path = dir_entry.path();

        if !file_name.to_string_lossy().ends_with(EXTENSION) {
            trace!("Ignoring {path:?}");
            continue;
        }

        if !fs::metadata(&path).otherwise_at("inspecting", &path)?.is_file() {
            debug!("Skipping {path:?}, it's not a regular file");
            continue;
        }

        entries.push((file_name, path));
    }

    entries.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut seen: HashMap<String, String> = HashMap::new();
    let mut assets = Vec::with_capacity(entries.len());
    for (file_name, path) in entries {
        let asset = Asset::new(path, file_name.to_string_lossy().into_owned());

        if let Some(first) = seen.get(&asset.identifier) {
            return Err(EmbedError::DuplicateIdentifier {
                identifier: asset.identifier.clone(),
                first: first.clone(),
                second: asset.file_name,
            }
            .into());
        }

        if asset.file_name.strip_suffix(EXTENSION) != Some(asset.identifier.as_str()) {
            info!("Embedding {:?} as `{}`", asset.file_name, asset.array_symbol());
        }

        seen.insert(asset.identifier.clone(), asset.file_name.clone());
        assets.push(asset);
    }

    Ok(assets)
}

/// Performs a complete embedding run.
///
/// The output is only created once the texture directory was validated. Any I/O failure after
/// that aborts the run and leaves a partially written output behind.
pub fn embed(options: &EmbedOptions) -> AnyResult<Report> {
    let assets = collect_assets(&options.textures_dir)?;
    debug!(
        "Found {} textures in {:?}",
        assets.len(),
        options.textures_dir
    );

    let output = &options.output_file;
    let file = File::create(output).otherwise_at("creating", output)?;
    let mut writer = TextureSourceWriter::new(BufWriter::new(file), &options.include)
        .otherwise_at("writing", output)?;

    let mut report = Report::default();
    for asset in &assets {
        println!(
            "  - Converting {} as {}...",
            asset.path.display(),
            asset.array_symbol()
        );

        let data = fs::read(&asset.path).otherwise_at("reading", &asset.path)?;
        debug!("{} is {} bytes long", asset.file_name, data.len());

        writer
            .write_texture(asset, &data)
            .otherwise_at("writing", output)?;

        report.assets += 1;
        report.bytes += data.len() as u64;
    }

    writer.finish().otherwise_at("writing", output)?;

    if let Some(header_path) = &options.header {
        let header_name = header_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_INCLUDE.to_string());

        let file = File::create(header_path).otherwise_at("creating", header_path)?;
        header::write_header(&mut BufWriter::new(file), &header_name, &assets)
            .otherwise_at("writing", header_path)?;
        println!(" : Wrote declarations to {}", header_path.display());
    }

    println!(
        " : Wrote {} textures ({} bytes) to {}",
        report.assets,
        report.bytes,
        output.display()
    );

    Ok(report)
}
