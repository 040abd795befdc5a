use assert_cmd::Command;
use predicates::prelude::*;
use std::{fs, path::Path};
use tempfile::TempDir;

const PREAMBLE: &str = "/* Auto-generated texture data - DO NOT EDIT */\n\n#include \"embedded_textures.h\"\n\n";

fn texembed() -> Command {
    Command::cargo_bin("texembed").unwrap()
}

fn textures(files: &[(&str, &[u8])]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, data) in files {
        fs::write(dir.path().join(name), data).unwrap();
    }
    dir
}

/// Pulls the bytes of a generated array back out of the source.
fn decode_array(source: &str, symbol: &str) -> Vec<u8> {
    let start = source.find(&format!("const unsigned char {symbol}[] = {{\n")).unwrap();
    let body = &source[start..];
    let body = &body[body.find('\n').unwrap() + 1..body.find("};").unwrap()];

    body.split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| u8::from_str_radix(value.strip_prefix("0x").unwrap(), 16).unwrap())
        .collect()
}

fn run_ok(textures_dir: &Path, output: &Path) -> String {
    texembed()
        .arg(textures_dir)
        .arg(output)
        .assert()
        .success();
    fs::read_to_string(output).unwrap()
}

#[test]
fn test_single_texture() {
    let dir = textures(&[("icon.png", &[0x00, 0xFF, 0x10])]);
    let out = tempfile::tempdir().unwrap();
    let output = out.path().join("embedded_textures.c");

    texembed()
        .arg(dir.path())
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("icon_png"))
        .stdout(predicate::str::contains(output.display().to_string()));

    let source = fs::read_to_string(&output).unwrap();
    assert_eq!(
        source,
        format!(
            "{PREAMBLE}// Generated from icon.png\n\
             const unsigned char icon_png[] = {{\n    0x00, 0xff, 0x10\n}};\n\
             const unsigned int icon_png_size = 3;\n\n"
        )
    );
}

#[test]
fn test_empty_directory() {
    let dir = textures(&[]);
    let out = tempfile::tempdir().unwrap();
    let output = out.path().join("out.c");

    assert_eq!(run_ok(dir.path(), &output), PREAMBLE);
}

#[test]
fn test_filters_and_orders_textures() {
    let dir = textures(&[
        ("stickerEdgeU.png", b"u"),
        ("stickerBlank.png", b"b"),
        ("readme.txt", b"not a texture"),
        ("stickerCorner.PNG", b"wrong case"),
        ("stickerCenter.png", b"c"),
    ]);
    let out = tempfile::tempdir().unwrap();
    let source = run_ok(dir.path(), &out.path().join("out.c"));

    let order: Vec<&str> = source
        .lines()
        .filter_map(|line| line.strip_prefix("// Generated from "))
        .collect();
    assert_eq!(order, ["stickerBlank.png", "stickerCenter.png", "stickerEdgeU.png"]);
    assert!(!source.contains("readme"));
    assert!(!source.contains("stickerCorner"));

    // Same input, same output
    let again = run_ok(dir.path(), &out.path().join("again.c"));
    assert_eq!(source, again);
}

#[test]
fn test_bytes_survive() {
    let big: Vec<u8> = (0..1000u32).map(|i| (i * 7 % 256) as u8).collect();
    let dir = textures(&[("big.png", &big), ("dozen.png", &[0x5A; 12])]);
    let out = tempfile::tempdir().unwrap();
    let source = run_ok(dir.path(), &out.path().join("out.c"));

    assert_eq!(decode_array(&source, "big_png"), big);
    assert!(source.contains("const unsigned int big_png_size = 1000;\n"));
    assert_eq!(decode_array(&source, "dozen_png"), [0x5A; 12]);
    assert!(source.contains("0x5a\n};\nconst unsigned int dozen_png_size = 12;\n"));

    let big_lines: Vec<&str> = source
        .lines()
        .skip_while(|line| !line.starts_with("const unsigned char big_png"))
        .skip(1)
        .take_while(|line| *line != "};")
        .collect();
    let (last, full) = big_lines.split_last().unwrap();
    assert!(full.iter().all(|line| line.matches("0x").count() == 12));
    assert_eq!(last.matches("0x").count(), 1000 % 12);
}

#[test]
fn test_overwrites_output() {
    let dir = textures(&[("a.png", b"a")]);
    let out = tempfile::tempdir().unwrap();
    let output = out.path().join("out.c");
    fs::write(&output, "stale contents that are longer than anything generated ".repeat(50)).unwrap();

    let source = run_ok(dir.path(), &output);
    assert!(source.starts_with(PREAMBLE));
    assert!(!source.contains("stale"));
}

#[test]
fn test_writes_header() {
    let dir = textures(&[("icon.png", b"i")]);
    let out = tempfile::tempdir().unwrap();
    let header = out.path().join("textures.h");

    texembed()
        .arg(dir.path())
        .arg(out.path().join("textures.c"))
        .arg("--header")
        .arg(&header)
        .assert()
        .success();

    let source = fs::read_to_string(out.path().join("textures.c")).unwrap();
    assert!(source.contains("#include \"textures.h\"\n"));

    let header = fs::read_to_string(header).unwrap();
    assert!(header.contains("extern const unsigned char icon_png[];\n"));
    assert!(header.contains("extern const unsigned int icon_png_size;\n"));
}

#[test]
fn test_missing_arguments() {
    texembed()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));

    texembed()
        .arg("textures")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_not_a_directory() {
    let dir = textures(&[("icon.png", b"i")]);
    let out = tempfile::tempdir().unwrap();
    let output = out.path().join("out.c");

    texembed()
        .arg(dir.path().join("icon.png"))
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a directory"));

    assert!(!output.exists());
}

#[test]
fn test_identifier_collision() {
    let dir = textures(&[("a-b.png", b"1"), ("a_b.png", b"2")]);
    let out = tempfile::tempdir().unwrap();
    let output = out.path().join("out.c");

    texembed()
        .arg(dir.path())
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("a_b_png"));

    assert!(!output.exists());
}

#[test]
fn test_help() {
    texembed()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("TEXTURES_DIR"));
}

#[test]
fn test_output_not_writable() {
    let dir = textures(&[("icon.png", b"i")]);
    let out = tempfile::tempdir().unwrap();
    let output = out.path().join("missing").join("out.c");

    texembed()
        .arg(dir.path())
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("creating"));

    assert!(!output.exists());
}

#[cfg(unix)]
#[test]
fn test_unreadable_texture() {
    let dir = textures(&[("a.png", b"a")]);
    std::os::unix::fs::symlink(dir.path().join("gone.bin"), dir.path().join("x.png")).unwrap();
    let out = tempfile::tempdir().unwrap();

    texembed()
        .arg(dir.path())
        .arg(out.path().join("out.c"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("x.png"));
}
