//! Support code for the integration tests: a stand-in for Inkscape.
//!
//! The fake converter is controlled through files placed next to its
//! executable:
//!
//! * `exit-status`: status to exit with, 0 if missing
//! * `no-output`: if present, no output file is written
//! * `fail-sizes`: one size per line; exports of these sizes exit with status 1
//!   and write nothing
//!
//! Every invocation appends its arguments to `invocations`, one argument per
//! line and a blank line after each invocation.

use std::{
    error::Error,
    fs::{File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

fn record_invocation(workdir: &Path, args: &[String]) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(workdir.join("invocations"))?;
    for arg in args {
        file.write_all(arg.as_bytes())?;
        file.write_all(b"\n")?;
    }
    file.write_all(b"\n")?;
    Ok(())
}

fn get_exit_status(workdir: &Path) -> Result<i32, Box<dyn Error>> {
    let exit_status = std::fs::read_to_string(workdir.join("exit-status"))?
        .trim()
        .parse()?;
    Ok(exit_status)
}

fn fail_sizes(workdir: &Path) -> Vec<u32> {
    std::fs::read_to_string(workdir.join("fail-sizes"))
        .map(|s| s.lines().filter_map(|l| l.trim().parse().ok()).collect())
        .unwrap_or_default()
}

fn arg_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter().find_map(|arg| arg.strip_prefix(name))
}

/// Writes the PNG signature and an IHDR chunk, which is enough to read the
/// image dimensions back.
fn write_png_header(path: &Path, width: u32, height: u32) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(PNG_SIGNATURE)?;
    file.write_all(&13u32.to_be_bytes())?;
    file.write_all(b"IHDR")?;
    file.write_all(&width.to_be_bytes())?;
    file.write_all(&height.to_be_bytes())?;
    // bit depth, RGBA colour type, compression, filter, interlace
    file.write_all(&[8, 6, 0, 0, 0])?;
    file.write_all(&[0; 4])?;
    Ok(())
}

/// Reads the dimensions from a file written by the fake converter.
pub fn png_dimensions(path: &Path) -> std::io::Result<(u32, u32)> {
    let data = std::fs::read(path)?;
    if data.len() < 24 || &data[..8] != PNG_SIGNATURE || &data[12..16] != b"IHDR" {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("{} is not a PNG file", path.display()),
        ));
    }
    let width = u32::from_be_bytes([data[16], data[17], data[18], data[19]]);
    let height = u32::from_be_bytes([data[20], data[21], data[22], data[23]]);
    Ok((width, height))
}

pub fn fake_converter_main() {
    let workdir = std::env::current_exe()
        .unwrap()
        .parent()
        .unwrap()
        .to_owned();
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let _ = record_invocation(&workdir, &args);

    let output = arg_value(&args, "--export-filename=").map(PathBuf::from);
    let width = arg_value(&args, "--export-width=").and_then(|s| s.parse::<u32>().ok());
    let height = arg_value(&args, "--export-height=").and_then(|s| s.parse::<u32>().ok());

    if width.map_or(false, |w| fail_sizes(&workdir).contains(&w)) {
        std::process::exit(1);
    }

    if !workdir.join("no-output").exists() {
        if let (Some(output), Some(width), Some(height)) = (output, width, height) {
            if write_png_header(&output, width, height).is_err() {
                std::process::exit(2);
            }
        }
    }

    let exit_status = get_exit_status(&workdir).unwrap_or(0);
    std::process::exit(exit_status);
}
