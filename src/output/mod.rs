//! Output formatting module.
//!
//! Renders a finished [`ScanSummary`] as plain text, JSON, or CSV to any
//! writer. The destination (file or stdout) is chosen before rendering.

mod csv_format;
mod json_format;
mod plain;

pub use csv_format::write_csv;
pub use json_format::write_json;
pub use plain::{print_error, print_scan_header, print_warning, write_plain};

use crate::cli::OutputFormat;
use crate::error::{OutputError, OutputResult};
use crate::scanner::ScanSummary;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Where rendered output goes.
pub enum Destination {
    Stdout(io::Stdout),
    File(BufWriter<File>),
}

impl Destination {
    /// Whether colour and styling are appropriate for this destination.
    pub fn is_styled(&self) -> bool {
        match self {
            Self::Stdout(_) => console::colors_enabled(),
            Self::File(_) => false,
        }
    }
}

impl Write for Destination {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(out) => out.write(buf),
            Self::File(file) => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(out) => out.flush(),
            Self::File(file) => file.flush(),
        }
    }
}

/// Open `path` for writing, or stdout when no path is given.
pub fn open_destination(path: Option<&Path>) -> OutputResult<Destination> {
    match path {
        None => Ok(Destination::Stdout(io::stdout())),
        Some(path) => File::create(path)
            .map(|file| Destination::File(BufWriter::new(file)))
            .map_err(|source| OutputError::CreateFailed {
                path: path.to_path_buf(),
                source,
            }),
    }
}

/// Format scan results according to the specified format.
pub fn render<W: Write>(
    summary: &ScanSummary,
    format: OutputFormat,
    out: &mut W,
    styled: bool,
) -> OutputResult<()> {
    match format {
        OutputFormat::Text => write_plain(summary, out, styled)?,
        OutputFormat::Json => write_json(summary, out)?,
        OutputFormat::Csv => write_csv(summary, out)?,
    }
    out.flush()?;
    Ok(())
}
