//! File conversion and command-line invocation checks.
//!
//! The binary is a thin shell over this module: it collects positional
//! arguments, builds an [`Invocation`], and reports any [`Error`].

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Error;
use crate::{Options, join_lines, transcode_bytes};

/// Usage line printed for a malformed invocation.
pub const USAGE: &str = "Usage: markdown2html README.md README.html";

/// A validated conversion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Markdown file to read. Exists and is a regular file.
    pub input: PathBuf,
    /// HTML file to write.
    pub output: PathBuf,
}

impl Invocation {
    /// Validate positional arguments: exactly two, the first an existing
    /// regular file.
    pub fn from_args<I, P>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut args: Vec<PathBuf> = args.into_iter().map(Into::into).collect();
        if args.len() != 2 {
            return Err(Error::ArgumentCount { got: args.len() });
        }

        let output = args.pop().unwrap_or_default();
        let input = args.pop().unwrap_or_default();
        ensure_regular_file(&input)?;

        Ok(Self { input, output })
    }

    /// Run the conversion.
    pub fn run(&self, options: &Options) -> Result<(), Error> {
        convert_file(&self.input, &self.output, options)
    }
}

/// Convert a Markdown file into an HTML file.
///
/// The input is fully read and decoded before the output is created, so a
/// missing or undecodable input never leaves an output file behind.
pub fn convert_file(input: &Path, output: &Path, options: &Options) -> Result<(), Error> {
    ensure_regular_file(input)?;

    let bytes = fs::read(input).map_err(|source| Error::Io {
        path: input.to_path_buf(),
        source,
    })?;
    debug!(path = %input.display(), bytes = bytes.len(), "read markdown");

    let lines = transcode_bytes(&bytes, options).map_err(|err| match err {
        Error::Encoding { source, .. } => Error::Encoding {
            path: Some(input.to_path_buf()),
            source,
        },
        other => other,
    })?;

    fs::write(output, join_lines(&lines)).map_err(|source| Error::Io {
        path: output.to_path_buf(),
        source,
    })?;
    debug!(path = %output.display(), lines = lines.len(), "wrote html");

    Ok(())
}

fn ensure_regular_file(path: &Path) -> Result<(), Error> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::MissingFile(path.to_path_buf()))
    }
}
