//! Error types.

use std::path::PathBuf;
use std::str::Utf8Error;

use crate::convert::USAGE;

/// Error from conversion or from validating a command-line invocation.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Wrong number of positional arguments.
    #[error("{}", USAGE)]
    ArgumentCount {
        /// Number of positional arguments received.
        got: usize,
    },

    /// Input path does not exist or is not a regular file.
    #[error("Missing {}", .0.display())]
    MissingFile(PathBuf),

    /// Input is not valid UTF-8.
    #[error("{}: input is not valid UTF-8", display_path(.path.as_ref()))]
    Encoding {
        /// File the bytes came from, if any.
        path: Option<PathBuf>,
        /// Underlying decode error.
        #[source]
        source: Utf8Error,
    },

    /// Read or write failure.
    #[error("{}: {source}", .path.display())]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether the error is reported as a bare message (no `Error:` prefix).
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::ArgumentCount { .. } | Self::MissingFile(_))
    }
}

impl From<Utf8Error> for Error {
    fn from(source: Utf8Error) -> Self {
        Self::Encoding { path: None, source }
    }
}

fn display_path(path: Option<&PathBuf>) -> String {
    path.map_or_else(|| "<input>".to_owned(), |p| p.display().to_string())
}
