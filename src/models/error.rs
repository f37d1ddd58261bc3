use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    OpenInputFailure { path: PathBuf, source: io::Error },
    OpenOutputFailure { path: PathBuf, source: io::Error },
    ReadFailure { path: PathBuf, source: io::Error },
    CloseFailure { path: PathBuf, source: io::Error },
    WriteFailure(io::Error),
    InvalidTagCount(String),
    InvalidConfig(String),
    CsvError(String),
    IoError(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OpenInputFailure { path, source } => {
                write!(f, "Error opening input file {}: {}", path.display(), source)
            }
            Error::OpenOutputFailure { path, source } => {
                write!(f, "Error opening output file {}: {}", path.display(), source)
            }
            Error::ReadFailure { path, source } => {
                write!(f, "Error reading input file {}: {}", path.display(), source)
            }
            Error::CloseFailure { path, source } => {
                write!(f, "Error closing file {}: {}", path.display(), source)
            }
            Error::WriteFailure(err) => write!(f, "Error writing tag cloud: {}", err),
            Error::InvalidTagCount(value) => write!(
                f,
                "Invalid tag count {:?}: expected a non-negative integer",
                value
            ),
            Error::InvalidConfig(msg) => write!(f, "Invalid Config: {}", msg),
            Error::CsvError(msg) => write!(f, "CSV Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::OpenInputFailure { source, .. }
            | Error::OpenOutputFailure { source, .. }
            | Error::ReadFailure { source, .. }
            | Error::CloseFailure { source, .. } => Some(source),
            Error::WriteFailure(err) | Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::CsvError(err.to_string())
    }
}
