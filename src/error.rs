//! Error types for slipslope operations.
//!
//! Translation itself cannot fail; these cover the sinks and files around it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from I/O-backed translation and the command-line front end.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_error_converts() {
        let err: Error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "I/O error: pipe closed");
    }

    #[test]
    fn test_read_error_names_path() {
        let err = Error::Read {
            path: PathBuf::from("notes.ssmd"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "failed to read notes.ssmd: no such file");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_write_error_names_path() {
        let err = Error::Write {
            path: PathBuf::from("out.html"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to write out.html: denied");
    }
}
