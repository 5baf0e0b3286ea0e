use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error type for file operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to stat {}", .0.display())]
    Stat(PathBuf, #[source] io::Error),

    #[error("Failed to open file {}", .0.display())]
    Open(PathBuf, #[source] io::Error),

    #[error("Failed to read file {}", .0.display())]
    Read(PathBuf, #[source] io::Error),

    #[error("Failed to close file {}", .0.display())]
    Close(PathBuf, #[source] io::Error),

    #[error("Failed to read from file handle")]
    ReadHandle(#[source] io::Error),

    #[error("Failed to close file handle")]
    CloseHandle(#[source] io::Error),

    #[error("Failed to read whole file {}", .0.display())]
    ReadFile(PathBuf, #[source] io::Error),

    #[error("Failed to remove file {}", .0.display())]
    Unlink(PathBuf, #[source] io::Error),

    #[error("Failed to remove dir {}", .0.display())]
    RemoveDir(PathBuf, #[source] io::Error),

    #[error("Failed to read directory {}", .0.display())]
    ReadDir(PathBuf, #[source] io::Error),

    #[error("Failed to create dir {}", .0.display())]
    CreateDir(PathBuf, #[source] io::Error),

    #[error("Failed to write file {}", .0.display())]
    WriteFile(PathBuf, #[source] io::Error),

    #[error("Failed to process JSON in {}", .0.display())]
    Json(PathBuf, #[source] serde_json::Error),

    #[error(
        "Bytes read length does not match requested length for {}: expected {expected}, got {actual}",
        .path.display()
    )]
    ShortRead {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },

    #[error("Read of {length} bytes at offset {offset} overflows a buffer of {capacity} bytes")]
    BufferOverflow {
        offset: usize,
        length: usize,
        capacity: usize,
    },

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns true if the underlying OS error reports a missing path
    pub fn is_not_found(&self) -> bool {
        self.io_error()
            .is_some_and(|err| err.kind() == io::ErrorKind::NotFound)
    }

    /// The OS error behind this failure, if there is one
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Error::Stat(_, err)
            | Error::Open(_, err)
            | Error::Read(_, err)
            | Error::Close(_, err)
            | Error::Unlink(_, err)
            | Error::RemoveDir(_, err)
            | Error::ReadDir(_, err)
            | Error::CreateDir(_, err)
            | Error::WriteFile(_, err)
            | Error::ReadFile(_, err)
            | Error::ReadHandle(err)
            | Error::CloseHandle(err) => Some(err),
            _ => None,
        }
    }
}

/// Attaches the failing path to a primitive's `io::Error`, the same way
/// `anyhow::Context::with_context` is used elsewhere.
pub(crate) trait PathContext<T> {
    fn path_context(self, path: &Path, op: fn(PathBuf, io::Error) -> Error) -> Result<T>;
}

impl<T> PathContext<T> for io::Result<T> {
    fn path_context(self, path: &Path, op: fn(PathBuf, io::Error) -> Error) -> Result<T> {
        self.map_err(|err| op(path.to_path_buf(), err))
    }
}

#[cfg(test)]
mod test {
    use std::io;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_not_found_classification() {
        let missing = Error::Stat(PathBuf::from("a"), io::ErrorKind::NotFound.into());
        let denied = Error::Stat(PathBuf::from("a"), io::ErrorKind::PermissionDenied.into());
        let short = Error::ShortRead { path: PathBuf::from("a"), expected: 2, actual: 1 };

        assert!(missing.is_not_found());
        assert!(!denied.is_not_found());
        assert!(!short.is_not_found());
        assert!(short.io_error().is_none());
    }

    #[test]
    fn test_path_context_message() {
        let result: io::Result<()> = Err(io::ErrorKind::PermissionDenied.into());
        let err = result
            .path_context(&PathBuf::from("dir/file.txt"), Error::Open)
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to open file dir/file.txt");
    }
}
