//! Error type shared by the core components.

use std::io;
use std::path::PathBuf;

/// Every failure a checksum session can end with. All of them are terminal.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Requested algorithm name is not in the registry.
    #[error("invalid algorithm `{0}`")]
    UnknownAlgorithm(String),

    /// Reading an interactive line failed (including end of input).
    #[error("invalid input")]
    InvalidInput {
        #[source]
        source: Option<io::Error>,
    },

    /// Path does not exist or is not a regular file.
    #[error("input is not a path to an existing regular file: {}", .0.display())]
    InvalidPath(PathBuf),

    /// Open or read failed after the path was validated.
    #[error("cannot read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = Error::UnknownAlgorithm("crc32".into());
        assert_eq!(err.to_string(), "invalid algorithm `crc32`");

        let err = Error::InvalidPath(PathBuf::from("/nope"));
        assert!(err.to_string().ends_with("/nope"));
    }

    #[test]
    fn io_error_keeps_its_source() {
        let err = Error::Io {
            path: PathBuf::from("/data/file.iso"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "cannot read /data/file.iso");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "denied");
    }
}
