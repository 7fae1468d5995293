use std::error;
use std::fmt;
use std::path::PathBuf;

use super::msg;

#[derive(Clone, Debug)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Error {
        Error { kind }
    }

    /// Return the kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

/// The kind of an error that can occur while documenting a template file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// No file exists at the given archive path.
    ArchiveNotFound(PathBuf),
    /// The archive file exists but cannot be read as a ZIP container.
    ArchiveInvalid(String),
    /// The unpacked archive does not contain a schema document.
    SchemaFileMissing(PathBuf),
    /// No decoding attempt produced valid JSON from the schema document.
    SchemaUndecodable,
    /// Any other I/O failure along the pipeline.
    Io(String),
}

impl ErrorKind {
    /// The process exit code reported for this kind. Zero is reserved for
    /// success.
    pub fn exit_code(&self) -> u8 {
        match self {
            ErrorKind::ArchiveNotFound(_) | ErrorKind::ArchiveInvalid(_) => 2,
            ErrorKind::SchemaFileMissing(_) => 3,
            ErrorKind::SchemaUndecodable => 4,
            ErrorKind::Io(_) => 1,
        }
    }
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let message = match &self.kind {
            ErrorKind::ArchiveNotFound(path) => msg::archive_not_found(path),
            ErrorKind::ArchiveInvalid(detail) => msg::archive_invalid(detail),
            ErrorKind::SchemaFileMissing(dir) => msg::schema_file_missing(dir),
            ErrorKind::SchemaUndecodable => msg::schema_undecodable(),
            ErrorKind::Io(detail) => detail.clone(),
        };
        write!(f, "{message}")
    }
}
