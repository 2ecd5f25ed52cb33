//! Error types for the pdf2text library.

use std::io;
use thiserror::Error;

/// Result type alias for pdf2text operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a document.
///
/// Every variant is terminal and maps to exactly one process exit code.
#[derive(Error, Debug)]
pub enum Error {
    /// The encoded file name token is malformed.
    #[error("invalid file name token: {0}")]
    Decode(String),

    /// The configuration file is unreadable or the output encoding is unknown.
    #[error("configuration error: {0}")]
    Config(String),

    /// The document is missing, corrupted, or the password is wrong.
    #[error("cannot open document: {0}")]
    DocumentOpen(String),

    /// The document's security settings forbid text extraction.
    #[error("copying of text from this document is not allowed")]
    PermissionDenied,

    /// The output text file cannot be created.
    #[error("cannot open text file {0}")]
    OutputOpen(String),

    /// I/O error while writing the output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Process exit code for this error.
    ///
    /// Distinct codes per failure point: 99 for a bad token, 4 for
    /// configuration, 1 for document open, 3 for denied permission,
    /// 2 for anything wrong with the output sink.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Decode(_) => 99,
            Error::Config(_) => 4,
            Error::DocumentOpen(_) => 1,
            Error::PermissionDenied => 3,
            Error::OutputOpen(_) => 2,
            Error::Io(_) => 2,
        }
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::Decryption(_) => Error::DocumentOpen("incorrect password".to_string()),
            _ => Error::DocumentOpen(err.to_string()),
        }
    }
}
