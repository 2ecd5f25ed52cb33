//! # pdf2text
//!
//! PDF to plain-text conversion with layout, encoding, and page-range
//! control.
//!
//! The library opens a document, selects a page range, extracts each
//! page as text, and writes the result to a text file in a configurable
//! character encoding.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdf2text::{convert_file, ExtractOptions};
//!
//! fn main() -> pdf2text::Result<()> {
//!     let options = ExtractOptions::new().with_page_breaks(false);
//!     convert_file("report.pdf", "report.txt", &options)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Layout modes**: reading order, physical, simple, table, line printer, raw
//! - **Page ranges**: first and last page clamped against the document
//! - **Output encodings**: UTF-8, UTF-16, 7-bit ASCII, and WHATWG labels
//! - **Encrypted documents**: owner and user passwords, copy-permission checks
//! - **Encoded file names**: Base64 command-line path tokens

pub mod codec;
pub mod config;
pub mod encoding;
pub mod error;
pub mod extract;
pub mod options;
pub mod output;
pub mod pages;
pub mod session;

// Re-export commonly used types
pub use codec::PathCodec;
pub use config::GlobalConfig;
pub use encoding::TextEncoding;
pub use error::{Error, Result};
pub use extract::run_extraction;
pub use options::{Eol, ExtractOptions, LayoutFlags, LayoutMode};
pub use output::resolve_output_path;
pub use pages::PageRange;
pub use session::{Credentials, DocumentSession};

use std::path::Path;

/// Convert a whole PDF file to a text file.
///
/// Opens the document without a password, checks that its security
/// settings allow copying, and extracts every page.
///
/// # Example
///
/// ```no_run
/// use pdf2text::{convert_file, ExtractOptions};
///
/// convert_file("document.pdf", "document.txt", &ExtractOptions::new()).unwrap();
/// ```
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &ExtractOptions,
) -> Result<()> {
    convert_file_with_credentials(input, output, &Credentials::default(), options)
}

/// Convert a password-protected PDF file to a text file.
///
/// # Example
///
/// ```no_run
/// use pdf2text::{convert_file_with_password, ExtractOptions};
///
/// convert_file_with_password("locked.pdf", "locked.txt", "secret", &ExtractOptions::new())
///     .unwrap();
/// ```
pub fn convert_file_with_password<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    password: &str,
    options: &ExtractOptions,
) -> Result<()> {
    let credentials = Credentials::new(None, Some(password.to_string()));
    convert_file_with_credentials(input, output, &credentials, options)
}

/// Convert a PDF file to a text file with explicit credentials.
pub fn convert_file_with_credentials<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    credentials: &Credentials,
    options: &ExtractOptions,
) -> Result<()> {
    let encoding = TextEncoding::resolve(&options.encoding_name)?;
    let session = DocumentSession::open(input.as_ref(), credentials)?;
    session.require_copy_permission()?;
    let range = PageRange::resolve(None, None, session.page_count());
    run_extraction(&session, range, options, encoding, output.as_ref())
}
