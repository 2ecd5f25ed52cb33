//! Document session: open, decrypt, and query a PDF document.
//!
//! The session owns both the parsed document and the raw bytes; the
//! extraction engine works from the bytes, everything else from the
//! parsed form.

use std::fs;
use std::path::Path;

use log::debug;
use lopdf::{Document, Object};

use crate::error::{Error, Result};

/// Copy/extract permission bit in the encryption dictionary's `P` entry.
const PERM_COPY: i64 = 1 << 4;

/// Optional owner and user passwords for opening a document.
///
/// Used only at open time; the caller drops them right after.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub owner_password: Option<String>,
    pub user_password: Option<String>,
}

impl Credentials {
    pub fn new(owner: Option<String>, user: Option<String>) -> Self {
        Self {
            owner_password: owner,
            user_password: user,
        }
    }

    /// Passwords to try at open time, most privileged first. The empty
    /// password comes last; many "protected" documents accept it.
    fn candidates(&self) -> Vec<&str> {
        let mut list = Vec::new();
        if let Some(ref pw) = self.owner_password {
            list.push(pw.as_str());
        }
        if let Some(ref pw) = self.user_password {
            list.push(pw.as_str());
        }
        list.push("");
        list
    }
}

/// An opened document. Construction fails rather than producing an
/// invalid session, so holding one means the document is usable.
pub struct DocumentSession {
    doc: Document,
    bytes: Vec<u8>,
    encrypted: bool,
    password: Option<String>,
    permissions: Option<i64>,
}

impl DocumentSession {
    /// Open the document at `path`, decrypting it if necessary.
    ///
    /// Permission flags are snapshotted from the encryption dictionary
    /// before decryption. The password that unlocked the document is
    /// retained for the extraction engine's encrypted entry points.
    pub fn open(path: &Path, credentials: &Credentials) -> Result<Self> {
        let bytes = fs::read(path)
            .map_err(|e| Error::DocumentOpen(format!("'{}': {}", path.display(), e)))?;
        let mut doc = Document::load_mem(&bytes)?;

        let encrypted = doc.is_encrypted();
        let mut password = None;
        let mut permissions = None;
        if encrypted {
            permissions = read_permissions(&doc);
            let unlocked = credentials.candidates().into_iter().find_map(|candidate| {
                doc.decrypt(candidate)
                    .is_ok()
                    .then(|| candidate.to_string())
            });
            match unlocked {
                Some(pw) => password = Some(pw),
                None => return Err(Error::DocumentOpen("incorrect password".to_string())),
            }
        }

        debug!(
            "opened '{}': {} pages, encrypted: {}",
            path.display(),
            doc.get_pages().len(),
            encrypted
        );

        Ok(Self {
            doc,
            bytes,
            encrypted,
            password,
            permissions,
        })
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Whether the document's security settings allow text extraction.
    ///
    /// Unencrypted documents always do. Encrypted ones must have the
    /// copy bit set in their permission flags.
    pub fn copy_allowed(&self) -> bool {
        match self.permissions {
            Some(p) => p & PERM_COPY != 0,
            None => true,
        }
    }

    /// Fail with [`Error::PermissionDenied`] when the document forbids
    /// text extraction. Every conversion entry point runs this before
    /// touching the output file.
    pub fn require_copy_permission(&self) -> Result<()> {
        if self.copy_allowed() {
            Ok(())
        } else {
            Err(Error::PermissionDenied)
        }
    }

    /// Whether the document was encrypted on disk.
    pub fn is_encrypted(&self) -> bool {
        self.encrypted
    }

    /// The password that unlocked the document, if any was needed.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// The raw file bytes, for the extraction engine.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The parsed document, for content-stream-order extraction.
    pub fn document(&self) -> &Document {
        &self.doc
    }
}

/// Read the `P` permission flags from the encryption dictionary.
fn read_permissions(doc: &Document) -> Option<i64> {
    let encrypt = doc.trailer.get(b"Encrypt").ok()?;
    let dict = match encrypt {
        Object::Reference(id) => doc.get_object(*id).ok()?.as_dict().ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }?;
    dict.get(b"P").ok()?.as_i64().ok()
}
