//! Output text encoding resolution.
//!
//! The configured encoding name becomes a concrete encoder. UTF-16 and
//! 7-bit ASCII are produced directly since `encoding_rs` only encodes
//! to the WHATWG output encodings; every other name goes through its
//! label registry.

use encoding_rs::Encoding;

use crate::error::{Error, Result};

/// A resolved output text encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf16Be,
    Utf16Le,
    /// 7-bit ASCII; unmappable characters become `?`.
    Ascii7,
    /// Any other encoding known to the label registry.
    Other(&'static Encoding),
}

impl TextEncoding {
    /// Resolve an encoding name.
    ///
    /// Failure here is fatal for the run: without an output encoding no
    /// text can be written.
    pub fn resolve(name: &str) -> Result<Self> {
        match name.to_ascii_uppercase().as_str() {
            "UTF-8" | "UTF8" => Ok(TextEncoding::Utf8),
            "UTF-16" | "UTF-16BE" | "UCS-2" => Ok(TextEncoding::Utf16Be),
            "UTF-16LE" => Ok(TextEncoding::Utf16Le),
            "ASCII" | "ASCII7" | "US-ASCII" => Ok(TextEncoding::Ascii7),
            _ => match Encoding::for_label(name.as_bytes()) {
                Some(enc) if enc == encoding_rs::UTF_16BE => Ok(TextEncoding::Utf16Be),
                Some(enc) if enc == encoding_rs::UTF_16LE => Ok(TextEncoding::Utf16Le),
                Some(enc) if enc == encoding_rs::UTF_8 => Ok(TextEncoding::Utf8),
                Some(enc) => Ok(TextEncoding::Other(enc)),
                None => Err(Error::Config(format!(
                    "couldn't get text encoding '{}'",
                    name
                ))),
            },
        }
    }

    /// Canonical name, for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Utf16Be => "UTF-16BE",
            TextEncoding::Utf16Le => "UTF-16LE",
            TextEncoding::Ascii7 => "ASCII7",
            TextEncoding::Other(enc) => enc.name(),
        }
    }

    /// The byte order mark for this encoding. Empty for encodings that
    /// have none.
    pub fn bom_bytes(self) -> &'static [u8] {
        match self {
            TextEncoding::Utf8 => &[0xEF, 0xBB, 0xBF],
            TextEncoding::Utf16Be => &[0xFE, 0xFF],
            TextEncoding::Utf16Le => &[0xFF, 0xFE],
            TextEncoding::Ascii7 | TextEncoding::Other(_) => &[],
        }
    }

    /// Encode a chunk of text for output.
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            TextEncoding::Utf8 => text.as_bytes().to_vec(),
            TextEncoding::Utf16Be => text
                .encode_utf16()
                .flat_map(|unit| unit.to_be_bytes())
                .collect(),
            TextEncoding::Utf16Le => text
                .encode_utf16()
                .flat_map(|unit| unit.to_le_bytes())
                .collect(),
            TextEncoding::Ascii7 => text
                .chars()
                .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
                .collect(),
            TextEncoding::Other(enc) => enc.encode(text).0.into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_utf8_spellings() {
        assert_eq!(TextEncoding::resolve("UTF-8").unwrap(), TextEncoding::Utf8);
        assert_eq!(TextEncoding::resolve("utf-8").unwrap(), TextEncoding::Utf8);
        assert_eq!(TextEncoding::resolve("UTF8").unwrap(), TextEncoding::Utf8);
    }

    #[test]
    fn test_resolve_utf16_is_big_endian() {
        assert_eq!(
            TextEncoding::resolve("UTF-16").unwrap(),
            TextEncoding::Utf16Be
        );
        assert_eq!(
            TextEncoding::resolve("UTF-16LE").unwrap(),
            TextEncoding::Utf16Le
        );
    }

    #[test]
    fn test_resolve_via_label_registry() {
        let enc = TextEncoding::resolve("Latin1").unwrap();
        assert!(matches!(enc, TextEncoding::Other(_)));
        assert_eq!(enc.name(), "windows-1252");
    }

    #[test]
    fn test_utf16_labels_never_resolve_to_other() {
        // The registry knows these labels, but its UTF-16 encoders fall
        // back to UTF-8 output, so they must map to the direct variants.
        assert_eq!(
            TextEncoding::resolve("unicodefffe").unwrap(),
            TextEncoding::Utf16Be
        );
        assert_eq!(
            TextEncoding::resolve("unicode").unwrap(),
            TextEncoding::Utf16Le
        );
    }

    #[test]
    fn test_unknown_encoding_is_config_error() {
        let result = TextEncoding::resolve("no-such-encoding");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_bom_bytes() {
        assert_eq!(TextEncoding::Utf8.bom_bytes(), &[0xEF, 0xBB, 0xBF]);
        assert_eq!(TextEncoding::Utf16Be.bom_bytes(), &[0xFE, 0xFF]);
        assert_eq!(TextEncoding::Utf16Le.bom_bytes(), &[0xFF, 0xFE]);
        assert!(TextEncoding::Ascii7.bom_bytes().is_empty());
    }

    #[test]
    fn test_encode_utf16be() {
        let bytes = TextEncoding::Utf16Be.encode("Hi");
        assert_eq!(bytes, vec![0x00, 0x48, 0x00, 0x69]);
    }

    #[test]
    fn test_encode_utf16le() {
        let bytes = TextEncoding::Utf16Le.encode("Hi");
        assert_eq!(bytes, vec![0x48, 0x00, 0x69, 0x00]);
    }

    #[test]
    fn test_encode_ascii7_replaces_unmappable() {
        let bytes = TextEncoding::Ascii7.encode("café");
        assert_eq!(bytes, b"caf?");
    }

    #[test]
    fn test_encode_latin1() {
        let enc = TextEncoding::resolve("Latin1").unwrap();
        assert_eq!(enc.encode("café"), vec![b'c', b'a', b'f', 0xE9]);
    }
}
