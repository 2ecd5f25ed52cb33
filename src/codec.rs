//! File name token codec.
//!
//! The first positional argument of the tool is not a literal path but a
//! base64 encoding of one. [`PathCodec`] owns the 256-entry reverse
//! lookup table used to decode it; the table is built once at
//! construction and dropped with the codec at the end of the run.

use crate::error::{Error, Result};

/// The 64-symbol base64 alphabet, in value order.
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Reverse table entry for bytes outside the alphabet.
const INVALID: u8 = 0xFF;

/// Base64 codec for the encoded file name argument.
pub struct PathCodec {
    reverse: [u8; 256],
}

impl PathCodec {
    /// Build the codec, populating the reverse lookup table.
    pub fn new() -> Self {
        let mut reverse = [INVALID; 256];
        for (value, &symbol) in ALPHABET.iter().enumerate() {
            reverse[symbol as usize] = value as u8;
        }
        Self { reverse }
    }

    /// Decode a base64 token into raw bytes.
    ///
    /// The token length must be a multiple of four. Four symbols become
    /// a 24-bit group split into three bytes; each trailing `=` drops
    /// one byte from the output. A `=` contributes a zero sextet and
    /// never advances the output past the computed length.
    pub fn decode(&self, token: &str) -> Result<Vec<u8>> {
        let data = token.as_bytes();
        if data.len() % 4 != 0 {
            return Err(Error::Decode(format!(
                "length {} is not a multiple of four",
                data.len()
            )));
        }
        if data.is_empty() {
            return Ok(Vec::new());
        }

        let mut output_len = data.len() / 4 * 3;
        if data[data.len() - 1] == b'=' {
            output_len -= 1;
        }
        if data[data.len() - 2] == b'=' {
            output_len -= 1;
        }

        let mut decoded = Vec::with_capacity(output_len);
        for chunk in data.chunks_exact(4) {
            let mut group: u32 = 0;
            for (pos, &symbol) in chunk.iter().enumerate() {
                let sextet = if symbol == b'=' {
                    0
                } else {
                    let value = self.reverse[symbol as usize];
                    if value == INVALID {
                        return Err(Error::Decode(format!(
                            "invalid symbol {:?}",
                            symbol as char
                        )));
                    }
                    u32::from(value)
                };
                group |= sextet << (6 * (3 - pos));
            }
            for shift in [16, 8, 0] {
                if decoded.len() < output_len {
                    decoded.push((group >> shift) as u8);
                }
            }
        }
        Ok(decoded)
    }

    /// Decode a token and validate the result as a file path.
    ///
    /// The decoded bytes must be non-empty UTF-8 with no control
    /// characters; anything else cannot have been a real path.
    pub fn decode_path(&self, token: &str) -> Result<String> {
        let bytes = self.decode(token)?;
        if bytes.is_empty() {
            return Err(Error::Decode("token decodes to an empty path".to_string()));
        }
        let path = String::from_utf8(bytes)
            .map_err(|_| Error::Decode("decoded path is not valid UTF-8".to_string()))?;
        if path.chars().any(|c| c.is_control()) {
            return Err(Error::Decode(
                "decoded path contains control characters".to_string(),
            ));
        }
        Ok(path)
    }

    /// Encode raw bytes as a padded base64 token.
    pub fn encode(&self, data: &[u8]) -> String {
        let mut out = String::with_capacity(data.len().div_ceil(3) * 4);
        for chunk in data.chunks(3) {
            let mut group: u32 = 0;
            for (pos, &byte) in chunk.iter().enumerate() {
                group |= u32::from(byte) << (8 * (2 - pos));
            }
            for pos in 0..4 {
                if pos <= chunk.len() {
                    let sextet = ((group >> (6 * (3 - pos))) & 0x3F) as usize;
                    out.push(ALPHABET[sextet] as char);
                } else {
                    out.push('=');
                }
            }
        }
        out
    }
}

impl Default for PathCodec {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    #[test]
    fn test_decode_known_token() {
        let codec = PathCodec::new();
        let decoded = codec.decode("cmVwb3J0LnBkZg==").unwrap();
        assert_eq!(decoded, b"report.pdf");
    }

    #[test]
    fn test_encode_known_path() {
        let codec = PathCodec::new();
        assert_eq!(codec.encode(b"report.pdf"), "cmVwb3J0LnBkZg==");
    }

    #[test]
    fn test_round_trip() {
        let codec = PathCodec::new();
        for path in [
            "a",
            "ab",
            "abc",
            "report.pdf",
            "/tmp/some dir/file name.PDF",
            "файл.pdf",
        ] {
            let token = codec.encode(path.as_bytes());
            assert_eq!(token.len() % 4, 0);
            assert_eq!(codec.decode(&token).unwrap(), path.as_bytes());
        }
    }

    #[test]
    fn test_matches_reference_implementation() {
        let codec = PathCodec::new();
        for path in ["x", "xy", "xyz", "/home/user/quarterly report.pdf"] {
            assert_eq!(codec.encode(path.as_bytes()), STANDARD.encode(path));
            assert_eq!(
                codec.decode(&STANDARD.encode(path)).unwrap(),
                path.as_bytes()
            );
        }
    }

    #[test]
    fn test_length_not_multiple_of_four_fails() {
        let codec = PathCodec::new();
        for token in ["A", "AB", "ABC", "AAAAA"] {
            assert!(matches!(codec.decode(token), Err(Error::Decode(_))));
        }
    }

    #[test]
    fn test_invalid_symbol_fails() {
        let codec = PathCodec::new();
        assert!(matches!(codec.decode("cmVw!3J0"), Err(Error::Decode(_))));
        assert!(matches!(codec.decode("cmVw b3J"), Err(Error::Decode(_))));
    }

    #[test]
    fn test_single_padding() {
        let codec = PathCodec::new();
        // "ab" encodes to three symbols plus one '='
        assert_eq!(codec.encode(b"ab"), "YWI=");
        assert_eq!(codec.decode("YWI=").unwrap(), b"ab");
    }

    #[test]
    fn test_double_padding() {
        let codec = PathCodec::new();
        assert_eq!(codec.encode(b"a"), "YQ==");
        assert_eq!(codec.decode("YQ==").unwrap(), b"a");
    }

    #[test]
    fn test_decode_path_accepts_normal_paths() {
        let codec = PathCodec::new();
        let token = codec.encode("dir/report.pdf".as_bytes());
        assert_eq!(codec.decode_path(&token).unwrap(), "dir/report.pdf");
    }

    #[test]
    fn test_decode_path_rejects_empty() {
        let codec = PathCodec::new();
        assert!(matches!(codec.decode_path(""), Err(Error::Decode(_))));
        // "====" decodes to a single zero byte, which is a control character
        assert!(matches!(codec.decode_path("===="), Err(Error::Decode(_))));
    }

    #[test]
    fn test_decode_path_rejects_control_characters() {
        let codec = PathCodec::new();
        let token = codec.encode(b"bad\npath.pdf");
        assert!(matches!(codec.decode_path(&token), Err(Error::Decode(_))));
        let token = codec.encode(b"nul\0path.pdf");
        assert!(matches!(codec.decode_path(&token), Err(Error::Decode(_))));
    }

    #[test]
    fn test_decode_path_rejects_invalid_utf8() {
        let codec = PathCodec::new();
        let token = codec.encode(&[0xFF, 0xFE, 0x41]);
        assert!(matches!(codec.decode_path(&token), Err(Error::Decode(_))));
    }
}
