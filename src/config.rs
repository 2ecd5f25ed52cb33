//! Global configuration file handling.
//!
//! Defaults for encoding and line-ending behavior can come from an
//! optional TOML file; command-line flags always win over file values.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::options::Eol;

/// Configuration file looked up in the working directory when no
/// explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "pdf2text.toml";

/// On-disk TOML configuration. All fields are optional so partial
/// configs work; missing keys fall back to built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlobalConfig {
    /// Default output text encoding name.
    pub text_encoding: Option<String>,

    /// Default line-ending convention: unix, dos, or mac.
    pub text_eol: Option<String>,

    /// Whether page break markers are written between pages.
    pub page_breaks: Option<bool>,
}

impl GlobalConfig {
    /// Load the configuration.
    ///
    /// An explicitly given path must exist and parse. The implicit
    /// working-directory file may be absent, in which case built-in
    /// defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "cannot read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        toml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "cannot parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Line-ending convention from the file, if present and valid.
    pub fn eol(&self) -> Option<Eol> {
        self.text_eol.as_deref().and_then(Eol::parse_lenient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_full_config_parses() {
        let file = write_config(
            "text_encoding = \"UTF-16BE\"\ntext_eol = \"dos\"\npage_breaks = false\n",
        );
        let config = GlobalConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.text_encoding.as_deref(), Some("UTF-16BE"));
        assert_eq!(config.eol(), Some(Eol::Dos));
        assert_eq!(config.page_breaks, Some(false));
    }

    #[test]
    fn test_partial_config_leaves_rest_unset() {
        let file = write_config("text_eol = \"mac\"\n");
        let config = GlobalConfig::load(Some(file.path())).unwrap();
        assert!(config.text_encoding.is_none());
        assert_eq!(config.eol(), Some(Eol::Mac));
        assert!(config.page_breaks.is_none());
    }

    #[test]
    fn test_invalid_eol_value_resolves_to_none() {
        let file = write_config("text_eol = \"crlf\"\n");
        let config = GlobalConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.eol(), None);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let result = GlobalConfig::load(Some(Path::new("/no/such/pdf2text.toml")));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let file = write_config("text_eol = [not toml");
        let result = GlobalConfig::load(Some(file.path()));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_no_file_gives_defaults() {
        let config = GlobalConfig::load(None).unwrap();
        assert!(config.text_encoding.is_none());
        assert!(config.text_eol.is_none());
        assert!(config.page_breaks.is_none());
    }
}
