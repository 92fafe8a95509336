//! Configuration structures for text extraction and the CLI.

use serde::{Deserialize, Serialize};

/// Main configuration for pdftxt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdftxtConfig {
    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Page-text backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// Per-page extraction with lopdf.
    #[default]
    Lopdf,
    /// Layout-aware extraction with pdf-extract.
    PdfExtract,
}

/// PDF processing configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Backend used to pull text out of each page.
    pub backend: Backend,

    /// Password for encrypted documents (empty password when unset).
    pub password: Option<String>,
}

impl PdfConfig {
    /// Password to try on encrypted documents.
    pub fn password(&self) -> &str {
        self.password.as_deref().unwrap_or("")
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Exit with status 0 even when extraction fails.
    pub zero_exit_on_failure: bool,
}

impl PdftxtConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = PdftxtConfig::default();
        assert_eq!(config.pdf.backend, Backend::Lopdf);
        assert_eq!(config.pdf.password(), "");
        assert!(!config.output.zero_exit_on_failure);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: PdftxtConfig =
            serde_json::from_str(r#"{"pdf": {"backend": "pdf-extract"}}"#).unwrap();
        assert_eq!(config.pdf.backend, Backend::PdfExtract);
        assert_eq!(config.pdf.password, None);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = PdftxtConfig::default();
        config.pdf.password = Some("secret".to_string());
        config.output.zero_exit_on_failure = true;
        config.save(&path).unwrap();

        assert_eq!(PdftxtConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = PdftxtConfig::from_file(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
