use std::path::{Path, PathBuf};
use token_cover::NormalizerConfig;

/// CLI configuration, resolved from flags or their environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the HuggingFace `tokenizer.json` producing fine tokens
    pub tokenizer_path: PathBuf,
    /// Normalization policy used when comparing tokens
    pub normalizer: NormalizerConfig,
}

impl Config {
    /// Resolve configuration values.
    ///
    /// - `tokenizer`: `TOKEN_COVER_TOKENIZER`, required (supports ~ for home directory)
    /// - `normalizer`: `TOKEN_COVER_NORMALIZER`, optional path to a JSON normalizer config
    pub fn resolve(tokenizer: Option<&str>, normalizer: Option<&str>) -> Result<Self, ConfigError> {
        let tokenizer_path = tokenizer
            .map(expand_tilde)
            .ok_or(ConfigError::MissingTokenizerPath)?;

        let normalizer = match normalizer {
            Some(path) => load_normalizer(&expand_tilde(path))?,
            None => NormalizerConfig::default(),
        };

        Ok(Self {
            tokenizer_path,
            normalizer,
        })
    }
}

fn load_normalizer(path: &Path) -> Result<NormalizerConfig, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadNormalizer {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| ConfigError::ParseNormalizer {
        path: path.to_path_buf(),
        source,
    })
}

/// Expand ~ or ~/ prefix to the user's home directory.
fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"))
    } else if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path))
    } else {
        PathBuf::from(path)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("No tokenizer given: pass --tokenizer or set TOKEN_COVER_TOKENIZER")]
    MissingTokenizerPath,

    #[error("Failed to read normalizer config {}: {source}", .path.display())]
    ReadNormalizer {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid normalizer config {}: {source}", .path.display())]
    ParseNormalizer {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use token_cover::SpecialChars;

    #[test]
    fn tokenizer_is_required() {
        assert!(matches!(
            Config::resolve(None, None),
            Err(ConfigError::MissingTokenizerPath)
        ));
    }

    #[test]
    fn default_normalizer_without_file() {
        let config = Config::resolve(Some("models/tokenizer.json"), None).unwrap();
        assert_eq!(config.tokenizer_path, PathBuf::from("models/tokenizer.json"));
        assert_eq!(config.normalizer, NormalizerConfig::default());
    }

    #[test]
    fn loads_normalizer_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"special_chars": "non_alphanumeric"}}"#).unwrap();

        let config =
            Config::resolve(Some("tokenizer.json"), Some(file.path().to_str().unwrap())).unwrap();
        assert_eq!(config.normalizer.special_chars, SpecialChars::NonAlphanumeric);
        assert!(config.normalizer.lowercase);
    }

    #[test]
    fn rejects_invalid_normalizer_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Config::resolve(Some("tokenizer.json"), Some(file.path().to_str().unwrap()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ParseNormalizer { .. }));
    }

    #[test]
    fn missing_normalizer_file_is_reported() {
        let err = Config::resolve(Some("tokenizer.json"), Some("/nonexistent/normalizer.json"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ReadNormalizer { .. }));
    }

    #[test]
    fn expands_home_directory() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/tok.json"), home.join("tok.json"));
        }
        assert_eq!(expand_tilde("/abs/tok.json"), PathBuf::from("/abs/tok.json"));
    }
}
