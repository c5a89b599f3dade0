use crate::error::SpellError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Longest word kept, in bytes. Applies to dictionary lines and scanned tokens alike.
    #[serde(default = "default_max_word_len")]
    pub max_word_len: usize,

    /// Most dictionary entries accepted before loading fails. 0 means no limit.
    #[serde(default = "default_max_words")]
    pub max_words: usize,

    /// Source name reported for findings read from standard input.
    #[serde(default = "default_stdin_name")]
    pub stdin_name: String,

    #[serde(default)]
    pub parallel: bool,
}

fn default_max_word_len() -> usize {
    127
}

fn default_max_words() -> usize {
    200_000
}

fn default_stdin_name() -> String {
    "stdin".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_word_len: default_max_word_len(),
            max_words: default_max_words(),
            stdin_name: default_stdin_name(),
            parallel: false,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > config file > defaults.
    ///
    /// Only an explicitly named file is read; there is no implicit lookup.
    pub fn load(
        config_path: Option<&Path>,
        max_word_len: Option<usize>,
        max_words: Option<usize>,
        stdin_name: Option<String>,
        parallel: bool,
    ) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        // Apply CLI overrides
        if let Some(len) = max_word_len {
            config.max_word_len = len;
        }
        if let Some(limit) = max_words {
            config.max_words = limit;
        }
        if let Some(name) = stdin_name {
            config.stdin_name = name;
        }
        config.parallel |= parallel;

        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn validate(&self) -> Result<(), SpellError> {
        if self.max_word_len == 0 {
            return Err(SpellError::InvalidConfig(
                "max_word_len must be at least 1".to_string(),
            ));
        }
        if self.stdin_name.is_empty() {
            return Err(SpellError::InvalidConfig(
                "stdin_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.max_word_len, 127);
        assert_eq!(config.max_words, 200_000);
        assert_eq!(config.stdin_name, "stdin");
        assert!(!config.parallel);
    }

    #[test]
    fn test_file_then_cli_overrides() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "max_word_len = 16\nmax_words = 10\nparallel = true").unwrap();

        let config = Config::load(Some(file.path()), None, Some(0), None, false).unwrap();
        assert_eq!(config.max_word_len, 16);
        assert_eq!(config.max_words, 0);
        assert_eq!(config.stdin_name, "stdin");
        assert!(config.parallel);
    }

    #[test]
    fn test_rejects_zero_word_len() {
        let err = Config::load(None, Some(0), None, None, false).unwrap_err();
        assert!(err.to_string().contains("max_word_len"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::load(Some(&missing), None, None, None, false).is_err());
    }
}
