//! Trainer configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::Language;

/// Top-level nihongo configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NihongoConfig {
    /// Quiz / UI language tag. `de-DE` is German, anything else English.
    #[serde(default = "default_language")]
    pub language: String,
    /// Path to the vocabulary JSON file.
    #[serde(default = "default_vocab_path")]
    pub vocab_path: PathBuf,
}

fn default_language() -> String {
    Language::German.tag().to_string()
}
fn default_vocab_path() -> PathBuf {
    PathBuf::from("vocab/verbs.json")
}

impl Default for NihongoConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            vocab_path: default_vocab_path(),
        }
    }
}

impl NihongoConfig {
    /// The configured language, resolved to a supported one.
    pub fn language(&self) -> Language {
        Language::from_tag(&self.language)
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `nihongo.toml` in the current directory
/// 2. `~/.config/nihongo/config.toml`
///
/// Environment variable overrides: `NIHONGO_LANG`, `NIHONGO_VOCAB`.
pub fn load_config_from(path: Option<&Path>) -> Result<NihongoConfig> {
    load_config_with(path, |key| std::env::var(key).ok())
}

/// [`load_config_from`] with the environment lookup supplied by the caller.
pub fn load_config_with(
    path: Option<&Path>,
    var: impl Fn(&str) -> Option<String>,
) -> Result<NihongoConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("nihongo.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading config");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<NihongoConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => NihongoConfig::default(),
    };

    apply_env_overrides(&mut config, var);
    Ok(config)
}

fn apply_env_overrides(config: &mut NihongoConfig, var: impl Fn(&str) -> Option<String>) {
    if let Some(language) = var("NIHONGO_LANG") {
        config.language = language;
    }
    if let Some(vocab) = var("NIHONGO_VOCAB") {
        config.vocab_path = PathBuf::from(vocab);
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("nihongo"))
}
