pub mod init;
pub mod quiz;
pub mod table;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;

use nihongo_core::config::load_config_from;
use nihongo_core::model::{Language, VocabCollection};
use nihongo_core::parser::load_vocab;

/// Resolve config + flag overrides and load the vocabulary.
fn load_session(
    vocab: Option<PathBuf>,
    lang: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<(VocabCollection, Language)> {
    let config = load_config_from(config_path.as_deref())?;

    let language = lang
        .as_deref()
        .map(Language::from_tag)
        .unwrap_or_else(|| config.language());
    let vocab_path = vocab.unwrap_or(config.vocab_path);
    tracing::debug!(%language, vocab = %vocab_path.display(), "session settings");

    Ok((load_vocab(&vocab_path)?, language))
}
