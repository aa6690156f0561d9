//! JSON vocabulary loader.
//!
//! Loads vocabulary files, builds a validated [`VocabCollection`], and
//! reports softer data issues as warnings.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{Language, VocabCollection, VocabEntry};

/// Parse a vocabulary JSON file into a collection.
pub fn load_vocab(path: &Path) -> Result<VocabCollection> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read vocabulary file: {}", path.display()))?;

    let vocab = parse_vocab_str(&content, path)?;
    tracing::info!(
        entries = vocab.len(),
        path = %path.display(),
        "loaded vocabulary"
    );
    Ok(vocab)
}

/// Parse a JSON string into a collection (useful for testing).
pub fn parse_vocab_str(content: &str, source_path: &Path) -> Result<VocabCollection> {
    let entries: Vec<VocabEntry> = serde_json::from_str(content)
        .with_context(|| format!("failed to parse JSON: {}", source_path.display()))?;

    VocabCollection::new(entries)
        .with_context(|| format!("invalid vocabulary: {}", source_path.display()))
}

/// A warning from vocabulary validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The word the warning is about (if applicable).
    pub word: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Check a loaded vocabulary for issues that do not stop a quiz.
pub fn validate_vocab(vocab: &VocabCollection) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Duplicate words
    let mut seen = HashSet::new();
    for entry in vocab {
        if !seen.insert(entry.word.as_str()) {
            warnings.push(ValidationWarning {
                word: Some(entry.word.clone()),
                message: format!("duplicate word: {}", entry.word),
            });
        }
    }

    // Duplicate translations within one entry
    for entry in vocab {
        for language in [Language::English, Language::German] {
            let mut seen = HashSet::new();
            for translation in entry.translations(language) {
                if !seen.insert(translation.to_lowercase()) {
                    warnings.push(ValidationWarning {
                        word: Some(entry.word.clone()),
                        message: format!("duplicate {language} translation: {translation}"),
                    });
                }
            }
        }
    }

    // Surrounding whitespace never matches in production rounds
    for entry in vocab {
        for (field, value) in [
            ("word", &entry.word),
            ("hiragana", &entry.reading),
            ("romaji", &entry.romanized),
        ] {
            if value.trim() != value.as_str() {
                warnings.push(ValidationWarning {
                    word: Some(entry.word.trim().to_string()),
                    message: format!("{field} has surrounding whitespace: {value:?}"),
                });
            }
        }
    }

    // Half-present comments
    for entry in vocab {
        let en = entry.comment(Language::English).is_some();
        let de = entry.comment(Language::German).is_some();
        if en != de {
            warnings.push(ValidationWarning {
                word: Some(entry.word.clone()),
                message: "comment is present in only one language".into(),
            });
        }
    }

    for w in &warnings {
        tracing::warn!(word = ?w.word, "{}", w.message);
    }

    warnings
}
