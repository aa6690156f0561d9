//! Vocabulary and quiz error types.
//!
//! User answers never produce errors; these cover broken vocabulary data and
//! terminal I/O failures.

use thiserror::Error;

use crate::model::Language;

/// Errors raised while building or consuming a vocabulary collection.
#[derive(Debug, Error)]
pub enum VocabError {
    /// The vocabulary contains no entries.
    #[error("vocabulary is empty")]
    EmptyCollection,

    /// An entry breaks the vocabulary invariant.
    #[error("invalid entry #{index}: {reason}")]
    InvalidEntry { index: usize, reason: String },

    /// An entry handed to the quiz directly has nothing to ask in `language`.
    #[error("{word}: no {language} translation")]
    MissingTranslation { word: String, language: Language },

    /// A conjugation group outside 1..=3.
    #[error("unknown verb group: {0} (expected 1, 2 or 3)")]
    UnknownGroup(u8),

    /// Reading input or writing output failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
