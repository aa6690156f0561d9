//! Core data model types for nihongo.
//!
//! These are the vocabulary types that both the quiz engine and the table
//! formatter read from. Everything here is immutable once loaded.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::VocabError;

/// A supported translation / UI language.
///
/// The set is closed: translation and comment lookups go through explicit
/// fields rather than an open map keyed by tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "de-DE")]
    German,
    #[serde(rename = "en-EN")]
    English,
}

impl Language {
    /// The tag used as key in vocabulary files.
    pub fn tag(self) -> &'static str {
        match self {
            Language::German => "de-DE",
            Language::English => "en-EN",
        }
    }

    /// Name of the language in its own UI.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::German => "Deutsch",
            Language::English => "English",
        }
    }

    /// Lenient tag parsing: exactly `de-DE` selects German, anything else
    /// falls back to English.
    pub fn from_tag(tag: &str) -> Self {
        if tag == "de-DE" {
            Language::German
        } else {
            Language::English
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Language::from_tag(s))
    }
}

/// Japanese verb conjugation class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum VerbGroup {
    /// Consonant-stem (u-verbs).
    Godan = 1,
    /// Vowel-stem (ru-verbs).
    Ichidan = 2,
    /// する, 来る and friends.
    Irregular = 3,
}

impl VerbGroup {
    pub const ALL: [VerbGroup; 3] = [VerbGroup::Godan, VerbGroup::Ichidan, VerbGroup::Irregular];

    pub fn number(self) -> u8 {
        self as u8
    }

    /// Canonical lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            VerbGroup::Godan => "godan",
            VerbGroup::Ichidan => "ichidan",
            VerbGroup::Irregular => "irregular",
        }
    }
}

impl TryFrom<u8> for VerbGroup {
    type Error = VocabError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(VerbGroup::Godan),
            2 => Ok(VerbGroup::Ichidan),
            3 => Ok(VerbGroup::Irregular),
            other => Err(VocabError::UnknownGroup(other)),
        }
    }
}

impl From<VerbGroup> for u8 {
    fn from(group: VerbGroup) -> Self {
        group.number()
    }
}

impl fmt::Display for VerbGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number(), self.name())
    }
}

/// Accepted translations, one list per supported language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translations {
    #[serde(rename = "en-EN")]
    pub english: Vec<String>,
    #[serde(rename = "de-DE")]
    pub german: Vec<String>,
}

impl Translations {
    pub fn get(&self, language: Language) -> &[String] {
        match language {
            Language::English => &self.english,
            Language::German => &self.german,
        }
    }
}

/// Optional per-language annotation. `{}` in the file means no comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "en-EN", default, skip_serializing_if = "Option::is_none")]
    pub english: Option<String>,
    #[serde(rename = "de-DE", default, skip_serializing_if = "Option::is_none")]
    pub german: Option<String>,
}

impl Comment {
    /// The comment for `language`, treating a blank string as absent.
    pub fn get(&self, language: Language) -> Option<&str> {
        let text = match language {
            Language::English => self.english.as_deref(),
            Language::German => self.german.as_deref(),
        };
        text.filter(|c| !c.trim().is_empty())
    }
}

/// A single vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    /// Native-script form (e.g. 食べる).
    pub word: String,
    /// Kana reading.
    #[serde(rename = "hiragana")]
    pub reading: String,
    /// Latin transliteration.
    #[serde(rename = "romaji")]
    pub romanized: String,
    #[serde(rename = "translation")]
    pub translations: Translations,
    pub group: VerbGroup,
    #[serde(default)]
    pub comment: Comment,
}

impl VocabEntry {
    pub fn translations(&self, language: Language) -> &[String] {
        self.translations.get(language)
    }

    pub fn comment(&self, language: Language) -> Option<&str> {
        self.comment.get(language)
    }

    /// `word (reading, romanized)` as shown in prompts and feedback.
    pub fn headline(&self) -> String {
        format!("{} ({}, {})", self.word, self.reading, self.romanized)
    }

    /// Check the entry invariant, returning the first violation.
    fn check(&self) -> Result<(), String> {
        if self.word.trim().is_empty() {
            return Err("word is empty".into());
        }
        if self.reading.trim().is_empty() {
            return Err(format!("{}: reading is empty", self.word));
        }
        if self.romanized.trim().is_empty() {
            return Err(format!("{}: romaji is empty", self.word));
        }
        for language in [Language::English, Language::German] {
            if self.translations(language).is_empty() {
                return Err(format!("{}: no {} translation", self.word, language));
            }
        }
        Ok(())
    }
}

/// The full vocabulary, non-empty and read-only after construction.
#[derive(Debug, Clone)]
pub struct VocabCollection {
    entries: Vec<VocabEntry>,
}

impl VocabCollection {
    /// Build a collection, rejecting an empty list or any entry that breaks
    /// the entry invariant.
    pub fn new(entries: Vec<VocabEntry>) -> Result<Self, VocabError> {
        if entries.is_empty() {
            return Err(VocabError::EmptyCollection);
        }
        for (index, entry) in entries.iter().enumerate() {
            entry
                .check()
                .map_err(|reason| VocabError::InvalidEntry { index, reason })?;
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&VocabEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed collection.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VocabEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a VocabCollection {
    type Item = &'a VocabEntry;
    type IntoIter = std::slice::Iter<'a, VocabEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
pub(crate) fn sample_entry() -> VocabEntry {
    VocabEntry {
        word: "食べる".into(),
        reading: "たべる".into(),
        romanized: "taberu".into(),
        translations: Translations {
            english: vec!["to eat".into()],
            german: vec!["essen".into()],
        },
        group: VerbGroup::Ichidan,
        comment: Comment::default(),
    }
}
