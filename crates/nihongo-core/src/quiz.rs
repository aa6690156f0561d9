//! The interactive quiz loop.
//!
//! Each round picks an entry and a direction, prompts on the output, reads
//! one line of input, grades it, and updates the score. Typing `q` (or
//! closing the input) ends the session without grading that round.

use std::fmt;
use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};

use crate::error::VocabError;
use crate::group::resolve_group;
use crate::model::{Language, VocabCollection, VocabEntry};
use crate::normalize::expand_accepted;
use crate::traits::Picker;

/// Input that ends the session.
pub const QUIT_SENTINEL: &str = "q";

/// Which way a round asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Japanese shown, translation expected.
    Recognition,
    /// Translation shown, Japanese expected.
    Production,
    /// Japanese shown, conjugation group expected.
    Classification,
}

impl Direction {
    pub const ALL: [Direction; 3] = [
        Direction::Recognition,
        Direction::Production,
        Direction::Classification,
    ];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Recognition => write!(f, "recognition"),
            Direction::Production => write!(f, "production"),
            Direction::Classification => write!(f, "classification"),
        }
    }
}

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Correct,
    Incorrect,
    /// The user quit (or input ended); nothing was graded.
    Quit,
}

/// Running tally of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub score: u32,
    pub total: u32,
}

impl QuizSummary {
    /// Fraction of graded rounds answered correctly (0.0 before any round).
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.score) / f64::from(self.total)
        }
    }

    fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Correct => {
                self.score += 1;
                self.total += 1;
            }
            RoundOutcome::Incorrect => self.total += 1,
            RoundOutcome::Quit => {}
        }
    }
}

/// Returns `true` if `answer` is the quit sentinel.
pub fn is_quit(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(QUIT_SENTINEL)
}

/// Recognition grading: `answer` is lower-cased and trimmed, then looked up
/// in the umlaut-expanded translation set.
pub fn grade_recognition(entry: &VocabEntry, language: Language, answer: &str) -> bool {
    let accepted = expand_accepted(entry.translations(language));
    accepted.contains(&answer.trim().to_lowercase())
}

/// Production grading: exact match against word, reading, or romaji.
pub fn grade_production(entry: &VocabEntry, answer: &str) -> bool {
    answer == entry.word || answer == entry.reading || answer == entry.romanized
}

/// Classification grading: the answer must resolve to the entry's group.
pub fn grade_classification(entry: &VocabEntry, answer: &str) -> bool {
    resolve_group(answer) == Some(entry.group)
}

/// UI strings for one language.
struct Messages {
    title: &'static str,
    language_label: &'static str,
    quit_hint: &'static str,
    comment_label: &'static str,
    correct: &'static str,
    wrong_answers: &'static str,
    wrong_answer: &'static str,
    group_label: &'static str,
}

const GERMAN: Messages = Messages {
    title: "📘 Japanisch-Vokabeltrainer",
    language_label: "Sprache",
    quit_hint: "Gib 'q' ein, um zu beenden.",
    comment_label: "Kommentar",
    correct: "✅ Richtig!",
    wrong_answers: "❌ Falsch. Richtige Antwort(en)",
    wrong_answer: "❌ Falsch. Richtige Antwort",
    group_label: "Gruppe",
};

const ENGLISH: Messages = Messages {
    title: "📘 Japanese vocabulary trainer",
    language_label: "Language",
    quit_hint: "Type 'q' to quit.",
    comment_label: "Comment",
    correct: "✅ Correct!",
    wrong_answers: "❌ Wrong. Correct answer(s)",
    wrong_answer: "❌ Wrong. Correct answer",
    group_label: "group",
};

fn messages(language: Language) -> &'static Messages {
    match language {
        Language::German => &GERMAN,
        Language::English => &ENGLISH,
    }
}

fn question(language: Language, direction: Direction, shown: &str) -> String {
    match (language, direction) {
        (Language::German, Direction::Recognition) => format!("💬 Was heißt {shown}?"),
        (Language::German, Direction::Production) => {
            format!("💬 Wie sagt man {shown} auf Japanisch?")
        }
        (Language::German, Direction::Classification) => {
            format!("💬 Zu welcher Gruppe gehört {shown}?")
        }
        (Language::English, Direction::Recognition) => format!("💬 What does {shown} mean?"),
        (Language::English, Direction::Production) => {
            format!("💬 How do you say {shown} in Japanese?")
        }
        (Language::English, Direction::Classification) => {
            format!("💬 Which group does {shown} belong to?")
        }
    }
}

fn tally(language: Language, summary: QuizSummary) -> String {
    match language {
        Language::German => format!(
            "📊 Ergebnis: {} von {} richtig beantwortet.",
            summary.score, summary.total
        ),
        Language::English => format!(
            "📊 Result: {} of {} answered correctly.",
            summary.score, summary.total
        ),
    }
}

/// Read one line, stripping only the line terminator. `None` at end of input.
fn read_answer<R: BufRead>(input: &mut R) -> Result<Option<String>, VocabError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

/// A quiz session over a vocabulary collection.
pub struct Quiz<'a, P> {
    vocab: &'a VocabCollection,
    language: Language,
    picker: P,
    summary: QuizSummary,
}

impl<'a, P: Picker> Quiz<'a, P> {
    pub fn new(vocab: &'a VocabCollection, language: Language, picker: P) -> Self {
        Self {
            vocab,
            language,
            picker,
            summary: QuizSummary::default(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// The tally so far.
    pub fn summary(&self) -> QuizSummary {
        self.summary
    }

    /// Run rounds until the user quits, then print the final tally.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<QuizSummary, VocabError> {
        let msg = messages(self.language);
        writeln!(output, "{}", msg.title)?;
        writeln!(
            output,
            "{}: {}",
            msg.language_label,
            self.language.display_name()
        )?;
        writeln!(output, "{}\n", msg.quit_hint)?;

        while self.play_round(input, output)? != RoundOutcome::Quit {}

        writeln!(output, "\n{}", tally(self.language, self.summary))?;
        output.flush()?;

        tracing::info!(
            score = self.summary.score,
            total = self.summary.total,
            "quiz session finished"
        );
        Ok(self.summary)
    }

    /// Pick an entry and a direction, then play one round.
    pub fn play_round<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<RoundOutcome, VocabError> {
        let vocab = self.vocab;
        let index = self.picker.pick(vocab.len());
        let entry = vocab.get(index).ok_or(VocabError::EmptyCollection)?;
        let direction = Direction::ALL[self.picker.pick(Direction::ALL.len())];
        self.play(entry, direction, input, output)
    }

    /// Play one round for a given entry and direction.
    pub fn play<R: BufRead, W: Write>(
        &mut self,
        entry: &VocabEntry,
        direction: Direction,
        input: &mut R,
        output: &mut W,
    ) -> Result<RoundOutcome, VocabError> {
        tracing::debug!(word = %entry.word, %direction, "quiz round");

        let msg = messages(self.language);
        let lang = self.language;

        let shown = match direction {
            Direction::Production => {
                let translations = entry.translations(lang);
                if translations.is_empty() {
                    return Err(VocabError::MissingTranslation {
                        word: entry.word.clone(),
                        language: lang,
                    });
                }
                let translation = &translations[self.picker.pick(translations.len())];
                format!("'{translation}'")
            }
            Direction::Recognition | Direction::Classification => {
                format!("'{}' ({}, {})", entry.word, entry.reading, entry.romanized)
            }
        };

        write!(output, "{}", question(lang, direction, &shown))?;
        if let Some(comment) = entry.comment(lang) {
            write!(output, " {}: {comment}", msg.comment_label)?;
        }
        writeln!(output)?;
        write!(output, "> ")?;
        output.flush()?;

        let answer = match read_answer(input)? {
            Some(answer) if !is_quit(&answer) => answer,
            _ => {
                tracing::debug!("quit requested");
                return Ok(RoundOutcome::Quit);
            }
        };

        let correct = match direction {
            Direction::Recognition => grade_recognition(entry, lang, &answer),
            Direction::Production => grade_production(entry, &answer),
            Direction::Classification => grade_classification(entry, &answer),
        };

        if correct {
            writeln!(output, "{}\n", msg.correct)?;
        } else {
            match direction {
                Direction::Recognition => writeln!(
                    output,
                    "{}: {}\n",
                    msg.wrong_answers,
                    entry.translations(lang).join(", ")
                )?,
                Direction::Production => {
                    writeln!(output, "{}: {}\n", msg.wrong_answer, entry.headline())?
                }
                Direction::Classification => writeln!(
                    output,
                    "{}: {}, {} {}\n",
                    msg.wrong_answer,
                    entry.headline(),
                    msg.group_label,
                    entry.group
                )?,
            }
        }

        let outcome = if correct {
            RoundOutcome::Correct
        } else {
            RoundOutcome::Incorrect
        };
        self.summary.record(outcome);
        tracing::debug!(?outcome, score = self.summary.score, total = self.summary.total);
        Ok(outcome)
    }
}
