//! Fixed-width vocabulary table.
//!
//! Widths are measured in Unicode scalar values, so columns holding
//! double-width kanji/kana can drift out of alignment on a terminal.

use std::fmt;

use crate::model::{Language, VocabCollection, VocabEntry};

/// Delimiter between table fields.
pub const DELIMITER: &str = " | ";

fn display_len(s: &str) -> usize {
    s.chars().count()
}

/// An ordered list of display strings that tracks its longest value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
    values: Vec<String>,
    longest: usize,
}

impl Column {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.longest = self.longest.max(display_len(&value));
        self.values.push(value);
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.longest = 0;
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Display length of the longest value (0 when empty).
    pub fn longest(&self) -> usize {
        self.longest
    }

    /// All values whose length equals [`Column::longest`].
    pub fn longest_values(&self) -> Vec<&str> {
        self.values
            .iter()
            .filter(|v| display_len(v) == self.longest)
            .map(String::as_str)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Column {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut column = Column::new();
        for value in iter {
            column.push(value);
        }
        column
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Column<{}>({:?})", self.longest, self.values)
    }
}

/// A titled column in a [`VocabTable`].
#[derive(Debug, Clone)]
struct TableColumn {
    header: &'static str,
    values: Column,
}

impl TableColumn {
    fn width(&self) -> usize {
        display_len(self.header).max(self.values.longest())
    }
}

/// Translation cell: all translations joined, plus the comment if any.
fn translation_cell(entry: &VocabEntry, language: Language) -> String {
    let mut cell = entry.translations(language).join(", ");
    if let Some(comment) = entry.comment(language) {
        cell.push_str(" (");
        cell.push_str(comment);
        cell.push(')');
    }
    cell
}

fn pad(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_len(value));
    let mut out = String::with_capacity(value.len() + fill);
    out.push_str(value);
    out.extend(std::iter::repeat(' ').take(fill));
    out
}

/// The vocabulary laid out as Word / Hiragana / Romaji / translation columns.
#[derive(Debug, Clone)]
pub struct VocabTable {
    columns: Vec<TableColumn>,
    rows: usize,
}

impl VocabTable {
    /// Build the table columns for `language` in a single pass.
    pub fn build(vocab: &VocabCollection, language: Language) -> Self {
        let mut word = Column::new();
        let mut reading = Column::new();
        let mut romanized = Column::new();
        let mut translation = Column::new();

        for entry in vocab {
            word.push(entry.word.as_str());
            reading.push(entry.reading.as_str());
            romanized.push(entry.romanized.as_str());
            translation.push(translation_cell(entry, language));
        }

        let translation_header = match language {
            Language::English => "English",
            Language::German => "German",
        };

        Self {
            columns: vec![
                TableColumn { header: "Word", values: word },
                TableColumn { header: "Hiragana", values: reading },
                TableColumn { header: "Romaji", values: romanized },
                TableColumn {
                    header: translation_header,
                    values: translation,
                },
            ],
            rows: vocab.len(),
        }
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.header).collect()
    }

    /// Field width of each column: the header or the longest value, whichever
    /// is longer.
    pub fn widths(&self) -> Vec<usize> {
        self.columns.iter().map(TableColumn::width).collect()
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    fn line<'s>(&self, cells: impl Iterator<Item = &'s str>) -> String {
        cells
            .zip(self.columns.iter())
            .map(|(cell, column)| pad(cell, column.width()))
            .collect::<Vec<_>>()
            .join(DELIMITER)
    }

    /// Render header, rule, and rows, one line each.
    pub fn render(&self) -> String {
        let header = self.line(self.columns.iter().map(|c| c.header));
        let mut out = String::new();
        out.push_str(&header);
        out.push('\n');
        out.push_str(&"-".repeat(display_len(&header)));
        out.push('\n');

        for row in 0..self.rows {
            let cells = self
                .columns
                .iter()
                .map(|c| c.values.get(row).unwrap_or_default());
            out.push_str(&self.line(cells));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for VocabTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
