//! Umlaut-tolerant answer matching.

use std::collections::HashSet;

/// Umlaut → digraph replacements, applied in order.
const UMLAUTS: [(char, &str); 6] = [
    ('ä', "ae"),
    ('ö', "oe"),
    ('ü', "ue"),
    ('Ä', "Ae"),
    ('Ö', "Oe"),
    ('Ü', "Ue"),
];

/// Replace every umlaut with its two-letter digraph (`ä` → `ae`, `Ü` → `Ue`).
pub fn normalize_umlauts(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    for c in text.chars() {
        match UMLAUTS.iter().find(|(umlaut, _)| *umlaut == c) {
            Some((_, digraph)) => out.push_str(digraph),
            None => out.push(c),
        }
    }
    out
}

/// Build the set of accepted answers for a list of translations.
///
/// Every translation is lower-cased; translations containing umlauts are
/// additionally accepted in digraph spelling. The reverse does not hold: a
/// stored `moegen` does not make `mögen` correct.
pub fn expand_accepted<S: AsRef<str>>(answers: &[S]) -> HashSet<String> {
    let mut accepted = HashSet::with_capacity(answers.len() * 2);
    for answer in answers {
        let lower = answer.as_ref().to_lowercase();
        let normalized = normalize_umlauts(&lower);
        if normalized != lower {
            accepted.insert(normalized);
        }
        accepted.insert(lower);
    }
    accepted
}
