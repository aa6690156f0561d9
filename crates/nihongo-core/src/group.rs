//! Free-form conjugation group answers.

use crate::model::VerbGroup;

/// Extra spellings accepted for a group besides its canonical name.
const ALIASES: [(&str, VerbGroup); 2] = [
    ("unregelmaessig", VerbGroup::Irregular),
    ("unregelmäßig", VerbGroup::Irregular),
];

/// Resolve a typed answer to a verb group.
///
/// Accepts the group number (`"2"`, also fullwidth `"２"`) or its name (`"ichidan"`), ignoring case
/// and surrounding whitespace. Returns `None` when nothing matches.
pub fn resolve_group(raw: &str) -> Option<VerbGroup> {
    let input = raw.trim().to_lowercase();

    let digits: Option<String> = input.chars().map(ascii_digit).collect();
    if let Some(digits) = digits.filter(|d| !d.is_empty()) {
        return digits
            .parse::<u8>()
            .ok()
            .and_then(|n| VerbGroup::try_from(n).ok());
    }

    VerbGroup::ALL
        .into_iter()
        .find(|group| group.name() == input)
        .or_else(|| {
            ALIASES
                .iter()
                .find(|(alias, _)| *alias == input)
                .map(|(_, group)| *group)
        })
}

/// Fold a decimal digit to ASCII. Fullwidth digits are what a Japanese IME
/// produces by default.
fn ascii_digit(c: char) -> Option<char> {
    match c {
        '0'..='9' => Some(c),
        '０'..='９' => char::from_u32(c as u32 - '０' as u32 + '0' as u32),
        _ => None,
    }
}
