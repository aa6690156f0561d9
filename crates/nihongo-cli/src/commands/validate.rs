//! The `nihongo validate` command.

use std::path::PathBuf;

use anyhow::Result;

use nihongo_core::model::VerbGroup;
use nihongo_core::parser::validate_vocab;

pub fn execute(vocab: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let (vocab, _) = super::load_session(vocab, None, config)?;

    let counts = VerbGroup::ALL.map(|group| vocab.iter().filter(|e| e.group == group).count());
    println!(
        "Vocabulary: {} entries (godan {}, ichidan {}, irregular {})",
        vocab.len(),
        counts[0],
        counts[1],
        counts[2]
    );

    let warnings = validate_vocab(&vocab);
    for w in &warnings {
        let prefix = w
            .word
            .as_ref()
            .map(|word| format!("  [{word}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Vocabulary valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
