//! The `nihongo table` command.

use std::path::PathBuf;

use anyhow::Result;

use nihongo_core::table::VocabTable;

pub fn execute(vocab: Option<PathBuf>, lang: Option<String>, config: Option<PathBuf>) -> Result<()> {
    let (vocab, language) = super::load_session(vocab, lang, config)?;

    print!("{}", VocabTable::build(&vocab, language));

    Ok(())
}
