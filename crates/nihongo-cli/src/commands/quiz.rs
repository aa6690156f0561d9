//! The `nihongo quiz` command.

use std::io;
use std::path::PathBuf;

use anyhow::Result;

use nihongo_core::quiz::Quiz;
use nihongo_core::traits::RandomPicker;

pub fn execute(
    vocab: Option<PathBuf>,
    lang: Option<String>,
    seed: Option<u64>,
    config: Option<PathBuf>,
) -> Result<()> {
    let (vocab, language) = super::load_session(vocab, lang, config)?;

    let picker = match seed {
        Some(seed) => RandomPicker::seeded(seed),
        None => RandomPicker::from_entropy(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut quiz = Quiz::new(&vocab, language, picker);
    quiz.run(&mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
