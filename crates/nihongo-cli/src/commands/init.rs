//! The `nihongo init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create nihongo.toml
    if std::path::Path::new("nihongo.toml").exists() {
        println!("nihongo.toml already exists, skipping.");
    } else {
        std::fs::write("nihongo.toml", SAMPLE_CONFIG)?;
        println!("Created nihongo.toml");
    }

    // Create starter vocabulary
    std::fs::create_dir_all("vocab")?;
    let vocab_path = std::path::Path::new("vocab/verbs.json");
    if vocab_path.exists() {
        println!("vocab/verbs.json already exists, skipping.");
    } else {
        std::fs::write(vocab_path, STARTER_VOCAB)?;
        println!("Created vocab/verbs.json");
    }

    println!("\nNext steps:");
    println!("  1. Add your own verbs to vocab/verbs.json");
    println!("  2. Run: nihongo validate");
    println!("  3. Run: nihongo quiz");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# nihongo configuration

# "de-DE" for German, anything else for English
language = "de-DE"
vocab_path = "vocab/verbs.json"
"#;

const STARTER_VOCAB: &str = r#"[
  {
    "word": "食べる",
    "hiragana": "たべる",
    "romaji": "taberu",
    "translation": { "en-EN": ["to eat"], "de-DE": ["essen"] },
    "group": 2,
    "comment": {}
  },
  {
    "word": "書く",
    "hiragana": "かく",
    "romaji": "kaku",
    "translation": { "en-EN": ["to write"], "de-DE": ["schreiben"] },
    "group": 1,
    "comment": {}
  },
  {
    "word": "する",
    "hiragana": "する",
    "romaji": "suru",
    "translation": { "en-EN": ["to do", "to make"], "de-DE": ["tun", "machen"] },
    "group": 3,
    "comment": {}
  }
]
"#;
