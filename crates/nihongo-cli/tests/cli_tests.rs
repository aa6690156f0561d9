//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn nihongo() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("nihongo").unwrap();
    cmd.env_remove("NIHONGO_LANG")
        .env_remove("NIHONGO_VOCAB")
        .env_remove("RUST_LOG");
    cmd
}

const VERBS: &str = "../../vocab/verbs.json";

/// A vocabulary whose single entry is answered by "1" in every direction.
const ONES: &str = r#"[{
    "word": "1", "hiragana": "1", "romaji": "1",
    "translation": {"en-EN": ["1"], "de-DE": ["1"]},
    "group": 1, "comment": {}
}]"#;

fn write_vocab(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("verbs.json");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn validate_bundled_vocab() {
    nihongo()
        .arg("validate")
        .arg("--vocab")
        .arg(VERBS)
        .assert()
        .success()
        .stdout(predicate::str::contains("12 entries"))
        .stdout(predicate::str::contains("godan 7, ichidan 3, irregular 2"))
        .stdout(predicate::str::contains("Vocabulary valid"));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let path = write_vocab(
        &dir,
        r#"[
  {"word": "見る", "hiragana": "みる", "romaji": "miru",
   "translation": {"en-EN": ["to see"], "de-DE": ["sehen"]}, "group": 2},
  {"word": "見る", "hiragana": "みる", "romaji": "miru",
   "translation": {"en-EN": ["to watch"], "de-DE": ["schauen"]}, "group": 2}
]"#,
    );

    nihongo()
        .arg("validate")
        .arg("--vocab")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[見る] WARNING: duplicate word"))
        .stdout(predicate::str::contains("1 warning(s) found"));
}

#[test]
fn validate_nonexistent_file() {
    nihongo()
        .arg("validate")
        .arg("--vocab")
        .arg("nonexistent.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn empty_vocab_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = write_vocab(&dir, "[]");

    nihongo()
        .arg("quiz")
        .arg("--vocab")
        .arg(&path)
        .write_stdin("q\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("vocabulary is empty"));
}

#[test]
fn table_aligns_columns() {
    nihongo()
        .arg("table")
        .arg("--vocab")
        .arg(VERBS)
        .arg("--lang")
        .arg("en-EN")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Word | Hiragana | Romaji | English"))
        .stdout(predicate::str::contains("to drink (also: to take medicine)"))
        .stdout(predicate::str::contains("食べる  | たべる      | taberu | to eat"));
}

#[test]
fn table_in_german() {
    nihongo()
        .arg("table")
        .arg("--vocab")
        .arg(VERBS)
        .arg("--lang")
        .arg("de-DE")
        .assert()
        .success()
        .stdout(predicate::str::contains("| German"))
        .stdout(predicate::str::contains("mögen, bevorzugen"));
}

#[test]
fn quiz_quit_immediately() {
    nihongo()
        .arg("quiz")
        .arg("--vocab")
        .arg(VERBS)
        .arg("--lang")
        .arg("de-DE")
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Japanisch-Vokabeltrainer"))
        .stdout(predicate::str::contains("0 von 0"));
}

#[test]
fn quiz_scores_answers() {
    let dir = TempDir::new().unwrap();
    let path = write_vocab(&dir, ONES);

    nihongo()
        .arg("quiz")
        .arg("--vocab")
        .arg(&path)
        .arg("--lang")
        .arg("en-EN")
        .write_stdin("1\n1\n1\nQ\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 of 3 answered correctly"));
}

#[test]
fn quiz_ends_at_end_of_input() {
    let dir = TempDir::new().unwrap();
    let path = write_vocab(&dir, ONES);

    nihongo()
        .arg("quiz")
        .arg("--vocab")
        .arg(&path)
        .write_stdin("1\nnope\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 von 2"));
}

#[test]
fn quiz_logs_are_quiet_by_default() {
    nihongo()
        .arg("quiz")
        .arg("--vocab")
        .arg(VERBS)
        .arg("--seed")
        .arg("1")
        .write_stdin("x\nq\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("quiz round").not());
}

#[test]
fn rust_log_enables_round_tracing() {
    nihongo()
        .env("RUST_LOG", "nihongo_core=debug")
        .arg("quiz")
        .arg("--vocab")
        .arg(VERBS)
        .arg("--seed")
        .arg("1")
        .write_stdin("x\nq\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("quiz round"));
}

#[test]
fn quiz_seed_is_reproducible() {
    let run = || {
        nihongo()
            .arg("quiz")
            .arg("--vocab")
            .arg(VERBS)
            .arg("--seed")
            .arg("7")
            .write_stdin("x\nx\nx\nx\nq\n")
            .output()
            .unwrap()
            .stdout
    };
    let first = run();
    assert!(!first.is_empty());
    assert_eq!(first, run());
}

#[test]
fn quiz_uses_config_file() {
    let dir = TempDir::new().unwrap();
    let vocab = write_vocab(&dir, ONES);
    let config = dir.path().join("nihongo.toml");
    std::fs::write(
        &config,
        format!(
            "language = \"en-EN\"\nvocab_path = {:?}\n",
            vocab.to_string_lossy()
        ),
    )
    .unwrap();

    nihongo()
        .arg("quiz")
        .arg("--config")
        .arg(&config)
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Language: English"))
        .stdout(predicate::str::contains("0 of 0"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    nihongo()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created nihongo.toml"))
        .stdout(predicate::str::contains("Created vocab/verbs.json"));

    assert!(dir.path().join("nihongo.toml").exists());
    assert!(dir.path().join("vocab/verbs.json").exists());

    // The starter files work with the default lookup
    nihongo()
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 entries"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    // First init
    nihongo()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    // Second init should skip
    nihongo()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    nihongo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Japanese verb vocabulary trainer"));
}

#[test]
fn version_output() {
    nihongo()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("nihongo"));
}
