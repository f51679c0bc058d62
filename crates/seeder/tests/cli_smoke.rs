use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn quiz_bank_file() -> NamedTempFile {
    let mut tmp = NamedTempFile::new().expect("temp file");
    write!(
        tmp,
        r#"{{"quizzes": [{{"topic": "Flutter", "questions": [
            {{"question": "What language?", "options": ["Kotlin", "Dart"], "answer_index": 1}}
        ]}}]}}"#
    )
    .expect("write quiz bank");
    tmp
}

#[test]
fn help_works() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("firedoc-seeder"))
        .arg("--help")
        .assert()
        .success();
    Ok(())
}

#[test]
fn dry_run_prints_tagged_documents_without_writing() -> Result<(), Box<dyn std::error::Error>> {
    let bank = quiz_bank_file();

    let output = Command::new(assert_cmd::cargo::cargo_bin!("firedoc-seeder"))
        .arg("--dry-run")
        .arg("--quizzes")
        .arg(bank.path())
        .output()?;
    assert!(output.status.success());
    let out = String::from_utf8(output.stdout)?;

    assert!(out.contains("courses/flutter_basics:"));
    assert!(out.contains("lessons/flutter_intro:"));
    assert!(out.contains("quizzes/flutter_quiz:"));
    // Wire envelope shapes, not raw scalars.
    assert!(out.contains("\"integerValue\": \"480\""));
    assert!(out.contains("\"booleanValue\": true"));
    assert!(out.contains("\"timestampValue\""));
    assert!(out.contains("Dry run complete"));
    Ok(())
}

#[test]
fn missing_quiz_bank_terminates_the_run() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("firedoc-seeder"))
        .arg("--dry-run")
        .arg("--quizzes")
        .arg("does-not-exist.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("quiz bank"));
    Ok(())
}
