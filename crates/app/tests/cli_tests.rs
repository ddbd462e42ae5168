//! CLI integration tests using assert_cmd.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CUSTOM: &str = r#"
[meta]
title = "Tariffs in Brief"

[[sections]]
id = "basics"
title = "Basics"

[[sections]]
id = "cases"
title = "Case Studies"

[[questions]]
prompt = "A tariff is a tax on..."
options = ["imports", "income"]
correct = 0
"#;

fn playbook() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("playbook").unwrap();
    cmd.env_remove("PLAYBOOK_CONTENT");
    cmd
}

fn write_content(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn outline_lists_bundled_sections() {
    playbook()
        .arg("outline")
        .assert()
        .success()
        .stdout(predicate::str::contains("Why Trade? The Global Economic Engine"))
        .stdout(predicate::str::contains("> 1. Introduction [introduction]"))
        .stdout(predicate::str::contains("7. Downloads [downloads]"));
}

#[test]
fn track_follows_scroll_offsets() {
    playbook()
        .args(["track", "0", "1500", "-100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0\tintroduction\t1/7"))
        .stdout(predicate::str::contains("1500\tcore-concepts\t2/7"))
        .stdout(predicate::str::contains("-100\tcore-concepts\t2/7"));
}

#[test]
fn track_reads_layout_file() {
    let dir = TempDir::new().unwrap();
    let layout = write_content(
        &dir,
        "layout.toml",
        r#"
[[boundaries]]
id = "introduction"
top = 0.0
height = 500.0

[[boundaries]]
id = "downloads"
top = 500.0
height = 500.0

[[boundaries]]
id = "sidebar"
top = 0.0
height = 9000.0
"#,
    );

    playbook()
        .arg("track")
        .arg("--layout")
        .arg(&layout)
        .args(["450", "5000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("450\tdownloads\t7/7"))
        .stdout(predicate::str::contains("5000\tdownloads\t7/7"));
}

#[test]
fn scripted_quiz_prints_results() {
    playbook()
        .args(["quiz", "--answers", "2,3,2,1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiz Results: 3/4 (Excellent)"))
        .stdout(predicate::str::contains(
            "Correct answer: Selling goods below cost in foreign markets",
        ));
}

#[test]
fn scripted_quiz_exports_json() {
    playbook()
        .args(["quiz", "--answers", "2,3,2,2", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"score\": 4"))
        .stdout(predicate::str::contains("\"band\": \"Excellent\""));
}

#[test]
fn scripted_quiz_rejects_bad_answers() {
    playbook()
        .args(["quiz", "--answers", "2,3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 4 answers, got 2"));

    playbook()
        .args(["quiz", "--answers", "2,3,7,1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("answer 3"));

    playbook()
        .args(["quiz", "--answers", "0,3,2,1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("option numbers start at 1"));
}

#[test]
fn interactive_quiz_reads_stdin() {
    playbook()
        .arg("quiz")
        .write_stdin("n\n1\nn\n1\nn\n1\nn\n1\nn\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 1 of 4"))
        .stdout(predicate::str::contains("Select an answer first."))
        .stdout(predicate::str::contains("Quiz Results: 0/4 (Needs Improvement)"));
}

#[test]
fn glossary_lookup_and_search() {
    playbook()
        .args(["glossary", "dumping"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dumping:"));

    playbook()
        .args(["glossary", "currency"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exchange Rate:"));

    playbook()
        .args(["glossary", "--letter", "b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance of Trade:"))
        .stdout(predicate::str::contains("Bill of Lading:"));

    playbook()
        .args(["glossary", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No glossary entries match"));
}

#[test]
fn downloads_show_file_names() {
    playbook()
        .arg("downloads")
        .assert()
        .success()
        .stdout(predicate::str::contains("-> complete-playbook-pdf.pdf"));
}

#[test]
fn validate_accepts_good_content() {
    let dir = TempDir::new().unwrap();
    let path = write_content(&dir, "custom.toml", CUSTOM);

    playbook()
        .arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Tariffs in Brief: 2 sections, 1 questions, 0 glossary terms, 0 downloads",
        ))
        .stdout(predicate::str::contains("Content is valid."));
}

#[test]
fn validate_rejects_bad_content() {
    let dir = TempDir::new().unwrap();
    let path = write_content(&dir, "broken.toml", &CUSTOM.replace("correct = 0", "correct = 4"));

    playbook()
        .arg("validate")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error:"));

    playbook()
        .args(["validate", "nonexistent.toml"])
        .assert()
        .code(2);
}

#[test]
fn custom_content_replaces_bundled_playbook() {
    let dir = TempDir::new().unwrap();
    let path = write_content(&dir, "custom.toml", CUSTOM);

    playbook()
        .arg("--content")
        .arg(&path)
        .arg("outline")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tariffs in Brief"))
        .stdout(predicate::str::contains("2. Case Studies [cases]"));

    playbook()
        .env("PLAYBOOK_CONTENT", &path)
        .args(["quiz", "--answers", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiz Results: 1/1 (Needs Improvement)"));
}
