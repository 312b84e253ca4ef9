//! End-to-end tests for the invgen binary.

use assert_cmd::Command;
use chrono::NaiveDate;
use predicates::str::contains;

use invgen_core::{InvoiceFields, InvoiceStyle, render_invoice};

fn invgen() -> Command {
    Command::cargo_bin("invgen").unwrap()
}

/// A born-digital invoice PDF, for tests that need embedded text.
fn fixture_pdf() -> Vec<u8> {
    let fields = InvoiceFields {
        entity: "Acme Corp".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        amount: "1,234.56".to_string(),
        description: "consulting services for the January engagement".to_string(),
    };
    render_invoice(&fields, InvoiceStyle::Simple).unwrap().data
}

#[test]
fn help_lists_subcommands() {
    invgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("generate"))
        .stdout(contains("extract"))
        .stdout(contains("batch"))
        .stdout(contains("config"));
}

#[test]
fn missing_input_is_an_error() {
    invgen()
        .args(["generate", "no-such-file.png"])
        .assert()
        .failure()
        .stderr(contains("Input file not found"));
}

#[test]
fn unsupported_extension_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scan.tiff");
    std::fs::write(&path, b"irrelevant").unwrap();

    invgen()
        .arg("generate")
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("Unsupported file format"));
}

#[test]
fn config_init_then_show() {
    let dir = tempfile::tempdir().unwrap();

    invgen()
        .current_dir(dir.path())
        .args(["config", "init"])
        .assert()
        .success();
    assert!(dir.path().join("invgen.json").exists());

    invgen()
        .current_dir(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(contains("prefer_embedded_text"));

    // A second init must not clobber the file without --force.
    invgen()
        .current_dir(dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn generate_uses_the_suggested_filename() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("scan.pdf"), fixture_pdf()).unwrap();

    invgen()
        .current_dir(dir.path())
        .args([
            "generate",
            "scan.pdf",
            "--text-only",
            "--style",
            "minimal",
            "--entity",
            "Beta LLC",
            "--date",
            "2024-03-04",
        ])
        .assert()
        .success();

    let data = std::fs::read(dir.path().join("Beta_LLC_04_03_2024.pdf")).unwrap();
    assert!(data.starts_with(b"%PDF-"));
}

#[test]
fn extract_reads_fields_from_embedded_text() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("scan.pdf"), fixture_pdf()).unwrap();

    invgen()
        .current_dir(dir.path())
        .args(["extract", "scan.pdf", "--text-only", "--format", "json"])
        .assert()
        .success()
        .stdout(contains("Acme Corp"))
        .stdout(contains("1,234.56"))
        .stdout(contains("consulting services"));
}
