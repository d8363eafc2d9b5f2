use assert_cmd::Command;
use predicates::prelude::*;

fn curio(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("curio").unwrap();
    cmd.arg("--data-dir").arg(data_dir);
    cmd
}

#[test]
fn list_shows_seed_content_on_first_run() {
    let temp_dir = tempfile::tempdir().unwrap();

    curio(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Pinecraft"))
        .stdout(predicates::str::contains("P4wnP1"))
        .stdout(predicates::str::contains("SunFounder"))
        .stdout(predicates::str::contains("4 affiliates, 2 projects, 3 software entries"));
}

#[test]
fn affiliate_add_then_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    curio(temp_dir.path())
        .arg("affiliate")
        .arg("--name")
        .arg("Test Shop")
        .arg("--description")
        .arg("A shop for testing")
        .arg("--link")
        .arg("https://example.com")
        .assert()
        .success()
        .stdout(predicates::str::contains("Affiliate added!"));

    curio(temp_dir.path())
        .arg("list")
        .arg("affiliates")
        .assert()
        .success()
        .stdout(predicates::str::contains("Test Shop"))
        .stdout(predicates::str::contains("5 affiliates"));
}

#[test]
fn delete_requires_confirmation_and_yes_skips_it() {
    let temp_dir = tempfile::tempdir().unwrap();

    // "n" answer leaves the catalog untouched.
    curio(temp_dir.path())
        .arg("delete")
        .arg("affiliate")
        .arg("static-affiliate-1")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Cancelled."));

    curio(temp_dir.path())
        .arg("--yes")
        .arg("delete")
        .arg("affiliate")
        .arg("static-affiliate-1")
        .assert()
        .success()
        .stdout(predicates::str::contains("Affiliate deleted!"));

    curio(temp_dir.path())
        .arg("list")
        .arg("affiliates")
        .assert()
        .success()
        .stdout(predicates::str::contains("3 affiliates"));
}

#[test]
fn export_writes_site_data_snapshot() {
    let temp_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();

    curio(temp_dir.path())
        .arg("export")
        .arg("--out")
        .arg(out_dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("site-data.json"));

    let snapshot = out_dir.path().join("site-data.json");
    let raw = std::fs::read_to_string(&snapshot).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(value["lastUpdated"].is_i64());
    assert_eq!(value["projects"].as_array().unwrap().len(), 2);
}

#[test]
fn import_rejects_partial_snapshot() {
    let temp_dir = tempfile::tempdir().unwrap();
    let bad = temp_dir.path().join("partial.json");
    std::fs::write(&bad, r#"{"projects": []}"#).unwrap();

    curio(temp_dir.path())
        .arg("import")
        .arg(&bad)
        .assert()
        .success()
        .stdout(predicates::str::contains("Import failed"));

    // Store is untouched: the seed catalog is still there.
    curio(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("2 projects"));
}

#[test]
fn search_finds_seeded_project() {
    let temp_dir = tempfile::tempdir().unwrap();

    curio(temp_dir.path())
        .arg("search")
        .arg("minecraft")
        .assert()
        .success()
        .stdout(predicates::str::contains("Pinecraft"));
}

#[test]
fn render_emits_section_markup() {
    let temp_dir = tempfile::tempdir().unwrap();

    curio(temp_dir.path())
        .arg("render")
        .arg("static-project-1")
        .assert()
        .success()
        .stdout(predicates::str::contains("docs-section"))
        .stdout(predicates::str::contains("Server Control Commands"))
        .stdout(predicates::str::contains("copyCode(this)"));
}

#[test]
fn clear_requires_two_confirmations() {
    let temp_dir = tempfile::tempdir().unwrap();

    // First yes, second no: nothing happens.
    curio(temp_dir.path())
        .arg("clear")
        .write_stdin("y\nn\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Cancelled."));

    curio(temp_dir.path())
        .arg("clear")
        .write_stdin("y\ny\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("All data cleared."));
}

#[test]
fn admin_gate_blocks_wrong_password() {
    let temp_dir = tempfile::tempdir().unwrap();
    // SHA-256 of "letmein".
    let hash = "1c8bfe8f801d79745c4631d09fff36c82aa37fc4cce4fc946683d7b336b63032";

    let mut cmd = Command::cargo_bin("curio").unwrap();
    cmd.arg("--data-dir")
        .arg(temp_dir.path())
        .env("CURIO_ADMIN_PASSWORD_HASH", hash)
        .arg("--yes")
        .arg("reset")
        .write_stdin("wrong\n")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Invalid password"));

    let mut cmd = Command::cargo_bin("curio").unwrap();
    cmd.arg("--data-dir")
        .arg(temp_dir.path())
        .env("CURIO_ADMIN_PASSWORD_HASH", hash)
        .arg("--yes")
        .arg("reset")
        .write_stdin("letmein\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Catalog reset to default content."));
}
