use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn toolboard(root: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("toolboard").unwrap();
    cmd.arg("--root").arg(root.path());
    cmd
}

fn write_status_doc(root: &TempDir) {
    std::fs::write(
        root.path().join("MCP_TOOL_TESTING_STATUS.md"),
        "\
| Tool | Status | Issues | Priority |
|------|--------|--------|----------|
| list_cleanrooms | ✅ Verified | None | - |
| create_aws_s3_connection | 🟡 Partial | Needs retry | High |
",
    )
    .unwrap();
}

#[test]
fn summary_on_empty_project() {
    let dir = TempDir::new().unwrap();
    toolboard(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tools verified: 0/45"));
}

#[test]
fn summary_json_counts_parsed_tools() {
    let dir = TempDir::new().unwrap();
    write_status_doc(&dir);
    let output = toolboard(&dir)
        .args(["summary", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["counts"]["verified"], 1);
    assert_eq!(json["counts"]["partial"], 1);
    assert_eq!(json["counts"]["total"], 45);
}

#[test]
fn tools_filters_by_status() {
    let dir = TempDir::new().unwrap();
    write_status_doc(&dir);
    toolboard(&dir)
        .args(["tools", "--status", "verified"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list_cleanrooms"))
        .stdout(predicate::str::contains("create_aws_s3_connection").not());
}

#[test]
fn tools_rejects_bad_status() {
    let dir = TempDir::new().unwrap();
    toolboard(&dir)
        .args(["tools", "--status", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid status category"));
}

#[test]
fn show_unknown_tool_fails() {
    let dir = TempDir::new().unwrap();
    toolboard(&dir)
        .args(["show", "no_such_tool"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tool not found"));
}

#[test]
fn show_known_tool() {
    let dir = TempDir::new().unwrap();
    write_status_doc(&dir);
    toolboard(&dir)
        .args(["show", "list_cleanrooms"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Foundation Tools"))
        .stdout(predicate::str::contains("✅ Verified"));
}

#[test]
fn catalog_lists_all_tools() {
    let dir = TempDir::new().unwrap();
    toolboard(&dir)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("45 tools across 8 categories"));
}
