//! Integration tests for gomap
//!
//! These tests run the built binary against fixture modules on disk.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn gomap(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gomap"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute gomap")
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn create_module() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "go.mod", "module github.com/acme/notes\n");
    write(
        root,
        "main.go",
        "package main\n\nimport (\n\t\"os\"\n\n\t\"github.com/acme/notes/store\"\n)\n\nfunc main() {\n\tstore.Open(os.Args[1])\n}\n",
    );
    write(
        root,
        "store/store.go",
        "package store\n\n// Note is one entry.\ntype Note struct {\n\tTitle string\n}\n\ntype Reader interface {\n\tRead(id int) (*Note, error)\n}\n\nconst Version = 2\n\nfunc Open(path string) error { return nil }\n",
    );
    write(root, "store/store_test.go", "package store\n\nfunc helper() {}\n");
    temp_dir
}

/// Test that the CLI can be invoked
#[test]
fn test_cli_invocation() {
    let output = gomap(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("dag"));
    assert!(stdout.contains("loc"));
}

#[test]
fn test_loc_without_arguments() {
    let output = gomap(&["loc"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "0 arguments given\n");
}

#[test]
fn test_dag_text_report() {
    let repo = create_module();
    let output = gomap(&["dag", "--root", repo.path().to_str().unwrap()]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    insta::assert_snapshot!(stdout, @r"
Package: github.com/acme/notes
  Imports:
    store
  Functions:
    func main()
----------------------------------------
Package: store
  Types:
    type Reader interface
    type Note struct
  Functions:
    func Open(path string) error
----------------------------------------
");
}

#[test]
fn test_dag_json_report() {
    let repo = create_module();
    let output = gomap(&["dag", "-r", repo.path().to_str().unwrap(), "--format", "json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["store"]["path"], "store");
    assert_eq!(value["github.com/acme/notes"]["imports"][0], "store");
}

#[test]
fn test_dag_without_go_mod_fails() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "main.go", "package main\n");

    let output = gomap(&["dag", "--root", temp_dir.path().to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("go.mod"));
}

#[test]
fn test_dag_missing_root_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope");
    let output = gomap(&["dag", "--root", missing.to_str().unwrap()]);
    assert!(!output.status.success());
}

#[test]
fn test_loc_directory_table() {
    let repo = create_module();
    let output = gomap(&["loc", repo.path().to_str().unwrap(), "--ignore-tests"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Path"));
    assert!(lines[1].starts_with("main.go"));
    assert!(lines[2].starts_with("store/store.go"));
    assert!(lines[3].starts_with("Total"));
    assert!(!stdout.contains("store_test.go"));
}

#[test]
fn test_loc_single_file() {
    let repo = create_module();
    let file = repo.path().join("store").join("store.go");
    let output = gomap(&["loc", file.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "9 lines of code\n");
}

#[test]
fn test_loc_rejects_non_go_file() {
    let repo = create_module();
    let file = repo.path().join("go.mod");
    let output = gomap(&["loc", file.to_str().unwrap()]);
    assert!(!output.status.success());
}

#[test]
fn test_loc_ignore_dirs_accepts_comma_list() {
    let repo = create_module();
    write(repo.path(), "gen/gen.go", "package gen\n\nvar Out = 1\n");
    write(repo.path(), "tools/tools.go", "package tools\n\nfunc Run() {}\n");
    let root = repo.path().to_str().unwrap();

    let output = gomap(&["loc", root, "--ignore-tests", "--ignore-dirs", "gen,tools"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("gen/gen.go"));
    assert!(!stdout.contains("tools/tools.go"));
    assert_eq!(stdout.lines().count(), 4);

    let output = gomap(&["loc", root, "--ignore-tests", "--ignore-dirs", "gen"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("gen/gen.go"));
    assert!(stdout.contains("tools/tools.go"));
}

#[test]
fn test_loc_directory_json() {
    let repo = create_module();
    let output = gomap(&[
        "loc",
        repo.path().to_str().unwrap(),
        "--ignore-tests",
        "--format",
        "json",
    ]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["files"][0]["path"], "main.go");
    assert_eq!(value["files"][0]["lines"], 8);
    assert_eq!(value["files"][1]["path"], "store/store.go");
    assert_eq!(value["files"][1]["lines"], 9);
    assert_eq!(value["files"][1]["consts"], 1);
    assert_eq!(value["total"]["lines"], 17);
    assert_eq!(value["total"]["types"], 2);
    assert_eq!(value["total"]["funcs"], 2);
}

#[test]
fn test_loc_single_file_json() {
    let repo = create_module();
    let file = repo.path().join("store").join("store.go");
    let output = gomap(&["loc", file.to_str().unwrap(), "--format", "json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["lines"], 9);
    assert_eq!(value["path"], file.to_str().unwrap());
}
