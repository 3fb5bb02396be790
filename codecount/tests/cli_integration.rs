//! Integration tests for the codecount CLI

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

fn run_codecount(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_codecount"))
        .args(args)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn write_file(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// src/app.py: 3 lines, web/main.js: 2 lines, notes.txt: not counted
fn sample_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "src/app.py",
        b"import os\n\n# entry point\nprint(os.getcwd())\nos.sep\n",
    );
    write_file(
        dir.path(),
        "web/main.js",
        b"// bootstrap\nlet x = 1;\n\n/* done */\nlet y = 2;\n",
    );
    write_file(dir.path(), "notes.txt", b"plain text\nmore text\n");
    dir
}

fn folder_arg(dir: &TempDir) -> String {
    dir.path().to_string_lossy().to_string()
}

fn line_with<'a>(stdout: &'a str, needle: &str) -> &'a str {
    stdout
        .lines()
        .find(|l| l.contains(needle))
        .unwrap_or_else(|| panic!("no line containing {needle:?} in:\n{stdout}"))
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_codecount(&["--help"]);

    assert!(success);
    assert!(stdout.contains("codecount"));
    for flag in [
        "--query",
        "--folder",
        "--showfileinfo",
        "--showsummary",
        "--shortfilenames",
        "--languages",
        "--exclude",
        "--output",
        "--strict",
    ] {
        assert!(stdout.contains(flag), "help is missing {flag}");
    }
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_codecount(&["--version"]);

    assert!(success);
    assert!(stdout.contains("codecount"));
}

#[test]
fn test_default_summary() {
    let dir = sample_tree();
    let folder = folder_arg(&dir);
    let (stdout, stderr, success) = run_codecount(&["--folder", &folder]);

    assert!(success);
    assert!(stderr.contains("No query specified, counting all files..."));
    assert!(stderr.contains("Found 2 files..."));

    assert!(stdout.contains("Language / File Type"));
    assert!(stdout.contains("Percentage of total"));
    assert!(!stdout.contains("File Name"));

    let python = line_with(&stdout, "Python");
    assert!(python.contains(" 3 "));
    assert!(python.contains("60%"));
    let javascript = line_with(&stdout, "JavaScript");
    assert!(javascript.contains("40%"));

    // Larger category first
    assert!(stdout.find("Python").unwrap() < stdout.find("JavaScript").unwrap());
    assert!(stdout.contains("Total Lines of code: 5"));
}

#[test]
fn test_query_single_extension() {
    let dir = sample_tree();
    let folder = folder_arg(&dir);
    let (stdout, stderr, success) = run_codecount(&["--folder", &folder, "--query", ".py"]);

    assert!(success);
    assert!(stderr.contains("Query: .py"));
    assert!(stderr.contains("Found 1 files..."));

    let python = line_with(&stdout, "Python");
    assert!(python.contains("100%"));
    assert!(!stdout.contains("JavaScript"));
    assert!(stdout.contains("Total Lines of code: 3"));
}

#[test]
fn test_query_unknown_extension_uses_raw_extension() {
    let dir = sample_tree();
    let folder = folder_arg(&dir);
    let (stdout, _, success) = run_codecount(&["--folder", &folder, "--query", "txt"]);

    assert!(success);
    let row = line_with(&stdout, "txt");
    assert!(row.contains("100%"));
    assert!(stdout.contains("Total Lines of code: 2"));
}

#[test]
fn test_show_file_info() {
    let dir = sample_tree();
    let folder = folder_arg(&dir);
    let (stdout, _, success) = run_codecount(&[
        "--folder",
        &folder,
        "--showfileinfo",
        "--showsummary",
        "false",
    ]);

    assert!(success);
    assert!(stdout.contains("File Name"));
    assert!(stdout.contains("Lines of Code"));
    assert!(stdout.contains("File Type"));
    assert!(!stdout.contains("Language / File Type"));

    let app = line_with(&stdout, "app.py");
    assert!(app.contains(&format!("src{}app.py", std::path::MAIN_SEPARATOR)));
    assert!(app.contains("Python"));
    assert!(stdout.contains("Total Lines of code: 5"));
}

#[test]
fn test_short_file_names() {
    let dir = sample_tree();
    let folder = folder_arg(&dir);
    let (stdout, _, success) = run_codecount(&[
        "--folder",
        &folder,
        "--showfileinfo",
        "true",
        "--shortfilenames",
    ]);

    assert!(success);
    let app = line_with(&stdout, "app.py");
    assert!(app.starts_with("app.py"));
    assert!(!stdout.contains("src/app.py"));
    // Summary is still on by default
    assert!(stdout.contains("Language / File Type"));
}

#[test]
fn test_no_tables_still_prints_total() {
    let dir = sample_tree();
    let folder = folder_arg(&dir);
    let (stdout, _, success) = run_codecount(&["--folder", &folder, "--showsummary", "false"]);

    assert!(success);
    assert_eq!(stdout.trim(), "Total Lines of code: 5");
}

#[test]
fn test_exclude_pattern() {
    let dir = sample_tree();
    let folder = folder_arg(&dir);
    let (stdout, stderr, success) =
        run_codecount(&["--folder", &folder, "--exclude", "*/web/*"]);

    assert!(success);
    assert!(stderr.contains("Found 1 files..."));
    assert!(!stdout.contains("JavaScript"));
    assert!(stdout.contains("Total Lines of code: 3"));
}

#[test]
fn test_json_output() {
    let dir = sample_tree();
    let folder = folder_arg(&dir);
    let (stdout, _, success) =
        run_codecount(&["--folder", &folder, "--output", "json", "--showfileinfo"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");

    assert_eq!(parsed["total"], 5);
    assert_eq!(parsed["file_count"], 2);
    assert_eq!(parsed["summary"]["rows"][0]["label"], "Python");
    assert_eq!(parsed["summary"]["rows"][0]["values"][1], "60%");
    assert_eq!(parsed["files"]["headers"][0], "File Name");
    assert!(parsed["diagnostics"].as_array().unwrap().is_empty());
}

#[test]
fn test_custom_languages_file() {
    let dir = sample_tree();
    let langs = TempDir::new().unwrap();
    let langs_path = langs.path().join("langs.json");
    fs::write(
        &langs_path,
        r#"[{"name": "Notes", "extensions": [".txt"]}, {"Name": "Empty", "Extensions": []}]"#,
    )
    .unwrap();

    let folder = folder_arg(&dir);
    let langs_arg = langs_path.to_string_lossy().to_string();
    let (stdout, stderr, success) =
        run_codecount(&["--folder", &folder, "--languages", &langs_arg]);

    assert!(success);
    assert!(stderr.contains("Found 1 files..."));
    assert!(line_with(&stdout, "Notes").contains("100%"));
    assert!(!stdout.contains("Python"));
}

#[test]
fn test_invalid_languages_file_is_fatal() {
    let dir = sample_tree();
    let langs = TempDir::new().unwrap();
    let langs_path = langs.path().join("langs.json");
    fs::write(&langs_path, "{ not json").unwrap();

    let folder = folder_arg(&dir);
    let langs_arg = langs_path.to_string_lossy().to_string();
    let (stdout, stderr, success) =
        run_codecount(&["--folder", &folder, "--languages", &langs_arg]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(!stderr.contains("Found"));
    assert!(stdout.is_empty());
}

#[test]
fn test_invalid_path() {
    let (_, stderr, success) = run_codecount(&["--folder", "/nonexistent/path"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
}

#[test]
fn test_invalid_exclude_glob() {
    let dir = sample_tree();
    let folder = folder_arg(&dir);
    let (_, stderr, success) = run_codecount(&["--folder", &folder, "--exclude", "[oops"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
}

#[test]
fn test_unreadable_file_is_a_warning() {
    let dir = sample_tree();
    write_file(dir.path(), "broken.py", b"ok = 1\n\xff\xfe\n");
    let folder = folder_arg(&dir);

    let (stdout, stderr, success) = run_codecount(&["--folder", &folder]);

    assert!(success);
    assert!(stderr.contains("warning:"));
    assert!(stderr.contains("broken.py"));
    assert!(stdout.contains("Total Lines of code:"));
}

#[test]
fn test_strict_fails_on_diagnostics() {
    let dir = sample_tree();
    write_file(dir.path(), "broken.py", b"ok = 1\n\xff\xfe\n");
    let folder = folder_arg(&dir);

    let (stdout, stderr, success) = run_codecount(&["--folder", &folder, "--strict"]);

    assert!(!success);
    assert!(stderr.contains("warning:"));
    // The report is still printed
    assert!(stdout.contains("Total Lines of code:"));
}

#[test]
fn test_strict_succeeds_without_diagnostics() {
    let dir = sample_tree();
    let folder = folder_arg(&dir);
    let (_, _, success) = run_codecount(&["--folder", &folder, "--strict"]);

    assert!(success);
}

#[cfg(unix)]
#[test]
fn test_json_output_with_non_utf8_file_name() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = sample_tree();
    let name = OsStr::from_bytes(b"bad\xff.py");
    fs::write(dir.path().join(name), b"ok = 1\n\xff\xfe\n").unwrap();
    let folder = folder_arg(&dir);

    let (stdout, stderr, success) = run_codecount(&["--folder", &folder, "--output", "json"]);

    assert!(success, "stderr: {stderr}");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    let diagnostics = parsed["diagnostics"].as_array().unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0]["kind"], "file_read");
    assert!(diagnostics[0]["path"]
        .as_str()
        .unwrap()
        .ends_with("bad\u{fffd}.py"));
    assert_eq!(parsed["total"], 6);
}
