/// End-to-end tests for the CLI
///
/// Remote cases only exercise rejections that happen before any request is
/// sent, so the suite runs without network access.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const GRAPH: &str = "tests/fixtures/graph.txt";
const SERVICES: &str = "tests/fixtures/services.txt";

fn local_args<'a>(package: &'a str, path: &'a str) -> Vec<&'a str> {
    vec![
        "--package-name",
        package,
        "--package-version",
        "1.0",
        "--test-repo-mode",
        "local",
        "--repository-url",
        path,
    ]
}

mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("depgraph")
            .arg("--help")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("--package-name"))
            .stdout(predicate::str::contains("--reverse-mode"));
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("depgraph").arg("--version").assert().code(0);
    }

    /// Exit code 2: Unknown option
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("depgraph")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Required options missing
    #[test]
    fn test_exit_code_missing_required() {
        cargo_bin_cmd!("depgraph")
            .args(["--package-name", "A"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid repository mode
    #[test]
    fn test_exit_code_invalid_mode() {
        cargo_bin_cmd!("depgraph")
            .args([
                "--package-name",
                "A",
                "--package-version",
                "1.0",
                "--test-repo-mode",
                "ftp",
            ])
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("depgraph")
            .args(local_args("A", GRAPH))
            .args(["--format", "xml"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Version without any digit
    #[test]
    fn test_exit_code_version_without_digit() {
        cargo_bin_cmd!("depgraph")
            .args([
                "--package-name",
                "A",
                "--package-version",
                "latest",
                "--test-repo-mode",
                "local",
                "--repository-url",
                GRAPH,
            ])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Validation error"));
    }

    /// Exit code 2: Local graph file does not exist
    #[test]
    fn test_exit_code_missing_graph_file() {
        cargo_bin_cmd!("depgraph")
            .args(local_args("A", "/nonexistent/graph.txt"))
            .assert()
            .code(2)
            .stderr(predicate::str::contains("not found"));
    }

    /// Exit code 2: Remote mode with a non-http location
    #[test]
    fn test_exit_code_remote_non_http_location() {
        cargo_bin_cmd!("depgraph")
            .args([
                "--package-name",
                "requests",
                "--package-version",
                "2.31.0",
                "--test-repo-mode",
                "remote",
                "--repository-url",
                "pypi.org/pypi",
            ])
            .assert()
            .code(2);
    }

    /// Exit code 1: Remote index host other than the official one
    #[test]
    fn test_exit_code_foreign_index_host() {
        cargo_bin_cmd!("depgraph")
            .args([
                "--package-name",
                "requests",
                "--package-version",
                "2.31.0",
                "--test-repo-mode",
                "remote",
                "--repository-url",
                "https://mirror.example.com/pypi",
            ])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Policy violation"));
    }

    /// Exit code 1: Reverse query against a remote source
    #[test]
    fn test_exit_code_reverse_remote() {
        cargo_bin_cmd!("depgraph")
            .args([
                "--package-name",
                "requests",
                "--package-version",
                "2.31.0",
                "--test-repo-mode",
                "remote",
                "--reverse-mode",
                "true",
            ])
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "Reverse dependencies are not supported for remote sources",
            ))
            .stdout(predicate::str::is_empty());
    }

    /// Exit code 1: Graph path is a directory
    #[test]
    fn test_exit_code_graph_path_is_directory() {
        cargo_bin_cmd!("depgraph")
            .args(local_args("A", "tests/fixtures"))
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "Failed to read dependency graph file",
            ));
    }
}

mod local_query_tests {
    use super::*;

    #[test]
    fn test_forward_text_output() {
        cargo_bin_cmd!("depgraph")
            .args(local_args("A", GRAPH))
            .assert()
            .success()
            .stdout("Transitive dependencies of A:\n - B\n - C\n");
    }

    #[test]
    fn test_reverse_text_output() {
        cargo_bin_cmd!("depgraph")
            .args(local_args("A", GRAPH))
            .args(["--reverse-mode", "true"])
            .assert()
            .success()
            .stdout("Reverse dependencies of A:\n - C\n");
    }

    #[test]
    fn test_leaf_has_no_dependencies() {
        cargo_bin_cmd!("depgraph")
            .args(local_args("B", GRAPH))
            .assert()
            .success()
            .stdout(predicate::str::contains("(no dependencies)"));
    }

    #[test]
    fn test_unknown_package_is_empty_not_error() {
        cargo_bin_cmd!("depgraph")
            .args(local_args("Z", GRAPH))
            .assert()
            .success()
            .stdout(predicate::str::contains("(no dependencies)"));
    }

    #[test]
    fn test_cycle_terminates_and_excludes_start() {
        cargo_bin_cmd!("depgraph")
            .args(local_args("tls", SERVICES))
            .assert()
            .success()
            .stdout("Transitive dependencies of tls:\n - crypto\n");
    }

    #[test]
    fn test_reverse_over_services_graph() {
        cargo_bin_cmd!("depgraph")
            .args(local_args("tls", SERVICES))
            .args(["--reverse-mode", "true"])
            .assert()
            .success()
            .stdout("Reverse dependencies of tls:\n - cli\n - crypto\n - http\n - web\n");
    }

    #[test]
    fn test_show_graph() {
        cargo_bin_cmd!("depgraph")
            .args(local_args("A", GRAPH))
            .arg("--show-graph")
            .assert()
            .success()
            .stdout(predicate::str::starts_with(
                "Dependency graph:\n  A -> B, C\n  B -> (none)\n  C -> A\n\n",
            ));
    }

    #[test]
    fn test_progress_goes_to_stderr() {
        cargo_bin_cmd!("depgraph")
            .args(local_args("A", GRAPH))
            .assert()
            .success()
            .stderr(predicate::str::contains("Loading dependency graph from"))
            .stdout(predicate::str::contains("Loading").not());
    }

    #[test]
    fn test_json_output() {
        let output = cargo_bin_cmd!("depgraph")
            .args(local_args("A", GRAPH))
            .args(["--format", "json"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value["query"]["package"], "A");
        assert_eq!(value["query"]["direction"], "forward");
        assert_eq!(value["results"], serde_json::json!(["B", "C"]));
        assert_eq!(value["count"], 2);
        assert!(value.get("graph").is_none());
    }

    #[test]
    fn test_output_file() {
        let dir = TempDir::new().unwrap();
        let out_path = dir.path().join("report.txt");

        cargo_bin_cmd!("depgraph")
            .args(local_args("A", GRAPH))
            .args(["--output", out_path.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Output written to"));

        let content = fs::read_to_string(&out_path).unwrap();
        assert_eq!(content, "Transitive dependencies of A:\n - B\n - C\n");
    }

    #[test]
    fn test_output_file_missing_directory() {
        cargo_bin_cmd!("depgraph")
            .args(local_args("A", GRAPH))
            .args(["--output", "/nonexistent/dir/report.txt"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to write to file"));
    }
}
