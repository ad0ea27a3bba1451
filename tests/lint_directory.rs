use std::fs;
use std::path::Path;

use recipelint::recipe::types::{Finding, RuleOptions, Severity};
use recipelint::{lint_directory, ValidationReport};

fn write(root: &Path, name: &str, content: &str) {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Unable to create dirs");
    }
    fs::write(path, content).expect("Unable to write recipe");
}

fn lint(root: &Path) -> ValidationReport {
    lint_directory(root, &RuleOptions::default())
}

#[test]
fn shaped_crafting_without_result() {
    let root = tempfile::tempdir().expect("Unable to create temp dir");
    write(root.path(), "shaped.json", r#"{"type":"minecraft:crafting_shaped"}"#);

    let report = lint(root.path());

    assert_eq!(report.files_scanned(), 1);
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.warning_count(), 0);
    assert!(report.errors().all(|error| error.message().contains("missing 'result' field")));
    assert!(!report.passed());
}

#[test]
fn mixing_with_molten_heat() {
    let root = tempfile::tempdir().expect("Unable to create temp dir");
    write(
        root.path(),
        "mixing/molten.json",
        r#"{"type":"create:mixing","ingredients":{"item":"a"},"results":[{"item":"b","count":1}],"heatRequirement":"molten"}"#,
    );

    let report = lint(root.path());

    assert_eq!(
        report.findings(),
        &[Finding::error(
            "mixing/molten.json",
            "Invalid heatRequirement: molten"
        )]
    );
    assert!(!report.passed());
}

#[test]
fn empty_directory_passes() {
    let root = tempfile::tempdir().expect("Unable to create temp dir");

    let report = lint(root.path());

    assert_eq!(report.files_scanned(), 0);
    assert!(report.findings().is_empty());
    assert!(report.passed());
}

#[test]
fn missing_directory_fails_once() {
    let root = tempfile::tempdir().expect("Unable to create temp dir");

    let report = lint(&root.path().join("recipes"));

    assert_eq!(report.files_scanned(), 0);
    assert_eq!(report.findings().len(), 1);
    assert_eq!(report.findings()[0].path(), "Global");
    assert!(report.findings()[0]
        .message()
        .starts_with("Recipes directory does not exist: "));
}

#[test]
fn parse_failure_is_one_error_per_file() {
    let root = tempfile::tempdir().expect("Unable to create temp dir");
    write(root.path(), "a.json", "{ not json");
    write(root.path(), "b.json", "[]");
    write(root.path(), "c.json", r#"{"type":"create:cutting"}"#);
    write(root.path(), "d.txt", "ignored");

    let report = lint(root.path());

    assert_eq!(report.files_scanned(), 3);
    let a: Vec<_> = report.findings().iter().filter(|f| f.path() == "a.json").collect();
    assert_eq!(a.len(), 1);
    assert!(a[0].message().starts_with("Failed to parse JSON: "));
    assert!(report
        .findings()
        .contains(&Finding::error("b.json", "Root element is not a JSON object")));
    assert_eq!(
        report
            .findings()
            .iter()
            .filter(|f| f.path() == "c.json")
            .map(Finding::message)
            .collect::<Vec<_>>(),
        vec![
            "Cutting recipe missing 'ingredients' field",
            "Cutting recipe missing 'results' field"
        ]
    );
}

#[test]
fn unknown_types_only_warn() {
    let root = tempfile::tempdir().expect("Unable to create temp dir");
    write(root.path(), "crushing.json", r#"{"type":"create:crushing","results":5}"#);

    let report = lint(root.path());

    assert_eq!(report.findings().len(), 1);
    assert_eq!(report.findings()[0].severity(), Severity::Warning);
    assert!(report.passed());
}

#[test]
fn strict_options_apply_to_directories() {
    let root = tempfile::tempdir().expect("Unable to create temp dir");
    write(
        root.path(),
        "deploying.json",
        r#"{"type":"create:deploying","ingredients":[{}],"results":[{"item":"x","count":-3}]}"#,
    );

    assert!(lint(root.path()).passed());

    let report = lint_directory(
        root.path(),
        &RuleOptions {
            strict_processing: true,
        },
    );
    assert_eq!(report.error_count(), 2);
}
