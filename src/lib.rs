use std::path::Path;

use tracing::{debug, info, warn};

pub mod config;
pub mod recipe;
pub mod report;
pub mod validators;

use recipe::parsing;
use recipe::types::{Finding, RuleOptions};

pub use recipe::types::{RecipeType, Severity, Validator};
pub use recipe::validation::{
    validate_all, validate_all_with, validate_document, validate_document_with,
};
pub use report::ValidationReport;

/// Path used for findings that belong to the run rather than to a file.
pub const GLOBAL_PATH: &str = "Global";

/// Discovers, parses and validates every recipe under `root`.
pub fn lint_directory(root: &Path, options: &RuleOptions) -> ValidationReport {
    let mut report = ValidationReport::new();

    let recipe_files = match parsing::discover_recipes(root) {
        Ok(recipe_files) => recipe_files,
        Err(error) => {
            warn!(%error, "unable to discover recipes");
            report.push(Finding::error(GLOBAL_PATH, error.to_string()));
            return report;
        }
    };

    info!(count = recipe_files.len(), root = %root.display(), "found recipe files");

    for recipe_file in recipe_files {
        let path = parsing::relative_path(&recipe_file, root);
        debug!(path = %path, "loading recipe");

        let findings = match parsing::load_recipe(&recipe_file) {
            Ok(document) => validate_document_with(&path, &document, options),
            Err(error) => vec![Finding::error(&path, error.to_string())],
        };

        report.record(findings);
    }

    info!(
        files = report.files_scanned(),
        errors = report.error_count(),
        warnings = report.warning_count(),
        "validation finished"
    );

    report
}
