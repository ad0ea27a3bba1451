use serde_json::Value;
use tracing::debug;

use crate::recipe::rules::RuleSet;
use crate::recipe::types::{Finding, RecipeType, RuleOptions, Validator};
use crate::report::ValidationReport;

/// Validates one parsed recipe with the default rule options.
///
/// `path` identifies the file in every finding and must not be empty.
pub fn validate_document(path: &str, document: &Value) -> Vec<Finding> {
    validate_document_with(path, document, &RuleOptions::default())
}

pub fn validate_document_with(path: &str, document: &Value, options: &RuleOptions) -> Vec<Finding> {
    let Value::Object(recipe) = document else {
        return vec![Finding::error(path, "Root element is not a JSON object")];
    };

    let recipe_type = match recipe.get("type") {
        Some(Value::String(discriminator)) => match RecipeType::from_discriminator(discriminator) {
            Some(recipe_type) => recipe_type,
            None => {
                debug!(path, discriminator = %discriminator, "no rule-set for recipe type");
                return vec![Finding::warning(
                    path,
                    format!("Unknown recipe type: {}", discriminator),
                )];
            }
        },
        Some(discriminator @ (Value::Number(_) | Value::Bool(_))) => {
            return vec![Finding::warning(
                path,
                format!("Unknown recipe type: {}", discriminator),
            )];
        }
        Some(Value::Null | Value::Array(_) | Value::Object(_)) => {
            return vec![Finding::error(path, "Field 'type' must be a string")];
        }
        None => return vec![Finding::error(path, "Missing required field: 'type'")],
    };

    debug!(path, recipe_type = %recipe_type, "validating recipe");

    RuleSet {
        recipe_type,
        options: *options,
    }
    .validate(document, path)
}

/// Validates every document in order and merges the findings into one report.
pub fn validate_all<I, P>(documents: I) -> ValidationReport
where
    I: IntoIterator<Item = (P, Value)>,
    P: AsRef<str>,
{
    validate_all_with(documents, &RuleOptions::default())
}

pub fn validate_all_with<I, P>(documents: I, options: &RuleOptions) -> ValidationReport
where
    I: IntoIterator<Item = (P, Value)>,
    P: AsRef<str>,
{
    let mut report = ValidationReport::new();

    for (path, document) in documents {
        report.record(validate_document_with(path.as_ref(), &document, options));
    }

    report
}
