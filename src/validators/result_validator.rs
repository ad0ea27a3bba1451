use crate::recipe::types::{Finding, Validator};
use serde_json::{Map, Value};

/// Validates a single `result` object.
pub struct ResultValidator {}

/// Validates a `results` array, element by element.
pub struct ResultsValidator {}

impl Validator for ResultValidator {
    fn validate(&self, result: &Value, path: &str) -> Vec<Finding> {
        match result {
            Value::Object(result) => validate_result(result, path),
            _ => vec![Finding::error(path, "Result must be a JSON object")],
        }
    }
}

impl Validator for ResultsValidator {
    fn validate(&self, results: &Value, path: &str) -> Vec<Finding> {
        match results {
            Value::Array(results) => validate_results(results, path),
            _ => vec![Finding::error(path, "Field 'results' must be a JSON array")],
        }
    }
}

fn validate_results(results: &[Value], path: &str) -> Vec<Finding> {
    let mut findings = vec![];

    if results.is_empty() {
        findings.push(Finding::warning(path, "Results array is empty"));
    }

    for result in results {
        findings.extend(ResultValidator {}.validate(result, path));
    }

    findings
}

fn validate_result(result: &Map<String, Value>, path: &str) -> Vec<Finding> {
    let mut findings = vec![];

    if !result.contains_key("item") && !result.contains_key("fluid") {
        findings.push(Finding::error(
            path,
            "Result must have 'item' or 'fluid' field",
        ));
    }

    for field in ["count", "amount"] {
        // Non-numeric quantities are left alone.
        if let Some(Value::Number(quantity)) = result.get(field) {
            if quantity.as_f64().is_some_and(|quantity| quantity <= 0.0) {
                findings.push(Finding::error(
                    path,
                    format!("Result {} must be positive, got: {}", field, quantity),
                ));
            }
        }
    }

    findings
}
