use recipelint::recipe::parsing::parse_recipe;
use recipelint::recipe::types::Finding;
use recipelint::validate_document;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct ValidationResult {
    pub result: bool,
    pub messages: Vec<String>,
}

fn lint_content(path: &str, content: &str) -> ValidationResult {
    let findings = match parse_recipe(content) {
        Ok(document) => validate_document(path, &document),
        Err(error) => vec![Finding::error(path, error.to_string())],
    };

    let result = !findings.iter().any(Finding::is_error);
    let messages = match findings.is_empty() {
        true => vec![String::from("Ok!")],
        false => findings.iter().map(Finding::to_string).collect(),
    };

    ValidationResult { result, messages }
}

#[wasm_bindgen]
pub fn lint(path: String, content: String) -> JsValue {
    serde_wasm_bindgen::to_value(&lint_content(&path, &content)).unwrap_or(JsValue::NULL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lint_valid_recipe() {
        let result = lint_content(
            "press.json",
            r#"{"type": "create:pressing", "ingredients": [{"item": "a"}], "results": [{"item": "b"}]}"#,
        );

        assert_eq!(
            result,
            ValidationResult {
                result: true,
                messages: vec![String::from("Ok!")]
            }
        );
    }

    #[test]
    fn lint_broken_json() {
        let result = lint_content("press.json", "{");

        assert!(!result.result);
        assert!(result.messages[0].starts_with("[ERROR] press.json: Failed to parse JSON: "));
    }

    #[test]
    fn warnings_do_not_fail() {
        let result = lint_content("odd.json", r#"{"type": "create:haunting"}"#);

        assert!(result.result);
        assert_eq!(
            result.messages,
            vec!["[WARNING] odd.json: Unknown recipe type: create:haunting"]
        );
    }
}
