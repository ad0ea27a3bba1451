use crate::recipe::types::{Finding, Validator};
use crate::validators::OneOrMany;
use serde_json::{Map, Value};

const INGREDIENT_KINDS: [&str; 3] = ["item", "tag", "fluid"];

pub struct IngredientValidator {}

impl Validator for IngredientValidator {
    fn validate(&self, ingredients: &Value, path: &str) -> Vec<Finding> {
        validate_ingredients(ingredients, path)
    }
}

fn validate_ingredients(ingredients: &Value, path: &str) -> Vec<Finding> {
    match OneOrMany::from_value(ingredients) {
        Some(OneOrMany::Single(ingredient)) => validate_ingredient(ingredient, path),
        Some(OneOrMany::Many(ingredients)) => {
            let mut findings = vec![];

            if ingredients.is_empty() {
                findings.push(Finding::warning(path, "Ingredients array is empty"));
            }

            for ingredient in ingredients {
                match ingredient {
                    Value::Object(ingredient) => {
                        findings.extend(validate_ingredient(ingredient, path))
                    }
                    _ => findings.push(Finding::error(path, "Ingredient must be a JSON object")),
                }
            }

            findings
        }
        None => vec![Finding::error(
            path,
            "Ingredients must be a JSON object or array",
        )],
    }
}

fn validate_ingredient(ingredient: &Map<String, Value>, path: &str) -> Vec<Finding> {
    let kinds = INGREDIENT_KINDS
        .iter()
        .filter(|kind| ingredient.contains_key(**kind))
        .count();

    match kinds {
        0 => vec![Finding::error(
            path,
            "Ingredient must have 'item', 'tag', or 'fluid' field",
        )],
        1 => vec![],
        _ => vec![Finding::warning(
            path,
            "Ingredient has multiple type fields (item/tag/fluid)",
        )],
    }
}
