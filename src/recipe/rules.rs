use serde_json::{Map, Value};

use crate::recipe::types::{Finding, RecipeType, RuleOptions, Validator};
use crate::validators::{IngredientValidator, PatternValidator, ResultValidator, ResultsValidator};

const HEAT_REQUIREMENTS: [&str; 3] = ["none", "heated", "superheated"];

/// The checks registered for one recipe discriminator.
pub struct RuleSet {
    pub recipe_type: RecipeType,
    pub options: RuleOptions,
}

impl Validator for RuleSet {
    fn validate(&self, recipe: &Value, path: &str) -> Vec<Finding> {
        let Value::Object(recipe) = recipe else {
            return vec![Finding::error(path, "Root element is not a JSON object")];
        };

        match self.recipe_type {
            RecipeType::MechanicalCrafting => validate_mechanical_crafting(recipe, path),
            RecipeType::Cutting => validate_cutting(recipe, path),
            RecipeType::Mixing => validate_mixing(recipe, path),
            RecipeType::SequencedAssembly => validate_sequenced_assembly(recipe, path),
            RecipeType::Filling
            | RecipeType::Emptying
            | RecipeType::Pressing
            | RecipeType::Deploying => {
                if self.options.strict_processing {
                    validate_processing(self.recipe_type, recipe, path)
                } else {
                    validate_presence(self.recipe_type, recipe, path)
                }
            }
            RecipeType::CraftingShaped | RecipeType::CraftingShapeless => {
                validate_presence(self.recipe_type, recipe, path)
            }
        }
    }
}

fn missing_field(recipe_type: RecipeType, field: &str, path: &str) -> Finding {
    Finding::error(
        path,
        format!("{} missing '{}' field", recipe_type.label(), field),
    )
}

fn is_scalar(value: &Value) -> bool {
    match value {
        Value::Bool(_) | Value::Number(_) | Value::String(_) => true,
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

fn validate_presence(
    recipe_type: RecipeType,
    recipe: &Map<String, Value>,
    path: &str,
) -> Vec<Finding> {
    recipe_type
        .required_fields()
        .iter()
        .filter(|field| !recipe.contains_key(**field))
        .map(|field| missing_field(recipe_type, field, path))
        .collect()
}

fn validate_mechanical_crafting(recipe: &Map<String, Value>, path: &str) -> Vec<Finding> {
    let recipe_type = RecipeType::MechanicalCrafting;
    let mut findings = vec![];

    let key = match recipe.get("key") {
        Some(Value::Object(key)) => Some(key),
        Some(_) => {
            findings.push(Finding::error(path, "Field 'key' must be a JSON object"));
            None
        }
        None => {
            findings.push(missing_field(recipe_type, "key", path));
            None
        }
    };

    match recipe.get("pattern") {
        Some(pattern) => findings.extend(PatternValidator { key }.validate(pattern, path)),
        None => findings.push(missing_field(recipe_type, "pattern", path)),
    }

    match recipe.get("result") {
        Some(result) => findings.extend(ResultValidator {}.validate(result, path)),
        None => findings.push(missing_field(recipe_type, "result", path)),
    }

    if let Some(accept_mirrored) = recipe.get("acceptMirrored") {
        if !is_scalar(accept_mirrored) {
            findings.push(Finding::error(
                path,
                "Field 'acceptMirrored' must be a boolean",
            ));
        }
    }

    findings
}

/// Ingredients and results checks shared by the processing recipes.
fn validate_processing(
    recipe_type: RecipeType,
    recipe: &Map<String, Value>,
    path: &str,
) -> Vec<Finding> {
    let mut findings = vec![];

    match recipe.get("ingredients") {
        Some(ingredients) => findings.extend(IngredientValidator {}.validate(ingredients, path)),
        None => findings.push(missing_field(recipe_type, "ingredients", path)),
    }

    match recipe.get("results") {
        Some(results) => findings.extend(ResultsValidator {}.validate(results, path)),
        None => findings.push(missing_field(recipe_type, "results", path)),
    }

    findings
}

fn validate_cutting(recipe: &Map<String, Value>, path: &str) -> Vec<Finding> {
    let mut findings = validate_processing(RecipeType::Cutting, recipe, path);

    if let Some(processing_time) = recipe.get("processingTime") {
        if !processing_time.is_number() {
            findings.push(Finding::error(
                path,
                "Field 'processingTime' must be a number",
            ));
        }
    }

    findings
}

fn validate_mixing(recipe: &Map<String, Value>, path: &str) -> Vec<Finding> {
    let mut findings = validate_processing(RecipeType::Mixing, recipe, path);

    match recipe.get("heatRequirement") {
        Some(Value::String(heat)) if HEAT_REQUIREMENTS.contains(&heat.as_str()) => {}
        Some(Value::String(heat)) => findings.push(Finding::error(
            path,
            format!("Invalid heatRequirement: {}", heat),
        )),
        Some(heat) => findings.push(Finding::error(
            path,
            format!("Invalid heatRequirement: {}", heat),
        )),
        None => {}
    }

    findings
}

fn validate_sequenced_assembly(recipe: &Map<String, Value>, path: &str) -> Vec<Finding> {
    let mut findings = validate_presence(RecipeType::SequencedAssembly, recipe, path);

    if let Some(sequence) = recipe.get("sequence") {
        if !sequence.is_array() {
            findings.push(Finding::error(path, "Field 'sequence' must be a JSON array"));
        }
    }

    findings
}
