use serde_json::{Map, Value};

pub mod ingredient_validator;
pub mod pattern_validator;
pub mod result_validator;

pub use ingredient_validator::IngredientValidator;
pub use pattern_validator::PatternValidator;
pub use result_validator::{ResultValidator, ResultsValidator};

/// Fields that accept either a single object or a list of objects.
#[derive(Debug, Clone, Copy)]
pub enum OneOrMany<'a> {
    Single(&'a Map<String, Value>),
    Many(&'a [Value]),
}

impl<'a> OneOrMany<'a> {
    pub fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Object(object) => Some(OneOrMany::Single(object)),
            Value::Array(items) => Some(OneOrMany::Many(items)),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => None,
        }
    }
}
