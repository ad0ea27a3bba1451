pub mod display;
pub mod parsing;
pub mod rules;
pub mod types;
pub mod validation;
