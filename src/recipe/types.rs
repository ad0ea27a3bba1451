use std::fmt;

use serde::Serialize;
use serde_json::Value;

pub trait Validator {
    fn validate(&self, value: &Value, path: &str) -> Vec<Finding>;
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
        }
    }
}

/// A single issue found in one recipe file.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    path: String,
    severity: Severity,
    message: String,
}

impl Finding {
    pub fn error(path: &str, message: impl Into<String>) -> Self {
        debug_assert!(!path.is_empty(), "finding path must not be empty");
        Finding {
            path: path.to_string(),
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn warning(path: &str, message: impl Into<String>) -> Self {
        debug_assert!(!path.is_empty(), "finding path must not be empty");
        Finding {
            path: path.to_string(),
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.path, self.message)
    }
}

/// Recipe discriminators with a registered rule-set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeType {
    MechanicalCrafting,
    Cutting,
    Mixing,
    SequencedAssembly,
    Filling,
    Emptying,
    Pressing,
    Deploying,
    CraftingShaped,
    CraftingShapeless,
}

impl RecipeType {
    pub const ALL: [RecipeType; 10] = [
        RecipeType::MechanicalCrafting,
        RecipeType::Cutting,
        RecipeType::Mixing,
        RecipeType::SequencedAssembly,
        RecipeType::Filling,
        RecipeType::Emptying,
        RecipeType::Pressing,
        RecipeType::Deploying,
        RecipeType::CraftingShaped,
        RecipeType::CraftingShapeless,
    ];

    pub fn from_discriminator(discriminator: &str) -> Option<RecipeType> {
        RecipeType::ALL
            .into_iter()
            .find(|recipe_type| recipe_type.discriminator() == discriminator)
    }

    pub fn discriminator(&self) -> &'static str {
        match self {
            RecipeType::MechanicalCrafting => "create:mechanical_crafting",
            RecipeType::Cutting => "create:cutting",
            RecipeType::Mixing => "create:mixing",
            RecipeType::SequencedAssembly => "create:sequenced_assembly",
            RecipeType::Filling => "create:filling",
            RecipeType::Emptying => "create:emptying",
            RecipeType::Pressing => "create:pressing",
            RecipeType::Deploying => "create:deploying",
            RecipeType::CraftingShaped => "minecraft:crafting_shaped",
            RecipeType::CraftingShapeless => "minecraft:crafting_shapeless",
        }
    }

    /// Prefix used in "missing field" messages.
    pub fn label(&self) -> &'static str {
        match self {
            RecipeType::MechanicalCrafting => "Mechanical crafting",
            RecipeType::Cutting => "Cutting recipe",
            RecipeType::Mixing => "Mixing recipe",
            RecipeType::SequencedAssembly => "Sequenced assembly",
            RecipeType::Filling => "Filling recipe",
            RecipeType::Emptying => "Emptying recipe",
            RecipeType::Pressing => "Pressing recipe",
            RecipeType::Deploying => "Deploying recipe",
            RecipeType::CraftingShaped | RecipeType::CraftingShapeless => "Vanilla crafting",
        }
    }

    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            RecipeType::MechanicalCrafting => &["key", "pattern", "result"],
            RecipeType::SequencedAssembly => &[
                "ingredient",
                "transitionalItem",
                "sequence",
                "results",
                "loops",
            ],
            RecipeType::Cutting
            | RecipeType::Mixing
            | RecipeType::Filling
            | RecipeType::Emptying
            | RecipeType::Pressing
            | RecipeType::Deploying => &["ingredients", "results"],
            RecipeType::CraftingShaped | RecipeType::CraftingShapeless => &["result"],
        }
    }
}

impl fmt::Display for RecipeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.discriminator())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleOptions {
    /// Check ingredient and result shapes for filling, emptying, pressing and deploying.
    pub strict_processing: bool,
}
