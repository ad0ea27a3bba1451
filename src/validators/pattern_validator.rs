use crate::recipe::types::{Finding, Validator};
use serde_json::{Map, Value};

/// Cross-checks a crafting grid `pattern` against the recipe's `key` table.
pub struct PatternValidator<'a> {
    pub key: Option<&'a Map<String, Value>>,
}

impl<'a> Validator for PatternValidator<'a> {
    fn validate(&self, pattern: &Value, path: &str) -> Vec<Finding> {
        match pattern {
            Value::Array(rows) => validate_pattern(rows, self.key, path),
            _ => vec![Finding::error(path, "Field 'pattern' must be a JSON array")],
        }
    }
}

/// Space marks an empty grid slot and never refers to a key.
const EMPTY_SLOT: char = ' ';

struct PatternKeyTable {
    used: Vec<char>,
    defined: Vec<char>,
}

impl PatternKeyTable {
    fn new(rows: &[&str], key: &Map<String, Value>) -> Self {
        let mut used = vec![];
        for symbol in rows.iter().flat_map(|row| row.chars()) {
            if symbol != EMPTY_SLOT && !used.contains(&symbol) {
                used.push(symbol);
            }
        }

        let defined = key.keys().filter_map(|name| single_char(name)).collect();

        PatternKeyTable { used, defined }
    }

    fn undefined(&self) -> impl Iterator<Item = &char> {
        self.used
            .iter()
            .filter(|symbol| !self.defined.contains(symbol))
    }

    fn unused(&self) -> impl Iterator<Item = &char> {
        self.defined
            .iter()
            .filter(|symbol| **symbol != EMPTY_SLOT && !self.used.contains(symbol))
    }
}

fn single_char(name: &str) -> Option<char> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Some(symbol),
        _ => None,
    }
}

fn validate_pattern(
    rows: &[Value],
    key: Option<&Map<String, Value>>,
    path: &str,
) -> Vec<Finding> {
    if rows.is_empty() {
        return vec![Finding::error(path, "Pattern array is empty")];
    }

    let mut findings = vec![];
    let mut string_rows = vec![];

    for row in rows {
        match row {
            Value::String(row) => string_rows.push(row.as_str()),
            _ => findings.push(Finding::error(path, "Pattern row must be a string")),
        }
    }

    let empty_key = Map::new();
    let table = PatternKeyTable::new(&string_rows, key.unwrap_or(&empty_key));

    findings.extend(table.undefined().map(|symbol| {
        Finding::error(
            path,
            format!(
                "Pattern uses key '{}' but it's not defined in 'key' object",
                symbol
            ),
        )
    }));

    findings.extend(table.unused().map(|symbol| {
        Finding::warning(
            path,
            format!("Key '{}' is defined but never used in pattern", symbol),
        )
    }));

    findings
}
