use std::fmt::Write;

use colored::*;
use serde_json::Value;

use super::types::RecipeType;
use crate::report::ValidationReport;

fn type_header(head: &str) -> String {
    let padding = 32usize.saturating_sub(head.len() + 4);
    let mut header = format!("  {}  ", head);
    for _ in 0..padding {
        header.push(' ');
    }

    header.on_green().black().to_string()
}

pub fn error_header(head: &str) -> String {
    format!("  {}  ", head).on_red().black().to_string()
}

pub fn warning_header(head: &str) -> String {
    format!("  {}  ", head).on_yellow().black().to_string()
}

pub fn render_report(report: &ValidationReport) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "=== Validating Recipes ===");
    let _ = writeln!(output, "Found {} recipe files", report.files_scanned());

    if report.warning_count() > 0 {
        let _ = writeln!(output, "\n{}", warning_header("=== Warnings ==="));
        report.warnings().for_each(|warning| {
            let _ = writeln!(output, "{}", warning);
        });
    }

    if report.error_count() > 0 {
        let _ = writeln!(output, "\n{}", error_header("=== Errors ==="));
        report.errors().for_each(|error| {
            let _ = writeln!(output, "{}", error);
        });
        let _ = writeln!(
            output,
            "\n{}",
            format!("Found {} error(s) in recipes", report.error_count()).red()
        );
    } else {
        let _ = writeln!(output, "\n=== Validation Complete ===");
        let _ = writeln!(
            output,
            "{}",
            format!("All {} recipes are valid!", report.files_scanned()).green()
        );
    }

    output
}

pub fn print_report(report: &ValidationReport) {
    print!("{}", render_report(report));
}

pub fn print_json(report: &ValidationReport) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Lists the discriminator, rule-set and required-field presence of one recipe.
pub fn print_outline(path: &str, document: &Value) {
    let discriminator = document.get("type").and_then(Value::as_str);

    match discriminator.and_then(RecipeType::from_discriminator) {
        Some(recipe_type) => {
            println!("{}  {}", type_header(recipe_type.discriminator()), path);
            println!("{}  {}", type_header("Rule-set"), recipe_type.label());
            println!("\n{}", type_header("Required fields"));
            recipe_type.required_fields().iter().for_each(|field| {
                let mark = match document.get(*field) {
                    Some(_) => "present".green(),
                    None => "missing".red(),
                };
                println!("  {:<20}{}", field, mark);
            });
        }
        None => {
            println!(
                "{}  {}",
                warning_header(discriminator.unwrap_or("no type")),
                path
            );
            println!("  No rule-set is registered for this recipe");
        }
    }
}

pub fn print_types() {
    RecipeType::ALL.into_iter().for_each(|recipe_type| {
        println!(
            "{}  {}",
            type_header(recipe_type.discriminator()),
            recipe_type.required_fields().join(", ")
        );
    });
}
