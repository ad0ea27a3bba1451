use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::warn;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Recipes directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),
    #[error("Recipes path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

#[derive(Debug, Error)]
pub enum ParsingError {
    #[error("Failed to read file: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Recursively lists the `.json` files under `root`, sorted by path.
pub fn discover_recipes(root: &Path) -> Result<Vec<PathBuf>, LoadError> {
    if !root.exists() {
        return Err(LoadError::MissingDirectory(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(LoadError::NotADirectory(root.to_path_buf()));
    }

    let recipes = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(error) => {
                warn!(%error, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "json"))
        .map(|entry| entry.into_path())
        .collect();

    Ok(recipes)
}

pub fn parse_recipe(content: &str) -> Result<Value, ParsingError> {
    Ok(serde_json::from_str(content)?)
}

pub fn load_recipe(path: &Path) -> Result<Value, ParsingError> {
    let content = fs::read_to_string(path)?;
    parse_recipe(&content)
}

/// Path of `file` relative to `root`, `/`-separated.
pub fn relative_path(file: &Path, root: &Path) -> String {
    let relative = file.strip_prefix(root).unwrap_or(file);

    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn discovers_nested_json_files_only() {
        let root = tempfile::tempdir().expect("Unable to create temp dir");
        fs::create_dir_all(root.path().join("mixing/nested")).expect("Unable to create dirs");
        fs::write(root.path().join("b.json"), "{}").expect("Unable to write");
        fs::write(root.path().join("a.json"), "{}").expect("Unable to write");
        fs::write(root.path().join("mixing/nested/c.json"), "{}").expect("Unable to write");
        fs::write(root.path().join("notes.txt"), "").expect("Unable to write");
        fs::write(root.path().join("mixing/readme.md"), "").expect("Unable to write");

        let recipes = discover_recipes(root.path()).expect("Unable to discover");
        let relative: Vec<_> = recipes
            .iter()
            .map(|recipe| relative_path(recipe, root.path()))
            .collect();

        assert_eq!(relative, vec!["a.json", "b.json", "mixing/nested/c.json"]);
    }

    #[test]
    fn missing_directory_is_reported() {
        let root = tempfile::tempdir().expect("Unable to create temp dir");
        let missing = root.path().join("recipes");

        let error = discover_recipes(&missing).unwrap_err();

        assert!(matches!(error, LoadError::MissingDirectory(_)));
        assert!(error
            .to_string()
            .starts_with("Recipes directory does not exist: "));
    }

    #[test]
    fn file_root_is_not_a_directory() {
        let root = tempfile::tempdir().expect("Unable to create temp dir");
        let file = root.path().join("recipe.json");
        fs::write(&file, "{}").expect("Unable to write");

        assert!(matches!(
            discover_recipes(&file),
            Err(LoadError::NotADirectory(_))
        ));
    }

    #[test]
    fn parse_failure_is_prefixed() {
        let error = parse_recipe("{\"type\": ").unwrap_err();

        assert!(matches!(error, ParsingError::Json(_)));
        assert!(error.to_string().starts_with("Failed to parse JSON: "));
    }

    #[test]
    fn parse_ok_recipe() {
        let recipe = parse_recipe(r#"{"type": "create:pressing"}"#).expect("Unable to parse");

        assert_eq!(recipe["type"], "create:pressing");
    }

    #[test]
    fn unreadable_file_is_an_io_error() {
        let root = tempfile::tempdir().expect("Unable to create temp dir");

        let error = load_recipe(&root.path().join("gone.json")).unwrap_err();

        assert!(matches!(error, ParsingError::Io(_)));
        assert!(error.to_string().starts_with("Failed to read file: "));
    }

    #[test]
    fn relative_path_uses_forward_slashes() {
        let root = Path::new("recipes");
        let file = root.join("mixing").join("gunpowder.json");

        assert_eq!(relative_path(&file, root), "mixing/gunpowder.json");
    }
}
