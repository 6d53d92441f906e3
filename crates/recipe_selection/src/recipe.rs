use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::diet::Diet;
use crate::error::SelectionError;

/// A catalog entry. `ingredients` maps an item name to the quantity the
/// recipe requires, in the same units the pantry tracks that item in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    #[serde(default)]
    pub diets: Vec<Diet>,
    #[serde(default)]
    pub ingredients: HashMap<String, f64>,
}

impl Recipe {
    pub fn matches_diet(&self, diet: Diet) -> bool {
        self.diets.contains(&diet)
    }
}

/// Load every `.json` recipe file under `dir`.
///
/// Files are read in file-name order so the catalog order is stable across
/// platforms; selection tie-breaking depends on that order. Non-JSON files
/// are ignored, but an unreadable or malformed JSON file fails the whole
/// load.
pub fn load_recipes(dir: impl AsRef<Path>) -> Result<Vec<Recipe>, SelectionError> {
    let dir = dir.as_ref();

    let entries = fs::read_dir(dir).map_err(|source| SelectionError::CatalogIo {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| SelectionError::CatalogIo {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut recipes = Vec::with_capacity(paths.len());
    for path in paths {
        let raw = fs::read_to_string(&path).map_err(|source| SelectionError::CatalogIo {
            path: path.clone(),
            source,
        })?;
        let recipe: Recipe =
            serde_json::from_str(&raw).map_err(|source| SelectionError::InvalidRecipe {
                path: path.clone(),
                source,
            })?;
        recipes.push(recipe);
    }

    tracing::debug!(count = recipes.len(), dir = %dir.display(), "loaded recipe catalog");

    Ok(recipes)
}
